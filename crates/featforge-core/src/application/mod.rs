//! Application layer for featforge.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerationService, materializer,
//!   shared-artifact patcher)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Strategies**: the DI/Flutter strategy seams and their registry
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod layout;
pub mod ports;
pub mod services;
pub mod strategy;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export main services
pub use services::{FileTreeMaterializer, GenerationReport, GenerationService, SharedArtifactPatcher};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, NullProgress, ProgressSink};

pub use error::ApplicationError;
pub use strategy::{DiStrategy, FlutterStrategy, StrategyRegistry};

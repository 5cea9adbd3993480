// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for featforge.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O lives behind ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Pure transforms**: name derivation, template rendering and artifact
//!   patching are referentially transparent string functions

pub mod config;
pub mod error;
pub mod feature_tree;
pub mod names;
pub mod patch;
pub mod paths;
pub mod template;
pub mod value_objects;

// Re-exports for convenience
pub use config::GenerationConfig;
pub use error::{DomainError, ErrorCategory};
pub use feature_tree::{DirToEnsure, FeatureTree, FileToEnsure, TreeEntry};
pub use names::NameForms;
pub use patch::RegistryStyle;
pub use paths::PathProfile;
pub use template::TemplateContext;
pub use value_objects::{DependencyInjection, Language, StateManagement};

//! featforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the featforge
//! Clean Architecture scaffolding tool, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          featforge-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (GenerationService, Materializer,      │
//! │        SharedArtifactPatcher)           │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     Application Ports & Strategies      │
//! │  (Filesystem, ProgressSink, DiStrategy, │
//! │            FlutterStrategy)             │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    featforge-adapters (Infrastructure)  │
//! │  (LocalFilesystem, template catalogs,   │
//! │        built-in strategy set)           │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (GenerationConfig, NameForms, patch    │
//! │   transforms, FeatureTree, profiles)    │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use featforge_core::prelude::*;
//! # fn registry() -> StrategyRegistry { StrategyRegistry::new() }
//! # fn filesystem() -> Box<dyn Filesystem> { unimplemented!() }
//!
//! // 1. Build a validated config
//! let config = GenerationConfig::new(
//!     "order history",
//!     Language::Kotlin,
//!     DependencyInjection::Hilt,
//!     None,
//! ).unwrap();
//!
//! // 2. Use the generation service (with injected adapters)
//! let service = GenerationService::new(filesystem(), registry());
//! service.generate(&config, "./my-app".as_ref(), &NullProgress).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DiStrategy, FileTreeMaterializer, Filesystem, FlutterStrategy, GenerationReport,
        GenerationService, NullProgress, ProgressSink, SharedArtifactPatcher, StrategyRegistry,
    };
    pub use crate::domain::{
        DependencyInjection, FeatureTree, FileToEnsure, GenerationConfig, Language, NameForms,
        PathProfile, StateManagement, TemplateContext,
    };
    pub use crate::error::{ForgeError, ForgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

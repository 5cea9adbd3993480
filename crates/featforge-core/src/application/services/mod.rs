//! Application services: orchestration over ports and strategies.

pub mod artifact_patcher;
pub mod generation_service;
pub mod materializer;

pub use artifact_patcher::SharedArtifactPatcher;
pub use generation_service::{GenerationReport, GenerationService};
pub use materializer::FileTreeMaterializer;

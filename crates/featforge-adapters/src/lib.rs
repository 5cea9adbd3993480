//! Infrastructure adapters for featforge.
//!
//! This crate implements the ports defined in
//! `featforge_core::application::ports` and supplies the built-in template
//! catalogs and generation strategies. It contains all external
//! dependencies and I/O operations.

pub mod filesystem;
pub mod strategies;
pub mod templates;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use strategies::builtin_registry;

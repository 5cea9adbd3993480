//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `featforge-adapters` crate provides implementations.

use crate::error::ForgeResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `featforge_adapters::filesystem::LocalFilesystem` (production)
/// - `featforge_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Generation paths are project-relative; the orchestrator joins them onto
///   the project root before they reach this port.
/// - `read_file` returns `None` for a missing file rather than an error;
///   absent shared artifacts are an expected, silently-skipped case for the
///   patcher.
/// - There is deliberately no `remove` operation: generation only ever
///   creates and patches, never deletes.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Idempotent.
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()>;

    /// Write content to a file, creating or replacing it.
    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()>;

    /// Read a file's full text. `None` when the file does not exist.
    fn read_file(&self, path: &Path) -> ForgeResult<Option<String>>;

    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;
}

/// Port for advisory progress reporting.
///
/// Cooperative and single-threaded: the orchestrator calls `update` at a few
/// fixed points during a run. Reporting is best-effort display only;
/// cancellation is not supported, and implementations must never fail the
/// generation.
pub trait ProgressSink: Send + Sync {
    /// Report progress as a fraction in `0.0..=1.0` with a short message.
    fn update(&self, fraction: f64, message: &str);
}

/// A sink that drops all progress updates (tests, `--quiet`).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn update(&self, _fraction: f64, _message: &str) {}
}

//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during generation orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Strategy resolution failed for the given combination.
    #[error("Strategy resolution failed: {reason}")]
    StrategyResolution { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Another generation is already running.
    ///
    /// Concurrent generations are rejected, not queued; the caller should
    /// simply retry once the in-flight run finishes.
    #[error("A generation is already in progress")]
    GenerationInProgress,

    /// Validation failed (application-level, not domain).
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::StrategyResolution { reason } => vec![
                format!("Resolution failed: {}", reason),
                "Run: featforge list to see supported combinations".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the project root exists".into(),
            ],
            Self::GenerationInProgress => vec![
                "Another generation is still running".into(),
                "Wait for it to finish and try again".into(),
            ],
            Self::ValidationFailed(_) => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::StrategyResolution { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::GenerationInProgress => ErrorCategory::Busy,
            Self::ValidationFailed(_) => ErrorCategory::Validation,
        }
    }
}

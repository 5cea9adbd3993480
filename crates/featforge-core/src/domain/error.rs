// ============================================================================
// domain/error.rs - DOMAIN ERROR TAXONOMY
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (plain data, no live resources)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid generation config: {0}")]
    InvalidConfig(String),

    #[error("Feature name is empty")]
    EmptyFeatureName,

    #[error("state management '{state}' is only valid for Flutter, not {language}")]
    StateManagementNotAllowed { language: String, state: String },

    #[error("Flutter generation requires a state management selection")]
    MissingStateManagement,

    // ========================================================================
    // Resolution Errors
    // ========================================================================
    #[error("no DI strategy registered for language={language}, di={di}")]
    UnsupportedDiCombination { language: String, di: String },

    #[error("no Flutter strategy registered for state={state}, di={di}")]
    UnsupportedFlutterCombination { state: String, di: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidConfig(msg) => vec![
                "Check your generation configuration".into(),
                format!("Details: {}", msg),
            ],
            Self::EmptyFeatureName => vec![
                "Provide a non-empty feature name".into(),
                "Examples: \"order history\", \"cart\", \"user_profile\"".into(),
            ],
            Self::StateManagementNotAllowed { language, .. } => vec![
                format!("{} targets do not take --state", language),
                "Drop the --state flag, or switch to --lang flutter".into(),
            ],
            Self::MissingStateManagement => vec![
                "Flutter features need a presentation pattern".into(),
                "Pass --state riverpod | provider | bloc | cubit".into(),
            ],
            Self::UnsupportedDiCombination { language, di } => vec![
                format!("'{}' cannot be wired with {} DI", language, di),
                match language.as_str() {
                    "kotlin" => "  • kotlin supports: hilt, koin".into(),
                    "java" => "  • java supports: dagger".into(),
                    _ => "  • run: featforge list".into(),
                },
            ],
            Self::UnsupportedFlutterCombination { state, di } => vec![
                format!("'{}' state management cannot be wired with {} DI", state, di),
                "Flutter strategies support: getit, none".into(),
                "Try: featforge list".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidConfig(_)
            | Self::EmptyFeatureName
            | Self::StateManagementNotAllowed { .. }
            | Self::MissingStateManagement => ErrorCategory::Validation,
            Self::UnsupportedDiCombination { .. } | Self::UnsupportedFlutterCombination { .. } => {
                ErrorCategory::Resolution
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Resolution,
    Internal,
}

//! Generation configuration value object.
//!
//! One [`GenerationConfig`] is built per generation invocation from CLI
//! input, validated up front, and consumed read-only by every downstream
//! component. It is never mutated after construction.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::DomainError;
use crate::domain::names::NameForms;
use crate::domain::value_objects::{DependencyInjection, Language, StateManagement};

/// Immutable configuration for one feature generation.
///
/// Invariants (enforced by [`GenerationConfig::new`]):
/// - the feature name is non-blank;
/// - `state_management` is present iff `language == Flutter`;
/// - the DI kind belongs to the chosen language's family (whether the exact
///   pair is *registered* is the strategy registry's decision at resolution
///   time; this check only rejects combinations that can never be valid).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    feature_name: String,
    language: Language,
    dependency_injection: DependencyInjection,
    state_management: Option<StateManagement>,
}

impl GenerationConfig {
    /// Build and validate a configuration.
    pub fn new(
        feature_name: impl Into<String>,
        language: Language,
        dependency_injection: DependencyInjection,
        state_management: Option<StateManagement>,
    ) -> Result<Self, DomainError> {
        let config = Self {
            feature_name: feature_name.into(),
            language,
            dependency_injection,
            state_management,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.feature_name.trim().is_empty() {
            return Err(DomainError::EmptyFeatureName);
        }

        match (self.language, self.state_management) {
            (Language::Flutter, None) => return Err(DomainError::MissingStateManagement),
            (lang, Some(state)) if !lang.requires_state_management() => {
                return Err(DomainError::StateManagementNotAllowed {
                    language: lang.to_string(),
                    state: state.to_string(),
                });
            }
            _ => {}
        }

        let di_fits = match self.language {
            Language::Kotlin | Language::Java => self.dependency_injection.is_android_kind(),
            Language::Flutter => self.dependency_injection.is_flutter_kind(),
        };
        if !di_fits {
            return Err(DomainError::UnsupportedDiCombination {
                language: self.language.to_string(),
                di: self.dependency_injection.to_string(),
            });
        }

        Ok(())
    }

    pub fn feature_name(&self) -> &str {
        &self.feature_name
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn dependency_injection(&self) -> DependencyInjection {
        self.dependency_injection
    }

    pub fn state_management(&self) -> Option<StateManagement> {
        self.state_management
    }

    /// Derive the casing variants for this feature's name.
    pub fn name_forms(&self) -> NameForms {
        NameForms::derive(&self.feature_name)
    }
}

impl fmt::Display for GenerationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, di={}",
            self.feature_name, self.language, self.dependency_injection
        )?;
        if let Some(state) = self.state_management {
            write!(f, ", state={state}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kotlin_hilt_is_valid() {
        let config = GenerationConfig::new(
            "order history",
            Language::Kotlin,
            DependencyInjection::Hilt,
            None,
        )
        .unwrap();
        assert_eq!(config.name_forms().pascal, "OrderHistory");
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = GenerationConfig::new("  ", Language::Kotlin, DependencyInjection::Hilt, None)
            .unwrap_err();
        assert_eq!(err, DomainError::EmptyFeatureName);
    }

    #[test]
    fn flutter_without_state_is_rejected() {
        let err =
            GenerationConfig::new("cart", Language::Flutter, DependencyInjection::GetIt, None)
                .unwrap_err();
        assert_eq!(err, DomainError::MissingStateManagement);
    }

    #[test]
    fn android_with_state_is_rejected() {
        let err = GenerationConfig::new(
            "cart",
            Language::Kotlin,
            DependencyInjection::Hilt,
            Some(StateManagement::Riverpod),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DomainError::StateManagementNotAllowed { .. }
        ));
    }

    #[test]
    fn flutter_with_android_di_is_rejected() {
        let err = GenerationConfig::new(
            "cart",
            Language::Flutter,
            DependencyInjection::Hilt,
            Some(StateManagement::Riverpod),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::UnsupportedDiCombination { .. }));
    }

    #[test]
    fn java_with_flutter_di_is_rejected() {
        let err =
            GenerationConfig::new("cart", Language::Java, DependencyInjection::GetIt, None)
                .unwrap_err();
        assert!(matches!(err, DomainError::UnsupportedDiCombination { .. }));
    }

    #[test]
    fn flutter_riverpod_getit_is_valid() {
        let config = GenerationConfig::new(
            "cart",
            Language::Flutter,
            DependencyInjection::GetIt,
            Some(StateManagement::Riverpod),
        )
        .unwrap();
        assert_eq!(config.state_management(), Some(StateManagement::Riverpod));
    }
}

//! Domain value objects: Language, DependencyInjection, StateManagement.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Which combinations are valid together is a property of the strategy
//! registry, not of the enums; the only compatibility knowledge kept here is
//! the intrinsic "this DI kind belongs to this target family" rule used by
//! [`GenerationConfig::validate`](crate::domain::GenerationConfig::validate)
//! for early, user-friendly rejection.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Language ─────────────────────────────────────────────────────────────────

/// A supported generation target.
///
/// `Kotlin` and `Java` share the Android MVVM feature layout; `Flutter` uses
/// its own `lib/features` layout and requires a state-management choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Kotlin,
    Java,
    Flutter,
}

impl Language {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Kotlin => "kotlin",
            Self::Java => "java",
            Self::Flutter => "flutter",
        }
    }

    pub const fn file_extension(&self) -> &'static str {
        match self {
            Self::Kotlin => "kt",
            Self::Java => "java",
            Self::Flutter => "dart",
        }
    }

    /// Whether this target requires a state-management selection.
    pub const fn requires_state_management(self) -> bool {
        matches!(self, Self::Flutter)
    }

    /// Whether this target shares the Android source layout
    /// (`app/src/main/java`, layout XML, Room database, nav graph).
    pub const fn is_android(self) -> bool {
        matches!(self, Self::Kotlin | Self::Java)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kotlin" | "kt" => Ok(Self::Kotlin),
            "java" => Ok(Self::Java),
            "flutter" | "dart" => Ok(Self::Flutter),
            other => Err(DomainError::InvalidConfig(format!(
                "unknown language: {other}"
            ))),
        }
    }
}

// ── DependencyInjection ───────────────────────────────────────────────────────

/// The dependency-injection mechanism wired into generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyInjection {
    /// Kotlin/Android framework-managed injection.
    Hilt,
    /// Kotlin service-locator style modules.
    Koin,
    /// Java compile-time injection.
    Dagger,
    /// Flutter service locator.
    GetIt,
    /// No DI; generated code carries "provide manually" stubs.
    None,
}

impl DependencyInjection {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hilt => "hilt",
            Self::Koin => "koin",
            Self::Dagger => "dagger",
            Self::GetIt => "getit",
            Self::None => "none",
        }
    }

    /// Whether this DI kind targets the Android family at all.
    ///
    /// This is an intrinsic property of the kind (GetIt is always a Flutter
    /// locator), not a statement that every Android (language, DI) pair is
    /// registered; that remains the registry's call.
    pub const fn is_android_kind(self) -> bool {
        matches!(self, Self::Hilt | Self::Koin | Self::Dagger)
    }

    /// Whether this DI kind is usable from a Flutter target.
    pub const fn is_flutter_kind(self) -> bool {
        matches!(self, Self::GetIt | Self::None)
    }
}

impl fmt::Display for DependencyInjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DependencyInjection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hilt" => Ok(Self::Hilt),
            "koin" => Ok(Self::Koin),
            "dagger" => Ok(Self::Dagger),
            "getit" | "get_it" | "get-it" => Ok(Self::GetIt),
            "none" => Ok(Self::None),
            other => Err(DomainError::InvalidConfig(format!(
                "unknown dependency injection kind: {other}"
            ))),
        }
    }
}

// ── StateManagement ───────────────────────────────────────────────────────────

/// Presentation-layer state propagation pattern (Flutter targets only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateManagement {
    /// Observable notifier (`StateNotifier` + providers file).
    Riverpod,
    /// Change-notification object (`ChangeNotifier`).
    Provider,
    /// Event-driven reducer (`Bloc` with event/state files).
    Bloc,
    /// Single-method state holder (`Cubit`).
    Cubit,
}

impl StateManagement {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Riverpod => "riverpod",
            Self::Provider => "provider",
            Self::Bloc => "bloc",
            Self::Cubit => "cubit",
        }
    }
}

impl fmt::Display for StateManagement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StateManagement {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "riverpod" => Ok(Self::Riverpod),
            "provider" => Ok(Self::Provider),
            "bloc" => Ok(Self::Bloc),
            "cubit" => Ok(Self::Cubit),
            other => Err(DomainError::InvalidConfig(format!(
                "unknown state management kind: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_display_is_lowercase() {
        assert_eq!(Language::Kotlin.to_string(), "kotlin");
        assert_eq!(Language::Flutter.to_string(), "flutter");
    }

    #[test]
    fn language_from_str_accepts_aliases() {
        assert_eq!("kt".parse::<Language>().unwrap(), Language::Kotlin);
        assert_eq!("dart".parse::<Language>().unwrap(), Language::Flutter);
    }

    #[test]
    fn language_from_str_unknown_errors() {
        assert!("swift".parse::<Language>().is_err());
        assert!("".parse::<Language>().is_err());
    }

    #[test]
    fn only_flutter_requires_state_management() {
        assert!(Language::Flutter.requires_state_management());
        assert!(!Language::Kotlin.requires_state_management());
        assert!(!Language::Java.requires_state_management());
    }

    #[test]
    fn di_family_membership() {
        assert!(DependencyInjection::Hilt.is_android_kind());
        assert!(DependencyInjection::Dagger.is_android_kind());
        assert!(!DependencyInjection::GetIt.is_android_kind());

        assert!(DependencyInjection::GetIt.is_flutter_kind());
        assert!(DependencyInjection::None.is_flutter_kind());
        assert!(!DependencyInjection::Hilt.is_flutter_kind());
    }

    #[test]
    fn di_from_str_accepts_get_it_variants() {
        for raw in ["getit", "get_it", "get-it", "GetIt"] {
            assert_eq!(
                raw.parse::<DependencyInjection>().unwrap(),
                DependencyInjection::GetIt
            );
        }
    }

    #[test]
    fn state_management_round_trips() {
        for state in [
            StateManagement::Riverpod,
            StateManagement::Provider,
            StateManagement::Bloc,
            StateManagement::Cubit,
        ] {
            assert_eq!(
                state.as_str().parse::<StateManagement>().unwrap(),
                state
            );
        }
    }
}

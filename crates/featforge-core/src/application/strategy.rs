//! Strategy seams: DI strategies, Flutter strategies, and their registry.
//!
//! Strategies are **pure tree builders**: they return a
//! [`FeatureTree`](crate::domain::FeatureTree) plan and never touch the
//! filesystem themselves. All writes go through the materializer with
//! create-once semantics, which is what makes `ensure`-style operations
//! no-ops on re-runs.
//!
//! The registry is an explicit, statically-constructed mapping passed into
//! the orchestrator (no load-order-dependent self-registration); resolution
//! is trivially testable in isolation.

use crate::domain::{
    DependencyInjection, DomainError, FeatureTree, FileToEnsure, GenerationConfig, Language,
    StateManagement, TemplateContext,
};

/// One (language, DI-kind) generation strategy for the Android family.
pub trait DiStrategy: Send + Sync + std::fmt::Debug {
    /// The DI kind this strategy wires.
    fn di(&self) -> DependencyInjection;

    /// The language this strategy targets.
    fn language(&self) -> Language;

    /// Shared cross-feature files under `core/{common,utils,di,database}`:
    /// error-handling helper, dispatcher abstraction, base view-model, base
    /// fragment, constants, the three DI wiring modules and the shared
    /// persistence-registry file. Safe to materialize on every run; files
    /// are create-once.
    fn core_tree(&self, ctx: &TemplateContext) -> FeatureTree;

    /// The full feature slice (domain/data/presentation) for one feature.
    fn feature_tree(&self, ctx: &TemplateContext) -> FeatureTree;

    /// Exactly one feature-scoped DI wiring file naming the feature's
    /// API/repository bindings.
    fn feature_di_file(&self, ctx: &TemplateContext) -> FileToEnsure;
}

/// One state-management generation strategy for the Flutter family.
///
/// Declares exactly one state-management kind plus the set of DI kinds it
/// can wire.
pub trait FlutterStrategy: Send + Sync + std::fmt::Debug {
    fn state_management(&self) -> StateManagement;

    /// DI kinds this strategy supports.
    fn supported_di(&self) -> &[DependencyInjection];

    /// The full Flutter feature tree under `lib/features/<snake>/`.
    fn feature_tree(&self, config: &GenerationConfig, ctx: &TemplateContext) -> FeatureTree;
}

/// Explicit strategy registry.
///
/// Built once at startup (see `featforge_adapters::strategies::
/// builtin_registry`) and handed to the orchestrator. Resolution takes the
/// first match in registration order; registering two strategies for the
/// same key is a configuration mistake, and the first-registered-wins
/// tie-break is implementation-defined, not behavior to rely on.
#[derive(Default)]
pub struct StrategyRegistry {
    di: Vec<Box<dyn DiStrategy>>,
    flutter: Vec<Box<dyn FlutterStrategy>>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_di(&mut self, strategy: Box<dyn DiStrategy>) {
        self.di.push(strategy);
    }

    pub fn register_flutter(&mut self, strategy: Box<dyn FlutterStrategy>) {
        self.flutter.push(strategy);
    }

    /// Resolve the DI strategy for `(language, di)`.
    ///
    /// An unregistered pair is a fatal configuration error, never silently
    /// defaulted.
    pub fn resolve_di(
        &self,
        language: Language,
        di: DependencyInjection,
    ) -> Result<&dyn DiStrategy, DomainError> {
        self.di
            .iter()
            .find(|s| s.language() == language && s.di() == di)
            .map(|s| s.as_ref())
            .ok_or_else(|| DomainError::UnsupportedDiCombination {
                language: language.to_string(),
                di: di.to_string(),
            })
    }

    /// Resolve the Flutter strategy for `(state, di)`.
    pub fn resolve_flutter(
        &self,
        state: StateManagement,
        di: DependencyInjection,
    ) -> Result<&dyn FlutterStrategy, DomainError> {
        self.flutter
            .iter()
            .find(|s| s.state_management() == state && s.supported_di().contains(&di))
            .map(|s| s.as_ref())
            .ok_or_else(|| DomainError::UnsupportedFlutterCombination {
                state: state.to_string(),
                di: di.to_string(),
            })
    }

    pub fn di_strategies(&self) -> impl Iterator<Item = &dyn DiStrategy> {
        self.di.iter().map(|s| s.as_ref())
    }

    pub fn flutter_strategies(&self) -> impl Iterator<Item = &dyn FlutterStrategy> {
        self.flutter.iter().map(|s| s.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.di.is_empty() && self.flutter.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NameForms;

    #[derive(Debug)]
    struct FakeDi {
        di: DependencyInjection,
        language: Language,
    }

    impl DiStrategy for FakeDi {
        fn di(&self) -> DependencyInjection {
            self.di
        }
        fn language(&self) -> Language {
            self.language
        }
        fn core_tree(&self, _ctx: &TemplateContext) -> FeatureTree {
            FeatureTree::new().with_dir("core")
        }
        fn feature_tree(&self, _ctx: &TemplateContext) -> FeatureTree {
            FeatureTree::new().with_dir("features")
        }
        fn feature_di_file(&self, ctx: &TemplateContext) -> FileToEnsure {
            FileToEnsure {
                path: format!("{}Module.kt", ctx.names().pascal).into(),
                content: String::new(),
            }
        }
    }

    #[derive(Debug)]
    struct FakeFlutter {
        state: StateManagement,
        supported: Vec<DependencyInjection>,
    }

    impl FlutterStrategy for FakeFlutter {
        fn state_management(&self) -> StateManagement {
            self.state
        }
        fn supported_di(&self) -> &[DependencyInjection] {
            &self.supported
        }
        fn feature_tree(
            &self,
            _config: &GenerationConfig,
            _ctx: &TemplateContext,
        ) -> FeatureTree {
            FeatureTree::new().with_dir("lib")
        }
    }

    fn registry() -> StrategyRegistry {
        let mut reg = StrategyRegistry::new();
        reg.register_di(Box::new(FakeDi {
            di: DependencyInjection::Hilt,
            language: Language::Kotlin,
        }));
        reg.register_di(Box::new(FakeDi {
            di: DependencyInjection::Dagger,
            language: Language::Java,
        }));
        reg.register_flutter(Box::new(FakeFlutter {
            state: StateManagement::Riverpod,
            supported: vec![DependencyInjection::GetIt, DependencyInjection::None],
        }));
        reg
    }

    #[test]
    fn resolve_di_finds_registered_pair() {
        let reg = registry();
        let strategy = reg
            .resolve_di(Language::Kotlin, DependencyInjection::Hilt)
            .unwrap();
        assert_eq!(strategy.di(), DependencyInjection::Hilt);
    }

    #[test]
    fn resolve_di_fails_fast_on_unregistered_pair() {
        let reg = registry();
        let err = reg
            .resolve_di(Language::Java, DependencyInjection::Koin)
            .unwrap_err();
        assert!(matches!(err, DomainError::UnsupportedDiCombination { .. }));
    }

    #[test]
    fn resolve_flutter_checks_di_membership() {
        let reg = registry();
        assert!(
            reg.resolve_flutter(StateManagement::Riverpod, DependencyInjection::GetIt)
                .is_ok()
        );
        assert!(
            reg.resolve_flutter(StateManagement::Riverpod, DependencyInjection::Hilt)
                .is_err()
        );
        assert!(
            reg.resolve_flutter(StateManagement::Bloc, DependencyInjection::GetIt)
                .is_err()
        );
    }

    #[test]
    fn first_registered_wins_on_duplicate_key() {
        let mut reg = StrategyRegistry::new();
        reg.register_di(Box::new(FakeDi {
            di: DependencyInjection::Hilt,
            language: Language::Kotlin,
        }));
        reg.register_di(Box::new(FakeDi {
            di: DependencyInjection::Hilt,
            language: Language::Kotlin,
        }));
        // Documented tie-break: resolution still returns exactly one.
        assert!(
            reg.resolve_di(Language::Kotlin, DependencyInjection::Hilt)
                .is_ok()
        );
    }

    #[test]
    fn fake_di_file_uses_context_names() {
        let reg = registry();
        let strategy = reg
            .resolve_di(Language::Kotlin, DependencyInjection::Hilt)
            .unwrap();
        let ctx = TemplateContext::new(NameForms::derive("cart"));
        assert_eq!(
            strategy.feature_di_file(&ctx).path,
            std::path::PathBuf::from("CartModule.kt")
        );
    }
}

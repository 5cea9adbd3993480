//! Built-in generation strategies.
//!
//! [`builtin_registry`] is the statically-constructed mapping the CLI hands
//! to the orchestrator. Registration order is fixed here, in one place,
//! with no load-time side effects.

mod android;
pub mod dagger;
pub mod flutter;
pub mod hilt;
pub mod koin;

use featforge_core::application::strategy::StrategyRegistry;

pub use dagger::DaggerDiStrategy;
pub use flutter::{
    BlocFlutterStrategy, CubitFlutterStrategy, ProviderFlutterStrategy, RiverpodFlutterStrategy,
};
pub use hilt::HiltDiStrategy;
pub use koin::KoinDiStrategy;

/// The full built-in strategy set.
pub fn builtin_registry() -> StrategyRegistry {
    let mut registry = StrategyRegistry::new();

    registry.register_di(Box::new(HiltDiStrategy)); // Kotlin + Hilt
    registry.register_di(Box::new(KoinDiStrategy)); // Kotlin + Koin
    registry.register_di(Box::new(DaggerDiStrategy)); // Java + Dagger

    registry.register_flutter(Box::new(RiverpodFlutterStrategy));
    registry.register_flutter(Box::new(ProviderFlutterStrategy));
    registry.register_flutter(Box::new(BlocFlutterStrategy));
    registry.register_flutter(Box::new(CubitFlutterStrategy));

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use featforge_core::domain::{DependencyInjection, Language, StateManagement};

    #[test]
    fn every_declared_pair_resolves_to_exactly_one_strategy() {
        let registry = builtin_registry();

        let valid_di = [
            (Language::Kotlin, DependencyInjection::Hilt),
            (Language::Kotlin, DependencyInjection::Koin),
            (Language::Java, DependencyInjection::Dagger),
        ];
        for (language, di) in valid_di {
            assert!(
                registry.resolve_di(language, di).is_ok(),
                "{language}/{di} should resolve"
            );
        }

        let states = [
            StateManagement::Riverpod,
            StateManagement::Provider,
            StateManagement::Bloc,
            StateManagement::Cubit,
        ];
        for state in states {
            for di in [DependencyInjection::GetIt, DependencyInjection::None] {
                assert!(
                    registry.resolve_flutter(state, di).is_ok(),
                    "{state}/{di} should resolve"
                );
            }
        }
    }

    #[test]
    fn invalid_pairs_fail_resolution() {
        let registry = builtin_registry();

        assert!(
            registry
                .resolve_di(Language::Java, DependencyInjection::Koin)
                .is_err()
        );
        assert!(
            registry
                .resolve_di(Language::Kotlin, DependencyInjection::Dagger)
                .is_err()
        );
        assert!(
            registry
                .resolve_flutter(StateManagement::Riverpod, DependencyInjection::Hilt)
                .is_err()
        );
    }
}

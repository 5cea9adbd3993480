//! Bloc Flutter strategy.

use featforge_core::{
    application::strategy::FlutterStrategy,
    domain::{
        DependencyInjection, FeatureTree, GenerationConfig, StateManagement, TemplateContext,
    },
};

use super::{SUPPORTED_DI, feature_dirs, feature_root};
use crate::templates::flutter::bloc;

pub struct BlocFlutterStrategy;

impl FlutterStrategy for BlocFlutterStrategy {
    fn state_management(&self) -> StateManagement {
        StateManagement::Bloc
    }

    fn supported_di(&self) -> &[DependencyInjection] {
        SUPPORTED_DI
    }

    fn feature_tree(&self, config: &GenerationConfig, ctx: &TemplateContext) -> FeatureTree {
        let mut tree = FeatureTree::new();
        feature_dirs(&mut tree, ctx);

        let base = feature_root(ctx);
        let snake = &ctx.names().snake;

        tree.add_file(
            base.join(format!("domain/model/{snake}_model.dart")),
            bloc::domain_model(ctx),
        );
        tree.add_file(
            base.join(format!("domain/repository/{snake}_repository.dart")),
            bloc::domain_repository(ctx),
        );
        tree.add_file(
            base.join(format!("domain/usecase/get_{snake}_list_usecase.dart")),
            bloc::use_case(ctx),
        );
        tree.add_file(
            base.join(format!("data/remote/{snake}_api_service.dart")),
            bloc::api_service(ctx),
        );
        tree.add_file(
            base.join(format!("data/repository/{snake}_repository_impl.dart")),
            bloc::repository_impl(ctx),
        );
        tree.add_file(
            base.join(format!("presentation/viewmodel/{snake}_event.dart")),
            bloc::event(ctx),
        );
        tree.add_file(
            base.join(format!("presentation/viewmodel/{snake}_state.dart")),
            bloc::state(ctx),
        );
        tree.add_file(
            base.join(format!("presentation/viewmodel/{snake}_bloc.dart")),
            bloc::bloc(ctx),
        );
        tree.add_file(
            base.join(format!("presentation/ui/{snake}_screen.dart")),
            bloc::screen(ctx, config.dependency_injection()),
        );

        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use featforge_core::domain::{Language, NameForms};

    #[test]
    fn tree_has_event_state_and_bloc_files() {
        let ctx = TemplateContext::new(NameForms::derive("order history"));
        let config = GenerationConfig::new(
            "order history",
            Language::Flutter,
            DependencyInjection::None,
            Some(StateManagement::Bloc),
        )
        .unwrap();

        let tree = BlocFlutterStrategy.feature_tree(&config, &ctx);
        let paths: Vec<String> = tree
            .files()
            .map(|f| f.path.display().to_string())
            .collect();

        for expected in [
            "order_history_event.dart",
            "order_history_state.dart",
            "order_history_bloc.dart",
            "order_history_screen.dart",
        ] {
            assert!(
                paths.iter().any(|p| p.ends_with(expected)),
                "missing {expected}"
            );
        }
        assert_eq!(tree.files().count(), 9);
    }
}

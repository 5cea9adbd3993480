//! Riverpod Flutter strategy.

use featforge_core::{
    application::strategy::FlutterStrategy,
    domain::{
        DependencyInjection, FeatureTree, GenerationConfig, StateManagement, TemplateContext,
    },
};

use super::{SUPPORTED_DI, feature_dirs, feature_root};
use crate::templates::flutter::riverpod;

pub struct RiverpodFlutterStrategy;

impl FlutterStrategy for RiverpodFlutterStrategy {
    fn state_management(&self) -> StateManagement {
        StateManagement::Riverpod
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
            riverpod::domain_model(ctx),
        );
        tree.add_file(
            base.join(format!("domain/repository/{snake}_repository.dart")),
            riverpod::domain_repository(ctx),
        );
        tree.add_file(
            base.join(format!("domain/usecase/get_{snake}_list_usecase.dart")),
            riverpod::use_case(ctx),
        );
        tree.add_file(
            base.join(format!("data/remote/{snake}_api_service.dart")),
            riverpod::api_service(ctx),
        );
        tree.add_file(
            base.join(format!("data/repository/{snake}_repository_impl.dart")),
            riverpod::repository_impl(ctx),
        );
        tree.add_file(
            base.join(format!("presentation/viewmodel/{snake}_state_notifier.dart")),
            riverpod::state_notifier(ctx),
        );
        tree.add_file(
            base.join(format!("presentation/viewmodel/{snake}_providers.dart")),
            riverpod::providers(ctx, config.dependency_injection()),
        );
        tree.add_file(
            base.join(format!("presentation/ui/{snake}_screen.dart")),
            riverpod::screen(ctx),
        );

        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use featforge_core::domain::{Language, NameForms};

    fn config(di: DependencyInjection) -> GenerationConfig {
        GenerationConfig::new("cart", Language::Flutter, di, Some(StateManagement::Riverpod))
            .unwrap()
    }

    #[test]
    fn tree_places_providers_under_viewmodel() {
        let ctx = TemplateContext::new(NameForms::derive("cart"));
        let tree =
            RiverpodFlutterStrategy.feature_tree(&config(DependencyInjection::GetIt), &ctx);

        let providers = tree
            .files()
            .find(|f| {
                f.path.ends_with("lib/features/cart/presentation/viewmodel/cart_providers.dart")
            })
            .expect("providers file in tree");
        assert!(providers.content.contains("GetIt.I.get<GetCartListUseCase>();"));
    }

    #[test]
    fn tree_without_di_has_stub_providers() {
        let ctx = TemplateContext::new(NameForms::derive("cart"));
        let tree =
            RiverpodFlutterStrategy.feature_tree(&config(DependencyInjection::None), &ctx);

        let providers = tree
            .files()
            .find(|f| f.path.ends_with("cart_providers.dart"))
            .unwrap();
        assert!(providers.content.contains("UnimplementedError"));
        assert!(!providers.content.contains("GetIt"));
    }

    #[test]
    fn tree_validates() {
        let ctx = TemplateContext::new(NameForms::derive("order history"));
        let tree =
            RiverpodFlutterStrategy.feature_tree(&config(DependencyInjection::GetIt), &ctx);
        assert!(tree.validate().is_ok());
        assert_eq!(tree.files().count(), 8);
    }
}

//! Provider (ChangeNotifier) Flutter strategy.

use featforge_core::{
    application::strategy::FlutterStrategy,
    domain::{
        DependencyInjection, FeatureTree, GenerationConfig, StateManagement, TemplateContext,
    },
};

use super::{SUPPORTED_DI, feature_dirs, feature_root};
use crate::templates::flutter::provider;

pub struct ProviderFlutterStrategy;

impl FlutterStrategy for ProviderFlutterStrategy {
    fn state_management(&self) -> StateManagement {
        StateManagement::Provider
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
            provider::domain_model(ctx),
        );
        tree.add_file(
            base.join(format!("domain/repository/{snake}_repository.dart")),
            provider::domain_repository(ctx),
        );
        tree.add_file(
            base.join(format!("domain/usecase/get_{snake}_list_usecase.dart")),
            provider::use_case(ctx),
        );
        tree.add_file(
            base.join(format!("data/remote/{snake}_api_service.dart")),
            provider::api_service(ctx),
        );
        tree.add_file(
            base.join(format!("data/repository/{snake}_repository_impl.dart")),
            provider::repository_impl(ctx),
        );
        tree.add_file(
            base.join(format!("presentation/viewmodel/{snake}_view_model.dart")),
            provider::view_model(ctx),
        );
        tree.add_file(
            base.join(format!("presentation/ui/{snake}_screen.dart")),
            provider::screen(ctx, config.dependency_injection()),
        );

        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use featforge_core::domain::{Language, NameForms};

    #[test]
    fn screen_injection_follows_di_choice() {
        let ctx = TemplateContext::new(NameForms::derive("cart"));
        let config = GenerationConfig::new(
            "cart",
            Language::Flutter,
            DependencyInjection::GetIt,
            Some(StateManagement::Provider),
        )
        .unwrap();

        let tree = ProviderFlutterStrategy.feature_tree(&config, &ctx);
        let screen = tree
            .files()
            .find(|f| f.path.ends_with("cart_screen.dart"))
            .unwrap();
        assert!(screen.content.contains("ChangeNotifierProvider"));
        assert!(screen.content.contains("GetIt.I.get<GetCartListUseCase>(),"));
    }
}

//! Cubit Flutter strategy.

use featforge_core::{
    application::strategy::FlutterStrategy,
    domain::{
        DependencyInjection, FeatureTree, GenerationConfig, StateManagement, TemplateContext,
    },
};

use super::{SUPPORTED_DI, feature_dirs, feature_root};
use crate::templates::flutter::cubit;

pub struct CubitFlutterStrategy;

impl FlutterStrategy for CubitFlutterStrategy {
    fn state_management(&self) -> StateManagement {
        StateManagement::Cubit
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
            cubit::domain_model(ctx),
        );
        tree.add_file(
            base.join(format!("domain/repository/{snake}_repository.dart")),
            cubit::domain_repository(ctx),
        );
        tree.add_file(
            base.join(format!("domain/usecase/get_{snake}_list_usecase.dart")),
            cubit::use_case(ctx),
        );
        tree.add_file(
            base.join(format!("data/remote/{snake}_api_service.dart")),
            cubit::api_service(ctx),
        );
        tree.add_file(
            base.join(format!("data/repository/{snake}_repository_impl.dart")),
            cubit::repository_impl(ctx),
        );
        tree.add_file(
            base.join(format!("presentation/viewmodel/{snake}_state.dart")),
            cubit::state(ctx),
        );
        tree.add_file(
            base.join(format!("presentation/viewmodel/{snake}_cubit.dart")),
            cubit::cubit(ctx),
        );
        tree.add_file(
            base.join(format!("presentation/ui/{snake}_screen.dart")),
            cubit::screen(ctx, config.dependency_injection()),
        );

        tree
    }
}

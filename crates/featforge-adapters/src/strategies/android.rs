//! Shared tree builders for the Android (Kotlin/Java) family.
//!
//! The feature slice and the core/common shape are identical across DI
//! kinds; only the three DI wiring module bodies differ, so the core-tree
//! builders take those as parameters. Each concrete strategy composes these
//! with its own catalog.

use std::path::PathBuf;

use featforge_core::{
    application::layout,
    domain::{FeatureTree, TemplateContext},
};

use crate::templates::android::{self, java_core, java_feature, kotlin_core, kotlin_feature};

fn src_root() -> PathBuf {
    PathBuf::from(layout::ANDROID_SRC_ROOT)
}

fn feature_root(ctx: &TemplateContext) -> PathBuf {
    src_root().join("features").join(&ctx.names().camel)
}

/// The feature directory skeleton shared by both languages.
fn feature_dirs(tree: &mut FeatureTree, ctx: &TemplateContext) {
    let base = feature_root(ctx);
    for dir in [
        "data/remote/dto",
        "data/local/entity",
        "data/local/dao",
        "data/repository",
        "domain/model",
        "domain/repository",
        "domain/usecase",
        "presentation/ui",
        "presentation/viewmodel",
        "presentation/state",
        "di",
    ] {
        tree.add_dir(base.join(dir));
    }
}

pub(crate) fn kotlin_feature_tree(ctx: &TemplateContext) -> FeatureTree {
    let mut tree = FeatureTree::new();
    feature_dirs(&mut tree, ctx);

    let base = feature_root(ctx);
    let pascal = &ctx.names().pascal;

    // Domain
    tree.add_file(
        base.join(format!("domain/model/{pascal}.kt")),
        kotlin_feature::domain_model(ctx),
    );
    tree.add_file(
        base.join(format!("domain/repository/{pascal}Repository.kt")),
        kotlin_feature::domain_repository(ctx),
    );
    tree.add_file(
        base.join(format!("domain/usecase/Get{pascal}ListUseCase.kt")),
        kotlin_feature::use_case(ctx),
    );

    // Data
    tree.add_file(
        base.join(format!("data/remote/dto/{pascal}Dto.kt")),
        kotlin_feature::dto(ctx),
    );
    tree.add_file(
        base.join(format!("data/remote/{pascal}ApiService.kt")),
        kotlin_feature::api_service(ctx),
    );
    tree.add_file(
        base.join(format!("data/local/entity/{pascal}Entity.kt")),
        kotlin_feature::entity(ctx),
    );
    tree.add_file(
        base.join(format!("data/local/dao/{pascal}Dao.kt")),
        kotlin_feature::dao(ctx),
    );
    tree.add_file(
        base.join(format!("data/repository/{pascal}RepositoryImpl.kt")),
        kotlin_feature::repository_impl(ctx),
    );

    // Presentation
    tree.add_file(
        base.join(format!("presentation/state/{pascal}UiState.kt")),
        kotlin_feature::ui_state(ctx),
    );
    tree.add_file(
        base.join(format!("presentation/viewmodel/{pascal}ViewModel.kt")),
        kotlin_feature::view_model(ctx),
    );
    tree.add_file(
        base.join(format!("presentation/ui/{pascal}Fragment.kt")),
        kotlin_feature::fragment(ctx),
    );

    // Layout resource, keyed by the snake-case name
    tree.add_file(
        layout::layout_file_path(&ctx.names().snake),
        android::LAYOUT_XML.to_string(),
    );

    tree
}

pub(crate) fn java_feature_tree(ctx: &TemplateContext) -> FeatureTree {
    let mut tree = FeatureTree::new();
    feature_dirs(&mut tree, ctx);

    let base = feature_root(ctx);
    let pascal = &ctx.names().pascal;

    // Domain
    tree.add_file(
        base.join(format!("domain/model/{pascal}.java")),
        java_feature::domain_model(ctx),
    );
    tree.add_file(
        base.join(format!("domain/repository/{pascal}Repository.java")),
        java_feature::domain_repository(ctx),
    );
    tree.add_file(
        base.join(format!("domain/usecase/Get{pascal}ListUseCase.java")),
        java_feature::use_case(ctx),
    );

    // Data
    tree.add_file(
        base.join(format!("data/remote/dto/{pascal}Dto.java")),
        java_feature::dto(ctx),
    );
    tree.add_file(
        base.join(format!("data/remote/{pascal}ApiService.java")),
        java_feature::api_service(ctx),
    );
    tree.add_file(
        base.join(format!("data/local/entity/{pascal}Entity.java")),
        java_feature::entity(ctx),
    );
    tree.add_file(
        base.join(format!("data/local/dao/{pascal}Dao.java")),
        java_feature::dao(ctx),
    );
    tree.add_file(
        base.join(format!("data/repository/{pascal}RepositoryImpl.java")),
        java_feature::repository_impl(ctx),
    );

    // Presentation
    tree.add_file(
        base.join(format!("presentation/state/{pascal}UiState.java")),
        java_feature::ui_state(ctx),
    );
    tree.add_file(
        base.join(format!("presentation/viewmodel/{pascal}ViewModel.java")),
        java_feature::view_model(ctx),
    );
    tree.add_file(
        base.join(format!("presentation/ui/{pascal}Fragment.java")),
        java_feature::fragment(ctx),
    );

    tree.add_file(
        layout::layout_file_path(&ctx.names().snake),
        android::LAYOUT_XML.to_string(),
    );

    tree
}

/// Kotlin core/common shape; the three DI module bodies come from the
/// active strategy's catalog.
pub(crate) fn kotlin_core_tree(
    network_module: &str,
    database_module: &str,
    dispatcher_module: &str,
) -> FeatureTree {
    let core = src_root().join("core");
    let mut tree = FeatureTree::new()
        .with_dir(core.join("common"))
        .with_dir(core.join("utils"))
        .with_dir(core.join("di"))
        .with_dir(core.join("database"));

    tree.add_file(
        core.join("common/Resource.kt"),
        kotlin_core::RESOURCE.to_string(),
    );
    tree.add_file(
        core.join("common/DispatcherProvider.kt"),
        kotlin_core::DISPATCHER_PROVIDER.to_string(),
    );
    tree.add_file(
        core.join("common/BaseViewModel.kt"),
        kotlin_core::BASE_VIEW_MODEL.to_string(),
    );
    tree.add_file(
        core.join("common/BaseFragment.kt"),
        kotlin_core::BASE_FRAGMENT.to_string(),
    );
    tree.add_file(
        core.join("common/ErrorHandler.kt"),
        kotlin_core::ERROR_HANDLER.to_string(),
    );
    tree.add_file(
        core.join("utils/Constants.kt"),
        kotlin_core::CONSTANTS.to_string(),
    );
    tree.add_file(core.join("di/NetworkModule.kt"), network_module.to_string());
    tree.add_file(
        core.join("di/DatabaseModule.kt"),
        database_module.to_string(),
    );
    tree.add_file(
        core.join("di/DispatcherModule.kt"),
        dispatcher_module.to_string(),
    );
    tree.add_file(
        core.join("database/AppDatabase.kt"),
        kotlin_core::APP_DATABASE.to_string(),
    );

    tree
}

pub(crate) fn java_core_tree(
    network_module: &str,
    database_module: &str,
    dispatcher_module: &str,
) -> FeatureTree {
    let core = src_root().join("core");
    let mut tree = FeatureTree::new()
        .with_dir(core.join("common"))
        .with_dir(core.join("utils"))
        .with_dir(core.join("di"))
        .with_dir(core.join("database"));

    tree.add_file(
        core.join("common/Resource.java"),
        java_core::RESOURCE.to_string(),
    );
    tree.add_file(
        core.join("common/DispatcherProvider.java"),
        java_core::DISPATCHER_PROVIDER.to_string(),
    );
    tree.add_file(
        core.join("common/BaseViewModel.java"),
        java_core::BASE_VIEW_MODEL.to_string(),
    );
    tree.add_file(
        core.join("common/BaseFragment.java"),
        java_core::BASE_FRAGMENT.to_string(),
    );
    tree.add_file(
        core.join("common/ErrorHandler.java"),
        java_core::ERROR_HANDLER.to_string(),
    );
    tree.add_file(
        core.join("utils/Constants.java"),
        java_core::CONSTANTS.to_string(),
    );
    tree.add_file(
        core.join("di/NetworkModule.java"),
        network_module.to_string(),
    );
    tree.add_file(
        core.join("di/DatabaseModule.java"),
        database_module.to_string(),
    );
    tree.add_file(
        core.join("di/DispatcherModule.java"),
        dispatcher_module.to_string(),
    );
    tree.add_file(
        core.join("database/AppDatabase.java"),
        java_core::APP_DATABASE.to_string(),
    );

    tree
}

/// Path of the feature-scoped DI module file.
pub(crate) fn feature_di_path(ctx: &TemplateContext, extension: &str) -> PathBuf {
    feature_root(ctx).join(format!("di/{}Module.{extension}", ctx.names().pascal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use featforge_core::domain::NameForms;

    fn ctx() -> TemplateContext {
        TemplateContext::new(NameForms::derive("order history"))
    }

    #[test]
    fn kotlin_feature_tree_places_files_under_camel_dir() {
        let tree = kotlin_feature_tree(&ctx());
        let paths: Vec<String> = tree
            .files()
            .map(|f| f.path.display().to_string())
            .collect();

        assert!(paths.contains(
            &"app/src/main/java/features/orderHistory/domain/model/OrderHistory.kt".to_string()
        ));
        assert!(paths.contains(
            &"app/src/main/res/layout/fragment_order_history.xml".to_string()
        ));
        // one domain model, exactly
        assert_eq!(
            paths
                .iter()
                .filter(|p| p.contains("domain/model/"))
                .count(),
            1
        );
    }

    #[test]
    fn kotlin_feature_tree_validates() {
        assert!(kotlin_feature_tree(&ctx()).validate().is_ok());
        assert!(java_feature_tree(&ctx()).validate().is_ok());
    }

    #[test]
    fn core_trees_contain_registry_file() {
        let tree = kotlin_core_tree("net", "db", "disp");
        assert!(tree.files().any(|f| {
            f.path.ends_with("core/database/AppDatabase.kt")
        }));

        let tree = java_core_tree("net", "db", "disp");
        assert!(tree.files().any(|f| {
            f.path.ends_with("core/database/AppDatabase.java")
        }));
    }

    #[test]
    fn feature_di_path_is_under_di_dir() {
        assert_eq!(
            feature_di_path(&ctx(), "kt"),
            PathBuf::from(
                "app/src/main/java/features/orderHistory/di/OrderHistoryModule.kt"
            )
        );
    }
}

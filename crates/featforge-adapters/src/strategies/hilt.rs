//! Kotlin + Hilt generation strategy.

use featforge_core::{
    application::strategy::DiStrategy,
    domain::{DependencyInjection, FeatureTree, FileToEnsure, Language, TemplateContext},
};

use super::android;
use crate::templates::android::hilt;

pub struct HiltDiStrategy;

impl DiStrategy for HiltDiStrategy {
    fn di(&self) -> DependencyInjection {
        DependencyInjection::Hilt
    }

    fn language(&self) -> Language {
        Language::Kotlin
    }

    fn core_tree(&self, _ctx: &TemplateContext) -> FeatureTree {
        android::kotlin_core_tree(
            hilt::NETWORK_MODULE,
            hilt::DATABASE_MODULE,
            hilt::DISPATCHER_MODULE,
        )
    }

    fn feature_tree(&self, ctx: &TemplateContext) -> FeatureTree {
        android::kotlin_feature_tree(ctx)
    }

    fn feature_di_file(&self, ctx: &TemplateContext) -> FileToEnsure {
        FileToEnsure {
            path: android::feature_di_path(ctx, "kt"),
            content: hilt::feature_module(ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use featforge_core::domain::NameForms;

    #[test]
    fn di_file_is_a_hilt_module() {
        let ctx = TemplateContext::new(NameForms::derive("order history"));
        let file = HiltDiStrategy.feature_di_file(&ctx);

        assert!(file.path.ends_with("di/OrderHistoryModule.kt"));
        assert!(file.content.contains("@InstallIn(SingletonComponent::class)"));
    }

    #[test]
    fn core_tree_uses_hilt_wiring() {
        let ctx = TemplateContext::new(NameForms::derive("cart"));
        let tree = HiltDiStrategy.core_tree(&ctx);
        let network = tree
            .files()
            .find(|f| f.path.ends_with("di/NetworkModule.kt"))
            .unwrap();
        assert!(network.content.contains("dagger.hilt.InstallIn"));
    }
}

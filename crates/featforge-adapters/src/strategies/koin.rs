//! Kotlin + Koin generation strategy.

use featforge_core::{
    application::strategy::DiStrategy,
    domain::{DependencyInjection, FeatureTree, FileToEnsure, Language, TemplateContext},
};

use super::android;
use crate::templates::android::koin;

pub struct KoinDiStrategy;

impl DiStrategy for KoinDiStrategy {
    fn di(&self) -> DependencyInjection {
        DependencyInjection::Koin
    }

    fn language(&self) -> Language {
        Language::Kotlin
    }

    fn core_tree(&self, _ctx: &TemplateContext) -> FeatureTree {
        android::kotlin_core_tree(
            koin::NETWORK_MODULE,
            koin::DATABASE_MODULE,
            koin::DISPATCHER_MODULE,
        )
    }

    fn feature_tree(&self, ctx: &TemplateContext) -> FeatureTree {
        android::kotlin_feature_tree(ctx)
    }

    fn feature_di_file(&self, ctx: &TemplateContext) -> FileToEnsure {
        FileToEnsure {
            path: android::feature_di_path(ctx, "kt"),
            content: koin::feature_module(ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use featforge_core::domain::NameForms;

    #[test]
    fn di_file_is_a_koin_module() {
        let ctx = TemplateContext::new(NameForms::derive("cart"));
        let file = KoinDiStrategy.feature_di_file(&ctx);

        assert!(file.path.ends_with("di/CartModule.kt"));
        assert!(file.content.contains("val cartModule = module {"));
        assert!(!file.content.contains("dagger"));
    }
}

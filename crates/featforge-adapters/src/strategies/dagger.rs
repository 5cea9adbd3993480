//! Java + Dagger generation strategy.

use featforge_core::{
    application::strategy::DiStrategy,
    domain::{DependencyInjection, FeatureTree, FileToEnsure, Language, TemplateContext},
};

use super::android;
use crate::templates::android::dagger;

pub struct DaggerDiStrategy;

impl DiStrategy for DaggerDiStrategy {
    fn di(&self) -> DependencyInjection {
        DependencyInjection::Dagger
    }

    fn language(&self) -> Language {
        Language::Java
    }

    fn core_tree(&self, _ctx: &TemplateContext) -> FeatureTree {
        android::java_core_tree(
            dagger::NETWORK_MODULE,
            dagger::DATABASE_MODULE,
            dagger::DISPATCHER_MODULE,
        )
    }

    fn feature_tree(&self, ctx: &TemplateContext) -> FeatureTree {
        android::java_feature_tree(ctx)
    }

    fn feature_di_file(&self, ctx: &TemplateContext) -> FileToEnsure {
        FileToEnsure {
            path: android::feature_di_path(ctx, "java"),
            content: dagger::feature_module(ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use featforge_core::domain::NameForms;

    #[test]
    fn di_file_is_a_dagger_module() {
        let ctx = TemplateContext::new(NameForms::derive("cart"));
        let file = DaggerDiStrategy.feature_di_file(&ctx);

        assert!(file.path.ends_with("di/CartModule.java"));
        assert!(file.content.contains("@Module"));
        assert!(file.content.contains("public class CartModule"));
    }

    #[test]
    fn feature_tree_emits_java_sources() {
        let ctx = TemplateContext::new(NameForms::derive("cart"));
        let tree = DaggerDiStrategy.feature_tree(&ctx);
        assert!(tree.files().all(|f| {
            let p = f.path.to_string_lossy();
            p.ends_with(".java") || p.ends_with(".xml")
        }));
    }
}

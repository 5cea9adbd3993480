//! Path profiles: how Flutter templates spell their cross-file imports.
//!
//! A profile is a record of functions mapping a snake-case feature name to
//! the relative reference string used by each import site. Two layouts
//! exist:
//!
//! - [`PathProfile::deep`]: feature trees with nested `domain/model`,
//!   `domain/repository`, `data/remote`, `data/repository` directories;
//! - [`PathProfile::flat`]: everything in one directory, bare file imports.
//!
//! The profile knows nothing about the filesystem; it only produces the
//! strings that end up inside `import '...';` lines.

/// Relative-import spelling rules for one feature-tree layout.
#[derive(Clone, Copy)]
pub struct PathProfile {
    /// Import of the domain model from within the domain layer.
    pub domain_model_import: fn(&str) -> String,
    /// Import of the domain repository from within the domain layer.
    pub domain_repo_import: fn(&str) -> String,
    /// Import of the domain model from the data layer.
    pub data_model_import: fn(&str) -> String,
    /// Import of the domain repository from the data layer.
    pub data_repo_import: fn(&str) -> String,
    /// Import of the remote service from the data layer.
    pub data_remote_import: fn(&str) -> String,
    /// Import of the repository from the use case.
    pub use_case_repo_import: fn(&str) -> String,
    /// Import of the model from the use case.
    pub use_case_model_import: fn(&str) -> String,
}

impl PathProfile {
    /// Nested mvvm folders: domain/model, domain/repository, data/remote, ...
    pub const fn deep() -> Self {
        Self {
            domain_model_import: |snake| format!("../model/{snake}_model.dart"),
            domain_repo_import: |snake| format!("../repository/{snake}_repository.dart"),
            data_model_import: |snake| format!("../../domain/model/{snake}_model.dart"),
            data_repo_import: |snake| format!("../../domain/repository/{snake}_repository.dart"),
            data_remote_import: |snake| format!("../remote/{snake}_api_service.dart"),
            use_case_repo_import: |snake| format!("../repository/{snake}_repository.dart"),
            use_case_model_import: |snake| format!("../model/{snake}_model.dart"),
        }
    }

    /// All files in one flat directory (bare sibling imports).
    pub const fn flat() -> Self {
        Self {
            domain_model_import: |snake| format!("{snake}_model.dart"),
            domain_repo_import: |snake| format!("{snake}_repository.dart"),
            data_model_import: |snake| format!("{snake}_model.dart"),
            data_repo_import: |snake| format!("{snake}_repository.dart"),
            data_remote_import: |snake| format!("{snake}_api_service.dart"),
            use_case_repo_import: |snake| format!("{snake}_repository.dart"),
            use_case_model_import: |snake| format!("{snake}_model.dart"),
        }
    }
}

impl std::fmt::Debug for PathProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // fn pointers have no useful Debug; identify the profile by probing.
        let probe = (self.domain_model_import)("x");
        let name = if probe.starts_with("../") { "deep" } else { "flat" };
        f.debug_struct("PathProfile").field("layout", &name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deep_profile_climbs_directories() {
        let p = PathProfile::deep();
        assert_eq!((p.domain_model_import)("cart"), "../model/cart_model.dart");
        assert_eq!(
            (p.data_repo_import)("cart"),
            "../../domain/repository/cart_repository.dart"
        );
        assert_eq!(
            (p.data_remote_import)("cart"),
            "../remote/cart_api_service.dart"
        );
    }

    #[test]
    fn flat_profile_uses_bare_file_names() {
        let p = PathProfile::flat();
        assert_eq!((p.domain_model_import)("cart"), "cart_model.dart");
        assert_eq!((p.use_case_repo_import)("cart"), "cart_repository.dart");
    }

    #[test]
    fn use_case_imports_match_domain_layout() {
        let p = PathProfile::deep();
        assert_eq!(
            (p.use_case_model_import)("order_history"),
            "../model/order_history_model.dart"
        );
    }
}

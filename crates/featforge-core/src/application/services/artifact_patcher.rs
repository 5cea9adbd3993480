//! Shared-artifact patching: registering a freshly generated feature in the
//! project's pre-existing persistence registry and navigation graph.
//!
//! The pure transforms live in [`crate::domain::patch`]; this service only
//! locates the artifacts through the [`Filesystem`] port, applies the
//! transforms to the full text, and re-saves when something changed. A
//! missing artifact or a missing anchor inside it means the patch is
//! silently skipped (logged at debug), and re-running generation never
//! duplicates an entry.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::{layout, ports::Filesystem},
    domain::{
        Language, NameForms, RegistryStyle,
        patch::{append_accessor, insert_import, insert_navigation_entry, register_entity},
    },
    error::ForgeResult,
};

/// Patches the persistence-registry file and the navigation graph for one
/// feature. Android targets only; the Flutter layout has neither artifact.
pub struct SharedArtifactPatcher<'a> {
    filesystem: &'a dyn Filesystem,
    project_root: &'a Path,
}

impl<'a> SharedArtifactPatcher<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, project_root: &'a Path) -> Self {
        Self {
            filesystem,
            project_root,
        }
    }

    /// Apply every applicable patch. Returns the number of files re-saved.
    #[instrument(skip_all, fields(feature = %names.pascal))]
    pub fn register_feature(&self, language: Language, names: &NameForms) -> ForgeResult<usize> {
        let mut patched = 0;

        if self.patch_app_database(language, names)? {
            patched += 1;
        }
        if self.patch_nav_graph(names)? {
            patched += 1;
        }

        Ok(patched)
    }

    /// Import + entities registration + DAO accessor, all against the shared
    /// `AppDatabase` file. Applied to one in-memory text, saved once.
    fn patch_app_database(&self, language: Language, names: &NameForms) -> ForgeResult<bool> {
        let db_path = self
            .project_root
            .join(layout::app_database_path(language.file_extension()));

        let Some(original) = self.filesystem.read_file(&db_path)? else {
            debug!(path = %db_path.display(), "persistence registry absent, skipping patch");
            return Ok(false);
        };

        let lower = names.package_segment();
        let entity = format!("{}Entity", names.pascal);
        let dao = format!("{}Dao", names.pascal);

        let mut text = original.clone();

        let import_line = format!(
            "import features.{lower}.data.local.entity.{entity}"
        );
        if let Some(next) = insert_import(&text, &import_line) {
            text = next;
        }

        let style = match language {
            Language::Kotlin => RegistryStyle::KOTLIN,
            Language::Java => RegistryStyle::JAVA,
            Language::Flutter => return Ok(false),
        };
        if let Some(next) = register_entity(&text, &entity, style) {
            text = next;
        }

        let (probe, declaration) = match language {
            Language::Kotlin => (
                format!("abstract fun {}Dao()", names.camel),
                format!("\n    abstract fun {}Dao(): {dao}\n", names.camel),
            ),
            Language::Java => (
                format!("{}Dao(", names.camel),
                format!("\n    public abstract {dao} {}Dao();\n", names.camel),
            ),
            Language::Flutter => return Ok(false),
        };
        if let Some(next) = append_accessor(&text, &probe, &declaration) {
            text = next;
        }

        if text == original {
            return Ok(false);
        }

        self.filesystem.write_file(&db_path, &text)?;
        Ok(true)
    }

    /// Insert the feature's `<fragment>` entry before `</navigation>`.
    fn patch_nav_graph(&self, names: &NameForms) -> ForgeResult<bool> {
        let nav_path = self.project_root.join(layout::nav_graph_path());

        let Some(original) = self.filesystem.read_file(&nav_path)? else {
            debug!(path = %nav_path.display(), "navigation graph absent, skipping patch");
            return Ok(false);
        };

        let lower = names.package_segment();
        let fragment_class = format!(
            "features.{lower}.presentation.ui.{}Fragment",
            names.pascal
        );
        let fragment_id = format!("@+id/{}_fragment", names.snake);

        let entry_block = format!(
            "    <fragment\n        android:id=\"{fragment_id}\"\n        android:name=\"{fragment_class}\"\n        android:label=\"{}\"\n        tools:layout=\"@layout/fragment_{}\" />",
            names.pascal, names.snake
        );

        match insert_navigation_entry(&original, &fragment_class, &fragment_id, &entry_block) {
            Some(text) => {
                self.filesystem.write_file(&nav_path, &text)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

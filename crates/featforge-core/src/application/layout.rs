//! Fixed project-relative output locations.
//!
//! Every path the generator produces or patches hangs off one of these
//! roots. They are constants of the target project conventions, not
//! configuration.

use std::path::PathBuf;

/// Android source root shared by Kotlin and Java targets.
pub const ANDROID_SRC_ROOT: &str = "app/src/main/java";

/// Android resource root.
pub const ANDROID_RES_ROOT: &str = "app/src/main/res";

/// Flutter source root.
pub const FLUTTER_LIB_ROOT: &str = "lib";

/// Shared persistence-registry file for the given extension (`kt`/`java`).
pub fn app_database_path(extension: &str) -> PathBuf {
    PathBuf::from(ANDROID_SRC_ROOT).join(format!("core/database/AppDatabase.{extension}"))
}

/// Pre-existing navigation graph (patched, never created).
pub fn nav_graph_path() -> PathBuf {
    PathBuf::from(ANDROID_RES_ROOT).join("navigation/nav_graph.xml")
}

/// Layout resource for one feature, keyed by the snake-case name.
pub fn layout_file_path(snake: &str) -> PathBuf {
    PathBuf::from(ANDROID_RES_ROOT).join(format!("layout/fragment_{snake}.xml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_path_per_language_extension() {
        assert_eq!(
            app_database_path("kt"),
            PathBuf::from("app/src/main/java/core/database/AppDatabase.kt")
        );
        assert_eq!(
            app_database_path("java"),
            PathBuf::from("app/src/main/java/core/database/AppDatabase.java")
        );
    }

    #[test]
    fn layout_path_is_keyed_by_snake_name() {
        assert_eq!(
            layout_file_path("order_history"),
            PathBuf::from("app/src/main/res/layout/fragment_order_history.xml")
        );
    }
}

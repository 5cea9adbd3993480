//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`FEATFORGE__DEFAULTS__LANGUAGE`, ...)
//! 3. Config file (`--config` path, or the default location when present)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default values for generation.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Project settings.
    pub project: ProjectConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    pub language: Option<String>,
    pub di: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project root the generated tree hangs off; defaults to the current
    /// directory when unset and not overridden by `--project-root`.
    pub root: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                language: Some("kotlin".into()),
                di: Some("hilt".into()),
                state: None,
            },
            output: OutputConfig {
                no_color: false,
                format: "human".into(),
            },
            project: ProjectConfig { root: None },
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config` (or `None`
    /// to use the default location; a missing default file is fine, a
    /// missing explicit file is an error).
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&AppConfig::default())?);

        builder = match config_file {
            Some(path) => builder.add_source(config::File::from(path.clone())),
            None => builder.add_source(
                config::File::from(Self::config_path()).required(false),
            ),
        };

        builder = builder.add_source(
            config::Environment::with_prefix("FEATFORGE")
                .separator("__")
                .try_parsing(true),
        );

        let loaded = builder.build()?.try_deserialize()?;
        Ok(loaded)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.featforge.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "featforge", "featforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".featforge.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_language_is_kotlin() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.language.as_deref(), Some("kotlin"));
        assert_eq!(cfg.defaults.di.as_deref(), Some("hilt"));
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[defaults]\nlanguage = \"flutter\"\ndi = \"getit\"\nstate = \"riverpod\"\n\n[output]\nno_color = true\nformat = \"plain\"\n\n[project]\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.language.as_deref(), Some("flutter"));
        assert_eq!(cfg.defaults.state.as_deref(), Some("riverpod"));
        assert!(cfg.output.no_color);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = PathBuf::from("/definitely/not/here.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn config_path_is_non_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}

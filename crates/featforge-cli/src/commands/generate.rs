//! Implementation of the `featforge generate` command.
//!
//! Responsibility: translate CLI arguments into a `GenerationConfig`, call
//! the core generation service, and display results. No business logic
//! lives here.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::{debug, info, instrument};

use featforge_adapters::{LocalFilesystem, builtin_registry};
use featforge_core::{
    application::GenerationService,
    domain::{
        DependencyInjection as CoreDi, GenerationConfig, Language as CoreLanguage,
        StateManagement as CoreState,
    },
};

use crate::{
    cli::{Di, GenerateArgs, Language, State, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    progress::IndicatifProgress,
};

/// Execute the `featforge generate` command.
///
/// Dispatch sequence:
/// 1. Validate the feature name
/// 2. Convert CLI args to a core `GenerationConfig` (config-file defaults
///    fill in omitted flags)
/// 3. Confirm with user unless `--yes` or `--quiet`
/// 4. Early-exit if `--dry-run`
/// 5. Execute generation via `GenerationService`
/// 6. Print the summary
#[instrument(skip_all, fields(feature = %args.feature_name))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Validate the raw name before deriving anything from it.
    validate_feature_name(&args.feature_name)?;

    // 2. Build the core config.
    let generation = build_config(&args, &config)?;
    let project_root = resolve_project_root(&args, &config);

    debug!(
        language = %generation.language(),
        di = %generation.dependency_injection(),
        state = generation.state_management().map(|s| s.to_string()).as_deref().unwrap_or("none"),
        root = %project_root.display(),
        "Generation config resolved"
    );

    // 3. Show configuration and confirm.
    if !global.quiet && !args.yes && !args.dry_run {
        show_configuration(&generation, &project_root, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 4. Build the service; the plan doubles as the dry-run output.
    let service = GenerationService::new(Box::new(LocalFilesystem::new()), builtin_registry());

    if args.dry_run {
        let plan = service.plan(&generation).map_err(CliError::Core)?;
        output.info(&format!(
            "Dry run: would ensure {} files under {}",
            plan.files().count(),
            project_root.display(),
        ))?;
        for file in plan.files() {
            output.print(&format!("  {}", file.path.display()))?;
        }
        output.print("")?;
        output.print("Existing files are never overwritten; shared artifacts")?;
        output.print("(AppDatabase, nav_graph.xml) are patched only when present.")?;
        return Ok(());
    }

    // 5. Generate.
    output.header(&format!("Generating '{}'...", generation.feature_name()))?;
    info!(feature = generation.feature_name(), "Generation started");

    let progress = if global.quiet || !std::io::stderr().is_terminal() {
        IndicatifProgress::hidden()
    } else {
        IndicatifProgress::new()
    };

    let report = service
        .generate(&generation, &project_root, &progress)
        .map_err(CliError::Core)?;
    progress.finish();

    info!(
        created = report.created_files,
        patched = report.patched_files,
        "Generation completed"
    );

    // 6. Success summary.
    output.success(&format!(
        "Generated Clean Architecture for '{}'",
        generation.feature_name(),
    ))?;

    if !global.quiet {
        output.print(&format!("  Language: {}", generation.language()))?;
        output.print(&format!("  DI:       {}", generation.dependency_injection()))?;
        if let Some(state) = generation.state_management() {
            output.print(&format!("  State:    {state}"))?;
        }
        output.print(&format!(
            "  Files:    {} created, {} patched",
            report.created_files, report.patched_files,
        ))?;
        if report.created_files == 0 {
            output.info("Nothing new to create; feature already generated.")?;
        }
    }

    Ok(())
}

// ── Validation ────────────────────────────────────────────────────────────────

fn validate_feature_name(name: &str) -> CliResult<()> {
    if name.trim().is_empty() {
        return Err(CliError::InvalidFeatureName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if name.contains('/') || name.contains('\\') {
        return Err(CliError::InvalidFeatureName {
            name: name.into(),
            reason: "name cannot contain path separators".into(),
        });
    }
    Ok(())
}

// ── Config construction ───────────────────────────────────────────────────────

fn build_config(args: &GenerateArgs, config: &AppConfig) -> CliResult<GenerationConfig> {
    let language = convert_language(args.language);
    let di = convert_di(args.di);
    let state = resolve_state(args, config, language)?;

    GenerationConfig::new(args.feature_name.clone(), language, di, state)
        .map_err(|e| CliError::Core(e.into()))
}

/// `--state` wins; otherwise a configured default applies to Flutter runs
/// only (Android targets reject a state-management selection).
fn resolve_state(
    args: &GenerateArgs,
    config: &AppConfig,
    language: CoreLanguage,
) -> CliResult<Option<CoreState>> {
    if let Some(state) = args.state {
        return Ok(Some(convert_state(state)));
    }

    if language != CoreLanguage::Flutter {
        return Ok(None);
    }

    match config.defaults.state.as_deref() {
        Some(raw) => CoreState::from_str(raw)
            .map(Some)
            .map_err(|e| CliError::ConfigError {
                message: format!("defaults.state: {e}"),
                source: None,
            }),
        None => Ok(None),
    }
}

fn resolve_project_root(args: &GenerateArgs, config: &AppConfig) -> PathBuf {
    args.project_root
        .clone()
        .or_else(|| config.project.root.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

// ── Type conversions CLI → core ───────────────────────────────────────────────

fn convert_language(lang: Language) -> CoreLanguage {
    match lang {
        Language::Kotlin => CoreLanguage::Kotlin,
        Language::Java => CoreLanguage::Java,
        Language::Flutter => CoreLanguage::Flutter,
    }
}

fn convert_di(di: Di) -> CoreDi {
    match di {
        Di::Hilt => CoreDi::Hilt,
        Di::Koin => CoreDi::Koin,
        Di::Dagger => CoreDi::Dagger,
        Di::GetIt => CoreDi::GetIt,
        Di::None => CoreDi::None,
    }
}

fn convert_state(state: State) -> CoreState {
    match state {
        State::Riverpod => CoreState::Riverpod,
        State::Provider => CoreState::Provider,
        State::Bloc => CoreState::Bloc,
        State::Cubit => CoreState::Cubit,
    }
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(
    generation: &GenerationConfig,
    project_root: &std::path::Path,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Feature:  {}", generation.feature_name()))?;
    out.print(&format!("  Language: {}", generation.language()))?;
    out.print(&format!("  DI:       {}", generation.dependency_injection()))?;
    if let Some(state) = generation.state_management() {
        out.print(&format!("  State:    {state}"))?;
    }
    out.print(&format!("  Root:     {}", project_root.display()))?;
    out.print("")?;
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn generate_args(language: Language, di: Di, state: Option<State>) -> GenerateArgs {
        GenerateArgs {
            feature_name: "order history".into(),
            language,
            di,
            state,
            project_root: None,
            yes: true,
            dry_run: false,
        }
    }

    // ── validate_feature_name ─────────────────────────────────────────────

    #[test]
    fn empty_name_is_invalid() {
        assert!(matches!(
            validate_feature_name("  "),
            Err(CliError::InvalidFeatureName { .. })
        ));
    }

    #[test]
    fn path_separator_in_name_is_invalid() {
        assert!(validate_feature_name("a/b").is_err());
        assert!(validate_feature_name("a\\b").is_err());
    }

    #[test]
    fn valid_names_pass() {
        for name in &["order history", "cart", "user_profile", "My-Feature"] {
            assert!(validate_feature_name(name).is_ok(), "failed for: {name}");
        }
    }

    // ── build_config ──────────────────────────────────────────────────────

    #[test]
    fn kotlin_hilt_builds() {
        let args = generate_args(Language::Kotlin, Di::Hilt, None);
        let config = build_config(&args, &AppConfig::default()).unwrap();
        assert_eq!(config.language(), CoreLanguage::Kotlin);
        assert_eq!(config.dependency_injection(), CoreDi::Hilt);
    }

    #[test]
    fn flutter_without_state_is_rejected_by_core() {
        let args = generate_args(Language::Flutter, Di::GetIt, None);
        assert!(build_config(&args, &AppConfig::default()).is_err());
    }

    #[test]
    fn flutter_state_default_comes_from_config() {
        let args = generate_args(Language::Flutter, Di::GetIt, None);
        let mut cfg = AppConfig::default();
        cfg.defaults.state = Some("riverpod".into());

        let config = build_config(&args, &cfg).unwrap();
        assert_eq!(config.state_management(), Some(CoreState::Riverpod));
    }

    #[test]
    fn config_state_default_ignored_for_android() {
        let args = generate_args(Language::Kotlin, Di::Hilt, None);
        let mut cfg = AppConfig::default();
        cfg.defaults.state = Some("riverpod".into());

        let config = build_config(&args, &cfg).unwrap();
        assert_eq!(config.state_management(), None);
    }

    #[test]
    fn bad_config_state_default_is_a_config_error() {
        let args = generate_args(Language::Flutter, Di::GetIt, None);
        let mut cfg = AppConfig::default();
        cfg.defaults.state = Some("mobx".into());

        assert!(matches!(
            build_config(&args, &cfg),
            Err(CliError::ConfigError { .. })
        ));
    }

    // ── resolve_project_root ──────────────────────────────────────────────

    #[test]
    fn flag_beats_config_beats_cwd() {
        let mut args = generate_args(Language::Kotlin, Di::Hilt, None);
        let mut cfg = AppConfig::default();

        assert_eq!(resolve_project_root(&args, &cfg), PathBuf::from("."));

        cfg.project.root = Some(PathBuf::from("/from/config"));
        assert_eq!(
            resolve_project_root(&args, &cfg),
            PathBuf::from("/from/config")
        );

        args.project_root = Some(PathBuf::from("/from/flag"));
        assert_eq!(
            resolve_project_root(&args, &cfg),
            PathBuf::from("/from/flag")
        );
    }
}

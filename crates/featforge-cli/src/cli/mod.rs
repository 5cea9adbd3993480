//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "featforge",
    bin_name = "featforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Clean Architecture feature scaffolding",
    long_about = "featforge generates Clean Architecture MVVM feature slices \
                  for Kotlin, Java and Flutter projects.",
    after_help = "EXAMPLES:\n\
        \x20 featforge generate \"order history\" --lang kotlin --di hilt\n\
        \x20 featforge generate cart --lang flutter --di getit --state riverpod\n\
        \x20 featforge list --lang flutter\n\
        \x20 featforge completions bash > /usr/share/bash-completion/completions/featforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate one feature slice.
    #[command(
        visible_alias = "g",
        about = "Generate a Clean Architecture feature",
        after_help = "EXAMPLES:\n\
            \x20 featforge generate \"order history\" --lang kotlin --di hilt\n\
            \x20 featforge generate invoices --lang java --di dagger\n\
            \x20 featforge generate cart --lang flutter --di none --state cubit"
    )]
    Generate(GenerateArgs),

    /// List supported (language, DI, state) combinations.
    #[command(
        visible_alias = "ls",
        about = "List supported combinations",
        after_help = "EXAMPLES:\n\
            \x20 featforge list\n\
            \x20 featforge list --lang kotlin\n\
            \x20 featforge list --format json"
    )]
    List(ListArgs),

    /// Initialise a featforge configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 featforge init           # default location\n\
            \x20 featforge init --force   # overwrite existing config"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 featforge completions bash > ~/.local/share/bash-completion/completions/featforge\n\
            \x20 featforge completions zsh  > ~/.zfunc/_featforge\n\
            \x20 featforge completions fish > ~/.config/fish/completions/featforge.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `featforge generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Feature name. Free-form; case variants are derived automatically
    /// ("order history" → OrderHistory / orderHistory / order_history).
    #[arg(value_name = "FEATURE", help = "Feature name")]
    pub feature_name: String,

    /// Target language.
    #[arg(
        short = 'l',
        long = "lang",
        value_name = "LANGUAGE",
        value_enum,
        help = "Target language"
    )]
    pub language: Language,

    /// Dependency injection mechanism.
    #[arg(
        short = 'd',
        long = "di",
        value_name = "DI",
        value_enum,
        help = "Dependency injection kind"
    )]
    pub di: Di,

    /// State management pattern (Flutter only).
    #[arg(
        short = 's',
        long = "state",
        value_name = "STATE",
        value_enum,
        help = "State management (flutter only)"
    )]
    pub state: Option<State>,

    /// Project root directory the generated tree hangs off.
    #[arg(
        short = 'p',
        long = "project-root",
        value_name = "DIR",
        help = "Project root (default: current directory)"
    )]
    pub project_root: Option<std::path::PathBuf>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and generate immediately"
    )]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `featforge list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Filter by language.
    #[arg(short = 'l', long = "lang", value_enum, help = "Filter by language")]
    pub language: Option<Language>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One combination per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `featforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `featforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Supported target languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Language {
    /// Also accepted as `kt`.
    #[value(alias = "kt")]
    Kotlin,
    Java,
    /// Also accepted as `dart`.
    #[value(alias = "dart")]
    Flutter,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Kotlin => write!(f, "kotlin"),
            Self::Java => write!(f, "java"),
            Self::Flutter => write!(f, "flutter"),
        }
    }
}

/// Supported dependency-injection kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Di {
    Hilt,
    Koin,
    Dagger,
    #[value(name = "getit", alias = "get_it")]
    GetIt,
    None,
}

impl std::fmt::Display for Di {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hilt => write!(f, "hilt"),
            Self::Koin => write!(f, "koin"),
            Self::Dagger => write!(f, "dagger"),
            Self::GetIt => write!(f, "getit"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Supported state-management kinds (Flutter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum State {
    Riverpod,
    Provider,
    Bloc,
    Cubit,
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Riverpod => write!(f, "riverpod"),
            Self::Provider => write!(f, "provider"),
            Self::Bloc => write!(f, "bloc"),
            Self::Cubit => write!(f, "cubit"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn language_display() {
        assert_eq!(Language::Kotlin.to_string(), "kotlin");
        assert_eq!(Language::Java.to_string(), "java");
        assert_eq!(Language::Flutter.to_string(), "flutter");
    }

    #[test]
    fn di_display() {
        assert_eq!(Di::Hilt.to_string(), "hilt");
        assert_eq!(Di::GetIt.to_string(), "getit");
        assert_eq!(Di::None.to_string(), "none");
    }

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from([
            "featforge",
            "generate",
            "order history",
            "--lang",
            "kotlin",
            "--di",
            "hilt",
        ]);
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn kotlin_alias() {
        let cli = Cli::parse_from([
            "featforge", "generate", "cart", "-l", "kt", "-d", "koin",
        ]);
        if let Commands::Generate(args) = cli.command {
            assert_eq!(args.language, Language::Kotlin);
        } else {
            panic!("expected Generate command");
        }
    }

    #[test]
    fn flutter_with_state() {
        let cli = Cli::parse_from([
            "featforge", "generate", "cart", "-l", "flutter", "-d", "getit", "-s", "riverpod",
        ]);
        if let Commands::Generate(args) = cli.command {
            assert_eq!(args.state, Some(State::Riverpod));
        } else {
            panic!("expected Generate command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["featforge", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}

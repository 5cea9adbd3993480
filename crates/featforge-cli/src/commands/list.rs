//! Implementation of the `featforge list` command.
//!
//! Combinations come straight from the built-in strategy registry, so this
//! output can never drift from what `generate` actually resolves.

use serde::Serialize;

use featforge_adapters::builtin_registry;

use crate::{
    cli::{Language, ListArgs, ListFormat, global::GlobalArgs},
    error::CliResult,
    output::OutputManager,
};

/// One supported combination, as displayed.
#[derive(Debug, Serialize)]
struct Combination {
    language: String,
    di: String,
    state: Option<String>,
}

pub fn execute(args: ListArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let registry = builtin_registry();

    let mut combinations: Vec<Combination> = Vec::new();

    for strategy in registry.di_strategies() {
        combinations.push(Combination {
            language: strategy.language().to_string(),
            di: strategy.di().to_string(),
            state: None,
        });
    }

    for strategy in registry.flutter_strategies() {
        for di in strategy.supported_di() {
            combinations.push(Combination {
                language: "flutter".into(),
                di: di.to_string(),
                state: Some(strategy.state_management().to_string()),
            });
        }
    }

    if let Some(filter) = args.language {
        let wanted = match filter {
            Language::Kotlin => "kotlin",
            Language::Java => "java",
            Language::Flutter => "flutter",
        };
        combinations.retain(|c| c.language == wanted);
    }

    match args.format {
        ListFormat::Table => {
            output.header("Supported combinations:")?;
            for c in &combinations {
                match &c.state {
                    Some(state) => output.print(&format!(
                        "  {:8} di={:7} state={}",
                        c.language, c.di, state
                    ))?,
                    None => output.print(&format!("  {:8} di={}", c.language, c.di))?,
                }
            }
        }
        ListFormat::List => {
            for c in &combinations {
                match &c.state {
                    Some(state) => println!("{}/{}/{}", c.language, c.di, state),
                    None => println!("{}/{}", c.language, c.di),
                }
            }
        }
        ListFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let json =
                serde_json::to_string_pretty(&combinations).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }
        ListFormat::Csv => {
            println!("language,di,state");
            for c in &combinations {
                println!(
                    "{},{},{}",
                    c.language,
                    c.di,
                    c.state.as_deref().unwrap_or("")
                );
            }
        }
    }

    Ok(())
}

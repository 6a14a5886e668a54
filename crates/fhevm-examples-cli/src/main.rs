//! fhevm-examples CLI: scaffolding and documentation for fhEVM examples.
//!
//! Provides commands to generate a standalone example project, generate a whole
//! category of examples side by side, regenerate the GitBook documentation, and
//! list what the registry contains.
//!
//! The work is done by [`fhevm_examples_core`]; this crate only parses arguments,
//! loads configuration, prints progress, and maps failures to exit codes.

mod commands;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use fhevm_examples_core::config::{GeneratorConfig, CONFIG_FILE};
use fhevm_examples_core::registry::Registry;

#[derive(Parser)]
#[command(
    name = "fhevm-examples",
    about = "Scaffold standalone fhEVM example projects and generate their documentation",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to fhevm-examples.config.json (optional; defaults apply when missing)
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// JSON registry replacing the built-in example set
    #[arg(long, global = true, env = "FHEVM_EXAMPLES_REGISTRY")]
    registry: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a standalone example project (lists examples when no id is given)
    CreateExample {
        /// Example id, e.g. access-control
        example_id: Option<String>,

        /// Output root; the project is written to <OUTPUT_DIR>/example-<id>
        output_dir: Option<PathBuf>,

        /// Remove an existing example directory before generating
        #[arg(long)]
        clean: bool,
    },

    /// Generate every example of a category (lists categories when no id is given)
    CreateCategory {
        /// Category id, e.g. basics
        category_id: Option<String>,

        /// Output root; examples are written to <OUTPUT_DIR>/category-<id>
        output_dir: Option<PathBuf>,

        /// Remove existing example directories before generating
        #[arg(long)]
        clean: bool,
    },

    /// Generate GitBook documentation for every registered example
    GenerateDocs {
        /// Documentation root (default from config: ./docs)
        output_dir: Option<PathBuf>,
    },

    /// List registered examples and categories
    List,
}

/// Configuration and registry shared by every command.
pub struct AppContext {
    pub config: GeneratorConfig,
    pub registry: Registry,
}

fn load_context(cli: &Cli) -> anyhow::Result<AppContext> {
    let config = GeneratorConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    let registry = match &cli.registry {
        Some(path) => {
            tracing::info!("using registry {}", path.display());
            Registry::load(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => Registry::builtin(),
    };
    Ok(AppContext { config, registry })
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let mut ctx = load_context(&cli)?;

    match cli.command {
        Commands::CreateExample {
            example_id,
            output_dir,
            clean,
        } => {
            ctx.config.clean |= clean;
            commands::create_example::run(&ctx, example_id.as_deref(), output_dir)
        }
        Commands::CreateCategory {
            category_id,
            output_dir,
            clean,
        } => {
            ctx.config.clean |= clean;
            commands::create_category::run(&ctx, category_id.as_deref(), output_dir)
        }
        Commands::GenerateDocs { output_dir } => commands::generate_docs::run(&ctx, output_dir),
        Commands::List => commands::list::run(&ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_create_example_positional_args() {
        let cli = Cli::parse_from(["fhevm-examples", "create-example", "access-control", "./out"]);
        match cli.command {
            Commands::CreateExample {
                example_id,
                output_dir,
                clean,
            } => {
                assert_eq!(example_id.as_deref(), Some("access-control"));
                assert_eq!(output_dir, Some(PathBuf::from("./out")));
                assert!(!clean);
            }
            _ => panic!("expected create-example"),
        }
    }

    #[test]
    fn test_create_category_without_id_parses() {
        let cli = Cli::parse_from(["fhevm-examples", "create-category", "--clean"]);
        match cli.command {
            Commands::CreateCategory {
                category_id, clean, ..
            } => {
                assert!(category_id.is_none());
                assert!(clean);
            }
            _ => panic!("expected create-category"),
        }
        assert_eq!(cli.config, PathBuf::from(CONFIG_FILE));
    }
}

//! skill-lint CLI.
//!
//! Validates the YAML front matter of Agent Skill documents (`SKILL.md`)
//! before they are published.
//!
//! # Architecture
//!
//! The CLI is organized around subcommands:
//! - `validate` - Check one or more skill documents
//! - `config` - Manage the configuration file
//! - `completions` - Generate shell completions
//!
//! # Examples
//!
//! ```bash
//! # Validate a single skill
//! skill-lint validate .github/skills/salesforce-developer
//!
//! # Validate every skill in a repository, failing on warnings
//! skill-lint validate --recursive --strict .github/skills
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use skill_lint_cli::ConfigAction;
use skill_lint_cli::commands::{self, config::Config, validate::ValidateOptions};
use skill_lint_core::cli::{ExitCode, OutputFormat};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// skill-lint - SKILL.md front matter validator.
///
/// Exits with 0 when every document is valid, 1 when violations are found,
/// and 2 when a document cannot be read or parsed.
#[derive(Parser, Debug)]
#[command(name = "skill-lint")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (json, text, pretty); defaults to the configured format
    #[arg(long = "format", global = true)]
    format: Option<String>,

    /// Configuration file path
    #[arg(long, global = true, env = "SKILL_LINT_CONFIG")]
    config: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate skill documents.
    ///
    /// Each path may be a `SKILL.md` file or a skill directory. Every
    /// violation is reported, not just the first.
    ///
    /// # Examples
    ///
    /// ```bash
    /// skill-lint validate path/to/skill
    /// skill-lint validate --require name --require description SKILL.md
    /// ```
    Validate {
        /// Skill documents or skill directories
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Find every SKILL.md below the given directories
        #[arg(short, long)]
        recursive: bool,

        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,

        /// Required field (dotted path); replaces the configured list
        #[arg(long = "require", value_name = "FIELD", value_delimiter = ',')]
        require: Vec<String>,
    },

    /// Manage the configuration file.
    Config {
        /// Configuration action
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions.
    ///
    /// Generates completion scripts for various shells that can be
    /// sourced or saved to enable tab completion for this CLI.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::INVALID_INPUT
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Loads configuration, installs logging and dispatches the command.
async fn run(cli: Cli) -> Result<ExitCode> {
    let config_path = commands::config::resolve_config_path(cli.config.as_deref())?;

    // `config` subcommands must work even when the file is broken
    let config = match (&cli.command, commands::config::load_config(&config_path)) {
        (_, Ok(config)) => config,
        (Commands::Config { .. }, Err(_)) => Config::default(),
        (_, Err(e)) => return Err(e),
    };

    init_logging(cli.verbose, &config.general.log_level)?;

    let output_format = cli
        .format
        .as_deref()
        .unwrap_or(&config.general.default_format)
        .parse::<OutputFormat>()?;

    execute_command(cli.command, &config, &config_path, output_format).await
}

/// Initializes logging infrastructure.
///
/// `--verbose` forces debug level; otherwise `RUST_LOG` is honored, then the
/// configured level. Logs go to stderr so stdout stays parseable.
fn init_logging(verbose: bool, configured_level: &str) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(configured_level)?,
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    Ok(())
}

/// Routes commands to their handlers and returns the exit code.
async fn execute_command(
    command: Commands,
    config: &Config,
    config_path: &Path,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    match command {
        Commands::Validate {
            paths,
            recursive,
            strict,
            require,
        } => {
            let options = ValidateOptions {
                paths,
                recursive,
                strict,
                require,
            };
            commands::validate::run(&options, config, output_format).await
        }
        Commands::Config { action } => {
            commands::config::run(action, config_path, output_format).await
        }
        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd).await
        }
    }
}

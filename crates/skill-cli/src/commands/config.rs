//! Config command implementation.
//!
//! Manages the skill-lint configuration file.
//!
//! Configuration is stored in TOML format at:
//! - Linux: `~/.config/skill-lint/config.toml`
//! - macOS: `~/Library/Application Support/skill-lint/config.toml`
//! - Windows: `%APPDATA%\skill-lint\config.toml`
//!
//! The location can be overridden with `--config` or `SKILL_LINT_CONFIG`.

use crate::actions::ConfigAction;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use skill_lint_check::{DirectoryNameCheck, RuleConfig, Schema, ValidatorConfig};
use skill_lint_core::FieldPath;
use skill_lint_core::cli::{ExitCode, OutputFormat};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Keys accepted by `config get` and `config set`.
pub const CONFIG_KEYS: [&str; 9] = [
    "general.default_format",
    "general.log_level",
    "schema.required",
    "rules.directory_name",
    "rules.max_name_length",
    "rules.max_description_length",
    "rules.max_body_lines",
    "rules.reference_toc_threshold",
    "rules.toc_scan_lines",
];

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// CLI configuration.
///
/// # Examples
///
/// ```toml
/// [general]
/// default_format = "pretty"
/// log_level = "warn"
///
/// [schema]
/// required = ["name", "description", "license", "metadata.author", "metadata.version", "compatibility"]
///
/// [rules]
/// directory_name = "warn"
/// max_name_length = 64
/// max_description_length = 1024
/// max_body_lines = 500
/// reference_toc_threshold = 100
/// toc_scan_lines = 30
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Required front matter fields
    #[serde(default)]
    pub schema: Schema,

    /// Rule limits
    #[serde(default)]
    pub rules: RuleConfig,
}

/// General configuration settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format (json, text, pretty)
    pub default_format: String,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::default().to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        self.general
            .default_format
            .parse::<OutputFormat>()
            .with_context(|| {
                format!(
                    "invalid default_format, must be one of: {}",
                    OutputFormat::NAMES.join(", ")
                )
            })?;

        if !LOG_LEVELS.contains(&self.general.log_level.as_str()) {
            anyhow::bail!(
                "invalid log_level '{}', must be one of: {}",
                self.general.log_level,
                LOG_LEVELS.join(", ")
            );
        }

        self.validator_config().validate()?;
        Ok(())
    }

    /// Returns the validator settings held by this configuration.
    #[must_use]
    pub fn validator_config(&self) -> ValidatorConfig {
        ValidatorConfig {
            schema: self.schema.clone(),
            rules: self.rules.clone(),
        }
    }
}

/// Resolves the configuration file path.
///
/// An explicit path wins; otherwise the platform config directory is used.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    let config_dir = dirs::config_dir().context("failed to determine config directory")?;
    Ok(config_dir.join("skill-lint").join("config.toml"))
}

/// Loads configuration from `path`, or defaults if it does not exist.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!("Config file not found, using defaults");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;

    config.validate()?;
    Ok(config)
}

/// Saves configuration to `path`, creating parent directories.
fn save_config(config: &Config, path: &Path) -> Result<()> {
    config.validate()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("failed to create config directory")?;
    }

    let toml_str = toml::to_string_pretty(config).context("failed to serialize config")?;
    fs::write(path, toml_str).context("failed to write config file")?;

    debug!("Saved config to {}", path.display());
    Ok(())
}

/// Gets a configuration value by key path (e.g., "rules.max_body_lines").
fn get_config_value_by_key(config: &Config, key: &str) -> Option<String> {
    match key {
        "general.default_format" => Some(config.general.default_format.clone()),
        "general.log_level" => Some(config.general.log_level.clone()),

        "schema.required" => Some(
            config
                .schema
                .required
                .iter()
                .map(FieldPath::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        ),

        "rules.directory_name" => Some(config.rules.directory_name.to_string()),
        "rules.max_name_length" => Some(config.rules.max_name_length.to_string()),
        "rules.max_description_length" => Some(config.rules.max_description_length.to_string()),
        "rules.max_body_lines" => Some(config.rules.max_body_lines.to_string()),
        "rules.reference_toc_threshold" => {
            Some(config.rules.reference_toc_threshold.to_string())
        }
        "rules.toc_scan_lines" => Some(config.rules.toc_scan_lines.to_string()),

        _ => None,
    }
}

fn parse_limit(key: &str, value: &str) -> Result<usize> {
    value
        .parse()
        .with_context(|| format!("invalid value for {key}, must be a number"))
}

/// Sets a configuration value by key path.
fn set_config_value_by_key(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "general.default_format" => {
            config.general.default_format = value.to_string();
        }
        "general.log_level" => {
            config.general.log_level = value.to_string();
        }

        "schema.required" => {
            config.schema.required = value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(FieldPath::new)
                .collect::<skill_lint_core::Result<Vec<_>>>()?;
        }

        "rules.directory_name" => {
            config.rules.directory_name = value.parse::<DirectoryNameCheck>()?;
        }
        "rules.max_name_length" => config.rules.max_name_length = parse_limit(key, value)?,
        "rules.max_description_length" => {
            config.rules.max_description_length = parse_limit(key, value)?;
        }
        "rules.max_body_lines" => config.rules.max_body_lines = parse_limit(key, value)?,
        "rules.reference_toc_threshold" => {
            config.rules.reference_toc_threshold = parse_limit(key, value)?;
        }
        "rules.toc_scan_lines" => config.rules.toc_scan_lines = parse_limit(key, value)?,

        _ => anyhow::bail!("unknown configuration key: {key}"),
    }

    Ok(())
}

/// Initialization result.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InitResult {
    /// Whether a file was written
    pub success: bool,
    /// Status message
    pub message: String,
    /// Configuration file path
    pub path: String,
}

/// Configuration value result.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConfigValue {
    /// Configuration key
    pub key: String,
    /// Configuration value
    pub value: String,
}

/// Set configuration result.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SetResult {
    /// Whether set was successful
    pub success: bool,
    /// The key that was set
    pub key: String,
    /// The new value
    pub value: String,
    /// Status message
    pub message: String,
}

/// Runs the config command against the file at `config_path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written, or a key or
/// value is invalid.
///
/// # Examples
///
/// ```no_run
/// use skill_lint_cli::{ConfigAction, commands::config};
/// use skill_lint_core::cli::OutputFormat;
/// use std::path::Path;
///
/// # #[tokio::main]
/// # async fn main() {
/// let result = config::run(
///     ConfigAction::Show,
///     Path::new("skill-lint.toml"),
///     OutputFormat::Json,
/// )
/// .await;
/// assert!(result.is_ok());
/// # }
/// ```
pub async fn run(
    action: ConfigAction,
    config_path: &Path,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    info!("Config action: {action:?}");

    match action {
        ConfigAction::Init => init_config(config_path, output_format).await,
        ConfigAction::Show => show_config(config_path, output_format).await,
        ConfigAction::Get { key } => get_config(config_path, key, output_format).await,
        ConfigAction::Set { key, value } => {
            set_config(config_path, key, value, output_format).await
        }
        ConfigAction::Path => {
            println!("{}", config_path.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Creates a default configuration file; never overwrites an existing one.
async fn init_config(config_path: &Path, output_format: OutputFormat) -> Result<ExitCode> {
    let result = if config_path.exists() {
        InitResult {
            success: false,
            message: "configuration file already exists".to_string(),
            path: config_path.display().to_string(),
        }
    } else {
        save_config(&Config::default(), config_path)?;
        InitResult {
            success: true,
            message: "configuration file created with default values".to_string(),
            path: config_path.display().to_string(),
        }
    };

    let formatted = crate::formatters::format_output(&result, output_format)
        .context("failed to format init result")?;
    println!("{formatted}");

    Ok(ExitCode::SUCCESS)
}

async fn show_config(config_path: &Path, output_format: OutputFormat) -> Result<ExitCode> {
    let config = load_config(config_path)?;

    let formatted = crate::formatters::format_output(&config, output_format)
        .context("failed to format configuration")?;
    println!("{formatted}");

    Ok(ExitCode::SUCCESS)
}

async fn set_config(
    config_path: &Path,
    key: String,
    value: String,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let mut config = load_config(config_path)?;

    set_config_value_by_key(&mut config, &key, &value)?;
    save_config(&config, config_path)?;

    let result = SetResult {
        success: true,
        message: format!("set '{key}' to '{value}'"),
        key,
        value,
    };

    let formatted = crate::formatters::format_output(&result, output_format)
        .context("failed to format result")?;
    println!("{formatted}");

    Ok(ExitCode::SUCCESS)
}

async fn get_config(
    config_path: &Path,
    key: String,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let config = load_config(config_path)?;

    let Some(value) = get_config_value_by_key(&config, &key) else {
        anyhow::bail!(
            "configuration key '{key}' not found\n\nAvailable keys:\n - {}",
            CONFIG_KEYS.join("\n - ")
        );
    };

    let result = ConfigValue { key, value };
    let formatted = crate::formatters::format_output(&result, output_format)
        .context("failed to format config value")?;
    println!("{formatted}");

    Ok(ExitCode::SUCCESS)
}

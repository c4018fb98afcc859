//! Validator configuration.
//!
//! Controls which front matter fields are required and the limits used by
//! the best-practice rules. The field list is configurable because the
//! front matter conventions differ between agent hosts.
//!
//! # Examples
//!
//! ```
//! use skill_lint_check::{DirectoryNameCheck, ValidatorConfig};
//!
//! // Defaults: name, description, license, metadata.author,
//! // metadata.version and compatibility are required.
//! let config = ValidatorConfig::default();
//! assert_eq!(config.schema.required.len(), 6);
//!
//! // Only require the two fields every agent host understands
//! let config = ValidatorConfig::builder()
//!     .required(["name", "description"])
//!     .directory_name(DirectoryNameCheck::Error)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.schema.required.len(), 2);
//! ```

use serde::{Deserialize, Serialize};
use skill_lint_core::{Error, FieldPath, Result};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Fields required when no configuration says otherwise.
pub const DEFAULT_REQUIRED_FIELDS: [&str; 6] = [
    "name",
    "description",
    "license",
    "metadata.author",
    "metadata.version",
    "compatibility",
];

/// How a `name` that differs from its directory is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryNameCheck {
    /// Do not compare the name with the directory.
    Off,
    /// Report a mismatch as a warning.
    #[default]
    Warn,
    /// Report a mismatch as a violation.
    Error,
}

impl DirectoryNameCheck {
    /// Returns the configuration name of the mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for DirectoryNameCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DirectoryNameCheck {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(Error::InvalidArgument(format!(
                "invalid directory name check: '{s}' (expected: off, warn, or error)"
            ))),
        }
    }
}

/// Front matter schema: the fields that must be present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schema {
    /// Required fields as dotted paths, checked in order.
    pub required: Vec<FieldPath>,
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            required: DEFAULT_REQUIRED_FIELDS
                .iter()
                .filter_map(|field| FieldPath::new(*field).ok())
                .collect(),
        }
    }
}

impl Schema {
    /// Returns `true` if `field` is in the required list.
    #[must_use]
    pub fn requires(&self, field: &str) -> bool {
        self.required.iter().any(|path| path.as_str() == field)
    }
}

/// Limits for the best-practice rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Whether `name` must match the containing directory.
    pub directory_name: DirectoryNameCheck,

    /// Maximum `name` length in characters.
    pub max_name_length: usize,

    /// Maximum `description` length in characters, whitespace collapsed.
    pub max_description_length: usize,

    /// Body length above which a warning is reported.
    pub max_body_lines: usize,

    /// Reference file length above which a table of contents is expected.
    pub reference_toc_threshold: usize,

    /// Number of leading lines searched for a table of contents.
    pub toc_scan_lines: usize,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            directory_name: DirectoryNameCheck::default(),
            max_name_length: 64,
            max_description_length: 1024,
            max_body_lines: 500,
            reference_toc_threshold: 100,
            toc_scan_lines: 30,
        }
    }
}

/// Complete validator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Required fields.
    #[serde(default)]
    pub schema: Schema,

    /// Rule limits.
    #[serde(default)]
    pub rules: RuleConfig,
}

impl ValidatorConfig {
    /// Creates a new configuration builder starting from the defaults.
    #[must_use]
    pub fn builder() -> ValidatorConfigBuilder {
        ValidatorConfigBuilder::new()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if a required field is listed twice or
    /// a limit is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use skill_lint_check::ValidatorConfig;
    ///
    /// assert!(ValidatorConfig::default().validate().is_ok());
    ///
    /// let mut invalid = ValidatorConfig::default();
    /// invalid.rules.max_name_length = 0;
    /// assert!(invalid.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for field in &self.schema.required {
            if !seen.insert(field.as_str()) {
                return Err(Error::ConfigError {
                    message: format!("required field '{field}' is listed more than once"),
                });
            }
        }

        let limits = [
            ("rules.max_name_length", self.rules.max_name_length),
            (
                "rules.max_description_length",
                self.rules.max_description_length,
            ),
            ("rules.max_body_lines", self.rules.max_body_lines),
            (
                "rules.reference_toc_threshold",
                self.rules.reference_toc_threshold,
            ),
            ("rules.toc_scan_lines", self.rules.toc_scan_lines),
        ];
        if let Some((key, _)) = limits.iter().find(|(_, value)| *value == 0) {
            return Err(Error::ConfigError {
                message: format!("{key} must be greater than zero"),
            });
        }

        Ok(())
    }
}

/// Builder for [`ValidatorConfig`].
#[derive(Debug, Clone, Default)]
pub struct ValidatorConfigBuilder {
    required: Option<Vec<String>>,
    rules: RuleConfig,
}

impl ValidatorConfigBuilder {
    /// Creates a builder holding the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the required field list.
    #[must_use]
    pub fn required<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Sets how a name/directory mismatch is reported.
    #[must_use]
    pub const fn directory_name(mut self, check: DirectoryNameCheck) -> Self {
        self.rules.directory_name = check;
        self
    }

    /// Sets the maximum `name` length.
    #[must_use]
    pub const fn max_name_length(mut self, limit: usize) -> Self {
        self.rules.max_name_length = limit;
        self
    }

    /// Sets the maximum `description` length.
    #[must_use]
    pub const fn max_description_length(mut self, limit: usize) -> Self {
        self.rules.max_description_length = limit;
        self
    }

    /// Sets the body length warning threshold.
    #[must_use]
    pub const fn max_body_lines(mut self, limit: usize) -> Self {
        self.rules.max_body_lines = limit;
        self
    }

    /// Sets the reference file length above which a TOC is expected.
    #[must_use]
    pub const fn reference_toc_threshold(mut self, limit: usize) -> Self {
        self.rules.reference_toc_threshold = limit;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a field path is malformed or the configuration
    /// fails [`ValidatorConfig::validate`].
    pub fn build(self) -> Result<ValidatorConfig> {
        let schema = match self.required {
            Some(fields) => Schema {
                required: fields
                    .into_iter()
                    .map(FieldPath::new)
                    .collect::<Result<Vec<_>>>()?,
            },
            None => Schema::default(),
        };

        let config = ValidatorConfig {
            schema,
            rules: self.rules,
        };
        config.validate()?;
        Ok(config)
    }
}

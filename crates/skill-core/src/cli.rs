//! CLI-specific types.
//!
//! Strong types for output selection and process exit status, shared by the
//! library (which never exits) and the binary (which does).
//!
//! # Examples
//!
//! ```
//! use skill_lint_core::cli::{ExitCode, OutputFormat};
//!
//! let format = OutputFormat::Pretty;
//! assert_eq!(format.as_str(), "pretty");
//!
//! let code = ExitCode::SUCCESS;
//! assert_eq!(code.as_i32(), 0);
//! ```

use std::fmt;
use std::str::FromStr;

/// CLI output format.
///
/// All formats carry the same findings with different presentation.
///
/// # Examples
///
/// ```
/// use skill_lint_core::cli::OutputFormat;
///
/// let format: OutputFormat = "json".parse().unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// JSON output for machine parsing
    Json,
    /// Compact single-line JSON for scripts
    Text,
    /// Human-readable report with colors
    #[default]
    Pretty,
}

impl OutputFormat {
    /// Every accepted format name.
    pub const NAMES: [&'static str; 3] = ["json", "text", "pretty"];

    /// Returns the string representation of the format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
            Self::Pretty => "pretty",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            "pretty" => Ok(Self::Pretty),
            _ => Err(crate::Error::InvalidArgument(format!(
                "invalid output format: '{s}' (expected: json, text, or pretty)"
            ))),
        }
    }
}

/// CLI exit code with semantic meaning.
///
/// # Examples
///
/// ```
/// use skill_lint_core::cli::ExitCode;
///
/// assert!(ExitCode::SUCCESS.is_success());
/// assert_eq!(ExitCode::VALIDATION_FAILED.as_i32(), 1);
/// assert_eq!(ExitCode::INVALID_INPUT.as_i32(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Every document is valid (exit code 0).
    pub const SUCCESS: Self = Self(0);

    /// At least one document has violations (exit code 1).
    pub const VALIDATION_FAILED: Self = Self(1);

    /// A document could not be validated: missing file, malformed front
    /// matter, unreadable or oversized input (exit code 2).
    pub const INVALID_INPUT: Self = Self(2);

    /// Creates an exit code from an integer value.
    #[must_use]
    pub const fn from_i32(code: i32) -> Self {
        Self(code)
    }

    /// Returns the exit code as an integer.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }

    /// Checks if the exit code represents success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 == 0
    }

    /// Combines two outcomes, keeping the more severe one.
    ///
    /// # Examples
    ///
    /// ```
    /// use skill_lint_core::cli::ExitCode;
    ///
    /// let code = ExitCode::SUCCESS.worst(ExitCode::VALIDATION_FAILED);
    /// assert_eq!(code, ExitCode::VALIDATION_FAILED);
    /// assert_eq!(code.worst(ExitCode::INVALID_INPUT), ExitCode::INVALID_INPUT);
    /// ```
    #[must_use]
    pub fn worst(self, other: Self) -> Self {
        self.max(other)
    }
}

impl Default for ExitCode {
    fn default() -> Self {
        Self::SUCCESS
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.0
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

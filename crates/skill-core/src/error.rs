//! Error types for skill-lint.
//!
//! Fatal conditions that stop validation of a single document live here.
//! Rule findings (missing fields, over-long names, ...) are not errors: they
//! are collected into a report by the validator.
//!
//! # Examples
//!
//! ```
//! use skill_lint_core::{Error, Result};
//!
//! fn require_path(path: &str) -> Result<()> {
//!     if path.is_empty() {
//!         return Err(Error::InvalidArgument("path cannot be empty".to_string()));
//!     }
//!     Ok(())
//! }
//!
//! let err = require_path("").unwrap_err();
//! assert!(err.is_invalid_argument());
//! ```

use std::path::Path;
use thiserror::Error;

/// Main error type for skill-lint.
///
/// Shared by every crate in the workspace so that the CLI can map each
/// variant to an exit code without inspecting messages.
#[derive(Error, Debug)]
pub enum Error {
    /// The target document or skill directory does not exist.
    #[error("skill document not found: {path}")]
    NotFound {
        /// Sanitized path of the missing document
        path: String,
    },

    /// The document has no well-formed front matter block.
    ///
    /// Raised for a missing opening or closing `---` delimiter, for YAML
    /// that does not parse, and for front matter that is not a mapping.
    #[error("invalid front matter in {path}: {reason}")]
    Parse {
        /// Sanitized path of the offending document
        path: String,
        /// What is wrong with the front matter
        reason: String,
    },

    /// The document exists but cannot be read.
    ///
    /// Falls in the same category as [`Error::NotFound`]: see
    /// [`Error::is_not_found`].
    #[error("skill document not readable: {path}")]
    Unreadable {
        /// Sanitized path of the document
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An I/O failure outside of reading a document.
    #[error("failed to read {path}")]
    Io {
        /// Sanitized path being read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The document exceeds the maximum size the validator will read.
    #[error("file too large: {path} ({size} bytes exceeds {limit} limit)")]
    FileTooLarge {
        /// Sanitized path of the document
        path: String,
        /// Actual size in bytes
        size: u64,
        /// Maximum accepted size in bytes
        limit: u64,
    },

    /// A recursive scan found more skill documents than the configured limit.
    #[error("too many skill documents under {path}: found more than {limit}")]
    TooManyFiles {
        /// Sanitized root of the scan
        path: String,
        /// Maximum number of documents per scan
        limit: usize,
    },

    /// Configuration is invalid or contradictory.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Invalid argument passed by the caller or on the command line.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A domain value failed construction-time validation.
    #[error("Validation error in {field}: {reason}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Detailed reason for the validation failure
        reason: String,
    },
}

impl Error {
    /// Creates a [`Error::NotFound`] for `path`, hiding the home directory.
    #[must_use]
    pub fn not_found(path: &Path) -> Self {
        Self::NotFound {
            path: sanitize_path(path),
        }
    }

    /// Creates a [`Error::Parse`] for `path`, hiding the home directory.
    #[must_use]
    pub fn parse(path: &Path, reason: impl Into<String>) -> Self {
        Self::Parse {
            path: sanitize_path(path),
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::Unreadable`] for `path`, hiding the home directory.
    #[must_use]
    pub fn unreadable(path: &Path, source: std::io::Error) -> Self {
        Self::Unreadable {
            path: sanitize_path(path),
            source,
        }
    }

    /// Creates an [`Error::Io`] for `path`, hiding the home directory.
    #[must_use]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: sanitize_path(path),
            source,
        }
    }

    /// Returns `true` if the document does not exist or is not readable.
    ///
    /// # Examples
    ///
    /// ```
    /// use skill_lint_core::Error;
    /// use std::io;
    /// use std::path::Path;
    ///
    /// let err = Error::not_found(Path::new("/tmp/missing/SKILL.md"));
    /// assert!(err.is_not_found());
    ///
    /// let denied = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
    /// let err = Error::unreadable(Path::new("/tmp/locked/SKILL.md"), denied);
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Unreadable { .. })
    }

    /// Returns `true` if the front matter could not be parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use skill_lint_core::Error;
    /// use std::path::Path;
    ///
    /// let err = Error::parse(Path::new("SKILL.md"), "missing closing `---` delimiter");
    /// assert!(err.is_parse_error());
    /// assert!(err.to_string().contains("missing closing"));
    /// ```
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Returns `true` if this is an I/O error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is an invalid argument error.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns `true` if this is a domain validation error.
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }

    /// Returns `true` if the error stops validation of a single document.
    ///
    /// Document-level errors are reported per file; the remaining files of
    /// a batch are still validated.
    #[must_use]
    pub const fn is_document_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::Unreadable { .. }
                | Self::Parse { .. }
                | Self::Io { .. }
                | Self::FileTooLarge { .. }
        )
    }
}

/// Sanitize a path for error messages.
///
/// Replaces the home directory with `~` so usernames and full filesystem
/// paths do not leak into CI logs.
#[must_use]
pub fn sanitize_path(path: &Path) -> String {
    let path_str = path.display().to_string();
    dirs::home_dir().map_or_else(
        || path_str.clone(),
        |home| {
            let home_str = home.display().to_string();
            if home_str.is_empty() || home_str == "/" {
                path_str.clone()
            } else {
                path_str.replace(&home_str, "~")
            }
        },
    )
}

/// Result type alias for skill-lint operations.
///
/// # Examples
///
/// ```
/// use skill_lint_core::{Error, Result};
///
/// fn positive(value: i32) -> Result<i32> {
///     if value <= 0 {
///         return Err(Error::ConfigError {
///             message: "value must be positive".to_string(),
///         });
///     }
///     Ok(value)
/// }
///
/// assert!(positive(5).is_ok());
/// assert!(positive(-1).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

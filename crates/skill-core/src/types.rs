//! Strong domain types for skill-lint.
//!
//! # Examples
//!
//! ```
//! use skill_lint_core::FieldPath;
//!
//! let path = FieldPath::new("metadata.version").unwrap();
//! assert_eq!(path.segments().collect::<Vec<_>>(), ["metadata", "version"]);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dotted path to a front matter field (e.g. `metadata.author`).
///
/// A path is a non-empty sequence of non-empty segments separated by `.`.
/// Segments may not contain whitespace.
///
/// # Examples
///
/// ```
/// use skill_lint_core::FieldPath;
///
/// assert!(FieldPath::new("name").is_ok());
/// assert!(FieldPath::new("metadata.author").is_ok());
///
/// assert!(FieldPath::new("").is_err());
/// assert!(FieldPath::new("metadata..author").is_err());
/// assert!(FieldPath::new("meta data").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldPath(String);

impl FieldPath {
    /// Creates a validated field path.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ValidationError`] if the path is empty, has an
    /// empty segment, or contains whitespace.
    pub fn new(path: impl Into<String>) -> crate::Result<Self> {
        let path = path.into();
        let trimmed = path.trim();

        if trimmed.is_empty() {
            return Err(crate::Error::ValidationError {
                field: "field_path".to_string(),
                reason: "field path cannot be empty".to_string(),
            });
        }

        if trimmed.split('.').any(str::is_empty) {
            return Err(crate::Error::ValidationError {
                field: "field_path".to_string(),
                reason: format!("field path '{trimmed}' has an empty segment"),
            });
        }

        if trimmed.chars().any(char::is_whitespace) {
            return Err(crate::Error::ValidationError {
                field: "field_path".to_string(),
                reason: format!("field path '{trimmed}' cannot contain whitespace"),
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Returns the path made of the first `len` segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use skill_lint_core::FieldPath;
    ///
    /// let path = FieldPath::new("metadata.author").unwrap();
    /// assert_eq!(path.prefix(1), "metadata");
    /// assert_eq!(path.prefix(2), "metadata.author");
    /// ```
    #[must_use]
    pub fn prefix(&self, len: usize) -> String {
        self.segments().take(len).collect::<Vec<_>>().join(".")
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for FieldPath {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for FieldPath {
    type Error = crate::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.0
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

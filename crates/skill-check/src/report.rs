//! Validation report types.
//!
//! A report collects every finding for one document. Violations make the
//! document invalid; warnings flag best-practice issues and only fail a run
//! in strict mode.

use serde::Serialize;
use skill_lint_core::cli::ExitCode;
use std::fmt;
use std::path::{Path, PathBuf};

/// Finding severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Makes the document invalid.
    Error,
    /// Best-practice issue.
    Warning,
}

/// Rule that produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    /// A required field is missing or empty.
    RequiredField,
    /// A field holds the wrong kind of YAML value.
    FieldType,
    /// `name` has invalid characters or hyphen placement.
    NameFormat,
    /// `name` is too long.
    NameLength,
    /// `name` differs from the containing directory.
    DirectoryName,
    /// `description` is too long.
    DescriptionLength,
    /// `metadata.version` is not semantic-version-like.
    VersionFormat,
    /// `license` is absent.
    License,
    /// The body is too long.
    BodyLength,
    /// A long reference file has no table of contents.
    ReferenceToc,
    /// A reference file links to another reference file.
    NestedReference,
}

impl Rule {
    /// Returns the rule identifier used in JSON output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RequiredField => "required-field",
            Self::FieldType => "field-type",
            Self::NameFormat => "name-format",
            Self::NameLength => "name-length",
            Self::DirectoryName => "directory-name",
            Self::DescriptionLength => "description-length",
            Self::VersionFormat => "version-format",
            Self::License => "license",
            Self::BodyLength => "body-length",
            Self::ReferenceToc => "reference-toc",
            Self::NestedReference => "nested-reference",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single finding.
///
/// Displays as its message, one line per finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Rule that produced the finding
    pub rule: Rule,
    /// Front matter field or file the finding is about
    pub field: String,
    /// Human-readable message
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validation report for one document.
///
/// # Examples
///
/// ```
/// use skill_lint_check::{Rule, ValidationReport};
/// use std::path::Path;
///
/// let mut report = ValidationReport::new(Path::new("SKILL.md"));
/// assert!(report.is_valid());
///
/// report.error(Rule::RequiredField, "description", "missing required field: description");
/// assert!(!report.is_valid());
/// assert_eq!(report.violation_messages(), ["missing required field: description"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Document that was validated
    pub path: PathBuf,
    /// Whether the document has no violations
    pub valid: bool,
    /// Error findings
    pub violations: Vec<Finding>,
    /// Warning findings
    pub warnings: Vec<Finding>,
}

impl ValidationReport {
    /// Creates an empty, valid report.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            valid: true,
            violations: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Records a finding with the given severity.
    ///
    /// A finding whose message is already recorded at the same severity is
    /// dropped, so a missing parent mapping is reported once.
    pub fn push(
        &mut self,
        severity: Severity,
        rule: Rule,
        field: impl Into<String>,
        message: impl Into<String>,
    ) {
        let finding = Finding {
            rule,
            field: field.into(),
            message: message.into(),
        };

        let list = match severity {
            Severity::Error => &mut self.violations,
            Severity::Warning => &mut self.warnings,
        };
        if list.iter().any(|f| f.message == finding.message) {
            return;
        }
        list.push(finding);
        self.valid = self.violations.is_empty();
    }

    /// Records a violation.
    pub fn error(&mut self, rule: Rule, field: impl Into<String>, message: impl Into<String>) {
        self.push(Severity::Error, rule, field, message);
    }

    /// Records a warning.
    pub fn warn(&mut self, rule: Rule, field: impl Into<String>, message: impl Into<String>) {
        self.push(Severity::Warning, rule, field, message);
    }

    /// Returns `true` if there are no violations.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns `true` if the document passes; in strict mode warnings also
    /// fail it.
    #[must_use]
    pub fn passes(&self, strict: bool) -> bool {
        self.valid && (!strict || self.warnings.is_empty())
    }

    /// Violation messages in report order.
    #[must_use]
    pub fn violation_messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    /// Warning messages in report order.
    #[must_use]
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }

    /// Exit code for this report alone.
    #[must_use]
    pub fn exit_code(&self, strict: bool) -> ExitCode {
        if self.passes(strict) {
            ExitCode::SUCCESS
        } else {
            ExitCode::VALIDATION_FAILED
        }
    }
}

//! Skill document validator.
//!
//! Validation is fail-slow: every rule runs and every finding lands in the
//! [`ValidationReport`]. Only conditions that make a document unreadable
//! (missing file, malformed front matter, oversized file) are returned as
//! errors.
//!
//! # Examples
//!
//! ```
//! use skill_lint_check::SkillValidator;
//! use std::path::Path;
//!
//! let validator = SkillValidator::new();
//! let content = "---
//! name: salesforce-developer
//! license: MIT
//! metadata:
//!   author: test
//!   version: \"1.0\"
//! compatibility: VS Code
//! ---
//! # Body text
//! ";
//!
//! let report = validator.validate_content(content, Path::new("SKILL.md")).unwrap();
//! assert!(!report.is_valid());
//! assert_eq!(report.violation_messages(), ["missing required field: description"]);
//! ```

use crate::config::ValidatorConfig;
use crate::frontmatter::parse_front_matter;
use crate::references::check_references;
use crate::report::ValidationReport;
use crate::rules::{DocumentContext, check_document};
use crate::scanner::{MAX_FILE_SIZE, resolve_document_path};
use skill_lint_core::{Error, Result, sanitize_path};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinSet;

/// Result of validating one document in a batch.
#[derive(Debug)]
pub struct DocumentOutcome {
    /// Document path as it was requested
    pub path: PathBuf,
    /// Report, or the error that stopped validation
    pub result: Result<ValidationReport>,
}

/// Validates skill documents against a [`ValidatorConfig`].
///
/// Cheap to clone; the configuration is shared.
#[derive(Debug, Clone, Default)]
pub struct SkillValidator {
    config: Arc<ValidatorConfig>,
}

impl SkillValidator {
    /// Creates a validator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the configuration is invalid.
    pub fn with_config(config: ValidatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
        })
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates document content that is already in memory.
    ///
    /// `path` is only used for the report and error messages; the directory
    /// name and `references/` checks are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the front matter is missing or malformed.
    pub fn validate_content(&self, content: &str, path: &Path) -> Result<ValidationReport> {
        self.check_content(content, path, &DocumentContext::default())
    }

    /// Reads and validates a document or skill directory.
    ///
    /// A directory is validated through its `SKILL.md`, and the directory
    /// name and `references/` files are checked as well.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if the document does not exist
    /// - [`Error::Unreadable`] if it exists but cannot be read as UTF-8 text
    /// - [`Error::FileTooLarge`] if it exceeds the size limit
    /// - [`Error::Parse`] if the front matter is missing or malformed
    pub async fn validate_path(&self, target: &Path) -> Result<ValidationReport> {
        let document = resolve_document_path(target);

        let metadata = match tokio::fs::metadata(&document).await {
            Ok(metadata) if metadata.is_file() => metadata,
            Ok(_) => return Err(Error::not_found(&document)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::not_found(&document));
            }
            Err(e) => return Err(Error::unreadable(&document, e)),
        };

        if metadata.len() > MAX_FILE_SIZE {
            return Err(Error::FileTooLarge {
                path: sanitize_path(&document),
                size: metadata.len(),
                limit: MAX_FILE_SIZE,
            });
        }

        let content = tokio::fs::read_to_string(&document)
            .await
            .map_err(|e| Error::unreadable(&document, e))?;

        // Canonicalize so `.` and relative targets still yield a directory name
        let skill_dir = tokio::fs::canonicalize(&document)
            .await
            .ok()
            .and_then(|path| path.parent().map(Path::to_path_buf));
        let context = DocumentContext {
            directory_name: skill_dir
                .as_deref()
                .and_then(Path::file_name)
                .and_then(|name| name.to_str())
                .map(ToString::to_string),
        };

        let mut report = self.check_content(&content, &document, &context)?;
        if let Some(dir) = &skill_dir {
            check_references(dir, &self.config.rules, &mut report).await;
        }

        tracing::debug!(
            path = %sanitize_path(&document),
            violations = report.violations.len(),
            warnings = report.warnings.len(),
            "validated skill document"
        );
        Ok(report)
    }

    /// Validates several documents concurrently.
    ///
    /// One outcome is returned per input path, in input order. An error for
    /// one document does not stop the others.
    pub async fn validate_many(&self, paths: Vec<PathBuf>) -> Vec<DocumentOutcome> {
        let mut join_set = JoinSet::new();
        for (index, path) in paths.iter().cloned().enumerate() {
            let validator = self.clone();
            join_set.spawn(async move {
                let result = validator.validate_path(&path).await;
                (index, result)
            });
        }

        let mut results: Vec<Option<Result<ValidationReport>>> =
            std::iter::repeat_with(|| None).take(paths.len()).collect();
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, result)) => results[index] = Some(result),
                Err(e) => tracing::error!("Validation task failed: {e}"),
            }
        }

        paths
            .into_iter()
            .zip(results)
            .map(|(path, result)| {
                let result = result.unwrap_or_else(|| {
                    Err(Error::io(
                        &path,
                        io::Error::other("validation task did not complete"),
                    ))
                });
                DocumentOutcome { path, result }
            })
            .collect()
    }

    fn check_content(
        &self,
        content: &str,
        path: &Path,
        context: &DocumentContext,
    ) -> Result<ValidationReport> {
        let document = parse_front_matter(content).map_err(|e| Error::parse(path, e.to_string()))?;

        let mut report = ValidationReport::new(path);
        check_document(
            &document.front_matter,
            document.body,
            context,
            &self.config,
            &mut report,
        );
        Ok(report)
    }
}

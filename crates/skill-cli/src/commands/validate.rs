//! Validate command implementation.
//!
//! Validates one or more skill documents and reports every violation and
//! warning. The exit code is the worst outcome across all documents:
//! 0 when all pass, 1 on violations (or warnings in strict mode), 2 when a
//! document could not be validated at all.

use super::config::Config;
use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use skill_lint_check::{Finding, SkillValidator, ValidationReport, discover_skill_documents};
use skill_lint_core::cli::{ExitCode, OutputFormat};
use skill_lint_core::{Error, FieldPath};
use std::collections::HashSet;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const RULE_WIDTH: usize = 60;

/// Options for the validate command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidateOptions {
    /// Skill documents or skill directories
    pub paths: Vec<PathBuf>,
    /// Scan directories for every `SKILL.md` below them
    pub recursive: bool,
    /// Fail on warnings as well as violations
    pub strict: bool,
    /// Replaces the configured required fields when non-empty
    pub require: Vec<String>,
}

/// Result for one document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentResult {
    /// Document path
    pub path: String,
    /// Whether the document has no violations
    pub valid: bool,
    /// Error findings
    pub violations: Vec<Finding>,
    /// Warning findings
    pub warnings: Vec<Finding>,
    /// Why the document could not be validated, if it could not
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DocumentResult {
    fn from_report(report: ValidationReport) -> Self {
        Self {
            path: report.path.display().to_string(),
            valid: report.valid,
            violations: report.violations,
            warnings: report.warnings,
            error: None,
        }
    }

    fn from_error(path: &Path, error: Error) -> Self {
        Self {
            path: path.display().to_string(),
            valid: false,
            violations: Vec::new(),
            warnings: Vec::new(),
            error: Some(error_message(error)),
        }
    }
}

/// Summary of a validate run.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationSummary {
    /// Whether the run passed
    pub passed: bool,
    /// Whether warnings fail the run
    pub strict: bool,
    /// Number of documents checked
    pub documents: usize,
    /// Total violations
    pub violations: usize,
    /// Total warnings
    pub warnings: usize,
    /// Documents that could not be validated
    pub errors: usize,
    /// Per-document results in path order
    pub results: Vec<DocumentResult>,
}

/// Builds the validator from configuration and `--require` overrides.
pub fn build_validator(config: &Config, require: &[String]) -> Result<SkillValidator> {
    let mut validator_config = config.validator_config();
    if !require.is_empty() {
        validator_config.schema.required = require
            .iter()
            .map(|field| FieldPath::new(field.as_str()))
            .collect::<skill_lint_core::Result<Vec<_>>>()
            .context("invalid --require field")?;
    }
    Ok(SkillValidator::with_config(validator_config)?)
}

/// Runs the validate command.
///
/// # Errors
///
/// Returns an error if the configuration or a `--require` field is invalid,
/// or output formatting fails. Per-document failures are reported and
/// mapped to [`ExitCode::INVALID_INPUT`] instead.
pub async fn run(
    options: &ValidateOptions,
    config: &Config,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    info!(
        "Validating {} path(s), recursive: {}, strict: {}",
        options.paths.len(),
        options.recursive,
        options.strict
    );

    let validator = build_validator(config, &options.require)?;
    let summary = validate_all(&validator, options).await;
    let exit_code = summary_exit_code(&summary);

    match output_format {
        OutputFormat::Pretty => {
            for result in &summary.results {
                match &result.error {
                    Some(error) => eprintln!("{} {error}", "ERROR:".red().bold()),
                    None => print!("{}", render_result(result)),
                }
            }
            if summary.documents > 1 {
                println!("{}", render_totals(&summary));
            }
        }
        format => {
            let formatted = crate::formatters::format_output(&summary, format)
                .context("failed to format validation results")?;
            println!("{formatted}");
        }
    }

    Ok(exit_code)
}

/// Discovers and validates every target, collecting one result per document.
pub async fn validate_all(
    validator: &SkillValidator,
    options: &ValidateOptions,
) -> ValidationSummary {
    // Discovery failures keep their slot so output follows argument order
    let mut planned: Vec<(PathBuf, Option<Error>)> = Vec::new();
    let mut seen = HashSet::new();
    for target in &options.paths {
        match discover_skill_documents(target, options.recursive) {
            Ok(documents) => {
                for document in documents {
                    if seen.insert(document.clone()) {
                        planned.push((document, None));
                    }
                }
            }
            Err(e) => {
                debug!("Discovery failed for {}: {}", target.display(), e);
                planned.push((target.clone(), Some(e)));
            }
        }
    }

    let to_validate: Vec<PathBuf> = planned
        .iter()
        .filter(|(_, error)| error.is_none())
        .map(|(path, _)| path.clone())
        .collect();
    let mut outcomes = validator.validate_many(to_validate).await.into_iter();

    let mut results = Vec::with_capacity(planned.len());
    for (path, error) in planned {
        let result = match error {
            Some(e) => DocumentResult::from_error(&path, e),
            None => match outcomes.next().map(|outcome| outcome.result) {
                Some(Ok(report)) => DocumentResult::from_report(report),
                Some(Err(e)) => DocumentResult::from_error(&path, e),
                None => continue,
            },
        };
        results.push(result);
    }

    let strict = options.strict;
    let passed = results
        .iter()
        .all(|r| r.error.is_none() && r.valid && (!strict || r.warnings.is_empty()));

    ValidationSummary {
        passed,
        strict,
        documents: results.len(),
        violations: results.iter().map(|r| r.violations.len()).sum(),
        warnings: results.iter().map(|r| r.warnings.len()).sum(),
        errors: results.iter().filter(|r| r.error.is_some()).count(),
        results,
    }
}

/// Worst exit code across all documents.
#[must_use]
pub fn summary_exit_code(summary: &ValidationSummary) -> ExitCode {
    summary
        .results
        .iter()
        .map(|result| {
            if result.error.is_some() {
                ExitCode::INVALID_INPUT
            } else if !result.valid || (summary.strict && !result.warnings.is_empty()) {
                ExitCode::VALIDATION_FAILED
            } else {
                ExitCode::SUCCESS
            }
        })
        .fold(ExitCode::SUCCESS, ExitCode::worst)
}

/// Renders one document result as a human-readable block.
#[must_use]
pub fn render_result(result: &DocumentResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Validating skill: {}", result.path.bold());
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));

    if !result.violations.is_empty() {
        let _ = writeln!(
            out,
            "\n{}",
            format!("ERRORS ({}):", result.violations.len()).red().bold()
        );
        for finding in &result.violations {
            let _ = writeln!(out, "  - {finding}");
        }
    }

    if !result.warnings.is_empty() {
        let _ = writeln!(
            out,
            "\n{}",
            format!("WARNINGS ({}):", result.warnings.len()).yellow().bold()
        );
        for finding in &result.warnings {
            let _ = writeln!(out, "  - {finding}");
        }
    }

    if result.violations.is_empty() && result.warnings.is_empty() {
        let _ = writeln!(out, "\n{}", "All checks passed!".green().bold());
    }

    out.push('\n');
    out
}

fn render_totals(summary: &ValidationSummary) -> String {
    let failed = summary
        .results
        .iter()
        .filter(|r| r.error.is_some() || !r.valid || (summary.strict && !r.warnings.is_empty()))
        .count();
    let line = format!(
        "Validated {} documents: {} passed, {failed} failed ({} violations, {} warnings)",
        summary.documents,
        summary.documents - failed,
        summary.violations,
        summary.warnings
    );
    if failed == 0 {
        line.green().to_string()
    } else {
        line.red().to_string()
    }
}

/// Error message including its source chain.
fn error_message(error: Error) -> String {
    format!("{:#}", anyhow::Error::new(error))
}

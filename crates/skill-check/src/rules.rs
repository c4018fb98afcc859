//! Front matter and body rules.
//!
//! Every rule appends to the report instead of returning early, so a single
//! run surfaces all problems of a document at once.

use crate::config::{DirectoryNameCheck, ValidatorConfig};
use crate::frontmatter::{FrontMatter, Lookup, is_blank, scalar_to_string};
use crate::report::{Rule, Severity, ValidationReport};
use regex::Regex;
use serde_yaml::Value;
use std::sync::LazyLock;

// Lowercase alphanumeric + hyphens, not starting or ending with a hyphen
static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]([a-z0-9-]*[a-z0-9])?$").expect("valid regex"));
// MAJOR[.MINOR[.PATCH]] with optional pre-release or build suffix
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+(\.\d+){0,2}([-+][0-9A-Za-z.+-]+)?$").expect("valid regex")
});

/// What the rules know about where a document lives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentContext {
    /// Name of the directory containing the document, if known.
    pub directory_name: Option<String>,
}

/// Runs every front matter and body rule.
pub fn check_document(
    front_matter: &FrontMatter,
    body: &str,
    context: &DocumentContext,
    config: &ValidatorConfig,
    report: &mut ValidationReport,
) {
    check_required_fields(front_matter, config, report);
    check_name(front_matter, context, config, report);
    check_description(front_matter, config, report);
    check_version(front_matter, report);
    check_license(front_matter, config, report);
    check_body(body, config, report);
}

/// Required fields must be present and non-blank.
///
/// When a parent mapping is absent only the parent is reported, so
/// `metadata.author` and `metadata.version` collapse into one
/// `missing required field: metadata` violation.
fn check_required_fields(
    front_matter: &FrontMatter,
    config: &ValidatorConfig,
    report: &mut ValidationReport,
) {
    for path in &config.schema.required {
        match front_matter.lookup(path) {
            Lookup::Found(value) if is_blank(value) => {
                report.error(
                    Rule::RequiredField,
                    path.as_str(),
                    format!("empty required field: {path}"),
                );
            }
            Lookup::Found(_) => {}
            Lookup::Missing { depth } => {
                let field = path.prefix(depth);
                report.error(
                    Rule::RequiredField,
                    field.clone(),
                    format!("missing required field: {field}"),
                );
            }
            Lookup::Blank { depth } => {
                let field = path.prefix(depth);
                report.error(
                    Rule::RequiredField,
                    field.clone(),
                    format!("empty required field: {field}"),
                );
            }
        }
    }
}

fn check_name(
    front_matter: &FrontMatter,
    context: &DocumentContext,
    config: &ValidatorConfig,
    report: &mut ValidationReport,
) {
    let Some(value) = front_matter.get("name") else {
        return;
    };
    if is_blank(value) {
        return;
    }
    let Value::String(name) = value else {
        report.error(Rule::FieldType, "name", "'name' must be a string");
        return;
    };

    let length = name.chars().count();
    if length > config.rules.max_name_length {
        report.error(
            Rule::NameLength,
            "name",
            format!(
                "'name' exceeds {} characters ({length} chars)",
                config.rules.max_name_length
            ),
        );
    }

    if !NAME_REGEX.is_match(name) {
        report.error(
            Rule::NameFormat,
            "name",
            format!(
                "'name' must be lowercase alphanumeric + hyphens, not start/end with hyphen: '{name}'"
            ),
        );
    }

    if name.contains("--") {
        report.error(
            Rule::NameFormat,
            "name",
            format!("'name' must not contain consecutive hyphens: '{name}'"),
        );
    }

    let severity = match config.rules.directory_name {
        DirectoryNameCheck::Off => return,
        DirectoryNameCheck::Warn => Severity::Warning,
        DirectoryNameCheck::Error => Severity::Error,
    };
    if let Some(directory) = &context.directory_name
        && directory != name
    {
        report.push(
            severity,
            Rule::DirectoryName,
            "name",
            format!("'name' ({name}) does not match directory name ({directory})"),
        );
    }
}

fn check_description(
    front_matter: &FrontMatter,
    config: &ValidatorConfig,
    report: &mut ValidationReport,
) {
    let Some(value) = front_matter.get("description") else {
        return;
    };
    if is_blank(value) {
        return;
    }
    let Some(description) = scalar_to_string(value) else {
        report.error(
            Rule::FieldType,
            "description",
            "'description' must be a single string",
        );
        return;
    };

    // Multi-line YAML scalars add newlines; count the collapsed text
    let collapsed = description.split_whitespace().collect::<Vec<_>>().join(" ");
    let length = collapsed.chars().count();
    if length > config.rules.max_description_length {
        report.error(
            Rule::DescriptionLength,
            "description",
            format!(
                "'description' exceeds {} characters ({length} chars)",
                config.rules.max_description_length
            ),
        );
    }
}

fn check_version(front_matter: &FrontMatter, report: &mut ValidationReport) {
    let Some(Value::Mapping(metadata)) = front_matter.get("metadata") else {
        return;
    };
    let Some(value) = metadata.get("version") else {
        return;
    };
    if is_blank(value) {
        return;
    }

    match scalar_to_string(value) {
        Some(version) if VERSION_REGEX.is_match(version.trim()) => {}
        Some(version) => report.warn(
            Rule::VersionFormat,
            "metadata.version",
            format!("'metadata.version' is not a semantic version: '{version}'"),
        ),
        None => report.warn(
            Rule::FieldType,
            "metadata.version",
            "'metadata.version' should be a version string",
        ),
    }
}

fn check_license(
    front_matter: &FrontMatter,
    config: &ValidatorConfig,
    report: &mut ValidationReport,
) {
    // A required license is already covered by the required field check
    if config.schema.requires("license") || front_matter.contains_key("license") {
        return;
    }
    report.warn(
        Rule::License,
        "license",
        "no 'license' field in front matter (recommended)",
    );
}

fn check_body(body: &str, config: &ValidatorConfig, report: &mut ValidationReport) {
    let lines = body.trim().lines().count();
    if lines > config.rules.max_body_lines {
        report.warn(
            Rule::BodyLength,
            "body",
            format!(
                "SKILL.md body is {lines} lines (recommended max: {})",
                config.rules.max_body_lines
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::parse_front_matter;
    use std::fmt::Write as _;
    use std::path::Path;

    const COMPLETE: &str = "---
name: salesforce-developer
description: Generates Apex and LWC code.
license: MIT
metadata:
  author: test
  version: \"1.0\"
compatibility: VS Code
---
# Body text
";

    fn run(content: &str, context: &DocumentContext, config: &ValidatorConfig) -> ValidationReport {
        let doc = parse_front_matter(content).unwrap();
        let mut report = ValidationReport::new(Path::new("SKILL.md"));
        check_document(&doc.front_matter, doc.body, context, config, &mut report);
        report
    }

    fn run_default(content: &str) -> ValidationReport {
        run(content, &DocumentContext::default(), &ValidatorConfig::default())
    }

    #[test]
    fn test_complete_document_is_valid() {
        let report = run_default(COMPLETE);
        assert!(report.is_valid());
        assert!(report.violations.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_each_missing_field_reports_once() {
        let cases = [
            ("name: salesforce-developer\n", "name"),
            ("description: Generates Apex and LWC code.\n", "description"),
            ("license: MIT\n", "license"),
            ("  author: test\n", "metadata.author"),
            ("  version: \"1.0\"\n", "metadata.version"),
            ("compatibility: VS Code\n", "compatibility"),
        ];

        for (line, field) in cases {
            let content = COMPLETE.replacen(line, "", 1);
            let report = run_default(&content);
            assert_eq!(
                report.violation_messages(),
                [format!("missing required field: {field}")],
                "removing {field}"
            );
        }
    }

    #[test]
    fn test_missing_metadata_block_reports_parent_once() {
        let content = COMPLETE.replacen("metadata:\n  author: test\n  version: \"1.0\"\n", "", 1);
        let report = run_default(&content);
        assert_eq!(
            report.violation_messages(),
            ["missing required field: metadata"]
        );
    }

    #[test]
    fn test_blank_metadata_block_reports_parent_once() {
        let content = COMPLETE.replacen("  author: test\n  version: \"1.0\"\n", "", 1);
        let report = run_default(&content);
        assert_eq!(
            report.violation_messages(),
            ["empty required field: metadata"]
        );
    }

    #[test]
    fn test_empty_mapping_metadata_matches_blank_metadata() {
        let content = COMPLETE.replacen(
            "metadata:\n  author: test\n  version: \"1.0\"\n",
            "metadata: {}\n",
            1,
        );
        let report = run_default(&content);
        assert_eq!(
            report.violation_messages(),
            ["empty required field: metadata"]
        );
    }

    #[test]
    fn test_whitespace_name_is_empty() {
        let content = COMPLETE.replacen("name: salesforce-developer", "name: \"   \"", 1);
        let report = run_default(&content);
        assert_eq!(report.violation_messages(), ["empty required field: name"]);

        let content = COMPLETE.replacen("name: salesforce-developer", "name:", 1);
        let report = run_default(&content);
        assert_eq!(report.violation_messages(), ["empty required field: name"]);
    }

    #[test]
    fn test_all_fields_missing_collects_everything() {
        let report = run_default("---\n---\nbody");
        assert_eq!(
            report.violation_messages(),
            [
                "missing required field: name",
                "missing required field: description",
                "missing required field: license",
                "missing required field: metadata",
                "missing required field: compatibility",
            ]
        );
    }

    #[test]
    fn test_name_format_rules() {
        let content = COMPLETE.replacen("salesforce-developer", "Salesforce_Dev", 1);
        let report = run_default(&content);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].rule, Rule::NameFormat);

        let content = COMPLETE.replacen("salesforce-developer", "-leading", 1);
        assert!(!run_default(&content).is_valid());

        let content = COMPLETE.replacen("salesforce-developer", "double--hyphen", 1);
        let report = run_default(&content);
        assert_eq!(report.violations.len(), 1);
        assert!(report.violations[0].message.contains("consecutive hyphens"));
    }

    #[test]
    fn test_name_must_be_string() {
        let content = COMPLETE.replacen("name: salesforce-developer", "name: 42", 1);
        let report = run_default(&content);
        assert_eq!(report.violation_messages(), ["'name' must be a string"]);
        assert_eq!(report.violations[0].rule, Rule::FieldType);
    }

    #[test]
    fn test_description_must_be_scalar() {
        let content = COMPLETE.replacen(
            "description: Generates Apex and LWC code.",
            "description: [apex, lwc]",
            1,
        );
        let report = run_default(&content);
        assert_eq!(
            report.violation_messages(),
            ["'description' must be a single string"]
        );
        assert_eq!(report.violations[0].rule, Rule::FieldType);
        assert_eq!(report.violations[0].rule.as_str(), "field-type");
    }

    #[test]
    fn test_version_mapping_is_type_warning() {
        let content = COMPLETE.replacen("version: \"1.0\"", "version: {major: 1}", 1);
        let report = run_default(&content);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].rule, Rule::FieldType);
    }

    #[test]
    fn test_name_length() {
        let long_name = "a".repeat(65);
        let content = COMPLETE.replacen("salesforce-developer", &long_name, 1);
        let report = run_default(&content);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].rule, Rule::NameLength);
        assert!(report.violations[0].message.contains("65 chars"));

        let exact = "a".repeat(64);
        let content = COMPLETE.replacen("salesforce-developer", &exact, 1);
        assert!(run_default(&content).is_valid());
    }

    #[test]
    fn test_directory_name_modes() {
        let context = DocumentContext {
            directory_name: Some("other-dir".to_string()),
        };

        let report = run(COMPLETE, &context, &ValidatorConfig::default());
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].rule, Rule::DirectoryName);

        let strict = ValidatorConfig::builder()
            .directory_name(DirectoryNameCheck::Error)
            .build()
            .unwrap();
        let report = run(COMPLETE, &context, &strict);
        assert_eq!(
            report.violation_messages(),
            ["'name' (salesforce-developer) does not match directory name (other-dir)"]
        );

        let off = ValidatorConfig::builder()
            .directory_name(DirectoryNameCheck::Off)
            .build()
            .unwrap();
        let report = run(COMPLETE, &context, &off);
        assert!(report.warnings.is_empty());

        let matching = DocumentContext {
            directory_name: Some("salesforce-developer".to_string()),
        };
        let report = run(COMPLETE, &matching, &strict);
        assert!(report.is_valid());
    }

    #[test]
    fn test_description_length_collapses_whitespace() {
        let words = "word ".repeat(200);
        let content = COMPLETE.replacen(
            "description: Generates Apex and LWC code.",
            &format!("description: >\n  {words}\n  {words}"),
            1,
        );
        let report = run_default(&content);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].rule, Rule::DescriptionLength);

        // Whitespace padding alone does not push it over the limit
        let padded = format!("\"{}short{}\"", " ".repeat(600), " ".repeat(600));
        let content = COMPLETE.replacen("Generates Apex and LWC code.", &padded, 1);
        assert!(run_default(&content).is_valid());
    }

    #[test]
    fn test_version_format_warning() {
        for good in ["\"1.0\"", "1", "\"2.3.4\"", "\"1.0.0-beta.1\"", "\"1.2.3+build5\""] {
            let content = COMPLETE.replacen("\"1.0\"", good, 1);
            let report = run_default(&content);
            assert!(report.warnings.is_empty(), "{good} should be accepted");
        }

        let content = COMPLETE.replacen("\"1.0\"", "latest", 1);
        let report = run_default(&content);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].rule, Rule::VersionFormat);
    }

    #[test]
    fn test_license_warning_when_not_required() {
        let config = ValidatorConfig::builder()
            .required(["name", "description"])
            .build()
            .unwrap();
        let content = COMPLETE.replacen("license: MIT\n", "", 1);
        let report = run(&content, &DocumentContext::default(), &config);
        assert!(report.is_valid());
        assert_eq!(
            report.warning_messages(),
            ["no 'license' field in front matter (recommended)"]
        );
    }

    #[test]
    fn test_body_length_warning() {
        let mut content = COMPLETE.to_string();
        for i in 0..501 {
            let _ = writeln!(content, "line {i}");
        }
        let report = run_default(&content);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].rule, Rule::BodyLength);
        assert!(report.warnings[0].message.contains("502 lines"));
    }

    #[test]
    fn test_body_content_is_irrelevant() {
        let frontmatter = COMPLETE.replacen("# Body text\n", "", 1);
        for body in ["", "plain", "---\nnot front matter\n---", "```yaml\nname:\n```"] {
            let report = run_default(&format!("{frontmatter}{body}"));
            assert!(report.is_valid(), "body {body:?} should not matter");
        }
    }
}

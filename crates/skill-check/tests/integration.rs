//! Integration tests for skill document validation
//!
//! These tests run the full flow: discovery, parsing, required field checks
//! and the best-practice rules over real directories.

use skill_lint_check::{
    DirectoryNameCheck, Rule, SkillValidator, ValidatorConfig, discover_skill_documents,
};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const REQUIRED: [&str; 6] = [
    "name",
    "description",
    "license",
    "metadata.author",
    "metadata.version",
    "compatibility",
];

/// Helper to build a complete document, optionally dropping one field
fn document(name: &str, without: Option<&str>) -> String {
    let mut content = String::from("---\n");
    if without != Some("name") {
        let _ = writeln!(content, "name: {name}");
    }
    if without != Some("description") {
        content.push_str("description: Generates Apex and LWC code.\n");
    }
    if without != Some("license") {
        content.push_str("license: MIT\n");
    }
    content.push_str("metadata:\n");
    if without != Some("metadata.author") {
        content.push_str("  author: test\n");
    }
    if without != Some("metadata.version") {
        content.push_str("  version: \"1.0\"\n");
    }
    if without != Some("compatibility") {
        content.push_str("compatibility: VS Code\n");
    }
    content.push_str("---\n# Body text\n");
    content
}

/// Helper to write `<root>/<dir>/SKILL.md`
fn write_skill(root: &Path, dir: &str, content: &str) -> PathBuf {
    let skill_dir = root.join(dir);
    fs::create_dir_all(&skill_dir).expect("failed to create skill dir");
    fs::write(skill_dir.join("SKILL.md"), content).expect("failed to write SKILL.md");
    skill_dir
}

#[tokio::test]
async fn test_complete_document_is_valid() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let dir = write_skill(
        temp.path(),
        "salesforce-developer",
        &document("salesforce-developer", None),
    );

    let report = SkillValidator::new()
        .validate_path(&dir)
        .await
        .expect("document should parse");

    assert!(report.is_valid());
    assert!(report.violations.is_empty());
    assert!(report.warnings.is_empty());
}

#[tokio::test]
async fn test_each_missing_field_is_the_only_violation() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let validator = SkillValidator::new();

    for field in REQUIRED {
        let dir = write_skill(
            temp.path(),
            "salesforce-developer",
            &document("salesforce-developer", Some(field)),
        );
        let report = validator
            .validate_path(&dir)
            .await
            .expect("document should parse");

        assert!(!report.is_valid(), "missing {field} should be invalid");
        assert_eq!(
            report.violation_messages(),
            [format!("missing required field: {field}")]
        );
    }
}

#[test]
fn test_description_removed_reports_single_violation() {
    let content = "---
name: salesforce-developer
license: MIT
metadata:
  author: test
  version: \"1.0\"
compatibility: VS Code
---
# Body text
";
    let report = SkillValidator::new()
        .validate_content(content, Path::new("SKILL.md"))
        .expect("document should parse");

    assert_eq!(
        report.violation_messages(),
        ["missing required field: description"]
    );
}

#[test]
fn test_whitespace_only_name_is_rejected() {
    let content = document("salesforce-developer", None).replacen(
        "name: salesforce-developer",
        "name: '   '",
        1,
    );
    let report = SkillValidator::new()
        .validate_content(&content, Path::new("SKILL.md"))
        .expect("document should parse");

    assert!(!report.is_valid());
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].rule, Rule::RequiredField);
    assert_eq!(report.violations[0].field, "name");
}

#[test]
fn test_missing_delimiters_are_parse_errors() {
    let validator = SkillValidator::new();
    let body_only = "# Salesforce developer\n\nNo front matter here.\n";
    let unclosed = "---\nname: salesforce-developer\n# Body text\n";

    for content in [body_only, unclosed] {
        let err = validator
            .validate_content(content, Path::new("SKILL.md"))
            .expect_err("should not parse");
        assert!(err.is_parse_error());
        assert!(!err.is_not_found());
    }
}

#[test]
fn test_invalid_yaml_is_a_parse_error() {
    let content = "---\nname: [unclosed\n---\n";
    let err = SkillValidator::new()
        .validate_content(content, Path::new("SKILL.md"))
        .expect_err("should not parse");
    assert!(err.is_parse_error());
}

#[test]
fn test_validation_is_idempotent() {
    let validator = SkillValidator::new();
    let content = document("salesforce-developer", Some("compatibility"));

    let first = validator
        .validate_content(&content, Path::new("SKILL.md"))
        .expect("document should parse");
    let second = validator
        .validate_content(&content, Path::new("SKILL.md"))
        .expect("document should parse");

    assert_eq!(first, second);
}

#[test]
fn test_body_does_not_affect_front_matter_checks() {
    let validator = SkillValidator::new();
    let head = document("salesforce-developer", None).replacen("# Body text\n", "", 1);

    for body in ["", "# Title\n", "name:\ndescription:\n", "---\n---\n"] {
        let content = format!("{head}{body}");
        let report = validator
            .validate_content(&content, Path::new("SKILL.md"))
            .expect("document should parse");
        assert!(report.is_valid(), "body {body:?} changed the outcome");
    }
}

#[test]
fn test_custom_required_fields() {
    let config = ValidatorConfig::builder()
        .required(["name", "description"])
        .build()
        .expect("valid config");
    let validator = SkillValidator::with_config(config).expect("valid config");

    let content = "---\nname: demo\ndescription: Demo.\nlicense: MIT\n---\n";
    let report = validator
        .validate_content(content, Path::new("SKILL.md"))
        .expect("document should parse");
    assert!(report.is_valid());

    let content = "---\nname: demo\n---\n";
    let report = validator
        .validate_content(content, Path::new("SKILL.md"))
        .expect("document should parse");
    assert_eq!(
        report.violation_messages(),
        ["missing required field: description"]
    );
    // license is optional here, so its absence is only a recommendation
    assert_eq!(
        report.warning_messages(),
        ["no 'license' field in front matter (recommended)"]
    );
}

#[tokio::test]
async fn test_directory_name_enforced_as_error() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let dir = write_skill(temp.path(), "renamed", &document("salesforce-developer", None));

    let config = ValidatorConfig::builder()
        .directory_name(DirectoryNameCheck::Error)
        .build()
        .expect("valid config");
    let report = SkillValidator::with_config(config)
        .expect("valid config")
        .validate_path(&dir)
        .await
        .expect("document should parse");

    assert_eq!(
        report.violation_messages(),
        ["'name' (salesforce-developer) does not match directory name (renamed)"]
    );
}

#[tokio::test]
async fn test_recursive_batch_validation() {
    let temp = TempDir::new().expect("failed to create temp dir");
    write_skill(temp.path(), "alpha", &document("alpha", None));
    write_skill(temp.path(), "beta", &document("beta", Some("license")));
    write_skill(temp.path(), "nested/gamma", "no front matter");

    let documents = discover_skill_documents(temp.path(), true).expect("skills found");
    assert_eq!(documents.len(), 3);

    let outcomes = SkillValidator::new().validate_many(documents).await;
    assert_eq!(outcomes.len(), 3);

    let alpha = outcomes[0].result.as_ref().expect("alpha parses");
    assert!(alpha.is_valid());

    let beta = outcomes[1].result.as_ref().expect("beta parses");
    assert_eq!(
        beta.violation_messages(),
        ["missing required field: license"]
    );

    let gamma = outcomes[2].result.as_ref().expect_err("gamma has no front matter");
    assert!(gamma.is_parse_error());
}

#[tokio::test]
async fn test_reference_warnings_only_fail_strict() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let dir = write_skill(temp.path(), "alpha", &document("alpha", None));
    let refs = dir.join("references");
    fs::create_dir(&refs).expect("failed to create references dir");

    let mut long = String::new();
    for i in 0..150 {
        let _ = writeln!(long, "Step {i}");
    }
    fs::write(refs.join("guide.md"), long).expect("failed to write reference");

    let report = SkillValidator::new()
        .validate_path(&dir)
        .await
        .expect("document should parse");

    assert!(report.is_valid());
    assert!(report.passes(false));
    assert!(!report.passes(true));
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].rule, Rule::ReferenceToc);
}

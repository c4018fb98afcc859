//! Checks for the `references/` directory next to a skill document.
//!
//! Long reference files should open with a table of contents, and reference
//! files should not link to further reference files. Both are warnings.

use crate::config::RuleConfig;
use crate::report::{Rule, ValidationReport};
use crate::scanner::MAX_FILE_SIZE;
use regex::Regex;
use skill_lint_core::sanitize_path;
use std::path::Path;
use std::sync::LazyLock;

/// Directory holding a skill's reference documents.
pub const REFERENCES_DIR: &str = "references";

// Markdown link into references/ or the current directory
static NESTED_LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[.*?\]\((?:references/|\./).*?\.md\)").expect("valid regex")
});

const TOC_MARKERS: [&str; 2] = ["table of contents", "## contents"];

/// Checks one reference file's content.
///
/// `file_name` is the name inside `references/`, used in messages.
pub fn check_reference_content(
    file_name: &str,
    content: &str,
    rules: &RuleConfig,
    report: &mut ValidationReport,
) {
    let field = format!("{REFERENCES_DIR}/{file_name}");

    let lines: Vec<&str> = content.lines().collect();
    if lines.len() > rules.reference_toc_threshold {
        let header = lines
            .iter()
            .take(rules.toc_scan_lines)
            .map(|line| line.to_lowercase())
            .collect::<Vec<_>>()
            .join("\n");
        if !TOC_MARKERS.iter().any(|marker| header.contains(marker)) {
            report.warn(
                Rule::ReferenceToc,
                field.clone(),
                format!(
                    "{field} ({} lines) has no Table of Contents (recommended for files > {} lines)",
                    lines.len(),
                    rules.reference_toc_threshold
                ),
            );
        }
    }

    let nested: Vec<String> = NESTED_LINK_REGEX
        .find_iter(content)
        .take(3)
        .map(|m| format!("'{}'", m.as_str()))
        .collect();
    if !nested.is_empty() {
        report.warn(
            Rule::NestedReference,
            field.clone(),
            format!(
                "{field} has nested reference links (should be one level deep): {}",
                nested.join(", ")
            ),
        );
    }
}

/// Checks every `*.md` file in `<skill_dir>/references`, in name order.
///
/// A missing directory is not a finding. Files that cannot be read or are
/// over the size limit are skipped with a warning log.
pub async fn check_references(
    skill_dir: &Path,
    rules: &RuleConfig,
    report: &mut ValidationReport,
) {
    let refs_dir = skill_dir.join(REFERENCES_DIR);
    let Ok(mut entries) = tokio::fs::read_dir(&refs_dir).await else {
        return;
    };

    let mut files = Vec::new();
    loop {
        match entries.next_entry().await {
            Ok(Some(entry)) => {
                let path = entry.path();
                let is_markdown = path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("md"));
                let is_file = entry.file_type().await.is_ok_and(|t| t.is_file());
                if is_markdown && is_file {
                    files.push(path);
                }
            }
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("Stopped listing {}: {}", sanitize_path(&refs_dir), e);
                break;
            }
        }
    }
    files.sort();

    for path in files {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        match tokio::fs::metadata(&path).await {
            Ok(metadata) if metadata.len() > MAX_FILE_SIZE => {
                tracing::warn!(
                    "Skipping oversized reference file: {} ({} bytes)",
                    sanitize_path(&path),
                    metadata.len()
                );
                continue;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("Skipping {}: {}", sanitize_path(&path), e);
                continue;
            }
        }

        match tokio::fs::read_to_string(&path).await {
            Ok(content) => check_reference_content(file_name, &content, rules, report),
            Err(e) => tracing::warn!("Skipping {}: {}", sanitize_path(&path), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write as _;
    use tempfile::TempDir;

    fn long_file(lines: usize) -> String {
        let mut content = String::new();
        for i in 0..lines {
            let _ = writeln!(content, "line {i}");
        }
        content
    }

    fn check(name: &str, content: &str) -> ValidationReport {
        let mut report = ValidationReport::new(Path::new("SKILL.md"));
        check_reference_content(name, content, &RuleConfig::default(), &mut report);
        report
    }

    #[test]
    fn test_short_file_needs_no_toc() {
        let report = check("guide.md", &long_file(100));
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_long_file_without_toc_warns() {
        let report = check("guide.md", &long_file(101));
        assert_eq!(
            report.warning_messages(),
            ["references/guide.md (101 lines) has no Table of Contents (recommended for files > 100 lines)"]
        );
        assert!(report.is_valid());
    }

    #[test]
    fn test_toc_markers_are_case_insensitive() {
        let content = format!("# Guide\n\n## Table Of Contents\n\n{}", long_file(120));
        assert!(check("guide.md", &content).warnings.is_empty());

        let content = format!("# Guide\n## Contents\n{}", long_file(120));
        assert!(check("guide.md", &content).warnings.is_empty());
    }

    #[test]
    fn test_toc_after_scan_window_is_ignored() {
        let content = format!("{}## Contents\n{}", long_file(30), long_file(80));
        let report = check("guide.md", &content);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].rule, Rule::ReferenceToc);
    }

    #[test]
    fn test_nested_links_warn_with_first_three() {
        let content = "\
See [a](./a.md), [b](references/b.md), [c](./c.md) and [d](./d.md).
External [site](https://example.com/page.md) is fine.
";
        let report = check("guide.md", content);
        assert_eq!(
            report.warning_messages(),
            ["references/guide.md has nested reference links (should be one level deep): \
              '[a](./a.md)', '[b](references/b.md)', '[c](./c.md)'"]
        );
    }

    #[test]
    fn test_plain_links_are_fine() {
        let report = check("guide.md", "[docs](https://example.com) and [img](./img.png)");
        assert!(report.warnings.is_empty());
    }

    #[tokio::test]
    async fn test_check_references_directory() {
        let temp = TempDir::new().unwrap();
        let refs = temp.path().join(REFERENCES_DIR);
        tokio::fs::create_dir(&refs).await.unwrap();
        tokio::fs::write(refs.join("b-long.md"), long_file(150))
            .await
            .unwrap();
        tokio::fs::write(refs.join("a-nested.md"), "[x](./x.md)\n")
            .await
            .unwrap();
        // Not markdown, ignored
        tokio::fs::write(refs.join("notes.txt"), long_file(150))
            .await
            .unwrap();
        tokio::fs::create_dir(refs.join("sub.md")).await.unwrap();

        let mut report = ValidationReport::new(Path::new("SKILL.md"));
        check_references(temp.path(), &RuleConfig::default(), &mut report).await;

        assert_eq!(report.warnings.len(), 2);
        assert_eq!(report.warnings[0].field, "references/a-nested.md");
        assert_eq!(report.warnings[0].rule, Rule::NestedReference);
        assert_eq!(report.warnings[1].field, "references/b-long.md");
        assert_eq!(report.warnings[1].rule, Rule::ReferenceToc);
    }

    #[tokio::test]
    async fn test_missing_references_directory() {
        let temp = TempDir::new().unwrap();
        let mut report = ValidationReport::new(Path::new("SKILL.md"));
        check_references(temp.path(), &RuleConfig::default(), &mut report).await;
        assert!(report.warnings.is_empty());
    }
}

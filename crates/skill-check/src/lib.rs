//! SKILL.md front matter validation.
//!
//! This crate checks Agent Skill documents: Markdown files that open with a
//! YAML front matter block describing the skill.
//!
//! # Architecture
//!
//! The validation flow:
//! 1. `scanner` - Resolves targets to `SKILL.md` files
//! 2. `frontmatter` - Splits the document and parses the YAML mapping
//! 3. `rules` - Required fields and best-practice rules over the front matter
//! 4. `references` - Checks the skill's `references/` files
//! 5. `validator` - Runs the above and collects a [`ValidationReport`]
//!
//! # Examples
//!
//! ```no_run
//! use skill_lint_check::{SkillValidator, discover_skill_documents};
//! use std::path::Path;
//!
//! # async fn example() -> skill_lint_core::Result<()> {
//! let documents = discover_skill_documents(Path::new(".github/skills"), true)?;
//! let validator = SkillValidator::new();
//! for outcome in validator.validate_many(documents).await {
//!     let report = outcome.result?;
//!     for message in report.violation_messages() {
//!         println!("{}: {message}", report.path.display());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod frontmatter;
mod references;
mod report;
mod rules;
mod scanner;
mod validator;

pub use config::{
    DEFAULT_REQUIRED_FIELDS, DirectoryNameCheck, RuleConfig, Schema, ValidatorConfig,
    ValidatorConfigBuilder,
};
pub use frontmatter::{
    FrontMatter, FrontMatterError, Lookup, ParsedDocument, is_blank, parse_front_matter,
    split_front_matter,
};
pub use references::{REFERENCES_DIR, check_reference_content};
pub use report::{Finding, Rule, Severity, ValidationReport};
pub use rules::DocumentContext;
pub use scanner::{
    MAX_FILE_SIZE, MAX_SCAN_DEPTH, MAX_SKILL_FILES, SKILL_FILE_NAME, discover_skill_documents,
    resolve_document_path,
};
pub use validator::{DocumentOutcome, SkillValidator};

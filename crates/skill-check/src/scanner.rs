//! Skill document discovery.
//!
//! Resolves command-line targets to `SKILL.md` files. A target may be the
//! document itself, a skill directory, or (when scanning recursively) a tree
//! holding many skill directories.

use skill_lint_core::{Error, Result, sanitize_path};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// File name of a skill document inside its directory.
pub const SKILL_FILE_NAME: &str = "SKILL.md";

/// Maximum number of documents a recursive scan returns (denial-of-service protection).
pub const MAX_SKILL_FILES: usize = 1000;

/// Maximum document size to read in bytes (1MB).
pub const MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Maximum directory depth of a recursive scan.
pub const MAX_SCAN_DEPTH: usize = 16;

// Never hold skills, and can be huge
const SKIPPED_DIRS: [&str; 3] = [".git", "node_modules", "target"];

/// Resolves a target path to the skill document it names.
///
/// A directory resolves to its `SKILL.md`; anything else is returned as is.
#[must_use]
pub fn resolve_document_path(target: &Path) -> PathBuf {
    if target.is_dir() {
        target.join(SKILL_FILE_NAME)
    } else {
        target.to_path_buf()
    }
}

/// Finds the skill documents named by `root`.
///
/// Without `recursive`, `root` must be a document or a directory holding
/// `SKILL.md`. With `recursive`, every `SKILL.md` below `root` is returned,
/// skipping VCS and build directories. Symlinked directories are not
/// entered, but a symlinked `SKILL.md` is returned like any other document.
/// Results are sorted.
///
/// # Errors
///
/// - [`Error::NotFound`] if `root` does not exist or holds no document
/// - [`Error::TooManyFiles`] if a scan finds more than [`MAX_SKILL_FILES`]
///
/// # Examples
///
/// ```no_run
/// use skill_lint_check::discover_skill_documents;
/// use std::path::Path;
///
/// let documents = discover_skill_documents(Path::new(".github/skills"), true)?;
/// println!("Found {} skills", documents.len());
/// # Ok::<(), skill_lint_core::Error>(())
/// ```
pub fn discover_skill_documents(root: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(Error::not_found(root));
    }

    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    if !recursive {
        let document = root.join(SKILL_FILE_NAME);
        if !document.is_file() {
            return Err(Error::not_found(&document));
        }
        return Ok(vec![document]);
    }

    scan_tree(root, ScanLimits::default())
}

/// Bounds of a recursive scan.
#[derive(Debug, Clone, Copy)]
struct ScanLimits {
    max_files: usize,
    max_depth: usize,
}

impl Default for ScanLimits {
    fn default() -> Self {
        Self {
            max_files: MAX_SKILL_FILES,
            max_depth: MAX_SCAN_DEPTH,
        }
    }
}

// Symlinked directories are not entered; a symlinked SKILL.md is accepted
fn scan_tree(root: &Path, limits: ScanLimits) -> Result<Vec<PathBuf>> {
    let mut documents = Vec::new();
    let walker = WalkDir::new(root)
        .max_depth(limits.max_depth)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!(error = %e, "skipping inaccessible entry during skill scan");
                continue;
            }
        };

        if entry.file_name() != SKILL_FILE_NAME || !is_document_file(&entry) {
            continue;
        }

        if documents.len() >= limits.max_files {
            return Err(Error::TooManyFiles {
                path: sanitize_path(root),
                limit: limits.max_files,
            });
        }
        documents.push(entry.into_path());
    }

    if documents.is_empty() {
        return Err(Error::not_found(&root.join(SKILL_FILE_NAME)));
    }

    documents.sort();
    tracing::debug!(
        root = %sanitize_path(root),
        count = documents.len(),
        "discovered skill documents"
    );
    Ok(documents)
}

fn is_document_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

//! YAML front matter parser for SKILL.md files.
//!
//! A Skill Document starts with a `---` line, followed by a YAML mapping,
//! followed by a closing `---` line. Everything after the closing delimiter
//! is the Markdown body.
//!
//! ```text
//! ---
//! name: salesforce-developer
//! description: Generates Apex and LWC code.
//! metadata:
//!   author: test
//!   version: "1.0"
//! ---
//! # Body text
//! ```

use serde_yaml::{Mapping, Value};
use skill_lint_core::FieldPath;
use thiserror::Error;

/// Front matter delimiter line.
const DELIMITER: &str = "---";

/// Errors raised while splitting or parsing front matter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontMatterError {
    /// The first line is not a `---` delimiter.
    #[error("missing opening `---` delimiter on the first line")]
    MissingOpeningDelimiter,

    /// No `---` line closes the block.
    #[error("missing closing `---` delimiter")]
    MissingClosingDelimiter,

    /// The enclosed block is not valid YAML.
    #[error("invalid YAML: {0}")]
    InvalidYaml(String),

    /// The enclosed block parsed, but not to a mapping.
    #[error("front matter must be a mapping of keys to values, found {found}")]
    NotAMapping {
        /// Kind of YAML value found instead
        found: &'static str,
    },
}

/// Parsed front matter mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    fields: Mapping,
}

/// Result of resolving a dotted [`FieldPath`] against the front matter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    /// The full path resolved to a value.
    Found(&'a Value),

    /// The path stops resolving after `depth` segments.
    ///
    /// `depth` counts the segments up to and including the first one that
    /// is absent, so `metadata.author` with no `metadata` key reports 1.
    Missing {
        /// Number of leading segments naming the absent field
        depth: usize,
    },

    /// An intermediate mapping is present but blank (`metadata:` with no
    /// value), after `depth` segments.
    Blank {
        /// Number of leading segments naming the blank parent
        depth: usize,
    },
}

/// A Skill Document split into front matter and body.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument<'a> {
    /// Parsed front matter.
    pub front_matter: FrontMatter,
    /// Markdown after the closing delimiter.
    pub body: &'a str,
}

impl FrontMatter {
    /// Wraps an already parsed mapping.
    #[must_use]
    pub const fn from_mapping(fields: Mapping) -> Self {
        Self { fields }
    }

    /// Returns the top-level value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns the top-level value for `key` when it is a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Returns `true` if the top-level mapping has `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Number of top-level keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the front matter has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Resolves a dotted path through nested mappings.
    ///
    /// # Examples
    ///
    /// ```
    /// use skill_lint_check::{Lookup, parse_front_matter};
    /// use skill_lint_core::FieldPath;
    ///
    /// let doc = parse_front_matter("---\nmetadata:\n  author: test\n---\n").unwrap();
    ///
    /// let author = FieldPath::new("metadata.author").unwrap();
    /// assert!(matches!(doc.front_matter.lookup(&author), Lookup::Found(_)));
    ///
    /// let version = FieldPath::new("metadata.version").unwrap();
    /// assert_eq!(doc.front_matter.lookup(&version), Lookup::Missing { depth: 2 });
    /// ```
    #[must_use]
    pub fn lookup(&self, path: &FieldPath) -> Lookup<'_> {
        let segments: Vec<&str> = path.segments().collect();
        let mut current = &self.fields;

        for (index, segment) in segments.iter().enumerate() {
            let depth = index + 1;
            let Some(value) = current.get(*segment) else {
                return Lookup::Missing { depth };
            };

            if depth == segments.len() {
                return Lookup::Found(value);
            }

            match untagged(value) {
                Value::Mapping(nested) if !nested.is_empty() => current = nested,
                // `metadata:` and `metadata: {}` are both an empty parent
                other if is_blank(other) => return Lookup::Blank { depth },
                // A scalar parent cannot hold the child.
                _ => return Lookup::Missing { depth: depth + 1 },
            }
        }

        Lookup::Missing { depth: 1 }
    }
}

/// Splits content into the raw YAML block and the body.
///
/// A leading byte-order mark is ignored. The opening delimiter must be the
/// first line; trailing whitespace after either delimiter is tolerated.
///
/// # Errors
///
/// Returns [`FrontMatterError::MissingOpeningDelimiter`] or
/// [`FrontMatterError::MissingClosingDelimiter`].
///
/// # Examples
///
/// ```
/// use skill_lint_check::split_front_matter;
///
/// let (yaml, body) = split_front_matter("---\nname: demo\n---\n# Demo\n").unwrap();
/// assert_eq!(yaml, "name: demo\n");
/// assert_eq!(body, "# Demo\n");
/// ```
pub fn split_front_matter(content: &str) -> Result<(&str, &str), FrontMatterError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.split_inclusive('\n');

    let first = lines
        .next()
        .ok_or(FrontMatterError::MissingOpeningDelimiter)?;
    if first.trim_end() != DELIMITER {
        return Err(FrontMatterError::MissingOpeningDelimiter);
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;

    for line in lines {
        if line.trim_end() == DELIMITER {
            let yaml = &content[yaml_start..offset];
            let body = &content[offset + line.len()..];
            return Ok((yaml, body));
        }
        offset += line.len();
    }

    Err(FrontMatterError::MissingClosingDelimiter)
}

/// Splits and parses a Skill Document.
///
/// An empty block (or one holding only comments) is an empty mapping.
///
/// # Errors
///
/// Returns [`FrontMatterError`] if the delimiters are missing, the YAML is
/// malformed, or the block is not a mapping.
///
/// # Examples
///
/// ```
/// use skill_lint_check::parse_front_matter;
///
/// let doc = parse_front_matter("---\nname: demo\n---\n# Demo\n").unwrap();
/// assert_eq!(doc.front_matter.get_str("name"), Some("demo"));
/// assert_eq!(doc.body, "# Demo\n");
///
/// assert!(parse_front_matter("# No front matter").is_err());
/// ```
pub fn parse_front_matter(content: &str) -> Result<ParsedDocument<'_>, FrontMatterError> {
    let (yaml, body) = split_front_matter(content)?;

    let fields = if yaml.trim().is_empty() {
        Mapping::new()
    } else {
        let value: Value = serde_yaml::from_str(yaml)
            .map_err(|e| FrontMatterError::InvalidYaml(e.to_string()))?;
        match value {
            Value::Mapping(mapping) => mapping,
            Value::Null => Mapping::new(),
            other => {
                return Err(FrontMatterError::NotAMapping {
                    found: value_kind(&other),
                });
            }
        }
    };

    Ok(ParsedDocument {
        front_matter: FrontMatter::from_mapping(fields),
        body,
    })
}

/// Returns `true` for values that carry no content.
///
/// Null, whitespace-only strings and empty collections are blank. Numbers
/// and booleans never are.
#[must_use]
pub fn is_blank(value: &Value) -> bool {
    match untagged(value) {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Sequence(seq) => seq.is_empty(),
        Value::Mapping(map) => map.is_empty(),
        _ => false,
    }
}

/// Renders a scalar as text; `None` for collections and null.
#[must_use]
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match untagged(value) {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn untagged(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untagged(&tagged.value),
        other => other,
    }
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

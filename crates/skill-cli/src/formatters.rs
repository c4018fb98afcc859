//! Output formatters for CLI commands.
//!
//! Provides consistent formatting across all CLI commands for JSON, text, and pretty output modes.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use skill_lint_core::cli::OutputFormat;

/// Format data according to the specified output format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Examples
///
/// ```
/// use skill_lint_cli::formatters::format_output;
/// use skill_lint_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Summary {
///     documents: usize,
///     passed: bool,
/// }
///
/// let summary = Summary {
///     documents: 3,
///     passed: true,
/// };
///
/// let output = format_output(&summary, OutputFormat::Json)?;
/// assert!(output.contains("\"documents\""));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Format data as JSON with 2-space indentation.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }

    /// Format data as compact single-line JSON.
    pub fn format_compact<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string(data)?)
    }
}

/// Plain text output formatting.
pub mod text {
    use super::{Result, Serialize, json};

    /// Format data as plain text.
    ///
    /// Compact JSON without colors, one line per invocation, for piping
    /// into other tools.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        json::format_compact(data)
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, Result, Serialize};
    use std::fmt::Write as _;

    /// Format data as colorized, human-readable output.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut out = String::new();
        write_value(&mut out, &value, 0);
        Ok(out)
    }

    /// Writes a value as indented `key: value` lines.
    fn write_value(out: &mut String, value: &serde_json::Value, indent: usize) {
        use serde_json::Value;

        let pad = "  ".repeat(indent);
        match value {
            Value::Object(obj) => {
                for (key, val) in obj {
                    match val {
                        Value::Object(nested) if !nested.is_empty() => {
                            let _ = writeln!(out, "{pad}{}:", key.blue().bold());
                            write_value(out, val, indent + 1);
                        }
                        Value::Array(items) if !items.is_empty() => {
                            let _ = writeln!(out, "{pad}{}:", key.blue().bold());
                            for item in items {
                                let _ = writeln!(out, "{pad}  - {}", scalar(item));
                            }
                        }
                        _ => {
                            let _ = writeln!(out, "{pad}{}: {}", key.blue().bold(), scalar(val));
                        }
                    }
                }
            }
            other => {
                let _ = writeln!(out, "{pad}{}", scalar(other));
            }
        }
    }

    fn scalar(value: &serde_json::Value) -> String {
        use serde_json::Value;

        match value {
            Value::Null => "null".dimmed().to_string(),
            Value::Bool(b) => b.to_string().yellow().to_string(),
            Value::Number(n) => n.to_string().cyan().to_string(),
            Value::String(s) => s.green().to_string(),
            Value::Array(items) if items.is_empty() => "[]".to_string(),
            Value::Object(obj) if obj.is_empty() => "{}".to_string(),
            other => other.to_string(),
        }
    }
}

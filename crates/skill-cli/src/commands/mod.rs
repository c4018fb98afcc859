//! Command implementations for the skill-lint CLI.
//!
//! Each command module executes its operation, formats output according to
//! the requested format, and returns the process exit code.

pub mod completions;
pub mod config;
pub mod validate;

//! Core types and errors for skill-lint.
//!
//! This crate provides the foundational types shared by the validator
//! library and the command-line tool.
//!
//! # Architecture
//!
//! The core consists of:
//! - Error hierarchy with contextual information ([`Error`], [`Result`])
//! - Strong domain types ([`FieldPath`])
//! - CLI primitives ([`cli::OutputFormat`], [`cli::ExitCode`])

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod cli;
mod error;
mod types;

pub use error::{Error, Result, sanitize_path};
pub use types::FieldPath;

//! skill-lint CLI library.
//!
//! Exposes the command implementations and formatters so they can be
//! tested without spawning the binary.

#![allow(clippy::unused_async)]
#![allow(clippy::missing_errors_doc)]

pub mod actions;
pub mod commands;
pub mod formatters;

pub use actions::ConfigAction;

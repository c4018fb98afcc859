//! Action type definitions for CLI commands.

use clap::Subcommand;

/// Configuration management actions.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Write a configuration file with default values
    Init,

    /// Show the effective configuration
    Show,

    /// Get a configuration value
    Get {
        /// Configuration key (e.g., rules.max_body_lines)
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., schema.required)
        key: String,

        /// New value; lists are comma-separated
        value: String,
    },

    /// Print the configuration file path
    Path,
}

//! Tests to verify that public types are Send + Sync.
//!
//! Documents are validated concurrently, so everything that crosses a task
//! boundary must be thread-safe.

use skill_lint_core::cli::{ExitCode, OutputFormat};
use skill_lint_core::{Error, FieldPath};

const fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_domain_types_are_send_sync() {
    assert_send_sync::<FieldPath>();
}

#[test]
fn test_cli_types_are_send_sync() {
    assert_send_sync::<OutputFormat>();
    assert_send_sync::<ExitCode>();
}

#[test]
fn test_error_is_send_sync() {
    assert_send_sync::<Error>();
}

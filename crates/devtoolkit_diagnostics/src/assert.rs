//! Assertion helpers that fail with an [`AssertionError`] instead of panicking.

use crate::error::{AssertionError, DiagnosticsResult};

/// Message used by [`assert_not_null`] when none is given.
pub const DEFAULT_NULL_MESSAGE: &str = "Object should not be null";

/// Message used by [`assert_true`] when none is given.
pub const DEFAULT_CONDITION_MESSAGE: &str = "Condition should be true";

/// Fails with [`AssertionError::NullAssertion`] when `value` is `None`.
///
/// On success the contained value is handed back, so the check can sit in
/// front of the use: `let cfg = assert_not_null(cfg, None)?;`.
pub fn assert_not_null<T>(value: Option<T>, message: Option<&str>) -> DiagnosticsResult<T> {
    value.ok_or_else(|| AssertionError::NullAssertion {
        message: message.unwrap_or(DEFAULT_NULL_MESSAGE).to_string(),
    })
}

/// Fails with [`AssertionError::InvariantViolation`] when `condition` is false.
pub fn assert_true(condition: bool, message: Option<&str>) -> DiagnosticsResult<()> {
    if condition {
        Ok(())
    } else {
        Err(AssertionError::InvariantViolation {
            message: message.unwrap_or(DEFAULT_CONDITION_MESSAGE).to_string(),
        })
    }
}

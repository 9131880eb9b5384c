//! Assertion failures raised by [`assert_not_null`](crate::assert_not_null)
//! and [`assert_true`](crate::assert_true).

/// The result type returned by the assertion helpers.
pub type DiagnosticsResult<T> = Result<T, AssertionError>;

/// A failed assertion, signaling a programmer error to the caller.
///
/// Displays as the bare assertion message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AssertionError {
    /// A value that must be present was absent.
    #[error("{message}")]
    NullAssertion {
        /// The assertion message.
        message: String,
    },
    /// A condition that must hold was false.
    #[error("{message}")]
    InvariantViolation {
        /// The assertion message.
        message: String,
    },
}

impl AssertionError {
    /// Returns the message carried by this failure.
    pub fn message(&self) -> &str {
        match self {
            AssertionError::NullAssertion { message }
            | AssertionError::InvariantViolation { message } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_message() {
        let err = AssertionError::NullAssertion {
            message: "config missing".to_string(),
        };
        assert_eq!(format!("{err}"), "config missing");
        assert_eq!(err.message(), "config missing");
    }

    #[test]
    fn invariant_message() {
        let err = AssertionError::InvariantViolation {
            message: "queue drained twice".to_string(),
        };
        assert_eq!(err.message(), "queue drained twice");
    }
}

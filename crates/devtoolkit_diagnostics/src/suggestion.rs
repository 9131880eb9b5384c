//! Remediation hints for recognized exception kinds.

use crate::exception::{Exception, ExceptionKind};
use std::borrow::Cow;

/// Separator placed before the hint of each inner exception.
pub const INNER_EXCEPTION_SEPARATOR: &str = "\nInner Exception: ";

/// Returns the remediation hint for a single exception, ignoring its inner chain.
///
/// Returns `None` for [`ExceptionKind::Other`].
pub fn remedy(exception: &Exception) -> Option<Cow<'static, str>> {
    let hint: Cow<'static, str> = match &exception.kind {
        ExceptionKind::NullReference => {
            "Check that the value is initialized before it is used.".into()
        }
        ExceptionKind::IndexOutOfRange => {
            "Make sure the index is within the bounds of the collection.".into()
        }
        ExceptionKind::InvalidArgument => {
            "Verify that the arguments passed to the function are valid.".into()
        }
        ExceptionKind::InvalidState => {
            "Check that the object is in a valid state for this operation.".into()
        }
        ExceptionKind::DivideByZero => "Ensure the divisor is not zero before dividing.".into(),
        ExceptionKind::FileNotFound => match exception.file_name.as_deref() {
            Some(file_name) => format!(
                "Check that the file '{file_name}' exists and the path is correct."
            ),
            None => format!(
                "Check that the file exists and the path is correct: {}",
                exception.message
            ),
        }
        .into(),
        ExceptionKind::DirectoryNotFound => format!(
            "Check that the directory exists and the path is correct: {}",
            exception.message
        )
        .into(),
        ExceptionKind::InvalidFormat => {
            "Verify that the input matches the expected format.".into()
        }
        ExceptionKind::Overflow => {
            "Use a wider numeric type or check the value range before the operation.".into()
        }
        ExceptionKind::KeyNotFound => {
            "Check that the key exists before looking it up, or use a lookup that returns an option."
                .into()
        }
        ExceptionKind::InvalidCast => {
            "Verify the type of the value before converting it.".into()
        }
        ExceptionKind::StackOverflow => {
            "Look for unbounded recursion and make sure every recursive path has a base case."
                .into()
        }
        ExceptionKind::OutOfMemory => {
            "Reduce memory usage or process the data in smaller chunks.".into()
        }
        ExceptionKind::Other(_) => return None,
    };
    Some(hint)
}

/// Builds the remediation hint for an exception and its inner chain.
///
/// The hint of the outermost exception comes first (empty if its kind is
/// unrecognized). Every inner exception appends
/// [`INNER_EXCEPTION_SEPARATOR`] followed by its own hint, even when that
/// hint is empty, so a chain of three unrecognized errors yields
/// `"\nInner Exception: \nInner Exception: "`. An absent exception yields
/// an empty string.
pub fn suggestion_for<'a>(exception: impl Into<Option<&'a Exception>>) -> String {
    let Some(exception) = exception.into() else {
        return String::new();
    };
    let mut suggestion = String::new();
    for (depth, level) in exception.chain().enumerate() {
        if depth > 0 {
            suggestion.push_str(INNER_EXCEPTION_SEPARATOR);
        }
        if let Some(hint) = remedy(level) {
            suggestion.push_str(&hint);
        }
    }
    suggestion
}

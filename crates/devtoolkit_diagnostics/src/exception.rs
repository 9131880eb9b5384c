//! Captured errors with a kind, message, optional backtrace, and inner cause.

use crate::error::AssertionError;
use serde::{Deserialize, Serialize};
use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;
use std::fmt;
use std::io;
use std::num::{IntErrorKind, ParseIntError};
use std::path::Path;

/// The category of a captured error.
///
/// The named variants are the categories with a known remediation hint;
/// anything else is carried as [`ExceptionKind::Other`] with its own name.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ExceptionKind {
    /// A required value was absent.
    NullReference,
    /// An index fell outside the bounds of a collection.
    IndexOutOfRange,
    /// A function was called with an unacceptable argument.
    InvalidArgument,
    /// An object was not in a state that allows the operation.
    InvalidState,
    /// Integer division by zero.
    DivideByZero,
    /// A file could not be found.
    FileNotFound,
    /// A directory could not be found.
    DirectoryNotFound,
    /// Input text did not match the expected format.
    InvalidFormat,
    /// A numeric value did not fit its type.
    Overflow,
    /// A key was missing from a map.
    KeyNotFound,
    /// A value could not be converted to the requested type.
    InvalidCast,
    /// The call stack was exhausted.
    StackOverflow,
    /// An allocation failed.
    OutOfMemory,
    /// Any other category, identified by name.
    Other(String),
}

impl ExceptionKind {
    /// Returns the category name, e.g. `IndexOutOfRange`.
    pub fn name(&self) -> &str {
        match self {
            ExceptionKind::NullReference => "NullReference",
            ExceptionKind::IndexOutOfRange => "IndexOutOfRange",
            ExceptionKind::InvalidArgument => "InvalidArgument",
            ExceptionKind::InvalidState => "InvalidState",
            ExceptionKind::DivideByZero => "DivideByZero",
            ExceptionKind::FileNotFound => "FileNotFound",
            ExceptionKind::DirectoryNotFound => "DirectoryNotFound",
            ExceptionKind::InvalidFormat => "InvalidFormat",
            ExceptionKind::Overflow => "Overflow",
            ExceptionKind::KeyNotFound => "KeyNotFound",
            ExceptionKind::InvalidCast => "InvalidCast",
            ExceptionKind::StackOverflow => "StackOverflow",
            ExceptionKind::OutOfMemory => "OutOfMemory",
            ExceptionKind::Other(name) => name,
        }
    }
}

impl fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A captured error and the chain of errors that caused it.
///
/// The chain is owned through `inner`, so it is always finite and acyclic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exception {
    /// The error category.
    pub kind: ExceptionKind,
    /// The human-readable message.
    pub message: String,
    /// The call stack captured where the error was raised.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backtrace: Option<String>,
    /// The missing file, for [`ExceptionKind::FileNotFound`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// The error this one wraps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner: Option<Box<Exception>>,
}

impl Exception {
    /// Creates an exception without backtrace or inner error.
    pub fn new(kind: ExceptionKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            backtrace: None,
            file_name: None,
            inner: None,
        }
    }

    /// Creates an exception and records the current call stack.
    ///
    /// The backtrace is only recorded when enabled through `RUST_BACKTRACE`
    /// or `RUST_LIB_BACKTRACE`; otherwise it stays `None`.
    pub fn capture(kind: ExceptionKind, message: impl Into<String>) -> Self {
        let backtrace = Backtrace::capture();
        let mut exception = Self::new(kind, message);
        if backtrace.status() == BacktraceStatus::Captured {
            exception.backtrace = Some(backtrace.to_string());
        }
        exception
    }

    /// Creates a [`ExceptionKind::FileNotFound`] exception for `path`.
    pub fn file_not_found(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::new(
            ExceptionKind::FileNotFound,
            format!("Could not find file '{}'.", path.display()),
        )
        .with_file_name(path.display().to_string())
    }

    /// Creates a [`ExceptionKind::DirectoryNotFound`] exception for `path`.
    pub fn directory_not_found(path: impl AsRef<Path>) -> Self {
        Self::new(
            ExceptionKind::DirectoryNotFound,
            format!("Could not find a part of the path '{}'.", path.as_ref().display()),
        )
    }

    /// Converts a Rust error and its `source()` chain into an exception chain.
    ///
    /// Standard library errors are classified into the matching kind; an
    /// [`Exception`] found in the chain is cloned as is.
    pub fn from_error(error: &(dyn Error + 'static)) -> Self {
        if let Some(exception) = error.downcast_ref::<Exception>() {
            return exception.clone();
        }
        let mut exception = Self::new(classify(error), error.to_string());
        exception.inner = error.source().map(|source| Box::new(Self::from_error(source)));
        exception
    }

    /// Attaches a backtrace.
    pub fn with_backtrace(mut self, backtrace: impl Into<String>) -> Self {
        self.backtrace = Some(backtrace.into());
        self
    }

    /// Attaches the name of the missing file.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Wraps `inner` as the cause of this exception.
    pub fn with_inner(mut self, inner: Exception) -> Self {
        self.inner = Some(Box::new(inner));
        self
    }

    /// Returns the wrapped exception, if any.
    pub fn inner(&self) -> Option<&Exception> {
        self.inner.as_deref()
    }

    /// Iterates over this exception followed by each inner exception.
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl Error for Exception {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.as_deref().map(|inner| inner as &(dyn Error + 'static))
    }
}

impl From<AssertionError> for Exception {
    fn from(err: AssertionError) -> Self {
        Exception::from_error(&err)
    }
}

/// Iterator over an exception chain, outermost first.
pub struct Chain<'a> {
    next: Option<&'a Exception>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Exception;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.inner();
        Some(current)
    }
}

/// Maps a standard library error onto an [`ExceptionKind`].
fn classify(error: &(dyn Error + 'static)) -> ExceptionKind {
    if let Some(err) = error.downcast_ref::<io::Error>() {
        return match err.kind() {
            io::ErrorKind::NotFound => ExceptionKind::FileNotFound,
            io::ErrorKind::InvalidInput => ExceptionKind::InvalidArgument,
            io::ErrorKind::InvalidData => ExceptionKind::InvalidFormat,
            io::ErrorKind::OutOfMemory => ExceptionKind::OutOfMemory,
            _ => ExceptionKind::Other("Io".to_string()),
        };
    }
    if let Some(err) = error.downcast_ref::<ParseIntError>() {
        return match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ExceptionKind::Overflow,
            _ => ExceptionKind::InvalidFormat,
        };
    }
    if let Some(err) = error.downcast_ref::<AssertionError>() {
        return match err {
            AssertionError::NullAssertion { .. } => ExceptionKind::NullReference,
            AssertionError::InvariantViolation { .. } => ExceptionKind::InvalidState,
        };
    }
    if error.is::<std::num::ParseFloatError>()
        || error.is::<std::str::ParseBoolError>()
        || error.is::<std::char::ParseCharError>()
        || error.is::<std::str::Utf8Error>()
        || error.is::<std::string::FromUtf8Error>()
    {
        return ExceptionKind::InvalidFormat;
    }
    if error.is::<std::num::TryFromIntError>() {
        return ExceptionKind::Overflow;
    }
    if error.is::<std::array::TryFromSliceError>() || error.is::<std::char::CharTryFromError>() {
        return ExceptionKind::InvalidCast;
    }
    ExceptionKind::Other("Error".to_string())
}

//! Console diagnostics: colored log lines, assertions, and exception hints.
//!
//! Log lines are written through a [`Console`] as `[<TAG>] <message>`, each
//! inside a [`ColorGuard`] that restores the previous foreground color. The
//! [`Logger`] renders [`Exception`] chains with their backtraces and asks
//! [`suggestion_for`] for a remediation hint. The free functions in this crate
//! ([`log_info`], [`log_smart_exception`], ...) write to stdout and keep no
//! state between calls.
//!
//! None of the logging paths lock the console. Callers logging from several
//! threads must serialize access themselves, or interleaved lines and colors
//! are possible.

#![warn(missing_docs)]

pub mod assert;
pub mod color;
pub mod console;
pub mod error;
pub mod exception;
pub mod level;
pub mod logger;
pub mod suggestion;

pub use assert::{assert_not_null, assert_true, DEFAULT_CONDITION_MESSAGE, DEFAULT_NULL_MESSAGE};
pub use color::{ColorGuard, ConsoleColor};
pub use console::{Console, ConsoleLine, MemoryConsole, TerminalConsole};
pub use error::{AssertionError, DiagnosticsResult};
pub use exception::{Exception, ExceptionKind};
pub use level::Level;
pub use logger::{
    log_error, log_exception, log_if, log_info, log_smart_exception, log_warning, Logger,
};
pub use suggestion::{remedy, suggestion_for, INNER_EXCEPTION_SEPARATOR};

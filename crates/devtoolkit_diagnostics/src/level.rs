//! Log levels and their console tags.

use crate::color::ConsoleColor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The tag a log line is written under.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Level {
    /// Conditional trace output from [`log_if`](crate::log_if).
    Log,
    /// Informational messages and remediation hints.
    Info,
    /// Potential problems.
    Warning,
    /// Errors and exception headers.
    Error,
    /// Backtrace output of a logged exception.
    Stacktrace,
}

impl Level {
    /// Returns the tag printed between brackets, e.g. `WARNING`.
    pub fn tag(self) -> &'static str {
        match self {
            Level::Log => "LOG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Stacktrace => "STACKTRACE",
        }
    }

    /// Returns the color lines of this level are written in.
    ///
    /// Backtrace frames override this with [`ConsoleColor::DarkGray`].
    pub fn color(self) -> ConsoleColor {
        match self {
            Level::Log => ConsoleColor::Cyan,
            Level::Info => ConsoleColor::Green,
            Level::Warning => ConsoleColor::Yellow,
            Level::Error => ConsoleColor::Red,
            Level::Stacktrace => ConsoleColor::DarkRed,
        }
    }

    /// Formats a message as a console line: `[<TAG>] <message>`.
    pub fn format_line(self, message: &str) -> String {
        format!("[{}] {message}", self.tag())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

//! Line-oriented console sinks with a settable foreground color.

use crate::color::ConsoleColor;
use crossterm::execute;
use crossterm::style::{ResetColor, SetForegroundColor};
use std::io::{self, IsTerminal, Stderr, Stdout, Write};

/// A line-oriented text output with a foreground color attribute.
///
/// `None` stands for the output's default color.
pub trait Console {
    /// Returns the current foreground color.
    fn foreground(&self) -> Option<ConsoleColor>;

    /// Changes the foreground color for subsequent lines.
    fn set_foreground(&mut self, color: Option<ConsoleColor>) -> io::Result<()>;

    /// Writes `line` followed by a line terminator.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn foreground(&self) -> Option<ConsoleColor> {
        (**self).foreground()
    }

    fn set_foreground(&mut self, color: Option<ConsoleColor>) -> io::Result<()> {
        (**self).set_foreground(color)
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }
}

/// A console writing to a terminal stream through crossterm color commands.
///
/// Terminals cannot report their current color, so the console tracks the
/// last color it set. Color commands are flushed as soon as they are issued. With color disabled, lines are written as plain text
/// and color changes are only tracked.
pub struct TerminalConsole<W: Write> {
    out: W,
    color: bool,
    current: Option<ConsoleColor>,
}

impl<W: Write> TerminalConsole<W> {
    /// Creates a console over `out`, emitting ANSI colors when `color` is set.
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            current: None,
        }
    }

    /// Returns `true` if color commands are emitted.
    pub fn is_colored(&self) -> bool {
        self.color
    }

    /// Consumes the console, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalConsole<Stdout> {
    /// A console on stdout, colored when stdout is a terminal.
    pub fn stdout() -> Self {
        let out = io::stdout();
        let color = out.is_terminal();
        Self::new(out, color)
    }
}

impl TerminalConsole<Stderr> {
    /// A console on stderr, colored when stderr is a terminal.
    pub fn stderr() -> Self {
        let out = io::stderr();
        let color = out.is_terminal();
        Self::new(out, color)
    }
}

impl<W: Write> Console for TerminalConsole<W> {
    fn foreground(&self) -> Option<ConsoleColor> {
        self.current
    }

    fn set_foreground(&mut self, color: Option<ConsoleColor>) -> io::Result<()> {
        if self.color {
            match color {
                Some(c) => execute!(self.out, SetForegroundColor(c.into()))?,
                None => execute!(self.out, ResetColor)?,
            }
        }
        self.current = color;
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")?;
        self.out.flush()
    }
}

/// A single line captured by a [`MemoryConsole`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleLine {
    /// The foreground color active when the line was written.
    pub color: Option<ConsoleColor>,
    /// The line text, without terminator.
    pub text: String,
}

/// A console that records lines in memory.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    lines: Vec<ConsoleLine>,
    current: Option<ConsoleColor>,
    fail_writes: bool,
}

impl MemoryConsole {
    /// Creates an empty console.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a console whose line writes always fail with a broken pipe.
    ///
    /// Color changes still succeed.
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Returns the lines written so far.
    pub fn lines(&self) -> &[ConsoleLine] {
        &self.lines
    }

    /// Returns the text of every line written so far.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    /// Takes all recorded lines, leaving the console empty.
    pub fn take_lines(&mut self) -> Vec<ConsoleLine> {
        std::mem::take(&mut self.lines)
    }
}

impl Console for MemoryConsole {
    fn foreground(&self) -> Option<ConsoleColor> {
        self.current
    }

    fn set_foreground(&mut self, color: Option<ConsoleColor>) -> io::Result<()> {
        self.current = color;
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "console closed"));
        }
        self.lines.push(ConsoleLine {
            color: self.current,
            text: line.to_string(),
        });
        Ok(())
    }
}

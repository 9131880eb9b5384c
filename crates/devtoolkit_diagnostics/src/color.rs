//! Foreground colors and scoped color changes on a [`Console`].

use crate::console::Console;
use serde::{Deserialize, Serialize};
use std::io;

/// The foreground colors used by log lines.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ConsoleColor {
    /// `LOG` lines.
    Cyan,
    /// `INFO` lines.
    Green,
    /// `WARNING` lines.
    Yellow,
    /// `ERROR` lines.
    Red,
    /// The full backtrace block.
    DarkRed,
    /// Individual backtrace frames.
    DarkGray,
}

impl From<ConsoleColor> for crossterm::style::Color {
    fn from(color: ConsoleColor) -> Self {
        use crossterm::style::Color;
        match color {
            ConsoleColor::Cyan => Color::Cyan,
            ConsoleColor::Green => Color::Green,
            ConsoleColor::Yellow => Color::Yellow,
            ConsoleColor::Red => Color::Red,
            ConsoleColor::DarkRed => Color::DarkRed,
            ConsoleColor::DarkGray => Color::DarkGrey,
        }
    }
}

/// A scoped foreground color change.
///
/// Creating the guard records the console's current color and switches to the
/// requested one. Dropping the guard restores the recorded color, whether the
/// writes in between succeeded or not.
pub struct ColorGuard<'a, C: Console + ?Sized> {
    console: &'a mut C,
    previous: Option<ConsoleColor>,
}

impl<'a, C: Console + ?Sized> ColorGuard<'a, C> {
    /// Switches `console` to `color` until the guard is dropped.
    pub fn new(console: &'a mut C, color: ConsoleColor) -> io::Result<Self> {
        let previous = console.foreground();
        console.set_foreground(Some(color))?;
        Ok(Self { console, previous })
    }

    /// Writes one line in the guarded color.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.console.write_line(line)
    }
}

impl<C: Console + ?Sized> Drop for ColorGuard<'_, C> {
    fn drop(&mut self) {
        let _ = self.console.set_foreground(self.previous);
    }
}

//! Configuration types deserialized from `devtoolkit.toml`.

use serde::Deserialize;

/// The top-level diagnostics configuration parsed from `devtoolkit.toml`.
///
/// Every section is optional; a missing file section falls back to the
/// defaults of that section.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiagnosticsConfig {
    /// Console output settings (color, stream).
    #[serde(default)]
    pub console: ConsoleConfig,
    /// Defaults for smart exception logging.
    #[serde(default)]
    pub exceptions: ExceptionConfig,
}

/// Where and how log lines are written.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Whether ANSI colors are emitted.
    #[serde(default)]
    pub color: ColorChoice,
    /// The process stream receiving log lines.
    #[serde(default)]
    pub stream: OutputStream,
}

/// Defaults applied when logging an exception with its backtrace and suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExceptionConfig {
    /// Print the captured backtrace, if the exception carries one.
    #[serde(default = "default_true")]
    pub print_backtrace: bool,
    /// Print a remediation hint for recognized exception kinds.
    #[serde(default = "default_true")]
    pub suggest_solution: bool,
}

impl Default for ExceptionConfig {
    fn default() -> Self {
        Self {
            print_backtrace: true,
            suggest_solution: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Controls whether colored output is produced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color only when the stream is a terminal (default).
    #[default]
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

impl ColorChoice {
    /// Decides whether color is used, given whether the stream is a terminal.
    pub fn resolve(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// The process stream that receives console output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStream {
    /// Standard output (default).
    #[default]
    Stdout,
    /// Standard error.
    Stderr,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_choice_resolve() {
        assert!(ColorChoice::Auto.resolve(true));
        assert!(!ColorChoice::Auto.resolve(false));
        assert!(ColorChoice::Always.resolve(false));
        assert!(!ColorChoice::Never.resolve(true));
    }

    #[test]
    fn defaults() {
        let config = DiagnosticsConfig::default();
        assert_eq!(config.console.color, ColorChoice::Auto);
        assert_eq!(config.console.stream, OutputStream::Stdout);
        assert!(config.exceptions.print_backtrace);
        assert!(config.exceptions.suggest_solution);
    }
}

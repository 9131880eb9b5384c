//! Colored log output and exception rendering.
//!
//! [`Logger`] writes through any [`Console`]. The free functions at the bottom
//! of this module build a fresh stdout logger per call and keep no state.

use crate::color::{ColorGuard, ConsoleColor};
use crate::console::{Console, TerminalConsole};
use crate::exception::Exception;
use crate::level::Level;
use crate::suggestion::suggestion_for;
use devtoolkit_config::{DiagnosticsConfig, ExceptionConfig, OutputStream};
use std::io::{self, IsTerminal, Stdout, Write};

/// Writes tagged, colored lines to a console.
///
/// Every call is total: console failures are swallowed so that logging never
/// becomes a new source of errors.
pub struct Logger<C: Console> {
    console: C,
    exceptions: ExceptionConfig,
}

impl<C: Console> Logger<C> {
    /// Creates a logger over `console` with default exception settings.
    pub fn new(console: C) -> Self {
        Self {
            console,
            exceptions: ExceptionConfig::default(),
        }
    }

    /// Replaces the settings used by [`log_configured_exception`](Self::log_configured_exception).
    pub fn with_exception_config(mut self, exceptions: ExceptionConfig) -> Self {
        self.exceptions = exceptions;
        self
    }

    /// Returns the underlying console.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Consumes the logger, returning the console.
    pub fn into_inner(self) -> C {
        self.console
    }

    /// Writes `message` tagged `LOG` in cyan when `condition` holds.
    pub fn log_if(&mut self, condition: bool, message: &str) {
        if condition {
            self.write_colored(message, Level::Log.color(), Level::Log);
        }
    }

    /// Like [`log_if`](Self::log_if), but only builds the message when `condition` holds.
    pub fn log_if_with(&mut self, condition: bool, message: impl FnOnce() -> String) {
        if condition {
            self.write_colored(&message(), Level::Log.color(), Level::Log);
        }
    }

    /// Writes `message` tagged `INFO` in green.
    pub fn info(&mut self, message: &str) {
        self.write_colored(message, Level::Info.color(), Level::Info);
    }

    /// Writes `message` tagged `WARNING` in yellow.
    pub fn warning(&mut self, message: &str) {
        self.write_colored(message, Level::Warning.color(), Level::Warning);
    }

    /// Writes `message` tagged `ERROR` in red.
    pub fn error(&mut self, message: &str) {
        self.write_colored(message, Level::Error.color(), Level::Error);
    }

    /// Writes `Exception: <Kind> - <Message>` tagged `ERROR`.
    pub fn exception(&mut self, exception: &Exception) {
        self.error(&format!("Exception: {} - {}", exception.kind, exception.message));
    }

    /// Writes the exception header, then optionally its backtrace and a hint.
    ///
    /// With `print_backtrace`, a non-empty backtrace is written once in full
    /// (dark red), then once per line (dark gray), all tagged `STACKTRACE`.
    /// With `suggest_solution`, a non-empty [`suggestion_for`] result is
    /// written as `INFO` prefixed with `Suggestion: `.
    pub fn smart_exception(
        &mut self,
        exception: &Exception,
        print_backtrace: bool,
        suggest_solution: bool,
    ) {
        self.exception(exception);

        if print_backtrace {
            if let Some(backtrace) = exception.backtrace.as_deref().filter(|bt| !bt.is_empty()) {
                self.write_colored(backtrace, ConsoleColor::DarkRed, Level::Stacktrace);
                for line in backtrace.lines() {
                    self.write_colored(line, ConsoleColor::DarkGray, Level::Stacktrace);
                }
            }
        }

        if suggest_solution {
            let suggestion = suggestion_for(exception);
            if !suggestion.is_empty() {
                self.info(&format!("Suggestion: {suggestion}"));
            }
        }
    }

    /// Runs [`smart_exception`](Self::smart_exception) with the configured flags.
    pub fn log_configured_exception(&mut self, exception: &Exception) {
        let ExceptionConfig {
            print_backtrace,
            suggest_solution,
        } = self.exceptions;
        self.smart_exception(exception, print_backtrace, suggest_solution);
    }

    fn write_colored(&mut self, message: &str, color: ConsoleColor, level: Level) {
        let line = level.format_line(message);
        let _ = ColorGuard::new(&mut self.console, color)
            .and_then(|mut guard| guard.write_line(&line));
    }
}

impl Logger<TerminalConsole<Stdout>> {
    /// A logger on stdout, colored when stdout is a terminal.
    pub fn stdout() -> Self {
        Self::new(TerminalConsole::stdout())
    }
}

impl Logger<TerminalConsole<Box<dyn Write + Send>>> {
    /// A terminal logger following the console and exception settings of `config`.
    pub fn from_config(config: &DiagnosticsConfig) -> Self {
        let (out, is_terminal): (Box<dyn Write + Send>, bool) = match config.console.stream {
            OutputStream::Stdout => {
                let out = io::stdout();
                let is_terminal = out.is_terminal();
                (Box::new(out), is_terminal)
            }
            OutputStream::Stderr => {
                let out = io::stderr();
                let is_terminal = out.is_terminal();
                (Box::new(out), is_terminal)
            }
        };
        let console = TerminalConsole::new(out, config.console.color.resolve(is_terminal));
        Self::new(console).with_exception_config(config.exceptions.clone())
    }
}

/// Writes `message` to stdout tagged `LOG` when `condition` holds.
pub fn log_if(condition: bool, message: &str) {
    if condition {
        Logger::stdout().log_if(true, message);
    }
}

/// Writes `message` to stdout tagged `INFO`.
pub fn log_info(message: &str) {
    Logger::stdout().info(message);
}

/// Writes `message` to stdout tagged `WARNING`.
pub fn log_warning(message: &str) {
    Logger::stdout().warning(message);
}

/// Writes `message` to stdout tagged `ERROR`.
pub fn log_error(message: &str) {
    Logger::stdout().error(message);
}

/// Writes the exception header to stdout.
pub fn log_exception(exception: &Exception) {
    Logger::stdout().exception(exception);
}

/// Writes the exception header, backtrace, and hint to stdout.
pub fn log_smart_exception(exception: &Exception, print_backtrace: bool, suggest_solution: bool) {
    Logger::stdout().smart_exception(exception, print_backtrace, suggest_solution);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MemoryConsole;
    use crate::exception::ExceptionKind;
    use devtoolkit_config::ColorChoice;

    fn logger() -> Logger<MemoryConsole> {
        Logger::new(MemoryConsole::new())
    }

    #[test]
    fn level_lines_and_colors() {
        let mut log = logger();
        log.info("started");
        log.warning("disk at 91%");
        log.error("write failed");
        let lines = log.console().lines();
        assert_eq!(lines[0].text, "[INFO] started");
        assert_eq!(lines[0].color, Some(ConsoleColor::Green));
        assert_eq!(lines[1].text, "[WARNING] disk at 91%");
        assert_eq!(lines[1].color, Some(ConsoleColor::Yellow));
        assert_eq!(lines[2].text, "[ERROR] write failed");
        assert_eq!(lines[2].color, Some(ConsoleColor::Red));
        assert_eq!(log.console().foreground(), None);
    }

    #[test]
    fn log_if_false_writes_nothing() {
        let mut log = logger();
        log.log_if(false, "never");
        assert!(log.console().lines().is_empty());
    }

    #[test]
    fn log_if_true_writes_once() {
        let mut log = logger();
        log.log_if(true, "yes");
        assert_eq!(log.console().texts(), vec!["[LOG] yes"]);
        assert_eq!(log.console().lines()[0].color, Some(ConsoleColor::Cyan));
    }

    #[test]
    fn log_if_with_is_lazy() {
        let mut log = logger();
        let mut built = false;
        log.log_if_with(false, || {
            built = true;
            String::from("expensive")
        });
        assert!(!built);
        log.log_if_with(true, || String::from("cheap enough"));
        assert_eq!(log.console().texts(), vec!["[LOG] cheap enough"]);
    }

    #[test]
    fn exception_header() {
        let mut log = logger();
        log.exception(&Exception::new(ExceptionKind::KeyNotFound, "no key 'id'"));
        assert_eq!(
            log.console().texts(),
            vec!["[ERROR] Exception: KeyNotFound - no key 'id'"]
        );
    }

    #[test]
    fn smart_exception_full_output() {
        let exc = Exception::new(ExceptionKind::DivideByZero, "attempt to divide by zero")
            .with_backtrace("at compute\nat main");
        let mut log = logger();
        log.smart_exception(&exc, true, true);
        let lines = log.console().lines();
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0].text,
            "[ERROR] Exception: DivideByZero - attempt to divide by zero"
        );
        assert_eq!(lines[1].text, "[STACKTRACE] at compute\nat main");
        assert_eq!(lines[1].color, Some(ConsoleColor::DarkRed));
        assert_eq!(lines[2].text, "[STACKTRACE] at compute");
        assert_eq!(lines[2].color, Some(ConsoleColor::DarkGray));
        assert_eq!(lines[3].text, "[STACKTRACE] at main");
        assert_eq!(
            lines[4].text,
            "[INFO] Suggestion: Ensure the divisor is not zero before dividing."
        );
    }

    #[test]
    fn smart_exception_crlf_backtrace() {
        let exc = Exception::new(ExceptionKind::InvalidState, "closed")
            .with_backtrace("at open\r\nat main\r\n");
        let mut log = logger();
        log.smart_exception(&exc, true, false);
        let texts = log.console().texts();
        assert_eq!(texts.len(), 4);
        assert_eq!(texts[2], "[STACKTRACE] at open");
        assert_eq!(texts[3], "[STACKTRACE] at main");
    }

    #[test]
    fn smart_exception_without_backtrace_flag() {
        let exc = Exception::new(ExceptionKind::InvalidState, "closed").with_backtrace("at main");
        let mut log = logger();
        log.smart_exception(&exc, false, true);
        assert!(log
            .console()
            .texts()
            .iter()
            .all(|t| !t.starts_with("[STACKTRACE]")));
    }

    #[test]
    fn smart_exception_empty_backtrace_skipped() {
        let exc = Exception::new(ExceptionKind::InvalidState, "closed").with_backtrace("");
        let mut log = logger();
        log.smart_exception(&exc, true, false);
        assert_eq!(log.console().lines().len(), 1);
    }

    #[test]
    fn smart_exception_unknown_kind_no_suggestion() {
        let exc = Exception::new(ExceptionKind::Other("Timeout".into()), "slow peer");
        let mut log = logger();
        log.smart_exception(&exc, true, true);
        assert_eq!(
            log.console().texts(),
            vec!["[ERROR] Exception: Timeout - slow peer"]
        );
    }

    #[test]
    fn configured_exception_uses_config() {
        let exc = Exception::new(ExceptionKind::InvalidCast, "not a u8").with_backtrace("frame");
        let mut log = logger().with_exception_config(ExceptionConfig {
            print_backtrace: false,
            suggest_solution: false,
        });
        log.log_configured_exception(&exc);
        assert_eq!(log.console().lines().len(), 1);
    }

    #[test]
    fn failing_console_is_total() {
        let mut log = Logger::new(MemoryConsole::failing_writes());
        log.info("lost");
        log.smart_exception(
            &Exception::new(ExceptionKind::Overflow, "too big").with_backtrace("a\nb"),
            true,
            true,
        );
        assert!(log.console().lines().is_empty());
        assert_eq!(log.console().foreground(), None);
    }

    #[test]
    fn restores_caller_color() {
        let mut console = MemoryConsole::new();
        console.set_foreground(Some(ConsoleColor::DarkGray)).unwrap();
        let mut log = Logger::new(&mut console);
        log.warning("careful");
        assert_eq!(console.foreground(), Some(ConsoleColor::DarkGray));
        assert_eq!(console.lines()[0].color, Some(ConsoleColor::Yellow));
    }

    #[test]
    fn from_config_color_choice() {
        let mut config = DiagnosticsConfig::default();
        config.console.color = ColorChoice::Never;
        assert!(!Logger::from_config(&config).console().is_colored());

        config.console.color = ColorChoice::Always;
        config.console.stream = OutputStream::Stderr;
        config.exceptions.suggest_solution = false;
        let log = Logger::from_config(&config);
        assert!(log.console().is_colored());
        assert!(!log.exceptions.suggest_solution);
    }

    #[test]
    fn free_functions_do_not_panic() {
        log_if(false, "never");
        log_info("free function smoke test");
    }
}

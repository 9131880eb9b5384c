//! Parsing of `devtoolkit.toml` diagnostics settings.
//!
//! This crate reads the optional settings file and produces a strongly-typed
//! [`DiagnosticsConfig`] controlling console color, the output stream, and the
//! default behavior of smart exception logging.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;

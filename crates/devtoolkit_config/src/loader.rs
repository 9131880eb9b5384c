//! Configuration file loading.

use crate::error::ConfigError;
use crate::types::DiagnosticsConfig;
use std::path::Path;

/// The file name looked up by [`load_config`].
pub const CONFIG_FILE_NAME: &str = "devtoolkit.toml";

/// Loads the diagnostics configuration from a directory.
///
/// Reads `<dir>/devtoolkit.toml`. A missing file is an I/O error; callers
/// that treat the file as optional fall back to [`DiagnosticsConfig::default`].
pub fn load_config(dir: &Path) -> Result<DiagnosticsConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses a diagnostics configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<DiagnosticsConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

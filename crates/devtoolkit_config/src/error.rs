//! Errors raised while reading `devtoolkit.toml`.

/// Why a diagnostics settings file could not be turned into a [`DiagnosticsConfig`].
///
/// [`DiagnosticsConfig`]: crate::DiagnosticsConfig
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The settings file could not be read from disk.
    #[error("cannot read devtoolkit.toml: {0}")]
    IoError(#[from] std::io::Error),

    /// The settings file is not valid TOML or holds an unknown key or value.
    #[error("invalid devtoolkit.toml: {0}")]
    ParseError(String),
}

//! Error types for loading and persisting the globe configuration.

use std::path::PathBuf;

/// Errors from config persistence. The I/O and parse variants carry the
/// offending path so a startup failure names the exact `config.ron` involved.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config from {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config directory or file could not be written.
    #[error("failed to write config to {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid RON.
    #[error("failed to parse config at {path}: {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    /// The in-memory config could not be serialized to RON.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),
}

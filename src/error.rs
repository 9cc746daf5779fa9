//! Domain error types for runbar.
//!
//! Provides structured error types:
//! - `ConfigError` for configuration loading and validation
//! - `RunbarError` as the top-level error type
//!
//! The widgets themselves have no failure paths; errors only arise at the
//! configuration and terminal boundaries.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for runbar
#[derive(Debug, Error)]
pub enum RunbarError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("{0}")]
    Other(String),
}

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Duplicate option identifier '{id}' in [[{section}]]")]
    DuplicateOption { section: &'static str, id: String },
}

/// Result type alias for RunbarError
pub type Result<T> = std::result::Result<T, RunbarError>;

/// Result type alias for ConfigError
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl From<String> for RunbarError {
    fn from(msg: String) -> Self {
        RunbarError::Other(msg)
    }
}

impl From<&str> for RunbarError {
    fn from(msg: &str) -> Self {
        RunbarError::Other(msg.to_string())
    }
}

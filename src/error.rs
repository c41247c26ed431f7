//! Error types for configuration loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or validating a [`SelectConfig`](crate::SelectConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// I/O error while reading the config file
    #[error("IO error reading {path:?}: {source}")]
    Io {
        /// Path of the config file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A field holds a value outside its allowed range
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Name of the offending field
        field: &'static str,
        /// What is wrong with it
        message: String,
    },

    /// The file was written by a newer version of the format
    #[error("Unsupported config version {found} (expected at most {supported})")]
    UnsupportedVersion {
        /// Version in the file
        found: u32,
        /// Highest version this build understands
        supported: u32,
    },
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

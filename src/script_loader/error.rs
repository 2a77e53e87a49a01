//! Error types for the script loader.

use std::num::ParseIntError;
use thiserror::Error;

/// Errors a load task can be rejected with.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    /// The environment fired an error event at the inserted script.
    #[error("Script load error for {src}")]
    Failed { src: String },
}

impl LoadError {
    pub fn failed(src: impl Into<String>) -> Self {
        LoadError::Failed { src: src.into() }
    }
}

/// Errors raised while reading [`LoaderConfig`](super::LoaderConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A delay variable was set but is not a whole number of milliseconds.
    #[error("Invalid {key} value {value:?}: {source}")]
    InvalidDelay {
        key: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

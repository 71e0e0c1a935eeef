//! Error types for the wallsaver controller.

use thiserror::Error;

/// Errors that can occur while configuring or driving the screensaver.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration was rejected at activation time
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Rotation interval below the allowed minimum
    #[error("rotation interval must be at least 1 second (got {got})")]
    RotationInterval {
        /// The rejected value
        got: u64,
    },

    /// Image fetch failed (network error, decode error, timeout)
    #[error("image fetch failed: {0}")]
    Fetch(String),

    /// Reading a configuration file failed
    #[error("config file error: {0}")]
    Io(String),

    /// JSON or YAML deserialization error
    #[error("deserialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

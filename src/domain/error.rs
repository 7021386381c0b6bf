//! Domain-level error types for lapwatch.
//!
//! Timer operations never fail; these errors only come from the edges
//! (config and preference files, serialization, CLI arguments).

use thiserror::Error;

/// Application-level errors.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration or argument error.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Preference store could not be read or written.
    #[error("Preference error: {message}")]
    Preference { message: String },

    /// Summary serialization failed.
    #[error("Serialization error: {message}")]
    Serialize {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// IO operation failed.
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl AppError {
    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a preference error.
    pub fn preference(message: impl Into<String>) -> Self {
        Self::Preference {
            message: message.into(),
        }
    }

    /// Create a serialization error from a `serde_json` error.
    pub fn serialize(err: serde_json::Error) -> Self {
        Self::Serialize {
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create an IO error with context.
    pub fn io(message: impl Into<String>, err: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(err),
        }
    }
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

//! Domain-specific error types for mirror-dash

use thiserror::Error;

/// Main error type for the mirror-dash renderer
#[derive(Error, Debug)]
pub enum MirrorDashError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("HTTP error: {message}")]
    Http { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<anyhow::Error> for MirrorDashError {
    fn from(err: anyhow::Error) -> Self {
        MirrorDashError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for MirrorDashError {
    fn from(err: serde_json::Error) -> Self {
        MirrorDashError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for MirrorDashError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            MirrorDashError::Serialization {
                message: format!("response body was not a snapshot: {}", err),
            }
        } else {
            MirrorDashError::Http {
                message: format!("HTTP request failed: {}", err),
            }
        }
    }
}

/// Result type alias for mirror-dash operations
pub type Result<T> = std::result::Result<T, MirrorDashError>;

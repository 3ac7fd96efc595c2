//! Error types for the Cloudflare Stream client.

use std::io;
use thiserror::Error;

/// Main error type for Stream API operations.
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("invalid credentials: key, zone, and email must all be non-empty")]
    InvalidCredentials,

    #[error("invalid file: {path}")]
    InvalidFile {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid origins: {origins:?} must not contain '/'")]
    InvalidOrigins { origins: String },

    #[error("operation failed: {url} returned status {status}")]
    OperationFailed { status: u16, url: String },

    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("timeout")]
    Timeout,

    #[error("json error: {0}")]
    Json(String),
}

impl StreamError {
    /// Create error for a response status outside the operation's contract.
    pub(crate) fn unexpected_status(status: u16, url: &str) -> Self {
        StreamError::OperationFailed {
            status,
            url: url.to_string(),
        }
    }

    /// HTTP status code if applicable.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            StreamError::OperationFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for StreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            StreamError::Timeout
        } else {
            StreamError::Network(err)
        }
    }
}

impl From<serde_json::Error> for StreamError {
    fn from(err: serde_json::Error) -> Self {
        StreamError::Json(err.to_string())
    }
}

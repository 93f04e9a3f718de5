//! Error types for the content service client.

use thiserror::Error;

/// Errors that can occur when talking to the episode content service.
#[derive(Error, Debug)]
pub enum ContentError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Service returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Episode does not exist
    #[error("Episode not found: {0}")]
    NotFound(String),

    /// Invalid service URL
    #[error("Invalid content URL: {0}")]
    InvalidUrl(String),

    /// Response body could not be turned into episodes
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Service is offline or unreachable
    #[error("Content service unreachable: {0}")]
    Unreachable(String),
}

impl ContentError {
    /// Map a transport failure, telling connection problems apart
    pub(crate) fn from_send(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            Self::Unreachable(e.to_string())
        } else {
            Self::Request(e)
        }
    }

    /// True when the episode does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type for content client operations.
pub type Result<T> = std::result::Result<T, ContentError>;

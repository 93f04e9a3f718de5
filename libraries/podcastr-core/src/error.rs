/// Core error types for Podcastr
use thiserror::Error;

/// Result type alias using `PodcastrError`
pub type Result<T> = std::result::Result<T, PodcastrError>;

/// Core error type for Podcastr
#[derive(Error, Debug)]
pub enum PodcastrError {
    /// Invalid input (malformed duration, timestamp, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl PodcastrError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

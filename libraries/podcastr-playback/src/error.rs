//! Error types for the player

use thiserror::Error;

/// Player errors
///
/// Store commands never fail; these only surface from the media seam.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The media element refused an operation (e.g. autoplay blocked)
    #[error("Media element error: {0}")]
    Media(String),

    /// The media element could not be created for an episode
    #[error("Failed to create media element for {episode_id}: {message}")]
    MediaCreation { episode_id: String, message: String },
}

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlaybackError>;

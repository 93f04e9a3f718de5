//! Core types for the player

use podcastr_core::Episode;
use serde::{Deserialize, Serialize};

/// Snapshot of the shared player state
///
/// `current_index` is only meaningful while `episodes` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistState {
    /// Loaded playlist, in playback order
    pub episodes: Vec<Episode>,

    /// Index of the active episode
    pub current_index: usize,

    /// Whether playback is requested
    pub is_playing: bool,

    /// Restart the current episode instead of ending
    pub is_looping: bool,

    /// "Next" picks a random index
    pub is_shuffling: bool,

    /// Derived: an earlier episode exists
    pub has_previous: bool,

    /// Derived: shuffling, or a later episode exists
    pub has_next: bool,
}

/// Configuration for the player store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Initial loop flag (default: false)
    pub looping: bool,

    /// Initial shuffle flag (default: false)
    pub shuffling: bool,
}

//! Player events
//!
//! Queued by the store whenever a command changes observable state, so
//! views and bindings can re-render without diffing the whole playlist.

use serde::{Deserialize, Serialize};

/// Events emitted by the player store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PlayerEvent {
    /// A new playlist was loaded
    PlaylistChanged {
        /// Number of episodes in the new playlist
        length: usize,
        /// Active index in the new playlist
        index: usize,
    },

    /// The active episode moved within the same playlist
    IndexChanged {
        /// New active index
        index: usize,
    },

    /// Playback was requested or stopped
    PlayingChanged {
        /// New playing flag
        is_playing: bool,
    },

    /// Loop mode flipped
    LoopingChanged {
        /// New loop flag
        is_looping: bool,
    },

    /// Shuffle mode flipped
    ShufflingChanged {
        /// New shuffle flag
        is_shuffling: bool,
    },

    /// The playlist was emptied; the player is idle
    Cleared,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let event = PlayerEvent::PlayingChanged { is_playing: true };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"playingChanged","is_playing":true}"#);
    }
}

/// Episode domain types
use crate::format::{format_duration, format_published_at};
use crate::types::EpisodeId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A playable podcast episode
///
/// Read-only once loaded: the player only ever clones and compares these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Unique episode identifier
    pub id: EpisodeId,

    /// Episode title
    pub title: String,

    /// Hosts and guests, as a display string
    pub members: String,

    /// Thumbnail image URL
    pub thumbnail: String,

    /// Duration in whole seconds
    pub duration: u64,

    /// Playable media URL
    pub url: String,
}

impl Episode {
    /// Duration formatted as `HH:MM:SS`
    pub fn duration_as_string(&self) -> String {
        format_duration(self.duration)
    }
}

/// Episode with the page-level metadata shown on listing and detail pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeDetail {
    /// Playable part of the episode
    #[serde(flatten)]
    pub episode: Episode,

    /// Publication timestamp
    pub published_at: DateTime<Utc>,

    /// Publication date as displayed (`"8 jan 21"`)
    pub published_at_display: String,

    /// Duration as displayed (`HH:MM:SS`)
    pub duration_as_string: String,

    /// HTML description, passed through untouched
    pub description: String,
}

impl EpisodeDetail {
    /// Build a detail record, deriving the display strings
    pub fn new(episode: Episode, published_at: DateTime<Utc>, description: String) -> Self {
        Self {
            published_at_display: format_published_at(&published_at),
            duration_as_string: episode.duration_as_string(),
            episode,
            published_at,
            description,
        }
    }

    /// The playable episode handed to the player
    pub fn episode(&self) -> &Episode {
        &self.episode
    }

    /// Episode identifier
    pub fn id(&self) -> &EpisodeId {
        &self.episode.id
    }
}

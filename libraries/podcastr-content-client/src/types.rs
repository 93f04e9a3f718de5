//! Wire types of the episode content service.

use crate::error::{ContentError, Result};
use podcastr_core::{parse_duration, parse_published_at, Episode, EpisodeDetail, EpisodeId};
use serde::{Deserialize, Serialize};

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of episodes per listing
pub const DEFAULT_LIMIT: usize = 12;

/// Configuration for connecting to the content service.
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// Base URL of the service (e.g., "http://localhost:3333")
    pub url: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
}

impl ContentConfig {
    /// Create a config with the default timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

// =============================================================================
// Query Types
// =============================================================================

/// Ordering by publication date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Listing parameters for `GET /episodes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeQuery {
    pub limit: usize,
    pub order: SortOrder,
}

impl EpisodeQuery {
    /// Newest `limit` episodes first.
    pub fn latest(limit: usize) -> Self {
        Self {
            limit,
            order: SortOrder::Desc,
        }
    }
}

impl Default for EpisodeQuery {
    fn default() -> Self {
        Self::latest(DEFAULT_LIMIT)
    }
}

// =============================================================================
// Episode Types
// =============================================================================

/// Media file block of an episode record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiFile {
    pub url: String,
    #[serde(rename = "type", default)]
    pub mime_type: String,
    pub duration: WireDuration,
}

/// Duration as sent by the service: a numeric string or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireDuration {
    Number(serde_json::Number),
    Text(String),
}

impl WireDuration {
    /// Whole seconds
    pub fn seconds(&self) -> Result<u64> {
        let raw = match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        };
        parse_duration(&raw).map_err(|e| ContentError::Parse(e.to_string()))
    }
}

/// Episode record as stored by the content service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEpisode {
    pub id: String,
    pub title: String,
    pub members: String,
    pub published_at: String,
    pub thumbnail: String,
    #[serde(default)]
    pub description: String,
    pub file: ApiFile,
}

impl ApiEpisode {
    /// Convert into the page-level episode, formatting dates and durations.
    pub fn into_detail(self) -> Result<EpisodeDetail> {
        let duration = self.file.duration.seconds().map_err(|e| {
            ContentError::Parse(format!("episode {}: {}", self.id, e))
        })?;
        let published_at = parse_published_at(&self.published_at)
            .map_err(|e| ContentError::Parse(format!("episode {}: {}", self.id, e)))?;

        let episode = Episode {
            id: EpisodeId::new(self.id),
            title: self.title,
            members: self.members,
            thumbnail: self.thumbnail,
            duration,
            url: self.file.url,
        };

        Ok(EpisodeDetail::new(episode, published_at, self.description))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(duration: serde_json::Value) -> ApiEpisode {
        serde_json::from_value(serde_json::json!({
            "id": "a-importancia-da-contribuicao-em-open-source",
            "title": "Faladev #30 | A importância da contribuição em Open Source",
            "members": "Diego Fernandes, João Pedro, Diego Haz e Bruno Lemos",
            "published_at": "2021-01-22 19:36:00",
            "thumbnail": "https://example.com/opensource.jpg",
            "description": "<p>Nesse episódio</p>",
            "file": {
                "url": "https://example.com/opensource.m4a",
                "type": "audio/x-m4a",
                "duration": duration
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_string_duration() {
        let detail = record(serde_json::json!("3981")).into_detail().unwrap();
        assert_eq!(detail.episode.duration, 3981);
        assert_eq!(detail.duration_as_string, "01:06:21");
        assert_eq!(detail.published_at_display, "22 jan 21");
    }

    #[test]
    fn test_numeric_duration() {
        let detail = record(serde_json::json!(3981)).into_detail().unwrap();
        assert_eq!(detail.episode.duration, 3981);
    }

    #[test]
    fn test_malformed_duration_is_parse_error() {
        let err = record(serde_json::json!("abc")).into_detail().unwrap_err();
        match err {
            ContentError::Parse(msg) => assert!(msg.contains("a-importancia")),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_query() {
        let query = EpisodeQuery::default();
        assert_eq!(query.limit, 12);
        assert_eq!(query.order.as_str(), "desc");
    }
}

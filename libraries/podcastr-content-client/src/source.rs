//! Episode source abstraction.

use crate::error::Result;
use crate::types::EpisodeQuery;
use async_trait::async_trait;
use podcastr_core::{EpisodeDetail, EpisodeId};

/// Anything that can supply episodes to the page layer.
///
/// Implemented by [`ContentClient`](crate::ContentClient); tests provide
/// in-memory sources.
#[async_trait]
pub trait EpisodeSource: Send + Sync {
    /// Episodes ordered by publication date, at most `query.limit`.
    async fn list_episodes(&self, query: &EpisodeQuery) -> Result<Vec<EpisodeDetail>>;

    /// A single episode; `ContentError::NotFound` when missing.
    async fn get_episode(&self, id: &EpisodeId) -> Result<EpisodeDetail>;
}

//! Common test utilities and fixtures
#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use chrono::{TimeZone, Utc};
use podcastr_content_client::{ContentError, EpisodeQuery, EpisodeSource, Result, SortOrder};
use podcastr_core::{Episode, EpisodeDetail, EpisodeId};
use podcastr_server::{api, config::PageSettings, state::AppState};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// In-memory episode source, newest first
#[derive(Default)]
pub struct MemorySource {
    episodes: Vec<EpisodeDetail>,
    pub list_calls: AtomicUsize,
    pub get_calls: AtomicUsize,
    pub offline: AtomicBool,
}

impl MemorySource {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            episodes: ids
                .iter()
                .enumerate()
                .map(|(day, id)| fixtures::detail(id, 28 - day as u32))
                .collect(),
            ..Default::default()
        }
    }

    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(ContentError::Unreachable("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl EpisodeSource for MemorySource {
    async fn list_episodes(&self, query: &EpisodeQuery) -> Result<Vec<EpisodeDetail>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;

        let mut episodes = self.episodes.clone();
        if query.order == SortOrder::Asc {
            episodes.reverse();
        }
        episodes.truncate(query.limit);
        Ok(episodes)
    }

    async fn get_episode(&self, id: &EpisodeId) -> Result<EpisodeDetail> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;

        self.episodes
            .iter()
            .find(|e| e.id() == id)
            .cloned()
            .ok_or_else(|| ContentError::NotFound(id.to_string()))
    }
}

/// Router over `source` with default page settings
pub fn create_test_app(source: Arc<MemorySource>) -> Router {
    create_test_app_with(source, PageSettings::default())
}

pub fn create_test_app_with(source: Arc<MemorySource>, pages: PageSettings) -> Router {
    api::router(AppState::new(source, pages))
}

pub mod fixtures {
    use super::*;

    pub fn detail(id: &str, day: u32) -> EpisodeDetail {
        let episode = Episode {
            id: EpisodeId::new(id),
            title: format!("Episode {}", id),
            members: "Diego e Richard".to_string(),
            thumbnail: format!("https://example.com/{}.jpg", id),
            duration: 3981,
            url: format!("https://example.com/{}.m4a", id),
        };
        let published_at = Utc.with_ymd_and_hms(2021, 1, day, 16, 30, 0).unwrap();
        EpisodeDetail::new(episode, published_at, "<p>Description</p>".to_string())
    }
}

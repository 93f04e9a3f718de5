/// Shared application state
use crate::cache::PageCache;
use crate::config::PageSettings;
use crate::pages::{EpisodePage, EpisodePaths, HomePage};
use podcastr_content_client::EpisodeSource;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn EpisodeSource>,
    pub pages: Arc<PageSettings>,
    pub home_cache: Arc<PageCache<HomePage>>,
    pub paths_cache: Arc<PageCache<EpisodePaths>>,
    pub episode_cache: Arc<PageCache<EpisodePage>>,
}

impl AppState {
    pub fn new(source: Arc<dyn EpisodeSource>, pages: PageSettings) -> Self {
        Self {
            home_cache: Arc::new(PageCache::new(pages.home_revalidate())),
            paths_cache: Arc::new(PageCache::new(pages.home_revalidate())),
            episode_cache: Arc::new(PageCache::new(pages.episode_revalidate())),
            pages: Arc::new(pages),
            source,
        }
    }
}

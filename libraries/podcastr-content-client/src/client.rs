//! Content service client.

use crate::error::{ContentError, Result};
use crate::source::EpisodeSource;
use crate::types::{ApiEpisode, ContentConfig, EpisodeQuery};
use async_trait::async_trait;
use podcastr_core::{EpisodeDetail, EpisodeId};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;

/// Client for the episode content service.
///
/// # Example
///
/// ```ignore
/// use podcastr_content_client::{ContentClient, ContentConfig, EpisodeQuery};
///
/// let client = ContentClient::new(ContentConfig::new("http://localhost:3333"))?;
/// let episodes = client.list_episodes(&EpisodeQuery::latest(12)).await?;
/// println!("Found {} episodes", episodes.len());
/// ```
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: Client,
    base_url: String,
}

impl ContentClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ContentConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ContentError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ContentError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Podcastr/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Base URL without trailing slash.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Fetch raw episode records.
    pub async fn fetch_episodes(&self, query: &EpisodeQuery) -> Result<Vec<ApiEpisode>> {
        let url = format!("{}/episodes", self.base_url);
        debug!(url = %url, limit = query.limit, order = query.order.as_str(), "Fetching episodes");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("_limit", query.limit.to_string()),
                ("_sort", "published_at".to_string()),
                ("_order", query.order.as_str().to_string()),
            ])
            .send()
            .await
            .map_err(ContentError::from_send)?;

        let response = check_status(response, None).await?;
        let episodes: Vec<ApiEpisode> = response.json().await.map_err(|e| {
            ContentError::Parse(format!("Failed to parse episode listing: {}", e))
        })?;

        debug!(count = episodes.len(), "Fetched episodes");
        Ok(episodes)
    }

    /// Fetch one raw episode record.
    pub async fn fetch_episode(&self, id: &EpisodeId) -> Result<ApiEpisode> {
        let url = format!("{}/episodes/{}", self.base_url, id);
        debug!(url = %url, episode_id = %id, "Fetching episode");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ContentError::from_send)?;

        let response = check_status(response, Some(id)).await?;
        response
            .json()
            .await
            .map_err(|e| ContentError::Parse(format!("Failed to parse episode {}: {}", id, e)))
    }

    /// Newest episodes, formatted for display.
    pub async fn list_episodes(&self, query: &EpisodeQuery) -> Result<Vec<EpisodeDetail>> {
        self.fetch_episodes(query)
            .await?
            .into_iter()
            .map(ApiEpisode::into_detail)
            .collect()
    }

    /// One episode, formatted for display.
    pub async fn get_episode(&self, id: &EpisodeId) -> Result<EpisodeDetail> {
        self.fetch_episode(id).await?.into_detail()
    }
}

async fn check_status(response: Response, id: Option<&EpisodeId>) -> Result<Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    if status.as_u16() == 404 {
        if let Some(id) = id {
            return Err(ContentError::NotFound(id.to_string()));
        }
    }

    let error_text = response.text().await.unwrap_or_default();
    Err(ContentError::ServerError {
        status: status.as_u16(),
        message: error_text,
    })
}

#[async_trait]
impl EpisodeSource for ContentClient {
    async fn list_episodes(&self, query: &EpisodeQuery) -> Result<Vec<EpisodeDetail>> {
        ContentClient::list_episodes(self, query).await
    }

    async fn get_episode(&self, id: &EpisodeId) -> Result<EpisodeDetail> {
        ContentClient::get_episode(self, id).await
    }
}

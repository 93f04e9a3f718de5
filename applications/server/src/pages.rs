//! Page data builders
//!
//! The home page lists the newest episodes twice: a short "latest" strip and
//! the full table. Both are backed by one combined play list, so every row
//! carries the index the player should start from.

use crate::config::PageSettings;
use crate::error::Result;
use podcastr_content_client::{EpisodeQuery, EpisodeSource};
use podcastr_core::{Episode, EpisodeDetail, EpisodeId};
use serde::Serialize;

/// One listed episode with its position in the page play list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeRow {
    #[serde(flatten)]
    pub episode: EpisodeDetail,
    pub play_index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub latest_episodes: Vec<EpisodeRow>,
    pub all_episodes: Vec<EpisodeRow>,
    /// List handed to `playList`: latest followed by all
    pub episode_list: Vec<Episode>,
}

impl HomePage {
    /// Build the home page from episodes ordered newest first
    pub fn build(episodes: Vec<EpisodeDetail>, latest_count: usize) -> Self {
        let latest: Vec<EpisodeDetail> = episodes.iter().take(latest_count).cloned().collect();
        let offset = latest.len();

        let episode_list = latest
            .iter()
            .chain(episodes.iter())
            .map(|detail| detail.episode.clone())
            .collect();

        let latest_episodes = latest
            .into_iter()
            .enumerate()
            .map(|(index, episode)| EpisodeRow {
                episode,
                play_index: index,
            })
            .collect();

        let all_episodes = episodes
            .into_iter()
            .enumerate()
            .map(|(index, episode)| EpisodeRow {
                episode,
                play_index: index + offset,
            })
            .collect();

        Self {
            latest_episodes,
            all_episodes,
            episode_list,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpisodePage {
    pub episode: EpisodeDetail,
}

/// Ids of the detail pages built ahead of time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpisodePaths {
    pub paths: Vec<EpisodeId>,
}

pub async fn load_home(source: &dyn EpisodeSource, settings: &PageSettings) -> Result<HomePage> {
    let episodes = source
        .list_episodes(&EpisodeQuery::latest(settings.home_limit))
        .await?;
    Ok(HomePage::build(episodes, settings.latest_count))
}

pub async fn load_episode(source: &dyn EpisodeSource, id: &EpisodeId) -> Result<EpisodePage> {
    let episode = source.get_episode(id).await?;
    Ok(EpisodePage { episode })
}

pub async fn load_paths(source: &dyn EpisodeSource, settings: &PageSettings) -> Result<EpisodePaths> {
    let episodes = source
        .list_episodes(&EpisodeQuery::latest(settings.latest_count))
        .await?;
    Ok(EpisodePaths {
        paths: episodes.iter().map(|e| e.id().clone()).collect(),
    })
}

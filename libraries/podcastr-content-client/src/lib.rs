//! Podcastr Content Client
//!
//! HTTP client for the JSON episode service backing the Podcastr pages.
//!
//! # Features
//!
//! - **Listing**: newest episodes with limit and ordering
//! - **Detail**: single episode lookup, `NotFound` on 404
//! - **Conversion**: wire records into display-ready `EpisodeDetail`s
//!
//! # Example
//!
//! ```ignore
//! use podcastr_content_client::{ContentClient, ContentConfig, EpisodeQuery};
//! use podcastr_core::EpisodeId;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ContentClient::new(ContentConfig::new("http://localhost:3333"))?;
//!
//!     for episode in client.list_episodes(&EpisodeQuery::latest(12)).await? {
//!         println!("{} ({})", episode.episode.title, episode.duration_as_string);
//!     }
//!
//!     let detail = client.get_episode(&EpisodeId::new("a-importancia")).await?;
//!     println!("{}", detail.published_at_display);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod source;
mod types;

pub use client::ContentClient;
pub use error::{ContentError, Result};
pub use source::EpisodeSource;
pub use types::{
    ApiEpisode, ApiFile, ContentConfig, EpisodeQuery, SortOrder, WireDuration, DEFAULT_LIMIT,
    DEFAULT_TIMEOUT_SECS,
};

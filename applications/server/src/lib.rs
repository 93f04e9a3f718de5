//! Podcastr Server Library
//!
//! Serves the JSON page data behind the Podcastr web player: the home page
//! listing, prebuilt episode paths and per-episode detail pages, each cached
//! for its revalidate window.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod pages;
pub mod state;

// Re-export commonly used types for convenience
pub use cache::PageCache;
pub use config::{PageSettings, ServerConfig};
pub use error::{Result, ServerError};
pub use pages::{EpisodePage, EpisodePaths, EpisodeRow, HomePage};
pub use state::AppState;

//! Podcastr Core
//!
//! Domain types, formatting helpers and error handling shared by every
//! Podcastr crate.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Episode`, `EpisodeDetail`, `EpisodeId`
//! - **Formatting**: `HH:MM:SS` durations and pt-BR publication dates
//! - **Error Handling**: Unified `PodcastrError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use podcastr_core::{format_duration, Episode, EpisodeId};
//!
//! let episode = Episode {
//!     id: EpisodeId::new("a-importancia-da-contribuicao-em-open-source"),
//!     title: "A importância da contribuição em Open Source".to_string(),
//!     members: "Diego e Richard".to_string(),
//!     thumbnail: "https://example.com/opensource.jpg".to_string(),
//!     duration: 3981,
//!     url: "https://example.com/opensource.m4a".to_string(),
//! };
//!
//! assert_eq!(format_duration(episode.duration), "01:06:21");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod format;
pub mod types;

pub use error::{PodcastrError, Result};
pub use format::{format_duration, format_published_at, parse_duration, parse_published_at};
pub use types::{Episode, EpisodeDetail, EpisodeId};

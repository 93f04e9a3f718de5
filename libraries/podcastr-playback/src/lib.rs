//! Podcastr - Player State Management
//!
//! Platform-agnostic player state for the Podcastr web player.
//!
//! This crate provides:
//! - Player state store (playlist, current index, playing/loop/shuffle flags)
//! - Transport commands (play, play list, next, previous, toggles)
//! - Media element binding (mount per episode, progress tracking, seeking)
//! - Transport control availability and a renderable view model
//!
//! # Architecture
//!
//! `podcastr-playback` knows nothing about the DOM:
//! - The store is a plain owned value, lent to pages and to the view
//! - The view drives a `MediaElement` created by a `MediaBackend`
//! - The browser binding lives behind the `wasm` feature
//!
//! # Example: Store Commands
//!
//! ```rust
//! use podcastr_core::{Episode, EpisodeId};
//! use podcastr_playback::{PlayerConfig, PlayerStore};
//!
//! let episode = |id: &str| Episode {
//!     id: EpisodeId::new(id),
//!     title: format!("Episode {}", id),
//!     members: "Diego e Richard".to_string(),
//!     thumbnail: format!("https://example.com/{}.jpg", id),
//!     duration: 1800,
//!     url: format!("https://example.com/{}.m4a", id),
//! };
//!
//! let mut store = PlayerStore::new(PlayerConfig::default());
//! store.play_list(vec![episode("a"), episode("b"), episode("c")], 1);
//!
//! assert!(store.is_playing());
//! assert!(store.has_next());
//! assert!(store.has_previous());
//!
//! store.play_next();
//! assert_eq!(store.current_episode_index(), 2);
//! assert!(!store.has_next());
//! ```
//!
//! # Example: Platform Integration
//!
//! ```rust,no_run
//! use podcastr_core::Episode;
//! use podcastr_playback::{
//!     ListenerId, MediaBackend, MediaElement, MediaEventKind, MediaListener, PlayerStore,
//!     PlayerView, Result,
//! };
//!
//! // Implement MediaElement for your platform
//! struct MyAudio;
//!
//! impl MediaElement for MyAudio {
//!     fn set_source(&mut self, _url: &str) {}
//!     fn set_loop(&mut self, _looping: bool) {}
//!     fn play(&mut self) -> Result<()> { Ok(()) }
//!     fn pause(&mut self) {}
//!     fn set_current_time(&mut self, _seconds: f64) {}
//!     fn is_ended(&self) -> bool { false }
//!     fn add_event_listener(&mut self, _kind: MediaEventKind, _listener: MediaListener) -> ListenerId {
//!         ListenerId(0)
//!     }
//!     fn remove_event_listener(&mut self, _id: ListenerId) {}
//! }
//!
//! struct MyBackend;
//!
//! impl MediaBackend for MyBackend {
//!     fn create_element(&mut self, episode: &Episode) -> Result<Box<dyn MediaElement>> {
//!         let mut audio = MyAudio;
//!         audio.set_source(&episode.url);
//!         Ok(Box::new(audio))
//!     }
//! }
//!
//! let mut store = PlayerStore::default();
//! let mut view = PlayerView::new(MyBackend);
//!
//! // Once per UI event loop turn
//! view.update(&mut store);
//! let model = view.render(&store);
//! ```

mod error;
mod events;
mod media;
mod shuffle;
mod store;
pub mod types;
mod view;

#[cfg(feature = "wasm")]
pub mod wasm;

// Public exports
pub use error::{PlaybackError, Result};
pub use events::PlayerEvent;
pub use media::{ListenerId, MediaBackend, MediaElement, MediaEvent, MediaEventKind, MediaListener};
pub use store::PlayerStore;
pub use types::{PlayerConfig, PlaylistState};
pub use view::{
    Control, ControlStates, NowPlaying, PlayerView, PlayerViewModel, ProgressState,
    IDLE_PLACEHOLDER,
};

//! Platform-agnostic media element seam
//!
//! Abstracts the audio-capable element the player view drives (a browser
//! `<audio>` element, a desktop decoder, a test double).

use crate::error::Result;
use podcastr_core::Episode;

/// Events a media element reports back to the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// Metadata (duration, seekability) finished loading
    LoadedMetadata,

    /// Playback position advanced
    TimeUpdate {
        /// Position in seconds
        current_time: f64,
    },

    /// Playback reached the end (never fires while looping)
    Ended,

    /// The element started playing (user interaction included)
    Play,

    /// The element paused (user interaction included)
    Pause,

    /// A play request was refused after the fact (autoplay policy)
    PlayRejected,
}

impl MediaEvent {
    /// Kind used for listener registration
    pub fn kind(&self) -> MediaEventKind {
        match self {
            MediaEvent::LoadedMetadata => MediaEventKind::LoadedMetadata,
            MediaEvent::TimeUpdate { .. } => MediaEventKind::TimeUpdate,
            MediaEvent::Ended => MediaEventKind::Ended,
            MediaEvent::Play => MediaEventKind::Play,
            MediaEvent::Pause => MediaEventKind::Pause,
            MediaEvent::PlayRejected => MediaEventKind::PlayRejected,
        }
    }
}

/// Event kinds a listener can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaEventKind {
    LoadedMetadata,
    TimeUpdate,
    Ended,
    Play,
    Pause,
    PlayRejected,
}

impl MediaEventKind {
    /// DOM event name, `None` for kinds reported outside the DOM event loop
    pub fn dom_name(&self) -> Option<&'static str> {
        match self {
            MediaEventKind::LoadedMetadata => Some("loadedmetadata"),
            MediaEventKind::TimeUpdate => Some("timeupdate"),
            MediaEventKind::Ended => Some("ended"),
            MediaEventKind::Play => Some("play"),
            MediaEventKind::Pause => Some("pause"),
            MediaEventKind::PlayRejected => None,
        }
    }
}

/// Handle returned by listener registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Callback invoked for each event of the subscribed kind
pub type MediaListener = Box<dyn FnMut(MediaEvent)>;

/// An audio-capable element bound to one episode
///
/// Implementations report events only through registered listeners and
/// must stop calling a listener once it has been removed.
pub trait MediaElement {
    /// Point the element at a media URL
    fn set_source(&mut self, url: &str);

    /// Restart automatically at the end instead of ending
    fn set_loop(&mut self, looping: bool);

    /// Start or resume playback
    ///
    /// May be refused by the platform (autoplay policies and the like),
    /// either right away as an error or later as `MediaEvent::PlayRejected`.
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self);

    /// Jump to a playback position in seconds
    fn set_current_time(&mut self, seconds: f64);

    /// Playback reached the end of the media
    ///
    /// Lets the player tell the pause that precedes `ended` apart from a
    /// user pause.
    fn is_ended(&self) -> bool;

    /// Subscribe to one kind of event
    fn add_event_listener(&mut self, kind: MediaEventKind, listener: MediaListener) -> ListenerId;

    /// Unsubscribe a listener (unknown ids are ignored)
    fn remove_event_listener(&mut self, id: ListenerId);
}

/// Factory for media elements, one per mounted episode
pub trait MediaBackend {
    /// Create an element for `episode`, already pointing at its media URL
    fn create_element(&mut self, episode: &Episode) -> Result<Box<dyn MediaElement>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kinds_match() {
        assert_eq!(MediaEvent::Ended.kind(), MediaEventKind::Ended);
        assert_eq!(
            MediaEvent::TimeUpdate { current_time: 1.5 }.kind(),
            MediaEventKind::TimeUpdate
        );
    }

    #[test]
    fn dom_names() {
        assert_eq!(
            MediaEventKind::LoadedMetadata.dom_name(),
            Some("loadedmetadata")
        );
        assert_eq!(MediaEventKind::TimeUpdate.dom_name(), Some("timeupdate"));
        assert_eq!(MediaEventKind::Ended.dom_name(), Some("ended"));
        assert_eq!(MediaEventKind::PlayRejected.dom_name(), None);
    }
}

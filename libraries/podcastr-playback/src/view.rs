//! Player view - binds a media element to the player store
//!
//! The view owns at most one mounted media element (one per active episode)
//! and keeps it in step with the store:
//!
//! - `sync` is the effect pass: mount on episode change, reflect the loop
//!   flag, drive play/pause one-way from `is_playing`
//! - `pump` applies queued media events (metadata loaded, time updates,
//!   ended, play/pause from the element itself, late play refusals) to the
//!   store and to the local progress state
//!
//! Listeners registered on an element are removed when it is unmounted, so
//! an old episode can never report into a newer one.

use crate::{
    media::{ListenerId, MediaBackend, MediaElement, MediaEvent, MediaEventKind},
    store::PlayerStore,
};
use podcastr_core::{format_duration, Episode, EpisodeId};
use serde::Serialize;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use tracing::{debug, trace, warn};

/// Shown while no episode is selected
pub const IDLE_PLACEHOLDER: &str = "Select a podcast to listen to";

/// Events queued by listeners, tagged with the mount generation
type Inbox = Rc<RefCell<VecDeque<(u64, MediaEvent)>>>;

/// Elapsed seconds of the active episode (view-local)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressState {
    elapsed: u64,
}

impl ProgressState {
    /// Elapsed whole seconds
    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    fn set(&mut self, seconds: u64) {
        self.elapsed = seconds;
    }

    fn reset(&mut self) {
        self.elapsed = 0;
    }
}

/// Transport controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Shuffle,
    Previous,
    PlayPause,
    Next,
    Loop,
}

/// Which transport controls accept input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlStates {
    pub shuffle: bool,
    pub previous: bool,
    pub play_pause: bool,
    pub next: bool,
    #[serde(rename = "loop")]
    pub looping: bool,
}

impl ControlStates {
    /// Derive control availability from the store
    ///
    /// Everything is disabled while idle. Shuffle also needs more than one
    /// episode to choose from.
    pub fn from_store(store: &PlayerStore) -> Self {
        let loaded = !store.is_idle();

        Self {
            shuffle: loaded && store.episode_list().len() > 1,
            previous: loaded && store.has_previous(),
            play_pause: loaded,
            next: loaded && store.has_next(),
            looping: loaded,
        }
    }

    /// Check a single control
    pub fn is_enabled(&self, control: Control) -> bool {
        match control {
            Control::Shuffle => self.shuffle,
            Control::Previous => self.previous,
            Control::PlayPause => self.play_pause,
            Control::Next => self.next,
            Control::Loop => self.looping,
        }
    }
}

/// Episode area of the player
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum NowPlaying {
    /// Nothing selected
    Idle { placeholder: String },

    /// An episode is selected
    #[serde(rename_all = "camelCase")]
    Loaded {
        title: String,
        members: String,
        thumbnail: String,
        /// Seek range upper bound, in seconds
        duration: u64,
    },
}

/// Everything needed to draw the player
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerViewModel {
    pub now_playing: NowPlaying,
    pub progress: u64,
    pub progress_display: String,
    pub duration_display: String,
    pub is_playing: bool,
    pub is_looping: bool,
    pub is_shuffling: bool,
    pub controls: ControlStates,
}

/// Identity of a mounted episode
#[derive(Debug, Clone, PartialEq, Eq)]
struct MountKey {
    index: usize,
    episode_id: EpisodeId,
}

impl MountKey {
    fn of(store: &PlayerStore) -> Option<Self> {
        store.current_episode().map(|episode| Self {
            index: store.current_episode_index(),
            episode_id: episode.id.clone(),
        })
    }
}

/// A media element bound to one episode, with its listeners
///
/// Dropping it pauses the element and removes every listener.
struct MountedMedia {
    element: Box<dyn MediaElement>,
    generation: u64,
    duration: u64,
    listeners: Vec<ListenerId>,
    tracking_progress: bool,
    looping: bool,
    playing: bool,
}

impl MountedMedia {
    fn listen(&mut self, kind: MediaEventKind, inbox: &Inbox) {
        let inbox = Rc::clone(inbox);
        let generation = self.generation;
        let id = self.element.add_event_listener(
            kind,
            Box::new(move |event| inbox.borrow_mut().push_back((generation, event))),
        );
        self.listeners.push(id);
    }

    fn apply_playing(&mut self, is_playing: bool) {
        if is_playing {
            if let Err(e) = self.element.play() {
                warn!(error = %e, "Media element refused to play");
            }
        } else {
            self.element.pause();
        }
        self.playing = is_playing;
    }
}

impl Drop for MountedMedia {
    fn drop(&mut self) {
        self.element.pause();
        for id in self.listeners.drain(..) {
            self.element.remove_event_listener(id);
        }
    }
}

/// Binds a media backend to the player store
pub struct PlayerView<B: MediaBackend> {
    backend: B,
    mounted: Option<MountedMedia>,
    mounted_key: Option<MountKey>,
    force_remount: bool,
    next_generation: u64,
    inbox: Inbox,
    progress: ProgressState,
}

impl<B: MediaBackend> PlayerView<B> {
    /// Create a view with nothing mounted
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            mounted: None,
            mounted_key: None,
            force_remount: false,
            next_generation: 0,
            inbox: Rc::new(RefCell::new(VecDeque::new())),
            progress: ProgressState::default(),
        }
    }

    /// Local progress state
    pub fn progress(&self) -> ProgressState {
        self.progress
    }

    /// Whether a media element is currently mounted
    pub fn has_media(&self) -> bool {
        self.mounted.is_some()
    }

    /// Apply queued media events, then reflect the store onto the element
    pub fn update(&mut self, store: &mut PlayerStore) -> usize {
        let handled = self.pump(store);
        self.sync(store);
        handled
    }

    /// Apply queued media events in arrival order
    ///
    /// Returns the number of events handled. Events from elements that
    /// have since been unmounted are discarded.
    pub fn pump(&mut self, store: &mut PlayerStore) -> usize {
        let events: Vec<(u64, MediaEvent)> = self.inbox.borrow_mut().drain(..).collect();
        let mut handled = 0;

        for (generation, event) in events {
            let current = self.mounted.as_ref().map(|m| m.generation);
            if current != Some(generation) {
                trace!(generation, ?event, "Dropping event from unmounted media");
                continue;
            }
            self.handle_media_event(event, store);
            handled += 1;
        }

        handled
    }

    /// Reflect the store onto the media element
    pub fn sync(&mut self, store: &PlayerStore) {
        let key = MountKey::of(store);

        if key != self.mounted_key || self.force_remount {
            self.force_remount = false;
            self.remount(key, store);
            return;
        }

        if let Some(mounted) = self.mounted.as_mut() {
            if mounted.looping != store.is_looping() {
                mounted.element.set_loop(store.is_looping());
                mounted.looping = store.is_looping();
            }

            if mounted.playing != store.is_playing() {
                mounted.apply_playing(store.is_playing());
            }
        }
    }

    /// Move playback to `seconds`, bounded by the episode duration
    ///
    /// Progress updates immediately without waiting for the element.
    pub fn seek(&mut self, seconds: u64) {
        let Some(mounted) = self.mounted.as_mut() else {
            debug!(seconds, "Seek ignored, nothing mounted");
            return;
        };

        let target = seconds.min(mounted.duration);
        mounted.element.set_current_time(target as f64);
        self.progress.set(target);
    }

    /// Handle a transport button press
    ///
    /// Disabled controls are ignored. Returns whether the press was applied.
    pub fn press(&mut self, control: Control, store: &mut PlayerStore) -> bool {
        if !ControlStates::from_store(store).is_enabled(control) {
            debug!(?control, "Ignoring disabled control");
            return false;
        }

        match control {
            Control::Shuffle => store.toggle_shuffle(),
            Control::Previous => store.play_previous(),
            Control::PlayPause => store.toggle_play(),
            Control::Next => store.play_next(),
            Control::Loop => store.toggle_loop(),
        }

        true
    }

    /// Build the view model for drawing
    pub fn render(&self, store: &PlayerStore) -> PlayerViewModel {
        let (now_playing, duration_display) = match store.current_episode() {
            Some(episode) => (Self::loaded(episode), format_duration(episode.duration)),
            None => (
                NowPlaying::Idle {
                    placeholder: IDLE_PLACEHOLDER.to_string(),
                },
                format_duration(0),
            ),
        };

        PlayerViewModel {
            now_playing,
            progress: self.progress.elapsed(),
            progress_display: format_duration(self.progress.elapsed()),
            duration_display,
            is_playing: store.is_playing(),
            is_looping: store.is_looping(),
            is_shuffling: store.is_shuffling(),
            controls: ControlStates::from_store(store),
        }
    }

    // ===== Internal =====

    fn loaded(episode: &Episode) -> NowPlaying {
        NowPlaying::Loaded {
            title: episode.title.clone(),
            members: episode.members.clone(),
            thumbnail: episode.thumbnail.clone(),
            duration: episode.duration,
        }
    }

    fn remount(&mut self, key: Option<MountKey>, store: &PlayerStore) {
        // Release the old element and its listeners first
        self.mounted = None;
        self.mounted_key = key;
        self.progress.reset();

        let Some(episode) = store.current_episode() else {
            debug!("Player idle, media unmounted");
            return;
        };

        let mut element = match self.backend.create_element(episode) {
            Ok(element) => element,
            Err(e) => {
                warn!(episode_id = %episode.id, error = %e, "Failed to mount media");
                return;
            }
        };
        element.set_loop(store.is_looping());

        self.next_generation += 1;
        let mut mounted = MountedMedia {
            element,
            generation: self.next_generation,
            duration: episode.duration,
            listeners: Vec::new(),
            tracking_progress: false,
            looping: store.is_looping(),
            playing: false,
        };

        for kind in [
            MediaEventKind::LoadedMetadata,
            MediaEventKind::Ended,
            MediaEventKind::Play,
            MediaEventKind::Pause,
            MediaEventKind::PlayRejected,
        ] {
            mounted.listen(kind, &self.inbox);
        }

        if store.is_playing() {
            mounted.apply_playing(true);
        }

        debug!(
            episode_id = %episode.id,
            index = store.current_episode_index(),
            generation = mounted.generation,
            "Mounted media"
        );
        self.mounted = Some(mounted);
    }

    fn handle_media_event(&mut self, event: MediaEvent, store: &mut PlayerStore) {
        let Some(mounted) = self.mounted.as_mut() else {
            return;
        };

        match event {
            MediaEvent::LoadedMetadata => {
                mounted.element.set_current_time(0.0);
                self.progress.reset();
                if !mounted.tracking_progress {
                    mounted.listen(MediaEventKind::TimeUpdate, &self.inbox);
                    mounted.tracking_progress = true;
                }
            }
            MediaEvent::TimeUpdate { current_time } => {
                self.progress.set(current_time.max(0.0).floor() as u64);
            }
            MediaEvent::Play => {
                mounted.playing = true;
                store.set_playing_state(true);
            }
            MediaEvent::Pause => {
                // The element pauses itself right before `ended`
                if mounted.element.is_ended() {
                    trace!("Ignoring end-of-media pause");
                    return;
                }
                mounted.playing = false;
                store.set_playing_state(false);
            }
            MediaEvent::Ended => {
                if store.has_next() {
                    let before = store.current_episode_index();
                    store.play_next();
                    // Shuffle may pick the episode that just ended
                    if store.current_episode_index() == before {
                        self.force_remount = true;
                    }
                } else {
                    store.clear_player_state();
                }
            }
            MediaEvent::PlayRejected => {
                // Store keeps its intent; `playing` stays set so sync does not retry
                warn!("Media element refused to play");
            }
        }
    }
}

//! Test doubles for the media seam
#![allow(dead_code)]

use podcastr_core::{Episode, EpisodeId};
use podcastr_playback::{
    ListenerId, MediaBackend, MediaElement, MediaEvent, MediaEventKind, MediaListener,
    PlaybackError, Result,
};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

pub fn episode(id: &str, duration: u64) -> Episode {
    Episode {
        id: EpisodeId::new(id),
        title: format!("Episode {}", id),
        members: "Diego e Richard".to_string(),
        thumbnail: format!("https://example.com/{}.jpg", id),
        duration,
        url: format!("https://example.com/{}.m4a", id),
    }
}

pub fn playlist(ids: &[&str]) -> Vec<Episode> {
    ids.iter().map(|id| episode(id, 600)).collect()
}

/// Observable state of one fake element
#[derive(Default)]
pub struct FakeMediaState {
    pub url: String,
    pub looping: bool,
    pub playing: bool,
    pub ended: bool,
    pub current_time: f64,
    pub play_calls: usize,
    pub pause_calls: usize,
    pub seeks: Vec<f64>,
    pub refuse_play: bool,
    listeners: BTreeMap<u64, (MediaEventKind, MediaListener)>,
    next_id: u64,
}

/// Test-side handle to a fake element
#[derive(Clone)]
pub struct MediaHandle(pub Rc<RefCell<FakeMediaState>>);

impl MediaHandle {
    pub fn state(&self) -> std::cell::Ref<'_, FakeMediaState> {
        self.0.borrow()
    }

    pub fn listener_count(&self) -> usize {
        self.0.borrow().listeners.len()
    }

    pub fn has_listener(&self, kind: MediaEventKind) -> bool {
        self.0.borrow().listeners.values().any(|(k, _)| *k == kind)
    }

    /// Deliver an event to every listener of its kind
    pub fn fire(&self, event: MediaEvent) {
        let mut state = self.0.borrow_mut();
        for (kind, listener) in state.listeners.values_mut() {
            if *kind == event.kind() {
                listener(event);
            }
        }
    }

    pub fn metadata_loaded(&self) {
        self.fire(MediaEvent::LoadedMetadata);
    }

    pub fn advance_to(&self, seconds: f64) {
        self.0.borrow_mut().current_time = seconds;
        self.fire(MediaEvent::TimeUpdate {
            current_time: seconds,
        });
    }

    /// User pressed pause on the element itself
    pub fn user_pause(&self) {
        self.0.borrow_mut().playing = false;
        self.fire(MediaEvent::Pause);
    }

    /// User pressed play on the element itself
    pub fn user_play(&self) {
        self.0.borrow_mut().playing = true;
        self.fire(MediaEvent::Play);
    }

    /// Platform refused an accepted play request after the fact
    pub fn reject_play(&self) {
        self.0.borrow_mut().playing = false;
        self.fire(MediaEvent::PlayRejected);
    }

    /// Natural end of media: pause fires right before ended
    pub fn finish(&self) {
        {
            let mut state = self.0.borrow_mut();
            state.playing = false;
            state.ended = true;
        }
        self.fire(MediaEvent::Pause);
        self.fire(MediaEvent::Ended);
    }
}

struct FakeMedia(Rc<RefCell<FakeMediaState>>);

impl MediaElement for FakeMedia {
    fn set_source(&mut self, url: &str) {
        self.0.borrow_mut().url = url.to_string();
    }

    fn set_loop(&mut self, looping: bool) {
        self.0.borrow_mut().looping = looping;
    }

    fn play(&mut self) -> Result<()> {
        let mut state = self.0.borrow_mut();
        state.play_calls += 1;
        if state.refuse_play {
            return Err(PlaybackError::Media("NotAllowedError".to_string()));
        }
        state.playing = true;
        state.ended = false;
        Ok(())
    }

    fn pause(&mut self) {
        let mut state = self.0.borrow_mut();
        state.pause_calls += 1;
        state.playing = false;
    }

    fn set_current_time(&mut self, seconds: f64) {
        let mut state = self.0.borrow_mut();
        state.current_time = seconds;
        state.seeks.push(seconds);
    }

    fn is_ended(&self) -> bool {
        self.0.borrow().ended
    }

    fn add_event_listener(&mut self, kind: MediaEventKind, listener: MediaListener) -> ListenerId {
        let mut state = self.0.borrow_mut();
        state.next_id += 1;
        let id = state.next_id;
        state.listeners.insert(id, (kind, listener));
        ListenerId(id)
    }

    fn remove_event_listener(&mut self, id: ListenerId) {
        self.0.borrow_mut().listeners.remove(&id.0);
    }
}

/// Backend recording every element it creates
#[derive(Clone, Default)]
pub struct FakeBackend {
    created: Rc<RefCell<Vec<MediaHandle>>>,
    pub fail: Rc<RefCell<bool>>,
    pub refuse_play: Rc<RefCell<bool>>,
}

impl FakeBackend {
    pub fn created(&self) -> Vec<MediaHandle> {
        self.created.borrow().clone()
    }

    pub fn created_count(&self) -> usize {
        self.created.borrow().len()
    }

    /// Most recently created element
    pub fn last(&self) -> MediaHandle {
        self.created
            .borrow()
            .last()
            .cloned()
            .expect("no media element created")
    }
}

impl MediaBackend for FakeBackend {
    fn create_element(&mut self, episode: &Episode) -> Result<Box<dyn MediaElement>> {
        if *self.fail.borrow() {
            return Err(PlaybackError::MediaCreation {
                episode_id: episode.id.to_string(),
                message: "unsupported source".to_string(),
            });
        }

        let state = Rc::new(RefCell::new(FakeMediaState {
            refuse_play: *self.refuse_play.borrow(),
            ..Default::default()
        }));
        let mut media = FakeMedia(Rc::clone(&state));
        media.set_source(&episode.url);
        self.created.borrow_mut().push(MediaHandle(state));

        Ok(Box::new(media))
    }
}

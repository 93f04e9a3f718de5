//! `<audio>` element backend

use crate::error::{PlaybackError, Result};
use crate::media::{ListenerId, MediaBackend, MediaElement, MediaEvent, MediaEventKind, MediaListener};
use podcastr_core::Episode;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;

/// Listeners for `MediaEvent::PlayRejected`, fed from the play promise
type RejectionListeners = Rc<RefCell<Vec<(ListenerId, MediaListener)>>>;

/// Called after a DOM media event has been queued for the player
pub type Waker = Rc<dyn Fn()>;

/// Creates one detached `HtmlAudioElement` per mounted episode
pub struct WebAudioBackend {
    waker: Waker,
}

impl WebAudioBackend {
    /// Create a backend that calls `waker` after every media event
    pub fn new(waker: Waker) -> Self {
        Self { waker }
    }
}

impl MediaBackend for WebAudioBackend {
    fn create_element(&mut self, episode: &Episode) -> Result<Box<dyn MediaElement>> {
        let element = HtmlAudioElement::new_with_src(&episode.url).map_err(|e| {
            PlaybackError::MediaCreation {
                episode_id: episode.id.to_string(),
                message: js_error(&e),
            }
        })?;
        element.set_preload("metadata");

        Ok(Box::new(WebAudio {
            element,
            listeners: HashMap::new(),
            rejection_listeners: Rc::new(RefCell::new(Vec::new())),
            next_id: 0,
            waker: Rc::clone(&self.waker),
        }))
    }
}

struct WebAudio {
    element: HtmlAudioElement,
    listeners: HashMap<ListenerId, (&'static str, Closure<dyn FnMut()>)>,
    rejection_listeners: RejectionListeners,
    next_id: u64,
    waker: Waker,
}

impl MediaElement for WebAudio {
    fn set_source(&mut self, url: &str) {
        self.element.set_src(url);
    }

    fn set_loop(&mut self, looping: bool) {
        self.element.set_loop(looping);
    }

    fn play(&mut self) -> Result<()> {
        let promise = self
            .element
            .play()
            .map_err(|e| PlaybackError::Media(js_error(&e)))?;

        // Autoplay refusal rejects the promise and the element stays paused
        // without firing `pause`
        let listeners = Rc::clone(&self.rejection_listeners);
        let waker = Rc::clone(&self.waker);
        spawn_local(async move {
            if let Err(reason) = JsFuture::from(promise).await {
                debug!(reason = %js_error(&reason), "Play promise rejected");
                let mut listeners = listeners.borrow_mut();
                if listeners.is_empty() {
                    return;
                }
                for (_, listener) in listeners.iter_mut() {
                    listener(MediaEvent::PlayRejected);
                }
                drop(listeners);
                waker();
            }
        });
        Ok(())
    }

    fn pause(&mut self) {
        if let Err(e) = self.element.pause() {
            warn!(error = %js_error(&e), "Failed to pause audio element");
        }
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.element.set_current_time(seconds);
    }

    fn is_ended(&self) -> bool {
        self.element.ended()
    }

    fn add_event_listener(&mut self, kind: MediaEventKind, mut listener: MediaListener) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);

        let Some(dom_name) = kind.dom_name() else {
            self.rejection_listeners.borrow_mut().push((id, listener));
            return id;
        };

        let element = self.element.clone();
        let waker = Rc::clone(&self.waker);
        let closure = Closure::<dyn FnMut()>::new(move || {
            let event = match kind {
                MediaEventKind::LoadedMetadata => MediaEvent::LoadedMetadata,
                MediaEventKind::TimeUpdate => MediaEvent::TimeUpdate {
                    current_time: element.current_time(),
                },
                MediaEventKind::Ended => MediaEvent::Ended,
                MediaEventKind::Play => MediaEvent::Play,
                MediaEventKind::Pause => MediaEvent::Pause,
                MediaEventKind::PlayRejected => MediaEvent::PlayRejected,
            };
            listener(event);
            waker();
        });

        if let Err(e) = self
            .element
            .add_event_listener_with_callback(dom_name, closure.as_ref().unchecked_ref())
        {
            warn!(event = dom_name, error = %js_error(&e), "Failed to add listener");
        }

        self.listeners.insert(id, (dom_name, closure));
        id
    }

    fn remove_event_listener(&mut self, id: ListenerId) {
        if let Some((dom_name, closure)) = self.listeners.remove(&id) {
            self.element
                .remove_event_listener_with_callback(dom_name, closure.as_ref().unchecked_ref())
                .ok();
            return;
        }
        self.rejection_listeners
            .borrow_mut()
            .retain(|(listener_id, _)| *listener_id != id);
    }
}

impl Drop for WebAudio {
    fn drop(&mut self) {
        let ids: Vec<ListenerId> = self.listeners.keys().copied().collect();
        for id in ids {
            self.remove_event_listener(id);
        }
        self.rejection_listeners.borrow_mut().clear();
        // Stop fetching the old media
        self.element.remove_attribute("src").ok();
        self.element.load();
    }
}

fn js_error(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

//! WASM-compatible player wrapper

use super::backend::WebAudioBackend;
use crate::{Control, PlayerConfig, PlayerStore, PlayerView};
use js_sys::Function;
use podcastr_core::Episode;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::Once;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

struct PlayerInner {
    store: PlayerStore,
    view: PlayerView<WebAudioBackend>,
    on_change: Option<Function>,
}

impl PlayerInner {
    /// Run one update pass; returns the change callback and its argument
    /// when something visible changed
    fn tick(&mut self) -> Option<(Function, JsValue)> {
        let handled = self.view.update(&mut self.store);
        let events = self.store.drain_events();
        if handled == 0 && events.is_empty() {
            return None;
        }

        let callback = self.on_change.clone()?;
        let model = serde_wasm_bindgen::to_value(&self.view.render(&self.store)).ok()?;
        Some((callback, model))
    }
}

fn notify(change: Option<(Function, JsValue)>) {
    if let Some((callback, model)) = change {
        callback.call1(&JsValue::NULL, &model).ok();
    }
}

/// Run a deferred update, unless the player is gone or busy
fn tick_shared(inner: &Weak<RefCell<PlayerInner>>) {
    let Some(inner) = inner.upgrade() else {
        return;
    };
    let change = match inner.try_borrow_mut() {
        Ok(mut inner) => inner.tick(),
        Err(_) => return,
    };
    notify(change);
}

/// WASM-compatible player
///
/// Wraps the store and an `<audio>`-backed view with a JavaScript-friendly
/// API. Media events are applied on a microtask right after they fire.
#[wasm_bindgen]
pub struct WasmPlayer {
    inner: Rc<RefCell<PlayerInner>>,
}

#[wasm_bindgen]
impl WasmPlayer {
    /// Create an idle player
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        // Enable panic hooks for better error messages in console
        console_error_panic_hook::set_once();
        // Route tracing output to the browser console
        static TRACING: Once = Once::new();
        TRACING.call_once(tracing_wasm::set_as_global_default);

        let inner = Rc::new_cyclic(|weak: &Weak<RefCell<PlayerInner>>| {
            let weak = weak.clone();
            let waker: Rc<dyn Fn()> = Rc::new(move || {
                // Deferred so an element is never unmounted from inside its own listener
                let weak = weak.clone();
                let task = Closure::once_into_js(move || tick_shared(&weak));
                if let Some(window) = web_sys::window() {
                    window.queue_microtask(task.unchecked_ref());
                }
            });

            RefCell::new(PlayerInner {
                store: PlayerStore::new(PlayerConfig::default()),
                view: PlayerView::new(WebAudioBackend::new(waker)),
                on_change: None,
            })
        });

        Self { inner }
    }

    fn command(&self, f: impl FnOnce(&mut PlayerStore)) {
        let change = {
            let mut inner = self.inner.borrow_mut();
            f(&mut inner.store);
            inner.tick()
        };
        notify(change);
    }

    // ===== Commands =====

    /// Play a single episode
    pub fn play(&self, episode: JsValue) -> Result<(), JsValue> {
        let episode: Episode = parse(episode)?;
        self.command(|store| store.play(episode));
        Ok(())
    }

    /// Play a list starting at `index`
    #[wasm_bindgen(js_name = playList)]
    pub fn play_list(&self, list: JsValue, index: usize) -> Result<(), JsValue> {
        let list: Vec<Episode> = parse(list)?;
        if !list.is_empty() && index >= list.len() {
            return Err(JsValue::from_str(&format!(
                "Index {} out of range for {} episodes",
                index,
                list.len()
            )));
        }
        self.command(|store| store.play_list(list, index));
        Ok(())
    }

    #[wasm_bindgen(js_name = togglePlay)]
    pub fn toggle_play(&self) {
        self.command(PlayerStore::toggle_play);
    }

    #[wasm_bindgen(js_name = setPlayingState)]
    pub fn set_playing_state(&self, is_playing: bool) {
        self.command(|store| store.set_playing_state(is_playing));
    }

    #[wasm_bindgen(js_name = toggleLoop)]
    pub fn toggle_loop(&self) {
        self.command(PlayerStore::toggle_loop);
    }

    #[wasm_bindgen(js_name = toggleShuffle)]
    pub fn toggle_shuffle(&self) {
        self.command(PlayerStore::toggle_shuffle);
    }

    #[wasm_bindgen(js_name = playNext)]
    pub fn play_next(&self) {
        self.command(PlayerStore::play_next);
    }

    #[wasm_bindgen(js_name = playPrevious)]
    pub fn play_previous(&self) {
        self.command(PlayerStore::play_previous);
    }

    #[wasm_bindgen(js_name = clearPlayerState)]
    pub fn clear_player_state(&self) {
        self.command(PlayerStore::clear_player_state);
    }

    // ===== Player Controls =====

    /// Press a transport button ("shuffle" | "previous" | "playPause" | "next" | "loop")
    pub fn press(&self, control: &str) -> Result<bool, JsValue> {
        let control = match control {
            "shuffle" => Control::Shuffle,
            "previous" => Control::Previous,
            "playPause" => Control::PlayPause,
            "next" => Control::Next,
            "loop" => Control::Loop,
            _ => {
                return Err(JsValue::from_str(
                    "Invalid control. Use 'shuffle', 'previous', 'playPause', 'next' or 'loop'",
                ))
            }
        };

        let (applied, change) = {
            let mut inner = self.inner.borrow_mut();
            let PlayerInner { store, view, .. } = &mut *inner;
            let applied = view.press(control, store);
            (applied, inner.tick())
        };
        notify(change);
        Ok(applied)
    }

    /// Seek to `seconds` (seek bar input)
    pub fn seek(&self, seconds: f64) {
        let change = {
            let mut inner = self.inner.borrow_mut();
            inner.view.seek(seconds.max(0.0) as u64);
            let model = inner.view.render(&inner.store);
            inner
                .on_change
                .clone()
                .zip(serde_wasm_bindgen::to_value(&model).ok())
        };
        notify(change);
    }

    /// Apply pending media events and re-sync the element
    pub fn tick(&self) {
        tick_shared(&Rc::downgrade(&self.inner));
    }

    /// Current view model
    pub fn render(&self) -> JsValue {
        let inner = self.inner.borrow();
        serde_wasm_bindgen::to_value(&inner.view.render(&inner.store)).unwrap_or(JsValue::NULL)
    }

    /// Register the change callback (receives the view model)
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&self, callback: Function) {
        self.inner.borrow_mut().on_change = Some(callback);
    }

    // ===== State Queries =====

    #[wasm_bindgen(getter, js_name = episodeList)]
    pub fn episode_list(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.inner.borrow().store.episode_list())
            .unwrap_or(JsValue::NULL)
    }

    #[wasm_bindgen(getter, js_name = currentEpisodeIndex)]
    pub fn current_episode_index(&self) -> usize {
        self.inner.borrow().store.current_episode_index()
    }

    #[wasm_bindgen(getter, js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.inner.borrow().store.is_playing()
    }

    #[wasm_bindgen(getter, js_name = isLooping)]
    pub fn is_looping(&self) -> bool {
        self.inner.borrow().store.is_looping()
    }

    #[wasm_bindgen(getter, js_name = isShuffling)]
    pub fn is_shuffling(&self) -> bool {
        self.inner.borrow().store.is_shuffling()
    }

    #[wasm_bindgen(getter, js_name = hasNext)]
    pub fn has_next(&self) -> bool {
        self.inner.borrow().store.has_next()
    }

    #[wasm_bindgen(getter, js_name = hasPrevious)]
    pub fn has_previous(&self) -> bool {
        self.inner.borrow().store.has_previous()
    }
}

/// Default implementation
impl Default for WasmPlayer {
    fn default() -> Self {
        Self::new()
    }
}

fn parse<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse episodes: {}", e)))
}

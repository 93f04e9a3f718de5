//! WASM bindings for podcastr-playback
//!
//! Binds the player to a browser `<audio>` element and exposes the store's
//! command API to JavaScript.

#[cfg(feature = "wasm")]
pub mod backend;

#[cfg(feature = "wasm")]
pub mod player;

#[cfg(feature = "wasm")]
pub use backend::WebAudioBackend;

#[cfg(feature = "wasm")]
pub use player::WasmPlayer;

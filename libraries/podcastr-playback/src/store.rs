//! Player state store - single source of truth for what is playing
//!
//! Page components load playlists into the store; the player view observes
//! it and drives the media element. Commands are total: they never fail and
//! only ever transition state.

use crate::{
    events::PlayerEvent,
    shuffle::pick_random_index,
    types::{PlayerConfig, PlaylistState},
};
use podcastr_core::Episode;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Shared player state with its command set
///
/// Owned by the application shell and lent to views and pages; it outlives
/// page navigation.
pub struct PlayerStore {
    // State
    episodes: Vec<Episode>,
    current_index: usize,
    is_playing: bool,

    // Modes
    is_looping: bool,
    is_shuffling: bool,

    // Shuffle randomness
    rng: StdRng,

    // Event queue for view synchronization
    pending_events: Vec<PlayerEvent>,
}

impl PlayerStore {
    /// Create an idle store
    pub fn new(config: PlayerConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an idle store with a deterministic shuffle sequence
    pub fn with_seed(config: PlayerConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: PlayerConfig, rng: StdRng) -> Self {
        Self {
            episodes: Vec::new(),
            current_index: 0,
            is_playing: false,
            is_looping: config.looping,
            is_shuffling: config.shuffling,
            rng,
            pending_events: Vec::new(),
        }
    }

    // ===== Commands =====

    /// Replace the playlist with a single episode and start playing it
    pub fn play(&mut self, episode: Episode) {
        debug!(episode_id = %episode.id, "Playing single episode");
        self.load(vec![episode], 0);
    }

    /// Replace the playlist and start playing at `index`
    ///
    /// The caller guarantees `index < list.len()` for a non-empty list.
    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) {
        debug_assert!(
            list.is_empty() || index < list.len(),
            "play_list index {} out of range for {} episodes",
            index,
            list.len()
        );
        debug!(length = list.len(), index, "Playing list");
        self.load(list, index);
    }

    /// Flip the playing flag
    pub fn toggle_play(&mut self) {
        self.set_playing(!self.is_playing);
    }

    /// Set the playing flag directly
    ///
    /// Used when the media element itself reports play or pause.
    pub fn set_playing_state(&mut self, is_playing: bool) {
        self.set_playing(is_playing);
    }

    /// Flip loop mode
    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
        debug!(is_looping = self.is_looping, "Loop toggled");
        self.pending_events.push(PlayerEvent::LoopingChanged {
            is_looping: self.is_looping,
        });
    }

    /// Flip shuffle mode
    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
        debug!(is_shuffling = self.is_shuffling, "Shuffle toggled");
        self.pending_events.push(PlayerEvent::ShufflingChanged {
            is_shuffling: self.is_shuffling,
        });
    }

    /// Advance to the next episode
    ///
    /// Shuffling draws a random index (possibly the current one). Otherwise
    /// the index moves forward when a later episode exists.
    pub fn play_next(&mut self) {
        if self.is_shuffling {
            // Empty playlist: the index stays at 0
            let index = pick_random_index(&mut self.rng, self.episodes.len()).unwrap_or(0);
            debug!(index, "Shuffle picked next episode");
            self.move_to(index);
        } else if self.has_next() {
            self.move_to(self.current_index + 1);
        }
    }

    /// Step back to the previous episode, if any
    pub fn play_previous(&mut self) {
        if self.has_previous() {
            self.move_to(self.current_index - 1);
        }
    }

    /// Empty the playlist
    ///
    /// Playing and mode flags are left as they are.
    pub fn clear_player_state(&mut self) {
        debug!("Clearing player state");
        self.episodes.clear();
        self.current_index = 0;
        self.pending_events.push(PlayerEvent::Cleared);
    }

    // ===== State Queries =====

    /// Loaded playlist
    pub fn episode_list(&self) -> &[Episode] {
        &self.episodes
    }

    /// Index of the active episode (ignore while idle)
    pub fn current_episode_index(&self) -> usize {
        self.current_index
    }

    /// Active episode, `None` while idle
    pub fn current_episode(&self) -> Option<&Episode> {
        self.episodes.get(self.current_index)
    }

    /// No episode selected
    pub fn is_idle(&self) -> bool {
        self.episodes.is_empty()
    }

    /// Playback requested
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Loop mode enabled
    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    /// Shuffle mode enabled
    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    /// An earlier episode exists
    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    /// Shuffling, or a later episode exists
    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.current_index + 1 < self.episodes.len()
    }

    /// Copy of the shared state, derived flags included
    pub fn snapshot(&self) -> PlaylistState {
        PlaylistState {
            episodes: self.episodes.clone(),
            current_index: self.current_index,
            is_playing: self.is_playing,
            is_looping: self.is_looping,
            is_shuffling: self.is_shuffling,
            has_previous: self.has_previous(),
            has_next: self.has_next(),
        }
    }

    // ===== Events =====

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    fn load(&mut self, episodes: Vec<Episode>, index: usize) {
        self.episodes = episodes;
        self.current_index = index;
        self.pending_events.push(PlayerEvent::PlaylistChanged {
            length: self.episodes.len(),
            index,
        });
        self.set_playing(true);
    }

    fn move_to(&mut self, index: usize) {
        if index == self.current_index {
            return;
        }
        self.current_index = index;
        self.pending_events.push(PlayerEvent::IndexChanged { index });
    }

    fn set_playing(&mut self, is_playing: bool) {
        if self.is_playing == is_playing {
            return;
        }
        self.is_playing = is_playing;
        debug!(is_playing, "Playing state changed");
        self.pending_events
            .push(PlayerEvent::PlayingChanged { is_playing });
    }
}

impl Default for PlayerStore {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podcastr_core::EpisodeId;

    fn episode(id: &str) -> Episode {
        Episode {
            id: EpisodeId::new(id),
            title: format!("Episode {}", id),
            members: "Diego e Richard".to_string(),
            thumbnail: format!("https://example.com/{}.jpg", id),
            duration: 1800,
            url: format!("https://example.com/{}.m4a", id),
        }
    }

    fn abc() -> Vec<Episode> {
        vec![episode("a"), episode("b"), episode("c")]
    }

    #[test]
    fn starts_idle() {
        let store = PlayerStore::default();
        assert!(store.is_idle());
        assert_eq!(store.current_episode_index(), 0);
        assert!(!store.is_playing());
        assert!(!store.is_looping());
        assert!(!store.is_shuffling());
        assert!(!store.has_next());
        assert!(!store.has_previous());
        assert!(store.current_episode().is_none());
    }

    #[test]
    fn config_sets_initial_modes() {
        let store = PlayerStore::new(PlayerConfig {
            looping: true,
            shuffling: true,
        });
        assert!(store.is_looping());
        assert!(store.is_shuffling());
    }

    #[test]
    fn play_replaces_playlist_with_single_episode() {
        let mut store = PlayerStore::default();
        store.play_list(abc(), 2);

        store.play(episode("z"));

        assert_eq!(store.episode_list(), &[episode("z")]);
        assert_eq!(store.current_episode_index(), 0);
        assert!(store.is_playing());
    }

    #[test]
    fn play_and_single_item_play_list_are_equivalent() {
        let mut by_play = PlayerStore::default();
        by_play.play(episode("a"));

        let mut by_list = PlayerStore::default();
        by_list.play_list(vec![episode("a")], 0);

        assert_eq!(by_play.snapshot(), by_list.snapshot());
    }

    #[test]
    fn play_list_from_middle() {
        let mut store = PlayerStore::default();
        store.play_list(abc(), 1);

        assert_eq!(store.episode_list().len(), 3);
        assert_eq!(store.current_episode_index(), 1);
        assert_eq!(store.current_episode(), Some(&episode("b")));
        assert!(store.is_playing());
        assert!(store.has_next());
        assert!(store.has_previous());
    }

    #[test]
    fn toggle_play_flips_flag() {
        let mut store = PlayerStore::default();
        store.play(episode("a"));

        store.toggle_play();
        assert!(!store.is_playing());
        store.toggle_play();
        assert!(store.is_playing());
    }

    #[test]
    fn set_playing_state_is_idempotent() {
        let mut store = PlayerStore::default();
        store.set_playing_state(true);
        store.drain_events();

        store.set_playing_state(true);
        assert!(store.is_playing());
        assert!(!store.has_pending_events());
    }

    #[test]
    fn loop_and_shuffle_are_independent() {
        let mut store = PlayerStore::default();

        store.toggle_loop();
        assert!(store.is_looping());
        assert!(!store.is_shuffling());

        store.toggle_shuffle();
        assert!(store.is_looping());
        assert!(store.is_shuffling());

        store.toggle_loop();
        assert!(!store.is_looping());
        assert!(store.is_shuffling());
    }

    #[test]
    fn play_next_increments() {
        let mut store = PlayerStore::default();
        store.play_list(abc(), 0);

        store.play_next();
        assert_eq!(store.current_episode_index(), 1);
        store.play_next();
        assert_eq!(store.current_episode_index(), 2);
    }

    #[test]
    fn play_next_at_end_is_noop() {
        let mut store = PlayerStore::default();
        store.play_list(abc(), 2);
        let before = store.snapshot();
        store.drain_events();

        store.play_next();

        assert_eq!(store.snapshot(), before);
        assert!(!store.has_pending_events());
    }

    #[test]
    fn play_previous_at_start_is_noop() {
        let mut store = PlayerStore::default();
        store.play_list(abc(), 0);
        let before = store.snapshot();

        store.play_previous();

        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn play_previous_decrements() {
        let mut store = PlayerStore::default();
        store.play_list(abc(), 2);

        store.play_previous();
        assert_eq!(store.current_episode_index(), 1);
    }

    #[test]
    fn shuffle_always_has_next() {
        let mut store = PlayerStore::default();
        store.play_list(abc(), 2);
        assert!(!store.has_next());

        store.toggle_shuffle();
        assert!(store.has_next());
    }

    #[test]
    fn shuffle_next_stays_in_range() {
        let mut store = PlayerStore::with_seed(PlayerConfig::default(), 1234);
        let list: Vec<Episode> = (0..5).map(|i| episode(&i.to_string())).collect();
        store.play_list(list, 0);
        store.toggle_shuffle();

        for _ in 0..200 {
            store.play_next();
            assert!(store.current_episode_index() < 5);
        }
    }

    #[test]
    fn shuffle_next_on_empty_playlist_keeps_zero() {
        let mut store = PlayerStore::default();
        store.toggle_shuffle();

        store.play_next();

        assert_eq!(store.current_episode_index(), 0);
        assert!(store.is_idle());
    }

    #[test]
    fn seeded_stores_shuffle_identically() {
        let list: Vec<Episode> = (0..10).map(|i| episode(&i.to_string())).collect();
        let mut first = PlayerStore::with_seed(PlayerConfig::default(), 99);
        let mut second = PlayerStore::with_seed(PlayerConfig::default(), 99);

        for store in [&mut first, &mut second] {
            store.play_list(list.clone(), 0);
            store.toggle_shuffle();
        }

        for _ in 0..20 {
            first.play_next();
            second.play_next();
            assert_eq!(first.current_episode_index(), second.current_episode_index());
        }
    }

    #[test]
    fn clear_resets_playlist_only() {
        let mut store = PlayerStore::default();
        store.play_list(abc(), 2);
        store.toggle_loop();

        store.clear_player_state();

        assert!(store.is_idle());
        assert_eq!(store.current_episode_index(), 0);
        assert!(store.is_playing());
        assert!(store.is_looping());
    }

    #[test]
    fn commands_queue_events() {
        let mut store = PlayerStore::default();
        store.play_list(abc(), 1);
        store.play_next();
        store.toggle_play();
        store.clear_player_state();

        assert_eq!(
            store.drain_events(),
            vec![
                PlayerEvent::PlaylistChanged {
                    length: 3,
                    index: 1
                },
                PlayerEvent::PlayingChanged { is_playing: true },
                PlayerEvent::IndexChanged { index: 2 },
                PlayerEvent::PlayingChanged { is_playing: false },
                PlayerEvent::Cleared,
            ]
        );
        assert!(!store.has_pending_events());
    }
}

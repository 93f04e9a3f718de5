//! Shuffle selection
//!
//! Shuffle mode does not reorder the playlist: each "next" draws a fresh
//! index uniformly from the whole playlist. The current index may be drawn
//! again; there is no repeat avoidance.

use rand::Rng;

/// Pick the next index in shuffle mode
///
/// Returns `None` for an empty playlist.
pub(crate) fn pick_random_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    Some(rng.gen_range(0..len))
}

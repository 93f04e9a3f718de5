mod episode;
mod ids;

pub use episode::{Episode, EpisodeDetail};
pub use ids::EpisodeId;

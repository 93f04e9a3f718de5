/// Episode page API routes
use crate::{
    error::{Result, ServerError},
    pages,
    pages::{EpisodePage, EpisodePaths},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};
use podcastr_core::EpisodeId;

/// GET /api/episodes/paths
pub async fn paths(State(app_state): State<AppState>) -> Result<Json<EpisodePaths>> {
    let paths = app_state
        .paths_cache
        .get_or_generate("/episodes", || {
            pages::load_paths(app_state.source.as_ref(), &app_state.pages)
        })
        .await?;
    Ok(Json(paths))
}

/// GET /api/episodes/:id
pub async fn get_episode(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<EpisodePage>> {
    if id.trim().is_empty() {
        return Err(ServerError::BadRequest("Episode id is required".to_string()));
    }

    let episode_id = EpisodeId::new(id);
    let key = format!("/episodes/{}", episode_id);
    let page = app_state
        .episode_cache
        .get_or_generate(&key, || {
            pages::load_episode(app_state.source.as_ref(), &episode_id)
        })
        .await?;
    Ok(Json(page))
}

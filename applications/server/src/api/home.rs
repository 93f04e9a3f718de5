/// Home page API routes
use crate::{error::Result, pages, pages::HomePage, state::AppState};
use axum::{extract::State, Json};

/// GET /api/home
pub async fn home(State(app_state): State<AppState>) -> Result<Json<HomePage>> {
    let page = app_state
        .home_cache
        .get_or_generate("/", || {
            pages::load_home(app_state.source.as_ref(), &app_state.pages)
        })
        .await?;
    Ok(Json(page))
}

/// API route modules
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

pub mod episodes;
pub mod health;
pub mod home;

/// Build the application router with every route under `/api`
pub fn router(app_state: AppState) -> Router {
    let routes = Router::new()
        .route("/health", get(health::health))
        .route("/home", get(home::home))
        .route("/episodes/paths", get(episodes::paths))
        .route("/episodes/:id", get(episodes::get_episode));

    Router::new()
        .nest("/api", routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

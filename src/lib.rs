pub mod config;
pub mod models;
pub mod routes;

use axum::{routing::get, Router};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
}

async fn health() -> &'static str {
    "ok"
}

/// Build the full Axum application router.
///
/// Assembles the tracking routes, the health check, request tracing,
/// and shared state.
pub fn build_app(config: AppConfig) -> Router {
    let state = AppState { config };

    Router::new()
        .route("/health", get(health))
        .merge(routes::track::router())
        .layer(
            TraceLayer::new_for_http()
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

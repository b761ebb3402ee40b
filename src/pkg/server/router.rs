use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::{Router, routing::get};

use super::handlers;
use super::handlers::probes::{healthz, livez};
use super::handlers::ui::home;
use super::state::AppState;

/// Upload cap; oversized bodies are rejected before the handler runs.
const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

pub fn build_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/api/analyze-cv", post(handlers::analyze::analyze))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

pub mod health;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /health      liveness probe
/// /analyze     frame-sequence analysis (POST)
/// ```
///
/// `/analyze` is mounted at the root (not under an API version prefix) --
/// the path is part of the client contract.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .route("/analyze", post(handlers::analyze::analyze))
}

//! Common routes: API root, health, readiness, version.

use crate::handlers::{api_root, health, ready, version};
use crate::state::AppState;
use axum::{routing::get, Router};

/// GET /api, /health, /ready, /version, /info.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/api", get(api_root))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .route("/info", get(version))
        .with_state(state)
}

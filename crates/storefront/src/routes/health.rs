//! Health check handlers.

use axum::{extract::State, http::StatusCode};

use crate::state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 200 once the catalog has loaded, 503 while it is loading or if
/// the load failed. Never triggers a fetch.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    if state.catalog().state().is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

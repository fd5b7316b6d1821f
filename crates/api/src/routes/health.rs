use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the film document exists and parses.
    pub store_readable: bool,
    /// GET requests served since startup, this one included.
    pub get_requests: u64,
}

/// GET /health -- returns service and store health.
///
/// An unreadable store is reported as `degraded`, not as an error: the
/// service still answers with an empty collection in that state.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_readable = state.store.is_readable().await;

    let status = if store_readable { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        store_readable,
        get_requests: state.get_requests.get(),
    })
}

/// Mount health check routes (intended for root level).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

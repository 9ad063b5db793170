use axum::{extract::State, Json};
use tracing::debug;

use crate::models::HealthStatus;
use crate::state::AppState;

/// GET /health
/// Liveness probe. The version is looked up per request, never cached.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthStatus> {
    let version = state.env.app_version();
    debug!(%version, "Health check requested");
    Json(HealthStatus::healthy(version))
}

use axum::{extract::State, Json};
use tracing::debug;

use crate::models::HelloMessage;
use crate::state::AppState;

/// GET /api/hello
pub async fn hello_handler(State(state): State<AppState>) -> Json<HelloMessage> {
    let environment = state.env.environment();
    debug!(%environment, "Hello requested");
    Json(HelloMessage::greeting(environment))
}

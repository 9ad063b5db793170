pub mod health;
pub mod hello;

use axum::{http::Uri, routing::get, Router};

use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> Result<(), AppError> {
    Err(AppError::NotFound(format!("No route for {}", uri.path())))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/hello", get(hello::hello_handler))
        .fallback(not_found)
        .with_state(state)
}

use std::sync::Arc;

use crate::config::{EnvSource, ProcessEnv};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Request-time lookup for `APP_VERSION` / `ENVIRONMENT`. Default: live process env.
    pub env: Arc<dyn EnvSource>,
}

impl AppState {
    pub fn new(env: Arc<dyn EnvSource>) -> Self {
        Self { env }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(ProcessEnv))
    }
}

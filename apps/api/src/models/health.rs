use serde::{Deserialize, Serialize};

/// Body returned by `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

impl HealthStatus {
    pub const HEALTHY: &'static str = "healthy";

    pub fn healthy(version: impl Into<String>) -> Self {
        Self {
            status: Self::HEALTHY.to_string(),
            version: version.into(),
        }
    }
}

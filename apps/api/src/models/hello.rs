use serde::{Deserialize, Serialize};

pub const GREETING: &str = "Hello from Eloquent AI!";

/// Body returned by `GET /api/hello`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloMessage {
    pub message: String,
    pub environment: String,
}

impl HelloMessage {
    pub fn greeting(environment: impl Into<String>) -> Self {
        Self {
            message: GREETING.to_string(),
            environment: environment.into(),
        }
    }
}

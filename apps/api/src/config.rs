use std::collections::HashMap;

use anyhow::{Context, Result};

/// Environment variable holding the version reported by `/health`.
pub const APP_VERSION_VAR: &str = "APP_VERSION";
/// Environment variable holding the environment name reported by `/api/hello`.
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

pub const DEFAULT_APP_VERSION: &str = "1.0.0";
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Startup configuration loaded from environment variables.
/// Everything here is read once; request-time values go through [`EnvSource`].
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Source of request-time configuration values.
///
/// Carried in `AppState` as `Arc<dyn EnvSource>` so handlers never cache a
/// value across requests. `ProcessEnv` is the production backend.
pub trait EnvSource: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// Returns the value for `key`, or `default` when it is unset or empty.
    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| default.to_string())
    }

    fn app_version(&self) -> String {
        self.get_or(APP_VERSION_VAR, DEFAULT_APP_VERSION)
    }

    fn environment(&self) -> String {
        self.get_or(ENVIRONMENT_VAR, DEFAULT_ENVIRONMENT)
    }
}

/// Reads the live process environment on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        // Non-UTF-8 values are treated as unset.
        std::env::var(key).ok()
    }
}

/// Fixed key/value backend, used where the process environment must not be touched.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    vars: HashMap<String, String>,
}

impl StaticEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

impl EnvSource for StaticEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let env = StaticEnv::new();
        assert_eq!(env.app_version(), DEFAULT_APP_VERSION);
        assert_eq!(env.environment(), DEFAULT_ENVIRONMENT);
    }

    #[test]
    fn test_override_wins() {
        let env = StaticEnv::new()
            .with(APP_VERSION_VAR, "2.0.0")
            .with(ENVIRONMENT_VAR, "test");
        assert_eq!(env.app_version(), "2.0.0");
        assert_eq!(env.environment(), "test");
    }

    #[test]
    fn test_empty_value_falls_back() {
        let env = StaticEnv::new().with(APP_VERSION_VAR, "");
        assert_eq!(env.app_version(), DEFAULT_APP_VERSION);
    }

    #[test]
    fn test_unrelated_keys_ignored() {
        let env = StaticEnv::new().with("APP_VERSION_OLD", "0.9.0");
        assert_eq!(env.app_version(), DEFAULT_APP_VERSION);
    }

    #[test]
    fn test_server_address() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 9000,
            rust_log: "info".to_string(),
        };
        assert_eq!(config.server_address(), "127.0.0.1:9000");
    }
}

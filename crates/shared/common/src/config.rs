//! Shared configuration structures.

use std::env;

use serde::{Deserialize, Serialize};

/// Environment variable holding the service name
pub const SERVICE_NAME_VAR: &str = "USER_SERVICE_NAME";

/// Environment variable holding the log level
pub const LOG_LEVEL_VAR: &str = "USER_SERVICE_LOG_LEVEL";

/// Base service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Log level
    pub log_level: String,
}

impl ServiceConfig {
    /// Load configuration from `.env` (if present) and environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve configuration against an arbitrary key lookup.
    ///
    /// `USER_SERVICE_LOG_LEVEL` wins over `RUST_LOG`. Values that are unset,
    /// empty or whitespace-only fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            service_name: non_empty(SERVICE_NAME_VAR).unwrap_or(defaults.service_name),
            log_level: non_empty(LOG_LEVEL_VAR)
                .or_else(|| non_empty("RUST_LOG"))
                .unwrap_or(defaults.log_level),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "user-service".to_string(),
            log_level: "info".to_string(),
        }
    }
}

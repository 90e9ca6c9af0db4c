//! Endpoint configuration.

use std::env;

/// Environment variable holding the prediction service base URL.
pub const API_URL_ENV: &str = "FLOWER_API_URL";

/// Where the prediction endpoint lives. The only external configuration the
/// app consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Resolves the base URL from the environment, falling back to the given
    /// default (typically baked in at compile time). A trailing slash is
    /// stripped so endpoint paths can be appended uniformly.
    pub fn from_env_or(default: &str) -> Self {
        let raw = env::var(API_URL_ENV).unwrap_or_else(|_| default.to_string());
        Self {
            base_url: raw.trim_end_matches('/').to_string(),
        }
    }
}

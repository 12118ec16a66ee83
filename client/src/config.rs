//! Client configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/v1";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL without a trailing slash.
    pub api_url: String,
    /// Overall per-request timeout enforced by the HTTP client.
    pub request_timeout: Duration,
    /// Page size used by list views.
    pub page_limit: u32,
}

impl ClientConfig {
    #[must_use]
    pub fn new(api_url: &str) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_owned(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            page_limit: models::params::DEFAULT_LIMIT,
        }
    }

    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `CMS_API_URL`: default `http://localhost:5000/api/v1`
    /// - `CMS_API_TIMEOUT_SECS`: default 15
    /// - `CMS_PAGE_LIMIT`: default 10, capped at 100
    #[must_use]
    pub fn from_env() -> Self {
        let api_url = std::env::var("CMS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_owned());
        let mut config = Self::new(&api_url);
        config.request_timeout =
            Duration::from_secs(env_parse("CMS_API_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS));
        config.page_limit =
            env_parse("CMS_PAGE_LIMIT", models::params::DEFAULT_LIMIT).clamp(1, models::params::MAX_LIMIT);
        config
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

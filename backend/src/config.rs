//! Search API settings, read from the environment on every call.

use std::time::Duration;

pub const DEFAULT_SEARCH_API_URL: &str = "https://backend.dev.scoap3.org";
pub const DEFAULT_SEARCH_API_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchApiConfig {
    /// Scheme and host of the search service, without the API path.
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for SearchApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SEARCH_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_SEARCH_API_TIMEOUT_SECS),
        }
    }
}

impl SearchApiConfig {
    /// `SEARCH_API_URL` and `SEARCH_API_TIMEOUT_SECS`, with defaults.
    pub fn from_env() -> Self {
        let base_url = std::env::var("SEARCH_API_URL").unwrap_or(DEFAULT_SEARCH_API_URL.to_string());
        let timeout = timeout_from(std::env::var("SEARCH_API_TIMEOUT_SECS").ok().as_deref());
        Self { base_url, timeout }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Self::default() }
    }
}

fn timeout_from(value: Option<&str>) -> Duration {
    let secs = value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_SEARCH_API_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_falls_back_on_garbage() {
        assert_eq!(timeout_from(None), Duration::from_secs(30));
        assert_eq!(timeout_from(Some("abc")), Duration::from_secs(30));
        assert_eq!(timeout_from(Some("0")), Duration::from_secs(30));
        assert_eq!(timeout_from(Some(" 5 ")), Duration::from_secs(5));
    }

    #[test]
    fn base_url_override_keeps_default_timeout() {
        let config = SearchApiConfig::with_base_url("http://127.0.0.1:9000");
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.timeout, SearchApiConfig::default().timeout);
    }
}

//! Client configuration.

use std::time::Duration;

/// Base URL used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default request timeout, matching the web front-end's 30 s budget.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL, stored without a trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Environment variable for the API base URL.
    pub const API_URL_ENV: &'static str = "CASETRACE_API_URL";

    pub fn new(base_url: impl Into<String>) -> Self {
        let mut url = base_url.into();
        while url.ends_with('/') {
            url.pop();
        }
        ClientConfig {
            base_url: url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read the base URL from `CASETRACE_API_URL`, falling back to
    /// [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        match std::env::var(Self::API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let normalized = Self::new(base_url);
        self.base_url = normalized.base_url;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ClientConfig::new("http://api.example.org/");
        assert_eq!(config.base_url, "http://api.example.org");
    }

    #[test]
    fn default_points_at_localhost() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn builder_overrides() {
        let config = ClientConfig::default()
            .with_base_url("http://10.0.0.2:9000///")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.base_url, "http://10.0.0.2:9000");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}

/// Base URL used when nothing else is configured (the backend's dev server).
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Environment variable overriding the backend base URL.
pub const BASE_URL_ENV: &str = "CALORIE_TRACKER_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Scheme, host and port of the backend, without a trailing slash
    pub base_url: String,
}

impl TrackerConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Read the base URL from `CALORIE_TRACKER_URL`, falling back to the default.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

//! Client configuration, environment-overridable.

use std::time::Duration;

/// Order submission gets its own generous deadline; list/detail fetches use
/// reqwest's defaults.
pub const DEFAULT_SUBMIT_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub submit_timeout: Duration,
    pub page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
            submit_timeout: DEFAULT_SUBMIT_TIMEOUT,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load from `SALES_API_URL`, `SALES_SUBMIT_TIMEOUT_SECS`, and
    /// `SALES_PAGE_SIZE`; unset or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("SALES_API_URL").unwrap_or(defaults.base_url),
            submit_timeout: std::env::var("SALES_SUBMIT_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.submit_timeout),
            page_size: std::env::var("SALES_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.page_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = ApiConfig::default();
        assert_eq!(config.submit_timeout, Duration::from_secs(60));
        assert_eq!(config.page_size, 20);
    }
}

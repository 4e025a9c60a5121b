//! Runtime settings for the catalog client

use reqwest::Url;
use std::time::Duration;
use thiserror::Error;

/// Default catalog service location
pub const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors that can occur while validating settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Timeout must be at least one second")]
    ZeroTimeout,
}

/// Settings used to build a catalog client
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Root URL of the catalog service
    pub base_url: Url,
    /// Image URL substituted for shows without artwork
    pub placeholder_image: String,
    /// Per-request timeout
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            placeholder_image: crate::catalog::MISSING_IMAGE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Settings {
    /// Builds validated settings from raw user input
    ///
    /// # Arguments
    ///
    /// * `base_url` - Catalog root, must be an absolute http(s) URL
    /// * `placeholder_image` - Image URL for shows without artwork
    /// * `timeout_secs` - Per-request timeout, at least one second
    pub fn new(
        base_url: &str,
        placeholder_image: &str,
        timeout_secs: u64,
    ) -> Result<Self, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: reason.to_string(),
        };

        let url = Url::parse(base_url).map_err(|e| invalid(&e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        if url.cannot_be_a_base() {
            return Err(invalid("URL cannot be used as a base"));
        }

        if timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Self {
            base_url: url,
            placeholder_image: placeholder_image.to_string(),
            timeout: Duration::from_secs(timeout_secs),
            ..Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.base_url.as_str(), "https://api.tvmaze.com/");
        assert_eq!(settings.placeholder_image, "https://tinyurl.com/tv-missing");
        assert_eq!(settings.timeout, Duration::from_secs(30));
        assert!(settings.user_agent.starts_with("show_scout/"));
    }

    #[test]
    fn test_new_validates_input() {
        let settings = Settings::new("http://localhost:8080/tv", "none.png", 5).unwrap();
        assert_eq!(settings.base_url.as_str(), "http://localhost:8080/tv");
        assert_eq!(settings.timeout, Duration::from_secs(5));

        assert!(matches!(
            Settings::new("ftp://example.org", "x", 5),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            Settings::new("not a url", "x", 5),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            Settings::new(DEFAULT_BASE_URL, "x", 0),
            Err(ConfigError::ZeroTimeout)
        ));
    }
}

// web_app/config.rs - Server configuration from the environment
//
// Read once at startup, after `dotenv` has loaded `.env`.

use std::env;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("API_BASE_URL must be an http(s) URL, got {0:?}")]
    BaseUrl(String),

    #[error("API_TIMEOUT_SECS must be a positive integer, got {0:?}")]
    Timeout(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Backend root, always ending in `/`
    pub api_base_url: String,
    pub api_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_timeout: Duration::from_secs(DEFAULT_API_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            env::var("API_BASE_URL").ok().as_deref(),
            env::var("API_TIMEOUT_SECS").ok().as_deref(),
        )
    }

    /// Builds a config from raw values; `None` takes the default.
    pub fn from_values(base_url: Option<&str>, timeout: Option<&str>) -> Result<Self, ConfigError> {
        let api_base_url = match base_url.map(str::trim).filter(|s| !s.is_empty()) {
            Some(url) => normalize_base_url(url)?,
            None => DEFAULT_API_BASE_URL.to_string(),
        };

        let api_timeout = match timeout.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::Timeout(raw.to_string())),
            },
            None => Duration::from_secs(DEFAULT_API_TIMEOUT_SECS),
        };

        Ok(AppConfig {
            api_base_url,
            api_timeout,
        })
    }

    /// Root of the versioned REST API
    pub fn api_root(&self) -> String {
        format!("{}api/v1/", self.api_base_url)
    }
}

fn normalize_base_url(url: &str) -> Result<String, ConfigError> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::BaseUrl(url.to_string()));
    }
    if url.ends_with('/') {
        Ok(url.to_string())
    } else {
        Ok(format!("{}/", url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_root(), "http://localhost:8000/api/v1/");
    }

    #[test]
    fn test_trailing_slash_added() {
        let config = AppConfig::from_values(Some("https://api.example.com"), Some("5")).unwrap();
        assert_eq!(config.api_base_url, "https://api.example.com/");
        assert_eq!(config.api_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_bad_values_rejected() {
        assert_eq!(
            AppConfig::from_values(Some("localhost:8000"), None),
            Err(ConfigError::BaseUrl("localhost:8000".into()))
        );
        assert_eq!(
            AppConfig::from_values(None, Some("0")),
            Err(ConfigError::Timeout("0".into()))
        );
        assert!(AppConfig::from_values(None, Some("soon")).is_err());
    }
}

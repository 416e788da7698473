//! Configuration module

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_EMAIL_MODEL_PATH, DEFAULT_LOG_LEVEL, DEFAULT_MODEL_TIMEOUT_MS, DEFAULT_URL_MODEL_PATH,
    ENV_EMAIL_MODEL, ENV_EMAIL_MODEL_SHA256, ENV_LOG, ENV_MODEL_TIMEOUT_MS, ENV_URL_MODEL,
    ENV_URL_MODEL_SHA256,
};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL classifier artifact
    pub url_model_path: PathBuf,

    /// Email classifier artifact
    pub email_model_path: PathBuf,

    /// Expected SHA-256 of the URL artifact (hex), if pinned
    pub url_model_sha256: Option<String>,

    /// Expected SHA-256 of the email artifact (hex), if pinned
    pub email_model_sha256: Option<String>,

    /// Timeout around a single classifier invocation
    pub model_timeout: Duration,

    /// env_logger filter
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url_model_path: PathBuf::from(DEFAULT_URL_MODEL_PATH),
            email_model_path: PathBuf::from(DEFAULT_EMAIL_MODEL_PATH),
            url_model_sha256: None,
            email_model_sha256: None,
            model_timeout: Duration::from_millis(DEFAULT_MODEL_TIMEOUT_MS),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `.env` (if present) and environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            url_model_path: non_empty(ENV_URL_MODEL)
                .map(PathBuf::from)
                .unwrap_or(defaults.url_model_path),

            email_model_path: non_empty(ENV_EMAIL_MODEL)
                .map(PathBuf::from)
                .unwrap_or(defaults.email_model_path),

            url_model_sha256: non_empty(ENV_URL_MODEL_SHA256),

            email_model_sha256: non_empty(ENV_EMAIL_MODEL_SHA256),

            model_timeout: non_empty(ENV_MODEL_TIMEOUT_MS)
                .and_then(|ms| ms.trim().parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.model_timeout),

            log_level: non_empty(ENV_LOG).unwrap_or(defaults.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.url_model_path, PathBuf::from(DEFAULT_URL_MODEL_PATH));
        assert_eq!(config.email_model_path, PathBuf::from(DEFAULT_EMAIL_MODEL_PATH));
        assert_eq!(config.model_timeout, Duration::from_millis(DEFAULT_MODEL_TIMEOUT_MS));
        assert!(config.url_model_sha256.is_none());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_overrides_from_lookup() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_URL_MODEL, "/models/url.json"),
            (ENV_EMAIL_MODEL_SHA256, "abc123"),
            (ENV_MODEL_TIMEOUT_MS, "750"),
            (ENV_LOG, "debug"),
        ]);
        let config = Config::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.url_model_path, PathBuf::from("/models/url.json"));
        assert_eq!(config.email_model_sha256.as_deref(), Some("abc123"));
        assert_eq!(config.model_timeout, Duration::from_millis(750));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_unparseable_timeout_falls_back_to_default() {
        let config = Config::from_lookup(|k| {
            (k == ENV_MODEL_TIMEOUT_MS).then(|| "soon".to_string())
        });
        assert_eq!(config.model_timeout, Duration::from_millis(DEFAULT_MODEL_TIMEOUT_MS));
    }
}

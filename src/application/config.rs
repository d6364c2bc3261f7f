use crate::constants::{
    API_TIMEOUT_ENV, API_URL_ENV, CREDENTIALS_PATH_ENV, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS,
};
use crate::utils::config::{get_env_non_empty, get_env_or_default};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the task client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Credential storage configuration
    pub storage: StorageConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the API, without a trailing slash
    pub base_url: String,
    /// Timeout in seconds for each HTTP round trip, `0` for none
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Configuration for credential persistence
pub struct StorageConfig {
    /// JSON file holding the credentials. `None` keeps them in memory only.
    pub credentials_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from the environment and an optional `.env` file
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url = get_env_non_empty(API_URL_ENV).unwrap_or_else(|| {
            debug!("{} not set, using {}", API_URL_ENV, DEFAULT_API_URL);
            DEFAULT_API_URL.to_string()
        });

        Config {
            rest_api: RestApiConfig {
                base_url: normalize_base_url(&base_url),
                timeout: get_env_or_default(API_TIMEOUT_ENV, DEFAULT_TIMEOUT_SECS),
            },
            storage: StorageConfig {
                credentials_path: get_env_non_empty(CREDENTIALS_PATH_ENV).map(PathBuf::from),
            },
        }
    }

    /// Builds a configuration for the given base URL with default timeout and in-memory credentials
    pub fn with_base_url(base_url: &str) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: normalize_base_url(base_url),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            storage: StorageConfig::default(),
        }
    }

    /// Resolves a request path against the base URL
    ///
    /// Absolute URLs are returned unchanged. Relative paths are joined with
    /// exactly one `/` between the base URL and the path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        join_url(&self.rest_api.base_url, path)
    }
}

/// Strips trailing slashes from a base URL
#[must_use]
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

/// Joins `path` to `base_url` unless `path` is already an absolute URL
#[must_use]
pub fn join_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

//! Configuration module
//!
//! Client settings are read from `VIDPIPE_*` environment variables (a `.env`
//! file is honored). Everything except the API key has a default.

use serde::Deserialize;

use crate::error::AppError;

const DEFAULT_API_URL: &str = "http://localhost:3000";
const DEFAULT_API_VERSION: &str = "v0";
const REQUEST_TIMEOUT_SECS: u64 = 300;
const UPLOAD_CHUNK_SIZE: usize = 256 * 1024;

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_request_timeout_secs() -> u64 {
    REQUEST_TIMEOUT_SECS
}

fn default_upload_chunk_size() -> usize {
    UPLOAD_CHUNK_SIZE
}

/// Settings for talking to the project API.
#[derive(Clone, Debug, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_upload_chunk_size")]
    pub upload_chunk_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: None,
            api_version: default_api_version(),
            request_timeout_secs: default_request_timeout_secs(),
            upload_chunk_size: default_upload_chunk_size(),
        }
    }
}

impl ClientConfig {
    /// Load from the process environment, after applying `.env` if present.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load from an explicit set of variables (used by tests).
    pub fn from_vars<I>(vars: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: ClientConfig = envy::prefixed("VIDPIPE_").from_iter(vars)?;
        tracing::debug!(
            api_url = %config.api_url,
            api_version = %config.api_version,
            has_api_key = config.api_key.is_some(),
            "Loaded client configuration"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "VIDPIPE_API_URL must start with http:// or https:// (got '{}')",
                self.api_url
            )));
        }

        if let Some(key) = &self.api_key {
            if key.trim().is_empty() {
                return Err(AppError::Config("VIDPIPE_API_KEY is empty".to_string()));
            }
        }

        if self.request_timeout_secs == 0 {
            return Err(AppError::Config(
                "VIDPIPE_REQUEST_TIMEOUT_SECS must be greater than 0".to_string(),
            ));
        }

        if self.upload_chunk_size == 0 {
            return Err(AppError::Config(
                "VIDPIPE_UPLOAD_CHUNK_SIZE must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// API key, or a config error naming the missing variable.
    pub fn require_api_key(&self) -> Result<&str, AppError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| AppError::Config("Missing API key. Set VIDPIPE_API_KEY".to_string()))
    }

    /// Path prefix for versioned API routes (e.g. "/api/v0").
    pub fn api_prefix(&self) -> String {
        format!("/api/{}", self.api_version)
    }
}

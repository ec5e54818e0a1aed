//! HTTP client for the project API.
//!
//! Provides a minimal client with configurable auth (Bearer token or X-API-Key),
//! generic GET/POST helpers and project methods. [`ApiClient`] implements
//! [`ProjectStore`](vidpipe_core::ProjectStore) so the orchestrator can drive it.

pub mod api;
pub mod store;

use anyhow::{Context, Result};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use vidpipe_core::ClientConfig;

/// Authentication strategy for the API.
#[derive(Clone, Debug)]
pub enum Auth {
    /// `Authorization: Bearer {token}`
    Bearer(String),
    /// `X-API-Key: {key}`
    XApiKey(String),
}

/// HTTP client for the project API with configurable auth.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_prefix: String,
    auth: Auth,
    chunk_size: usize,
}

impl ApiClient {
    pub fn new(base_url: String, auth: Auth) -> Result<Self> {
        Self::from_parts(base_url, auth, &ClientConfig::default())
    }

    /// Create a client from loaded configuration. Uses X-API-Key auth.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let api_key = config.require_api_key()?.to_string();
        Self::from_parts(config.api_url.clone(), Auth::XApiKey(api_key), config)
    }

    /// Create a client from `VIDPIPE_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let config = ClientConfig::from_env()?;
        Self::from_config(&config)
    }

    fn from_parts(base_url: String, auth: Auth, config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_prefix: config.api_prefix(),
            auth,
            chunk_size: config.upload_chunk_size,
        })
    }

    /// Override the upload chunk size (progress granularity).
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Versioned route, e.g. `path("/projects")` → "/api/v0/projects".
    pub fn path(&self, path: &str) -> String {
        format!("{}{}", self.api_prefix, path)
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth {
            Auth::Bearer(token) => request.header("Authorization", format!("Bearer {}", token)),
            Auth::XApiKey(key) => request.header("X-API-Key", key.as_str()),
        }
    }

    /// Send the request, then turn non-success statuses into errors.
    ///
    /// Transport failures mention "network" and 401/403 responses mention
    /// "authentication", so store errors classify correctly downstream.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response> {
        let response = self
            .apply_auth(request)
            .send()
            .await
            .context("network request failed")?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            tracing::warn!(status = %status, "API rejected credentials");
            return Err(anyhow::anyhow!(
                "authentication failed with status {}: {}",
                status,
                error_text
            ));
        }

        tracing::warn!(status = %status, body = %error_text, "API request failed");
        Err(anyhow::anyhow!(
            "API request failed with status {}: {}",
            status,
            error_text
        ))
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T> {
        response
            .json()
            .await
            .context("Failed to parse response as JSON")
    }

    /// GET request with optional query parameters. Deserializes JSON response.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.build_url(path);
        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = self.send(request).await?;
        Self::parse(response).await
    }

    /// POST JSON body and deserialize response.
    pub async fn post_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.build_url(path);
        let response = self.send(self.client.post(&url).json(body)).await?;
        Self::parse(response).await
    }

    /// POST multipart form and deserialize response.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        let url = self.build_url(path);
        let response = self.send(self.client.post(&url).multipart(form)).await?;
        Self::parse(response).await
    }

    /// Raw client for custom requests. Caller must apply auth via build_url and headers.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

pub use vidpipe_core::models::{Project, ProjectListResponse, Video};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_requires_api_key() {
        let config = ClientConfig::default();
        assert!(ApiClient::from_config(&config).is_err());
    }

    #[test]
    fn test_paths_and_urls() {
        let config = ClientConfig {
            api_url: "https://projects.example.com/".to_string(),
            api_key: Some("key".to_string()),
            api_version: "v1".to_string(),
            ..Default::default()
        };
        let client = ApiClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "https://projects.example.com");
        assert_eq!(client.path("/projects"), "/api/v1/projects");
        assert_eq!(
            client.build_url(&client.path("/projects")),
            "https://projects.example.com/api/v1/projects"
        );
    }

    #[test]
    fn test_chunk_size_never_zero() {
        let client = ApiClient::new(
            "http://localhost:3000".to_string(),
            Auth::Bearer("t".to_string()),
        )
        .unwrap()
        .with_chunk_size(0);
        assert_eq!(client.chunk_size(), 1);
    }
}

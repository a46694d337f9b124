//! Shared HTTP client for the OpenRouter API

use super::error::{CallError, OpenRouterError};
use crate::config::FileConfig;
use deliberation_domain::{EmbeddingModel, GenerationModel};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Everything the adapter needs, resolved once at startup
#[derive(Clone)]
pub struct OpenRouterConfig {
    api_key: String,
    pub base_url: String,
    pub referer: String,
    pub title: String,
    pub generation_model: GenerationModel,
    pub embedding_model: EmbeddingModel,
    pub temperature: f32,
    pub generation_timeout: Duration,
    pub embedding_timeout: Duration,
}

impl OpenRouterConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        let defaults = FileConfig::default();
        Self {
            api_key: api_key.into(),
            base_url: defaults.provider.base_url,
            referer: defaults.provider.referer,
            title: defaults.provider.title,
            generation_model: GenerationModel::default(),
            embedding_model: EmbeddingModel::default(),
            temperature: defaults.models.temperature,
            generation_timeout: defaults.timeouts.generation(),
            embedding_timeout: defaults.timeouts.embedding(),
        }
    }

    /// Build from a loaded configuration, resolving the API key
    pub fn from_file_config(config: &FileConfig) -> Result<Self, OpenRouterError> {
        let api_key =
            config
                .provider
                .resolve_api_key()
                .ok_or_else(|| OpenRouterError::MissingApiKey {
                    env: config.provider.api_key_env.clone(),
                })?;

        Ok(Self {
            api_key,
            base_url: config.provider.base_url.clone(),
            referer: config.provider.referer.clone(),
            title: config.provider.title.clone(),
            generation_model: config.models.generation_model(),
            embedding_model: config.models.embedding_model(),
            temperature: config.models.temperature,
            generation_timeout: config.timeouts.generation(),
            embedding_timeout: config.timeouts.embedding(),
        })
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeouts(mut self, generation: Duration, embedding: Duration) -> Self {
        self.generation_timeout = generation;
        self.embedding_timeout = embedding;
        self
    }
}

impl std::fmt::Debug for OpenRouterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouterConfig")
            .field("base_url", &self.base_url)
            .field("generation_model", &self.generation_model)
            .field("embedding_model", &self.embedding_model)
            .field("temperature", &self.temperature)
            .field("generation_timeout", &self.generation_timeout)
            .field("embedding_timeout", &self.embedding_timeout)
            .finish_non_exhaustive()
    }
}

/// HTTP client with the provider headers preset
pub struct OpenRouterClient {
    http: Client,
    config: OpenRouterConfig,
}

impl OpenRouterClient {
    pub fn new(config: OpenRouterConfig) -> Result<Self, OpenRouterError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| OpenRouterError::InvalidHeader {
                header: "Authorization",
            })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            HeaderName::from_static("http-referer"),
            HeaderValue::from_str(&config.referer).map_err(|_| OpenRouterError::InvalidHeader {
                header: "HTTP-Referer",
            })?,
        );
        headers.insert(
            HeaderName::from_static("x-title"),
            HeaderValue::from_str(&config.title)
                .map_err(|_| OpenRouterError::InvalidHeader { header: "X-Title" })?,
        );

        let http = Client::builder().default_headers(headers).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &OpenRouterConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// POST `body` as JSON to `path`, bounded by `timeout`
    pub(crate) async fn post_json<B, R>(
        &self,
        path: &str,
        body: &B,
        timeout: Duration,
    ) -> Result<R, CallError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(%url, timeout_secs = timeout.as_secs(), "POST");

        let response = self
            .http
            .post(&url)
            .timeout(timeout)
            .json(body)
            .send()
            .await
            .map_err(|e| Self::map_send_error(e, timeout))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CallError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<R>().await.map_err(|e| {
            if e.is_timeout() {
                CallError::Timeout(timeout.as_secs())
            } else {
                CallError::Decode(e.to_string())
            }
        })
    }

    fn map_send_error(e: reqwest::Error, timeout: Duration) -> CallError {
        if e.is_timeout() {
            CallError::Timeout(timeout.as_secs())
        } else if e.is_connect() {
            CallError::Connection(format!("Connection failed: {}", e))
        } else {
            CallError::Connection(e.to_string())
        }
    }
}

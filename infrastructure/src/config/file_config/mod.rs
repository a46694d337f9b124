//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod deliberation;
mod logging;
mod models;
mod output;
mod provider;
mod server;
mod timeouts;

pub use deliberation::FileDeliberationConfig;
pub use logging::FileLoggingConfig;
pub use models::FileModelsConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use provider::{DEFAULT_BASE_URL, FileProviderConfig};
pub use server::FileServerConfig;
pub use timeouts::FileTimeoutsConfig;

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use thiserror::Error;

/// Highest sampling temperature the provider accepts
pub const MAX_TEMPERATURE: f32 = 2.0;

/// Errors detected when validating a loaded configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    #[error("timeouts.{0} cannot be 0")]
    ZeroTimeout(&'static str),

    #[error("deliberation.run_count cannot be 0")]
    ZeroRunCount,

    #[error("deliberation.max_concurrent_runs cannot be 0")]
    ZeroConcurrency,

    #[error("models.{0}: model name cannot be empty")]
    EmptyModelName(&'static str),

    #[error("models.temperature must be between 0 and {MAX_TEMPERATURE}, got {0}")]
    TemperatureOutOfRange(f32),

    #[error("provider.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("server.bind is not a socket address: {0}")]
    InvalidBind(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// OpenRouter-compatible endpoint and credentials
    pub provider: FileProviderConfig,
    /// Generation and embedding models
    pub models: FileModelsConfig,
    /// Run count and concurrency
    pub deliberation: FileDeliberationConfig,
    /// Per-call timeouts
    pub timeouts: FileTimeoutsConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// HTTP front-end settings
    pub server: FileServerConfig,
    /// Transcript settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, returning the first problem found
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.timeouts.generation_seconds == 0 {
            return Err(ConfigValidationError::ZeroTimeout("generation_seconds"));
        }
        if self.timeouts.embedding_seconds == 0 {
            return Err(ConfigValidationError::ZeroTimeout("embedding_seconds"));
        }

        if self.deliberation.run_count == 0 {
            return Err(ConfigValidationError::ZeroRunCount);
        }
        if self.deliberation.max_concurrent_runs == 0 {
            return Err(ConfigValidationError::ZeroConcurrency);
        }

        if self.models.generation.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName("generation"));
        }
        if self.models.embedding.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName("embedding"));
        }
        let temperature = self.models.temperature;
        if !(0.0..=MAX_TEMPERATURE).contains(&temperature) {
            return Err(ConfigValidationError::TemperatureOutOfRange(temperature));
        }

        if self.provider.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }
        if self.server.bind.parse::<SocketAddr>().is_err() {
            return Err(ConfigValidationError::InvalidBind(self.server.bind.clone()));
        }

        Ok(())
    }

    /// Copy safe to print: a direct API key is masked
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.provider.api_key.is_some() {
            config.provider.api_key = Some("<redacted>".to_string());
        }
        config
    }
}

//! Error types for the OpenRouter adapter

use deliberation_application::{EmbeddingError, GenerationError};
use thiserror::Error;

/// Errors that can occur while setting up the OpenRouter adapter
#[derive(Error, Debug)]
pub enum OpenRouterError {
    #[error("No API key configured: set {env} or provider.api_key")]
    MissingApiKey { env: String },

    #[error("Invalid header value for {header}")]
    InvalidHeader { header: &'static str },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}

/// Failure of a single HTTP call, before it is mapped onto a port error
#[derive(Error, Debug, Clone, PartialEq)]
pub(crate) enum CallError {
    #[error("status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("timed out after {0}s")]
    Timeout(u64),

    #[error("{0}")]
    Connection(String),

    #[error("{0}")]
    Decode(String),
}

impl From<CallError> for GenerationError {
    fn from(e: CallError) -> Self {
        match e {
            CallError::Status { status, body } => GenerationError::Status { status, body },
            CallError::Timeout(secs) => GenerationError::Timeout(secs),
            CallError::Connection(msg) => GenerationError::ConnectionError(msg),
            CallError::Decode(msg) => GenerationError::InvalidResponse(msg),
        }
    }
}

impl From<CallError> for EmbeddingError {
    fn from(e: CallError) -> Self {
        match e {
            CallError::Status { status, body } => EmbeddingError::Status { status, body },
            CallError::Timeout(secs) => EmbeddingError::Timeout(secs),
            CallError::Connection(msg) => EmbeddingError::ConnectionError(msg),
            CallError::Decode(msg) => EmbeddingError::InvalidResponse(msg),
        }
    }
}

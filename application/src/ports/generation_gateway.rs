//! Generation Gateway port
//!
//! Defines the interface for the external text-generation service.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during a generation call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("Generation request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Generation request timed out after {0}s")]
    Timeout(u64),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Invalid generation response: {0}")]
    InvalidResponse(String),
}

/// Gateway for text generation
///
/// Submit a prompt, receive generated text or fail. Implementations
/// (adapters) live in the infrastructure layer and must bound every call
/// with a timeout.
#[async_trait]
pub trait GenerationGateway: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

//! Embedding Gateway port

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during an embedding call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EmbeddingError {
    #[error("Embedding request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Embedding request timed out after {0}s")]
    Timeout(u64),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Invalid embedding response: {0}")]
    InvalidResponse(String),
}

/// Gateway for text embeddings
///
/// One batched call per set of texts. The returned vectors must be in
/// input order: `embed(texts)[i]` is the embedding of `texts[i]`.
#[async_trait]
pub trait EmbeddingGateway: Send + Sync {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError>;
}

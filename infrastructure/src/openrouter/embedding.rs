//! OpenRouter embeddings as an [`EmbeddingGateway`]

use super::client::OpenRouterClient;
use super::protocol::{EmbeddingRequest, EmbeddingResponse};
use async_trait::async_trait;
use deliberation_application::{EmbeddingError, EmbeddingGateway};
use std::sync::Arc;
use tracing::debug;

pub struct OpenRouterEmbeddingGateway {
    client: Arc<OpenRouterClient>,
}

impl OpenRouterEmbeddingGateway {
    pub fn new(client: Arc<OpenRouterClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EmbeddingGateway for OpenRouterEmbeddingGateway {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let config = self.client.config();
        let request = EmbeddingRequest {
            model: config.embedding_model.as_str(),
            input: texts,
        };

        let response: EmbeddingResponse = self
            .client
            .post_json("embeddings", &request, config.embedding_timeout)
            .await?;

        let vectors = response.into_vectors();
        if vectors.len() != texts.len() {
            return Err(EmbeddingError::InvalidResponse(format!(
                "expected {} embeddings, got {}",
                texts.len(),
                vectors.len()
            )));
        }

        debug!(
            model = %config.embedding_model,
            count = vectors.len(),
            dimensions = vectors.first().map(Vec::len).unwrap_or(0),
            "embeddings received"
        );
        Ok(vectors)
    }
}

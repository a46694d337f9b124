//! OpenRouter chat completions as a [`GenerationGateway`]

use super::client::OpenRouterClient;
use super::protocol::{ChatMessage, ChatRequest, ChatResponse};
use async_trait::async_trait;
use deliberation_application::{GenerationError, GenerationGateway};
use std::sync::Arc;
use tracing::debug;

pub struct OpenRouterGenerationGateway {
    client: Arc<OpenRouterClient>,
}

impl OpenRouterGenerationGateway {
    pub fn new(client: Arc<OpenRouterClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GenerationGateway for OpenRouterGenerationGateway {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let config = self.client.config();
        let request = ChatRequest {
            model: config.generation_model.as_str(),
            messages: vec![ChatMessage::user(prompt)],
            temperature: config.temperature,
        };

        let response: ChatResponse = self
            .client
            .post_json("chat/completions", &request, config.generation_timeout)
            .await?;

        let text = response.into_text().ok_or_else(|| {
            GenerationError::InvalidResponse("response contained no message content".to_string())
        })?;

        debug!(model = %config.generation_model, chars = text.len(), "generation complete");
        Ok(text)
    }
}

//! OpenRouter adapter
//!
//! Implements both capability ports against an OpenAI-compatible API:
//!
//! - [`OpenRouterGenerationGateway`]: `POST {base_url}/chat/completions`
//! - [`OpenRouterEmbeddingGateway`]: `POST {base_url}/embeddings`
//!
//! Both share one [`OpenRouterClient`], which carries the bearer token and
//! the `HTTP-Referer` / `X-Title` headers. Every call has its own timeout.

pub mod client;
pub mod embedding;
pub mod error;
pub mod generation;
mod protocol;

pub use client::{OpenRouterClient, OpenRouterConfig};
pub use embedding::OpenRouterEmbeddingGateway;
pub use error::OpenRouterError;
pub use generation::OpenRouterGenerationGateway;

use std::sync::Arc;

/// Build both gateways over one shared client
pub fn build_gateways(
    config: OpenRouterConfig,
) -> Result<(OpenRouterGenerationGateway, OpenRouterEmbeddingGateway), OpenRouterError> {
    let client = Arc::new(OpenRouterClient::new(config)?);
    Ok((
        OpenRouterGenerationGateway::new(Arc::clone(&client)),
        OpenRouterEmbeddingGateway::new(client),
    ))
}

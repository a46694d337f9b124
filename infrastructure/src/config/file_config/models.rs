//! Model configuration from TOML (`[models]` section)

use deliberation_domain::{EmbeddingModel, GenerationModel};
use serde::{Deserialize, Serialize};

/// Model selection and sampling
///
/// # Example
///
/// ```toml
/// [models]
/// generation = "deepseek/deepseek-chat"
/// embedding = "openai/text-embedding-3-small"
/// temperature = 0.7
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Model used by every agent, the judge, the synthesizer and the follow-up
    pub generation: String,
    /// Model used to embed final answers
    pub embedding: String,
    /// Sampling temperature for generation calls
    pub temperature: f32,
}

impl Default for FileModelsConfig {
    fn default() -> Self {
        Self {
            generation: GenerationModel::default().to_string(),
            embedding: EmbeddingModel::default().to_string(),
            temperature: 0.7,
        }
    }
}

impl FileModelsConfig {
    pub fn generation_model(&self) -> GenerationModel {
        GenerationModel::from_name(self.generation.trim())
    }

    pub fn embedding_model(&self) -> EmbeddingModel {
        EmbeddingModel::from_name(self.embedding.trim())
    }
}

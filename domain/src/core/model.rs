//! Model value objects for the generation and embedding services

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Text-generation models reachable through the OpenRouter API (Value Object)
///
/// Any OpenRouter model id is accepted; ids without a dedicated variant are
/// kept as [`GenerationModel::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GenerationModel {
    DeepSeekChat,
    Llama32_3bFree,
    Gpt4oMini,
    ClaudeSonnet45,
    Gemini25Flash,
    Custom(String),
}

impl GenerationModel {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            GenerationModel::DeepSeekChat => "deepseek/deepseek-chat",
            GenerationModel::Llama32_3bFree => "meta-llama/llama-3.2-3b-instruct:free",
            GenerationModel::Gpt4oMini => "openai/gpt-4o-mini",
            GenerationModel::ClaudeSonnet45 => "anthropic/claude-sonnet-4.5",
            GenerationModel::Gemini25Flash => "google/gemini-2.5-flash",
            GenerationModel::Custom(s) => s,
        }
    }

    /// Resolve a model id, falling back to [`GenerationModel::Custom`]
    pub fn from_name(s: &str) -> Self {
        match s {
            "deepseek/deepseek-chat" => GenerationModel::DeepSeekChat,
            "meta-llama/llama-3.2-3b-instruct:free" => GenerationModel::Llama32_3bFree,
            "openai/gpt-4o-mini" => GenerationModel::Gpt4oMini,
            "anthropic/claude-sonnet-4.5" => GenerationModel::ClaudeSonnet45,
            "google/gemini-2.5-flash" => GenerationModel::Gemini25Flash,
            other => GenerationModel::Custom(other.to_string()),
        }
    }

    /// Check if this is a free-tier model (rate limited upstream)
    pub fn is_free_tier(&self) -> bool {
        self.as_str().ends_with(":free")
    }
}

impl Default for GenerationModel {
    /// Returns the default model (DeepSeek Chat)
    fn default() -> Self {
        GenerationModel::DeepSeekChat
    }
}

/// Embedding models used to compare final answers (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EmbeddingModel {
    TextEmbedding3Small,
    TextEmbedding3Large,
    Custom(String),
}

impl EmbeddingModel {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            EmbeddingModel::TextEmbedding3Small => "openai/text-embedding-3-small",
            EmbeddingModel::TextEmbedding3Large => "openai/text-embedding-3-large",
            EmbeddingModel::Custom(s) => s,
        }
    }

    /// Resolve a model id, falling back to [`EmbeddingModel::Custom`]
    pub fn from_name(s: &str) -> Self {
        match s {
            "openai/text-embedding-3-small" => EmbeddingModel::TextEmbedding3Small,
            "openai/text-embedding-3-large" => EmbeddingModel::TextEmbedding3Large,
            other => EmbeddingModel::Custom(other.to_string()),
        }
    }
}

impl Default for EmbeddingModel {
    fn default() -> Self {
        EmbeddingModel::TextEmbedding3Small
    }
}

macro_rules! impl_model_traits {
    ($ty:ty) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from_name(s))
            }
        }

        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Ok(Self::from_name(&s))
            }
        }
    };
}

impl_model_traits!(GenerationModel);
impl_model_traits!(EmbeddingModel);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_model_known_ids() {
        for model in [
            GenerationModel::DeepSeekChat,
            GenerationModel::Llama32_3bFree,
            GenerationModel::Gpt4oMini,
            GenerationModel::ClaudeSonnet45,
            GenerationModel::Gemini25Flash,
        ] {
            assert_eq!(GenerationModel::from_name(model.as_str()), model);
        }
    }

    #[test]
    fn test_custom_generation_model() {
        let model: GenerationModel = "mistralai/mistral-large".parse().unwrap();
        assert_eq!(
            model,
            GenerationModel::Custom("mistralai/mistral-large".to_string())
        );
        assert_eq!(model.to_string(), "mistralai/mistral-large");
    }

    #[test]
    fn test_free_tier_detection() {
        assert!(GenerationModel::Llama32_3bFree.is_free_tier());
        assert!(!GenerationModel::DeepSeekChat.is_free_tier());
    }

    #[test]
    fn test_model_defaults() {
        assert_eq!(GenerationModel::default(), GenerationModel::DeepSeekChat);
        assert_eq!(
            EmbeddingModel::default().as_str(),
            "openai/text-embedding-3-small"
        );
    }

    #[test]
    fn test_embedding_model_serde() {
        let json = serde_json::to_string(&EmbeddingModel::TextEmbedding3Large).unwrap();
        assert_eq!(json, "\"openai/text-embedding-3-large\"");
        let parsed: EmbeddingModel = serde_json::from_str("\"acme/embed-v2\"").unwrap();
        assert_eq!(parsed, EmbeddingModel::Custom("acme/embed-v2".to_string()));
    }
}

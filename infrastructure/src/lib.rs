//! Infrastructure layer for deliberation-ai
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the OpenRouter HTTP gateways, configuration
//! file loading, and the JSONL transcript logger.

pub mod config;
pub mod logging;
pub mod openrouter;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileDeliberationConfig, FileLoggingConfig,
    FileModelsConfig, FileOutputConfig, FileOutputFormat, FileProviderConfig, FileServerConfig,
    FileTimeoutsConfig,
};
pub use logging::JsonlTranscriptLogger;
pub use openrouter::{
    OpenRouterClient, OpenRouterConfig, OpenRouterEmbeddingGateway, OpenRouterError,
    OpenRouterGenerationGateway, build_gateways,
};

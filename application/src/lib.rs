//! Application layer for deliberation-ai
//!
//! This crate contains use cases, agents, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod agents;
pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use agents::{Judge, SimilarityScorer, StanceAgent, Synthesizer};
pub use config::DeliberationParams;
pub use ports::{
    embedding_gateway::{EmbeddingError, EmbeddingGateway},
    generation_gateway::{GenerationError, GenerationGateway},
    progress::{NoProgress, PipelineStage, ProgressNotifier},
    transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger},
};
pub use use_cases::run_deliberation::{
    RunDeliberationError, RunDeliberationInput, RunDeliberationUseCase,
};

//! Domain layer for deliberation-ai
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Deliberation
//!
//! A question is argued from three fixed stances (pro, con, alternative),
//! a judge picks a winner, and a synthesizer writes one final answer. That
//! pipeline is one **run**.
//!
//! ## Confidence
//!
//! Generation is non-deterministic, so the run is repeated. The mean
//! pairwise cosine similarity of the final answers' embeddings is
//! classified into a [`ConfidenceLevel`]. A single run is, by policy,
//! fully confident.

pub mod config;
pub mod core;
pub mod deliberation;
pub mod prompt;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{
    error::DomainError,
    model::{EmbeddingModel, GenerationModel},
    question::Question,
};
pub use deliberation::{
    Argument, ConfidenceLevel, DeliberationReport, DeliberationResult, ErrorRecord, RawAgents,
    Run, SimilarityScore, Stance, StanceArguments, StanceScores, StructuredVerdict, Verdict,
    VerdictForm, cosine_similarity, mean_pairwise_similarity, parse_verdict,
};
pub use prompt::PromptTemplate;

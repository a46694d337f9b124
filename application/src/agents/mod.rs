//! Deliberation agents
//!
//! Each agent wraps a gateway with one fixed prompt template. Agents hold
//! no state beyond the gateway handle and never retry: a gateway failure
//! is returned as-is.

pub mod judge;
pub mod similarity_scorer;
pub mod stance_agent;
pub mod synthesizer;

pub use judge::Judge;
pub use similarity_scorer::SimilarityScorer;
pub use stance_agent::StanceAgent;
pub use synthesizer::Synthesizer;

//! Deliberation domain
//!
//! Core concepts for answering a question through argued positions and
//! estimating how stable the answer is.
//!
//! # Flow
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Run (repeated N times)                                       │
//! ├──────────────────────────────────────────────────────────────┤
//! │   Pro ─┐                                                      │
//! │   Con ─┼──▶ Judge (Verdict) ──▶ Synthesizer (final answer)    │
//! │   Alt ─┘                                                      │
//! └──────────────────────────────────────────────────────────────┘
//!                            │ N final answers
//!                            ▼
//!          mean pairwise cosine similarity (embeddings)
//!                            │
//!                            ▼
//!            ConfidenceLevel: high / medium / low
//!                            │ low && N >= 2
//!                            ▼
//!                 "what would change" follow-up
//! ```

pub mod confidence;
pub mod report;
pub mod run;
pub mod similarity;
pub mod stance;
pub mod verdict;

pub use confidence::{ConfidenceLevel, HIGH_CONFIDENCE_THRESHOLD, MEDIUM_CONFIDENCE_THRESHOLD};
pub use report::{DeliberationReport, ErrorRecord, RawAgents};
pub use run::{DeliberationResult, Run};
pub use similarity::{SimilarityScore, cosine_similarity, mean_pairwise_similarity};
pub use stance::{Argument, Stance, StanceArguments};
pub use verdict::{StanceScores, StructuredVerdict, Verdict, VerdictForm, parse_verdict};

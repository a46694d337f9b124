//! Boundary records: the flat response and the error envelope.
//!
//! These are the shapes a caller sees, whatever the front-end (CLI or
//! HTTP). Field names are part of the public contract.

use super::confidence::ConfidenceLevel;
use super::run::DeliberationResult;
use serde::{Deserialize, Serialize};

/// Stance texts of the primary run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAgents {
    pub pro: String,
    pub con: String,
    pub alternative: String,
}

/// Flat response record of a deliberation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliberationReport {
    pub question: String,
    pub final_answer: String,
    pub judge_decision: String,
    pub confidence: ConfidenceLevel,
    pub similarity: f64,
    pub runs: usize,
    pub raw_agents: RawAgents,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub what_would_change: Option<String>,
}

impl From<&DeliberationResult> for DeliberationReport {
    fn from(result: &DeliberationResult) -> Self {
        let primary = result.primary();
        Self {
            question: result.question.content().to_string(),
            final_answer: primary.final_answer.clone(),
            judge_decision: primary.verdict.raw().to_string(),
            confidence: result.confidence,
            similarity: result.similarity.value(),
            runs: result.run_count(),
            raw_agents: RawAgents {
                pro: primary.arguments.pro.content.clone(),
                con: primary.arguments.con.content.clone(),
                alternative: primary.arguments.alternative.content.clone(),
            },
            what_would_change: result.what_would_change.clone(),
        }
    }
}

/// Error envelope returned instead of a report when a deliberation fails
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// Human-readable message
    pub error: String,
    /// Diagnostic trace: the error and its causes, one per line
    pub traceback: String,
}

impl ErrorRecord {
    pub fn new(error: impl Into<String>, traceback: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            traceback: traceback.into(),
        }
    }

    /// Build a record from an error and its `source()` chain
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut trace = vec![format!("Error: {}", err)];
        let mut source = err.source();
        while let Some(cause) = source {
            trace.push(format!("Caused by: {}", cause));
            source = cause.source();
        }
        Self::new(err.to_string(), trace.join("\n"))
    }
}

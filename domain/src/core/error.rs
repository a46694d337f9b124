//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Invalid run count: {0} (at least one run is required)")]
    InvalidRunCount(usize),

    #[error("Embedding dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
}

impl DomainError {
    /// Check if this error was caused by malformed caller input
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidQuestion(_) | DomainError::InvalidRunCount(_)
        )
    }
}

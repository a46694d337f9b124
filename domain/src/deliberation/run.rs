//! Deliberation entities: runs and the aggregated result.

use super::confidence::ConfidenceLevel;
use super::similarity::SimilarityScore;
use super::stance::StanceArguments;
use super::verdict::Verdict;
use crate::core::error::DomainError;
use crate::core::question::Question;
use serde::{Deserialize, Serialize};

/// One complete pass of stance generation → judgment → synthesis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// Logical run number (1-indexed), independent of completion order
    pub index: usize,
    pub arguments: StanceArguments,
    pub verdict: Verdict,
    pub final_answer: String,
}

impl Run {
    pub fn new(
        index: usize,
        arguments: StanceArguments,
        verdict: Verdict,
        final_answer: impl Into<String>,
    ) -> Self {
        Self {
            index,
            arguments,
            verdict,
            final_answer: final_answer.into(),
        }
    }
}

/// A finished deliberation: every run plus the derived confidence
///
/// Runs are kept sorted by [`Run::index`]; the first run is the
/// representative ("primary") output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliberationResult {
    pub question: Question,
    runs: Vec<Run>,
    pub similarity: SimilarityScore,
    pub confidence: ConfidenceLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub what_would_change: Option<String>,
}

impl DeliberationResult {
    /// Assemble a result, ordering runs by their logical index
    ///
    /// Fails with [`DomainError::InvalidRunCount`] if `runs` is empty.
    pub fn new(
        question: Question,
        mut runs: Vec<Run>,
        similarity: SimilarityScore,
        what_would_change: Option<String>,
    ) -> Result<Self, DomainError> {
        if runs.is_empty() {
            return Err(DomainError::InvalidRunCount(0));
        }
        runs.sort_by_key(|r| r.index);
        Ok(Self {
            question,
            runs,
            similarity,
            confidence: ConfidenceLevel::classify(similarity.value()),
            what_would_change,
        })
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// The canonical run (run 1)
    pub fn primary(&self) -> &Run {
        &self.runs[0]
    }

    /// Final answers in logical run order
    pub fn final_answers(&self) -> Vec<&str> {
        self.runs.iter().map(|r| r.final_answer.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(index: usize, answer: &str) -> Run {
        Run::new(
            index,
            StanceArguments::new("p", "c", "a"),
            Verdict::parse("Winner: Pro"),
            answer,
        )
    }

    #[test]
    fn test_runs_sorted_by_index() {
        let result = DeliberationResult::new(
            Question::try_new("q?").unwrap(),
            vec![run(3, "third"), run(1, "first"), run(2, "second")],
            SimilarityScore::new(0.95),
            None,
        )
        .unwrap();
        assert_eq!(result.final_answers(), vec!["first", "second", "third"]);
        assert_eq!(result.primary().index, 1);
        assert_eq!(result.run_count(), 3);
    }

    #[test]
    fn test_confidence_follows_similarity() {
        let result = DeliberationResult::new(
            Question::try_new("q?").unwrap(),
            vec![run(1, "a"), run(2, "b")],
            SimilarityScore::new(0.75),
            None,
        )
        .unwrap();
        assert_eq!(result.confidence, ConfidenceLevel::Medium);
    }

    #[test]
    fn test_empty_runs_rejected() {
        let err = DeliberationResult::new(
            Question::try_new("q?").unwrap(),
            vec![],
            SimilarityScore::SINGLE_SAMPLE,
            None,
        )
        .unwrap_err();
        assert_eq!(err, DomainError::InvalidRunCount(0));
    }
}

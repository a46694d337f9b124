//! Deliberation parameters: use case run control.
//!
//! [`DeliberationParams`] groups the static parameters that control how
//! many pipeline runs a deliberation performs and how many may be in
//! flight at once. These are application-layer concerns, not domain policy.

use deliberation_domain::DomainError;
use serde::{Deserialize, Serialize};

/// Default number of runs (the reference three-pass configuration)
pub const DEFAULT_RUN_COUNT: usize = 3;

/// Run-count and concurrency parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliberationParams {
    /// Number of full pipeline runs (N ≥ 1).
    pub run_count: usize,
    /// Maximum runs executing at the same time. 1 runs them sequentially.
    pub max_concurrent_runs: usize,
}

impl Default for DeliberationParams {
    fn default() -> Self {
        Self {
            run_count: DEFAULT_RUN_COUNT,
            max_concurrent_runs: 1,
        }
    }
}

impl DeliberationParams {
    /// A single-run deliberation: no agreement check, always high confidence
    pub fn single_run() -> Self {
        Self::default().with_run_count(1)
    }

    // ==================== Builder Methods ====================

    pub fn with_run_count(mut self, run_count: usize) -> Self {
        self.run_count = run_count;
        self
    }

    pub fn with_max_concurrent_runs(mut self, max: usize) -> Self {
        self.max_concurrent_runs = max;
        self
    }

    /// Reject parameters no deliberation can satisfy
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.run_count == 0 {
            return Err(DomainError::InvalidRunCount(self.run_count));
        }
        Ok(())
    }

    /// Concurrency actually used: never zero, never more than the run count
    pub fn effective_concurrency(&self) -> usize {
        self.max_concurrent_runs.clamp(1, self.run_count.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = DeliberationParams::default();
        assert_eq!(params.run_count, 3);
        assert_eq!(params.max_concurrent_runs, 1);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_zero_runs_rejected() {
        let err = DeliberationParams::default()
            .with_run_count(0)
            .validate()
            .unwrap_err();
        assert_eq!(err, DomainError::InvalidRunCount(0));
        assert!(err.is_malformed_input());
    }

    #[test]
    fn test_effective_concurrency_bounds() {
        let params = DeliberationParams::default().with_max_concurrent_runs(0);
        assert_eq!(params.effective_concurrency(), 1);

        let params = DeliberationParams::default()
            .with_run_count(2)
            .with_max_concurrent_runs(8);
        assert_eq!(params.effective_concurrency(), 2);
    }

    #[test]
    fn test_single_run() {
        assert_eq!(DeliberationParams::single_run().run_count, 1);
    }
}

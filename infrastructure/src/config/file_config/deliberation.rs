//! Deliberation configuration from TOML (`[deliberation]` section)

use deliberation_application::DeliberationParams;
use serde::{Deserialize, Serialize};

/// Raw deliberation configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDeliberationConfig {
    /// Number of full pipeline runs per question
    pub run_count: usize,
    /// Runs allowed in flight at once (1 = sequential)
    pub max_concurrent_runs: usize,
}

impl Default for FileDeliberationConfig {
    fn default() -> Self {
        let params = DeliberationParams::default();
        Self {
            run_count: params.run_count,
            max_concurrent_runs: params.max_concurrent_runs,
        }
    }
}

impl FileDeliberationConfig {
    pub fn to_params(&self) -> DeliberationParams {
        DeliberationParams::default()
            .with_run_count(self.run_count)
            .with_max_concurrent_runs(self.max_concurrent_runs)
    }
}

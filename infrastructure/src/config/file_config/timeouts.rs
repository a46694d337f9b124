//! Timeout configuration from TOML (`[timeouts]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Per-call timeouts for the external service, in seconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTimeoutsConfig {
    pub generation_seconds: u64,
    pub embedding_seconds: u64,
}

impl Default for FileTimeoutsConfig {
    fn default() -> Self {
        Self {
            generation_seconds: 120,
            embedding_seconds: 30,
        }
    }
}

impl FileTimeoutsConfig {
    pub fn generation(&self) -> Duration {
        Duration::from_secs(self.generation_seconds)
    }

    pub fn embedding(&self) -> Duration {
        Duration::from_secs(self.embedding_seconds)
    }
}

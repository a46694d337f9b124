//! Request and response bodies

use serde::{Deserialize, Serialize};

/// Fixed health acknowledgment
pub const HEALTH_STATUS: &str = "Deliberation AI running";

/// Body of `POST /debate`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DebateRequest {
    pub question: String,
}

/// Body of the health probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn running() -> Self {
        Self {
            status: HEALTH_STATUS.to_string(),
        }
    }
}

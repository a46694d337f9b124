//! Confidence classification from cross-run agreement

use serde::{Deserialize, Serialize};

/// Similarity at or above which the confidence is high
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.90;
/// Similarity at or above which the confidence is at least medium
pub const MEDIUM_CONFIDENCE_THRESHOLD: f64 = 0.70;

/// Discrete confidence label derived from a similarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    /// Classify a similarity score
    ///
    /// | similarity | level |
    /// |------------|-------|
    /// | `>= 0.90` | high |
    /// | `0.70 ..< 0.90` | medium |
    /// | `< 0.70` | low |
    ///
    /// ```
    /// use deliberation_domain::ConfidenceLevel;
    ///
    /// assert_eq!(ConfidenceLevel::classify(0.9), ConfidenceLevel::High);
    /// assert_eq!(ConfidenceLevel::classify(0.75), ConfidenceLevel::Medium);
    /// assert_eq!(ConfidenceLevel::classify(0.1), ConfidenceLevel::Low);
    /// ```
    pub fn classify(similarity: f64) -> Self {
        if similarity >= HIGH_CONFIDENCE_THRESHOLD {
            ConfidenceLevel::High
        } else if similarity >= MEDIUM_CONFIDENCE_THRESHOLD {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "high",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::Low => "low",
        }
    }

    /// One-line explanation shown next to the label
    pub fn description(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "Repeated runs reached semantically consistent answers.",
            ConfidenceLevel::Medium => "Repeated runs mostly agree but differ in emphasis.",
            ConfidenceLevel::Low => "Repeated runs reached noticeably different answers.",
        }
    }

    pub fn is_low(&self) -> bool {
        matches!(self, ConfidenceLevel::Low)
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(ConfidenceLevel::classify(0.9), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::classify(0.8999), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::classify(0.7), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::classify(0.6999), ConfidenceLevel::Low);
    }

    #[test]
    fn test_classify_extremes() {
        assert_eq!(ConfidenceLevel::classify(1.0), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::classify(0.0), ConfidenceLevel::Low);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&ConfidenceLevel::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
        assert_eq!(ConfidenceLevel::Low.to_string(), "low");
    }
}

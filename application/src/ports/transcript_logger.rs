//! Port for structured transcript logging.
//!
//! Defines the [`TranscriptLogger`] trait for recording deliberation events
//! (start, each completed run, the final report, failures) to a structured
//! log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the
//! deliberation transcript in a machine-readable format (JSONL).

use deliberation_domain::{DeliberationReport, ErrorRecord, Stance};
use serde::Serialize;

/// A transcript event.
///
/// Serializes as a flat object tagged by `type`
/// (e.g. `{"type": "run_completed", "run": 1, ...}`). The adapter adds the
/// timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TranscriptEvent {
    DeliberationStarted {
        question: String,
        run_count: usize,
        max_concurrent_runs: usize,
    },
    RunCompleted {
        run: usize,
        winner: Option<Stance>,
        final_answer: String,
    },
    DeliberationCompleted(DeliberationReport),
    DeliberationFailed(ErrorRecord),
}

impl TranscriptEvent {
    /// The `type` tag this event serializes with
    pub fn event_type(&self) -> &'static str {
        match self {
            TranscriptEvent::DeliberationStarted { .. } => "deliberation_started",
            TranscriptEvent::RunCompleted { .. } => "run_completed",
            TranscriptEvent::DeliberationCompleted(_) => "deliberation_completed",
            TranscriptEvent::DeliberationFailed(_) => "deliberation_failed",
        }
    }
}

/// Port for logging transcript events.
///
/// `log` is synchronous and infallible: a broken log file must not abort
/// a deliberation. Implementations drop records they cannot write.
pub trait TranscriptLogger: Send + Sync {
    fn log(&self, event: TranscriptEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoTranscriptLogger;

impl TranscriptLogger for NoTranscriptLogger {
    fn log(&self, _event: TranscriptEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_flat_with_type_tag() {
        let event = TranscriptEvent::RunCompleted {
            run: 2,
            winner: Some(Stance::Con),
            final_answer: "Keep it optional.".to_string(),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], event.event_type());
        assert_eq!(value["run"], 2);
        assert_eq!(value["winner"], "con");
    }

    #[test]
    fn test_failure_event_carries_error_record() {
        let event = TranscriptEvent::DeliberationFailed(ErrorRecord::new("boom", "Error: boom"));
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "deliberation_failed");
        assert_eq!(value["error"], "boom");
        assert_eq!(value["traceback"], "Error: boom");
    }
}

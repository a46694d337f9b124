//! Output formatter trait

use deliberation_domain::{DeliberationResult, ErrorRecord};

/// Trait for formatting deliberation results
pub trait OutputFormatter {
    /// Format the complete result: answer, confidence, verdict, arguments
    fn format(&self, result: &DeliberationResult) -> String;

    /// Format as the JSON report record
    fn format_json(&self, result: &DeliberationResult) -> String;

    /// Format the final answer and confidence only (concise output)
    fn format_answer_only(&self, result: &DeliberationResult) -> String;

    /// Format a failed deliberation
    fn format_error(&self, record: &ErrorRecord) -> String;
}

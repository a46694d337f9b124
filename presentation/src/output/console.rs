//! Console output formatter for deliberation results

use crate::output::formatter::OutputFormatter;
use colored::{ColoredString, Colorize};
use deliberation_domain::{
    ConfidenceLevel, DeliberationReport, DeliberationResult, ErrorRecord, Stance, VerdictForm,
};

/// Formats deliberation results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete deliberation result
    pub fn format(result: &DeliberationResult) -> String {
        let primary = result.primary();
        let mut output = String::new();

        output.push_str(&Self::header("Deliberation Results"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n\n",
            "Question:".cyan().bold(),
            result.question
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Confidence:".cyan().bold(),
            Self::confidence_summary(result)
        ));
        output.push_str(&format!(
            "{}\n",
            result.confidence.description().dimmed()
        ));

        output.push_str(&Self::section_header("Final Answer"));
        output.push_str(&format!("\n{}\n", primary.final_answer));

        output.push_str(&Self::section_header("Judge Decision"));
        if let VerdictForm::Structured(verdict) = primary.verdict.form() {
            output.push_str(&format!(
                "\n{} {}\n",
                "Winner:".green().bold(),
                verdict.winner.label()
            ));
            for stance in Stance::ALL {
                let score = verdict
                    .scores
                    .get(stance)
                    .map(|s| format!("{s}/10"))
                    .unwrap_or_else(|| "-".to_string());
                output.push_str(&format!("  {:<12} {}\n", stance.label(), score));
            }
        }
        output.push_str(&format!("\n{}\n", primary.verdict.raw()));

        output.push_str(&Self::section_header("Arguments (run 1)"));
        for stance in Stance::ALL {
            output.push_str(&format!(
                "\n{}\n{}\n",
                format!("── {} ──", stance.label()).yellow().bold(),
                primary.arguments.get(stance).content
            ));
        }

        if result.run_count() > 1 {
            output.push_str(&Self::section_header("Final Answers by Run"));
            for run in result.runs() {
                output.push_str(&format!(
                    "\n{}\n{}\n",
                    format!("── Run {} ──", run.index).yellow().bold(),
                    Self::indent(&run.final_answer, "  ")
                ));
            }
        }

        if let Some(what_would_change) = &result.what_would_change {
            output.push_str(&Self::section_header("What Would Change the Conclusion"));
            output.push_str(&format!("\n{}\n", what_would_change));
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON (the flat report record)
    pub fn format_json(result: &DeliberationResult) -> String {
        serde_json::to_string_pretty(&DeliberationReport::from(result))
            .unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the final answer only (concise output)
    pub fn format_answer_only(result: &DeliberationResult) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            "=== Deliberation Conclusion ===".cyan().bold()
        ));

        output.push_str(&format!("{} {}\n\n", "Q:".bold(), result.question));

        output.push_str(&result.primary().final_answer);
        output.push_str("\n\n");

        output.push_str(&format!(
            "{} {}\n",
            "Confidence:".dimmed(),
            Self::confidence_summary(result)
        ));

        if let Some(what_would_change) = &result.what_would_change {
            output.push_str(&format!(
                "\n{}\n{}\n",
                "What would change the conclusion:".yellow().bold(),
                what_would_change
            ));
        }

        output
    }

    /// Format a failure for the console
    pub fn format_error(record: &ErrorRecord) -> String {
        format!(
            "{} {}\n{}\n",
            "Error:".red().bold(),
            record.error,
            Self::indent(&record.traceback, "  ").dimmed()
        )
    }

    /// Format a failure as the JSON error record
    pub fn format_error_json(record: &ErrorRecord) -> String {
        serde_json::to_string_pretty(record).unwrap_or_else(|_| "{}".to_string())
    }

    fn confidence_summary(result: &DeliberationResult) -> String {
        format!(
            "{} (similarity {}, {} {})",
            Self::colored_level(result.confidence),
            result.similarity,
            result.run_count(),
            if result.run_count() == 1 { "run" } else { "runs" }
        )
    }

    fn colored_level(level: ConfidenceLevel) -> ColoredString {
        match level {
            ConfidenceLevel::High => level.as_str().green().bold(),
            ConfidenceLevel::Medium => level.as_str().yellow().bold(),
            ConfidenceLevel::Low => level.as_str().red().bold(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, result: &DeliberationResult) -> String {
        Self::format(result)
    }

    fn format_json(&self, result: &DeliberationResult) -> String {
        Self::format_json(result)
    }

    fn format_answer_only(&self, result: &DeliberationResult) -> String {
        Self::format_answer_only(result)
    }

    fn format_error(&self, record: &ErrorRecord) -> String {
        Self::format_error(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deliberation_domain::{Question, Run, SimilarityScore, StanceArguments, Verdict};

    fn result(similarity: f64, what_would_change: Option<&str>) -> DeliberationResult {
        let runs = (1..=2)
            .map(|i| {
                Run::new(
                    i,
                    StanceArguments::new("pro text", "con text", "alt text"),
                    Verdict::parse("Winner: Con\nScores:\n- Pro: 6\n- Con: 8\n- Alternative: 5\nReason: sharper"),
                    format!("answer {i}"),
                )
            })
            .collect();
        DeliberationResult::new(
            Question::try_new("Tabs or spaces?").unwrap(),
            runs,
            SimilarityScore::new(similarity),
            what_would_change.map(String::from),
        )
        .unwrap()
    }

    #[test]
    fn test_full_output_sections() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format(&result(0.95, None));

        assert!(output.contains("Question: Tabs or spaces?"));
        assert!(output.contains("high (similarity 0.95, 2 runs)"));
        assert!(output.contains("Winner: Con"));
        assert!(output.contains("Con          8/10"));
        assert!(output.contains("── Alternative ──\nalt text"));
        assert!(output.contains("── Run 2 ──\n  answer 2"));
        assert!(!output.contains("What Would Change"));
    }

    #[test]
    fn test_answer_only_with_follow_up() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_answer_only(&result(0.4, Some("Team size.")));

        assert!(output.contains("answer 1"));
        assert!(!output.contains("answer 2"));
        assert!(output.contains("low (similarity 0.40, 2 runs)"));
        assert!(output.contains("What would change the conclusion:\nTeam size."));
    }

    #[test]
    fn test_json_is_report_record() {
        let json = ConsoleFormatter::format_json(&result(0.8, None));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["question"], "Tabs or spaces?");
        assert_eq!(value["final_answer"], "answer 1");
        assert_eq!(value["confidence"], "medium");
        assert_eq!(value["runs"], 2);
        assert_eq!(value["raw_agents"]["alternative"], "alt text");
        assert!(value.get("what_would_change").is_none());
    }

    #[test]
    fn test_error_formats() {
        colored::control::set_override(false);
        let record = ErrorRecord::new("con agent failed in run 1", "Error: boom\nCaused by: 503");

        let text = ConsoleFormatter::format_error(&record);
        assert!(text.starts_with("Error: con agent failed in run 1"));
        assert!(text.contains("  Caused by: 503"));

        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_error_json(&record)).unwrap();
        assert_eq!(json["error"], "con agent failed in run 1");
    }
}

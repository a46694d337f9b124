//! Progress reporting for deliberation execution

use colored::Colorize;
use deliberation_application::{PipelineStage, ProgressNotifier};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports progress during a deliberation with a progress bar
///
/// One bar tracks every stage of every run; runs may complete out of
/// order, so the bar counts stages rather than following a single run.
pub struct ProgressReporter {
    multi: MultiProgress,
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_deliberation_start(&self, total_runs: usize) {
        let pb = self
            .multi
            .add(ProgressBar::new((total_runs * PipelineStage::PER_RUN) as u64));
        pb.set_style(Self::bar_style());
        pb.set_prefix(format!("Deliberating ({} runs)", total_runs));
        pb.set_message("Starting...");

        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(pb);
        }
    }

    fn on_stage_complete(&self, run: usize, stage: PipelineStage) {
        self.with_bar(|pb| {
            pb.set_message(format!("{} run {}: {}", "v".green(), run, stage));
            pb.inc(1);
        });
    }

    fn on_run_complete(&self, run: usize, success: bool) {
        if !success {
            self.with_bar(|pb| pb.set_message(format!("{} run {} failed", "x".red(), run)));
        }
    }

    fn on_scoring_start(&self) {
        self.with_bar(|pb| pb.set_message("Measuring agreement..."));
    }

    fn on_follow_up_start(&self) {
        self.with_bar(|pb| pb.set_message("Low agreement: asking what would change..."));
    }

    fn on_deliberation_complete(&self, success: bool) {
        if let Ok(mut guard) = self.bar.lock()
            && let Some(pb) = guard.take()
        {
            if success {
                pb.finish_with_message(format!("{}", "Deliberation complete!".green()));
            } else {
                pb.abandon_with_message(format!("{}", "Deliberation failed".red()));
            }
        }
    }
}

/// Simple text-based progress (no fancy UI)
///
/// Writes to stderr so stdout stays clean for the result.
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_deliberation_start(&self, total_runs: usize) {
        eprintln!(
            "{} {} ({} runs)",
            "->".cyan(),
            "Deliberating".bold(),
            total_runs
        );
    }

    fn on_stage_complete(&self, _run: usize, _stage: PipelineStage) {}

    fn on_run_complete(&self, run: usize, success: bool) {
        if success {
            eprintln!("  {} run {}", "v".green(), run);
        } else {
            eprintln!("  {} run {} (failed)", "x".red(), run);
        }
    }

    fn on_scoring_start(&self) {
        eprintln!("{} {}", "->".cyan(), "Measuring agreement".bold());
    }

    fn on_follow_up_start(&self) {
        eprintln!(
            "{} {}",
            "->".cyan(),
            "Low agreement: asking what would change".bold()
        );
    }

    fn on_deliberation_complete(&self, _success: bool) {
        eprintln!();
    }
}

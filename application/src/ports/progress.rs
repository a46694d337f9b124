//! Progress notification port
//!
//! Defines the interface for reporting progress during a deliberation.

use deliberation_domain::Stance;

/// Pipeline stage inside one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    /// One of the three stance agents
    Stance(Stance),
    Judgment,
    Synthesis,
}

impl PipelineStage {
    /// Stages completed by one successful run
    pub const PER_RUN: usize = 5;

    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Stance(Stance::Pro) => "pro agent",
            PipelineStage::Stance(Stance::Con) => "con agent",
            PipelineStage::Stance(Stance::Alternative) => "alternative agent",
            PipelineStage::Judgment => "judge",
            PipelineStage::Synthesis => "synthesizer",
        }
    }
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Callback for progress updates during a deliberation
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console bars, plain lines, nothing).
/// Callbacks may arrive from concurrently executing runs.
pub trait ProgressNotifier: Send + Sync {
    /// Called once before any run starts
    fn on_deliberation_start(&self, total_runs: usize);

    /// Called when a stage of run `run` (1-indexed) finishes
    fn on_stage_complete(&self, run: usize, stage: PipelineStage);

    /// Called when run `run` finishes, successfully or not
    fn on_run_complete(&self, run: usize, success: bool);

    /// Called before the final answers are embedded and compared
    fn on_scoring_start(&self) {}

    /// Called before the low-confidence follow-up is requested
    fn on_follow_up_start(&self) {}

    /// Called when the deliberation finishes
    fn on_deliberation_complete(&self, _success: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_deliberation_start(&self, _total_runs: usize) {}
    fn on_stage_complete(&self, _run: usize, _stage: PipelineStage) {}
    fn on_run_complete(&self, _run: usize, _success: bool) {}
}

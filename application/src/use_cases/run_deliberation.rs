//! Run Deliberation use case
//!
//! Orchestrates the full deliberation flow:
//!
//! ```text
//! run 1..N:  {Pro, Con, Alternative} ──▶ Judge ──▶ Synthesizer ──▶ final answer
//!                                                                    │
//! all final answers ──▶ Similarity Scorer ──▶ confidence ──▶ (low, N ≥ 2) follow-up
//! ```
//!
//! Any failure aborts the whole deliberation; there are no partial results.

use crate::agents::{Judge, SimilarityScorer, StanceAgent, Synthesizer};
use crate::config::DeliberationParams;
use crate::ports::embedding_gateway::{EmbeddingError, EmbeddingGateway};
use crate::ports::generation_gateway::{GenerationError, GenerationGateway};
use crate::ports::progress::{NoProgress, PipelineStage, ProgressNotifier};
use crate::ports::transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger};
use deliberation_domain::{
    Argument, ConfidenceLevel, DeliberationReport, DeliberationResult, DomainError, ErrorRecord,
    PromptTemplate, Question, Run, Stance, StanceArguments,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;
use tracing::{Instrument, debug, info, info_span, warn};

/// Errors that can occur during a deliberation
#[derive(Error, Debug)]
pub enum RunDeliberationError {
    #[error(transparent)]
    InvalidInput(#[from] DomainError),

    #[error("{stage} failed in run {run}")]
    Generation {
        stage: PipelineStage,
        run: usize,
        #[source]
        source: GenerationError,
    },

    #[error("Similarity scoring failed")]
    Scoring(#[source] EmbeddingError),

    #[error("Follow-up generation failed")]
    FollowUp(#[source] GenerationError),

    #[error("Run task failed: {0}")]
    TaskFailed(String),
}

impl RunDeliberationError {
    /// Whether the caller's input was at fault (as opposed to a service failure)
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, RunDeliberationError::InvalidInput(e) if e.is_malformed_input())
    }

    /// The run that failed, for pipeline-stage failures
    pub fn run(&self) -> Option<usize> {
        match self {
            RunDeliberationError::Generation { run, .. } => Some(*run),
            _ => None,
        }
    }
}

/// Input for the RunDeliberation use case
#[derive(Debug, Clone)]
pub struct RunDeliberationInput {
    pub question: Question,
    pub params: DeliberationParams,
}

impl RunDeliberationInput {
    pub fn new(question: Question) -> Self {
        Self {
            question,
            params: DeliberationParams::default(),
        }
    }

    pub fn with_params(mut self, params: DeliberationParams) -> Self {
        self.params = params;
        self
    }
}

/// One run's worth of agents, cheap to clone into a spawned task
struct RunPipeline<G: GenerationGateway> {
    pro: StanceAgent<G>,
    con: StanceAgent<G>,
    alternative: StanceAgent<G>,
    judge: Judge<G>,
    synthesizer: Synthesizer<G>,
}

type StageSender = mpsc::UnboundedSender<(usize, PipelineStage)>;

impl<G: GenerationGateway> RunPipeline<G> {
    fn new(gateway: Arc<G>) -> Self {
        Self {
            pro: StanceAgent::new(Arc::clone(&gateway), Stance::Pro),
            con: StanceAgent::new(Arc::clone(&gateway), Stance::Con),
            alternative: StanceAgent::new(Arc::clone(&gateway), Stance::Alternative),
            judge: Judge::new(Arc::clone(&gateway)),
            synthesizer: Synthesizer::new(gateway),
        }
    }

    /// Stance → Judge → Synthesize for run `index`
    async fn execute(
        &self,
        index: usize,
        question: &Question,
        stages: &StageSender,
    ) -> Result<Run, RunDeliberationError> {
        let (pro, con, alternative) = futures::try_join!(
            Self::argue(&self.pro, index, question, stages),
            Self::argue(&self.con, index, question, stages),
            Self::argue(&self.alternative, index, question, stages),
        )?;
        let arguments = StanceArguments {
            pro,
            con,
            alternative,
        };

        let verdict = self
            .judge
            .adjudicate(question, &arguments)
            .await
            .map_err(stage_failed(PipelineStage::Judgment, index))?;
        let _ = stages.send((index, PipelineStage::Judgment));

        let final_answer = self
            .synthesizer
            .synthesize(question, &verdict)
            .await
            .map_err(stage_failed(PipelineStage::Synthesis, index))?;
        let _ = stages.send((index, PipelineStage::Synthesis));

        Ok(Run::new(index, arguments, verdict, final_answer))
    }

    async fn argue(
        agent: &StanceAgent<G>,
        index: usize,
        question: &Question,
        stages: &StageSender,
    ) -> Result<Argument, RunDeliberationError> {
        let stage = PipelineStage::Stance(agent.stance());
        let argument = agent
            .generate(question)
            .await
            .map_err(stage_failed(stage, index))?;
        let _ = stages.send((index, stage));
        Ok(argument)
    }
}

impl<G: GenerationGateway> Clone for RunPipeline<G> {
    fn clone(&self) -> Self {
        Self {
            pro: self.pro.clone(),
            con: self.con.clone(),
            alternative: self.alternative.clone(),
            judge: self.judge.clone(),
            synthesizer: self.synthesizer.clone(),
        }
    }
}

fn stage_failed(
    stage: PipelineStage,
    run: usize,
) -> impl FnOnce(GenerationError) -> RunDeliberationError {
    move |source| RunDeliberationError::Generation { stage, run, source }
}

/// Use case for running a deliberation
pub struct RunDeliberationUseCase<G: GenerationGateway + 'static, E: EmbeddingGateway + 'static> {
    gateway: Arc<G>,
    pipeline: RunPipeline<G>,
    scorer: SimilarityScorer<E>,
    transcript: Arc<dyn TranscriptLogger>,
}

impl<G: GenerationGateway + 'static, E: EmbeddingGateway + 'static> RunDeliberationUseCase<G, E> {
    pub fn new(gateway: Arc<G>, embedder: Arc<E>) -> Self {
        Self {
            pipeline: RunPipeline::new(Arc::clone(&gateway)),
            gateway,
            scorer: SimilarityScorer::new(embedder),
            transcript: Arc::new(NoTranscriptLogger),
        }
    }

    /// Record every deliberation to `logger`
    pub fn with_transcript_logger(mut self, logger: Arc<dyn TranscriptLogger>) -> Self {
        self.transcript = logger;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: RunDeliberationInput,
    ) -> Result<DeliberationResult, RunDeliberationError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunDeliberationInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<DeliberationResult, RunDeliberationError> {
        let outcome = self.deliberate(&input, progress).await;

        match &outcome {
            Ok(result) => {
                info!(
                    confidence = %result.confidence,
                    similarity = result.similarity.value(),
                    "Deliberation complete"
                );
                let report = DeliberationReport::from(result);
                self.transcript
                    .log(TranscriptEvent::DeliberationCompleted(report));
            }
            Err(e) => {
                warn!("Deliberation failed: {}", e);
                let record = ErrorRecord::from_error(e);
                self.transcript
                    .log(TranscriptEvent::DeliberationFailed(record));
            }
        }

        progress.on_deliberation_complete(outcome.is_ok());
        outcome
    }

    async fn deliberate(
        &self,
        input: &RunDeliberationInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<DeliberationResult, RunDeliberationError> {
        let RunDeliberationInput { question, params } = input;
        params.validate()?;

        info!(
            runs = params.run_count,
            concurrency = params.effective_concurrency(),
            "Starting deliberation"
        );
        self.transcript.log(TranscriptEvent::DeliberationStarted {
            question: question.content().to_string(),
            run_count: params.run_count,
            max_concurrent_runs: params.effective_concurrency(),
        });
        progress.on_deliberation_start(params.run_count);

        let mut runs = self.execute_runs(question, params, progress).await?;
        runs.sort_by_key(|r| r.index);

        let final_answers: Vec<String> = runs.iter().map(|r| r.final_answer.clone()).collect();

        progress.on_scoring_start();
        let similarity = self
            .scorer
            .score(&final_answers)
            .await
            .map_err(RunDeliberationError::Scoring)?;
        let confidence = ConfidenceLevel::classify(similarity.value());
        debug!(similarity = similarity.value(), %confidence, "Agreement measured");

        let what_would_change = if confidence.is_low() && runs.len() >= 2 {
            info!("Low confidence; asking what would change the conclusion");
            progress.on_follow_up_start();
            let answers: Vec<&str> = final_answers.iter().map(String::as_str).collect();
            let prompt =
                PromptTemplate::what_would_change_prompt(question.content(), similarity, &answers);
            let follow_up = self
                .gateway
                .generate(&prompt)
                .await
                .map_err(RunDeliberationError::FollowUp)?;
            Some(follow_up)
        } else {
            None
        };

        let result =
            DeliberationResult::new(question.clone(), runs, similarity, what_would_change)?;
        Ok(result)
    }

    /// Execute every run, at most `effective_concurrency()` at a time
    ///
    /// Returns runs in completion order. The first failure aborts every
    /// outstanding run.
    async fn execute_runs(
        &self,
        question: &Question,
        params: &DeliberationParams,
        progress: &dyn ProgressNotifier,
    ) -> Result<Vec<Run>, RunDeliberationError> {
        let semaphore = Arc::new(Semaphore::new(params.effective_concurrency()));
        let (stage_tx, mut stage_rx) = mpsc::unbounded_channel();
        let mut join_set = JoinSet::new();

        for index in 1..=params.run_count {
            let pipeline = self.pipeline.clone();
            let semaphore = Arc::clone(&semaphore);
            let question = question.clone();
            let stage_tx = stage_tx.clone();

            join_set.spawn(
                async move {
                    let _permit = semaphore
                        .acquire_owned()
                        .await
                        .map_err(|e| RunDeliberationError::TaskFailed(e.to_string()))?;
                    debug!("Run started");
                    pipeline.execute(index, &question, &stage_tx).await
                }
                .instrument(info_span!("run", run = index)),
            );
        }
        drop(stage_tx);

        let mut runs = Vec::with_capacity(params.run_count);

        loop {
            tokio::select! {
                biased;

                Some((run, stage)) = stage_rx.recv() => {
                    progress.on_stage_complete(run, stage);
                }
                joined = join_set.join_next() => {
                    let Some(joined) = joined else { break };
                    match joined {
                        Ok(Ok(run)) => {
                            info!(run = run.index, winner = ?run.verdict.winner(), "Run completed");
                            progress.on_run_complete(run.index, true);
                            self.transcript.log(TranscriptEvent::RunCompleted {
                                run: run.index,
                                winner: run.verdict.winner(),
                                final_answer: run.final_answer.clone(),
                            });
                            runs.push(run);
                        }
                        Ok(Err(e)) => {
                            join_set.abort_all();
                            if let Some(run) = e.run() {
                                progress.on_run_complete(run, false);
                            }
                            return Err(e);
                        }
                        Err(e) => {
                            join_set.abort_all();
                            return Err(RunDeliberationError::TaskFailed(e.to_string()));
                        }
                    }
                }
            }
        }

        Ok(runs)
    }
}

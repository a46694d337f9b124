//! CLI entrypoint for Deliberation AI
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use deliberation_application::{
    RunDeliberationInput, RunDeliberationUseCase, TranscriptLogger,
};
use deliberation_domain::{ErrorRecord, OutputFormat, Question};
use deliberation_infrastructure::{
    ConfigLoader, FileConfig, JsonlTranscriptLogger, OpenRouterConfig, build_gateways,
};
use deliberation_presentation::{
    AppState, Cli, ConsoleFormatter, ProgressReporter, SimpleProgress,
};
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting Deliberation AI");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    apply_overrides(&mut config, &cli);
    config.validate().context("Invalid configuration")?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        println!();
        println!("{}", toml::to_string_pretty(&config.redacted())?);
        return Ok(ExitCode::SUCCESS);
    }

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let provider = OpenRouterConfig::from_file_config(&config)?;
    let (generation, embedding) = build_gateways(provider)?;

    let mut use_case = RunDeliberationUseCase::new(Arc::new(generation), Arc::new(embedding));
    if let Some(path) = &config.logging.transcript_file {
        match JsonlTranscriptLogger::new(path) {
            Some(logger) => {
                info!("Transcript: {}", logger.path().display());
                let logger: Arc<dyn TranscriptLogger> = Arc::new(logger);
                use_case = use_case.with_transcript_logger(logger);
            }
            None => warn!("Transcript disabled: cannot open {}", path.display()),
        }
    }
    let use_case = Arc::new(use_case);
    let params = config.deliberation.to_params();

    // Server mode
    if cli.serve {
        let listener = tokio::net::TcpListener::bind(&config.server.bind)
            .await
            .with_context(|| format!("Failed to bind {}", config.server.bind))?;
        let router = deliberation_presentation::router(AppState::new(use_case, params));
        deliberation_presentation::serve(listener, router).await?;
        return Ok(ExitCode::SUCCESS);
    }

    // Single question mode - question is required
    let question = match cli.question.as_deref().map(Question::try_new) {
        Some(Ok(q)) => q,
        Some(Err(e)) => bail!(e),
        None => bail!("Question is required. Use --serve for HTTP mode."),
    };

    let format = config.output.format.unwrap_or_default();
    let input = RunDeliberationInput::new(question).with_params(params);

    let outcome = if cli.quiet || format == OutputFormat::Json {
        use_case.execute(input).await
    } else if std::io::stderr().is_terminal() {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await
    } else {
        use_case.execute_with_progress(input, &SimpleProgress).await
    };

    match outcome {
        Ok(result) => {
            let output = match format {
                OutputFormat::Full => ConsoleFormatter::format(&result),
                OutputFormat::Answer => ConsoleFormatter::format_answer_only(&result),
                OutputFormat::Json => ConsoleFormatter::format_json(&result),
            };
            println!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let record = ErrorRecord::from_error(&e);
            if format == OutputFormat::Json {
                println!("{}", ConsoleFormatter::format_error_json(&record));
            } else {
                eprintln!("{}", ConsoleFormatter::format_error(&record));
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` wins over `-v` when set. With `--log-file`, logs go to that
/// file instead of stderr; the returned guard flushes it on drop.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("Invalid log file path: {}", path.display()))?;
            std::fs::create_dir_all(dir)?;
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

/// CLI flags take precedence over every configuration source
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(runs) = cli.runs {
        config.deliberation.run_count = usize::from(runs);
    }
    if let Some(concurrency) = cli.concurrency {
        config.deliberation.max_concurrent_runs = usize::from(concurrency);
    }
    if let Some(output) = cli.output {
        config.output.format = Some(output.into());
    }
    if let Some(bind) = &cli.bind {
        config.server.bind = bind.clone();
    }
    if let Some(path) = &cli.transcript {
        config.logging.transcript_file = Some(path.clone());
    }
}

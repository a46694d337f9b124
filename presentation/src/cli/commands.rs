//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for deliberation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Answer, confidence, judge verdict and the three stance texts
    Full,
    /// Only the final answer and its confidence
    Answer,
    /// JSON report record
    Json,
}

impl From<OutputFormat> for deliberation_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => Self::Full,
            OutputFormat::Answer => Self::Answer,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for deliberation
#[derive(Parser, Debug)]
#[command(name = "deliberation")]
#[command(author, version, about = "Deliberation AI - argue, judge, synthesize, and measure agreement")]
#[command(long_about = r#"
Deliberation AI answers a question by having three agents argue it
(pro, con, alternative), a judge pick the strongest argument, and a
synthesizer write one balanced answer.

The whole pipeline is repeated (3 runs by default). The final answers are
embedded and compared; their mean similarity becomes a confidence label
(high >= 0.90, medium >= 0.70, low otherwise). On low confidence the model
is asked what information would change the conclusion.

Configuration files are loaded from (in priority order):
1. DELIBERATION_<SECTION>__<KEY>   Environment variables
2. --config <path>                 Explicit config file
3. ./deliberation.toml             Project-level config
4. ~/.config/deliberation/config.toml   Global config

The API key is read from OPENROUTER_API_KEY unless configured otherwise.

Example:
  deliberation "Should remote work be mandatory?"
  deliberation --runs 5 --concurrency 5 --output full "Is a monorepo worth it?"
  deliberation --serve --bind 0.0.0.0:8000
"#)]
pub struct Cli {
    /// The question to deliberate (not required with --serve)
    pub question: Option<String>,

    /// Number of full pipeline runs
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub runs: Option<u16>,

    /// Maximum runs executing at the same time
    #[arg(short = 'j', long, value_name = "K", value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: Option<u16>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Serve the HTTP API instead of answering one question
    #[arg(long)]
    pub serve: bool,

    /// Address for --serve (overrides server.bind)
    #[arg(long, value_name = "ADDR", requires = "serve")]
    pub bind: Option<String>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and the merged configuration, then exit
    #[arg(long)]
    pub show_config: bool,

    /// Write process logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Append a JSONL transcript of every deliberation (overrides logging.transcript_file)
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,
}

//! Presentation layer for deliberation-ai
//!
//! This crate contains CLI definitions, output formatters, progress
//! reporters and the HTTP API.

pub mod cli;
pub mod http;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use http::{AppState, router, serve};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};

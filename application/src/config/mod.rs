//! Application-level configuration.
//!
//! - [`DeliberationParams`]: run count and run concurrency

pub mod deliberation_params;

pub use deliberation_params::{DEFAULT_RUN_COUNT, DeliberationParams};

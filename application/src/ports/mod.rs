//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod embedding_gateway;
pub mod generation_gateway;
pub mod progress;
pub mod transcript_logger;

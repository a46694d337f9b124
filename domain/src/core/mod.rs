//! Core domain concepts shared across all subdomains.
//!
//! - [`model::GenerationModel`] / [`model::EmbeddingModel`]: upstream model ids
//! - [`question::Question`]: a validated question to deliberate
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod question;
pub mod string;

//! Cosine similarity over answer embeddings.
//!
//! Pure math only; fetching the embeddings is the application layer's job.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Mean pairwise similarity of a set of final answers, in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimilarityScore(f64);

impl SimilarityScore {
    /// Score used when fewer than two answers exist.
    ///
    /// A single sample shows no disagreement, so it is treated as full
    /// agreement.
    pub const SINGLE_SAMPLE: SimilarityScore = SimilarityScore(1.0);

    /// Create a score, clamping into `[0, 1]`
    ///
    /// Negative cosine values (opposed embeddings) count as no agreement.
    /// NaN collapses to 0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            SimilarityScore(0.0)
        } else {
            SimilarityScore(value.clamp(0.0, 1.0))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for SimilarityScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

fn norm(v: &[f32]) -> f64 {
    v.iter().map(|x| f64::from(*x) * f64::from(*x)).sum::<f64>().sqrt()
}

/// Cosine similarity of two embedding vectors.
///
/// Returns `Ok(0.0)` when either vector has zero norm: an empty embedding
/// carries no meaning to agree on.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, DomainError> {
    if a.len() != b.len() {
        return Err(DomainError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let norm_a = norm(a);
    let norm_b = norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    let dot: f64 = a
        .iter()
        .zip(b)
        .map(|(x, y)| f64::from(*x) * f64::from(*y))
        .sum();

    Ok(dot / (norm_a * norm_b))
}

/// Whether a vector has zero norm (cosine undefined)
pub fn is_zero_vector(v: &[f32]) -> bool {
    v.iter().all(|x| *x == 0.0)
}

/// Mean cosine similarity over every unordered pair `(i, j), i < j`.
///
/// Fewer than two embeddings yield [`SimilarityScore::SINGLE_SAMPLE`].
pub fn mean_pairwise_similarity(embeddings: &[Vec<f32>]) -> Result<SimilarityScore, DomainError> {
    if embeddings.len() < 2 {
        return Ok(SimilarityScore::SINGLE_SAMPLE);
    }

    let mut total = 0.0;
    let mut pairs = 0usize;
    for i in 0..embeddings.len() {
        for j in (i + 1)..embeddings.len() {
            total += cosine_similarity(&embeddings[i], &embeddings[j])?;
            pairs += 1;
        }
    }

    Ok(SimilarityScore::new(total / pairs as f64))
}

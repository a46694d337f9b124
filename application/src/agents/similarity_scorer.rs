//! Similarity scorer: agreement across final answers

use crate::ports::embedding_gateway::{EmbeddingError, EmbeddingGateway};
use deliberation_domain::deliberation::similarity::is_zero_vector;
use deliberation_domain::{DomainError, SimilarityScore, mean_pairwise_similarity};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct SimilarityScorer<E: EmbeddingGateway> {
    gateway: Arc<E>,
}

impl<E: EmbeddingGateway> SimilarityScorer<E> {
    pub fn new(gateway: Arc<E>) -> Self {
        Self { gateway }
    }

    /// Mean pairwise cosine similarity of `texts`
    ///
    /// Fewer than two texts score [`SimilarityScore::SINGLE_SAMPLE`]
    /// without calling the gateway. Otherwise all texts are embedded in
    /// one batch.
    pub async fn score(&self, texts: &[String]) -> Result<SimilarityScore, EmbeddingError> {
        if texts.len() < 2 {
            return Ok(SimilarityScore::SINGLE_SAMPLE);
        }

        let embeddings = self.gateway.embed(texts).await?;
        if embeddings.len() != texts.len() {
            return Err(EmbeddingError::InvalidResponse(format!(
                "expected {} embeddings, got {}",
                texts.len(),
                embeddings.len()
            )));
        }

        for (i, embedding) in embeddings.iter().enumerate() {
            if is_zero_vector(embedding) {
                warn!(answer = i + 1, "zero-norm embedding; its pairs count as no agreement");
            }
        }

        let score = mean_pairwise_similarity(&embeddings).map_err(|e| match e {
            DomainError::DimensionMismatch { left, right } => EmbeddingError::InvalidResponse(
                format!("embedding dimensions differ: {left} vs {right}"),
            ),
            other => EmbeddingError::InvalidResponse(other.to_string()),
        })?;

        debug!(similarity = score.value(), texts = texts.len(), "similarity scored");
        Ok(score)
    }
}

impl<E: EmbeddingGateway> Clone for SimilarityScorer<E> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FixedEmbeddings {
        result: Result<Vec<Vec<f32>>, EmbeddingError>,
        calls: Mutex<usize>,
    }

    impl FixedEmbeddings {
        fn new(result: Result<Vec<Vec<f32>>, EmbeddingError>) -> Self {
            Self {
                result,
                calls: Mutex::new(0),
            }
        }
    }

    #[async_trait]
    impl EmbeddingGateway for FixedEmbeddings {
        async fn embed(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
            *self.calls.lock().unwrap() += 1;
            self.result.clone()
        }
    }

    fn texts(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("answer {i}")).collect()
    }

    #[tokio::test]
    async fn test_single_text_skips_gateway() {
        let gateway = Arc::new(FixedEmbeddings::new(Ok(vec![])));
        let scorer = SimilarityScorer::new(Arc::clone(&gateway));

        let score = scorer.score(&texts(1)).await.unwrap();

        assert_eq!(score.value(), 1.0);
        assert_eq!(*gateway.calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_identical_embeddings_score_one() {
        let v = vec![0.3_f32, 0.4, 0.5];
        let gateway = Arc::new(FixedEmbeddings::new(Ok(vec![v.clone(), v.clone(), v])));
        let scorer = SimilarityScorer::new(Arc::clone(&gateway));

        let score = scorer.score(&texts(3)).await.unwrap();

        assert!((score.value() - 1.0).abs() < 1e-6);
        assert_eq!(*gateway.calls.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_count_mismatch_is_invalid_response() {
        let gateway = Arc::new(FixedEmbeddings::new(Ok(vec![vec![1.0, 0.0]])));
        let scorer = SimilarityScorer::new(gateway);

        let err = scorer.score(&texts(2)).await.unwrap_err();
        assert!(matches!(err, EmbeddingError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_dimension_mismatch_is_invalid_response() {
        let gateway = Arc::new(FixedEmbeddings::new(Ok(vec![vec![1.0, 0.0], vec![1.0]])));
        let scorer = SimilarityScorer::new(gateway);

        let err = scorer.score(&texts(2)).await.unwrap_err();
        assert!(matches!(err, EmbeddingError::InvalidResponse(msg) if msg.contains("2 vs 1")));
    }

    #[tokio::test]
    async fn test_zero_vector_pair_scores_zero() {
        let gateway = Arc::new(FixedEmbeddings::new(Ok(vec![vec![0.0, 0.0], vec![1.0, 0.0]])));
        let scorer = SimilarityScorer::new(gateway);

        let score = scorer.score(&texts(2)).await.unwrap();
        assert_eq!(score.value(), 0.0);
    }

    #[tokio::test]
    async fn test_gateway_failure_propagates() {
        let gateway = Arc::new(FixedEmbeddings::new(Err(EmbeddingError::Timeout(30))));
        let scorer = SimilarityScorer::new(gateway);

        let err = scorer.score(&texts(3)).await.unwrap_err();
        assert_eq!(err, EmbeddingError::Timeout(30));
    }
}

//! Route configuration for the deliberation API.

use super::handlers::{AppState, debate, health};
use axum::Router;
use axum::routing::{get, post};
use deliberation_application::{EmbeddingGateway, GenerationGateway};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Creates the router with all endpoints.
///
/// Routes:
/// - `GET /`, `GET /api`, `GET /api/` - health acknowledgment
/// - `POST /`, `POST /debate`, `POST /api/debate` - run a deliberation
///
/// CORS is permissive: any origin, method and header.
pub fn router<G, E>(state: AppState<G, E>) -> Router
where
    G: GenerationGateway + 'static,
    E: EmbeddingGateway + 'static,
{
    Router::new()
        .route("/", get(health).post(debate::<G, E>))
        .route("/api", get(health))
        .route("/api/", get(health))
        .route("/debate", post(debate::<G, E>))
        .route("/api/debate", post(debate::<G, E>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::dto::HEALTH_STATUS;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use deliberation_application::{
        DeliberationParams, EmbeddingError, GenerationError, RunDeliberationUseCase,
    };
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    /// Answers every prompt with the same text, or fails on stance prompts
    struct FixedGateway {
        fail_con: bool,
    }

    #[async_trait]
    impl GenerationGateway for FixedGateway {
        async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
            if self.fail_con && prompt.contains("[CON AGENT]") {
                return Err(GenerationError::Status {
                    status: 502,
                    body: "bad gateway".to_string(),
                });
            }
            if prompt.contains("[JUDGE AGENT]") {
                return Ok("Winner: Pro\nReason: clearest".to_string());
            }
            Ok("Remote work should be optional.".to_string())
        }
    }

    struct SameEmbedding;

    #[async_trait]
    impl EmbeddingGateway for SameEmbedding {
        async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
            Ok(texts.iter().map(|_| vec![0.6, 0.8]).collect())
        }
    }

    fn app(fail_con: bool) -> Router {
        let use_case = RunDeliberationUseCase::new(
            Arc::new(FixedGateway { fail_con }),
            Arc::new(SameEmbedding),
        );
        router(AppState::new(Arc::new(use_case), DeliberationParams::default()))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_on_every_root() {
        for uri in ["/", "/api", "/api/"] {
            let response = app(false)
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            assert_eq!(body_json(response).await["status"], HEALTH_STATUS);
        }
    }

    #[tokio::test]
    async fn test_debate_returns_report() {
        for uri in ["/", "/debate", "/api/debate"] {
            let response = app(false)
                .oneshot(post_json(uri, r#"{"question": "Should remote work be mandatory?"}"#))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            let body = body_json(response).await;
            assert_eq!(body["question"], "Should remote work be mandatory?");
            assert_eq!(body["final_answer"], "Remote work should be optional.");
            assert_eq!(body["judge_decision"], "Winner: Pro\nReason: clearest");
            assert_eq!(body["confidence"], "high");
            assert_eq!(body["runs"], 3);
            assert!(body.get("what_would_change").is_none());
        }
    }

    #[tokio::test]
    async fn test_empty_question_is_bad_request() {
        let response = app(false)
            .oneshot(post_json("/debate", r#"{"question": "   "}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("question"));
        assert!(body["traceback"].is_string());
    }

    #[tokio::test]
    async fn test_missing_question_is_bad_request() {
        let response = app(false).oneshot(post_json("/debate", "{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_json_is_error_record() {
        let response = app(false)
            .oneshot(post_json("/debate", "{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"].is_string());
        assert!(body["traceback"].is_string());
    }

    #[tokio::test]
    async fn test_gateway_failure_is_internal_error() {
        let response = app(true)
            .oneshot(post_json("/debate", r#"{"question": "q?"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("con agent failed in run 1"));
        assert!(body["traceback"].as_str().unwrap().contains("Caused by:"));
        assert!(body.get("final_answer").is_none());
    }

    #[tokio::test]
    async fn test_cors_preflight_allowed() {
        let response = app(false)
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/debate")
                    .header("origin", "https://example.com")
                    .header("access-control-request-method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.headers().contains_key("access-control-allow-origin"));
    }
}

//! HTTP handlers connecting routes to the deliberation use case

use super::dto::{DebateRequest, HealthResponse};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use deliberation_application::{
    DeliberationParams, EmbeddingGateway, GenerationGateway, RunDeliberationError,
    RunDeliberationInput, RunDeliberationUseCase,
};
use deliberation_domain::core::string::truncate;
use deliberation_domain::{DeliberationReport, ErrorRecord, Question};
use std::sync::Arc;
use tracing::{info, warn};

/// Shared application state
pub struct AppState<G: GenerationGateway + 'static, E: EmbeddingGateway + 'static> {
    pub use_case: Arc<RunDeliberationUseCase<G, E>>,
    pub params: DeliberationParams,
}

impl<G: GenerationGateway + 'static, E: EmbeddingGateway + 'static> AppState<G, E> {
    pub fn new(use_case: Arc<RunDeliberationUseCase<G, E>>, params: DeliberationParams) -> Self {
        Self { use_case, params }
    }
}

impl<G: GenerationGateway + 'static, E: EmbeddingGateway + 'static> Clone for AppState<G, E> {
    fn clone(&self) -> Self {
        Self {
            use_case: Arc::clone(&self.use_case),
            params: self.params,
        }
    }
}

/// Failure returned to an HTTP caller as an [`ErrorRecord`]
#[derive(Debug)]
pub enum ApiError {
    /// The request body was not usable
    BadRequest(ErrorRecord),
    /// The deliberation failed
    Deliberation(RunDeliberationError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Deliberation(e) if e.is_malformed_input() => StatusCode::BAD_REQUEST,
            ApiError::Deliberation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn record(&self) -> ErrorRecord {
        match self {
            ApiError::BadRequest(record) => record.clone(),
            ApiError::Deliberation(e) => ErrorRecord::from_error(e),
        }
    }
}

impl From<RunDeliberationError> for ApiError {
    fn from(e: RunDeliberationError) -> Self {
        ApiError::Deliberation(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(ErrorRecord::from_error(&rejection))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.record())).into_response()
    }
}

/// GET / - health acknowledgment
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::running())
}

/// POST /debate - run one deliberation
pub async fn debate<G, E>(
    State(state): State<AppState<G, E>>,
    body: Result<Json<DebateRequest>, JsonRejection>,
) -> Result<Json<DeliberationReport>, ApiError>
where
    G: GenerationGateway + 'static,
    E: EmbeddingGateway + 'static,
{
    let Json(request) = body?;
    let question = Question::try_new(request.question).map_err(RunDeliberationError::from)?;

    info!(question = %truncate(question.content(), 80), "Debate requested");
    let input = RunDeliberationInput::new(question).with_params(state.params);

    match state.use_case.execute(input).await {
        Ok(result) => Ok(Json(DeliberationReport::from(&result))),
        Err(e) => {
            warn!("Debate failed: {}", e);
            Err(ApiError::from(e))
        }
    }
}

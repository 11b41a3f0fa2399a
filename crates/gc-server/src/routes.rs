use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use gc_core::{Classification, Explanation};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::Instrument;

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub complaint: String,
}

#[derive(Debug, Deserialize)]
pub struct BatchClassifyRequest {
    pub complaints: Vec<String>,
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub fn classify_routes() -> Router<AppState> {
    Router::new()
        .route("/classify", post(classify))
        .route("/classify/batch", post(classify_batch))
        .route("/explain", post(explain))
}

fn request_span(name: &'static str) -> tracing::Span {
    tracing::info_span!("request", endpoint = name, request_id = %uuid::Uuid::new_v4())
}

fn require_complaint(req: &ClassifyRequest) -> Result<(), ApiError> {
    if req.complaint.is_empty() {
        return Err(ApiError::unprocessable("complaint must not be empty"));
    }
    Ok(())
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    let generator = state.classifier.generator();
    Json(json!({
        "status": "healthy",
        "model_loaded": generator.is_loaded(),
        "model_id": generator.model_id(),
        "uptime_secs": state.start_time.elapsed().as_secs(),
    }))
}

async fn classify(
    State(state): State<AppState>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<Json<Classification>, ApiError> {
    let Json(req) = payload?;
    require_complaint(&req)?;
    async {
        let classification = state
            .classifier
            .classify(&req.complaint)
            .await
            .map_err(|e| ApiError::from_gc(e, "Classification failed"))?;
        Ok::<_, ApiError>(Json(classification))
    }
    .instrument(request_span("classify"))
    .await
}

async fn classify_batch(
    State(state): State<AppState>,
    payload: Result<Json<BatchClassifyRequest>, JsonRejection>,
) -> Result<Json<Vec<Classification>>, ApiError> {
    let Json(req) = payload?;
    if req.complaints.is_empty() {
        return Err(ApiError::unprocessable("complaints must contain at least one item"));
    }
    async {
        let outcome = state.classifier.classify_batch(&req.complaints).await;
        if outcome.failed {
            return Err(ApiError::batch_failed(outcome.summary(), outcome.failures));
        }
        Ok::<_, ApiError>(Json(outcome.results))
    }
    .instrument(request_span("classify_batch"))
    .await
}

async fn explain(
    State(state): State<AppState>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<Json<Explanation>, ApiError> {
    let Json(req) = payload?;
    require_complaint(&req)?;
    async {
        let explanation = state
            .classifier
            .explain(&req.complaint)
            .await
            .map_err(|e| ApiError::from_gc(e, "Explanation failed"))?;
        Ok::<_, ApiError>(Json(explanation))
    }
    .instrument(request_span("explain"))
    .await
}

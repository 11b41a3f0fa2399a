//! JSON error responses for the HTTP API.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gc_classifier::BatchFailure;
use gc_core::GcError;
use serde_json::json;

/// API error with status code and free-text detail.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
    pub errors: Vec<BatchFailure>,
}

impl ApiError {
    fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self { status, code, message: message.into(), errors: Vec::new() }
    }

    pub fn unprocessable(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg)
    }

    pub fn batch_failed(msg: impl Into<String>, errors: Vec<BatchFailure>) -> Self {
        Self { errors, ..Self::new(StatusCode::INTERNAL_SERVER_ERROR, "batch_failed", msg) }
    }

    /// Map a pipeline error, prefixing internal failures with `context`.
    pub fn from_gc(err: GcError, context: &str) -> Self {
        match err {
            GcError::InvalidComplaint(msg) => Self::unprocessable(msg),
            other => Self::internal(format!("{context}: {other}")),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = json!({
            "detail": self.message,
            "code": self.code,
        });
        if !self.errors.is_empty() {
            body["errors"] = json!(self.errors);
        }
        (self.status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let status = rejection.status();
        let code = if status == StatusCode::UNPROCESSABLE_ENTITY { "validation_error" } else { "bad_request" };
        Self::new(status, code, rejection.body_text())
    }
}

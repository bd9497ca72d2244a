//! Error handling

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;

use freshness_core::{ModelError, PredictError, ValidationError};

use crate::sessions::SessionError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    // Session errors
    SessionRequired,
    SessionNotFound,
    TooManySessions,

    // Resource errors
    NotFound(String),

    // Validation errors
    ValidationError(String),

    // Model errors
    ModelError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::SessionRequired => (StatusCode::UNAUTHORIZED, "Session required (X-Session-Id header)"),
            AppError::SessionNotFound => (StatusCode::NOT_FOUND, "Session not found or expired"),
            AppError::TooManySessions => (StatusCode::SERVICE_UNAVAILABLE, "Too many open sessions"),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.as_str()),
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::ModelError(msg) => {
                tracing::error!("Model error: {}", msg);
                (StatusCode::BAD_GATEWAY, "Prediction failed")
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        AppError::ModelError(err.to_string())
    }
}

impl From<PredictError> for AppError {
    fn from(err: PredictError) -> Self {
        match err {
            PredictError::Validation(e) => e.into(),
            PredictError::Model(e) => e.into(),
        }
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NotFound(_) => AppError::SessionNotFound,
            SessionError::Capacity(_) => AppError::TooManySessions,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::optimizer::OptimizeError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed request body, rejected before it reaches the optimizer.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Optimize(#[from] OptimizeError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Optimize(err) => match err {
                OptimizeError::InvalidInput(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                OptimizeError::Infeasible => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "INFEASIBLE",
                    err.to_string(),
                ),
                OptimizeError::SearchSpaceTooLarge { .. } => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "SEARCH_SPACE_TOO_LARGE",
                    err.to_string(),
                ),
                OptimizeError::Cancelled | OptimizeError::DeadlineExceeded { .. } => {
                    tracing::warn!("Layout search stopped early: {err}");
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "SEARCH_TIMEOUT",
                        "The layout search did not finish in time".to_string(),
                    )
                }
                OptimizeError::Internal(detail) => {
                    tracing::error!("Optimizer error: {detail}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal server error occurred".to_string(),
                    )
                }
            },
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid JSON")]
    InvalidJson,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidJson => (StatusCode::BAD_REQUEST, "Invalid JSON".to_string()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
            ),
            AppError::Llm(e) => {
                // Detail stays in the server log.
                tracing::error!("Gemini API error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal AI Error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::InvalidJson.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::MethodNotAllowed.into_response().status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        let llm = AppError::Llm(LlmError::Api {
            status: 429,
            message: "quota".to_string(),
        });
        assert_eq!(
            llm.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

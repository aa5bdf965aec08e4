use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::calendar::csv_export::ExportError;
use crate::llm_client::LlmError;
use crate::models::schedule::ScheduleError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Generation limit of {limit} reached")]
    GenerationLimitReached { limit: u32 },

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Generated schedule rejected: {0}")]
    MalformedSchedule(#[from] ScheduleError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::GenerationLimitReached { limit } => (
                StatusCode::TOO_MANY_REQUESTS,
                "GENERATION_LIMIT_REACHED",
                format!("You have used all {limit} free generations"),
            ),
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "Content generation failed, please try again".to_string(),
                )
            }
            AppError::MalformedSchedule(e) => {
                tracing::error!("Malformed schedule from generator: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MALFORMED_SCHEDULE",
                    "Content generation returned an unusable plan, please try again".to_string(),
                )
            }
            AppError::Export(e) => {
                tracing::error!("Export error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EXPORT_ERROR",
                    "The calendar could not be exported".to_string(),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_reached_maps_to_429() {
        let response = AppError::GenerationLimitReached { limit: 3 }.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_llm_failure_maps_to_bad_gateway() {
        let response = AppError::Llm(LlmError::EmptyContent).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let response = AppError::Validation("niche".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

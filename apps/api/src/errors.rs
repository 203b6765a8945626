use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::selection::catalog::CatalogError;
use crate::selection::criteria::CriteriaError;
use crate::selection::selector::SelectionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("No suitable template: {0}")]
    NoSuitableTemplate(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<CriteriaError> for AppError {
    fn from(err: CriteriaError) -> Self {
        match err {
            CriteriaError::Invalid(errors) => AppError::Validation(errors),
        }
    }
}

impl From<SelectionError> for AppError {
    fn from(err: SelectionError) -> Self {
        match err {
            SelectionError::NoSuitableTemplate { .. } => {
                AppError::NoSuitableTemplate(err.to_string())
            }
            SelectionError::EmptyCatalog => AppError::Catalog(CatalogError::EmptyCatalog),
        }
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        AppError::Llm(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone(), vec![]),
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Invalid selection criteria".to_string(),
                errors.clone(),
            ),
            AppError::NoSuitableTemplate(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "NO_SUITABLE_TEMPLATE",
                msg.clone(),
                vec![],
            ),
            AppError::Catalog(e) => {
                tracing::error!("Catalog error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CATALOG_ERROR",
                    "The template catalog is misconfigured".to_string(),
                    vec![],
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "Content generation failed".to_string(),
                    vec![],
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                    vec![],
                )
            }
        };

        let mut error = json!({
            "code": code,
            "message": message
        });
        if !details.is_empty() {
            error["details"] = json!(details);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

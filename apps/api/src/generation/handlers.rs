//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::generation::generator::{generate_landing_page, GenerateRequest, GenerateResponse};
use crate::state::AppState;

/// POST /api/v1/landing-pages/generate
///
/// Validates criteria, picks a template and fills it with generated copy.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let response =
        generate_landing_page(&state.catalog, state.content_generator.as_ref(), request).await?;
    Ok(Json(response))
}

//! Axum route handlers for the Template API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::selection::alternatives::list_alternatives;
use crate::selection::criteria::{validate, CriteriaInput};
use crate::selection::models::{ScoredCandidate, TemplateRecord};
use crate::selection::selector::{select, SelectOptions, SelectionResult, DEFAULT_MAX_ALTERNATIVES};
use crate::selection::statistics::{catalog_statistics, CatalogStatistics};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    pub templates: Vec<TemplateRecord>,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub errors: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    #[serde(flatten)]
    pub criteria: CriteriaInput,
    #[serde(default)]
    pub options: SelectOptions,
}

fn default_max_results() -> usize {
    DEFAULT_MAX_ALTERNATIVES
}

#[derive(Debug, Deserialize)]
pub struct AlternativesRequest {
    #[serde(flatten)]
    pub criteria: CriteriaInput,
    #[serde(default = "default_max_results", alias = "maxResults")]
    pub max_results: usize,
}

#[derive(Debug, Serialize)]
pub struct AlternativesResponse {
    pub alternatives: Vec<ScoredCandidate>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/templates
pub async fn handle_list_templates(State(state): State<AppState>) -> Json<TemplateListResponse> {
    Json(TemplateListResponse {
        templates: state.catalog.records().to_vec(),
    })
}

/// GET /api/v1/templates/:id
pub async fn handle_get_template(
    State(state): State<AppState>,
    Path(template_id): Path<String>,
) -> Result<Json<TemplateRecord>, AppError> {
    state
        .catalog
        .get(&template_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Template '{template_id}' not found")))
}

/// GET /api/v1/catalog/statistics
pub async fn handle_catalog_statistics(State(state): State<AppState>) -> Json<CatalogStatistics> {
    Json(catalog_statistics(&state.catalog))
}

/// POST /api/v1/criteria/validate
///
/// Always 200: the body says whether the criteria are usable.
pub async fn handle_validate(Json(input): Json<CriteriaInput>) -> Json<ValidateResponse> {
    let errors = validate(&input);
    Json(ValidateResponse {
        valid: errors.is_empty(),
        errors,
    })
}

/// POST /api/v1/templates/select
pub async fn handle_select(
    State(state): State<AppState>,
    Json(request): Json<SelectRequest>,
) -> Result<Json<SelectionResult>, AppError> {
    let criteria = request.criteria.into_criteria()?;
    let result = select(&state.catalog, &criteria, &request.options)?;
    Ok(Json(result))
}

/// POST /api/v1/templates/alternatives
///
/// Ranked shortlist, including the would-be primary pick at index 0.
pub async fn handle_alternatives(
    State(state): State<AppState>,
    Json(request): Json<AlternativesRequest>,
) -> Result<Json<AlternativesResponse>, AppError> {
    let criteria = request.criteria.into_criteria()?;
    Ok(Json(AlternativesResponse {
        alternatives: list_alternatives(&state.catalog, &criteria, request.max_results),
    }))
}

pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::selection::handlers as selection;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Template API
        .route("/api/v1/templates", get(selection::handle_list_templates))
        .route("/api/v1/templates/select", post(selection::handle_select))
        .route(
            "/api/v1/templates/alternatives",
            post(selection::handle_alternatives),
        )
        .route("/api/v1/templates/:id", get(selection::handle_get_template))
        .route(
            "/api/v1/catalog/statistics",
            get(selection::handle_catalog_statistics),
        )
        .route("/api/v1/criteria/validate", post(selection::handle_validate))
        // Generation API
        .route(
            "/api/v1/landing-pages/generate",
            post(generation::handle_generate),
        )
        .with_state(state)
}

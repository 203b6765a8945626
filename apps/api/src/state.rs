use std::sync::Arc;

use crate::generation::content::ContentGenerator;
use crate::selection::catalog::TemplateCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only for the life of the process.
    pub catalog: Arc<TemplateCatalog>,
    /// Pluggable copy generator. Default: LlmContentGenerator.
    pub content_generator: Arc<dyn ContentGenerator>,
}

//! Landing page generation pipeline.
//!
//! Flow: validate criteria → pick template (explicit id or `select`) →
//!       content generator → response.
//!
//! Stateless: nothing is persisted, every call recomputes from the catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::content::ContentGenerator;
use crate::selection::catalog::TemplateCatalog;
use crate::selection::criteria::{CriteriaInput, SelectionCriteria};
use crate::selection::fallback::is_low_confidence;
use crate::selection::models::ScoredCandidate;
use crate::selection::scorer::{score, ScoringWeights};
use crate::selection::selector::{select, SelectOptions, SelectionResult};

/// Request body for landing page generation.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    #[serde(flatten)]
    pub criteria: CriteriaInput,
    /// Skips selection and uses this template.
    #[serde(default, alias = "templateId")]
    pub template_id: Option<String>,
    #[serde(default)]
    pub options: SelectOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub generation_id: Uuid,
    pub template_id: String,
    pub template_path: String,
    pub match_score: u32,
    pub reasoning: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<ScoredCandidate>>,
    pub is_fallback: bool,
    /// Score at or below the fallback sentinel; the UI should flag the pick.
    pub low_confidence: bool,
    pub content: Value,
    pub generator_backend: String,
    pub generated_at: DateTime<Utc>,
}

/// Runs the generation pipeline for one request.
pub async fn generate_landing_page(
    catalog: &TemplateCatalog,
    generator: &dyn ContentGenerator,
    request: GenerateRequest,
) -> Result<GenerateResponse, AppError> {
    let criteria = request.criteria.into_criteria()?;

    let selection = match request.template_id.as_deref() {
        Some(id) => explicit_selection(catalog, &criteria, id)?,
        None => select(catalog, &criteria, &request.options)?,
    };

    info!(
        "Generating copy with template {} (score {}, fallback {})",
        selection.template.id, selection.match_score, selection.is_fallback
    );

    let content = generator.generate(&criteria, &selection.template).await?;

    Ok(GenerateResponse {
        generation_id: Uuid::new_v4(),
        template_id: selection.template.id,
        template_path: selection.template.path,
        match_score: selection.match_score,
        reasoning: selection.reasoning,
        alternatives: selection.alternatives,
        is_fallback: selection.is_fallback,
        low_confidence: is_low_confidence(selection.match_score),
        content: content.payload,
        generator_backend: content.generator_backend,
        generated_at: Utc::now(),
    })
}

/// The caller chose the template; its score is still reported so the UI can
/// show how well the choice fits.
fn explicit_selection(
    catalog: &TemplateCatalog,
    criteria: &SelectionCriteria,
    template_id: &str,
) -> Result<SelectionResult, AppError> {
    let template = catalog
        .get(template_id)
        .ok_or_else(|| AppError::NotFound(format!("Template '{template_id}' not found")))?;

    let (match_score, mut reasoning) = score(template, criteria, &ScoringWeights::default());
    reasoning.insert(0, "template chosen explicitly by request".to_string());

    Ok(SelectionResult {
        template: template.clone(),
        match_score,
        reasoning,
        alternatives: None,
        is_fallback: false,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::generation::content::GeneratedContent;
    use crate::selection::models::TemplateRecord;
    use async_trait::async_trait;
    use serde_json::json;

    /// Returns a fixed payload instead of calling an LLM.
    pub(crate) struct StaticContentGenerator;

    #[async_trait]
    impl ContentGenerator for StaticContentGenerator {
        async fn generate(
            &self,
            criteria: &SelectionCriteria,
            template: &TemplateRecord,
        ) -> Result<GeneratedContent, AppError> {
            Ok(GeneratedContent {
                payload: json!({
                    "hero": { "headline": format!("{} for {}", template.name, criteria.industry) }
                }),
                generator_backend: "static".to_string(),
            })
        }
    }

    fn request(value: Value) -> GenerateRequest {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_generate_selects_best_template() {
        let catalog = TemplateCatalog::builtin().unwrap();
        let response = generate_landing_page(
            &catalog,
            &StaticContentGenerator,
            request(json!({
                "business_category": "saas",
                "style_preference": "modern",
                "industry": "tech",
                "target_audience": "developers"
            })),
        )
        .await
        .unwrap();

        assert_eq!(response.template_id, "saas-modern");
        assert_eq!(response.match_score, 130);
        assert_eq!(response.template_path, "/templates/saas-modern");
        assert!(!response.is_fallback);
        assert!(!response.low_confidence);
        assert_eq!(response.generator_backend, "static");
        assert_eq!(response.content["hero"]["headline"], "SaaS Modern for tech");
    }

    #[tokio::test]
    async fn test_generate_with_explicit_template() {
        let catalog = TemplateCatalog::builtin().unwrap();
        let response = generate_landing_page(
            &catalog,
            &StaticContentGenerator,
            request(json!({
                "businessCategory": "saas",
                "stylePreference": "modern",
                "industry": "tech",
                "templateId": "agency-playful"
            })),
        )
        .await
        .unwrap();

        assert_eq!(response.template_id, "agency-playful");
        assert_eq!(response.match_score, 40);
        assert_eq!(response.reasoning[0], "template chosen explicitly by request");
    }

    #[tokio::test]
    async fn test_generate_unknown_template_is_not_found() {
        let catalog = TemplateCatalog::builtin().unwrap();
        let err = generate_landing_page(
            &catalog,
            &StaticContentGenerator,
            request(json!({
                "business_category": "saas",
                "style_preference": "modern",
                "industry": "tech",
                "template_id": "nope"
            })),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_generate_rejects_invalid_criteria() {
        let catalog = TemplateCatalog::builtin().unwrap();
        let err = generate_landing_page(
            &catalog,
            &StaticContentGenerator,
            request(json!({ "business_category": "saas", "industry": "finance" })),
        )
        .await
        .unwrap_err();
        match err {
            AppError::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_surfaces_no_suitable_template() {
        let catalog = TemplateCatalog::builtin().unwrap();
        let err = generate_landing_page(
            &catalog,
            &StaticContentGenerator,
            request(json!({
                "business_category": "corporate",
                "style_preference": "bold",
                "industry": "retail",
                "options": { "fallback_enabled": false, "require_exact_match": true }
            })),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::NoSuitableTemplate(_)));
    }
}

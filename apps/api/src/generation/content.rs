//! Pluggable, trait-based producer of landing page copy.
//!
//! Default: `LlmContentGenerator` (Claude via `llm_client`).
//! `AppState` holds an `Arc<dyn ContentGenerator>` so handlers and tests can
//! swap the backend without touching selection code.
//!
//! The payload is opaque JSON: its shape is owned by the template, not by
//! the service. The only check made here is that it is a JSON object.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::{style_tone, CONTENT_PROMPT_TEMPLATE, CONTENT_SYSTEM};
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, NO_FABRICATION_INSTRUCTION};
use crate::llm_client::LlmClient;
use crate::selection::criteria::SelectionCriteria;
use crate::selection::models::TemplateRecord;

/// Copy produced for one template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub payload: Value,
    /// "llm" or "static".
    pub generator_backend: String,
}

#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(
        &self,
        criteria: &SelectionCriteria,
        template: &TemplateRecord,
    ) -> Result<GeneratedContent, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmContentGenerator
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmContentGenerator(pub LlmClient);

#[async_trait]
impl ContentGenerator for LlmContentGenerator {
    async fn generate(
        &self,
        criteria: &SelectionCriteria,
        template: &TemplateRecord,
    ) -> Result<GeneratedContent, AppError> {
        let prompt = build_content_prompt(criteria, template)?;
        let system = format!("{CONTENT_SYSTEM} {JSON_ONLY_SYSTEM}");

        let payload: Value = self
            .0
            .call_json::<Value>(&prompt, &system)
            .await
            .map_err(|e| AppError::Llm(format!("Content generation for '{}' failed: {e}", template.id)))?;

        if !payload.is_object() {
            return Err(AppError::Llm(format!(
                "Content generation for '{}' returned a non-object payload",
                template.id
            )));
        }

        info!("Generated copy for template {}", template.id);

        Ok(GeneratedContent {
            payload,
            generator_backend: "llm".to_string(),
        })
    }
}

/// Fills the prompt template with template metadata and criteria.
pub fn build_content_prompt(
    criteria: &SelectionCriteria,
    template: &TemplateRecord,
) -> Result<String, AppError> {
    let features_json = serde_json::to_string(&template.features)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize features: {e}")))?;

    let audience = criteria
        .target_audience
        .as_deref()
        .unwrap_or("general audience (not specified)");

    Ok(CONTENT_PROMPT_TEMPLATE
        .replace("{template_name}", &template.name)
        .replace("{template_description}", &template.description)
        .replace("{features_json}", &features_json)
        .replace("{template_category}", template.category.as_str())
        .replace("{category}", criteria.business_category.as_str())
        .replace("{style}", template.style.as_str())
        .replace("{style_tone}", style_tone(template.style))
        .replace("{industry}", criteria.industry.as_str())
        .replace("{audience}", audience)
        .replace("{no_fabrication_instruction}", NO_FABRICATION_INSTRUCTION))
}

//! Selection criteria and the boundary validator that produces them.
//!
//! Raw user input arrives as strings (`CriteriaInput`). `validate` reports every
//! field outside its closed enumeration; only input that passes becomes a typed
//! `SelectionCriteria`, so the scoring code never sees an invalid value.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::selection::models::{BusinessCategory, Industry, StylePreference, UnknownVariant};

/// Validated per-request criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionCriteria {
    pub business_category: BusinessCategory,
    pub style_preference: StylePreference,
    pub industry: Industry,
    /// Carried through to content generation, never scored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
}

/// Unvalidated criteria exactly as received from the client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CriteriaInput {
    #[serde(default, alias = "businessCategory")]
    pub business_category: String,
    #[serde(default, alias = "stylePreference")]
    pub style_preference: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default, alias = "targetAudience")]
    pub target_audience: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("invalid criteria: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Returns one message per invalid required field; empty when the input is valid.
pub fn validate(input: &CriteriaInput) -> Vec<String> {
    let mut errors = Vec::new();

    if let Some(message) = check_field::<BusinessCategory>(
        "business category",
        &input.business_category,
        &BusinessCategory::ALL.map(|v| v.as_str()),
    ) {
        errors.push(message);
    }
    if let Some(message) = check_field::<StylePreference>(
        "style preference",
        &input.style_preference,
        &StylePreference::ALL.map(|v| v.as_str()),
    ) {
        errors.push(message);
    }
    if let Some(message) =
        check_field::<Industry>("industry", &input.industry, &Industry::ALL.map(|v| v.as_str()))
    {
        errors.push(message);
    }

    errors
}

fn check_field<T>(label: &str, value: &str, allowed: &[&str]) -> Option<String>
where
    T: FromStr<Err = UnknownVariant>,
{
    if value.trim().is_empty() {
        return Some(format!(
            "{label} is required (one of: {})",
            allowed.join(", ")
        ));
    }
    match value.parse::<T>() {
        Ok(_) => None,
        Err(UnknownVariant(raw)) => Some(format!(
            "invalid {label} '{raw}': must be one of {}",
            allowed.join(", ")
        )),
    }
}

impl CriteriaInput {
    /// Gates on `validate` and converts into typed criteria.
    pub fn into_criteria(self) -> Result<SelectionCriteria, CriteriaError> {
        let errors = validate(&self);
        if !errors.is_empty() {
            return Err(CriteriaError::Invalid(errors));
        }

        let invalid = |_: UnknownVariant| CriteriaError::Invalid(validate(&self));
        let business_category = self.business_category.parse().map_err(invalid)?;
        let style_preference = self.style_preference.parse().map_err(invalid)?;
        let industry = self.industry.parse().map_err(invalid)?;

        let target_audience = self
            .target_audience
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(SelectionCriteria {
            business_category,
            style_preference,
            industry,
            target_audience,
        })
    }
}

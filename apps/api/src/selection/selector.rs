//! Selector — picks the best template for a set of criteria.
//!
//! Algorithm:
//! 1. Score every catalog entry (`scorer::score_catalog`), sorted descending, stable.
//! 2. Accept the top candidate if it reaches the threshold
//!    (50, or 90 when `require_exact_match`).
//! 3. Otherwise hand off to the fallback resolver, or fail with
//!    `NoSuitableTemplate` when fallback is disabled.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::selection::alternatives::secondary_alternatives;
use crate::selection::catalog::TemplateCatalog;
use crate::selection::criteria::SelectionCriteria;
use crate::selection::fallback::resolve_fallback;
use crate::selection::models::{BusinessCategory, ScoredCandidate, StylePreference, TemplateRecord};
use crate::selection::scorer::{score_catalog, ScoringWeights};

/// Accept threshold for a normal selection.
pub const MINIMUM_SCORE: u32 = 50;
/// Accept threshold when an exact match is required (category + style = 50 + 40).
pub const EXACT_MATCH_SCORE: u32 = 90;

pub const DEFAULT_MAX_ALTERNATIVES: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no suitable template for category '{category}' with style '{style}'")]
    NoSuitableTemplate {
        category: BusinessCategory,
        style: StylePreference,
    },

    #[error("template catalog is empty")]
    EmptyCatalog,
}

/// Per-call selection knobs. Missing JSON fields take the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectOptions {
    pub fallback_enabled: bool,
    pub require_exact_match: bool,
    pub include_alternatives: bool,
    pub max_alternatives: usize,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            fallback_enabled: true,
            require_exact_match: false,
            include_alternatives: false,
            max_alternatives: DEFAULT_MAX_ALTERNATIVES,
        }
    }
}

/// Outcome of `select`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    pub template: TemplateRecord,
    pub match_score: u32,
    pub reasoning: Vec<String>,
    /// Runner-up candidates, present only when requested on an accepted pick.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<ScoredCandidate>>,
    pub is_fallback: bool,
}

pub fn minimum_score(require_exact_match: bool) -> u32 {
    if require_exact_match {
        EXACT_MATCH_SCORE
    } else {
        MINIMUM_SCORE
    }
}

/// Selects a template. Assumes `criteria` has already been validated.
pub fn select(
    catalog: &TemplateCatalog,
    criteria: &SelectionCriteria,
    options: &SelectOptions,
) -> Result<SelectionResult, SelectionError> {
    let best = score_catalog(catalog, criteria, &ScoringWeights::default())
        .into_iter()
        .next()
        .ok_or(SelectionError::EmptyCatalog)?;
    let threshold = minimum_score(options.require_exact_match);

    debug!(
        "Best candidate for {}/{}/{}: {} ({} pts, threshold {})",
        criteria.business_category,
        criteria.style_preference,
        criteria.industry,
        best.template.id,
        best.match_score,
        threshold
    );

    if best.match_score >= threshold {
        let alternatives = options
            .include_alternatives
            .then(|| secondary_alternatives(catalog, criteria, options.max_alternatives));

        return Ok(SelectionResult {
            template: best.template,
            match_score: best.match_score,
            reasoning: best.reasoning,
            alternatives,
            is_fallback: false,
        });
    }

    if !options.fallback_enabled {
        return Err(SelectionError::NoSuitableTemplate {
            category: criteria.business_category,
            style: criteria.style_preference,
        });
    }

    let fallback = resolve_fallback(catalog, criteria);
    warn!(
        "No template reached {} pts for {}/{} (best {}); falling back to {}",
        threshold,
        criteria.business_category,
        criteria.style_preference,
        best.match_score,
        fallback.template.id
    );

    Ok(SelectionResult {
        template: fallback.template,
        match_score: fallback.match_score,
        reasoning: fallback.reasoning,
        alternatives: None,
        is_fallback: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::fallback::FALLBACK_SCORE;
    use crate::selection::models::{Capabilities, Industry};
    use crate::selection::scorer::tests::{make_criteria, make_template};
    use crate::selection::scorer::{
        REASON_CAPABILITIES, REASON_CATEGORY, REASON_INDUSTRY, REASON_STYLE,
    };

    const PARTIAL: Capabilities = Capabilities {
        supports_mobile: true,
        supports_desktop: true,
        supports_accessibility: false,
    };

    fn saas_catalog() -> TemplateCatalog {
        TemplateCatalog::new(vec![
            make_template(
                "saas-minimalist",
                BusinessCategory::Saas,
                StylePreference::Minimalist,
                &[Industry::Tech],
                PARTIAL,
            ),
            make_template(
                "saas-modern",
                BusinessCategory::Saas,
                StylePreference::Modern,
                &[Industry::Tech, Industry::Healthcare],
                Capabilities::FULL,
            ),
            make_template(
                "agency-playful",
                BusinessCategory::Agency,
                StylePreference::Playful,
                &[Industry::Education],
                Capabilities::FULL,
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_perfect_match_selected_with_full_reasoning() {
        let criteria = make_criteria(BusinessCategory::Saas, StylePreference::Modern, Industry::Tech);
        let result = select(&saas_catalog(), &criteria, &SelectOptions::default()).unwrap();

        assert_eq!(result.template.id, "saas-modern");
        assert_eq!(result.match_score, 130);
        assert_eq!(
            result.reasoning,
            vec![REASON_CATEGORY, REASON_STYLE, REASON_INDUSTRY, REASON_CAPABILITIES]
        );
        assert!(!result.is_fallback);
        assert!(result.alternatives.is_none());
    }

    #[test]
    fn test_alternatives_exclude_pick_and_respect_limit() {
        let criteria = make_criteria(BusinessCategory::Saas, StylePreference::Modern, Industry::Tech);
        let options = SelectOptions {
            include_alternatives: true,
            max_alternatives: 1,
            ..SelectOptions::default()
        };
        let result = select(&saas_catalog(), &criteria, &options).unwrap();
        let alternatives = result.alternatives.unwrap();
        assert_eq!(alternatives.len(), 1);
        assert_eq!(alternatives[0].template.id, "saas-minimalist");
        assert_eq!(alternatives[0].match_score, 80);
    }

    #[test]
    fn test_exact_match_threshold_rejects_category_only_pick() {
        // saas-modern tops saas/bold/retail with 50 + 15 + 10 = 75: enough normally, not for exact.
        let criteria = make_criteria(BusinessCategory::Saas, StylePreference::Bold, Industry::Retail);
        let catalog = saas_catalog();

        let normal = select(&catalog, &criteria, &SelectOptions::default()).unwrap();
        assert!(!normal.is_fallback);
        assert_eq!(normal.template.id, "saas-modern");
        assert_eq!(normal.match_score, 75);

        let exact = SelectOptions {
            require_exact_match: true,
            fallback_enabled: false,
            ..SelectOptions::default()
        };
        assert_eq!(
            select(&catalog, &criteria, &exact).unwrap_err(),
            SelectionError::NoSuitableTemplate {
                category: BusinessCategory::Saas,
                style: StylePreference::Bold,
            }
        );

        let exact_with_fallback = SelectOptions {
            require_exact_match: true,
            ..SelectOptions::default()
        };
        let result = select(&catalog, &criteria, &exact_with_fallback).unwrap();
        assert!(result.is_fallback);
        assert_eq!(result.template.id, "saas-minimalist");
    }

    #[test]
    fn test_sub_threshold_uses_fallback_by_default() {
        let criteria =
            make_criteria(BusinessCategory::Corporate, StylePreference::Bold, Industry::Retail);
        let result = select(&saas_catalog(), &criteria, &SelectOptions::default()).unwrap();
        assert!(result.is_fallback);
        assert_eq!(result.match_score, FALLBACK_SCORE);
        assert!(result.reasoning[0].contains("fallback"));
        assert!(result.alternatives.is_none());
    }

    #[test]
    fn test_sub_threshold_without_fallback_errors() {
        let criteria =
            make_criteria(BusinessCategory::Corporate, StylePreference::Bold, Industry::Retail);
        let options = SelectOptions {
            fallback_enabled: false,
            ..SelectOptions::default()
        };
        let err = select(&saas_catalog(), &criteria, &options).unwrap_err();
        assert!(err.to_string().contains("corporate"));
        assert!(err.to_string().contains("bold"));
    }

    #[test]
    fn test_threshold_consistency_over_all_criteria() {
        let catalog = TemplateCatalog::builtin().unwrap();
        for category in BusinessCategory::ALL {
            for style in StylePreference::ALL {
                for industry in Industry::ALL {
                    let criteria = make_criteria(category, style, industry);
                    for exact in [false, true] {
                        let options = SelectOptions {
                            require_exact_match: exact,
                            ..SelectOptions::default()
                        };
                        let result = select(&catalog, &criteria, &options).unwrap();
                        if !result.is_fallback {
                            assert!(result.match_score >= minimum_score(exact));
                        } else {
                            assert_eq!(result.match_score, FALLBACK_SCORE);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_select_is_deterministic() {
        let catalog = TemplateCatalog::builtin().unwrap();
        let criteria =
            make_criteria(BusinessCategory::Ecommerce, StylePreference::Elegant, Industry::Retail);
        let options = SelectOptions {
            include_alternatives: true,
            ..SelectOptions::default()
        };
        let first = select(&catalog, &criteria, &options).unwrap();
        for _ in 0..5 {
            assert_eq!(select(&catalog, &criteria, &options).unwrap(), first);
        }
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: SelectOptions =
            serde_json::from_value(serde_json::json!({ "require_exact_match": true })).unwrap();
        assert!(options.require_exact_match);
        assert!(options.fallback_enabled);
        assert_eq!(options.max_alternatives, DEFAULT_MAX_ALTERNATIVES);
    }
}

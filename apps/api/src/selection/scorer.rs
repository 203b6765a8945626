//! Scorer — additive, rule-based match score for one (template, criteria) pair.
//!
//! Rules, each applied at most once:
//! 1. category match            → `weights.category`
//! 2. style match               → `weights.style`
//! 3. industry match            → `weights.industry`
//!    else related industry     → `weights.related_industry` (template must claim ≥1 industry)
//! 4. all capability flags set  → `weights.full_capabilities`
//!
//! Pure and deterministic. No I/O.

use serde::{Deserialize, Serialize};

use crate::selection::catalog::TemplateCatalog;
use crate::selection::criteria::SelectionCriteria;
use crate::selection::models::{Industry, ScoredCandidate, TemplateRecord};

pub const REASON_CATEGORY: &str = "perfect category match";
pub const REASON_STYLE: &str = "perfect style match";
pub const REASON_INDUSTRY: &str = "optimized for industry";
pub const REASON_RELATED_INDUSTRY: &str = "compatible with related industries";
pub const REASON_CAPABILITIES: &str = "full capability support";

/// Points awarded per rule. The defaults are fixed business constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub category: u32,
    pub style: u32,
    pub industry: u32,
    pub related_industry: u32,
    pub full_capabilities: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            category: 50,
            style: 40,
            industry: 30,
            related_industry: 15,
            full_capabilities: 10,
        }
    }
}

/// Industries treated as adjacent to the requested one.
///
/// Not symmetric: a retail request accepts tech templates, but no request
/// accepts a retail-only template as related.
pub fn related_industries(industry: Industry) -> &'static [Industry] {
    match industry {
        Industry::Tech => &[Industry::Healthcare, Industry::Education],
        Industry::Healthcare => &[Industry::Tech, Industry::Education],
        Industry::Education => &[Industry::Tech, Industry::Healthcare],
        Industry::Retail => &[Industry::Tech],
    }
}

/// Scores one template. Returns the point total and reasoning in rule order.
pub fn score(
    template: &TemplateRecord,
    criteria: &SelectionCriteria,
    weights: &ScoringWeights,
) -> (u32, Vec<String>) {
    let mut total = 0;
    let mut reasoning = Vec::new();

    if template.category == criteria.business_category {
        total += weights.category;
        reasoning.push(REASON_CATEGORY.to_string());
    }

    if template.style == criteria.style_preference {
        total += weights.style;
        reasoning.push(REASON_STYLE.to_string());
    }

    if template.supports_industry(criteria.industry) {
        total += weights.industry;
        reasoning.push(REASON_INDUSTRY.to_string());
    } else if !template.supported_industries.is_empty() {
        let related = related_industries(criteria.industry);
        if template
            .supported_industries
            .iter()
            .any(|i| related.contains(i))
        {
            total += weights.related_industry;
            reasoning.push(REASON_RELATED_INDUSTRY.to_string());
        }
    }

    if template.capabilities.is_full() {
        total += weights.full_capabilities;
        reasoning.push(REASON_CAPABILITIES.to_string());
    }

    (total, reasoning)
}

/// Scores every template and sorts descending by score.
///
/// `sort_by` is stable, so equal scores keep catalog order and the
/// first-registered template wins the tie.
pub fn score_catalog(
    catalog: &TemplateCatalog,
    criteria: &SelectionCriteria,
    weights: &ScoringWeights,
) -> Vec<ScoredCandidate> {
    let mut candidates: Vec<ScoredCandidate> = catalog
        .iter()
        .map(|template| {
            let (match_score, reasoning) = score(template, criteria, weights);
            ScoredCandidate {
                template: template.clone(),
                match_score,
                reasoning,
            }
        })
        .collect();

    candidates.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    candidates
}

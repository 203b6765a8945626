//! Fallback resolver: degraded pick used when nothing clears the acceptance threshold.

use crate::selection::catalog::TemplateCatalog;
use crate::selection::criteria::SelectionCriteria;
use crate::selection::models::ScoredCandidate;

/// Sentinel score assigned to fallback picks, not computed by the scorer.
/// Consumers treat any score at or below it as low confidence.
pub const FALLBACK_SCORE: u32 = 25;

pub fn is_low_confidence(match_score: u32) -> bool {
    match_score <= FALLBACK_SCORE
}

/// Search order: first category match, then first style match, then the
/// first catalog entry. Infallible because the catalog is never empty.
pub fn resolve_fallback(catalog: &TemplateCatalog, criteria: &SelectionCriteria) -> ScoredCandidate {
    let mut reasoning = vec!["fallback selection: no template met the minimum match score".to_string()];

    let template = if let Some(t) = catalog
        .iter()
        .find(|t| t.category == criteria.business_category)
    {
        reasoning.push(format!(
            "matched business category '{}' only",
            criteria.business_category
        ));
        t
    } else if let Some(t) = catalog
        .iter()
        .find(|t| t.style == criteria.style_preference)
    {
        reasoning.push(format!(
            "no '{}' template available; matched style '{}' only",
            criteria.business_category, criteria.style_preference
        ));
        t
    } else {
        reasoning.push("no category or style match; using the default template".to_string());
        catalog.first()
    };

    ScoredCandidate {
        template: template.clone(),
        match_score: FALLBACK_SCORE,
        reasoning,
    }
}

//! Alternatives reporter: ranked runner-up templates for a set of criteria.

use crate::selection::catalog::TemplateCatalog;
use crate::selection::criteria::SelectionCriteria;
use crate::selection::models::ScoredCandidate;
use crate::selection::scorer::{score_catalog, ScoringWeights};

/// Top `max_results` candidates, best first, including the one `select` would pick.
///
/// Recomputes the ranking from scratch on every call.
pub fn list_alternatives(
    catalog: &TemplateCatalog,
    criteria: &SelectionCriteria,
    max_results: usize,
) -> Vec<ScoredCandidate> {
    let mut ranked = score_catalog(catalog, criteria, &ScoringWeights::default());
    ranked.truncate(max_results);
    ranked
}

/// Up to `count` runner-up candidates with the primary pick removed, for
/// display next to a selection.
pub fn secondary_alternatives(
    catalog: &TemplateCatalog,
    criteria: &SelectionCriteria,
    count: usize,
) -> Vec<ScoredCandidate> {
    list_alternatives(catalog, criteria, count.saturating_add(1))
        .into_iter()
        .skip(1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::models::{BusinessCategory, Industry, StylePreference};
    use crate::selection::scorer::tests::make_criteria;
    use crate::selection::selector::{select, SelectOptions};

    #[test]
    fn test_at_most_n_sorted_descending() {
        let catalog = TemplateCatalog::builtin().unwrap();
        let criteria = make_criteria(BusinessCategory::Agency, StylePreference::Bold, Industry::Tech);

        for n in 0..=catalog.len() + 2 {
            let list = list_alternatives(&catalog, &criteria, n);
            assert!(list.len() <= n);
            assert!(list.windows(2).all(|w| w[0].match_score >= w[1].match_score));
        }
        assert_eq!(list_alternatives(&catalog, &criteria, 100).len(), catalog.len());
    }

    #[test]
    fn test_first_entry_matches_accepted_selection() {
        let catalog = TemplateCatalog::builtin().unwrap();
        for category in BusinessCategory::ALL {
            for style in StylePreference::ALL {
                for industry in Industry::ALL {
                    let criteria = make_criteria(category, style, industry);
                    let picked = select(&catalog, &criteria, &SelectOptions::default()).unwrap();
                    if picked.is_fallback {
                        continue;
                    }
                    let list = list_alternatives(&catalog, &criteria, 3);
                    assert_eq!(list[0].template.id, picked.template.id);
                    assert_eq!(list[0].match_score, picked.match_score);
                }
            }
        }
    }

    #[test]
    fn test_secondary_alternatives_drop_primary() {
        let catalog = TemplateCatalog::builtin().unwrap();
        let criteria = make_criteria(BusinessCategory::Saas, StylePreference::Modern, Industry::Tech);

        let secondary = secondary_alternatives(&catalog, &criteria, 3);
        assert_eq!(secondary.len(), 3);
        assert!(secondary.iter().all(|c| c.template.id != "saas-modern"));
        assert_eq!(secondary[0].template.id, "saas-minimalist");
    }

    #[test]
    fn test_secondary_alternatives_unbounded_count() {
        let catalog = TemplateCatalog::builtin().unwrap();
        let criteria = make_criteria(BusinessCategory::Saas, StylePreference::Modern, Industry::Tech);

        let secondary = secondary_alternatives(&catalog, &criteria, usize::MAX);
        assert_eq!(secondary.len(), catalog.len() - 1);
        assert!(secondary.iter().all(|c| c.template.id != "saas-modern"));
    }

    #[test]
    fn test_matches_selector_alternatives() {
        let catalog = TemplateCatalog::builtin().unwrap();
        let criteria =
            make_criteria(BusinessCategory::Ecommerce, StylePreference::Bold, Industry::Retail);
        let options = SelectOptions {
            include_alternatives: true,
            ..SelectOptions::default()
        };
        let picked = select(&catalog, &criteria, &options).unwrap();
        assert_eq!(
            picked.alternatives.unwrap(),
            secondary_alternatives(&catalog, &criteria, options.max_alternatives)
        );
    }
}

//! Aggregate counts over the catalog for the admin/debug view.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::selection::catalog::TemplateCatalog;
use crate::selection::models::{BusinessCategory, Industry, StylePreference};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStatistics {
    pub total_templates: usize,
    pub counts_by_category: BTreeMap<String, usize>,
    pub counts_by_style: BTreeMap<String, usize>,
    /// A template is counted once for every industry it supports.
    pub counts_by_industry: BTreeMap<String, usize>,
}

/// Every enum variant is present in its map, with zero when unused.
pub fn catalog_statistics(catalog: &TemplateCatalog) -> CatalogStatistics {
    let mut counts_by_category: BTreeMap<String, usize> = BusinessCategory::ALL
        .iter()
        .map(|c| (c.as_str().to_string(), 0))
        .collect();
    let mut counts_by_style: BTreeMap<String, usize> = StylePreference::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), 0))
        .collect();
    let mut counts_by_industry: BTreeMap<String, usize> = Industry::ALL
        .iter()
        .map(|i| (i.as_str().to_string(), 0))
        .collect();

    for template in catalog.iter() {
        *counts_by_category
            .entry(template.category.as_str().to_string())
            .or_insert(0) += 1;
        *counts_by_style
            .entry(template.style.as_str().to_string())
            .or_insert(0) += 1;
        for industry in &template.supported_industries {
            *counts_by_industry
                .entry(industry.as_str().to_string())
                .or_insert(0) += 1;
        }
    }

    CatalogStatistics {
        total_templates: catalog.len(),
        counts_by_category,
        counts_by_style,
        counts_by_industry,
    }
}

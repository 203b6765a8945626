//! Read-only list of landing page templates.
//!
//! Built once in `main` and shared through `AppState` as `Arc<TemplateCatalog>`.
//! Catalog order matters: it breaks score ties and drives fallback search.

use std::collections::HashSet;

use thiserror::Error;

use crate::selection::models::{
    BusinessCategory, Capabilities, Industry, StylePreference, TemplateRecord,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("template catalog is empty")]
    EmptyCatalog,

    #[error("duplicate template id '{0}' in catalog")]
    DuplicateTemplateId(String),
}

/// Ordered, non-empty, immutable collection of templates.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: Vec<TemplateRecord>,
}

impl TemplateCatalog {
    /// Rejects an empty list and duplicate ids. Order is preserved.
    pub fn new(templates: Vec<TemplateRecord>) -> Result<Self, CatalogError> {
        if templates.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for template in &templates {
            if !seen.insert(template.id.as_str()) {
                return Err(CatalogError::DuplicateTemplateId(template.id.clone()));
            }
        }

        Ok(Self { templates })
    }

    /// The production catalog shipped with the service.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(builtin_templates())
    }

    pub fn get(&self, id: &str) -> Option<&TemplateRecord> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemplateRecord> {
        self.templates.iter()
    }

    pub fn records(&self) -> &[TemplateRecord] {
        &self.templates
    }

    pub fn first(&self) -> &TemplateRecord {
        // non-empty by construction
        &self.templates[0]
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static configuration
// ────────────────────────────────────────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
fn template(
    id: &str,
    name: &str,
    description: &str,
    category: BusinessCategory,
    style: StylePreference,
    industries: &[Industry],
    capabilities: Capabilities,
    features: &[&str],
) -> TemplateRecord {
    TemplateRecord {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        style,
        supported_industries: industries.to_vec(),
        capabilities,
        features: features.iter().map(|f| f.to_string()).collect(),
        path: format!("/templates/{id}"),
    }
}

const DESKTOP_AND_MOBILE: Capabilities = Capabilities {
    supports_mobile: true,
    supports_desktop: true,
    supports_accessibility: false,
};

fn builtin_templates() -> Vec<TemplateRecord> {
    use BusinessCategory::*;
    use Industry::*;
    use StylePreference::*;

    vec![
        template(
            "saas-modern",
            "SaaS Modern",
            "Gradient hero, product screenshots and tiered pricing for software products.",
            Saas,
            Modern,
            &[Tech, Healthcare],
            Capabilities::FULL,
            &["hero with product screenshot", "feature grid", "pricing tiers", "testimonials", "signup call to action"],
        ),
        template(
            "saas-minimalist",
            "SaaS Minimalist",
            "Whitespace-heavy layout with a single focused signup flow.",
            Saas,
            Minimalist,
            &[Tech],
            DESKTOP_AND_MOBILE,
            &["headline and subheadline", "three-step how it works", "single signup form"],
        ),
        template(
            "ecommerce-bold",
            "E-commerce Bold",
            "High-contrast storefront with oversized product imagery and promo banners.",
            Ecommerce,
            Bold,
            &[Retail],
            Capabilities::FULL,
            &["promo banner", "featured products carousel", "category tiles", "newsletter signup"],
        ),
        template(
            "ecommerce-elegant",
            "E-commerce Elegant",
            "Editorial product storytelling for premium goods.",
            Ecommerce,
            Elegant,
            &[Retail],
            DESKTOP_AND_MOBILE,
            &["editorial hero", "collection showcase", "brand story", "reviews"],
        ),
        template(
            "agency-playful",
            "Agency Playful",
            "Colorful portfolio layout with animated case study cards.",
            Agency,
            Playful,
            &[Tech, Education],
            Capabilities::FULL,
            &["portfolio grid", "case studies", "team section", "contact form"],
        ),
        template(
            "agency-bold",
            "Agency Bold",
            "Big typography and full-bleed work samples for creative studios.",
            Agency,
            Bold,
            &[Tech],
            DESKTOP_AND_MOBILE,
            &["statement hero", "selected work", "services list", "client logos"],
        ),
        template(
            "corporate-elegant",
            "Corporate Elegant",
            "Trust-focused layout for established organisations.",
            Corporate,
            Elegant,
            &[Healthcare, Education],
            Capabilities::FULL,
            &["mission statement", "services overview", "leadership team", "contact details"],
        ),
        template(
            "corporate-minimalist",
            "Corporate Minimalist",
            "Plain, fast-loading company page with no industry specialisation.",
            Corporate,
            Minimalist,
            &[],
            Capabilities::FULL,
            &["about section", "services list", "contact details"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = TemplateCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.first().id, "saas-modern");
    }

    #[test]
    fn test_builtin_catalog_covers_every_category() {
        let catalog = TemplateCatalog::builtin().unwrap();
        for category in BusinessCategory::ALL {
            assert!(
                catalog.iter().any(|t| t.category == category),
                "no template for {category}"
            );
        }
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(
            TemplateCatalog::new(vec![]).unwrap_err(),
            CatalogError::EmptyCatalog
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut templates = builtin_templates();
        let copy = templates[2].clone();
        templates.push(copy);
        assert_eq!(
            TemplateCatalog::new(templates).unwrap_err(),
            CatalogError::DuplicateTemplateId("ecommerce-bold".to_string())
        );
    }

    #[test]
    fn test_get_by_id() {
        let catalog = TemplateCatalog::builtin().unwrap();
        let found = catalog.get("agency-playful").unwrap();
        assert_eq!(found.style, StylePreference::Playful);
        assert_eq!(found.path, "/templates/agency-playful");
        assert!(catalog.get("does-not-exist").is_none());
    }
}

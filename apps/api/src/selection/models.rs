//! Closed domain enums and the template/candidate records shared by the selection engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Closed enumerations
// ────────────────────────────────────────────────────────────────────────────

/// Kind of business the landing page is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessCategory {
    Saas,
    Ecommerce,
    Agency,
    Corporate,
}

impl BusinessCategory {
    pub const ALL: [BusinessCategory; 4] = [
        BusinessCategory::Saas,
        BusinessCategory::Ecommerce,
        BusinessCategory::Agency,
        BusinessCategory::Corporate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessCategory::Saas => "saas",
            BusinessCategory::Ecommerce => "ecommerce",
            BusinessCategory::Agency => "agency",
            BusinessCategory::Corporate => "corporate",
        }
    }
}

/// Visual style the user prefers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylePreference {
    Minimalist,
    Modern,
    Bold,
    Elegant,
    Playful,
}

impl StylePreference {
    pub const ALL: [StylePreference; 5] = [
        StylePreference::Minimalist,
        StylePreference::Modern,
        StylePreference::Bold,
        StylePreference::Elegant,
        StylePreference::Playful,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StylePreference::Minimalist => "minimalist",
            StylePreference::Modern => "modern",
            StylePreference::Bold => "bold",
            StylePreference::Elegant => "elegant",
            StylePreference::Playful => "playful",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Tech,
    Healthcare,
    Education,
    Retail,
}

impl Industry {
    pub const ALL: [Industry; 4] = [
        Industry::Tech,
        Industry::Healthcare,
        Industry::Education,
        Industry::Retail,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Tech => "tech",
            Industry::Healthcare => "healthcare",
            Industry::Education => "education",
            Industry::Retail => "retail",
        }
    }
}

/// Returned by the `FromStr` impls when a value is outside its enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

macro_rules! closed_enum_parsing {
    ($ty:ty) => {
        impl FromStr for $ty {
            type Err = UnknownVariant;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let needle = value.trim().to_lowercase();
                <$ty>::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.as_str() == needle)
                    .ok_or_else(|| UnknownVariant(value.to_string()))
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

closed_enum_parsing!(BusinessCategory);
closed_enum_parsing!(StylePreference);
closed_enum_parsing!(Industry);

// ────────────────────────────────────────────────────────────────────────────
// Template records
// ────────────────────────────────────────────────────────────────────────────

/// Device and accessibility support advertised by a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub supports_mobile: bool,
    pub supports_desktop: bool,
    pub supports_accessibility: bool,
}

impl Capabilities {
    pub const FULL: Capabilities = Capabilities {
        supports_mobile: true,
        supports_desktop: true,
        supports_accessibility: true,
    };

    pub fn is_full(&self) -> bool {
        self.supports_mobile && self.supports_desktop && self.supports_accessibility
    }
}

/// A pre-built landing page layout. Created once at startup, never mutated.
///
/// `name`, `description`, `features` and `path` are carried through to callers
/// and the content generator; scoring only reads category, style, industries
/// and capabilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: BusinessCategory,
    pub style: StylePreference,
    pub supported_industries: Vec<Industry>,
    pub capabilities: Capabilities,
    pub features: Vec<String>,
    pub path: String,
}

impl TemplateRecord {
    pub fn supports_industry(&self, industry: Industry) -> bool {
        self.supported_industries.contains(&industry)
    }
}

/// One template scored against one set of criteria. Lives for a single call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub template: TemplateRecord,
    pub match_score: u32,
    /// Contributing score components, in rule order. For display only.
    pub reasoning: Vec<String>,
}

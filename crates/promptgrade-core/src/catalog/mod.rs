//! Evidence catalog: the read-only reference data behind the rubric
//!
//! One catalog exists per [`Locale`]. It carries the per-feature evidence
//! entries, the missing-feature suggestion stubs, the default marker
//! keywords, the suggestion references used by the ranker, the synthesis
//! blocks used by the rewriter and the recommended-temperature record.
//!
//! Built-in catalogs are constructed once per process and handed out as
//! `&'static` references, so any number of scoring calls can share them
//! without synchronization.

mod en;
mod ko;

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::GradeError;
use crate::feature::FeatureCategory;

static KO_CATALOG: OnceLock<EvidenceCatalog> = OnceLock::new();
static EN_CATALOG: OnceLock<EvidenceCatalog> = OnceLock::new();

/// Language of the rubric markers and reference texts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Korean rubric (default)
    #[default]
    Ko,
    /// English rubric
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Ko, Locale::En];
}

impl FromStr for Locale {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ko" => Ok(Locale::Ko),
            "en" => Ok(Locale::En),
            other => Err(GradeError::unsupported("locale", other, "ko, en")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Ko => write!(f, "ko"),
            Locale::En => write!(f, "en"),
        }
    }
}

/// Evidence backing one rubric feature
#[derive(Debug, Clone, Serialize)]
pub struct EvidenceCatalogEntry {
    pub category: FeatureCategory,
    /// Importance on a 0-100 scale
    pub importance: u8,
    /// Rationale attached to a detected strength
    pub rationale: &'static str,
    /// Example phrasings that satisfy the feature
    pub examples: Vec<&'static str>,
    /// Stub attached to a missing feature
    pub missing_suggestion: &'static str,
    /// Default marker keywords (case-sensitive containment)
    #[serde(skip)]
    pub markers: Vec<&'static str>,
}

/// Recommended sampling temperature for prompts scored by this rubric
#[derive(Debug, Clone, Serialize)]
pub struct TemperatureRecommendation {
    pub importance: u8,
    pub value: f64,
    pub rationale: &'static str,
    pub recommendation: &'static str,
}

/// Curated improvement reference for a missing feature
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionReference {
    pub category: FeatureCategory,
    /// Two independent citation sources
    pub citations: [&'static str; 2],
    /// One-line actionable recommendation
    pub advice: &'static str,
    /// Fill-in-the-blank rewrite template
    pub template: &'static str,
    pub rationale: &'static str,
}

/// Text blocks used when synthesizing an improved prompt
#[derive(Debug, Clone, Serialize)]
pub struct SynthesisBlocks {
    pub role: &'static str,
    pub steps: &'static str,
    pub examples: &'static str,
    pub constraints: &'static str,
    pub quality_assurance: &'static str,
}

/// Immutable reference data for one locale
#[derive(Debug, Clone, Serialize)]
pub struct EvidenceCatalog {
    pub locale: Locale,
    pub entries: Vec<EvidenceCatalogEntry>,
    pub temperature: TemperatureRecommendation,
    pub references: Vec<SuggestionReference>,
    pub blocks: SynthesisBlocks,
}

impl EvidenceCatalog {
    /// Get the process-wide built-in catalog for a locale
    pub fn builtin(locale: Locale) -> &'static EvidenceCatalog {
        match locale {
            Locale::Ko => KO_CATALOG.get_or_init(ko::catalog),
            Locale::En => EN_CATALOG.get_or_init(en::catalog),
        }
    }

    /// Look up the evidence entry for a feature
    pub fn entry(&self, category: FeatureCategory) -> Option<&EvidenceCatalogEntry> {
        self.entries.iter().find(|e| e.category == category)
    }

    /// Rationale text for a detected feature (empty when unmapped)
    pub fn rationale(&self, category: FeatureCategory) -> &'static str {
        self.entry(category).map(|e| e.rationale).unwrap_or_default()
    }

    /// Suggestion stub for a missing feature (empty when unmapped)
    pub fn missing_suggestion(&self, category: FeatureCategory) -> &'static str {
        self.entry(category)
            .map(|e| e.missing_suggestion)
            .unwrap_or_default()
    }

    /// Default marker keywords for a feature
    pub fn markers(&self, category: FeatureCategory) -> &[&'static str] {
        self.entry(category)
            .map(|e| e.markers.as_slice())
            .unwrap_or_default()
    }

    /// Look up the curated suggestion reference for a missing feature
    pub fn reference(&self, category: FeatureCategory) -> Option<&SuggestionReference> {
        self.references.iter().find(|r| r.category == category)
    }
}

//! Rubric features and keyword-based detection
//!
//! Four features are evaluated independently on every text. A feature is
//! present when any of its marker keywords occurs anywhere in the text
//! (case-sensitive containment). Detection always yields exactly one signal
//! per feature, in [`FeatureCategory::ALL`] order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::EvidenceCatalog;
use crate::config::FeaturesConfig;
use crate::error::GradeError;

/// One of the four rubric dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureCategory {
    /// Role or persona declaration
    Role,
    /// Sequencing or ordinal structure
    Steps,
    /// Example introduction
    Examples,
    /// Restrictions and qualifiers
    Constraints,
}

impl FeatureCategory {
    /// Fixed evaluation and reporting order
    pub const ALL: [FeatureCategory; 4] = [
        FeatureCategory::Role,
        FeatureCategory::Steps,
        FeatureCategory::Examples,
        FeatureCategory::Constraints,
    ];

    /// Score contribution when the feature is present
    pub fn default_weight(self) -> i32 {
        match self {
            FeatureCategory::Role => 25,
            FeatureCategory::Steps => 20,
            FeatureCategory::Examples => 15,
            FeatureCategory::Constraints => 10,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FeatureCategory::Role => "role",
            FeatureCategory::Steps => "steps",
            FeatureCategory::Examples => "examples",
            FeatureCategory::Constraints => "constraints",
        }
    }
}

impl fmt::Display for FeatureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureCategory {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "role" => Ok(FeatureCategory::Role),
            "steps" => Ok(FeatureCategory::Steps),
            "examples" => Ok(FeatureCategory::Examples),
            "constraints" => Ok(FeatureCategory::Constraints),
            other => Err(GradeError::unsupported(
                "feature",
                other,
                "role, steps, examples, constraints",
            )),
        }
    }
}

/// Outcome of evaluating one feature on one text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSignal {
    pub category: FeatureCategory,
    pub found: bool,
    /// `+weight` when found, `-weight` when missing. The negative value is
    /// informational only and is never subtracted from a score.
    pub impact: i32,
    /// Catalog rationale for a strength, suggestion stub for a weakness
    pub evidence: String,
}

/// Marker keywords and weight for one feature
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureRule {
    pub category: FeatureCategory,
    pub weight: i32,
    pub keywords: Vec<String>,
}

impl FeatureRule {
    /// True when any keyword occurs in the text
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| text.contains(k.as_str()))
    }
}

/// Scans text for the four rubric features
#[derive(Debug, Clone)]
pub struct FeatureDetector<'a> {
    catalog: &'a EvidenceCatalog,
    rules: Vec<FeatureRule>,
}

impl<'a> FeatureDetector<'a> {
    /// Build a detector from the catalog's default markers and weights
    pub fn new(catalog: &'a EvidenceCatalog) -> Self {
        Self::with_config(catalog, &FeaturesConfig::default())
    }

    /// Build a detector, letting the config replace markers and weights
    pub fn with_config(catalog: &'a EvidenceCatalog, config: &FeaturesConfig) -> Self {
        let rules = FeatureCategory::ALL
            .iter()
            .map(|&category| {
                let feature = config.get(category);
                let keywords = match &feature.keywords {
                    Some(keywords) => keywords.clone(),
                    None => catalog
                        .markers(category)
                        .iter()
                        .map(|m| m.to_string())
                        .collect(),
                };
                FeatureRule {
                    category,
                    weight: feature.weight.unwrap_or_else(|| category.default_weight()),
                    keywords,
                }
            })
            .collect();

        FeatureDetector { catalog, rules }
    }

    pub fn rules(&self) -> &[FeatureRule] {
        &self.rules
    }

    /// Weight configured for a feature
    pub fn weight(&self, category: FeatureCategory) -> i32 {
        self.rules
            .iter()
            .find(|r| r.category == category)
            .map(|r| r.weight)
            .unwrap_or_else(|| category.default_weight())
    }

    /// Evaluate every feature against the text
    pub fn detect(&self, text: &str) -> Vec<FeatureSignal> {
        self.rules
            .iter()
            .map(|rule| {
                if rule.matches(text) {
                    FeatureSignal {
                        category: rule.category,
                        found: true,
                        impact: rule.weight,
                        evidence: self.catalog.rationale(rule.category).to_string(),
                    }
                } else {
                    FeatureSignal {
                        category: rule.category,
                        found: false,
                        impact: rule.weight.saturating_neg(),
                        evidence: self.catalog.missing_suggestion(rule.category).to_string(),
                    }
                }
            })
            .collect()
    }
}

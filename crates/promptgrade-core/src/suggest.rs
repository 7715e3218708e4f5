//! Ranked improvement suggestions for missing features

use serde::{Deserialize, Serialize};

use crate::catalog::EvidenceCatalog;
use crate::feature::{FeatureCategory, FeatureSignal};

/// Actionable recommendation tied to a missing feature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub category: FeatureCategory,
    pub citations: Vec<String>,
    pub advice: String,
    pub template: String,
    pub rationale: String,
    /// Severity, the magnitude of the missing feature's impact
    pub priority: u32,
}

/// Maps weaknesses to curated suggestions, most severe first
#[derive(Debug, Clone, Copy)]
pub struct SuggestionRanker<'a> {
    catalog: &'a EvidenceCatalog,
}

impl<'a> SuggestionRanker<'a> {
    pub fn new(catalog: &'a EvidenceCatalog) -> Self {
        SuggestionRanker { catalog }
    }

    /// Build suggestions for the given weaknesses, ordered by descending
    /// priority. Equal priorities keep the order the weaknesses were given
    /// in. Categories without a reference are skipped.
    pub fn rank(&self, weaknesses: &[FeatureSignal]) -> Vec<Suggestion> {
        let mut suggestions: Vec<Suggestion> = weaknesses
            .iter()
            .filter_map(|weakness| {
                let Some(reference) = self.catalog.reference(weakness.category) else {
                    tracing::debug!(category = %weakness.category, "no suggestion reference");
                    return None;
                };
                Some(Suggestion {
                    category: weakness.category,
                    citations: reference.citations.iter().map(|c| c.to_string()).collect(),
                    advice: reference.advice.to_string(),
                    template: reference.template.to_string(),
                    rationale: reference.rationale.to_string(),
                    priority: weakness.impact.unsigned_abs(),
                })
            })
            .collect();

        // sort_by_key is stable
        suggestions.sort_by_key(|s| std::cmp::Reverse(s.priority));
        suggestions
    }
}

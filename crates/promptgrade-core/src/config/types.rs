//! Configuration type definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Locale;
use crate::error::GradeError;
use crate::feature::FeatureCategory;

/// Label threshold on the 0-100 total score
pub const LABEL_THRESHOLD: f64 = 75.0;

/// Rubric configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Locale of the built-in markers and reference texts
    #[serde(default)]
    pub locale: Locale,

    /// Score combination parameters
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Per-feature marker and weight overrides
    #[serde(default)]
    pub features: FeaturesConfig,

    /// Batch pattern sampling
    #[serde(default)]
    pub sampling: SamplingConfig,

    /// Improved-prompt synthesis
    #[serde(default)]
    pub synthesis: SynthesisConfig,
}

/// Parameters combining sub-scores into the total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Starting accuracy before feature contributions (default 50)
    #[serde(default = "default_base_score")]
    pub base_score: i32,

    /// Weight of the accuracy sub-score (default 0.90)
    #[serde(default = "default_accuracy_weight")]
    pub accuracy_weight: f64,

    /// Weight of the length sub-score (default 0.10)
    #[serde(default = "default_length_weight")]
    pub length_weight: f64,

    /// Minimum total score labelled high quality (default 75)
    #[serde(default = "default_label_threshold")]
    pub label_threshold: f64,
}

/// Overrides for the four rubric features
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeaturesConfig {
    #[serde(default)]
    pub role: FeatureConfig,
    #[serde(default)]
    pub steps: FeatureConfig,
    #[serde(default)]
    pub examples: FeatureConfig,
    #[serde(default)]
    pub constraints: FeatureConfig,
}

impl FeaturesConfig {
    pub fn get(&self, category: FeatureCategory) -> &FeatureConfig {
        match category {
            FeatureCategory::Role => &self.role,
            FeatureCategory::Steps => &self.steps,
            FeatureCategory::Examples => &self.examples,
            FeatureCategory::Constraints => &self.constraints,
        }
    }

    pub fn get_mut(&mut self, category: FeatureCategory) -> &mut FeatureConfig {
        match category {
            FeatureCategory::Role => &mut self.role,
            FeatureCategory::Steps => &mut self.steps,
            FeatureCategory::Examples => &mut self.examples,
            FeatureCategory::Constraints => &mut self.constraints,
        }
    }
}

/// Override for a single feature; unset fields fall back to the built-ins
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureConfig {
    /// Score contribution when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,

    /// Marker keywords replacing the locale defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

/// Which results feed the strength/weakness pattern tallies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SamplingMode {
    /// Only the first few results of each label
    #[default]
    Prefix,
    /// Every result in the batch
    Full,
}

impl fmt::Display for SamplingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SamplingMode::Prefix => write!(f, "prefix"),
            SamplingMode::Full => write!(f, "full"),
        }
    }
}

impl FromStr for SamplingMode {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "prefix" => Ok(SamplingMode::Prefix),
            "full" => Ok(SamplingMode::Full),
            other => Err(GradeError::unsupported("sampling mode", other, "prefix, full")),
        }
    }
}

/// Pattern-mining sample sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplingConfig {
    #[serde(default)]
    pub mode: SamplingMode,

    /// High-quality results whose strengths are tallied (default 3)
    #[serde(default = "default_high_quality_sample")]
    pub high_quality_sample: usize,

    /// Low-quality results whose weaknesses are tallied (default 5)
    #[serde(default = "default_low_quality_sample")]
    pub low_quality_sample: usize,

    /// Number of most common patterns reported (default 3)
    #[serde(default = "default_top_patterns")]
    pub top_patterns: usize,
}

/// Improved-prompt synthesis options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Emit the step-by-step block when steps are missing (default false)
    #[serde(default)]
    pub emit_steps_block: bool,
}

fn default_base_score() -> i32 {
    50
}

fn default_accuracy_weight() -> f64 {
    0.90
}

fn default_length_weight() -> f64 {
    0.10
}

fn default_label_threshold() -> f64 {
    LABEL_THRESHOLD
}

fn default_high_quality_sample() -> usize {
    3
}

fn default_low_quality_sample() -> usize {
    5
}

fn default_top_patterns() -> usize {
    3
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            base_score: default_base_score(),
            accuracy_weight: default_accuracy_weight(),
            length_weight: default_length_weight(),
            label_threshold: default_label_threshold(),
        }
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        SamplingConfig {
            mode: SamplingMode::default(),
            high_quality_sample: default_high_quality_sample(),
            low_quality_sample: default_low_quality_sample(),
            top_patterns: default_top_patterns(),
        }
    }
}

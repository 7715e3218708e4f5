//! Weighted rubric scoring
//!
//! `total = round(accuracy * accuracy_weight + length * length_weight, 2)`
//! where accuracy is the base score plus the weights of the detected
//! features (clamped to 0..=100) and length is a piecewise mapping of the
//! character count. Scoring never fails: text that is empty after trimming
//! gets no accuracy, and a non-text value scores zero on every axis.

use serde::{Deserialize, Serialize};

use crate::catalog::EvidenceCatalog;
use crate::config::{Config, ScoringConfig};
use crate::feature::{FeatureDetector, FeatureSignal};

/// Texts longer than this get no length credit
pub const MAX_LENGTH: usize = 3000;

/// Label of a high-quality text
pub const HIGH_QUALITY: u8 = 1;

/// Label of a low-quality text
pub const LOW_QUALITY: u8 = 0;

/// Scoring outcome for one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Weighted total in 0..=100, rounded to two decimals
    pub total_score: f64,
    /// Feature-presence sub-score in 0..=100
    pub accuracy_score: u8,
    /// Length sub-score, one of 0, 50, 70, 80 or 100
    pub length_score: u8,
    /// 1 when `total_score` reaches the label threshold, else 0
    pub label: u8,
    /// Detected features, in rubric order
    pub strengths: Vec<FeatureSignal>,
    /// Missing features, in rubric order
    pub weaknesses: Vec<FeatureSignal>,
    /// Recommended sampling temperature for the prompt
    pub temperature_setting: f64,
}

impl ScoreResult {
    pub fn is_high_quality(&self) -> bool {
        self.label == HIGH_QUALITY
    }
}

/// Length sub-score from the character count of the raw text
pub fn length_score(text: &str) -> u8 {
    let len = text.chars().count();

    if len > MAX_LENGTH {
        0
    } else if (100..=1500).contains(&len) {
        100
    } else if (50..100).contains(&len) {
        80
    } else if len > 1500 && len <= 2500 {
        70
    } else {
        // Shorter than 50 or between 2501 and 3000
        50
    }
}

/// Binary label for a total score
pub fn label_for(total_score: f64, threshold: f64) -> u8 {
    if total_score >= threshold {
        HIGH_QUALITY
    } else {
        LOW_QUALITY
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Turns feature signals and text length into a [`ScoreResult`]
#[derive(Debug, Clone)]
pub struct ScoreCalculator<'a> {
    detector: FeatureDetector<'a>,
    scoring: ScoringConfig,
    temperature: f64,
}

impl<'a> ScoreCalculator<'a> {
    pub fn new(catalog: &'a EvidenceCatalog, config: &Config) -> Self {
        ScoreCalculator {
            detector: FeatureDetector::with_config(catalog, &config.features),
            scoring: config.scoring.clone(),
            temperature: catalog.temperature.value,
        }
    }

    pub fn detector(&self) -> &FeatureDetector<'a> {
        &self.detector
    }

    pub fn threshold(&self) -> f64 {
        self.scoring.label_threshold
    }

    /// Accuracy sub-score: base plus detected weights, clamped to 0..=100.
    /// Missing features are never subtracted.
    pub fn accuracy_score(&self, signals: &[FeatureSignal]) -> u8 {
        let gained: i64 = signals
            .iter()
            .filter(|s| s.found)
            .map(|s| i64::from(s.impact))
            .sum();
        (i64::from(self.scoring.base_score) + gained).clamp(0, 100) as u8
    }

    /// Score a text
    pub fn score(&self, text: &str) -> ScoreResult {
        let signals = if text.trim().is_empty() {
            Vec::new()
        } else {
            self.detector.detect(text)
        };

        let accuracy_score = if signals.is_empty() {
            0
        } else {
            self.accuracy_score(&signals)
        };

        let (strengths, weaknesses): (Vec<_>, Vec<_>) =
            signals.into_iter().partition(|s| s.found);

        self.finish(accuracy_score, length_score(text), strengths, weaknesses)
    }

    /// Score an arbitrary value; anything but a string scores zero
    pub fn score_value(&self, value: &serde_json::Value) -> ScoreResult {
        match value.as_str() {
            Some(text) => self.score(text),
            None => {
                tracing::debug!(kind = value_kind(value), "non-text input scored as zero");
                self.finish(0, 0, Vec::new(), Vec::new())
            }
        }
    }

    fn finish(
        &self,
        accuracy_score: u8,
        length_score: u8,
        strengths: Vec<FeatureSignal>,
        weaknesses: Vec<FeatureSignal>,
    ) -> ScoreResult {
        let weighted = f64::from(accuracy_score) * self.scoring.accuracy_weight
            + f64::from(length_score) * self.scoring.length_weight;
        // Weights may sum slightly above 1.0 within the validation tolerance
        let total_score = if weighted.is_nan() {
            0.0
        } else {
            round2(weighted).clamp(0.0, 100.0)
        };
        let label = label_for(total_score, self.scoring.label_threshold);

        tracing::debug!(
            total_score,
            accuracy_score,
            length_score,
            label,
            strengths = strengths.len(),
            "scored"
        );

        ScoreResult {
            total_score,
            accuracy_score,
            length_score,
            label,
            strengths,
            weaknesses,
            temperature_setting: self.temperature,
        }
    }
}

fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

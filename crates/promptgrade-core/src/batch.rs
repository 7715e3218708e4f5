//! Batch statistics over many score results
//!
//! Pattern mining samples a bounded prefix by default: the strengths of the
//! first `high_quality_sample` high-quality results and the weaknesses of
//! the first `low_quality_sample` low-quality results. `SamplingMode::Full`
//! tallies every result instead. Count, means and label counts always cover
//! the whole batch.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::{SamplingConfig, SamplingMode};
use crate::feature::FeatureCategory;
use crate::score::ScoreResult;

/// Cooperative cancellation flag shared between a batch run and its caller
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the running batch to stop before its next row
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Score of one input row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowResult {
    /// Row index as supplied by the row provider
    pub index: usize,
    #[serde(flatten)]
    pub score: ScoreResult,
}

/// Rows scored by one batch run
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredBatch {
    pub rows: Vec<RowResult>,
    /// Rows supplied to the run
    pub total: usize,
    /// True when the run stopped early on cancellation
    pub interrupted: bool,
}

impl ScoredBatch {
    pub fn results(&self) -> impl Iterator<Item = &ScoreResult> {
        self.rows.iter().map(|r| &r.score)
    }
}

/// Summary statistics for a batch of results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub count: usize,
    /// Mean total score (0.0 for an empty batch)
    pub mean_score: f64,
    pub high_count: usize,
    pub low_count: usize,
    pub strength_pattern_counts: BTreeMap<FeatureCategory, usize>,
    pub weakness_pattern_counts: BTreeMap<FeatureCategory, usize>,
    /// Sampling used for the pattern counts
    pub sampling: SamplingConfig,
    pub high_mean_score: Option<f64>,
    pub low_mean_score: Option<f64>,
    /// Percentage of high-quality results
    pub quality_ratio: f64,
    /// Points the low-quality mean is short of the threshold
    pub improvement_gap: Option<f64>,
}

impl BatchSummary {
    /// Most common strengths, count descending, ties in rubric order
    pub fn top_strengths(&self, n: usize) -> Vec<(FeatureCategory, usize)> {
        most_common(&self.strength_pattern_counts, n)
    }

    /// Most common weaknesses, count descending, ties in rubric order
    pub fn top_weaknesses(&self, n: usize) -> Vec<(FeatureCategory, usize)> {
        most_common(&self.weakness_pattern_counts, n)
    }
}

fn most_common(
    counts: &BTreeMap<FeatureCategory, usize>,
    n: usize,
) -> Vec<(FeatureCategory, usize)> {
    let mut ranked: Vec<(FeatureCategory, usize)> =
        counts.iter().map(|(category, count)| (*category, *count)).collect();
    // BTreeMap iteration is in rubric order and the sort is stable
    ranked.sort_by_key(|(_, count)| std::cmp::Reverse(*count));
    ranked.truncate(n);
    ranked
}

fn mean(sum: f64, count: usize) -> Option<f64> {
    (count > 0).then(|| sum / count as f64)
}

/// Folds score results into a [`BatchSummary`]
#[derive(Debug, Clone, Copy)]
pub struct BatchAggregator {
    sampling: SamplingConfig,
    threshold: f64,
}

impl BatchAggregator {
    pub fn new(sampling: SamplingConfig, threshold: f64) -> Self {
        BatchAggregator {
            sampling,
            threshold,
        }
    }

    pub fn sampling(&self) -> SamplingConfig {
        self.sampling
    }

    pub fn summarize<'r>(&self, results: impl IntoIterator<Item = &'r ScoreResult>) -> BatchSummary {
        let mut count = 0;
        let mut sum = 0.0;
        let mut high_count = 0;
        let mut high_sum = 0.0;
        let mut low_count = 0;
        let mut low_sum = 0.0;
        let mut strength_pattern_counts = BTreeMap::new();
        let mut weakness_pattern_counts = BTreeMap::new();

        let full = self.sampling.mode == SamplingMode::Full;

        for result in results {
            count += 1;
            sum += result.total_score;

            if result.is_high_quality() {
                if full || high_count < self.sampling.high_quality_sample {
                    for strength in &result.strengths {
                        *strength_pattern_counts.entry(strength.category).or_insert(0) += 1;
                    }
                }
                high_count += 1;
                high_sum += result.total_score;
            } else {
                if full || low_count < self.sampling.low_quality_sample {
                    for weakness in &result.weaknesses {
                        *weakness_pattern_counts.entry(weakness.category).or_insert(0) += 1;
                    }
                }
                low_count += 1;
                low_sum += result.total_score;
            }
        }

        let low_mean_score = mean(low_sum, low_count);

        tracing::debug!(
            count,
            high_count,
            low_count,
            mode = %self.sampling.mode,
            "summarized batch"
        );

        BatchSummary {
            count,
            mean_score: mean(sum, count).unwrap_or(0.0),
            high_count,
            low_count,
            strength_pattern_counts,
            weakness_pattern_counts,
            sampling: self.sampling,
            high_mean_score: mean(high_sum, high_count),
            low_mean_score,
            quality_ratio: mean(high_count as f64 * 100.0, count).unwrap_or(0.0),
            improvement_gap: low_mean_score.map(|m| self.threshold - m),
        }
    }
}

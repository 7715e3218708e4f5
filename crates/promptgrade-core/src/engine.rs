//! Scoring engine: one configured pipeline from text to report
//!
//! The engine borrows an immutable catalog and owns nothing mutable, so a
//! single instance can be shared across threads and batch rows.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::batch::{BatchAggregator, BatchSummary, CancelToken, RowResult, ScoredBatch};
use crate::catalog::EvidenceCatalog;
use crate::config::Config;
use crate::error::Result;
use crate::feature::FeatureSignal;
use crate::rows::{FieldSelection, TextRecord};
use crate::score::{ScoreCalculator, ScoreResult};
use crate::suggest::{Suggestion, SuggestionRanker};
use crate::synth::PromptSynthesizer;
use crate::trace_time;

/// Full report for one text: score, ranked suggestions and the rewrite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    #[serde(flatten)]
    pub score: ScoreResult,
    pub suggestions: Vec<Suggestion>,
    pub improved_prompt: String,
}

/// Configured scoring pipeline
#[derive(Debug, Clone)]
pub struct Engine<'a> {
    config: Config,
    catalog: &'a EvidenceCatalog,
    calculator: ScoreCalculator<'a>,
    ranker: SuggestionRanker<'a>,
    synthesizer: PromptSynthesizer<'a>,
    aggregator: BatchAggregator,
}

impl Engine<'static> {
    /// Build an engine over the built-in catalog for the configured locale
    pub fn new(config: Config) -> Result<Self> {
        let catalog = EvidenceCatalog::builtin(config.locale);
        Engine::with_catalog(config, catalog)
    }
}

impl<'a> Engine<'a> {
    /// Build an engine over a caller-supplied catalog
    pub fn with_catalog(config: Config, catalog: &'a EvidenceCatalog) -> Result<Self> {
        config.validate()?;

        tracing::debug!(
            locale = %catalog.locale,
            threshold = config.scoring.label_threshold,
            sampling = %config.sampling.mode,
            "engine ready"
        );

        Ok(Engine {
            calculator: ScoreCalculator::new(catalog, &config),
            ranker: SuggestionRanker::new(catalog),
            synthesizer: PromptSynthesizer::new(catalog, config.synthesis),
            aggregator: BatchAggregator::new(config.sampling, config.scoring.label_threshold),
            catalog,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &'a EvidenceCatalog {
        self.catalog
    }

    pub fn calculator(&self) -> &ScoreCalculator<'a> {
        &self.calculator
    }

    pub fn score(&self, text: &str) -> ScoreResult {
        self.calculator.score(text)
    }

    pub fn score_value(&self, value: &serde_json::Value) -> ScoreResult {
        self.calculator.score_value(value)
    }

    pub fn suggest(&self, weaknesses: &[FeatureSignal]) -> Vec<Suggestion> {
        self.ranker.rank(weaknesses)
    }

    pub fn improve(&self, original: &str, weaknesses: &[FeatureSignal]) -> String {
        self.synthesizer.synthesize(original, weaknesses)
    }

    /// Score a text, rank suggestions for its weaknesses and rewrite it
    pub fn evaluate(&self, text: &str) -> Evaluation {
        let start = Instant::now();
        let score = self.calculator.score(text);
        let suggestions = self.ranker.rank(&score.weaknesses);
        let improved_prompt = self.synthesizer.synthesize(text, &score.weaknesses);
        trace_time!(start, "evaluate", suggestions = suggestions.len());

        Evaluation {
            score,
            suggestions,
            improved_prompt,
        }
    }

    /// Score rows in order. The cancel token is checked before each row and
    /// `progress` is called with `(done, total)` after each one; a cancelled
    /// run keeps the rows scored so far.
    pub fn score_rows<R: TextRecord>(
        &self,
        rows: &[(usize, R)],
        selection: &FieldSelection,
        mut progress: Option<&mut dyn FnMut(usize, usize)>,
        cancel: &CancelToken,
    ) -> ScoredBatch {
        let start = Instant::now();
        let total = rows.len();
        let mut scored = Vec::with_capacity(total);
        let mut interrupted = false;

        for (index, record) in rows {
            if cancel.is_cancelled() {
                interrupted = true;
                break;
            }

            let text = selection.combine(record);
            scored.push(RowResult {
                index: *index,
                score: self.calculator.score(&text),
            });

            if let Some(cb) = progress.as_mut() {
                cb(scored.len(), total);
            }
        }

        if interrupted {
            tracing::info!(scored = scored.len(), total, "batch interrupted");
        } else {
            tracing::info!(total, elapsed = ?start.elapsed(), "batch scored");
        }

        ScoredBatch {
            rows: scored,
            total,
            interrupted,
        }
    }

    pub fn summarize<'r>(&self, results: impl IntoIterator<Item = &'r ScoreResult>) -> BatchSummary {
        self.aggregator.summarize(results)
    }
}

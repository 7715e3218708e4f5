//! Improved-prompt synthesis
//!
//! The rewrite is assembled from blocks separated by a blank line:
//! an optional role sentence, the trimmed original, optional step, example
//! and constraint blocks, and a closing quality-assurance sentence.
//!
//! The step block is off unless `synthesis.emit_steps_block` is set. With
//! the default setting a missing-steps weakness still produces a ranked
//! suggestion but no step block in the rewrite.

use crate::catalog::{EvidenceCatalog, SynthesisBlocks};
use crate::config::SynthesisConfig;
use crate::feature::{FeatureCategory, FeatureSignal};

const BLOCK_SEPARATOR: &str = "\n\n";

/// Assembles a rewritten prompt from the original and its weaknesses
#[derive(Debug, Clone, Copy)]
pub struct PromptSynthesizer<'a> {
    blocks: &'a SynthesisBlocks,
    emit_steps_block: bool,
}

impl<'a> PromptSynthesizer<'a> {
    pub fn new(catalog: &'a EvidenceCatalog, config: SynthesisConfig) -> Self {
        PromptSynthesizer {
            blocks: &catalog.blocks,
            emit_steps_block: config.emit_steps_block,
        }
    }

    /// Build the improved prompt. Pure: the same inputs give the same text.
    pub fn synthesize(&self, original: &str, weaknesses: &[FeatureSignal]) -> String {
        let missing = |category: FeatureCategory| weaknesses.iter().any(|w| w.category == category);

        let mut sections: Vec<&str> = Vec::new();

        if missing(FeatureCategory::Role) {
            sections.push(self.blocks.role);
        }

        let original = original.trim();
        if !original.is_empty() {
            sections.push(original);
        }

        if self.emit_steps_block && missing(FeatureCategory::Steps) {
            sections.push(self.blocks.steps);
        }

        if missing(FeatureCategory::Examples) {
            sections.push(self.blocks.examples);
        }

        if missing(FeatureCategory::Constraints) {
            sections.push(self.blocks.constraints);
        }

        sections.push(self.blocks.quality_assurance);

        sections.join(BLOCK_SEPARATOR)
    }
}

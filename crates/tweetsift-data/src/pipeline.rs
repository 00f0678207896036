//! Pipeline - Tweet Dataset Preprocessing
//!
//! Turns a raw tweet dataset into classifier input in five ordered stages:
//!
//! 1. drop excluded labels (`figurative`)
//! 2. deduplicate on the text cell, first occurrence wins
//! 3. collapse `sarcasm` and `irony` into `sarcasm_irony`
//! 4. normalize every text
//! 5. encode every label
//!
//! The input dataset is never modified. The run fails on the first label
//! the encoder does not know and returns no partial output.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use tracing::{debug, error, info};
use tweetsift_core::{PipelineConfig, Result};
use tweetsift_text::TweetNormalizer;

use crate::dataset::{CleanedDataset, Dataset, TweetDataset};
use crate::label::{LabelEncoder, SARCASM_IRONY_LABEL};
use crate::record::{CleanedRecord, Field, Record};

// =============================================================================
// PreprocessingPipeline
// =============================================================================

/// Filters, deduplicates, relabels, cleans and encodes a tweet dataset.
#[derive(Debug)]
pub struct PreprocessingPipeline {
    config: PipelineConfig,
    normalizer: TweetNormalizer,
    encoder: LabelEncoder,
}

impl PreprocessingPipeline {
    /// Creates a pipeline with the default label handling.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(PipelineConfig::default())
    }

    /// Creates a pipeline with custom label handling.
    #[must_use]
    pub fn with_config(config: PipelineConfig) -> Self {
        Self {
            config,
            normalizer: TweetNormalizer::new(),
            encoder: LabelEncoder::new(),
        }
    }

    /// Replaces the text normalizer.
    pub fn with_normalizer(mut self, normalizer: TweetNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Returns the label configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs all five stages.
    pub fn run(&self, dataset: &TweetDataset) -> Result<CleanedDataset> {
        info!(records = dataset.len(), "Preprocessing tweet dataset");

        let filtered = dataset.without_labels(&self.config.excluded_labels);
        debug!(
            dropped = dataset.len() - filtered.len(),
            excluded = ?self.config.excluded_labels,
            "Removed excluded labels"
        );

        let deduped = filtered.dedup_by_text();
        debug!(
            dropped = filtered.len() - deduped.len(),
            "Removed duplicate texts"
        );

        let collapsed = deduped.collapse_labels(&self.config.collapsed_labels, SARCASM_IRONY_LABEL);
        debug!(
            merged = ?self.config.collapsed_labels,
            into = SARCASM_IRONY_LABEL,
            "Collapsed labels"
        );

        let normalized = self.normalize(&collapsed);
        debug!(records = normalized.len(), "Normalized texts");

        let cleaned = self.encode(&normalized)?;
        info!(
            input = dataset.len(),
            output = cleaned.len(),
            "Preprocessing complete"
        );
        Ok(cleaned)
    }

    /// Applies the text normalizer to every record.
    pub fn normalize(&self, dataset: &TweetDataset) -> TweetDataset {
        dataset.map(|r| {
            Record::new(
                Field::Text(self.normalizer.normalize_value(&r.text)),
                r.label.clone(),
            )
        })
    }

    /// Encodes every label, failing on the first unknown one.
    pub fn encode(&self, dataset: &TweetDataset) -> Result<CleanedDataset> {
        dataset.try_map(|r| {
            let class = self.encoder.encode(r.label.as_str()).map_err(|e| {
                error!(label = %r.label, "Label reached the encoder without collapsing");
                e
            })?;
            Ok(CleanedRecord::new(r.text.to_string(), class))
        })
    }
}

impl Default for PreprocessingPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the default pipeline.
pub fn preprocess(dataset: &TweetDataset) -> Result<CleanedDataset> {
    PreprocessingPipeline::new().run(dataset)
}

// =============================================================================
// Tests
// =============================================================================

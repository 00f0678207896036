//! tweetsift-data - Tweet Datasets and Preprocessing
//!
//! Provides the tabular side of the Tweetsift toolkit:
//! - Records with dynamically-typed text cells and string labels
//! - `RecordDataset`, an ordered, non-destructive dataset container
//! - The closed two-class label table (`regular` / `sarcasm_irony`)
//! - `PreprocessingPipeline`: filter, deduplicate, collapse, normalize, encode
//!
//! # Example
//!
//! ```ignore
//! use tweetsift_data::prelude::*;
//!
//! let dataset: TweetDataset = vec![
//!     Record::new("Check http://a.co #sarcasm", "sarcasm"),
//!     Record::new("I love this!", "regular"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let cleaned = PreprocessingPipeline::new().run(&dataset)?;
//! assert_eq!(cleaned.records()[0].text, "check");
//! assert_eq!(cleaned.records()[0].class, ClassCode::SarcasmIrony);
//! ```
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::return_self_not_must_use)]

// =============================================================================
// Module Declarations
// =============================================================================

pub mod dataset;
pub mod label;
pub mod pipeline;
pub mod record;

// =============================================================================
// Re-exports
// =============================================================================

pub use dataset::{CleanedDataset, Dataset, RecordDataset, TweetDataset};
pub use label::{ClassCode, LabelEncoder, REGULAR_LABEL, SARCASM_IRONY_LABEL};
pub use pipeline::{preprocess, PreprocessingPipeline};
pub use record::{CleanedRecord, Field, LabeledText, Record};

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for dataset preprocessing.
pub mod prelude {
    pub use crate::{
        preprocess, ClassCode, CleanedDataset, CleanedRecord, Dataset, Field, LabelEncoder,
        LabeledText, PreprocessingPipeline, Record, RecordDataset, TweetDataset,
    };
    pub use tweetsift_core::{Error, PipelineConfig, Result};
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_from_json_rows() {
        let dataset = TweetDataset::from_json(
            r#"[
                {"tweets": "Check http://a.co #sarcasm", "class": "sarcasm"},
                {"tweets": "I love this!", "class": "regular"}
            ]"#,
        )
        .unwrap();

        let cleaned = preprocess(&dataset).unwrap();
        let json: serde_json::Value = serde_json::from_str(&cleaned.to_json().unwrap()).unwrap();

        assert_eq!(
            json,
            serde_json::json!([
                {"tweets": "check", "class": 1},
                {"tweets": "i love this !", "class": 0}
            ])
        );
    }

    #[test]
    fn test_cleaned_dataset_indexing() {
        let dataset: TweetDataset = vec![Record::new("Yes", "regular")].into_iter().collect();
        let cleaned = preprocess(&dataset).unwrap();

        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned.get(0).unwrap().class.code(), 0);
        assert!(cleaned.get(1).is_none());
    }
}

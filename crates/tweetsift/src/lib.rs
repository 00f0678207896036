//! # Tweetsift - Tweet Preprocessing for Sarcasm and Irony Detection
//!
//! Tweetsift prepares labeled tweets for a binary sarcasm/irony classifier
//! and for exploratory analysis:
//!
//! - **Normalization**: ordered removal of URLs, HTML, emoji, mentions,
//!   irony and sarcasm markers, then Treebank-style retokenization
//! - **Labels**: `figurative` dropped, `sarcasm` and `irony` merged into
//!   `sarcasm_irony`, encoded as `0` / `1`
//! - **Pipeline**: filter, deduplicate, collapse, normalize, encode
//! - **Word clouds**: per-class word-frequency rasters
//! - **Syntax**: stopword / noun / verb / adverb / adjective / pronoun counts
//!
//! # Quick Start
//!
//! ```ignore
//! use tweetsift::prelude::*;
//!
//! let dataset = TweetDataset::from_json(
//!     r#"[{"tweets": "Check http://a.co #sarcasm", "class": "sarcasm"},
//!         {"tweets": "I love this!", "class": "regular"}]"#,
//! )?;
//!
//! let cleaned = preprocess(&dataset)?;
//! assert_eq!(cleaned.texts(), vec!["check", "i love this !"]);
//! assert_eq!(cleaned.codes(), vec![1, 0]);
//!
//! let cloud = plot_wordcloud(&cleaned, &ClassCode::Regular)?;
//! let counts = count_syntactic_features("The cat runs quickly");
//! ```
//!
//! # Feature Flags
//!
//! - `full` (default): All features enabled
//! - `text`: Normalization, tokenization and syntactic counts
//! - `data`: Records, label encoding and the preprocessing pipeline
//! - `viz`: Word-cloud rendering
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// Core Re-exports
// =============================================================================

pub use tweetsift_core as core;

pub use tweetsift_core::{Error, Result, TweetsiftConfig};

// =============================================================================
// Domain Re-exports
// =============================================================================

#[cfg(feature = "text")]
pub use tweetsift_text as text;

#[cfg(feature = "data")]
pub use tweetsift_data as data;

#[cfg(feature = "viz")]
pub use tweetsift_viz as viz;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for tweet preprocessing.
///
/// ```ignore
/// use tweetsift::prelude::*;
/// ```
pub mod prelude {
    pub use tweetsift_core::{Error, PipelineConfig, Result, TweetsiftConfig, WordCloudConfig};

    // Text
    #[cfg(feature = "text")]
    pub use tweetsift_text::{
        count_syntactic_features, normalize_tweet, EnglishStopwords, LexiconTagger, PosTagger,
        StopwordSet, SyntacticCategory, SyntacticCounter, SyntacticFeatures, Tokenizer,
        TweetNormalizer, WordTokenizer,
    };

    // Data
    #[cfg(feature = "data")]
    pub use tweetsift_data::{
        preprocess, ClassCode, CleanedDataset, CleanedRecord, Dataset, Field, LabelEncoder,
        LabeledText, PreprocessingPipeline, Record, RecordDataset, TweetDataset,
    };

    // Visualization
    #[cfg(feature = "viz")]
    pub use tweetsift_viz::{plot_wordcloud, WordCloud, WordCloudImage};
}

// =============================================================================
// Version Information
// =============================================================================

/// Returns the version of Tweetsift.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Returns a string describing the enabled features.
#[must_use]
pub fn features() -> String {
    let mut features = Vec::new();

    #[cfg(feature = "text")]
    features.push("text");

    #[cfg(feature = "data")]
    features.push("data");

    #[cfg(feature = "viz")]
    features.push("viz");

    if features.is_empty() {
        "none".to_string()
    } else {
        features.join(", ")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_features() {
        let f = features();
        assert!(f.contains("text"));
        assert!(f.contains("viz"));
    }

    #[test]
    fn test_default_config() {
        let config = TweetsiftConfig::default();
        assert_eq!(config.wordcloud.width, 800);
        assert_eq!(config.pipeline.excluded_labels, vec!["figurative"]);
    }
}

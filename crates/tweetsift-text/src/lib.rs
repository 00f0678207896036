//! Tweetsift Text - Tweet Cleaning and Syntactic Statistics
//!
//! This crate provides the text side of the Tweetsift toolkit:
//!
//! - **Tokenizers**: Treebank-style word tokenization over Unicode word bounds
//! - **Normalizer**: the ordered noise-removal sequence applied to every tweet
//! - **Stopwords**: the standard English stopword list behind a small trait
//! - **Tagger**: a rule-based Penn Treebank part-of-speech tagger
//! - **Syntax**: stopword / noun / verb / adverb / adjective / pronoun counts
//!
//! # Example
//!
//! ```ignore
//! use tweetsift_text::prelude::*;
//!
//! let cleaned = normalize_tweet("Check http://a.co #sarcasm");
//! assert_eq!(cleaned, "check");
//!
//! let counts = count_syntactic_features("The cat runs quickly");
//! assert_eq!(counts.nouns, 1);
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
#![allow(clippy::doc_markdown)]

pub mod normalize;
pub mod stopwords;
pub mod syntax;
pub mod tagger;
pub mod tokenizer;

// =============================================================================
// Re-exports
// =============================================================================

pub use normalize::{normalize_tweet, Lowercase, NormalizeStep, PatternStrip, Retokenize, TweetNormalizer};

pub use stopwords::{EnglishStopwords, StopwordSet, ENGLISH_STOPWORDS};

pub use tagger::{LexiconTagger, PosTagger, TaggedToken};

pub use syntax::{count_syntactic_features, SyntacticCategory, SyntacticCounter, SyntacticFeatures};

pub use tokenizer::{Tokenizer, WordTokenizer};

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for text processing.
pub mod prelude {
    pub use crate::{
        count_syntactic_features,
        normalize_tweet,
        // Stopwords
        EnglishStopwords,
        // Tagging
        LexiconTagger,
        // Normalization
        NormalizeStep,
        PosTagger,
        StopwordSet,
        // Syntax
        SyntacticCategory,
        SyntacticCounter,
        SyntacticFeatures,
        TaggedToken,
        // Tokenizers
        Tokenizer,
        TweetNormalizer,
        WordTokenizer,
    };
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizer_and_counter_share_tokenizer() {
        let raw = "Wow, I can't believe it works";
        let cleaned = normalize_tweet(raw);
        let tokens = WordTokenizer::new().tokenize(raw);

        assert_eq!(cleaned.split(' ').count(), tokens.len());
        assert_eq!(cleaned, "wow , i ca n't believe it works");
    }

    #[test]
    fn test_counter_on_normalized_text() {
        let cleaned = normalize_tweet("@bob The cat runs quickly http://t.co/x");
        let counts = count_syntactic_features(&cleaned);

        assert_eq!(cleaned, "the cat runs quickly");
        assert_eq!(counts.stopwords, 1);
        assert_eq!(counts.nouns, 1);
        assert_eq!(counts.verbs, 1);
        assert_eq!(counts.adverbs, 1);
    }
}

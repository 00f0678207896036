//! Syntax - Syntactic Feature Counts
//!
//! Counts how many tokens of a text fall into six categories: stopwords,
//! nouns, verbs, adverbs, adjectives and pronouns. Each token lands in at
//! most one category. Stopword membership is checked first; after that the
//! part-of-speech tag decides, in the order noun, verb, adverb, adjective,
//! pronoun. Tokens matching none of them (punctuation, determiners that are
//! not stopwords, conjunctions, ...) are not counted.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::stopwords::{EnglishStopwords, StopwordSet};
use crate::tagger::{LexiconTagger, PosTagger};
use crate::tokenizer::{Tokenizer, WordTokenizer};

// =============================================================================
// SyntacticCategory
// =============================================================================

/// The six counted categories, in classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SyntacticCategory {
    /// Function words from the stopword list.
    Stopwords,
    /// `NN*` tags.
    Nouns,
    /// `VB*` tags.
    Verbs,
    /// `RB*` tags.
    Adverbs,
    /// `JJ*` tags.
    Adjectives,
    /// `PRP*` tags.
    Pronouns,
}

impl SyntacticCategory {
    /// All categories in priority order.
    pub const ALL: [SyntacticCategory; 6] = [
        Self::Stopwords,
        Self::Nouns,
        Self::Verbs,
        Self::Adverbs,
        Self::Adjectives,
        Self::Pronouns,
    ];

    /// Key used in count maps.
    pub fn key(self) -> &'static str {
        match self {
            Self::Stopwords => "Stopwords",
            Self::Nouns => "Nouns",
            Self::Verbs => "Verbs",
            Self::Adverbs => "Adverbs",
            Self::Adjectives => "Adjectives",
            Self::Pronouns => "Pronouns",
        }
    }

    /// Category implied by a part-of-speech tag alone.
    pub fn from_tag(tag: &str) -> Option<Self> {
        if tag.starts_with("NN") {
            Some(Self::Nouns)
        } else if tag.starts_with("VB") {
            Some(Self::Verbs)
        } else if tag.starts_with("RB") {
            Some(Self::Adverbs)
        } else if tag.starts_with("JJ") {
            Some(Self::Adjectives)
        } else if tag.starts_with("PRP") {
            Some(Self::Pronouns)
        } else {
            None
        }
    }
}

// =============================================================================
// SyntacticFeatures
// =============================================================================

/// Per-category token counts for one text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SyntacticFeatures {
    /// Stopword count.
    pub stopwords: usize,
    /// Noun count.
    pub nouns: usize,
    /// Verb count.
    pub verbs: usize,
    /// Adverb count.
    pub adverbs: usize,
    /// Adjective count.
    pub adjectives: usize,
    /// Pronoun count.
    pub pronouns: usize,
}

impl SyntacticFeatures {
    /// Count for one category.
    pub fn get(&self, category: SyntacticCategory) -> usize {
        match category {
            SyntacticCategory::Stopwords => self.stopwords,
            SyntacticCategory::Nouns => self.nouns,
            SyntacticCategory::Verbs => self.verbs,
            SyntacticCategory::Adverbs => self.adverbs,
            SyntacticCategory::Adjectives => self.adjectives,
            SyntacticCategory::Pronouns => self.pronouns,
        }
    }

    fn increment(&mut self, category: SyntacticCategory) {
        let slot = match category {
            SyntacticCategory::Stopwords => &mut self.stopwords,
            SyntacticCategory::Nouns => &mut self.nouns,
            SyntacticCategory::Verbs => &mut self.verbs,
            SyntacticCategory::Adverbs => &mut self.adverbs,
            SyntacticCategory::Adjectives => &mut self.adjectives,
            SyntacticCategory::Pronouns => &mut self.pronouns,
        };
        *slot += 1;
    }

    /// Sum over all six categories.
    pub fn total(&self) -> usize {
        SyntacticCategory::ALL.iter().map(|c| self.get(*c)).sum()
    }

    /// All six counts keyed by category name, zeros included.
    pub fn as_map(&self) -> BTreeMap<&'static str, usize> {
        SyntacticCategory::ALL
            .iter()
            .map(|c| (c.key(), self.get(*c)))
            .collect()
    }
}

// =============================================================================
// SyntacticCounter
// =============================================================================

/// Tokenizes, tags and counts syntactic categories.
#[derive(Debug, Clone, Default)]
pub struct SyntacticCounter<S = EnglishStopwords, P = LexiconTagger> {
    tokenizer: WordTokenizer,
    stopwords: S,
    tagger: P,
}

impl SyntacticCounter {
    /// Creates a counter with the English stopword list and the lexicon tagger.
    #[must_use]
    pub fn new() -> Self {
        Self::with_resources(EnglishStopwords::new(), LexiconTagger::new())
    }
}

impl<S: StopwordSet, P: PosTagger> SyntacticCounter<S, P> {
    /// Creates a counter with custom linguistic resources.
    pub fn with_resources(stopwords: S, tagger: P) -> Self {
        Self {
            tokenizer: WordTokenizer::new(),
            stopwords,
            tagger,
        }
    }

    /// Category for one tagged token, if any.
    pub fn classify(&self, word: &str, tag: &str) -> Option<SyntacticCategory> {
        if self.stopwords.is_stopword(&word.to_lowercase()) {
            return Some(SyntacticCategory::Stopwords);
        }
        SyntacticCategory::from_tag(tag)
    }

    /// Counts the categories of every token in `text`.
    pub fn count(&self, text: &str) -> SyntacticFeatures {
        let tokens = self.tokenizer.tokenize(text);
        let mut features = SyntacticFeatures::default();
        for tagged in self.tagger.tag(&tokens) {
            if let Some(category) = self.classify(&tagged.word, &tagged.tag) {
                features.increment(category);
            }
        }
        features
    }
}

/// Counts syntactic features with the default resources.
pub fn count_syntactic_features(text: &str) -> SyntacticFeatures {
    SyntacticCounter::new().count(text)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::TaggedToken;
    use std::collections::HashSet;

    /// Tags every token with the same tag.
    struct FixedTagger(&'static str);

    impl PosTagger for FixedTagger {
        fn tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
            tokens.iter().map(|t| TaggedToken::new(t.clone(), self.0)).collect()
        }
    }

    #[test]
    fn test_cat_runs_quickly() {
        let counts = count_syntactic_features("The cat runs quickly");

        assert_eq!(counts.stopwords, 1);
        assert_eq!(counts.nouns, 1);
        assert_eq!(counts.verbs, 1);
        assert_eq!(counts.adverbs, 1);
        assert_eq!(counts.adjectives, 0);
        assert_eq!(counts.pronouns, 0);
    }

    #[test]
    fn test_stopword_beats_pronoun() {
        // "she" is tagged PRP but is also a stopword.
        let counts = count_syntactic_features("she sings");
        assert_eq!(counts.stopwords, 1);
        assert_eq!(counts.pronouns, 0);
        assert_eq!(counts.verbs, 1);
    }

    #[test]
    fn test_punctuation_is_uncounted() {
        let counts = count_syntactic_features("Wow , great !");
        assert_eq!(counts.adjectives, 1);
        assert_eq!(counts.total(), 1);
    }

    #[test]
    fn test_map_has_all_keys() {
        let map = count_syntactic_features("").as_map();
        assert_eq!(map.len(), 6);
        for key in ["Stopwords", "Nouns", "Verbs", "Adverbs", "Adjectives", "Pronouns"] {
            assert_eq!(map[key], 0);
        }
    }

    #[test]
    fn test_tag_priority() {
        assert_eq!(SyntacticCategory::from_tag("NNPS"), Some(SyntacticCategory::Nouns));
        assert_eq!(SyntacticCategory::from_tag("VBZ"), Some(SyntacticCategory::Verbs));
        assert_eq!(SyntacticCategory::from_tag("RBR"), Some(SyntacticCategory::Adverbs));
        assert_eq!(SyntacticCategory::from_tag("JJS"), Some(SyntacticCategory::Adjectives));
        assert_eq!(SyntacticCategory::from_tag("PRP$"), Some(SyntacticCategory::Pronouns));
        assert_eq!(SyntacticCategory::from_tag("DT"), None);
    }

    #[test]
    fn test_injected_resources() {
        let stopwords: HashSet<String> = std::iter::once("cat".to_string()).collect();
        let counter = SyntacticCounter::with_resources(stopwords, FixedTagger("JJ"));
        let counts = counter.count("The cat sat");

        assert_eq!(counts.stopwords, 1);
        assert_eq!(counts.adjectives, 2);
    }

    #[test]
    fn test_serialized_keys() {
        let counts = count_syntactic_features("The cat runs quickly");
        let json = serde_json::to_value(counts).unwrap();
        assert_eq!(json["Stopwords"], 1);
        assert_eq!(json["Nouns"], 1);
        assert_eq!(json["Pronouns"], 0);
    }
}

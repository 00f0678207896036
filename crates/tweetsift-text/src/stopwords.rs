//! Stopwords - Function Word Lists
//!
//! Provides the standard English stopword list and the `StopwordSet` trait
//! used wherever a component needs to ask "is this a stopword?". Alternate
//! lists can be plugged in by implementing the trait.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use std::collections::{BTreeSet, HashSet};

use once_cell::sync::Lazy;

/// The standard English stopword list (179 entries, lowercase).
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

static ENGLISH: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ENGLISH_STOPWORDS.iter().copied().collect());

// =============================================================================
// StopwordSet Trait
// =============================================================================

/// Membership test for stopwords.
pub trait StopwordSet: Send + Sync {
    /// Returns true if `word` is a stopword. Implementations compare
    /// case-insensitively.
    fn is_stopword(&self, word: &str) -> bool;
}

// =============================================================================
// EnglishStopwords
// =============================================================================

/// The standard English stopword list.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishStopwords;

impl EnglishStopwords {
    /// Creates a handle to the English list.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Number of words in the list.
    pub fn len(&self) -> usize {
        ENGLISH.len()
    }

    /// Always false; the list is fixed.
    pub fn is_empty(&self) -> bool {
        ENGLISH.is_empty()
    }
}

impl StopwordSet for EnglishStopwords {
    fn is_stopword(&self, word: &str) -> bool {
        ENGLISH.contains(word) || ENGLISH.contains(word.to_lowercase().as_str())
    }
}

// =============================================================================
// Custom Sets
// =============================================================================

impl StopwordSet for HashSet<String> {
    fn is_stopword(&self, word: &str) -> bool {
        self.contains(word) || self.contains(&word.to_lowercase())
    }
}

impl StopwordSet for BTreeSet<String> {
    fn is_stopword(&self, word: &str) -> bool {
        self.contains(word) || self.contains(&word.to_lowercase())
    }
}

impl<S: StopwordSet + ?Sized> StopwordSet for &S {
    fn is_stopword(&self, word: &str) -> bool {
        (**self).is_stopword(word)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_list_size() {
        assert_eq!(ENGLISH_STOPWORDS.len(), 179);
        assert_eq!(EnglishStopwords.len(), 179);
    }

    #[test]
    fn test_english_membership_is_case_insensitive() {
        let stopwords = EnglishStopwords::new();
        assert!(stopwords.is_stopword("the"));
        assert!(stopwords.is_stopword("The"));
        assert!(stopwords.is_stopword("DON'T"));
        assert!(!stopwords.is_stopword("cat"));
        assert!(!stopwords.is_stopword(""));
    }

    #[test]
    fn test_custom_set() {
        let custom: HashSet<String> = ["lol", "rt"].iter().map(|s| (*s).to_string()).collect();
        assert!(custom.is_stopword("LOL"));
        assert!(!custom.is_stopword("the"));
    }
}

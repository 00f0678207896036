//! Frequency - Word Counting for Clouds
//!
//! Extracts words with `\w[\w']+`, drops stopwords, strips a trailing `'s`,
//! drops purely numeric words, folds simple plurals (`dogs` into `dog`) and
//! keeps the most frequent ones. Frequencies are normalized so the most
//! common word has weight 1.0.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tweetsift_text::{EnglishStopwords, StopwordSet};

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w[\w']+").expect("valid word regex"));

// =============================================================================
// WordFrequency
// =============================================================================

/// A word and its weight relative to the most frequent word.
#[derive(Debug, Clone, PartialEq)]
pub struct WordFrequency {
    /// The word.
    pub word: String,
    /// Raw occurrence count.
    pub count: usize,
    /// `count / max_count`, in `(0, 1]`.
    pub weight: f64,
}

// =============================================================================
// FrequencyCounter
// =============================================================================

/// Counts words for a cloud.
#[derive(Debug, Clone)]
pub struct FrequencyCounter<S = EnglishStopwords> {
    stopwords: S,
    max_words: usize,
    normalize_plurals: bool,
}

impl FrequencyCounter {
    /// Creates a counter with the English stopword list.
    #[must_use]
    pub fn new(max_words: usize) -> Self {
        Self::with_stopwords(EnglishStopwords::new(), max_words)
    }
}

impl<S: StopwordSet> FrequencyCounter<S> {
    /// Creates a counter with a custom stopword set.
    pub fn with_stopwords(stopwords: S, max_words: usize) -> Self {
        Self {
            stopwords,
            max_words,
            normalize_plurals: true,
        }
    }

    /// Enables or disables folding `word + "s"` into `word` (on by default).
    #[must_use]
    pub fn normalize_plurals(mut self, enabled: bool) -> Self {
        self.normalize_plurals = enabled;
        self
    }

    /// Maximum number of words kept.
    pub fn max_words(&self) -> usize {
        self.max_words
    }

    /// Extracts the countable words of `text`, case-folded, in order.
    pub fn words(&self, text: &str) -> Vec<String> {
        let folded = text.to_lowercase();
        WORD_RE
            .find_iter(&folded)
            .map(|m| m.as_str())
            .filter(|w| !self.stopwords.is_stopword(w))
            .map(|w| w.strip_suffix("'s").unwrap_or(w))
            .filter(|w| !w.is_empty() && !w.chars().all(|c| c.is_ascii_digit()))
            .map(str::to_string)
            .collect()
    }

    /// Occurrence counts. A plural is folded into its singular only when
    /// the singular occurs too; words ending in `ss` are never folded.
    pub fn counts(&self, text: &str) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for word in self.words(text) {
            *counts.entry(word).or_insert(0) += 1;
        }
        if self.normalize_plurals {
            fold_plurals(&mut counts);
        }
        counts
    }

    /// The `max_words` most frequent words, most frequent first, ties broken
    /// alphabetically.
    pub fn frequencies(&self, text: &str) -> Vec<WordFrequency> {
        let mut counts: Vec<(String, usize)> = self.counts(text).into_iter().collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts.truncate(self.max_words);

        let max = counts.first().map_or(1, |(_, c)| *c) as f64;
        counts
            .into_iter()
            .map(|(word, count)| WordFrequency {
                word,
                count,
                weight: count as f64 / max,
            })
            .collect()
    }
}

fn fold_plurals(counts: &mut HashMap<String, usize>) {
    let plurals: Vec<String> = counts
        .keys()
        .filter(|w| w.ends_with('s') && !w.ends_with("ss"))
        .filter(|w| counts.contains_key(&w[..w.len() - 1]))
        .cloned()
        .collect();

    for plural in plurals {
        if let Some(count) = counts.remove(&plural) {
            *counts.entry(plural[..plural.len() - 1].to_string()).or_insert(0) += count;
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_words_filtering() {
        let counter = FrequencyCounter::new(200);
        let words = counter.words("The dog's bone and 2024 dogs, a I x");

        assert_eq!(words, vec!["dog", "bone", "dogs"]);
    }

    #[test]
    fn test_plurals_folded_into_singular() {
        let counter = FrequencyCounter::new(200);
        let counts = counter.counts("The dog's bone and 2024 dogs, a I x");

        assert_eq!(counts.len(), 2);
        assert_eq!(counts["dog"], 2);
        assert_eq!(counts["bone"], 1);

        // No singular to fold into, and `ss` endings stay put
        let counts = counter.counts("cats glass glas");
        assert_eq!(counts["cats"], 1);
        assert_eq!(counts["glass"], 1);
        assert_eq!(counts["glas"], 1);
    }

    #[test]
    fn test_plural_folding_can_be_disabled() {
        let counter = FrequencyCounter::new(200).normalize_plurals(false);
        let counts = counter.counts("dog dogs dogs");
        assert_eq!(counts["dog"], 1);
        assert_eq!(counts["dogs"], 2);
    }

    #[test]
    fn test_case_folded() {
        let counter = FrequencyCounter::new(200);
        let counts = counter.counts("Love LOVE love");
        assert_eq!(counts["love"], 3);
    }

    #[test]
    fn test_frequencies_sorted_and_normalized() {
        let counter = FrequencyCounter::new(200);
        let freqs = counter.frequencies("sun rain sun beach rain sun");

        let words: Vec<_> = freqs.iter().map(|f| f.word.as_str()).collect();
        assert_eq!(words, vec!["sun", "rain", "beach"]);
        assert!((freqs[0].weight - 1.0).abs() < f64::EPSILON);
        assert!((freqs[2].weight - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_max_words_and_ties() {
        let counter = FrequencyCounter::new(2);
        let freqs = counter.frequencies("zebra apple mango");

        let words: Vec<_> = freqs.iter().map(|f| f.word.as_str()).collect();
        assert_eq!(words, vec!["apple", "mango"]);
    }

    #[test]
    fn test_custom_stopwords() {
        let stopwords: HashSet<String> = std::iter::once("rain".to_string()).collect();
        let counter = FrequencyCounter::with_stopwords(stopwords, 10);
        let freqs = counter.frequencies("the rain in spain");

        let words: Vec<_> = freqs.iter().map(|f| f.word.as_str()).collect();
        assert_eq!(words, vec!["in", "spain", "the"]);
    }

    #[test]
    fn test_empty() {
        assert!(FrequencyCounter::new(200).frequencies("a , 1 !").is_empty());
    }
}

//! Normalize - Tweet Noise Removal
//!
//! Provides the ordered sequence of string transformations applied to every
//! tweet before classification. Steps are composed the same way data
//! transforms are: each one is a pure `&str -> String` stage and the
//! normalizer runs them front to back.
//!
//! The standard order is:
//!
//! 1. lowercase
//! 2. URLs
//! 3. HTML tags and character entities
//! 4. emoji and pictographs
//! 5. `@mentions`
//! 6. hashtag markers and words containing `iron`
//! 7. words containing `sarc`
//! 8. retokenize, join with single spaces, lowercase
//!
//! Hashtag stripping relies on URLs and mentions being gone already.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use std::fmt::Display;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::tokenizer::{Tokenizer, WordTokenizer};

// =============================================================================
// Patterns
// =============================================================================

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+|www\.\S+").expect("valid URL pattern"));

static HTML_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<.*?>|&(?:[a-z0-9]+|#[0-9]{1,6}|#x[0-9a-f]{1,6});").expect("valid HTML pattern")
});

static EMOJI_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        "[",
        r"\x{1F600}-\x{1F64F}", // emoticons
        r"\x{1F300}-\x{1F5FF}", // symbols & pictographs
        r"\x{1F680}-\x{1F6FF}", // transport & map symbols
        r"\x{1F1E0}-\x{1F1FF}", // flags
        r"\x{2702}-\x{27B0}",   // dingbats
        r"\x{24C2}-\x{1F251}",  // enclosed characters
        "]+",
    ))
    .expect("valid emoji pattern")
});

static MENTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@[A-Za-z0-9]+").expect("valid mention pattern"));

static HASHTAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S*#(?:\[[^\]]+\]|\S+)").expect("valid hashtag pattern"));

static IRON_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w*iron\w*\b").expect("valid pattern"));

static SARC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w*sarc\w*\b").expect("valid pattern"));

static STANDARD: Lazy<TweetNormalizer> = Lazy::new(TweetNormalizer::new);

// =============================================================================
// NormalizeStep Trait
// =============================================================================

/// A single string-cleaning stage.
pub trait NormalizeStep: Send + Sync {
    /// Short name used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Applies the step to the text.
    fn apply(&self, text: &str) -> String;
}

// =============================================================================
// Lowercase
// =============================================================================

/// Lowercases the whole string.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lowercase;

impl NormalizeStep for Lowercase {
    fn name(&self) -> &'static str {
        "lowercase"
    }

    fn apply(&self, text: &str) -> String {
        text.to_lowercase()
    }
}

// =============================================================================
// PatternStrip
// =============================================================================

/// Deletes every match of one or more patterns, in order.
#[derive(Debug, Clone)]
pub struct PatternStrip {
    name: &'static str,
    patterns: Vec<&'static Regex>,
}

impl PatternStrip {
    /// Creates a step from already-compiled patterns.
    #[must_use]
    pub fn new(name: &'static str, patterns: Vec<&'static Regex>) -> Self {
        Self { name, patterns }
    }

    /// `http(s)://...` and `www....` up to the next whitespace.
    #[must_use]
    pub fn urls() -> Self {
        Self::new("urls", vec![&*URL_RE])
    }

    /// HTML tags and named or numeric character entities.
    #[must_use]
    pub fn html() -> Self {
        Self::new("html", vec![&*HTML_RE])
    }

    /// Emoji, pictographs, flags, dingbats and enclosed characters.
    #[must_use]
    pub fn emoji() -> Self {
        Self::new("emoji", vec![&*EMOJI_RE])
    }

    /// `@` followed by ASCII letters or digits.
    #[must_use]
    pub fn mentions() -> Self {
        Self::new("mentions", vec![&*MENTION_RE])
    }

    /// Hashtag tokens (bracketed or bare), then any word containing `iron`.
    #[must_use]
    pub fn irony_markers() -> Self {
        Self::new("irony_markers", vec![&*HASHTAG_RE, &*IRON_RE])
    }

    /// Any word containing `sarc`.
    #[must_use]
    pub fn sarcasm_words() -> Self {
        Self::new("sarcasm_words", vec![&*SARC_RE])
    }
}

impl NormalizeStep for PatternStrip {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, text: &str) -> String {
        let mut result = text.to_string();
        for pattern in &self.patterns {
            result = pattern.replace_all(&result, "").into_owned();
        }
        result
    }
}

// =============================================================================
// Retokenize
// =============================================================================

/// Tokenizes, joins with single spaces and lowercases.
#[derive(Debug, Clone, Default)]
pub struct Retokenize<T: Tokenizer = WordTokenizer> {
    tokenizer: T,
}

impl<T: Tokenizer> Retokenize<T> {
    /// Creates a step around the given tokenizer.
    pub fn new(tokenizer: T) -> Self {
        Self { tokenizer }
    }
}

impl<T: Tokenizer> NormalizeStep for Retokenize<T> {
    fn name(&self) -> &'static str {
        "retokenize"
    }

    fn apply(&self, text: &str) -> String {
        self.tokenizer.tokenize_joined(text).to_lowercase()
    }
}

// =============================================================================
// TweetNormalizer
// =============================================================================

/// Runs normalization steps in order.
pub struct TweetNormalizer {
    steps: Vec<Box<dyn NormalizeStep>>,
}

impl TweetNormalizer {
    /// Creates the standard eight-step tweet normalizer.
    #[must_use]
    pub fn new() -> Self {
        Self::empty()
            .add(Lowercase)
            .add(PatternStrip::urls())
            .add(PatternStrip::html())
            .add(PatternStrip::emoji())
            .add(PatternStrip::mentions())
            .add(PatternStrip::irony_markers())
            .add(PatternStrip::sarcasm_words())
            .add(Retokenize::new(WordTokenizer::new()))
    }

    /// Creates a normalizer with no steps.
    #[must_use]
    pub fn empty() -> Self {
        Self { steps: Vec::new() }
    }

    /// Appends a step.
    pub fn add<S: NormalizeStep + 'static>(mut self, step: S) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    /// Names of the steps in execution order.
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Normalizes a single text.
    pub fn normalize(&self, text: &str) -> String {
        let mut result = text.to_string();
        for step in &self.steps {
            result = step.apply(&result);
        }
        result
    }

    /// Normalizes any value through its string form.
    pub fn normalize_value<V: Display + ?Sized>(&self, value: &V) -> String {
        self.normalize(&value.to_string())
    }
}

impl Default for TweetNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TweetNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TweetNormalizer")
            .field("steps", &self.step_names())
            .finish()
    }
}

/// Normalizes a tweet with the standard step sequence.
pub fn normalize_tweet(text: &str) -> String {
    STANDARD.normalize(text)
}

// =============================================================================
// Tests
// =============================================================================

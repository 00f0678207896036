//! Tokenizer - Word-level Tokenization
//!
//! Splits text into words and punctuation on Unicode word boundaries
//! (UAX #29), then applies the Treebank conventions used by English
//! taggers: period runs stay together, negations split off as `n't` and
//! contraction clitics (`'s`, `'ll`, ...) become their own tokens.
//!
//! Joining the output with single spaces and tokenizing again yields the
//! same tokens.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use unicode_segmentation::UnicodeSegmentation;

/// Clitic tails split off after an apostrophe.
const CLITICS: [&str; 6] = ["s", "m", "d", "ll", "re", "ve"];

// =============================================================================
// Tokenizer Trait
// =============================================================================

/// Trait for text tokenization.
pub trait Tokenizer: Send + Sync {
    /// Tokenizes a string into tokens.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Tokenizes and rejoins the tokens with single spaces.
    fn tokenize_joined(&self, text: &str) -> String {
        self.tokenize(text).join(" ")
    }
}

// =============================================================================
// WordTokenizer
// =============================================================================

/// Treebank-style word tokenizer.
#[derive(Debug, Clone, Default)]
pub struct WordTokenizer {
    lowercase: bool,
}

impl WordTokenizer {
    /// Creates a new `WordTokenizer` that preserves case.
    #[must_use]
    pub fn new() -> Self {
        Self { lowercase: false }
    }

    /// Creates a tokenizer that lowercases all tokens.
    #[must_use]
    pub fn lowercase() -> Self {
        Self { lowercase: true }
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens: Vec<String> = Vec::new();
        // True when the previous segment touches the current one.
        let mut attached = false;

        for segment in text.split_word_bounds() {
            if segment.chars().all(char::is_whitespace) {
                attached = false;
                continue;
            }

            if attached {
                if let Some(last) = tokens.last_mut() {
                    if segment == "." && is_period_run(last) {
                        last.push('.');
                        continue;
                    }
                    if is_apostrophe(last) && CLITICS.contains(&segment.to_lowercase().as_str()) {
                        last.push_str(segment);
                        continue;
                    }
                }
            }

            split_clitics(segment, &mut tokens);
            attached = true;
        }

        if self.lowercase {
            for token in &mut tokens {
                *token = token.to_lowercase();
            }
        }
        tokens
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn is_period_run(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c == '.')
}

fn is_apostrophe(token: &str) -> bool {
    token == "'" || token == "\u{2019}"
}

/// Pushes `word`, peeling trailing `n't` and `'s`-style clitics until none
/// remain, so stacked contractions (`shouldn't've`) split fully.
fn split_clitics(word: &str, tokens: &mut Vec<String>) {
    let lower = word.to_lowercase();

    if word.chars().count() > 3 && (lower.ends_with("n't") || lower.ends_with("n\u{2019}t")) {
        let tail_len = if lower.ends_with("n't") { 3 } else { "n\u{2019}t".len() };
        let cut = word.len() - tail_len;
        split_clitics(&word[..cut], tokens);
        tokens.push(word[cut..].to_string());
        return;
    }

    if let Some(pos) = word.rfind(['\'', '\u{2019}']) {
        let apostrophe_len = word[pos..].chars().next().map_or(1, char::len_utf8);
        let tail = &word[pos + apostrophe_len..];
        if pos > 0 && CLITICS.contains(&tail.to_lowercase().as_str()) {
            split_clitics(&word[..pos], tokens);
            tokens.push(word[pos..].to_string());
            return;
        }
    }

    tokens.push(word.to_string());
}

// =============================================================================
// Tests
// =============================================================================

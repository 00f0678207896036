//! Tagger - Part-of-Speech Tagging
//!
//! Provides the `PosTagger` trait and `LexiconTagger`, a rule-based tagger
//! emitting Penn Treebank tags. The tagger works left to right: a closed-class
//! lexicon first, then a lexicon of common verb lemmas with their inflections,
//! then suffix heuristics, with the previous token's tag resolving
//! noun/verb ambiguity.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

// =============================================================================
// Lexicons
// =============================================================================

const CLOSED_CLASS: &[(&str, &str)] = &[
    // Determiners
    ("the", "DT"), ("a", "DT"), ("an", "DT"), ("this", "DT"), ("that", "DT"),
    ("these", "DT"), ("those", "DT"), ("every", "DT"), ("each", "DT"), ("some", "DT"),
    ("any", "DT"), ("no", "DT"), ("another", "DT"), ("all", "DT"), ("both", "DT"),
    ("either", "DT"), ("neither", "DT"), ("half", "DT"),
    // Pronouns
    ("i", "PRP"), ("me", "PRP"), ("you", "PRP"), ("he", "PRP"), ("him", "PRP"),
    ("she", "PRP"), ("it", "PRP"), ("we", "PRP"), ("us", "PRP"), ("they", "PRP"),
    ("them", "PRP"), ("myself", "PRP"), ("yourself", "PRP"), ("himself", "PRP"),
    ("herself", "PRP"), ("itself", "PRP"), ("ourselves", "PRP"), ("yourselves", "PRP"),
    ("themselves", "PRP"), ("u", "PRP"), ("ya", "PRP"),
    ("my", "PRP$"), ("your", "PRP$"), ("his", "PRP$"), ("her", "PRP$"), ("its", "PRP$"),
    ("our", "PRP$"), ("their", "PRP$"), ("ur", "PRP$"),
    // Wh-words
    ("who", "WP"), ("whom", "WP"), ("what", "WP"), ("whoever", "WP"), ("whose", "WP$"),
    ("which", "WDT"), ("whatever", "WDT"), ("whichever", "WDT"), ("when", "WRB"),
    ("where", "WRB"), ("why", "WRB"), ("how", "WRB"), ("whenever", "WRB"),
    ("wherever", "WRB"),
    // Prepositions and subordinators
    ("of", "IN"), ("in", "IN"), ("on", "IN"), ("at", "IN"), ("by", "IN"), ("for", "IN"),
    ("with", "IN"), ("about", "IN"), ("against", "IN"), ("between", "IN"), ("into", "IN"),
    ("through", "IN"), ("during", "IN"), ("before", "IN"), ("after", "IN"), ("above", "IN"),
    ("below", "IN"), ("from", "IN"), ("over", "IN"), ("under", "IN"), ("since", "IN"),
    ("until", "IN"), ("while", "IN"), ("because", "IN"), ("although", "IN"),
    ("though", "IN"), ("if", "IN"), ("unless", "IN"), ("than", "IN"), ("as", "IN"),
    ("upon", "IN"), ("within", "IN"), ("without", "IN"), ("across", "IN"), ("along", "IN"),
    ("among", "IN"), ("around", "IN"), ("behind", "IN"), ("beyond", "IN"), ("near", "IN"),
    ("toward", "IN"), ("towards", "IN"), ("onto", "IN"), ("via", "IN"), ("per", "IN"),
    ("despite", "IN"), ("except", "IN"),
    ("up", "RP"), ("down", "RP"), ("out", "RP"), ("off", "RP"), ("away", "RP"),
    // Conjunctions
    ("and", "CC"), ("but", "CC"), ("or", "CC"), ("nor", "CC"), ("yet", "CC"), ("plus", "CC"),
    ("to", "TO"),
    ("there", "EX"),
    // Modals
    ("can", "MD"), ("could", "MD"), ("will", "MD"), ("would", "MD"), ("shall", "MD"),
    ("should", "MD"), ("may", "MD"), ("might", "MD"), ("must", "MD"), ("'ll", "MD"),
    ("'d", "MD"), ("ca", "MD"), ("wo", "MD"), ("sha", "MD"),
    // Auxiliaries
    ("am", "VBP"), ("is", "VBZ"), ("are", "VBP"), ("was", "VBD"), ("were", "VBD"),
    ("be", "VB"), ("been", "VBN"), ("being", "VBG"), ("have", "VBP"), ("has", "VBZ"),
    ("had", "VBD"), ("having", "VBG"), ("do", "VBP"), ("does", "VBZ"), ("did", "VBD"),
    ("doing", "VBG"), ("done", "VBN"), ("'m", "VBP"), ("'re", "VBP"), ("'ve", "VBP"),
    ("ai", "VBP"), ("'s", "POS"),
];

const OPEN_CLASS: &[(&str, &str)] = &[
    // Adverbs
    ("not", "RB"), ("n't", "RB"), ("never", "RB"), ("very", "RB"), ("too", "RB"),
    ("also", "RB"), ("just", "RB"), ("only", "RB"), ("really", "RB"), ("quite", "RB"),
    ("always", "RB"), ("often", "RB"), ("sometimes", "RB"), ("usually", "RB"),
    ("now", "RB"), ("then", "RB"), ("here", "RB"), ("again", "RB"), ("still", "RB"),
    ("already", "RB"), ("even", "RB"), ("ever", "RB"), ("soon", "RB"), ("almost", "RB"),
    ("rather", "RB"), ("maybe", "RB"), ("perhaps", "RB"), ("so", "RB"), ("else", "RB"),
    ("enough", "RB"), ("instead", "RB"), ("later", "RB"), ("today", "RB"),
    ("tomorrow", "RB"), ("yesterday", "RB"), ("tonight", "RB"), ("once", "RB"),
    ("twice", "RB"), ("far", "RB"), ("well", "RB"), ("back", "RB"), ("ago", "RB"),
    ("together", "RB"), ("anyway", "RB"), ("anymore", "RB"), ("pretty", "RB"),
    ("further", "RB"),
    // Adjectives
    ("good", "JJ"), ("bad", "JJ"), ("great", "JJ"), ("new", "JJ"), ("old", "JJ"),
    ("big", "JJ"), ("small", "JJ"), ("little", "JJ"), ("long", "JJ"), ("short", "JJ"),
    ("high", "JJ"), ("low", "JJ"), ("happy", "JJ"), ("sad", "JJ"), ("nice", "JJ"),
    ("awesome", "JJ"), ("amazing", "JJ"), ("terrible", "JJ"), ("horrible", "JJ"),
    ("funny", "JJ"), ("real", "JJ"), ("sure", "JJ"), ("right", "JJ"), ("wrong", "JJ"),
    ("true", "JJ"), ("false", "JJ"), ("whole", "JJ"), ("free", "JJ"), ("full", "JJ"),
    ("easy", "JJ"), ("hard", "JJ"), ("same", "JJ"), ("different", "JJ"), ("own", "JJ"),
    ("other", "JJ"), ("last", "JJ"), ("next", "JJ"), ("many", "JJ"), ("much", "JJ"),
    ("few", "JJ"), ("able", "JJ"), ("young", "JJ"), ("important", "JJ"), ("large", "JJ"),
    ("early", "JJ"), ("late", "JJ"), ("beautiful", "JJ"), ("ugly", "JJ"), ("lovely", "JJ"),
    ("friendly", "JJ"), ("silly", "JJ"), ("lonely", "JJ"), ("holy", "JJ"), ("daily", "JJ"),
    ("likely", "JJ"), ("fine", "JJ"), ("cool", "JJ"), ("hot", "JJ"), ("cold", "JJ"),
    ("busy", "JJ"), ("glad", "JJ"), ("ready", "JJ"), ("sick", "JJ"), ("crazy", "JJ"),
    ("lucky", "JJ"), ("weird", "JJ"), ("perfect", "JJ"), ("favorite", "JJ"),
    ("stupid", "JJ"), ("smart", "JJ"), ("dumb", "JJ"), ("dead", "JJ"), ("alive", "JJ"),
    ("rich", "JJ"), ("poor", "JJ"), ("huge", "JJ"), ("tiny", "JJ"), ("main", "JJ"),
    ("clear", "JJ"), ("dark", "JJ"), ("bright", "JJ"), ("strong", "JJ"), ("weak", "JJ"),
    ("quick", "JJ"), ("slow", "JJ"), ("fast", "JJ"), ("safe", "JJ"), ("sorry", "JJ"),
    ("first", "JJ"), ("second", "JJ"), ("such", "JJ"),
    ("better", "JJR"), ("worse", "JJR"), ("more", "JJR"), ("less", "JJR"),
    ("bigger", "JJR"), ("smaller", "JJR"), ("older", "JJR"), ("newer", "JJR"),
    ("best", "JJS"), ("worst", "JJS"), ("most", "JJS"), ("least", "JJS"),
    // Interjections
    ("oh", "UH"), ("wow", "UH"), ("yeah", "UH"), ("yes", "UH"), ("ok", "UH"), ("okay", "UH"),
    ("lol", "UH"), ("haha", "UH"), ("omg", "UH"), ("hey", "UH"), ("hi", "UH"),
    ("hello", "UH"), ("please", "UH"), ("yay", "UH"), ("ugh", "UH"), ("ah", "UH"),
    // Nouns the suffix rules would get wrong
    ("family", "NN"), ("thing", "NN"), ("nothing", "NN"), ("something", "NN"),
    ("anything", "NN"), ("everything", "NN"), ("everyone", "NN"), ("someone", "NN"),
    ("anyone", "NN"), ("nobody", "NN"), ("morning", "NN"), ("evening", "NN"),
    ("wedding", "NN"), ("ceiling", "NN"), ("king", "NN"), ("ring", "NN"), ("spring", "NN"),
    ("string", "NN"), ("news", "NN"), ("series", "NN"), ("people", "NNS"), ("time", "NN"),
    ("day", "NN"),
    // Number words
    ("one", "CD"), ("two", "CD"), ("three", "CD"), ("four", "CD"), ("five", "CD"),
    ("six", "CD"), ("seven", "CD"), ("eight", "CD"), ("nine", "CD"), ("ten", "CD"),
    ("hundred", "CD"), ("thousand", "CD"), ("million", "CD"),
    // Irregular verb forms
    ("went", "VBD"), ("said", "VBD"), ("got", "VBD"), ("made", "VBD"), ("knew", "VBD"),
    ("took", "VBD"), ("saw", "VBD"), ("came", "VBD"), ("thought", "VBD"), ("gave", "VBD"),
    ("found", "VBD"), ("told", "VBD"), ("felt", "VBD"), ("left", "VBD"), ("ran", "VBD"),
    ("ate", "VBD"), ("slept", "VBD"), ("wrote", "VBD"), ("brought", "VBD"),
    ("began", "VBD"), ("kept", "VBD"), ("held", "VBD"), ("stood", "VBD"), ("meant", "VBD"),
    ("heard", "VBD"), ("lost", "VBD"), ("sat", "VBD"), ("paid", "VBD"), ("met", "VBD"),
    ("sold", "VBD"), ("sent", "VBD"), ("built", "VBD"), ("fell", "VBD"), ("won", "VBD"),
    ("spoke", "VBD"), ("bought", "VBD"), ("forgot", "VBD"), ("caught", "VBD"),
    ("taught", "VBD"), ("drove", "VBD"), ("flew", "VBD"), ("sang", "VBD"), ("broke", "VBD"),
    ("chose", "VBD"), ("wore", "VBD"),
    ("gone", "VBN"), ("known", "VBN"), ("taken", "VBN"), ("seen", "VBN"), ("given", "VBN"),
    ("written", "VBN"), ("begun", "VBN"), ("eaten", "VBN"), ("spoken", "VBN"),
    ("forgotten", "VBN"), ("broken", "VBN"), ("chosen", "VBN"), ("driven", "VBN"),
];

const VERB_LEMMAS: &[&str] = &[
    "say", "get", "make", "go", "know", "take", "see", "come", "think", "look", "want", "give",
    "use", "find", "tell", "ask", "work", "seem", "feel", "try", "leave", "call", "love", "like",
    "hate", "need", "run", "walk", "talk", "eat", "sleep", "play", "watch", "read", "write",
    "live", "believe", "hold", "bring", "happen", "keep", "begin", "start", "show", "hear",
    "let", "put", "mean", "stand", "set", "learn", "change", "move", "pay", "meet", "include",
    "continue", "lead", "understand", "follow", "stop", "create", "speak", "spend", "grow",
    "open", "win", "offer", "remember", "consider", "appear", "buy", "wait", "serve", "die",
    "send", "expect", "build", "stay", "fall", "cut", "reach", "kill", "remain", "suggest",
    "raise", "pass", "sell", "require", "report", "decide", "pull", "help", "laugh", "cry",
    "hope", "wish", "enjoy", "miss", "care", "sing", "dance", "drive", "fly", "swim", "jump",
    "sit", "lose", "fix", "forget", "apply", "reply", "tweet", "post", "check", "thank",
];

static LEXICON: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| CLOSED_CLASS.iter().chain(OPEN_CLASS.iter()).copied().collect());

static LEMMAS: Lazy<HashSet<&'static str>> = Lazy::new(|| VERB_LEMMAS.iter().copied().collect());

const ADJECTIVE_SUFFIXES: [&str; 7] = ["ous", "ful", "able", "ible", "ive", "less", "ical"];

const HAVE_FORMS: [&str; 6] = ["have", "has", "had", "having", "'ve", "'d"];
const BE_FORMS: [&str; 9] = ["is", "are", "was", "were", "be", "been", "being", "am", "'re"];

// =============================================================================
// TaggedToken
// =============================================================================

/// A token paired with its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    /// The token as it appeared in the input.
    pub word: String,
    /// The tag, e.g. `NN` or `VBZ`.
    pub tag: String,
}

impl TaggedToken {
    /// Creates a new tagged token.
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }
}

// =============================================================================
// PosTagger Trait
// =============================================================================

/// Trait for part-of-speech taggers.
pub trait PosTagger: Send + Sync {
    /// Tags every token, preserving order and length.
    fn tag(&self, tokens: &[String]) -> Vec<TaggedToken>;
}

impl<P: PosTagger + ?Sized> PosTagger for &P {
    fn tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
        (**self).tag(tokens)
    }
}

// =============================================================================
// LexiconTagger
// =============================================================================

/// Rule-based Penn Treebank tagger.
#[derive(Debug, Clone, Default)]
pub struct LexiconTagger {
    /// Caller-supplied entries, checked before the built-in lexicon.
    overrides: HashMap<String, String>,
}

/// Context carried from the previous token.
#[derive(Clone, Copy)]
struct Previous<'a> {
    word: &'a str,
    tag: &'a str,
}

impl LexiconTagger {
    /// Creates a tagger with the built-in lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a lexicon entry (matched case-insensitively).
    pub fn with_entry(mut self, word: &str, tag: &str) -> Self {
        self.overrides.insert(word.to_lowercase(), tag.to_string());
        self
    }

    /// Tags one word given the previous token.
    fn tag_word(&self, word: &str, prev: Option<Previous<'_>>) -> String {
        let lower = word.to_lowercase();
        let sentence_start = prev.map_or(true, |p| p.tag == ".");

        if let Some(tag) = self.overrides.get(&lower) {
            return tag.clone();
        }
        if word.chars().all(|c| !c.is_alphanumeric()) {
            return punctuation_tag(word).to_string();
        }
        if is_number(word) {
            return "CD".to_string();
        }
        if lower == "like" {
            return lemma_tag(prev, sentence_start).to_string();
        }
        if let Some(tag) = LEXICON.get(lower.as_str()) {
            return (*tag).to_string();
        }
        if LEMMAS.contains(lower.as_str()) {
            return lemma_tag(prev, sentence_start).to_string();
        }
        if verb_stem_s(&lower).is_some() {
            let prev_tag = prev.map_or("", |p| p.tag);
            let nominal = matches!(prev_tag, "" | "DT" | "PRP$" | "JJ" | "CD" | "IN" | "POS");
            return if nominal { "NNS" } else { "VBZ" }.to_string();
        }

        let len = lower.chars().count();
        if len > 4 && lower.ends_with("ing") {
            return "VBG".to_string();
        }
        if lower.ends_with("ed") && (verb_stem_ed(&lower).is_some() || (len > 4 && !lower.ends_with("eed"))) {
            return past_tag(prev).to_string();
        }
        if len > 4 && lower.ends_with("ly") {
            return "RB".to_string();
        }
        if len > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            return "JJ".to_string();
        }

        let plural = len > 3
            && lower.ends_with('s')
            && !["ss", "us", "is"].iter().any(|s| lower.ends_with(s));
        let capitalized = word.chars().next().is_some_and(char::is_uppercase);

        if capitalized && !sentence_start {
            return if plural { "NNPS" } else { "NNP" }.to_string();
        }
        if plural {
            return "NNS".to_string();
        }
        if prev.is_some_and(|p| p.tag == "TO" || p.tag == "MD") {
            return "VB".to_string();
        }
        "NN".to_string()
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
        let mut tagged: Vec<TaggedToken> = Vec::with_capacity(tokens.len());
        for token in tokens {
            let tag = {
                let prev = tagged.last().map(|t| Previous {
                    word: t.word.as_str(),
                    tag: t.tag.as_str(),
                });
                self.tag_word(token, prev)
            };
            tagged.push(TaggedToken::new(token.clone(), tag));
        }
        tagged
    }
}

// =============================================================================
// Rules
// =============================================================================

/// Tag for a bare verb lemma, which may also be a noun.
fn lemma_tag(prev: Option<Previous<'_>>, sentence_start: bool) -> &'static str {
    if sentence_start {
        return "VB";
    }
    match prev.map_or("", |p| p.tag) {
        "TO" | "MD" => "VB",
        "DT" | "PRP$" | "JJ" | "POS" | "CD" => "NN",
        "PRP" | "NNS" | "NN" | "NNP" | "WP" | "WDT" | "RB" => "VBP",
        _ => "VB",
    }
}

/// Past tense versus past participle after a form of have/be.
fn past_tag(prev: Option<Previous<'_>>) -> &'static str {
    match prev {
        Some(p) => {
            let word = p.word.to_lowercase();
            if HAVE_FORMS.contains(&word.as_str()) || BE_FORMS.contains(&word.as_str()) {
                "VBN"
            } else if matches!(p.tag, "DT" | "PRP$") {
                "JJ"
            } else {
                "VBD"
            }
        }
        None => "VBD",
    }
}

/// Known lemma behind a third-person `-s` form.
fn verb_stem_s(lower: &str) -> Option<&'static str> {
    let candidates = [
        lower.strip_suffix("ies").map(|s| format!("{s}y")),
        lower.strip_suffix("es").map(str::to_string),
        lower.strip_suffix('s').map(str::to_string),
    ];
    candidates
        .into_iter()
        .flatten()
        .find_map(|stem| LEMMAS.get(stem.as_str()).copied())
}

/// Known lemma behind a regular `-ed` form.
fn verb_stem_ed(lower: &str) -> Option<&'static str> {
    let base = lower.strip_suffix("ed")?;
    let mut candidates = vec![base.to_string(), format!("{base}e")];
    if let Some(stem) = base.strip_suffix('i') {
        candidates.push(format!("{stem}y"));
    }
    let chars: Vec<char> = base.chars().collect();
    if chars.len() >= 2 && chars[chars.len() - 1] == chars[chars.len() - 2] {
        candidates.push(chars[..chars.len() - 1].iter().collect());
    }
    candidates
        .into_iter()
        .find_map(|stem| LEMMAS.get(stem.as_str()).copied())
}

fn is_number(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_digit())
        && word
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | ':' | '/' | '-'))
}

fn punctuation_tag(token: &str) -> &'static str {
    match token {
        "." | "!" | "?" => ".",
        "," => ",",
        ":" | ";" | "-" | "--" => ":",
        "(" | "[" | "{" => "(",
        ")" | "]" | "}" => ")",
        "\"" | "``" | "\u{201C}" => "``",
        "'" | "''" | "\u{201D}" | "\u{2019}" => "''",
        "$" => "$",
        "#" => "#",
        t if t.chars().all(|c| c == '.') => ":",
        _ => "SYM",
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(tagger: &LexiconTagger, text: &str) -> Vec<String> {
        let tokens: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        tagger.tag(&tokens).into_iter().map(|t| t.tag).collect()
    }

    #[test]
    fn test_simple_sentence() {
        let tagger = LexiconTagger::new();
        assert_eq!(tags(&tagger, "The cat runs quickly"), vec!["DT", "NN", "VBZ", "RB"]);
    }

    #[test]
    fn test_pronoun_verb() {
        let tagger = LexiconTagger::new();
        assert_eq!(tags(&tagger, "I love this !"), vec!["PRP", "VBP", "DT", "."]);
        assert_eq!(tags(&tagger, "she likes it"), vec!["PRP", "VBZ", "PRP"]);
    }

    #[test]
    fn test_lemma_as_noun_after_determiner() {
        let tagger = LexiconTagger::new();
        assert_eq!(tags(&tagger, "my work"), vec!["PRP$", "NN"]);
        assert_eq!(tags(&tagger, "the runs"), vec!["DT", "NNS"]);
    }

    #[test]
    fn test_past_forms() {
        let tagger = LexiconTagger::new();
        assert_eq!(tags(&tagger, "we stopped"), vec!["PRP", "VBD"]);
        assert_eq!(tags(&tagger, "it was loved"), vec!["PRP", "VBD", "VBN"]);
        assert_eq!(tags(&tagger, "he went"), vec!["PRP", "VBD"]);
    }

    #[test]
    fn test_suffix_rules() {
        let tagger = LexiconTagger::new();
        assert_eq!(
            tags(&tagger, "a dangerous waiting game"),
            vec!["DT", "JJ", "VBG", "NN"]
        );
        assert_eq!(tags(&tagger, "two dogs"), vec!["CD", "NNS"]);
    }

    #[test]
    fn test_proper_nouns_and_numbers() {
        let tagger = LexiconTagger::new();
        assert_eq!(tags(&tagger, "I met Alice at 10:30"), vec!["PRP", "VBD", "NNP", "IN", "CD"]);
    }

    #[test]
    fn test_punctuation() {
        let tagger = LexiconTagger::new();
        assert_eq!(tags(&tagger, ", ... ( ) ! $"), vec![",", ":", "(", ")", ".", "$"]);
    }

    #[test]
    fn test_to_and_modal_take_base_form() {
        let tagger = LexiconTagger::new();
        assert_eq!(tags(&tagger, "want to yeet"), vec!["VB", "TO", "VB"]);
        assert_eq!(tags(&tagger, "you should run"), vec!["PRP", "MD", "VB"]);
    }

    #[test]
    fn test_override_entry() {
        let tagger = LexiconTagger::new().with_entry("Yeet", "VB");
        assert_eq!(tags(&tagger, "yeet"), vec!["VB"]);
    }

    #[test]
    fn test_preserves_words() {
        let tagger = LexiconTagger::new();
        let tokens = vec!["Hello".to_string(), "World".to_string()];
        let tagged = tagger.tag(&tokens);

        assert_eq!(tagged.len(), 2);
        assert_eq!(tagged[0].word, "Hello");
        assert_eq!(tagged[1].word, "World");
    }
}

//! Review text normalization: tokenize, POS-tag, filter to content words,
//! lemmatize. Tagging quality is a black-box concern; the heuristic tagger here
//! can be swapped for a stronger implementation behind the same trait.

use once_cell::sync::Lazy;
use regex::Regex;

use super::is_stopword;

/// Coarse part-of-speech classes the pipeline cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Adjective,
    Noun,
    Other,
}

/// Trait for POS tagger implementations.
pub trait Tagger: Send + Sync {
    fn tag(&self, token: &str) -> PosTag;
}

/// Which content-word subset survives filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFilter {
    /// Adjectives only (clustering flow).
    Adjectives,
    /// Adjectives and nouns minus stopwords (topic and aspect flows).
    AdjectivesAndNouns,
}

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]+").expect("valid regex"));

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "able", "ible", "al", "ant", "ent", "ary", "ful", "ic", "ive", "less", "ous", "ish",
];

const ADJECTIVE_LEXICON: &[&str] = &[
    "bad", "best", "better", "big", "bright", "broken", "cheap", "clear", "cool", "defective",
    "durable", "easy", "expensive", "fast", "fine", "flimsy", "good", "great", "happy", "hard",
    "heavy", "high", "large", "light", "long", "loud", "low", "new", "nice", "old", "poor",
    "quick", "short", "sleek", "slim", "slow", "small", "smooth", "soft", "solid", "sturdy",
    "thin", "tiny", "weak", "worst", "worth",
];

const FUNCTION_WORDS: &[&str] = &[
    "also", "am", "are", "be", "been", "being", "buy", "came", "come", "did", "do", "does",
    "get", "give", "go", "going", "got", "had", "has", "have", "is", "made", "make", "put",
    "said", "say", "see", "take", "took", "use", "used", "using", "want", "was", "went", "were",
    "will", "would",
];

/// Suffix-and-lexicon POS tagger. Deterministic; linguistic accuracy is
/// explicitly out of scope.
#[derive(Debug, Default)]
pub struct HeuristicTagger;

impl Tagger for HeuristicTagger {
    fn tag(&self, token: &str) -> PosTag {
        if ADJECTIVE_LEXICON.contains(&token) {
            return PosTag::Adjective;
        }
        if token.len() > 4
            && ADJECTIVE_SUFFIXES
                .iter()
                .any(|suffix| token.ends_with(suffix))
        {
            return PosTag::Adjective;
        }
        if FUNCTION_WORDS.contains(&token) || is_stopword(token) {
            return PosTag::Other;
        }
        PosTag::Noun
    }
}

/// Reduce a word to a dictionary-ish base form. Covers regular noun plurals;
/// adjectives pass through unchanged.
pub fn lemmatize(token: &str) -> String {
    if let Some(stem) = token.strip_suffix("ies") {
        if stem.len() > 1 {
            return format!("{stem}y");
        }
    }
    if let Some(stem) = token.strip_suffix("sses") {
        return format!("{stem}ss");
    }
    if token.len() > 3
        && token.ends_with('s')
        && !token.ends_with("ss")
        && !token.ends_with("us")
        && !token.ends_with("is")
    {
        return token[..token.len() - 1].to_string();
    }
    token.to_string()
}

/// One run's normalizer; owns its tagger so concurrent runs stay isolated.
pub struct Normalizer {
    tagger: Box<dyn Tagger>,
    filter: ContentFilter,
}

impl Normalizer {
    pub fn new(filter: ContentFilter) -> Self {
        Self {
            tagger: Box::new(HeuristicTagger),
            filter,
        }
    }

    pub fn with_tagger(filter: ContentFilter, tagger: Box<dyn Tagger>) -> Self {
        Self { tagger, filter }
    }

    /// Normalize one review body. Missing text yields an empty document; this
    /// never fails.
    pub fn normalize(&self, text: Option<&str>) -> String {
        let Some(text) = text else {
            return String::new();
        };
        let lower = text.to_lowercase();
        let mut kept = Vec::new();
        for token in WORD.find_iter(&lower).map(|m| m.as_str()) {
            let keep = match (self.filter, self.tagger.tag(token)) {
                (ContentFilter::Adjectives, PosTag::Adjective) => true,
                (ContentFilter::AdjectivesAndNouns, PosTag::Adjective)
                | (ContentFilter::AdjectivesAndNouns, PosTag::Noun) => !is_stopword(token),
                _ => false,
            };
            if keep {
                kept.push(lemmatize(token));
            }
        }
        kept.join(" ")
    }

    /// Normalize a whole corpus, one document per review, in corpus order.
    pub fn normalize_corpus<'a, I>(&self, bodies: I) -> Vec<String>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        bodies.into_iter().map(|b| self.normalize(b)).collect()
    }
}

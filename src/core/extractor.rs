//! Local signal extractor
//!
//! Computes deterministic lexical and structural statistics from raw text.
//! Always succeeds - empty input produces zeroed signals. Phrase matching is
//! a case-insensitive whole-text substring scan (not tokenized); downstream
//! thresholds are tuned against that behavior.

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::lexicon::lexicon;
use crate::types::{LocalSignals, PhraseMatch};
use crate::{
    COMPLEX_WORD_MIN_CHARS, PARAGRAPH_MIN_CHARS, UNIFORMITY_MIN_PARAGRAPHS, UNIFORMITY_TOLERANCE,
};

lazy_static! {
    /// Sentence boundaries: one-or-more terminal punctuation marks
    static ref RE_SENTENCE_SPLIT: Regex = Regex::new(r"[.!?]+").unwrap();

    /// Complex words: runs of 10+ word characters
    static ref RE_COMPLEX_WORD: Regex =
        Regex::new(&format!(r"\b\w{{{},}}\b", COMPLEX_WORD_MIN_CHARS)).unwrap();

    /// Paragraph boundaries: two-or-more consecutive newlines
    static ref RE_PARAGRAPH_SPLIT: Regex = Regex::new(r"\n{2,}").unwrap();
}

/// Extractor for local (non-semantic) signals
#[derive(Debug, Default)]
pub struct SignalExtractor;

impl SignalExtractor {
    /// Create new extractor
    pub fn new() -> Self {
        Self
    }

    /// Extract the full signal set from raw text
    pub fn extract(&self, text: &str) -> LocalSignals {
        if text.trim().is_empty() {
            return LocalSignals::zeroed();
        }

        let word_count = text.split_whitespace().count();

        let sentence_count = RE_SENTENCE_SPLIT
            .split(text)
            .filter(|s| !s.trim().is_empty())
            .count();

        let avg_sentence_length = if sentence_count == 0 {
            None
        } else {
            Some(word_count as f64 / sentence_count as f64)
        };

        let (found_phrases, total_indicator_weight) = match_phrases(text);

        let complex_words = RE_COMPLEX_WORD.find_iter(text).count();
        let complex_word_ratio = if word_count == 0 {
            0.0
        } else {
            complex_words as f64 / word_count as f64
        };

        // Paragraphs are filtered on trimmed length, but uniformity compares
        // the raw segment lengths, as shipped
        let paragraphs: Vec<&str> = RE_PARAGRAPH_SPLIT
            .split(text)
            .filter(|p| p.trim().chars().count() > PARAGRAPH_MIN_CHARS)
            .collect();
        let paragraph_count = paragraphs.len();
        let structural_uniformity = uniformity(&paragraphs);

        LocalSignals {
            word_count,
            sentence_count,
            avg_sentence_length,
            found_phrases,
            total_indicator_weight,
            complex_word_ratio,
            structural_uniformity,
            paragraph_count,
        }
    }
}

/// Scan the whole text for every lexicon phrase, counting non-overlapping
/// occurrences. Result is sorted descending by weight; ties keep lexicon order.
fn match_phrases(text: &str) -> (Vec<PhraseMatch>, u32) {
    let lower = text.to_lowercase();
    let mut matches = Vec::new();
    let mut total_weight = 0u32;

    for indicator in lexicon() {
        let count = lower.matches(indicator.text).count() as u32;
        if count > 0 {
            total_weight += indicator.weight * count;
            matches.push(PhraseMatch {
                text: indicator.text.to_string(),
                weight: indicator.weight,
                tool: indicator.tool.to_string(),
                count,
            });
        }
    }

    // sort_by is stable, so equal weights preserve lexicon order
    matches.sort_by(|a, b| b.weight.cmp(&a.weight));

    (matches, total_weight)
}

/// Fraction of adjacent paragraph pairs whose lengths differ by less than 30%
/// of the first paragraph's length. The asymmetric divisor (first of the pair,
/// not min or mean) is deliberate, tuned behavior.
fn uniformity(paragraphs: &[&str]) -> f64 {
    if paragraphs.len() < UNIFORMITY_MIN_PARAGRAPHS {
        return 0.0;
    }

    let lengths: Vec<f64> = paragraphs.iter().map(|p| p.chars().count() as f64).collect();
    let uniform_pairs = lengths
        .windows(2)
        .filter(|pair| (pair[0] - pair[1]).abs() < pair[0] * UNIFORMITY_TOLERANCE)
        .count();

    uniform_pairs as f64 / (lengths.len() - 1) as f64
}

// =============================================================================
// TESTS
// =============================================================================

//! Local signal structures produced by the extractor

use serde::{Deserialize, Serialize};

/// An indicator phrase found in the document, with its occurrence count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseMatch {
    pub text: String,
    pub weight: u32,
    pub tool: String,
    /// Non-overlapping occurrences in the document
    pub count: u32,
}

/// Deterministic statistics computed from the raw text, without any model call.
///
/// A pure function of the input text and the static lexicon: extracting the
/// same text twice yields identical signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalSignals {
    /// Whitespace-delimited non-empty tokens
    pub word_count: usize,
    /// Segments between runs of `.!?`, whitespace-only segments discarded
    pub sentence_count: usize,
    /// `word_count / sentence_count`; `None` when there are no sentences
    pub avg_sentence_length: Option<f64>,
    /// Matched indicator phrases, sorted descending by weight (stable on ties)
    pub found_phrases: Vec<PhraseMatch>,
    /// Sum of `weight × count` over all matches
    pub total_indicator_weight: u32,
    /// Fraction (0-1) of words with 10+ word characters
    pub complex_word_ratio: f64,
    /// Fraction (0-1) of adjacent paragraph pairs with suspiciously similar
    /// lengths; 0 when fewer than 4 paragraphs qualify
    pub structural_uniformity: f64,
    /// Paragraphs longer than 50 chars after trimming
    pub paragraph_count: usize,
}

impl LocalSignals {
    /// Signals for an empty document
    pub fn zeroed() -> Self {
        Self {
            word_count: 0,
            sentence_count: 0,
            avg_sentence_length: None,
            found_phrases: Vec::new(),
            total_indicator_weight: 0,
            complex_word_ratio: 0.0,
            structural_uniformity: 0.0,
            paragraph_count: 0,
        }
    }
}

//! Scrutineer: AI-assistance screening for student writing
//!
//! Pipeline: text → SignalExtractor → {remote assessor ∥ fallback synthesizer} → Report

pub mod core;
pub mod types;

// =============================================================================
// EXTRACTOR TUNING
// =============================================================================

/// Minimum length (word characters) for a token to count as "complex"
pub const COMPLEX_WORD_MIN_CHARS: usize = 10;

/// Paragraphs at or below this trimmed length are excluded from structure analysis
pub const PARAGRAPH_MIN_CHARS: usize = 50;

/// Structural uniformity needs at least this many qualifying paragraphs
pub const UNIFORMITY_MIN_PARAGRAPHS: usize = 4;

/// Adjacent paragraphs are "uniform" when their lengths differ by less than
/// this fraction of the first paragraph's length
pub const UNIFORMITY_TOLERANCE: f64 = 0.3;

// =============================================================================
// FALLBACK VERDICT THRESHOLDS - tuned against the whole-text substring
// matcher; do not retune for token-based matching
// =============================================================================

/// Indicator weight above which the fallback verdict is Medium-High
pub const FALLBACK_WEIGHT_MEDIUM_HIGH: u32 = 15;

/// Indicator weight above which the fallback verdict is Medium
pub const FALLBACK_WEIGHT_MEDIUM: u32 = 8;

/// Fallback confidence floor
pub const FALLBACK_CONFIDENCE_BASE: u32 = 40;

/// Fallback confidence gained per unit of indicator weight
pub const FALLBACK_CONFIDENCE_PER_WEIGHT: u32 = 2;

/// Fallback confidence ceiling - kept below full-assessment confidence
pub const FALLBACK_CONFIDENCE_CAP: u32 = 75;

/// Distinct ChatGPT-attributed matches needed before naming the tool
pub const CHATGPT_PHRASE_THRESHOLD: usize = 2;

/// Red flags reported by the fallback synthesizer
pub const FALLBACK_RED_FLAG_LIMIT: usize = 5;

// =============================================================================
// REMOTE ASSESSMENT
// =============================================================================

/// Characters of student text sent to the remote assessor before truncation
pub const REMOTE_TEXT_CAP: usize = 12_000;

/// Request timeout for the remote assessor (seconds)
pub const REMOTE_TIMEOUT_SECS: u64 = 90;

/// Token budget for the remote assessor's reply
pub const REMOTE_MAX_TOKENS: u32 = 4000;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";

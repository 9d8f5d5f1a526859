//! Indicator phrase entries

use serde::Serialize;

/// A fixed phrase that signals likely AI generation, with a tuned weight and
/// the tool it is most associated with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndicatorPhrase {
    /// Lowercase phrase text, matched as a substring over the whole document
    pub text: &'static str,
    /// Scoring weight (1 = weak tell, 3 = strong tell)
    pub weight: u32,
    /// Tool this phrase is attributed to ("ChatGPT", "Generic", ...)
    pub tool: &'static str,
}

//! Static phrase lexicon
//!
//! A frozen lookup table of AI indicator phrases, built into the binary and
//! never mutated. Ordering matters only for tie-breaking: matches with equal
//! weight keep lexicon order.

use crate::types::IndicatorPhrase;

const fn phrase(text: &'static str, weight: u32, tool: &'static str) -> IndicatorPhrase {
    IndicatorPhrase { text, weight, tool }
}

/// All indicator phrases, lowercase, weights 1-3
static LEXICON: &[IndicatorPhrase] = &[
    phrase("all things considered", 3, "ChatGPT"),
    phrase("taking everything into consideration", 3, "ChatGPT"),
    phrase("it's worth noting", 2, "ChatGPT"),
    phrase("it is important to note", 2, "ChatGPT"),
    phrase("in today's world", 2, "ChatGPT"),
    phrase("in conclusion", 1, "Generic"),
    phrase("multifaceted", 2, "ChatGPT"),
    phrase("delve into", 3, "ChatGPT"),
    phrase("navigate the complexities", 3, "ChatGPT"),
    phrase("foster a sense of", 3, "ChatGPT"),
    phrase("tapestry of", 3, "ChatGPT"),
    phrase("a testament to", 2, "ChatGPT"),
    phrase("pivotal role", 2, "ChatGPT"),
    phrase("nuanced understanding", 2, "ChatGPT"),
    phrase("myriad of", 2, "ChatGPT"),
    phrase("paramount importance", 2, "ChatGPT"),
    phrase("in the realm of", 2, "ChatGPT"),
    phrase("holistic approach", 2, "Generic"),
    phrase("multi-channel strategy", 2, "ChatGPT"),
    phrase("mission-driven", 2, "ChatGPT"),
    phrase("despite these challenges", 2, "ChatGPT"),
    phrase("notwithstanding", 1, "Generic"),
    phrase("leverage", 1, "Generic"),
    phrase("robust", 1, "Generic"),
    phrase("seamless", 1, "Generic"),
    phrase("cutting-edge", 1, "Generic"),
    phrase("synergy", 2, "Generic"),
    phrase("paradigm", 2, "ChatGPT"),
    phrase("in essence", 2, "ChatGPT"),
    phrase("ultimately", 1, "Generic"),
    phrase("it is worth mentioning", 2, "ChatGPT"),
    phrase("plays a crucial role", 2, "ChatGPT"),
    phrase("serve as a reminder", 2, "ChatGPT"),
    phrase("landscape", 1, "Generic"),
    phrase("ever-evolving", 2, "ChatGPT"),
    phrase("dynamic interplay", 3, "ChatGPT"),
];

/// Read-only view of the full lexicon
pub fn lexicon() -> &'static [IndicatorPhrase] {
    LEXICON
}

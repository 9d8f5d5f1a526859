//! Fallback verdict synthesizer
//!
//! Produces a complete report from local signals alone when the remote
//! assessor is unreachable or returns garbage. This is the degraded path the
//! system guarantees - the user never sees a dead end. Total over all valid
//! signals, no external dependencies, never fails.

use chrono::Utc;

use crate::types::{LocalSignals, RedFlag, Report, Severity};
use crate::{
    CHATGPT_PHRASE_THRESHOLD, FALLBACK_CONFIDENCE_BASE, FALLBACK_CONFIDENCE_CAP,
    FALLBACK_CONFIDENCE_PER_WEIGHT, FALLBACK_RED_FLAG_LIMIT, FALLBACK_WEIGHT_MEDIUM,
    FALLBACK_WEIGHT_MEDIUM_HIGH,
};

/// Build a limited-analysis report from local signals, embedding the reason
/// the remote path failed
pub fn synthesize_fallback(signals: &LocalSignals, failure_reason: &str) -> Report {
    let weight = signals.total_indicator_weight;

    let overall_verdict = if weight > FALLBACK_WEIGHT_MEDIUM_HIGH {
        "Medium-High likelihood of AI assistance"
    } else if weight > FALLBACK_WEIGHT_MEDIUM {
        "Medium likelihood of AI assistance"
    } else {
        "Low-Medium likelihood (requires manual review)"
    };

    let confidence_score = (FALLBACK_CONFIDENCE_BASE + FALLBACK_CONFIDENCE_PER_WEIGHT * weight)
        .min(FALLBACK_CONFIDENCE_CAP);

    let chatgpt_matches = signals
        .found_phrases
        .iter()
        .filter(|m| m.tool == "ChatGPT")
        .count();
    let likely_ai_tool = if chatgpt_matches > CHATGPT_PHRASE_THRESHOLD {
        "Possibly ChatGPT"
    } else {
        "Unknown"
    };

    let summary = format!(
        "AI-powered analysis unavailable ({failure_reason}). This assessment is based on \
         automated pattern detection only and should be verified manually."
    );

    // found_phrases is already sorted descending by weight
    let red_flags: Vec<RedFlag> = signals
        .found_phrases
        .iter()
        .take(FALLBACK_RED_FLAG_LIMIT)
        .map(|m| RedFlag {
            issue: format!("AI indicator phrase: \"{}\"", m.text),
            severity: if m.weight >= 3 {
                Severity::High
            } else if m.weight >= 2 {
                Severity::Medium
            } else {
                Severity::Low
            },
            explanation: format!(
                "This phrase appeared {} time(s) and is commonly associated with \
                 {}-generated content.",
                m.count, m.tool
            ),
            examples: Vec::new(),
        })
        .collect();

    Report {
        overall_verdict: overall_verdict.to_string(),
        confidence_score,
        summary,
        likely_ai_tool: likely_ai_tool.to_string(),
        section_analysis: Vec::new(),
        red_flags,
        authentic_elements: Vec::new(),
        vocabulary_analysis: None,
        structural_analysis: None,
        recommendations: vec![
            "Conduct a verbal discussion with the student about their work".to_string(),
            "Ask the student to explain specific claims or vocabulary choices".to_string(),
            "Compare against known authentic samples from this student".to_string(),
        ],
        questions_for_student: Vec::new(),
        local_signals: signals.clone(),
        limited_analysis: true,
        timestamp: Utc::now(),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PhraseMatch;
    use pretty_assertions::assert_eq;

    fn signals_with_weight(total: u32) -> LocalSignals {
        LocalSignals {
            total_indicator_weight: total,
            ..LocalSignals::zeroed()
        }
    }

    fn chatgpt_match(text: &str, weight: u32, count: u32) -> PhraseMatch {
        PhraseMatch {
            text: text.to_string(),
            weight,
            tool: "ChatGPT".to_string(),
            count,
        }
    }

    #[test]
    fn test_high_weight_verdict_and_capped_confidence() {
        let report = synthesize_fallback(&signals_with_weight(20), "network error");
        assert_eq!(report.overall_verdict, "Medium-High likelihood of AI assistance");
        assert_eq!(report.confidence_score, 75);
        assert!(report.limited_analysis);
    }

    #[test]
    fn test_medium_weight_verdict() {
        let report = synthesize_fallback(&signals_with_weight(10), "timeout");
        assert_eq!(report.overall_verdict, "Medium likelihood of AI assistance");
        assert_eq!(report.confidence_score, 60);
    }

    #[test]
    fn test_low_weight_verdict() {
        let report = synthesize_fallback(&signals_with_weight(3), "timeout");
        assert_eq!(
            report.overall_verdict,
            "Low-Medium likelihood (requires manual review)"
        );
        assert_eq!(report.confidence_score, 46);
    }

    #[test]
    fn test_boundary_weights() {
        // W = 15 is still Medium, W = 8 is still Low-Medium
        let at_fifteen = synthesize_fallback(&signals_with_weight(15), "x");
        assert_eq!(at_fifteen.overall_verdict, "Medium likelihood of AI assistance");
        let at_eight = synthesize_fallback(&signals_with_weight(8), "x");
        assert_eq!(
            at_eight.overall_verdict,
            "Low-Medium likelihood (requires manual review)"
        );
    }

    #[test]
    fn test_confidence_bounds_over_weight_range() {
        for w in 0..100 {
            let report = synthesize_fallback(&signals_with_weight(w), "reason");
            assert!(
                (40..=75).contains(&report.confidence_score),
                "confidence {} out of bounds at W={}",
                report.confidence_score,
                w
            );
        }
    }

    #[test]
    fn test_failure_reason_embedded_verbatim() {
        let report = synthesize_fallback(&LocalSignals::zeroed(), "API error [503]: overloaded");
        assert!(report.summary.contains("API error [503]: overloaded"));
    }

    #[test]
    fn test_tool_attribution_needs_more_than_two_chatgpt_phrases() {
        let mut signals = LocalSignals::zeroed();
        signals.found_phrases = vec![
            chatgpt_match("delve into", 3, 1),
            chatgpt_match("tapestry of", 3, 1),
        ];
        let report = synthesize_fallback(&signals, "x");
        assert_eq!(report.likely_ai_tool, "Unknown");

        signals.found_phrases.push(chatgpt_match("paradigm", 2, 1));
        let report = synthesize_fallback(&signals, "x");
        assert_eq!(report.likely_ai_tool, "Possibly ChatGPT");
    }

    #[test]
    fn test_red_flags_capped_at_five_with_tiered_severity() {
        let mut signals = LocalSignals::zeroed();
        signals.found_phrases = vec![
            chatgpt_match("delve into", 3, 2),
            chatgpt_match("pivotal role", 2, 1),
            PhraseMatch {
                text: "robust".to_string(),
                weight: 1,
                tool: "Generic".to_string(),
                count: 4,
            },
            chatgpt_match("tapestry of", 3, 1),
            chatgpt_match("paradigm", 2, 1),
            chatgpt_match("in essence", 2, 1),
        ];
        let report = synthesize_fallback(&signals, "x");
        assert_eq!(report.red_flags.len(), 5);
        assert_eq!(report.red_flags[0].severity, Severity::High);
        assert_eq!(report.red_flags[1].severity, Severity::Medium);
        assert_eq!(report.red_flags[2].severity, Severity::Low);
        assert!(report.red_flags[0].issue.contains("delve into"));
        assert!(report.red_flags[0].explanation.contains("2 time(s)"));
    }

    #[test]
    fn test_fallback_is_deterministic() {
        let signals = signals_with_weight(12);
        let a = synthesize_fallback(&signals, "same reason");
        let b = synthesize_fallback(&signals, "same reason");
        assert_eq!(a.overall_verdict, b.overall_verdict);
        assert_eq!(a.confidence_score, b.confidence_score);
        assert_eq!(a.summary, b.summary);
        assert_eq!(a.red_flags, b.red_flags);
    }

    #[test]
    fn test_recommendations_always_present() {
        let report = synthesize_fallback(&LocalSignals::zeroed(), "x");
        assert_eq!(report.recommendations.len(), 3);
    }
}

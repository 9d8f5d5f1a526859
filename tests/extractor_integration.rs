//! Integration tests for the local signal extractor
//!
//! Covers the full text → signals path and the documented edge cases.

use scrutineer::core::SignalExtractor;
use scrutineer::types::LocalSignals;

/// Empty string: no words, no sentences, average length undefined
#[test]
fn test_empty_string_scenario() {
    let extractor = SignalExtractor::new();
    let signals = extractor.extract("");

    assert_eq!(signals.word_count, 0);
    assert_eq!(signals.sentence_count, 0);
    assert_eq!(signals.avg_sentence_length, None);
    assert_eq!(signals, LocalSignals::zeroed());
}

/// "delve into" once and "robust" twice: matches and total weight
#[test]
fn test_indicator_weight_scenario() {
    let extractor = SignalExtractor::new();
    let signals =
        extractor.extract("Let us delve into the data. The robust method gave a robust answer.");

    let delve = signals
        .found_phrases
        .iter()
        .find(|m| m.text == "delve into")
        .expect("delve into should match");
    assert_eq!(delve.weight, 3);
    assert_eq!(delve.count, 1);

    let robust = signals
        .found_phrases
        .iter()
        .find(|m| m.text == "robust")
        .expect("robust should match");
    assert_eq!(robust.weight, 1);
    assert_eq!(robust.count, 2);

    assert_eq!(signals.total_indicator_weight, 5);
}

/// Word count always equals the count of whitespace-delimited tokens
#[test]
fn test_word_count_property() {
    let extractor = SignalExtractor::new();
    let samples = [
        "one",
        "two words",
        "  leading and trailing  ",
        "tabs\tand\nnewlines mixed in",
        "a much longer sample sentence, with punctuation! and? breaks.",
    ];
    for text in samples {
        let signals = extractor.extract(text);
        assert_eq!(
            signals.word_count,
            text.split_whitespace().count(),
            "mismatch for {:?}",
            text
        );
    }
}

/// Uniformity is floored at 0 with three or fewer qualifying paragraphs,
/// whatever their shape
#[test]
fn test_uniformity_floor_property() {
    let extractor = SignalExtractor::new();
    let para = "This paragraph is comfortably longer than the fifty character floor.";

    for n in 0..=3 {
        let text = vec![para; n].join("\n\n");
        let signals = extractor.extract(&text);
        assert_eq!(signals.paragraph_count, n);
        assert_eq!(signals.structural_uniformity, 0.0, "floor violated at n={}", n);
    }

    let text = vec![para; 4].join("\n\n");
    let signals = extractor.extract(&text);
    assert_eq!(signals.structural_uniformity, 1.0);
}

/// Total weight never decreases as occurrences of a phrase are added
#[test]
fn test_weight_monotonicity_property() {
    let extractor = SignalExtractor::new();
    let mut text = String::from("An essay about farming practices in the north.");
    let mut prev = extractor.extract(&text).total_indicator_weight;

    for _ in 0..5 {
        text.push_str(" navigate the complexities");
        let w = extractor.extract(&text).total_indicator_weight;
        assert!(w >= prev);
        assert_eq!(w, prev + 3);
        prev = w;
    }
}

/// Extracting twice gives identical signals
#[test]
fn test_idempotence() {
    let extractor = SignalExtractor::new();
    let text = "In today's world, a holistic approach is of paramount importance.\n\n\
                It's worth noting that the ever-evolving landscape demands a nuanced understanding.\n\n\
                In conclusion, these multifaceted factors foster a sense of synergy.";
    assert_eq!(extractor.extract(text), extractor.extract(text));
}

/// Phrases that contain spaces match across word boundaries in the raw text
#[test]
fn test_multiword_phrase_matching() {
    let extractor = SignalExtractor::new();
    let signals = extractor.extract("the rich tapestry of modern life");
    assert!(signals.found_phrases.iter().any(|m| m.text == "tapestry of"));
}

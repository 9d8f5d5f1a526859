//! Integration tests for the report merge/selector
//!
//! Uses stub assessors to drive both the success path and every failure
//! path; the analyzer must always come back with a valid report.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use scrutineer::core::{Analyzer, OfflineAssessor, RemoteAssessor, UnconfiguredAssessor};
use scrutineer::types::{
    AnalyzeError, AssessError, LocalSignals, RemoteAssessment, StudentContext,
};

/// Assessor that fails with a configurable API error
struct FailingAssessor {
    status: u16,
    message: &'static str,
}

#[async_trait]
impl RemoteAssessor for FailingAssessor {
    async fn assess(
        &self,
        _text: &str,
        _context: &StudentContext,
        _signals: &LocalSignals,
    ) -> Result<RemoteAssessment, AssessError> {
        Err(AssessError::Api {
            status: self.status,
            message: self.message.to_string(),
        })
    }
}

/// Assessor that returns a canned successful assessment
struct CannedAssessor;

#[async_trait]
impl RemoteAssessor for CannedAssessor {
    async fn assess(
        &self,
        _text: &str,
        _context: &StudentContext,
        _signals: &LocalSignals,
    ) -> Result<RemoteAssessment, AssessError> {
        Ok(serde_json::from_str(
            r#"{
                "overallVerdict": "High likelihood of AI assistance",
                "confidenceScore": 92,
                "summary": "Vocabulary far exceeds the expected level.",
                "likelyAITool": "ChatGPT",
                "redFlags": [{
                    "issue": "Sophistication mismatch",
                    "severity": "High",
                    "explanation": "Vocabulary inconsistent with prior work.",
                    "examples": ["dynamic interplay"]
                }],
                "recommendations": ["Discuss the work with the student"]
            }"#,
        )
        .unwrap())
    }
}

/// Assessor that never answers within a reasonable test window
struct StalledAssessor;

#[async_trait]
impl RemoteAssessor for StalledAssessor {
    async fn assess(
        &self,
        _text: &str,
        _context: &StudentContext,
        _signals: &LocalSignals,
    ) -> Result<RemoteAssessment, AssessError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        unreachable!("the analyzer should have timed out first")
    }
}

#[tokio::test]
async fn test_remote_failure_never_raises() {
    let analyzer = Analyzer::new(Arc::new(FailingAssessor {
        status: 503,
        message: "overloaded",
    }));
    let report = analyzer
        .analyze("A short essay about volcanoes. They are hot.", &StudentContext::default())
        .await
        .expect("remote failure must not surface as an error");

    assert!(report.limited_analysis);
    assert!(report.summary.contains("overloaded"));
    assert!(report.local_signals.word_count > 0);
}

#[tokio::test]
async fn test_successful_remote_report_is_passed_through() {
    let analyzer = Analyzer::new(Arc::new(CannedAssessor));
    let report = analyzer
        .analyze(
            "The dynamic interplay of tectonic forces. We delve into magma.",
            &StudentContext::default(),
        )
        .await
        .unwrap();

    assert!(!report.limited_analysis);
    assert_eq!(report.overall_verdict, "High likelihood of AI assistance");
    assert_eq!(report.confidence_score, 92);
    assert_eq!(report.likely_ai_tool, "ChatGPT");
    // Local signals ride along even on the remote path
    assert!(report.local_signals.total_indicator_weight >= 6);
}

#[tokio::test]
async fn test_stalled_remote_times_out_into_fallback() {
    let analyzer =
        Analyzer::new(Arc::new(StalledAssessor)).with_timeout(Duration::from_millis(50));
    let report = analyzer
        .analyze("An essay that will never reach the model.", &StudentContext::default())
        .await
        .expect("timeout must not surface as an error");

    assert!(report.limited_analysis);
    assert!(report.summary.contains("timed out"));
    assert!(report.local_signals.word_count > 0);
}

#[tokio::test]
async fn test_missing_credential_degrades_gracefully() {
    let analyzer = Analyzer::new(Arc::new(UnconfiguredAssessor {
        detail: "ANTHROPIC_API_KEY is not set".to_string(),
    }));
    let report = analyzer
        .analyze("Some student work.", &StudentContext::default())
        .await
        .unwrap();

    assert!(report.limited_analysis);
    assert!(report.summary.contains("ANTHROPIC_API_KEY is not set"));
}

#[tokio::test]
async fn test_offline_mode_uses_fallback() {
    let analyzer = Analyzer::new(Arc::new(OfflineAssessor));
    let report = analyzer
        .analyze("In conclusion, the robust results speak for themselves.", &StudentContext::default())
        .await
        .unwrap();

    assert!(report.limited_analysis);
    assert_eq!(report.local_signals.total_indicator_weight, 2);
    assert_eq!(report.recommendations.len(), 3);
}

#[tokio::test]
async fn test_empty_input_is_the_only_blocking_error() {
    let analyzer = Analyzer::new(Arc::new(OfflineAssessor));
    assert!(matches!(
        analyzer.analyze("", &StudentContext::default()).await,
        Err(AnalyzeError::EmptyInput)
    ));
    assert!(matches!(
        analyzer.analyze(" \n\t ", &StudentContext::default()).await,
        Err(AnalyzeError::EmptyInput)
    ));
}

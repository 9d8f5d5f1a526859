//! Report merge/selector
//!
//! Computes local signals eagerly, attempts remote assessment under a
//! timeout, and merges the two into a single report. Remote failures never
//! cross this boundary: every path through `analyze` ends in a valid report,
//! with the degraded paths marked `limited_analysis`.

use std::sync::Arc;
use std::time::Duration;

use crate::core::assessor::RemoteAssessor;
use crate::core::extractor::SignalExtractor;
use crate::core::fallback::synthesize_fallback;
use crate::types::{AnalyzeError, AssessError, Report, StudentContext};
use crate::REMOTE_TIMEOUT_SECS;

/// Orchestrates one analysis request end to end
pub struct Analyzer {
    extractor: SignalExtractor,
    assessor: Arc<dyn RemoteAssessor>,
    remote_timeout: Duration,
}

impl Analyzer {
    pub fn new(assessor: Arc<dyn RemoteAssessor>) -> Self {
        Self {
            extractor: SignalExtractor::new(),
            assessor,
            remote_timeout: Duration::from_secs(REMOTE_TIMEOUT_SECS),
        }
    }

    /// Override the remote assessment timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.remote_timeout = timeout;
        self
    }

    /// Analyze one document. The only error is missing input - remote
    /// failures are absorbed into a limited-analysis report.
    pub async fn analyze(
        &self,
        text: &str,
        context: &StudentContext,
    ) -> Result<Report, AnalyzeError> {
        if text.trim().is_empty() {
            return Err(AnalyzeError::EmptyInput);
        }

        // Local signals are cheap and needed on both paths
        let signals = self.extractor.extract(text);

        let attempt = tokio::time::timeout(
            self.remote_timeout,
            self.assessor.assess(text, context, &signals),
        )
        .await
        .unwrap_or(Err(AssessError::Timeout(self.remote_timeout.as_secs())));

        let report = match attempt {
            Ok(remote) => {
                tracing::debug!(
                    verdict = %remote.overall_verdict,
                    confidence = remote.confidence_score,
                    "remote assessment succeeded"
                );
                Report::from_remote(remote, signals)
            }
            Err(err) => {
                tracing::warn!(error = %err, "remote assessment failed, using local fallback");
                synthesize_fallback(&signals, &err.to_string())
            }
        };

        Ok(report)
    }
}

// =============================================================================
// TESTS
// =============================================================================

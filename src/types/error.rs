//! Error taxonomy
//!
//! Only `AnalyzeError` is user-visible as a blocking failure. Every
//! `AssessError` is absorbed by the analyzer and downgraded into a
//! limited-analysis report.

use thiserror::Error;

/// Blocking errors: analysis cannot proceed at all
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("no text supplied")]
    EmptyInput,
    #[error("unsupported file format: .{0} - only plain text (.txt) is accepted")]
    UnsupportedFormat(String),
    #[error("failed to extract text: {0}")]
    Extraction(String),
}

/// Remote assessment failures: recovered locally via the fallback synthesizer
#[derive(Debug, Error)]
pub enum AssessError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error [{status}]: {message}")]
    Api { status: u16, message: String },
    #[error("malformed assessor response: {0}")]
    Malformed(String),
    #[error("remote assessor not configured: {0}")]
    NotConfigured(String),
    #[error("remote assessment timed out after {0}s")]
    Timeout(u64),
    #[error("remote assessment disabled")]
    Disabled,
}

//! Document input
//!
//! Only plain text is accepted here. Binary document formats (docx, pdf)
//! need an external extractor and are rejected as unsupported.

use std::path::Path;

use crate::types::AnalyzeError;

/// Read a plain-text document from disk
pub fn load_text_file(path: &str) -> Result<String, AnalyzeError> {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    if ext != "txt" {
        return Err(AnalyzeError::UnsupportedFormat(ext));
    }
    std::fs::read_to_string(path).map_err(|e| AnalyzeError::Extraction(e.to_string()))
}

// =============================================================================
// TESTS
// =============================================================================

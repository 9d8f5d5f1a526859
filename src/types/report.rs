//! Report structures - the externally visible result of an analysis

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::LocalSignals;

/// Severity tier for a red flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        };
        write!(f, "{}", name)
    }
}

/// A specific concern raised by either assessment path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedFlag {
    pub issue: String,
    pub severity: Severity,
    pub explanation: String,
    #[serde(default)]
    pub examples: Vec<String>,
}

/// Per-section verdict from the remote assessor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionAnalysis {
    pub section: String,
    pub verdict: String,
    pub reasoning: String,
    #[serde(default)]
    pub specific_evidence: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyAnalysis {
    #[serde(default)]
    pub concerning_phrases: Vec<String>,
    #[serde(default)]
    pub sophistication_mismatch: bool,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuralAnalysis {
    #[serde(default)]
    pub formulaic_patterns: bool,
    #[serde(default)]
    pub explanation: String,
}

/// The structured payload the remote assessor must return.
///
/// The four leading fields are required - a response missing any of them is
/// treated as malformed and routed to the fallback synthesizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteAssessment {
    pub overall_verdict: String,
    pub confidence_score: u32,
    pub summary: String,
    #[serde(rename = "likelyAITool")]
    pub likely_ai_tool: String,
    #[serde(default)]
    pub section_analysis: Vec<SectionAnalysis>,
    #[serde(default)]
    pub red_flags: Vec<RedFlag>,
    #[serde(default)]
    pub authentic_elements: Vec<String>,
    #[serde(default)]
    pub vocabulary_analysis: Option<VocabularyAnalysis>,
    #[serde(default)]
    pub structural_analysis: Option<StructuralAnalysis>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub questions_for_student: Vec<String>,
}

/// The complete analysis result handed to presentation.
///
/// Created once per analysis request and never mutated. Local signals are
/// always attached, whichever path produced the verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub overall_verdict: String,
    /// 0-100; fallback reports are capped at 75
    pub confidence_score: u32,
    pub summary: String,
    /// A lexicon tool label, "Possibly ChatGPT", "Unknown", or "None detected"
    #[serde(rename = "likelyAITool")]
    pub likely_ai_tool: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub section_analysis: Vec<SectionAnalysis>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub red_flags: Vec<RedFlag>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authentic_elements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocabulary_analysis: Option<VocabularyAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structural_analysis: Option<StructuralAnalysis>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub questions_for_student: Vec<String>,
    pub local_signals: LocalSignals,
    /// True when the verdict came from pattern detection alone
    pub limited_analysis: bool,
    pub timestamp: DateTime<Utc>,
}

impl Report {
    /// Promote a successful remote assessment to a full report, attaching the
    /// local signals and a timestamp
    pub fn from_remote(remote: RemoteAssessment, signals: LocalSignals) -> Self {
        Self {
            overall_verdict: remote.overall_verdict,
            confidence_score: remote.confidence_score,
            summary: remote.summary,
            likely_ai_tool: remote.likely_ai_tool,
            section_analysis: remote.section_analysis,
            red_flags: remote.red_flags,
            authentic_elements: remote.authentic_elements,
            vocabulary_analysis: remote.vocabulary_analysis,
            structural_analysis: remote.structural_analysis,
            recommendations: remote.recommendations,
            questions_for_student: remote.questions_for_student,
            local_signals: signals,
            limited_analysis: false,
            timestamp: Utc::now(),
        }
    }
}

//! Remote semantic assessor
//!
//! The assessor seam is a trait so the analyzer can run against the hosted
//! model, an offline stub, or a test double. The production implementation
//! calls the Anthropic Messages API and demands a strict JSON reply matching
//! `RemoteAssessment`; anything else is a failure the analyzer absorbs.

use async_trait::async_trait;

use crate::types::{AssessError, LocalSignals, RemoteAssessment, StudentContext};
use crate::{REMOTE_MAX_TOKENS, REMOTE_TEXT_CAP};

/// Environment variable holding the Anthropic API key
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Default model for semantic assessment
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

const ANTHROPIC_VERSION: &str = "2023-06-01";

const SYSTEM_PROMPT: &str = "You are an expert educational assessor specializing in detecting \
AI-generated content in student work. You have extensive experience with student writing at all \
levels and can identify the telltale signs of AI assistance.\n\n\
Your task is to analyze student work and provide a detailed originality assessment. Be specific, \
cite exact phrases from the text, and explain your reasoning clearly.\n\n\
IMPORTANT: Respond ONLY with valid JSON matching this exact structure:\n\
{\n\
  \"overallVerdict\": \"High/Medium/Low likelihood of AI assistance\",\n\
  \"confidenceScore\": 0-100,\n\
  \"summary\": \"2-3 sentence summary\",\n\
  \"likelyAITool\": \"ChatGPT/Claude/Gemini/Unknown/None detected\",\n\
  \"sectionAnalysis\": [{\"section\": \"Section name\", \"verdict\": \"Likely AI/Possibly AI/Likely authentic\", \"reasoning\": \"Explanation\", \"specificEvidence\": [\"quote 1\"]}],\n\
  \"redFlags\": [{\"issue\": \"Issue name\", \"severity\": \"High/Medium/Low\", \"explanation\": \"Details\", \"examples\": [\"example 1\"]}],\n\
  \"authenticElements\": [\"Element 1\"],\n\
  \"vocabularyAnalysis\": {\"concerningPhrases\": [\"phrase 1\"], \"sophisticationMismatch\": true/false, \"explanation\": \"Details\"},\n\
  \"structuralAnalysis\": {\"formulaicPatterns\": true/false, \"explanation\": \"Details\"},\n\
  \"recommendations\": [\"Recommendation 1\"],\n\
  \"questionsForStudent\": [\"Question 1\"]\n\
}";

/// Seam between the analyzer and whatever performs semantic judgment
#[async_trait]
pub trait RemoteAssessor: Send + Sync {
    async fn assess(
        &self,
        text: &str,
        context: &StudentContext,
        signals: &LocalSignals,
    ) -> Result<RemoteAssessment, AssessError>;
}

/// Build the user prompt: student context, the local-signal digest, and the
/// (possibly truncated) document
pub fn build_user_prompt(text: &str, context: &StudentContext, signals: &LocalSignals) -> String {
    let avg_len = match signals.avg_sentence_length {
        Some(v) => format!("{:.1}", v),
        None => "Unknown".to_string(),
    };

    let phrases = if signals.found_phrases.is_empty() {
        "None".to_string()
    } else {
        signals
            .found_phrases
            .iter()
            .map(|m| format!("\"{}\" (×{})", m.text, m.count))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let notes = match &context.additional_notes {
        Some(n) if !n.trim().is_empty() => format!("\n- Additional Notes: {}", n),
        _ => String::new(),
    };

    let char_count = text.chars().count();
    let truncated: String = text.chars().take(REMOTE_TEXT_CAP).collect();
    let truncation_notice = if char_count > REMOTE_TEXT_CAP {
        format!(
            "\n[Document truncated for analysis - full document is {} words]",
            signals.word_count
        )
    } else {
        String::new()
    };

    format!(
        "Please analyze this student work for originality and potential AI assistance.\n\n\
         STUDENT CONTEXT:\n\
         - Educational Level: {}\n\
         - Expected Ability: {}\n\
         - Subject: {}{}\n\n\
         PRELIMINARY ANALYSIS (automated):\n\
         - Word count: {}\n\
         - Average sentence length: {} words\n\
         - Complex word ratio: {:.1}%\n\
         - Structural uniformity: {:.0}%\n\
         - AI indicator phrases found: {}\n\n\
         STUDENT WORK:\n---\n{}{}\n---\n\n\
         Provide your analysis as JSON only.",
        context.level.describe(),
        context.ability.describe(),
        context.subject.as_deref().unwrap_or("Not specified"),
        notes,
        signals.word_count,
        avg_len,
        signals.complex_word_ratio * 100.0,
        signals.structural_uniformity * 100.0,
        phrases,
        truncated,
        truncation_notice,
    )
}

/// Strip markdown code fences the model sometimes wraps its JSON in
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

// =============================================================================
// Anthropic Messages API backend
// =============================================================================

/// Remote assessor backed by the Anthropic Messages API
pub struct AnthropicAssessor {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl AnthropicAssessor {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: "https://api.anthropic.com".to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Read the API key from the environment; missing credential is a
    /// `NotConfigured` failure that feeds the fallback path
    pub fn from_env(model: impl Into<String>) -> Result<Self, AssessError> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AssessError::NotConfigured(format!("{} is not set", API_KEY_ENV)))?;
        Ok(Self::new(api_key, model))
    }

    /// Point at a different endpoint (tests, proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl RemoteAssessor for AnthropicAssessor {
    async fn assess(
        &self,
        text: &str,
        context: &StudentContext,
        signals: &LocalSignals,
    ) -> Result<RemoteAssessment, AssessError> {
        let url = format!("{}/v1/messages", self.base_url);
        let body = serde_json::json!({
            "model": self.model,
            "max_tokens": REMOTE_MAX_TOKENS,
            "system": SYSTEM_PROMPT,
            "messages": [
                { "role": "user", "content": build_user_prompt(text, context, signals) }
            ],
        });

        let resp = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        if status >= 400 {
            let message = resp.text().await.unwrap_or_else(|_| "unknown API error".to_string());
            return Err(AssessError::Api { status, message });
        }

        let json: serde_json::Value = resp.json().await?;
        let content = json["content"][0]["text"]
            .as_str()
            .ok_or_else(|| AssessError::Malformed("response has no text content".to_string()))?;

        let cleaned = strip_code_fences(content);
        serde_json::from_str::<RemoteAssessment>(&cleaned)
            .map_err(|e| AssessError::Malformed(e.to_string()))
    }
}

// =============================================================================
// Stub backends
// =============================================================================

/// Assessor for offline mode: always fails, forcing the fallback path
#[derive(Debug, Default)]
pub struct OfflineAssessor;

#[async_trait]
impl RemoteAssessor for OfflineAssessor {
    async fn assess(
        &self,
        _text: &str,
        _context: &StudentContext,
        _signals: &LocalSignals,
    ) -> Result<RemoteAssessment, AssessError> {
        Err(AssessError::Disabled)
    }
}

/// Stands in when no credential is available, so every analysis still
/// produces a (limited) report
#[derive(Debug)]
pub struct UnconfiguredAssessor {
    pub detail: String,
}

#[async_trait]
impl RemoteAssessor for UnconfiguredAssessor {
    async fn assess(
        &self,
        _text: &str,
        _context: &StudentContext,
        _signals: &LocalSignals,
    ) -> Result<RemoteAssessment, AssessError> {
        Err(AssessError::NotConfigured(self.detail.clone()))
    }
}

// =============================================================================
// TESTS
// =============================================================================

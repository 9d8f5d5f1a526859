//! Student context supplied alongside the document

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Educational level of the student whose work is being screened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EducationLevel {
    Ks3,
    Gcse,
    BtecL2,
    BtecL3,
    Alevel,
    Undergraduate,
}

impl EducationLevel {
    /// Human-readable form used in prompts and display
    pub fn describe(&self) -> &'static str {
        match self {
            EducationLevel::Ks3 => "Key Stage 3 (ages 11-14)",
            EducationLevel::Gcse => "GCSE (ages 14-16)",
            EducationLevel::BtecL2 => "BTEC Level 2",
            EducationLevel::BtecL3 => "BTEC Level 3 / A-Level equivalent",
            EducationLevel::Alevel => "A-Level",
            EducationLevel::Undergraduate => "Undergraduate degree",
        }
    }
}

/// Expected ability band for the student
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum AbilityBand {
    Low,
    Mid,
    High,
}

impl AbilityBand {
    pub fn describe(&self) -> &'static str {
        match self {
            AbilityBand::Low => "lower ability / struggling",
            AbilityBand::Mid => "mid-range ability",
            AbilityBand::High => "high ability / gifted",
        }
    }
}

/// Context the assessor uses to judge whether the writing fits the student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentContext {
    pub level: EducationLevel,
    pub ability: AbilityBand,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
}

impl Default for StudentContext {
    fn default() -> Self {
        Self {
            level: EducationLevel::Gcse,
            ability: AbilityBand::Mid,
            subject: None,
            additional_notes: None,
        }
    }
}

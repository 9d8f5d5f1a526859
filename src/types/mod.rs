//! Core types for Scrutineer

mod context;
mod error;
mod lexicon;
mod report;
mod signals;

pub use context::{AbilityBand, EducationLevel, StudentContext};
pub use error::{AnalyzeError, AssessError};
pub use lexicon::IndicatorPhrase;
pub use report::{
    RedFlag, RemoteAssessment, Report, SectionAnalysis, Severity, StructuralAnalysis,
    VocabularyAnalysis,
};
pub use signals::{LocalSignals, PhraseMatch};

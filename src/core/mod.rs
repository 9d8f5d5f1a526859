//! Core modules for Scrutineer

pub mod analyzer;
pub mod api;
pub mod assessor;
pub mod extractor;
pub mod fallback;
pub mod input;
pub mod lexicon;

pub use analyzer::Analyzer;
pub use api::{create_router, run_server};
pub use assessor::{AnthropicAssessor, OfflineAssessor, RemoteAssessor, UnconfiguredAssessor};
pub use extractor::SignalExtractor;
pub use fallback::synthesize_fallback;
pub use input::load_text_file;
pub use lexicon::lexicon;

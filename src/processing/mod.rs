//! Text processing and scoring module

pub mod document;
pub mod embeddings;
pub mod gap;
pub mod normalizer;
pub mod scorer;

pub use embeddings::EmbeddingProvider;
pub use gap::{KeywordGapAnalyzer, KeywordGaps};
pub use scorer::MatchScorer;

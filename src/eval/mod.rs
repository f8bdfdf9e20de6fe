//! Ranking evaluation module

pub mod dataset;
pub mod evaluator;
pub mod metrics;

pub use dataset::{load_dataset, EvaluationRow, RelevanceLabel};
pub use evaluator::{EvaluationOutcome, RankedRow, RankingEvaluator};

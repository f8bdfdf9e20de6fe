//! Labeled evaluation dataset loading

use crate::error::{MatcherError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Relevance judgment for a (job description, resume) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelevanceLabel {
    Poor,
    Medium,
    Good,
}

impl RelevanceLabel {
    pub fn from_int(value: u8) -> Option<Self> {
        match value {
            0 => Some(RelevanceLabel::Poor),
            1 => Some(RelevanceLabel::Medium),
            2 => Some(RelevanceLabel::Good),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RelevanceLabel::Poor => "Poor",
            RelevanceLabel::Medium => "Medium",
            RelevanceLabel::Good => "Good",
        }
    }

    /// Binary relevance: only "Good" counts as relevant for ranking metrics
    pub fn is_relevant(&self) -> bool {
        matches!(self, RelevanceLabel::Good)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationRow {
    pub jd_path: String,
    pub resume_path: String,
    pub label: RelevanceLabel,
}

/// Raw CSV record before label validation
#[derive(Debug, Deserialize)]
struct RawRow {
    jd_path: String,
    resume_path: String,
    label: u8,
}

/// Load the evaluation dataset from a CSV file with headers
/// `jd_path,resume_path,label`.
///
/// Any malformed row or out-of-range label fails the whole load; rows are
/// never silently skipped.
pub fn load_dataset(path: &Path) -> Result<Vec<EvaluationRow>> {
    let dataset_path = path.to_string_lossy().to_string();

    let mut reader = csv::Reader::from_path(path).map_err(|e| MatcherError::Dataset {
        path: dataset_path.clone(),
        reason: e.to_string(),
    })?;

    let mut rows = Vec::new();
    for (index, record) in reader.deserialize::<RawRow>().enumerate() {
        let raw = record.map_err(|e| MatcherError::Dataset {
            path: dataset_path.clone(),
            reason: format!("row {}: {}", index + 1, e),
        })?;

        let label = RelevanceLabel::from_int(raw.label).ok_or_else(|| MatcherError::Dataset {
            path: dataset_path.clone(),
            reason: format!(
                "row {}: label must be 0 (Poor), 1 (Medium), or 2 (Good), got {}",
                index + 1,
                raw.label
            ),
        })?;

        rows.push(EvaluationRow {
            jd_path: raw.jd_path,
            resume_path: raw.resume_path,
            label,
        });
    }

    if rows.is_empty() {
        return Err(MatcherError::Dataset {
            path: dataset_path,
            reason: "dataset contains no rows".to_string(),
        });
    }

    Ok(rows)
}

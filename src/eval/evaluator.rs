//! Ranking evaluator: score labeled (job description, resume) pairs and
//! compute per-group ranking quality metrics

use crate::error::{MatcherError, Result};
use crate::eval::dataset::{EvaluationRow, RelevanceLabel};
use crate::eval::metrics::{precision_at_k, reciprocal_rank};
use crate::input::InputManager;
use crate::processing::embeddings::EmbeddingProvider;
use crate::processing::scorer::MatchScorer;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// One row of the flat result table, in per-group ranked order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedRow {
    pub jd_path: String,
    pub resume_path: String,
    pub score: f32,
    pub label: RelevanceLabel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub rows: Vec<RankedRow>,
    pub mean_precision_at_k: f32,
    pub mean_reciprocal_rank: f32,
    pub group_count: usize,
    pub precision_k: usize,
}

pub struct RankingEvaluator<'a> {
    scorer: MatchScorer<'a>,
    precision_k: usize,
    show_progress: bool,
}

impl<'a> RankingEvaluator<'a> {
    pub fn new(provider: &'a dyn EmbeddingProvider, precision_k: usize) -> Self {
        Self {
            scorer: MatchScorer::new(provider),
            precision_k,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, enable: bool) -> Self {
        self.show_progress = enable;
        self
    }

    /// Run the evaluation over a loaded dataset.
    ///
    /// Rows are grouped by job-description path in first-seen order. Within
    /// a group every resume is scored against the job description and the
    /// group is sorted by descending score; the sort is stable, so rows with
    /// equal scores keep their dataset order. Any unreadable referenced file
    /// fails the whole run; no row is silently skipped.
    pub async fn evaluate(&self, rows: &[EvaluationRow]) -> Result<EvaluationOutcome> {
        if rows.is_empty() {
            return Err(MatcherError::InvalidInput(
                "evaluation requires at least one dataset row".to_string(),
            ));
        }

        let groups = group_by_jd(rows);
        info!(
            "Evaluating {} rows across {} ranking groups",
            rows.len(),
            groups.len()
        );

        let progress = self.progress_bar(groups.len());
        let mut input_manager = InputManager::new();

        let mut ranked_rows = Vec::with_capacity(rows.len());
        let mut precision_sum = 0.0f32;
        let mut rr_sum = 0.0f32;

        for (jd_path, group) in &groups {
            let jd_text = input_manager.extract_text(Path::new(jd_path)).await?;

            let mut scored: Vec<RankedRow> = Vec::with_capacity(group.len());
            for row in group {
                let resume_text = input_manager
                    .extract_text(Path::new(&row.resume_path))
                    .await?;
                let score = self.scorer.score(&resume_text, &jd_text)?;

                scored.push(RankedRow {
                    jd_path: row.jd_path.clone(),
                    resume_path: row.resume_path.clone(),
                    score,
                    label: row.label,
                });
            }

            // Stable sort: ties keep dataset order
            scored.sort_by(|a, b| {
                b.score
                    .partial_cmp(&a.score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

            let ranked_labels: Vec<RelevanceLabel> = scored.iter().map(|r| r.label).collect();
            let relevance: Vec<bool> = ranked_labels.iter().map(|l| l.is_relevant()).collect();

            precision_sum += precision_at_k(&ranked_labels, self.precision_k);
            rr_sum += reciprocal_rank(&relevance);

            ranked_rows.extend(scored);

            if let Some(bar) = &progress {
                bar.inc(1);
            }
        }

        if let Some(bar) = &progress {
            bar.finish_and_clear();
        }

        let group_count = groups.len();
        Ok(EvaluationOutcome {
            rows: ranked_rows,
            mean_precision_at_k: precision_sum / group_count as f32,
            mean_reciprocal_rank: rr_sum / group_count as f32,
            group_count,
            precision_k: self.precision_k,
        })
    }

    fn progress_bar(&self, group_count: usize) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }

        let bar = ProgressBar::new(group_count as u64);
        bar.set_style(
            ProgressStyle::with_template("{spinner} Scoring groups [{bar:30}] {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Some(bar)
    }
}

/// Group rows by job-description path, preserving first-seen order
fn group_by_jd(rows: &[EvaluationRow]) -> Vec<(String, Vec<&EvaluationRow>)> {
    let mut groups: Vec<(String, Vec<&EvaluationRow>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for row in rows {
        match index.get(row.jd_path.as_str()) {
            Some(&i) => groups[i].1.push(row),
            None => {
                index.insert(row.jd_path.as_str(), groups.len());
                groups.push((row.jd_path.clone(), vec![row]));
            }
        }
    }

    groups
}

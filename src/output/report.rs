//! Report structures and rendering

use crate::config::OutputFormat;
use crate::error::Result;
use crate::eval::EvaluationOutcome;
use crate::processing::gap::KeywordGaps;
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Result of one match run: the semantic score plus the keyword gaps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub score: f32,
    pub gaps: KeywordGaps,
    pub resume_path: String,
    pub job_path: String,
    pub embedding_model: String,
    pub generated_at: DateTime<Utc>,
}

impl MatchReport {
    pub fn render(&self, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => Ok(self.render_console()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Markdown => Ok(self.render_markdown()),
        }
    }

    fn render_console(&self) -> String {
        let mut out = String::new();

        let score_text = format!("{:.2}%", self.score);
        let colored_score = if self.score >= 75.0 {
            score_text.green().bold()
        } else if self.score >= 50.0 {
            score_text.yellow().bold()
        } else {
            score_text.red().bold()
        };

        out.push_str(&format!("🎯 Job Match Score: {}\n\n", colored_score));

        out.push_str(&format!("{}\n", "Missing keywords (consider addressing):".bold()));
        if self.gaps.missing.is_empty() {
            out.push_str("  None - great alignment.\n");
        } else {
            out.push_str(&format!("  {}\n", self.gaps.missing.join(", ")));
        }

        out.push_str(&format!("\n{}\n", "Already present:".bold()));
        if self.gaps.present.is_empty() {
            out.push_str("  -\n");
        } else {
            out.push_str(&format!("  {}\n", self.gaps.present.join(", ")));
        }

        out.push_str(&format!(
            "\nEmbedding model: {}\nResume: {}\nJob description: {}\n",
            self.embedding_model, self.resume_path, self.job_path
        ));

        out
    }

    fn render_markdown(&self) -> String {
        let mut out = String::new();

        out.push_str("# Job Match Report\n\n");
        out.push_str(&format!("**Score:** {:.2}%\n\n", self.score));
        out.push_str(&format!(
            "Generated {} with `{}`\n\n",
            self.generated_at.format("%Y-%m-%d %H:%M UTC"),
            self.embedding_model
        ));

        out.push_str("## Missing keywords\n\n");
        if self.gaps.missing.is_empty() {
            out.push_str("None - great alignment.\n");
        } else {
            for keyword in &self.gaps.missing {
                out.push_str(&format!("- {}\n", keyword));
            }
        }

        out.push_str("\n## Present keywords\n\n");
        if self.gaps.present.is_empty() {
            out.push_str("None detected.\n");
        } else {
            for keyword in &self.gaps.present {
                out.push_str(&format!("- {}\n", keyword));
            }
        }

        out
    }
}

/// Render the evaluation result table and summary metrics for the console
pub fn render_evaluation(outcome: &EvaluationOutcome) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "Per-JD ranking results:".bold()));
    out.push_str(&format!(
        "{:<32} {:<32} {:>8}  {}\n",
        "JD", "Resume", "Score", "Label"
    ));

    for row in &outcome.rows {
        out.push_str(&format!(
            "{:<32} {:<32} {:>8.2}  {}\n",
            truncate_path(&row.jd_path, 32),
            truncate_path(&row.resume_path, 32),
            row.score,
            row.label.name()
        ));
    }

    out.push_str(&format!(
        "\n{}\n",
        format!("Summary over {} ranking groups:", outcome.group_count).bold()
    ));
    out.push_str(&format!(
        "  Precision@{} (avg): {:.3}\n",
        outcome.precision_k, outcome.mean_precision_at_k
    ));
    out.push_str(&format!(
        "  MRR (avg):         {:.3}\n",
        outcome.mean_reciprocal_rank
    ));

    out
}

/// Keep the tail of long paths so file names stay visible
fn truncate_path(path: &str, max_length: usize) -> String {
    if path.len() <= max_length {
        path.to_string()
    } else {
        let tail: String = path
            .chars()
            .rev()
            .take(max_length - 3)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("...{}", tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::{RankedRow, RelevanceLabel};

    fn sample_report() -> MatchReport {
        MatchReport {
            score: 72.45,
            gaps: KeywordGaps {
                missing: vec!["kubernetes".to_string(), "terraform".to_string()],
                present: vec!["python".to_string()],
            },
            resume_path: "cv.pdf".to_string(),
            job_path: "job.txt".to_string(),
            embedding_model: "minishlab/M2V_base_output".to_string(),
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_console_render_includes_score_and_gaps() {
        let rendered = sample_report().render(&OutputFormat::Console).unwrap();

        assert!(rendered.contains("72.45%"));
        assert!(rendered.contains("kubernetes"));
        assert!(rendered.contains("python"));
    }

    #[test]
    fn test_json_render_round_trips() {
        let rendered = sample_report().render(&OutputFormat::Json).unwrap();
        let parsed: MatchReport = serde_json::from_str(&rendered).unwrap();

        assert_eq!(parsed.score, 72.45);
        assert_eq!(parsed.gaps.missing.len(), 2);
    }

    #[test]
    fn test_markdown_render_lists_keywords() {
        let rendered = sample_report().render(&OutputFormat::Markdown).unwrap();

        assert!(rendered.starts_with("# Job Match Report"));
        assert!(rendered.contains("- kubernetes"));
        assert!(rendered.contains("- python"));
    }

    #[test]
    fn test_evaluation_render() {
        let outcome = EvaluationOutcome {
            rows: vec![RankedRow {
                jd_path: "jd.txt".to_string(),
                resume_path: "cv.txt".to_string(),
                score: 90.0,
                label: RelevanceLabel::Good,
            }],
            mean_precision_at_k: 1.0 / 3.0,
            mean_reciprocal_rank: 1.0,
            group_count: 1,
            precision_k: 3,
        };

        let rendered = render_evaluation(&outcome);
        assert!(rendered.contains("Precision@3 (avg): 0.333"));
        assert!(rendered.contains("MRR (avg):         1.000"));
        assert!(rendered.contains("Good"));
    }

    #[test]
    fn test_truncate_path_keeps_tail() {
        let path = "a/very/long/path/to/some/resume_document.txt";
        let truncated = truncate_path(path, 20);

        assert_eq!(truncated.len(), 20);
        assert!(truncated.ends_with("document.txt"));
        assert!(truncated.starts_with("..."));
    }
}

//! CLI interface for the resume matcher

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-matcher")]
#[command(about = "Resume and job description matching with AI-powered rewriting")]
#[command(
    long_about = "Score resume/job-description similarity with embeddings, surface keyword gaps, rewrite resumes through a hosted LLM, and evaluate ranking quality over a labeled dataset"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume against a job description and report keyword gaps
    Match {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (PDF, TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Embedding model to use (overrides config)
        #[arg(long)]
        embedding: Option<String>,

        /// Output format: console, json, markdown (defaults to the config value)
        #[arg(short, long)]
        output: Option<String>,

        /// Save the rendered report to a file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Rewrite the resume for the target job via a hosted LLM
    Rewrite {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (PDF, TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Rewrite template: full, summary, skills, star, bilingual
        #[arg(short, long, default_value = "full")]
        template: String,

        /// LLM model id (overrides config)
        #[arg(short, long)]
        model: Option<String>,

        /// Sampling temperature (overrides config)
        #[arg(long)]
        temperature: Option<f32>,

        /// Run the same rewrite against a second model for comparison
        #[arg(long)]
        compare: Option<String>,

        /// Save the rewritten resume to a plain-text file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Evaluate ranking quality over a labeled CSV dataset
    Eval {
        /// Path to the dataset CSV (columns: jd_path, resume_path, label)
        #[arg(short, long)]
        dataset: PathBuf,

        /// Embedding model to use (overrides config)
        #[arg(long)]
        embedding: Option<String>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

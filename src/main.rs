//! Resume matcher: resume/job-description matching and AI-powered rewriting

mod cli;
mod config;
mod error;
mod eval;
mod input;
mod llm;
mod output;
mod processing;

use chrono::Utc;
use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{MatcherError, Result};
use eval::RankingEvaluator;
use input::InputManager;
use llm::{RewriteEngine, RewriteTemplate};
use log::{error, info};
use output::{render_evaluation, MatchReport};
use processing::document::{Document, DocumentRole};
use processing::embeddings::{EmbeddingProvider, Model2VecProvider};
use processing::{KeywordGapAnalyzer, MatchScorer};
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if !config.output.color {
        colored::control::set_override(false);
    }

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Match {
            resume,
            job,
            embedding,
            output,
            save,
        } => {
            let output_format = match output {
                Some(format) => {
                    cli::parse_output_format(&format).map_err(MatcherError::InvalidInput)?
                }
                None => config.output.format.clone(),
            };

            let (resume_doc, job_doc) = load_documents(&resume, &job).await?;

            let model_id = embedding.unwrap_or_else(|| config.embedding.model_id.clone());
            let provider = Model2VecProvider::load(&model_id)?;
            let scorer = MatchScorer::new(&provider);

            info!("Scoring resume against job description");
            let score = scorer.score(&resume_doc.normalized, &job_doc.normalized)?;

            let analyzer = KeywordGapAnalyzer::new(
                config.keywords.frequency_cutoff,
                config.keywords.max_keywords,
            );
            let gaps = analyzer.gaps(&resume_doc.normalized, &job_doc.normalized);

            let report = MatchReport {
                score,
                gaps,
                resume_path: resume.to_string_lossy().to_string(),
                job_path: job.to_string_lossy().to_string(),
                embedding_model: provider.id().to_string(),
                generated_at: Utc::now(),
            };

            let rendered = report.render(&output_format)?;
            println!("{}", rendered);

            if let Some(save_path) = save {
                tokio::fs::write(&save_path, &rendered).await?;
                println!("💾 Report saved to {}", save_path.display());
            }
        }

        Commands::Rewrite {
            resume,
            job,
            template,
            model,
            temperature,
            compare,
            save,
        } => {
            let template = RewriteTemplate::parse(&template).map_err(MatcherError::InvalidInput)?;

            let (resume_doc, job_doc) = load_documents(&resume, &job).await?;

            let engine = RewriteEngine::from_config(&config);
            let model = model.unwrap_or_else(|| config.llm.default_model.clone());
            let temperature = temperature.unwrap_or(config.llm.temperature);

            println!(
                "🧠 Rewriting resume ('{}' template, model {})...",
                template.title(),
                model
            );
            let optimized = engine
                .rewrite(
                    &resume_doc.normalized,
                    &job_doc.normalized,
                    template,
                    &model,
                    temperature,
                )
                .await;

            println!("\n{}\n", optimized);

            if let Some(second_model) = compare {
                println!("🆚 Comparison rewrite (model {})...", second_model);
                let alternative = engine
                    .rewrite(
                        &resume_doc.normalized,
                        &job_doc.normalized,
                        template,
                        &second_model,
                        temperature,
                    )
                    .await;
                println!("\n{}\n", alternative);
            }

            if let Some(save_path) = save {
                tokio::fs::write(&save_path, &optimized).await?;
                println!("💾 Optimized resume saved to {}", save_path.display());
            }
        }

        Commands::Eval { dataset, embedding } => {
            println!("📊 Loading evaluation dataset: {}", dataset.display());
            let rows = eval::load_dataset(&dataset)?;

            let model_id = embedding.unwrap_or_else(|| config.embedding.model_id.clone());
            let provider = Model2VecProvider::load(&model_id)?;

            let evaluator = RankingEvaluator::new(&provider, config.evaluation.precision_k)
                .with_progress(true);
            let outcome = evaluator.evaluate(&rows).await?;

            println!("\n{}", render_evaluation(&outcome));
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    MatcherError::Configuration(format!("Failed to serialize config: {}", e))
                })?;
                println!("⚙️  Current configuration\n\n{}", content);
            }

            Some(ConfigAction::Reset) => {
                Config::default().save()?;
                println!("✅ Configuration reset to defaults");
            }

            Some(ConfigAction::Path) => {
                println!("{}", Config::config_path().display());
            }
        },
    }

    Ok(())
}

/// Extract and normalize both input documents, rejecting empty inputs
/// before any scoring or rewriting starts.
async fn load_documents(resume: &Path, job: &Path) -> Result<(Document, Document)> {
    let mut input_manager = InputManager::new();

    let resume_text = input_manager.extract_text(resume).await?;
    let job_text = input_manager.extract_text(job).await?;

    let resume_doc = Document::from_file(
        resume_text,
        DocumentRole::Resume,
        resume.to_string_lossy().to_string(),
    );
    let job_doc = Document::from_file(
        job_text,
        DocumentRole::JobDescription,
        job.to_string_lossy().to_string(),
    );

    for doc in [&resume_doc, &job_doc] {
        if doc.is_empty() {
            return Err(MatcherError::InvalidInput(format!(
                "The {} is empty: {}",
                doc.role,
                doc.source.as_deref().unwrap_or("<pasted text>")
            )));
        }
    }

    Ok((resume_doc, job_doc))
}

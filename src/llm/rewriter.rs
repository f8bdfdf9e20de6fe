//! Rewrite engine: builds prompts and delegates to the hosted LLM
//!
//! Failures here are user-facing: the caller displays whatever string comes
//! back, so a missing credential or a failed call becomes a descriptive
//! error string rather than an Err.

use crate::config::Config;
use crate::llm::client::ChatClient;
use crate::llm::prompts::{RewriteTemplate, SYSTEM_PROMPT};
use log::{info, warn};

pub const CREDENTIAL_ENV_VAR: &str = "OPENAI_API_KEY";

pub struct RewriteEngine {
    endpoint: String,
    credential: Option<String>,
}

impl RewriteEngine {
    pub fn new(endpoint: String, credential: Option<String>) -> Self {
        Self {
            endpoint,
            credential,
        }
    }

    /// Build an engine from configuration, resolving the credential from the
    /// environment first and the config file second.
    pub fn from_config(config: &Config) -> Self {
        let credential = std::env::var(CREDENTIAL_ENV_VAR)
            .ok()
            .filter(|key| !key.is_empty())
            .or_else(|| config.llm.api_key.clone());

        Self::new(config.llm.endpoint.clone(), credential)
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// Produce a rewritten resume for the given template and model.
    ///
    /// Always returns displayable text: the model output on success, an
    /// error string otherwise. Without a credential no network call is made.
    pub async fn rewrite(
        &self,
        resume_text: &str,
        job_text: &str,
        template: RewriteTemplate,
        model: &str,
        temperature: f32,
    ) -> String {
        let credential = match &self.credential {
            Some(key) => key.clone(),
            None => {
                warn!("Rewrite requested without a configured credential");
                return format!(
                    "[ERROR] {} not set. Export it or add llm.api_key to the config file.",
                    CREDENTIAL_ENV_VAR
                );
            }
        };

        let client = match ChatClient::new(self.endpoint.clone(), credential) {
            Ok(client) => client,
            Err(e) => return format!("[LLM error] {}", e),
        };

        let prompt = template.render(resume_text, job_text);
        info!(
            "Requesting '{}' rewrite (model: {}, temperature: {})",
            template.title(),
            model,
            temperature
        );

        match client
            .complete(SYSTEM_PROMPT, &prompt, model, temperature)
            .await
        {
            Ok(text) => text.trim().to_string(),
            Err(e) => format!("[LLM error] {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_credential_returns_error_string() {
        let engine = RewriteEngine::new("http://localhost:0/unused".to_string(), None);

        let output = engine
            .rewrite(
                "resume text",
                "job text",
                RewriteTemplate::FullRewrite,
                "gpt-4o-mini",
                0.2,
            )
            .await;

        assert!(output.starts_with("[ERROR]"));
        assert!(output.contains(CREDENTIAL_ENV_VAR));
    }

    #[test]
    fn test_config_credential_fallback() {
        let mut config = crate::Config::default();
        config.llm.api_key = Some("from-config".to_string());

        // Without the env var the config key is used
        std::env::remove_var(CREDENTIAL_ENV_VAR);
        let engine = RewriteEngine::from_config(&config);
        assert!(engine.has_credential());
        assert_eq!(engine.credential.as_deref(), Some("from-config"));
    }

    #[test]
    fn test_no_credential_anywhere() {
        std::env::remove_var(CREDENTIAL_ENV_VAR);
        let engine = RewriteEngine::from_config(&crate::Config::default());
        assert!(!engine.has_credential());
    }
}

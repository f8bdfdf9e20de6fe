//! HTTP client for an OpenAI-compatible chat-completions endpoint

use crate::error::{MatcherError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Thin chat-completions client. Each invocation is a single best-effort
/// call: no retries, no streaming, no caching.
pub struct ChatClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl ChatClient {
    pub fn new(endpoint: String, api_key: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| MatcherError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint,
            api_key,
        })
    }

    /// Send one system+user message pair and return the generated text.
    pub async fn complete(
        &self,
        system: &str,
        user: &str,
        model: &str,
        temperature: f32,
    ) -> Result<String> {
        let request_body = ChatRequest {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature,
        };

        debug!("Sending chat request to {} (model: {})", self.endpoint, model);

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| MatcherError::Network(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(MatcherError::Network(format!(
                "API returned status {}: {}",
                status.as_u16(),
                message
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| MatcherError::Network(format!("Failed to parse response: {}", e)))?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| MatcherError::Network("Response contained no choices".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = ChatRequest {
            model: "gpt-4o-mini",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "coach",
                },
                ChatMessage {
                    role: "user",
                    content: "rewrite this",
                },
            ],
            temperature: 0.2,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "rewrite this");
    }

    #[test]
    fn test_response_deserialization() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"Rewritten resume"}}]}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.choices[0].message.content, "Rewritten resume");
    }

    #[test]
    fn test_error_body_deserialization() {
        let body = r#"{"error":{"message":"Invalid API key","type":"auth"}}"#;
        let error: ApiError = serde_json::from_str(body).unwrap();

        assert_eq!(error.error.message, "Invalid API key");
    }
}

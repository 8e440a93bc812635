//! Generation service HTTP client.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::{AiError, AiResult};
use crate::types::{ChatMessage, ChatRequest, ChatResponse, ResponseFormat};

/// Configuration for the generation client.
#[derive(Debug, Clone)]
pub struct AiClientConfig {
    /// Base URL of the generation service
    pub base_url: String,
    /// Bearer credential
    pub api_key: String,
    /// Model identifier
    pub model: String,
    /// Sampling temperature; kept low enough to bias toward specific,
    /// non-generic output
    pub temperature: f32,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for AiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            api_key: String::new(),
            model: "gpt-4o".to_string(),
            temperature: 0.7,
            timeout: Duration::from_secs(30),
        }
    }
}

impl AiClientConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("AI_API_URL").unwrap_or(defaults.base_url),
            api_key: std::env::var("AI_API_KEY").unwrap_or_default(),
            model: std::env::var("AI_MODEL").unwrap_or(defaults.model),
            temperature: std::env::var("AI_TEMPERATURE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.temperature),
            timeout: Duration::from_secs(
                std::env::var("AI_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
        }
    }
}

/// Client for the text-generation service.
pub struct AiClient {
    http: Client,
    config: AiClientConfig,
}

impl AiClient {
    /// Create a new generation client.
    pub fn new(config: AiClientConfig) -> AiResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(AiError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> AiResult<Self> {
        Self::new(AiClientConfig::from_env())
    }

    /// Send a prompt and parse the completion strictly as a JSON object.
    ///
    /// No retries: a failed call is the caller's cue to fall back.
    pub async fn generate_json(&self, prompt: &str) -> AiResult<serde_json::Value> {
        let url = format!("{}/v1/chat/completions", self.config.base_url);

        debug!("sending generation request to {}", url);

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            response_format: ResponseFormat::json_object(),
            temperature: self.config.temperature,
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(AiError::Network)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::RequestFailed(format!(
                "generation service returned {}: {}",
                status, body
            )));
        }

        let completion: ChatResponse = response.json().await?;
        let content = completion
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .ok_or_else(|| AiError::InvalidResponse("no content in completion".to_string()))?;

        Ok(serde_json::from_str(content)?)
    }
}

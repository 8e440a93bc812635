//! Generation service request/response types.

use serde::{Deserialize, Serialize};

/// Chat-completion request body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages; the pipeline sends a single user prompt
    pub messages: Vec<ChatMessage>,
    /// Requested response format
    pub response_format: ResponseFormat,
    /// Sampling temperature
    pub temperature: f32,
}

/// A single chat message.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// Build a user-role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Response format constraint sent with every request.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub format: String,
}

impl ResponseFormat {
    /// Constrain the response to a single JSON object.
    pub fn json_object() -> Self {
        Self {
            format: "json_object".to_string(),
        }
    }
}

/// Chat-completion response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

/// One completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: AssistantMessage,
}

/// The assistant message inside a choice.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantMessage {
    pub content: Option<String>,
}

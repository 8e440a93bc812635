//! Client for the text-generation service.
//!
//! The pipeline uses an OpenAI-style chat-completions endpoint to turn
//! retention hotspots into human-readable explanations. Every request asks
//! for a strict-JSON object response; callers receive the parsed JSON value
//! and apply their own defaulting rules.
//!
//! The client deliberately has no retry logic: callers degrade to
//! deterministic fallback content on the first failure.

pub mod client;
pub mod error;
pub mod types;

pub use client::{AiClient, AiClientConfig};
pub use error::{AiError, AiResult};
pub use types::{ChatMessage, ChatRequest, ChatResponse, ResponseFormat};

//! Groq client for vision chat completions.
//!
//! This module provides a client for the Groq OpenAI-compatible API, sending a
//! single multimodal chat completion per call and returning the outcome as a
//! result mapping rather than an error: the mapping holds either the model's
//! answer keyed by the model identifier, or a single `"error"` entry.

use crate::error::{GroqVisionError, Result};
use crate::llm::images::EncodedImage;
use crate::llm::models::LlmMessage;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, info};

/// Default Groq API base URL.
pub const GROQ_API_URL: &str = "https://api.groq.com/openai/v1";

/// Vision model queried by [`GroqClient::process_image`].
pub const DEFAULT_VISION_MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";

/// Completion token cap sent with every request.
const MAX_COMPLETION_TOKENS: u32 = 1000;

/// Network timeout for the chat completion call.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Configuration for connecting to the Groq API.
#[derive(Debug, Clone)]
pub struct GroqConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GroqConfig {
    /// Create a configuration with the default endpoint and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: GROQ_API_URL.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }

    /// Load configuration from the environment.
    ///
    /// Fails with [`GroqVisionError::ConfigError`] if `GROQ_API_KEY` is unset.
    /// `GROQ_API_ENDPOINT` overrides the base URL when present.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GROQ_API_KEY")
            .map_err(|_| GroqVisionError::ConfigError("GROQ_API_KEY is not set".to_string()))?;

        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var("GROQ_API_ENDPOINT") {
            config.base_url = base_url;
        }
        Ok(config)
    }
}

/// Outcome of a single chat completion POST before mapping.
enum ChatOutcome {
    /// HTTP 200 with extractable answer text.
    Answer(String),
    /// Any non-200 status; a soft failure, not an error.
    HttpFailure(u16),
}

/// Client for the Groq vision chat completions API.
///
/// Holds a reqwest client built once with the configured timeout. Each call
/// performs exactly one outbound request; there are no retries.
pub struct GroqClient {
    client: Client,
    config: GroqConfig,
}

impl GroqClient {
    /// Create a new client with custom configuration.
    pub fn with_config(config: GroqConfig) -> Self {
        let client = Client::builder().timeout(config.timeout).build().unwrap();

        Self { client, config }
    }

    /// Create a client with the default endpoint.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self::with_config(GroqConfig::new(api_key))
    }

    /// Create a client with a custom API key and base URL.
    pub fn with_api_key_and_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let mut config = GroqConfig::new(api_key);
        config.base_url = base_url.into();
        Self::with_config(config)
    }

    /// Analyze an image file with a free-text query.
    ///
    /// Reads and validates the image, builds a text-plus-image user message,
    /// and queries [`DEFAULT_VISION_MODEL`]. Load and validation failures are
    /// converted at this boundary into an `"error"` mapping entry; the message
    /// text reuses the `Invalid image format:` prefix for I/O failures too,
    /// matching the upstream behavior.
    pub async fn process_image(
        &self,
        image_path: impl AsRef<Path>,
        query: &str,
    ) -> HashMap<String, String> {
        let message = match EncodedImage::load(image_path.as_ref()) {
            Ok(image) => LlmMessage::user_with_image(query, image.data_uri()),
            Err(e) => {
                error!(error = %e, "Invalid image format");
                return HashMap::from([(
                    "error".to_string(),
                    format!("Invalid image format: {}", e),
                )]);
            }
        };

        self.complete(DEFAULT_VISION_MODEL, &[message]).await
    }

    /// Perform one chat completion and fold the outcome into a result mapping.
    ///
    /// The mapping always has exactly one entry: the answer or a soft-failure
    /// description under the model key, or a hard-failure description under
    /// `"error"`.
    pub async fn complete(&self, model: &str, messages: &[LlmMessage]) -> HashMap<String, String> {
        let mut responses = HashMap::new();

        match self.post_chat_completion(model, messages).await {
            Ok(ChatOutcome::Answer(answer)) => {
                responses.insert(model.to_string(), answer);
            }
            Ok(ChatOutcome::HttpFailure(status)) => {
                responses.insert(model.to_string(), format!("Error from {} API : {}", model, status));
            }
            Err(e) => {
                error!(error = %e, "Unexpected error occurred");
                responses.insert("error".to_string(), format!("Unexpected error occurred: {}", e));
            }
        }

        responses
    }

    /// Send the chat completion POST and extract the answer text.
    ///
    /// A non-200 status is returned as [`ChatOutcome::HttpFailure`]; transport
    /// failures and a 200 body missing `choices[0].message.content` are errors.
    async fn post_chat_completion(
        &self,
        model: &str,
        messages: &[LlmMessage],
    ) -> Result<ChatOutcome> {
        debug!(model, message_count = messages.len(), "Sending chat completion request");

        let body = serde_json::json!({
            "model": model,
            "messages": messages,
            "max_tokens": MAX_COMPLETION_TOKENS,
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            let status = response.status().as_u16();
            let error_text = response.text().await.unwrap_or_default();
            error!(model, status, body = %error_text, "API error");
            return Ok(ChatOutcome::HttpFailure(status));
        }

        let response_body: Value = response.json().await?;

        let answer = response_body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                GroqVisionError::MalformedResponse(
                    "no choices[0].message.content in response".to_string(),
                )
            })?
            .to_string();

        info!(model, answer = %answer, "Processed response from API");
        Ok(ChatOutcome::Answer(answer))
    }
}

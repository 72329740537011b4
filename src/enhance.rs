//! Prompt enhancement via a hosted language model.
//!
//! Takes the generated prompt's context and requirement lines and asks an
//! OpenAI-compatible chat completion endpoint to rewrite them into a richer
//! system prompt. The call is optional glue around the core generator: a
//! failed call never corrupts the already generated prompt.
//!
//! Transient HTTP failures (408, 429, 5xx) and network errors are retried
//! with linear backoff up to the configured attempt limit.

use crate::config::EnhanceConfig;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

/// Initial backoff delay between retries.
const INITIAL_BACKOFF_MS: u64 = 1000;

/// Errors from the enhancement call.
#[derive(Debug, Error)]
pub enum EnhanceError {
    /// The configured API key environment variable is not set.
    #[error("API key environment variable '{var}' is not set")]
    MissingApiKey { var: String },

    /// The endpoint answered with a non-success status.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The request could not be sent or the response not read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body did not have the expected shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Check if an HTTP status code is worth retrying.
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 408 | 429 | 500 | 502 | 503 | 504)
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

/// Client for an OpenAI-compatible chat completion endpoint.
pub struct EnhanceClient {
    model: String,
    api_key: String,
    base_url: String,
    max_retries: u32,
    http: reqwest::blocking::Client,
}

impl EnhanceClient {
    /// Create a client from configuration.
    ///
    /// Reads the API key from the environment variable named in the config.
    pub fn from_config(config: &EnhanceConfig) -> Result<Self, EnhanceError> {
        let api_key = config.api_key()?;

        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            model: config.model.clone(),
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_retries: config.max_retries,
            http,
        })
    }

    /// Ask the model to generate an enhanced prompt.
    ///
    /// `context` is the prompt's context text, `requirements` the bullet
    /// lines to satisfy, `tone` the requested register. Returns the model's
    /// generated text.
    pub fn enhance(
        &self,
        context: &str,
        requirements: &[String],
        tone: &str,
    ) -> Result<String, EnhanceError> {
        let body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": build_system_message(tone)},
                {"role": "user", "content": build_user_message(context, requirements)},
            ],
        });

        let url = format!("{}/chat/completions", self.base_url);
        let mut attempt = 0;
        loop {
            match self.send_once(&url, &body) {
                Ok(content) => return Ok(content),
                Err(err) if attempt < self.max_retries && is_transient(&err) => {
                    attempt += 1;
                    std::thread::sleep(Duration::from_millis(
                        INITIAL_BACKOFF_MS * u64::from(attempt),
                    ));
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn send_once(&self, url: &str, body: &serde_json::Value) -> Result<String, EnhanceError> {
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(EnhanceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| EnhanceError::InvalidResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| EnhanceError::InvalidResponse("response had no choices".to_string()))
    }
}

/// Check if an error should be retried.
fn is_transient(err: &EnhanceError) -> bool {
    match err {
        EnhanceError::Api { status, .. } => is_retryable_status(*status),
        EnhanceError::Network(_) => true,
        EnhanceError::MissingApiKey { .. } | EnhanceError::InvalidResponse(_) => false,
    }
}

/// Build the system message for the completion call.
fn build_system_message(tone: &str) -> String {
    format!(
        "You are a professional prompt engineer. Generate prompts in a {} tone.",
        tone
    )
}

/// Build the user message listing context and requirement lines.
fn build_user_message(context: &str, requirements: &[String]) -> String {
    let requirements_text = requirements
        .iter()
        .map(|req| format!("- {}", req))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Context: {}\n\nRequirements:\n{}\n\nPlease generate a prompt that meets these requirements.",
        context, requirements_text
    )
}

//! OpenAI-compatible text-completion provider.
//!
//! One implementation covers every backend exposing the standard
//! `/chat/completions` endpoint:
//!
//! - OpenAI (`https://api.openai.com/v1`)
//! - OpenRouter (`https://openrouter.ai/api/v1`)
//! - Groq (`https://api.groq.com/openai/v1`)
//! - llama.cpp / vLLM local servers (`http://localhost:8080/v1`)
//!
//! Direct HTTP via `reqwest`; no SDK dependency.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::TextCompletion;

/// Known provider base URLs.
const PROVIDER_URLS: &[(&str, &str)] = &[
    ("openrouter", "https://openrouter.ai/api/v1"),
    ("openai", "https://api.openai.com/v1"),
    ("groq", "https://api.groq.com/openai/v1"),
    ("local", "http://localhost:8080/v1"),
];

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// API-level failure, separated from transport errors so the router can log
/// the status code.
#[derive(Debug, Error)]
#[error("completion API error ({status}): {message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiProvider {
    /// Create a provider. `api_base` overrides the per-provider default URL;
    /// unknown provider names fall back to the OpenAI endpoint.
    pub fn new(
        provider_name: &str,
        api_key: &str,
        api_base: Option<&str>,
        model: &str,
        client: Client,
    ) -> Self {
        let base_url = api_base
            .map(str::to_string)
            .unwrap_or_else(|| base_url_for(provider_name).to_string())
            .trim_end_matches('/')
            .to_string();

        debug!(provider = provider_name, base_url = %base_url, model, "initialized completion provider");

        Self {
            client,
            api_key: api_key.to_string(),
            base_url,
            model: model.to_string(),
        }
    }
}

fn base_url_for(provider_name: &str) -> &'static str {
    PROVIDER_URLS
        .iter()
        .find(|(name, _)| *name == provider_name)
        .map(|(_, url)| *url)
        .unwrap_or(DEFAULT_BASE_URL)
}

// ── Wire types ──

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    stop: &'a [&'a str],
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageResponse,
}

#[derive(Deserialize)]
struct MessageResponse {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

#[async_trait]
impl TextCompletion for OpenAiProvider {
    async fn complete(
        &self,
        prompt: &str,
        stops: &[&str],
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let request_body = CompletionRequest {
            model: &self.model,
            messages: vec![WireMessage { role: "user", content: prompt }],
            max_tokens,
            temperature,
            stop: stops,
        };

        debug!(model = %self.model, url = %url, prompt_len = prompt.len(), "sending completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .context("failed to reach completion API")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("failed to read completion API response body")?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| body.clone());
            return Err(ApiError { status: status.as_u16(), message }.into());
        }

        let parsed: CompletionResponse =
            serde_json::from_str(&body).context("failed to parse completion API response")?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_providers_resolve_their_base_url() {
        assert_eq!(base_url_for("openrouter"), "https://openrouter.ai/api/v1");
        assert_eq!(base_url_for("local"), "http://localhost:8080/v1");
        assert_eq!(base_url_for("something-else"), DEFAULT_BASE_URL);
    }

    #[test]
    fn explicit_api_base_wins_and_is_trimmed() {
        let p = OpenAiProvider::new(
            "openai",
            "key",
            Some("http://127.0.0.1:9000/v1/"),
            "test-model",
            Client::new(),
        );
        assert_eq!(p.base_url, "http://127.0.0.1:9000/v1");
    }

    #[test]
    fn request_omits_empty_stop_list() {
        let req = CompletionRequest {
            model: "m",
            messages: vec![WireMessage { role: "user", content: "hi" }],
            max_tokens: 16,
            temperature: 0.5,
            stop: &[],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("stop").is_none());

        let req = CompletionRequest {
            model: "m",
            messages: vec![WireMessage { role: "user", content: "hi" }],
            max_tokens: 16,
            temperature: 0.5,
            stop: &["</s>", "User:"],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["stop"][0], "</s>");
    }
}

//! Shared provider plumbing.
//!
//! Configuration extraction helpers, the chat-style wire payloads shared by
//! the OpenAI-compatible backends, and the single-attempt request sender.
//! There is no retry loop anywhere in this module: a failed call degrades to
//! a fallback message in the composer instead of being re-issued.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ProviderConfig;
use crate::error::{AicommitError, Result};

use super::utils::complete_endpoint;

/// Error preview maximum length
const ERROR_PREVIEW_LENGTH: usize = 500;

/// Extract the API key for a provider.
///
/// Precedence: config value (file or `AICOMMIT__*` environment) first, then
/// the conventional environment variable (`OPENAI_API_KEY` style). Blank
/// values count as missing.
pub fn extract_api_key(
    config: &ProviderConfig,
    env_var: &str,
    provider_name: &str,
) -> Result<String> {
    config
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .or_else(|| {
            std::env::var(env_var)
                .ok()
                .filter(|key| !key.trim().is_empty())
        })
        .ok_or_else(|| {
            AicommitError::Config(format!(
                "API key not found for {} (set {} or llm.{}.api_key)",
                provider_name,
                env_var,
                provider_name.to_lowercase()
            ))
        })
}

/// Build the full endpoint from config + defaults.
pub fn build_endpoint(config: &ProviderConfig, default_base: &str, suffix: &str) -> String {
    let base = config.endpoint.as_deref().unwrap_or(default_base);
    complete_endpoint(base, suffix)
}

/// Truncate a response body for error messages (safe on multibyte input).
pub fn truncate_for_preview(s: &str) -> String {
    if s.len() <= ERROR_PREVIEW_LENGTH {
        return s.to_string();
    }
    let boundary = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= ERROR_PREVIEW_LENGTH)
        .last()
        .unwrap_or(0);
    format!("{}...", &s[..boundary])
}

/// Chat-style request payload (OpenAI-compatible APIs).
#[derive(Serialize)]
pub(crate) struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// One chat message with a role.
#[derive(Serialize)]
pub(crate) struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

/// Chat-style response payload.
#[derive(Deserialize)]
pub(crate) struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChatMessageContent,
}

#[derive(Deserialize)]
pub(crate) struct ChatMessageContent {
    pub content: String,
}

/// Pull the completion text out of a chat response.
///
/// A response without choices is a provider error, not an empty message —
/// the composer turns it into a fallback.
pub(crate) fn extract_chat_completion(
    response: ChatResponse,
    provider_name: &str,
) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| {
            AicommitError::Llm(format!("{} response contained no choices", provider_name))
        })
}

/// Send one LLM API request and deserialize the JSON response.
///
/// Exactly one attempt. Error mapping:
/// - transport failure → [`AicommitError::Network`]
/// - non-2xx status → [`AicommitError::LlmApi`] with the status code
/// - undecodable body → [`AicommitError::Llm`] with a bounded preview
pub(crate) async fn send_llm_request<Req, Resp>(
    client: &Client,
    endpoint: &str,
    headers: &[(&str, &str)],
    request_body: &Req,
    provider_name: &str,
) -> Result<Resp>
where
    Req: Serialize,
    Resp: DeserializeOwned,
{
    let mut req = client
        .post(endpoint)
        .header("Content-Type", "application/json");

    for (key, value) in headers {
        req = req.header(*key, *value);
    }

    tracing::debug!("Sending {} request to: {}", provider_name, endpoint);

    let response = req.json(request_body).send().await.map_err(|e| {
        let error_type = if e.is_timeout() {
            "timeout"
        } else if e.is_connect() {
            "connection failed"
        } else {
            "request error"
        };
        tracing::debug!(
            "{} API request failed [{}]: {}",
            provider_name,
            error_type,
            e
        );
        AicommitError::Network(e)
    })?;

    let status = response.status();
    let response_text = response.text().await?;

    tracing::debug!("{} API response status: {}", provider_name, status);
    tracing::debug!("{} API response body: {}", provider_name, response_text);

    if !status.is_success() {
        return Err(AicommitError::LlmApi {
            status: status.as_u16(),
            message: format!("{}: {}", provider_name, truncate_for_preview(&response_text)),
        });
    }

    serde_json::from_str(&response_text).map_err(|e| {
        AicommitError::Llm(format!(
            "Failed to parse {} response: {}. Raw response: {}",
            provider_name,
            e,
            truncate_for_preview(&response_text)
        ))
    })
}

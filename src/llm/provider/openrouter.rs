use async_trait::async_trait;
use reqwest::Client;

use super::base::{
    ChatMessage, ChatRequest, ChatResponse, build_endpoint, extract_api_key,
    extract_chat_completion, send_llm_request,
};
use super::utils::{
    CHAT_API_SUFFIX, DEFAULT_OPENROUTER_BASE, DEFAULT_OPENROUTER_MODEL, mask_api_key,
};
use crate::config::{NetworkConfig, ProviderConfig};
use crate::constants::llm::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use crate::error::Result;
use crate::llm::LLMProvider;
use crate::llm::prompt::{COMMIT_SYSTEM_PROMPT, build_commit_prompt};

/// OpenRouter 要求的来源标识头
const REFERER_HEADER: (&str, &str) = ("HTTP-Referer", "https://local.git.hooks");
const TITLE_HEADER: (&str, &str) = ("X-Title", "aicommit-rs");

/// OpenRouter chat completions provider
///
/// 与 OpenAI 同一套 chat 协议，外加两个来源标识头。
pub struct OpenRouterProvider {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenRouterProvider {
    pub fn new(config: &ProviderConfig, network_config: &NetworkConfig) -> Result<Self> {
        let api_key = extract_api_key(config, "OPENROUTER_API_KEY", "OpenRouter")?;
        let endpoint = build_endpoint(config, DEFAULT_OPENROUTER_BASE, CHAT_API_SUFFIX);
        let model = config
            .model
            .clone()
            .unwrap_or_else(|| DEFAULT_OPENROUTER_MODEL.to_string());

        tracing::debug!(
            "OpenRouter provider: endpoint={}, model={}, api_key={}",
            endpoint,
            model,
            mask_api_key(&api_key)
        );

        Ok(Self {
            client: super::create_http_client(network_config)?,
            api_key,
            endpoint,
            model,
            max_tokens: config.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            temperature: config.temperature.unwrap_or(DEFAULT_TEMPERATURE),
        })
    }
}

#[async_trait]
impl LLMProvider for OpenRouterProvider {
    async fn generate_commit_message(&self, diff: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: COMMIT_SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: build_commit_prompt(diff),
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let auth = format!("Bearer {}", self.api_key);
        let response: ChatResponse = send_llm_request(
            &self.client,
            &self.endpoint,
            &[
                ("Authorization", auth.as_str()),
                REFERER_HEADER,
                TITLE_HEADER,
            ],
            &request,
            "openrouter",
        )
        .await?;

        extract_chat_completion(response, "openrouter")
    }

    fn name(&self) -> &str {
        "openrouter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AicommitError;
    use mockito::Server;
    use pretty_assertions::assert_eq;

    fn test_provider_config(base_url: String) -> ProviderConfig {
        crate::llm::provider::ensure_crypto_provider();
        ProviderConfig {
            endpoint: Some(base_url),
            api_key: Some("or-test".to_string()),
            model: Some("openrouter/auto".to_string()),
            max_tokens: None,
            temperature: None,
        }
    }

    #[tokio::test]
    async fn test_openrouter_sends_attribution_headers() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer or-test")
            .match_header("http-referer", "https://local.git.hooks")
            .match_header("x-title", "aicommit-rs")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"choices":[{"message":{"role":"assistant","content":"chore: bump deps"}}]}"#,
            )
            .create_async()
            .await;

        let provider = OpenRouterProvider::new(
            &test_provider_config(server.url()),
            &NetworkConfig::default(),
        )
        .unwrap();

        let result = provider.generate_commit_message("+dep bump").await.unwrap();
        assert_eq!(result, "chore: bump deps");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_openrouter_unauthorized_maps_to_llm_api() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(401)
            .with_body("Unauthorized")
            .create_async()
            .await;

        let provider = OpenRouterProvider::new(
            &test_provider_config(server.url()),
            &NetworkConfig::default(),
        )
        .unwrap();

        let err = provider.generate_commit_message("+x").await.unwrap_err();
        assert!(matches!(err, AicommitError::LlmApi { status: 401, .. }));
    }
}

use async_trait::async_trait;
use reqwest::Client;

use super::base::{
    ChatMessage, ChatRequest, ChatResponse, build_endpoint, extract_api_key,
    extract_chat_completion, send_llm_request,
};
use super::utils::{CHAT_API_SUFFIX, DEFAULT_OPENAI_BASE, DEFAULT_OPENAI_MODEL, mask_api_key};
use crate::config::{NetworkConfig, ProviderConfig};
use crate::constants::llm::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use crate::error::Result;
use crate::llm::LLMProvider;
use crate::llm::prompt::{COMMIT_SYSTEM_PROMPT, build_commit_prompt};

/// OpenAI chat completions provider
#[derive(Debug)]
pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAIProvider {
    pub fn new(config: &ProviderConfig, network_config: &NetworkConfig) -> Result<Self> {
        let api_key = extract_api_key(config, "OPENAI_API_KEY", "OpenAI")?;
        let endpoint = build_endpoint(config, DEFAULT_OPENAI_BASE, CHAT_API_SUFFIX);
        let model = config
            .model
            .clone()
            .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string());

        tracing::debug!(
            "OpenAI provider: endpoint={}, model={}, api_key={}",
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
impl LLMProvider for OpenAIProvider {
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
            &[("Authorization", auth.as_str())],
            &request,
            "openai",
        )
        .await?;

        extract_chat_completion(response, "openai")
    }

    fn name(&self) -> &str {
        "openai"
    }
}

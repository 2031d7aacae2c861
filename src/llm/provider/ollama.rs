use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::base::{build_endpoint, send_llm_request};
use super::utils::{DEFAULT_OLLAMA_BASE, DEFAULT_OLLAMA_MODEL, OLLAMA_API_SUFFIX};
use crate::config::{NetworkConfig, ProviderConfig};
use crate::error::Result;
use crate::llm::LLMProvider;
use crate::llm::prompt::build_commit_prompt;

/// Ollama local completion provider
pub struct OllamaProvider {
    client: Client,
    endpoint: String,
    model: String,
    temperature: Option<f32>,
}

#[derive(Serialize)]
struct OllamaRequest {
    model: String,
    prompt: String,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<OllamaOptions>,
}

#[derive(Serialize)]
struct OllamaOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Deserialize)]
struct OllamaResponse {
    response: String,
    #[allow(dead_code)] // 保留用于完整性验证
    done: bool,
}

impl OllamaProvider {
    pub fn new(config: &ProviderConfig, network_config: &NetworkConfig) -> Result<Self> {
        // Ollama 本地部署，无需 API key
        let endpoint = build_endpoint(config, DEFAULT_OLLAMA_BASE, OLLAMA_API_SUFFIX);
        let model = config
            .model
            .clone()
            .unwrap_or_else(|| DEFAULT_OLLAMA_MODEL.to_string());

        tracing::debug!("Ollama provider: endpoint={}, model={}", endpoint, model);

        Ok(Self {
            client: super::create_http_client(network_config)?,
            endpoint,
            model,
            temperature: config.temperature,
        })
    }
}

#[async_trait]
impl LLMProvider for OllamaProvider {
    async fn generate_commit_message(&self, diff: &str) -> Result<String> {
        let options = self.temperature.map(|temperature| OllamaOptions {
            temperature: Some(temperature),
        });

        let request = OllamaRequest {
            model: self.model.clone(),
            prompt: build_commit_prompt(diff),
            stream: false,
            options,
        };

        let response: OllamaResponse = send_llm_request(
            &self.client,
            &self.endpoint,
            &[], // Ollama 无需 auth headers
            &request,
            "ollama",
        )
        .await?;

        Ok(response.response)
    }

    fn name(&self) -> &str {
        "ollama"
    }
}

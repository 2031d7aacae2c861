pub mod base;
pub mod ollama;
pub mod openai;
pub mod openrouter;
pub mod utils;

use std::sync::OnceLock;
use std::time::Duration;

use reqwest::Client;

use crate::config::{AppConfig, NetworkConfig, ProviderKind};
use crate::error::{AicommitError, Result};
use crate::llm::LLMProvider;

/// 在测试中安装 rustls crypto provider
///
/// reqwest 0.13 + rustls-no-provider 需要手动安装 crypto provider，
/// 生产代码在 main.rs 中完成，测试需要单独调用。
/// 多次调用是安全的（install_default 失败时忽略即可）。
#[cfg(test)]
pub(crate) fn ensure_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

/// 全局 HTTP 客户端（共享连接池）
static HTTP_CLIENT: OnceLock<Client> = OnceLock::new();

/// 全局 HTTP 客户端初始化错误信息
///
/// 如果第一次创建失败，保存错误字符串以避免后续重复创建与潜在 panic。
static HTTP_CLIENT_ERROR: OnceLock<String> = OnceLock::new();

/// 获取或创建全局 HTTP 客户端
///
/// 使用 OnceLock 确保只创建一次。第一次调用时的 NetworkConfig 决定
/// 超时配置；请求与连接超时在这里强制设置。
pub(crate) fn create_http_client(network_config: &NetworkConfig) -> Result<Client> {
    if let Some(client) = HTTP_CLIENT.get() {
        return Ok(client.clone());
    }

    if let Some(err_msg) = HTTP_CLIENT_ERROR.get() {
        return Err(AicommitError::Llm(format!(
            "HTTP client initialization previously failed: {}",
            err_msg
        )));
    }

    let user_agent = format!(
        "{}/{} ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    );

    match Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(network_config.request_timeout))
        .connect_timeout(Duration::from_secs(network_config.connect_timeout))
        .build()
    {
        Ok(client) => {
            let _ = HTTP_CLIENT.set(client.clone());
            Ok(client)
        }
        Err(e) => {
            let err_msg = e.to_string();
            let _ = HTTP_CLIENT_ERROR.set(err_msg.clone());
            Err(AicommitError::Llm(format!(
                "Failed to create HTTP client: {}",
                err_msg
            )))
        }
    }
}

/// 根据 provider 枚举创建具体实现
///
/// `Rules` 不经过这里：heuristics 在 composer 内直接求值，不涉及网络。
pub fn create_provider(kind: ProviderKind, config: &AppConfig) -> Result<Box<dyn LLMProvider>> {
    match kind {
        ProviderKind::Rules => Err(AicommitError::Config(
            "rules mode does not use an LLM provider".to_string(),
        )),
        ProviderKind::Ollama => Ok(Box::new(ollama::OllamaProvider::new(
            &config.llm.ollama,
            &config.network,
        )?)),
        ProviderKind::Openai => Ok(Box::new(openai::OpenAIProvider::new(
            &config.llm.openai,
            &config.network,
        )?)),
        ProviderKind::Openrouter => Ok(Box::new(openrouter::OpenRouterProvider::new(
            &config.llm.openrouter,
            &config.network,
        )?)),
    }
}

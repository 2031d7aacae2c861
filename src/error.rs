use thiserror::Error;

pub type Result<T> = std::result::Result<T, AicommitError>;

#[derive(Error, Debug)]
pub enum AicommitError {
    #[error("git diff failed with exit code {code}: {output}")]
    GitCommand { code: i32, output: String },

    #[error("git diff timed out after {0}s")]
    GitTimeout(u64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("LLM provider error: {0}")]
    Llm(String),

    #[error("LLM API error ({status}): {message}")]
    LlmApi { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Configuration parsing error: {0}")]
    ConfigParse(#[from] config::ConfigError),
}

impl AicommitError {
    /// 获取错误的简短原因标签
    ///
    /// 用于嵌入 fallback commit message（"chore: openai error '<reason>' ..."），
    /// 保证同类失败产生确定性的消息文本。
    pub fn reason(&self) -> &'static str {
        match self {
            AicommitError::GitCommand { .. } => "git",
            AicommitError::GitTimeout(_) => "timeout",
            AicommitError::Config(_) => "config",
            AicommitError::Llm(_) => "invalid response",
            AicommitError::LlmApi { .. } => "api error",
            AicommitError::Network(e) if e.is_timeout() => "timeout",
            AicommitError::Network(e) if e.is_connect() => "connection failed",
            AicommitError::Network(_) => "network",
            AicommitError::Io(_) => "io",
            AicommitError::Serde(_) => "parse",
            AicommitError::ConfigParse(_) => "config",
        }
    }
}

use serde::{Deserialize, Serialize};

/// 应用配置
///
/// aicommit-rs 的顶层配置结构，从 `~/.config/aicommit/config.toml`、
/// 仓库级 `.aicommit.toml` 以及 `AICOMMIT__*` 环境变量加载。
///
/// # 配置示例
/// ```toml
/// [llm]
/// provider = "openai"
///
/// [llm.openai]
/// api_key = "sk-..."
/// model = "gpt-4o-mini"
///
/// [network]
/// request_timeout = 60
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// LLM 配置
    #[serde(default)]
    pub llm: LLMConfig,

    /// 网络配置
    #[serde(default)]
    pub network: NetworkConfig,

    /// UI 配置
    #[serde(default)]
    pub ui: UIConfig,
}

/// Provider 选择器
///
/// 封闭枚举：heuristic 规则或三种模型后端之一。`Rules` 同时充当
/// "仅启发式 / 模型生成" 的模式开关。
///
/// # Variants
/// - `Rules` - 关键字规则，无网络访问（默认）
/// - `Ollama` - 本地 Ollama `/api/generate` 自由文本补全
/// - `Openai` - OpenAI chat completions
/// - `Openrouter` - OpenRouter chat completions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// 关键字启发式规则（无网络访问）
    #[default]
    Rules,
    /// 本地 Ollama 补全
    Ollama,
    /// OpenAI chat API
    Openai,
    /// OpenRouter chat API
    Openrouter,
}

impl ProviderKind {
    /// 配置/日志/fallback 消息中使用的小写标签
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Rules => "rules",
            ProviderKind::Ollama => "ollama",
            ProviderKind::Openai => "openai",
            ProviderKind::Openrouter => "openrouter",
        }
    }

    /// 该 provider 约定俗成的 API key 环境变量（本地 provider 无）
    pub fn api_key_env(&self) -> Option<&'static str> {
        match self {
            ProviderKind::Openai => Some("OPENAI_API_KEY"),
            ProviderKind::Openrouter => Some("OPENROUTER_API_KEY"),
            ProviderKind::Rules | ProviderKind::Ollama => None,
        }
    }
}

/// LLM 配置
///
/// # 字段
/// - `provider`: 使用哪个 provider（默认 `rules`）
/// - `ollama` / `openai` / `openrouter`: 各 provider 的详细配置
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LLMConfig {
    /// 使用的 provider
    #[serde(default)]
    pub provider: ProviderKind,

    /// Ollama 配置
    #[serde(default)]
    pub ollama: ProviderConfig,

    /// OpenAI 配置
    #[serde(default)]
    pub openai: ProviderConfig,

    /// OpenRouter 配置
    #[serde(default)]
    pub openrouter: ProviderConfig,
}

/// 单个 provider 的配置
///
/// 所有字段均可省略，缺省值在 provider 构造时按后端补齐
/// （base URL、模型名等见 [`crate::llm::provider::utils`]）。
///
/// # 示例
/// ```toml
/// [llm.openai]
/// api_key = "sk-..."
/// model = "gpt-4o-mini"
/// endpoint = "https://api.openai.com"  # 可选
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ProviderConfig {
    /// API endpoint（可以是 base URL，自动补全路径后缀）
    pub endpoint: Option<String>,

    /// API key（本地 provider 不需要）
    pub api_key: Option<String>,

    /// 模型名称
    pub model: Option<String>,

    /// 最大生成 token 数
    pub max_tokens: Option<u32>,

    /// 温度参数（0.0-1.0）
    pub temperature: Option<f32>,
}

/// 网络配置
///
/// 控制唯一一次出站 HTTP 请求的超时边界。即便底层传输没有默认超时，
/// 这两个边界也会被强制设置到共享 HTTP client 上。
///
/// # 字段
/// - `request_timeout`: HTTP 请求超时时间（秒，默认 60）
/// - `connect_timeout`: HTTP 连接超时时间（秒，默认 10）
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NetworkConfig {
    /// HTTP 请求超时时间（秒）
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// HTTP 连接超时时间（秒）
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
}

/// UI 配置
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UIConfig {
    /// 是否启用彩色输出
    #[serde(default = "default_true")]
    pub colored: bool,
}

fn default_true() -> bool {
    true
}

fn default_request_timeout() -> u64 {
    60
}

fn default_connect_timeout() -> u64 {
    10
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            request_timeout: default_request_timeout(),
            connect_timeout: default_connect_timeout(),
        }
    }
}

impl Default for UIConfig {
    fn default() -> Self {
        Self { colored: true }
    }
}

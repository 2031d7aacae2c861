//! # aicommit-rs
//!
//! AI 辅助的 git commit-msg hook：在编辑器打开之前，根据 staged diff 生成
//! 一条建议的 commit message 写入消息文件。
//!
//! ## 功能
//! - **Heuristic 模式**：零网络依赖的关键字规则，附带变更统计
//! - **模型模式**：Ollama（本地）/ OpenAI / OpenRouter 单次补全调用
//! - **永不阻塞 commit**：任何失败都降级为可用消息或静默跳过，进程始终以 0 退出
//! - **消息文件不丢字节**：已有内容原样保留在生成行下方
//!
//! ## 快速开始
//!
//! ```bash
//! # 安装
//! cargo install aicommit-rs
//!
//! # 在仓库内安装 commit-msg hook
//! aicommit-rs install
//!
//! # 正常提交，消息会被自动起草
//! git add .
//! git commit
//! ```
//!
//! ## 配置
//! 配置文件位置：
//! - Linux: `~/.config/aicommit/config.toml`
//! - macOS: `~/Library/Application Support/aicommit/config.toml`
//! - Windows: `%APPDATA%\aicommit\config\config.toml`
//! - 仓库级（可选）: `<repo>/.aicommit.toml`
//!
//! 示例配置：
//! ```toml
//! [llm]
//! provider = "openai"   # rules | ollama | openai | openrouter
//!
//! [llm.openai]
//! api_key = "sk-..."
//! model = "gpt-4o-mini"
//!
//! [network]
//! request_timeout = 60
//! ```
//!
//! 环境变量（`AICOMMIT__` 前缀，双下划线表示嵌套）优先于配置文件：
//! `AICOMMIT__LLM__PROVIDER=ollama`、`AICOMMIT__LLM__OPENAI__API_KEY=sk-...`。
//!
//! ## 核心模块
//! - [`git`] - staged diff 读取与消息文件读写
//! - [`llm`] - provider 接口、heuristics 与消息合成
//! - [`commands`] - hook 驱动与安装/卸载
//! - [`config`] - 配置管理
//! - [`error`] - 统一错误类型

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod git;
pub mod llm;
pub mod ui;

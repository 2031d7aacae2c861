//! 全局常量定义

/// Git 相关常量
pub mod git {
    /// `git diff` 子进程最长等待时间（秒），超时强制终止
    pub const DIFF_TIMEOUT_SECS: u64 = 10;
}

/// LLM 相关常量
pub mod llm {
    /// 默认 max_tokens（一行 commit message 足够）
    pub const DEFAULT_MAX_TOKENS: u32 = 60;

    /// 默认 temperature
    pub const DEFAULT_TEMPERATURE: f32 = 0.2;
}

/// Commit message 相关常量
pub mod message {
    /// 生成消息的最大长度（字符数）
    pub const MAX_LENGTH: usize = 80;

    /// 暂存区为空时返回的固定消息
    pub const EMPTY_DIFF_MESSAGE: &str = "chore: empty staged diff (no changes?)";

    /// sanitize 之后为空时的兜底消息
    pub const GENERIC_FALLBACK_MESSAGE: &str = "chore: apply staged updates";
}

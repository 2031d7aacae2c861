//! LLM abstractions, heuristics, and message composition.
//!
//! This module defines the provider interface used by the hook and the
//! composition pipeline that turns a staged diff into a commit message.

/// Message composition pipeline (never fails).
pub mod composer;
/// Prompt-building utilities.
pub mod prompt;
/// Built-in provider implementations and factory helpers.
pub mod provider;
/// Keyword heuristics requiring no network access.
pub mod rules;
/// Single sanitize step applied to every composed message.
pub mod sanitize;

use async_trait::async_trait;

use crate::error::Result;

/// Status reporting interface for hook output.
///
/// The driver and composer report user-visible progress through this trait
/// instead of printing directly, keeping both testable without process I/O.
/// The console implementation lives in [`crate::ui::ConsoleSink`].
pub trait StatusSink: Send + Sync {
    /// Normal status line (shown to the committer on the success path).
    fn info(&self, line: &str);

    /// Warning line (soft failures, provider fallbacks).
    fn warn(&self, line: &str);
}

/// Unified interface implemented by all LLM providers.
///
/// The single required method sends the diff to the backend and returns the
/// raw completion text. Sanitization and failure absorption are the
/// composer's job, not the providers' — a provider is free to fail, the
/// composed message is not.
///
/// # Built-In Implementations
/// - [`OllamaProvider`](provider::ollama::OllamaProvider) - Ollama local model
/// - [`OpenAIProvider`](provider::openai::OpenAIProvider) - OpenAI chat API
/// - [`OpenRouterProvider`](provider::openrouter::OpenRouterProvider) - OpenRouter chat API
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Sends the diff to the backend and returns the raw completion text.
    async fn generate_commit_message(&self, diff: &str) -> Result<String>;

    /// Provider name (used for logs and fallback messages).
    fn name(&self) -> &str;
}

/// Result of composing a commit message.
///
/// # Fields
/// - `message`: sanitized single-line commit message (non-empty, bounded)
/// - `provider`: label of the provider mode that produced it
#[derive(Debug, Clone)]
pub struct Composition {
    /// Sanitized single-line commit message.
    pub message: String,
    /// Label of the provider mode that produced it.
    pub provider: &'static str,
}

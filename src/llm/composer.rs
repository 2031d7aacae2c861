//! Message composition pipeline.
//!
//! `compose` 是 hook 的核心决策点：无论 provider 配置和网络状况如何，它都
//! 返回一条可用的 commit message，绝不向驱动层抛错。消息质量可以降级，
//! 可用性不行。

use crate::config::{AppConfig, ProviderKind};
use crate::constants::message::EMPTY_DIFF_MESSAGE;
use crate::error::AicommitError;
use crate::llm::provider::create_provider;
use crate::llm::sanitize::sanitize_message;
use crate::llm::{Composition, StatusSink, rules};

/// Compose a commit message for the staged diff. Never fails.
///
/// Pipeline:
/// 1. Blank diff → fixed sentinel message, regardless of provider.
/// 2. Dispatch on the provider enum: rules evaluate inline, model backends
///    issue a single bounded HTTP call.
/// 3. Any provider error becomes a deterministic fallback message naming
///    the provider and the failure reason.
/// 4. One sanitize step bounds whatever came out of 2/3.
pub async fn compose(
    diff: &str,
    config: &AppConfig,
    sink: Option<&dyn StatusSink>,
) -> Composition {
    let kind = config.llm.provider;

    if diff.trim().is_empty() {
        return Composition {
            message: EMPTY_DIFF_MESSAGE.to_string(),
            provider: kind.as_str(),
        };
    }

    let raw = match kind {
        ProviderKind::Rules => rules::generate(diff),
        ProviderKind::Ollama | ProviderKind::Openai | ProviderKind::Openrouter => {
            match generate_with_provider(kind, diff, config).await {
                Ok(text) => text,
                Err(e) => {
                    tracing::debug!("{} provider failed: {}", kind.as_str(), e);
                    if let Some(sink) = sink {
                        sink.warn(&format!(
                            "{} provider failed ({}), using fallback message",
                            kind.as_str(),
                            e.reason()
                        ));
                    }
                    fallback_for_error(kind, &e)
                }
            }
        }
    };

    Composition {
        message: sanitize_message(&raw),
        provider: kind.as_str(),
    }
}

async fn generate_with_provider(
    kind: ProviderKind,
    diff: &str,
    config: &AppConfig,
) -> crate::error::Result<String> {
    let provider = create_provider(kind, config)?;
    provider.generate_commit_message(diff).await
}

/// Deterministic fallback message for a provider failure.
///
/// The value is itself a valid commit message; the error never propagates
/// past the composer.
fn fallback_for_error(kind: ProviderKind, error: &AicommitError) -> String {
    match error {
        AicommitError::Config(_) => match kind.api_key_env() {
            Some(env_var) => format!("chore: configure {} to enable AI generation", env_var),
            None => format!(
                "chore: configure the {} provider to enable AI generation",
                kind.as_str()
            ),
        },
        AicommitError::LlmApi { status, .. } => format!(
            "chore: {} API error (status {}), used fallback message",
            kind.as_str(),
            status
        ),
        e => format!(
            "chore: {} error '{}', used fallback message",
            kind.as_str(),
            e.reason()
        ),
    }
}

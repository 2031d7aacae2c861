//! Provider utility functions
//!
//! Endpoint completion helpers plus the default base URLs and model names
//! used when the configuration leaves them out.

/// Chat completions endpoint suffix (OpenAI-compatible APIs)
pub const CHAT_API_SUFFIX: &str = "/v1/chat/completions";

/// Ollama generate endpoint suffix
pub const OLLAMA_API_SUFFIX: &str = "/api/generate";

/// OpenAI default base URL
pub const DEFAULT_OPENAI_BASE: &str = "https://api.openai.com";

/// OpenRouter default base URL
pub const DEFAULT_OPENROUTER_BASE: &str = "https://openrouter.ai/api/v1";

/// Ollama default base URL
pub const DEFAULT_OLLAMA_BASE: &str = "http://localhost:11434";

/// OpenAI default model
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// OpenRouter default model
pub const DEFAULT_OPENROUTER_MODEL: &str = "openrouter/auto";

/// Ollama default model
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3.2";

/// Smart completion of an API endpoint
///
/// # Behavior
/// 1. Strip trailing slashes from the base URL
/// 2. If the URL already ends with the expected suffix, return it as-is
/// 3. If the URL ends with a prefix of the suffix (e.g. base `.../api/v1`
///    against suffix `/v1/chat/completions`), append only the missing part
/// 4. A URL whose path is already two or more segments deep is treated as a
///    fully custom endpoint and returned untouched
/// 5. Otherwise append the whole suffix
///
/// # Example
/// ```
/// use aicommit_rs::llm::provider::utils::complete_endpoint;
///
/// assert_eq!(
///     complete_endpoint("https://api.openai.com", "/v1/chat/completions"),
///     "https://api.openai.com/v1/chat/completions"
/// );
///
/// assert_eq!(
///     complete_endpoint("https://openrouter.ai/api/v1", "/v1/chat/completions"),
///     "https://openrouter.ai/api/v1/chat/completions"
/// );
/// ```
pub fn complete_endpoint(base_url: &str, expected_suffix: &str) -> String {
    let url = base_url.trim_end_matches('/');
    let suffix = expected_suffix.trim_start_matches('/');

    if url.ends_with(suffix) {
        return url.to_string();
    }

    // 检查 URL 是否已经以 suffix 的某个前缀结尾，只补全缺失的部分
    let suffix_parts: Vec<&str> = suffix.split('/').collect();
    for i in 0..suffix_parts.len() {
        let partial_suffix = suffix_parts[..=i].join("/");
        if url.ends_with(&partial_suffix) {
            let remaining_suffix = suffix_parts[i + 1..].join("/");
            if remaining_suffix.is_empty() {
                return url.to_string();
            }
            return format!("{}/{}", url, remaining_suffix);
        }
    }

    if is_complete_api_path(url) {
        return url.to_string();
    }

    format!("{}/{}", url, suffix)
}

/// Check whether the URL already carries a full API path
///
/// Heuristic: a path depth of two or more segments (like `/v1/chat` or
/// `/api/generate`) counts as a user-supplied complete endpoint.
fn is_complete_api_path(url: &str) -> bool {
    let path = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .and_then(|rest| rest.split_once('/'))
        .map(|(_, path)| path)
        .unwrap_or("");

    if path.is_empty() {
        return false;
    }

    let segment_count = path.split('/').filter(|s| !s.is_empty()).count();
    segment_count >= 2
}

/// Mask an API key for debug logging
///
/// # Rule
/// - length > 8: first 4 characters + `...` + last 4 characters
/// - length <= 8: `****`
///
/// # Example
/// ```
/// use aicommit_rs::llm::provider::utils::mask_api_key;
///
/// assert_eq!(mask_api_key("sk-or-v1-0123456789abcdef"), "sk-o...cdef");
/// assert_eq!(mask_api_key("short"), "****");
/// ```
pub fn mask_api_key(key: &str) -> String {
    if key.len() > 8 {
        format!("{}...{}", &key[..4], &key[key.len() - 4..])
    } else {
        "****".to_string()
    }
}

//! Prompt construction for commit message generation.

/// System role content for the chat-style providers.
pub const COMMIT_SYSTEM_PROMPT: &str = "You write concise conventional commit messages.";

/// Build the instruction prompt sent together with the diff.
///
/// Chat providers send this as the user message under
/// [`COMMIT_SYSTEM_PROMPT`]; the local completion provider sends it as the
/// whole prompt.
pub fn build_commit_prompt(diff: &str) -> String {
    format!(
        "You are an assistant that writes concise, conventional commit messages.\n\
         - Use present tense\n\
         - Keep it to one line (<72 chars)\n\
         - Include a scope when obvious\n\
         Generate only the message without extra commentary.\n\n\
         Diff:\n{}",
        diff
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_diff() {
        let diff = "diff --git a/src/lib.rs b/src/lib.rs\n+pub fn hello() {}";
        let prompt = build_commit_prompt(diff);
        assert!(prompt.contains("diff --git a/src/lib.rs"));
        assert!(prompt.contains("+pub fn hello() {}"));
    }

    #[test]
    fn test_prompt_constrains_output() {
        let prompt = build_commit_prompt("+x");
        assert!(prompt.contains("present tense"));
        assert!(prompt.contains("one line"));
        assert!(prompt.contains("without extra commentary"));
    }

    #[test]
    fn test_prompt_diff_comes_last() {
        let prompt = build_commit_prompt("+tail-marker");
        assert!(prompt.ends_with("+tail-marker"));
    }
}

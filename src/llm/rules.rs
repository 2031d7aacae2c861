//! Keyword heuristics requiring no network access.
//!
//! 按固定优先级匹配 diff 文本中的关键字，并把变更统计插入消息模板。
//! 纯函数：同一份 diff 永远得到同一条消息。

use crate::git::DiffStats;
use crate::git::diff::parse_diff_stats;

/// Generate a commit message from keyword heuristics.
///
/// Priority order is fixed: `user` > `fix`/`bug` > `doc`/`readme` > `test`,
/// with a generic chore message as the final branch. Matching is done on the
/// lowercased diff text, headers included.
///
/// The caller handles the empty-diff case; this function assumes a
/// non-blank diff.
pub fn generate(diff: &str) -> String {
    let stats = parse_diff_stats(diff);
    let lower = diff.to_lowercase();

    if lower.contains("user") {
        feature_message(&stats)
    } else if lower.contains("fix") || lower.contains("bug") {
        format!(
            "fix: address bug in recent changes ({}+/{}-)",
            stats.insertions, stats.deletions
        )
    } else if lower.contains("doc") || lower.contains("readme") {
        format!(
            "docs: update documentation ({}+/{}-)",
            stats.insertions, stats.deletions
        )
    } else if lower.contains("test") {
        format!(
            "test: update tests ({}+/{}-)",
            stats.insertions, stats.deletions
        )
    } else {
        format!(
            "chore: update code ({}+/{}- across {} file(s))",
            stats.insertions, stats.deletions, stats.files_changed
        )
    }
}

fn feature_message(stats: &DiffStats) -> String {
    format!(
        "feat(user): update user-related code ({}+/{}- in {} file(s))",
        stats.insertions, stats.deletions, stats.files_changed
    )
}

pub mod diff;
pub mod message_file;

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Serialize;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::error::Result;

/// staged diff 的来源接口
///
/// 抽象 diff 的获取方式，hook 驱动只依赖这个 trait，测试时无需真实
/// git 仓库。主要实现：[`GitCli`](diff::GitCli)
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DiffSource: Send + Sync {
    /// 获取 staged changes 的 diff
    ///
    /// 等价于 `git diff --cached --unified=0 --no-color`，stderr 并入输出。
    ///
    /// # 返回
    /// - `Ok(diff)` - diff 内容（暂存区为空时是空字符串）
    /// - `Err(_)` - 子进程失败（[`GitCommand`]）或超时（[`GitTimeout`]）
    ///
    /// [`GitCommand`]: crate::error::AicommitError::GitCommand
    /// [`GitTimeout`]: crate::error::AicommitError::GitTimeout
    async fn staged_diff(&self) -> Result<String>;
}

/// Diff 统计信息
///
/// 按需从 diff 文本解析（见 [`diff::parse_diff_stats`]），不持久化。
///
/// # 字段
/// - `files_changed`: 变更文件数（`diff --git` 段头个数）
/// - `insertions`: 新增行数（`+` 开头，不含 `+++` 文件头）
/// - `deletions`: 删除行数（`-` 开头，不含 `---` 文件头）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    pub files_changed: usize,
    pub insertions: usize,
    pub deletions: usize,
}

/// 从当前工作目录向上查找 git 仓库根目录
///
/// 等价于 `git rev-parse --show-toplevel`。
/// 检查每一级目录是否存在 `.git`（目录或文件，兼容 submodule/worktree）。
pub fn find_git_root() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        if dir.join(".git").exists() {
            return Some(dir);
        }
        if !dir.pop() {
            return None;
        }
    }
}

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::constants::git::DIFF_TIMEOUT_SECS;
use crate::error::{AicommitError, Result};
use crate::git::{DiffSource, DiffStats};

/// 通过 git CLI 读取 staged diff
///
/// 子进程等待有上限（默认 10 秒），超时后强制终止，保证 hook 不会挂住
/// commit 流程。
pub struct GitCli {
    program: PathBuf,
    timeout_secs: u64,
}

impl GitCli {
    /// 定位 PATH 中的 git 可执行文件并使用默认超时
    pub fn new() -> Result<Self> {
        let program = which::which("git")
            .map_err(|e| AicommitError::Config(format!("git not found on PATH: {}", e)))?;
        Ok(Self {
            program,
            timeout_secs: DIFF_TIMEOUT_SECS,
        })
    }

    /// 使用自定义可执行文件与超时（测试用）
    #[cfg(any(test, feature = "test-utils"))]
    pub fn with_program(program: impl Into<PathBuf>, timeout_secs: u64) -> Self {
        Self {
            program: program.into(),
            timeout_secs,
        }
    }
}

#[async_trait]
impl DiffSource for GitCli {
    async fn staged_diff(&self) -> Result<String> {
        let child = Command::new(&self.program)
            .args(["diff", "--cached", "--unified=0", "--no-color"])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // 超时丢弃 future 时由 kill_on_drop 终止子进程
            .kill_on_drop(true)
            .spawn()?;

        let output = match tokio::time::timeout(
            Duration::from_secs(self.timeout_secs),
            child.wait_with_output(),
        )
        .await
        {
            Ok(result) => result?,
            Err(_) => return Err(AicommitError::GitTimeout(self.timeout_secs)),
        };

        // stderr 追加到 stdout 之后（进程级的交错合并在这里做不到）
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            tracing::debug!("git diff exited with code {}: {}", code, text.trim());
            return Err(AicommitError::GitCommand {
                code,
                output: text.trim().to_string(),
            });
        }

        Ok(text)
    }
}

/// 从 diff 文本中提取统计信息
///
/// 纯文本解析，与 diff 的来源无关。
pub fn parse_diff_stats(diff: &str) -> DiffStats {
    let mut files_changed = 0;
    let mut insertions = 0;
    let mut deletions = 0;

    for line in diff.lines() {
        if line.starts_with("diff --git") {
            files_changed += 1;
        } else if line.starts_with('+') && !line.starts_with("+++") {
            insertions += 1;
        } else if line.starts_with('-') && !line.starts_with("---") {
            deletions += 1;
        }
    }

    DiffStats {
        files_changed,
        insertions,
        deletions,
    }
}

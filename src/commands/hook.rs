use std::fs;
use std::path::Path;

use crate::config::AppConfig;
use crate::error::{AicommitError, Result};
use crate::git::{DiffSource, find_git_root, message_file};
use crate::llm::{StatusSink, composer};

/// Hook marker used to identify hooks installed by aicommit-rs
const HOOK_MARKER: &str = "aicommit-rs run";

/// Shell script content for the commit-msg hook
const HOOK_SCRIPT: &str = r#"#!/bin/sh
# aicommit-rs commit-msg hook
# Installed by: aicommit-rs install
# To remove: aicommit-rs uninstall
if ! command -v aicommit-rs >/dev/null 2>&1; then
    exit 0
fi
aicommit-rs run "$1"
"#;

/// Install the commit-msg hook into the current git repository.
///
/// If the hook already exists and was installed by aicommit-rs, prints an
/// info message. If the hook exists but was NOT installed by aicommit-rs,
/// requires `--force` to overwrite.
pub fn install(force: bool) -> Result<()> {
    // hook 脚本依赖 PATH 上的 git 与 aicommit-rs，git 缺失时安装没有意义
    which::which("git")
        .map_err(|e| AicommitError::Config(format!("git not found on PATH: {}", e)))?;

    let git_root = find_git_root()
        .ok_or_else(|| AicommitError::Config("Not in a git repository".to_string()))?;

    install_at(&git_root, force)
}

/// Install the commit-msg hook into the given repository root.
pub fn install_at(git_root: &Path, force: bool) -> Result<()> {
    let hooks_dir = git_root.join(".git").join("hooks");
    fs::create_dir_all(&hooks_dir)?;

    let hook_path = hooks_dir.join("commit-msg");

    if hook_path.exists() {
        let content = fs::read_to_string(&hook_path)?;

        if content.contains(HOOK_MARKER) {
            eprintln!(
                "aicommit-rs: hook already installed at {}",
                hook_path.display()
            );
            return Ok(());
        }

        if !force {
            eprintln!(
                "aicommit-rs: {} contains a hook not installed by aicommit-rs, use --force to overwrite",
                hook_path.display()
            );
            return Ok(());
        }

        eprintln!(
            "aicommit-rs: overwriting existing hook at {}",
            hook_path.display()
        );
    }

    fs::write(&hook_path, HOOK_SCRIPT)?;

    // Set executable permission on Unix
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = fs::Permissions::from_mode(0o755);
        fs::set_permissions(&hook_path, perms)?;
    }

    eprintln!(
        "aicommit-rs: installed commit-msg hook at {}",
        hook_path.display()
    );

    Ok(())
}

/// Uninstall the commit-msg hook from the current git repository.
///
/// Only removes the hook if it was installed by aicommit-rs (contains the
/// marker). A foreign hook is left untouched with a warning.
pub fn uninstall() -> Result<()> {
    let git_root = find_git_root()
        .ok_or_else(|| AicommitError::Config("Not in a git repository".to_string()))?;

    uninstall_at(&git_root)
}

/// Uninstall the commit-msg hook from the given repository root.
pub fn uninstall_at(git_root: &Path) -> Result<()> {
    let hook_path = git_root.join(".git").join("hooks").join("commit-msg");

    if !hook_path.exists() {
        eprintln!("aicommit-rs: no commit-msg hook found");
        return Ok(());
    }

    let content = fs::read_to_string(&hook_path)?;
    if !content.contains(HOOK_MARKER) {
        eprintln!("aicommit-rs: commit-msg hook was not installed by aicommit-rs, leaving it alone");
        return Ok(());
    }

    fs::remove_file(&hook_path)?;

    eprintln!(
        "aicommit-rs: uninstalled commit-msg hook at {}",
        hook_path.display()
    );

    Ok(())
}

/// Safe wrapper for `run_hook_inner` that absorbs all errors.
///
/// This is called when the commit-msg hook invokes `aicommit-rs run`.
/// Errors are reported through the sink but never propagate, so the
/// surrounding git commit is never blocked (exit code 0).
pub async fn run_hook_safe(
    commit_msg_file: &str,
    config: &AppConfig,
    diff_source: &dyn DiffSource,
    sink: &dyn StatusSink,
) {
    if let Err(e) = run_hook_inner(commit_msg_file, config, diff_source, sink).await {
        sink.warn(&e.to_string());
    }
}

/// Internal hook logic: read the commit message file, compose a message for
/// the staged diff, and rewrite the file with the message prepended.
async fn run_hook_inner(
    commit_msg_file: &str,
    config: &AppConfig,
    diff_source: &dyn DiffSource,
    sink: &dyn StatusSink,
) -> Result<()> {
    let path = Path::new(commit_msg_file);

    // 用户已经写了消息：什么都不做，文件保持原样
    if message_file::has_existing_message(path)? {
        sink.info("existing message detected; skipping generation");
        return Ok(());
    }

    // diff 读取失败是软失败：记录、不写文件、不阻塞 commit
    let diff = match diff_source.staged_diff().await {
        Ok(diff) => diff,
        Err(e) => {
            sink.warn(&format!("diff read failed: {}", e));
            return Ok(());
        }
    };

    let composition = composer::compose(&diff, config, Some(sink)).await;

    message_file::write_with_message(path, &composition.message)?;

    sink.info(&format!(
        "wrote commit message (provider: {})",
        composition.provider
    ));

    Ok(())
}

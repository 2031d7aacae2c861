//! Commit message 文件的读写
//!
//! git 触发 commit-msg hook 时传入消息文件路径。这里负责两件事：判断用户
//! 是否已经写了消息，以及把生成的消息插入文件头部。原始内容只会被下移，
//! 一个字节都不会被删除（git 模板注释要原样留给编辑器）。

use std::fs;
use std::path::Path;

use crate::error::Result;

/// 判断文件中是否已有用户提供的消息
///
/// 空行和 `#` 注释行（git 模板注释）不算消息内容。文件不存在视为无消息。
pub fn has_existing_message(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }

    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .any(|line| !line.is_empty() && !line.starts_with('#')))
}

/// 将生成的消息写入文件头部
///
/// 布局：消息行、空行、原始内容原样追加。文件不存在时只写消息行。
pub fn write_with_message(path: &Path, message: &str) -> Result<()> {
    let existing = if path.exists() {
        fs::read_to_string(path)?
    } else {
        String::new()
    };

    let rewritten = if existing.is_empty() {
        format!("{}\n", message)
    } else {
        format!("{}\n\n{}", message, existing)
    };

    fs::write(path, rewritten)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    // === has_existing_message ===

    #[test]
    fn test_missing_file_has_no_message() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("COMMIT_EDITMSG");
        assert!(!has_existing_message(&path).unwrap());
    }

    #[test]
    fn test_empty_file_has_no_message() {
        let dir = tempdir().unwrap();
        let path = write_file(&dir, "COMMIT_EDITMSG", "");
        assert!(!has_existing_message(&path).unwrap());
    }

    #[test]
    fn test_comments_and_blanks_are_not_a_message() {
        let dir = tempdir().unwrap();
        let path = write_file(
            &dir,
            "COMMIT_EDITMSG",
            "\n\n# Please enter the commit message for your changes.\n# Lines starting\n\n",
        );
        assert!(!has_existing_message(&path).unwrap());
    }

    #[test]
    fn test_real_line_is_a_message() {
        let dir = tempdir().unwrap();
        let path = write_file(
            &dir,
            "COMMIT_EDITMSG",
            "fix: handle empty index\n# comment below\n",
        );
        assert!(has_existing_message(&path).unwrap());
    }

    #[test]
    fn test_indented_line_counts_as_message() {
        let dir = tempdir().unwrap();
        let path = write_file(&dir, "COMMIT_EDITMSG", "   wip\n");
        assert!(has_existing_message(&path).unwrap());
    }

    // === write_with_message ===

    #[test]
    fn test_write_into_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("COMMIT_EDITMSG");
        write_with_message(&path, "chore: apply staged updates").unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "chore: apply staged updates\n"
        );
    }

    #[test]
    fn test_write_preserves_original_bytes() {
        let dir = tempdir().unwrap();
        let original = "# Please enter the commit message.\n#\n# On branch main\n";
        let path = write_file(&dir, "COMMIT_EDITMSG", original);

        write_with_message(&path, "docs: update documentation (1+/0-)").unwrap();

        let rewritten = fs::read_to_string(&path).unwrap();
        assert_eq!(
            rewritten,
            format!("docs: update documentation (1+/0-)\n\n{}", original)
        );
        // 原始内容必须原样出现在尾部
        assert!(rewritten.ends_with(original));
    }

    #[test]
    fn test_write_keeps_crlf_content_verbatim() {
        let dir = tempdir().unwrap();
        let original = "# template\r\n# comment\r\n";
        let path = write_file(&dir, "COMMIT_EDITMSG", original);

        write_with_message(&path, "test: update tests (2+/0-)").unwrap();

        let rewritten = fs::read_to_string(&path).unwrap();
        assert!(rewritten.ends_with(original));
    }
}

//! クリップリスト読み込みモジュール
//!
//! 1行1クリップの相対パスを並べたテキストファイルを読み込む。
//! 前後の空白のみ除去し、空行もそのまま残す。

use crate::error::Result;
use std::path::Path;

/// テキストファイルから読み込み
pub fn from_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(from_str(&content))
}

/// 文字列から読み込み（行順を保持）
pub fn from_str(content: &str) -> Vec<String> {
    content.lines().map(|line| line.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_trimmed() {
        let clips = from_str("  sub/clip1.mp4 \n\tclip2.mp4\r\n");
        assert_eq!(clips, vec!["sub/clip1.mp4", "clip2.mp4"]);
    }

    #[test]
    fn test_empty_lines_are_kept() {
        let clips = from_str("a.avi\n\n   \nb.avi");
        assert_eq!(clips, vec!["a.avi", "", "", "b.avi"]);
    }

    #[test]
    fn test_trailing_newline_adds_no_entry() {
        assert_eq!(from_str("a.avi\nb.avi\n").len(), 2);
        assert_eq!(from_str("a.avi\nb.avi").len(), 2);
    }

    #[test]
    fn test_empty_content() {
        assert!(from_str("").is_empty());
    }
}

use crate::error::{EngagementError, Result};
use std::path::{Component, Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// スキャンで見つかったクリップ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipInfo {
    pub path: PathBuf,
    /// `<user>/<stem>/` 以下の相対パス（クリップリストの1行）
    pub rel_path: String,
}

pub const VIDEO_EXTENSIONS: &[&str] = &["avi", "mp4", "mov", "mkv", "webm"];

/// `root/<user>/<stem>/...` 形式のデータセットからクリップを収集
pub fn scan_dataset(root: &Path, extensions: &[String]) -> Result<Vec<ClipInfo>> {
    if !root.is_dir() {
        return Err(EngagementError::FolderNotFound(root.display().to_string()));
    }

    let mut clips = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(3)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() || !has_extension(path, extensions) {
            continue;
        }

        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };

        // 先頭2階層（user, stem）を除いた残り
        let rest: Vec<String> = relative
            .components()
            .skip(2)
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().to_string()),
                _ => None,
            })
            .collect();

        clips.push(ClipInfo {
            path: path.to_path_buf(),
            rel_path: rest.join("/"),
        });
    }

    clips.sort_by(|a, b| a.path.cmp(&b.path));
    debug!(root = %root.display(), clips = clips.len(), "dataset scanned");

    Ok(clips)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            extensions.iter().any(|e| e.to_lowercase() == ext)
        })
        .unwrap_or(false)
}

/// 既定の動画拡張子
pub fn default_extensions() -> Vec<String> {
    VIDEO_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

/// クリップリスト形式（1行1件）に整形
pub fn to_clip_list(clips: &[ClipInfo]) -> String {
    let mut out = String::new();
    for clip in clips {
        out.push_str(&clip.rel_path);
        out.push('\n');
    }
    out
}

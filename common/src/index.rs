//! データセット索引モジュール
//!
//! クリップリストとラベルテーブルをファイル名で照合し、
//! `base_path/<user>/<stem>/<クリップ参照>` 形式のパスとラベルの組を作る。

use crate::error::Result;
use crate::labels::LabelTable;
use crate::types::{DatasetEntry, DatasetIndex, IndexOptions, StemMode};

/// パス末尾の要素（最後の "/" 以降）
///
/// "/" で終わる参照は空文字になる。
pub fn basename(rel_path: &str) -> &str {
    rel_path
        .rsplit_once('/')
        .map(|(_, name)| name)
        .unwrap_or(rel_path)
}

/// 拡張子を除いたファイル名
pub fn stem(file_name: &str, mode: StemMode) -> &str {
    let split = match mode {
        StemMode::FirstDot => file_name.split_once('.'),
        StemMode::LastDot => file_name.rsplit_once('.'),
    };
    split.map(|(stem, _)| stem).unwrap_or(file_name)
}

/// ステム先頭からユーザーIDを取り出す（文字数が足りなければ全体）
pub fn user_id(stem: &str, width: usize) -> &str {
    match stem.char_indices().nth(width) {
        Some((end, _)) => &stem[..end],
        None => stem,
    }
}

/// クリップ参照1件のパスを解決
pub fn resolve_path(rel_path: &str, options: &IndexOptions) -> std::path::PathBuf {
    let stem = stem(basename(rel_path), options.stem_mode);
    let user = user_id(stem, options.user_id_width);
    options.base_path.join(user).join(stem).join(rel_path)
}

/// クリップリストとラベルを照合
///
/// ラベルのない参照は `unmatched` に入り、エラーにはならない。
/// 照合できたラベルが整数に変換できない場合はエラー。
pub fn build_index(
    clips: &[String],
    labels: &LabelTable,
    options: &IndexOptions,
) -> Result<DatasetIndex> {
    let mut index = DatasetIndex::default();

    for rel_path in clips {
        match labels.get(basename(rel_path)) {
            Some(record) => index.entries.push(DatasetEntry {
                full_path: resolve_path(rel_path, options),
                label: record.engagement_class()?,
            }),
            None => index.unmatched.push(rel_path.clone()),
        }
    }

    Ok(index)
}

//! データセット索引の読み込み・照合
//!
//! ラベルCSVとクリップリストをファイルから読み込み、
//! (解決済みパス, ラベル) の列を作る。

use crate::error::{EngagementError, Result};
use engagement_index_common::{clips, index, DatasetEntry, DatasetIndex, IndexOptions, LabelTable};
use std::path::Path;
use tracing::{debug, info, warn};

/// ラベルCSVを読み込み
pub fn load_labels(label_file_path: &Path) -> Result<LabelTable> {
    if !label_file_path.exists() {
        return Err(EngagementError::FileNotFound(label_file_path.display().to_string()));
    }

    let table = LabelTable::from_csv(label_file_path)?;
    debug!(path = %label_file_path.display(), rows = table.len(), "labels loaded");
    Ok(table)
}

/// クリップリストを読み込み
pub fn load_clip_list(txt_file_path: &Path) -> Result<Vec<String>> {
    if !txt_file_path.exists() {
        return Err(EngagementError::FileNotFound(txt_file_path.display().to_string()));
    }

    let list = clips::from_file(txt_file_path)?;
    debug!(path = %txt_file_path.display(), clips = list.len(), "clip list loaded");
    Ok(list)
}

/// 照合して未照合リスト付きの索引を作る
pub fn build_index(
    clips_list: &[String],
    label_table: &LabelTable,
    options: &IndexOptions,
) -> Result<DatasetIndex> {
    let dataset = index::build_index(clips_list, label_table, options)?;

    if !dataset.is_complete() {
        warn!(
            unmatched = dataset.unmatched.len(),
            first = %dataset.unmatched[0],
            "clips without engagement label were skipped"
        );
    }
    info!(
        matched = dataset.matched_count(),
        total = clips_list.len(),
        base_path = %options.base_path.display(),
        "dataset index built"
    );

    Ok(dataset)
}

/// 照合済みの (パス, ラベル) 列を返す
pub fn get_dataset(
    clips_list: &[String],
    label_table: &LabelTable,
    base_path: &Path,
) -> Result<Vec<DatasetEntry>> {
    let options = IndexOptions::with_base_path(base_path);
    Ok(build_index(clips_list, label_table, &options)?.into_entries())
}

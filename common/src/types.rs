//! データセット索引の型定義
//!
//! - LabelRecord: ラベルCSVの1行（ClipID / Engagement）
//! - DatasetEntry: 解決済みパスとラベルの組
//! - DatasetIndex: 照合結果（照合成功 + 未照合リスト）
//! - IndexOptions: パス解決の設定

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 既定のベースパス
pub const DEFAULT_BASE_PATH: &str = "DataSet/Train";

/// 既定のユーザーID幅（クリップ名の先頭6文字）
pub const DEFAULT_USER_ID_WIDTH: usize = 6;

/// ラベルCSVの1行
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelRecord {
    /// 拡張子付きのクリップファイル名
    pub clip_id: String,
    /// Engagement列の生の値（照合時に整数へ変換）
    pub engagement: String,
}

impl LabelRecord {
    pub fn new(clip_id: impl Into<String>, engagement: impl Into<String>) -> Self {
        Self {
            clip_id: clip_id.into(),
            engagement: engagement.into(),
        }
    }

    /// エンゲージメント値を整数に変換
    ///
    /// 整数表記はそのまま、有限の小数表記は0方向へ切り捨てる（"2.0" → 2）。
    pub fn engagement_class(&self) -> Result<i64> {
        let value = self.engagement.trim();

        if let Ok(n) = value.parse::<i64>() {
            return Ok(n);
        }

        match value.parse::<f64>() {
            Ok(f) if f.is_finite() && f.trunc() >= i64::MIN as f64 && f.trunc() < i64::MAX as f64 => {
                Ok(f.trunc() as i64)
            }
            _ => Err(Error::InvalidLabel {
                clip_id: self.clip_id.clone(),
                value: self.engagement.clone(),
            }),
        }
    }
}

/// 出力単位: 解決済みパスとラベル
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetEntry {
    pub full_path: PathBuf,
    pub label: i64,
}

/// 照合結果
///
/// `entries` と `unmatched` はどちらも入力順を保持する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetIndex {
    pub entries: Vec<DatasetEntry>,
    /// ラベルが見つからなかったクリップ参照
    pub unmatched: Vec<String>,
}

impl DatasetIndex {
    /// 照合に成功した件数
    pub fn matched_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_complete(&self) -> bool {
        self.unmatched.is_empty()
    }

    /// (パス, ラベル) の列に変換
    pub fn into_entries(self) -> Vec<DatasetEntry> {
        self.entries
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// 拡張子の除去方法
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StemMode {
    /// 最初の "." 以降を除去（"user01.v2.mp4" → "user01"）
    #[default]
    FirstDot,
    /// 最後の "." 以降を除去（"user01.v2.mp4" → "user01.v2"）
    LastDot,
}

impl std::str::FromStr for StemMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first-dot" | "first" => Ok(StemMode::FirstDot),
            "last-dot" | "last" => Ok(StemMode::LastDot),
            _ => Err(format!("Unknown stem mode: {}. Use first-dot or last-dot", s)),
        }
    }
}

impl std::fmt::Display for StemMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StemMode::FirstDot => write!(f, "first-dot"),
            StemMode::LastDot => write!(f, "last-dot"),
        }
    }
}

/// パス解決の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOptions {
    /// 解決後パスのルート
    pub base_path: PathBuf,
    /// ステムの先頭から取り出すユーザーIDの文字数
    pub user_id_width: usize,
    pub stem_mode: StemMode,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from(DEFAULT_BASE_PATH),
            user_id_width: DEFAULT_USER_ID_WIDTH,
            stem_mode: StemMode::default(),
        }
    }
}

impl IndexOptions {
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            ..Default::default()
        }
    }
}

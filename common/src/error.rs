//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// ラベルCSVに必須列がない
    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("CSV parse error: {0}")]
    Parse(String),

    /// エンゲージメント値を整数に変換できない
    #[error("Invalid engagement label for {clip_id}: {value:?}")]
    InvalidLabel { clip_id: String, value: String },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

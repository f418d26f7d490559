//! Engagement Index Common Library
//!
//! ラベルCSVとクリップリストを照合してデータセット索引を作るための
//! 型と照合ロジック

pub mod types;
pub mod error;
pub mod labels;
pub mod clips;
pub mod index;

pub use types::{DatasetEntry, DatasetIndex, IndexOptions, LabelRecord, StemMode};
pub use error::{Error, Result};
pub use labels::LabelTable;
pub use index::{build_index, resolve_path};

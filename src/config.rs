use crate::error::{EngagementError, Result};
use engagement_index_common::types::{DEFAULT_BASE_PATH, DEFAULT_USER_ID_WIDTH};
use engagement_index_common::{IndexOptions, StemMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// ベースパスを上書きする環境変数
pub const BASE_PATH_ENV: &str = "ENGAGEMENT_INDEX_BASE_PATH";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_path: PathBuf,
    pub user_id_width: usize,
    pub stem_mode: StemMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from(DEFAULT_BASE_PATH),
            user_id_width: DEFAULT_USER_ID_WIDTH,
            stem_mode: StemMode::FirstDot,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込み（存在しなければ既定値）
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| EngagementError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("engagement-index").join("config.json"))
    }

    /// ベースパスを取得（環境変数を優先）
    pub fn base_path(&self) -> PathBuf {
        match std::env::var(BASE_PATH_ENV) {
            Ok(path) if !path.is_empty() => PathBuf::from(path),
            _ => self.base_path.clone(),
        }
    }

    pub fn index_options(&self) -> IndexOptions {
        self.index_options_with(None, None, None)
    }

    /// CLI引数で上書きした照合設定（引数 > 環境変数 > 設定ファイル）
    pub fn index_options_with(
        &self,
        base_path: Option<PathBuf>,
        user_id_width: Option<usize>,
        stem_mode: Option<StemMode>,
    ) -> IndexOptions {
        IndexOptions {
            base_path: base_path.unwrap_or_else(|| self.base_path()),
            user_id_width: user_id_width.unwrap_or(self.user_id_width),
            stem_mode: stem_mode.unwrap_or(self.stem_mode),
        }
    }
}

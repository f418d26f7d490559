//! ラベルCSV読み込みモジュール
//!
//! ヘッダー行に `ClipID` と `Engagement` 列を持つCSVから
//! クリップ名 → エンゲージメント値のテーブルを構築する。

use crate::error::{Error, Result};
use crate::types::LabelRecord;
use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;

/// クリップ名の列名
pub const CLIP_ID_COLUMN: &str = "ClipID";

/// エンゲージメントの列名
pub const ENGAGEMENT_COLUMN: &str = "Engagement";

/// ラベルテーブル
///
/// 行はファイル順に保持する。クリップ名が重複する場合は最初の行が優先。
#[derive(Debug, Clone, Default)]
pub struct LabelTable {
    records: Vec<LabelRecord>,
    /// clip_id → 最初に出現した行番号
    index: HashMap<String, usize>,
}

impl LabelTable {
    /// CSVファイルから読み込み
    pub fn from_csv(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_csv_str(&content)
    }

    /// CSV文字列から読み込み
    pub fn from_csv_str(content: &str) -> Result<Self> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut lines = content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        let header = match lines.next() {
            Some((_, line)) => parse_csv_line(line),
            None => return Err(Error::MissingColumn(CLIP_ID_COLUMN.to_string())),
        };

        let clip_col = column_position(&header, CLIP_ID_COLUMN)?;
        let engagement_col = column_position(&header, ENGAGEMENT_COLUMN)?;

        let mut table = Self::default();

        for (line_index, line) in lines {
            let fields = parse_csv_line(line);
            if fields.len() > header.len() {
                return Err(Error::Parse(format!(
                    "line {}: expected {} fields, saw {}",
                    line_index + 1,
                    header.len(),
                    fields.len()
                )));
            }

            // 足りないセルは空文字として扱う
            let field = |col: usize| fields.get(col).map(|f| &**f).unwrap_or_default();
            table.push(LabelRecord::new(field(clip_col), field(engagement_col)));
        }

        Ok(table)
    }

    /// 行を追加
    pub fn push(&mut self, record: LabelRecord) {
        // 空のクリップ名は照合対象にしない
        if !record.clip_id.is_empty() {
            self.index
                .entry(record.clip_id.clone())
                .or_insert(self.records.len());
        }
        self.records.push(record);
    }

    /// クリップ名で検索（完全一致、最初の行）
    pub fn get(&self, clip_id: &str) -> Option<&LabelRecord> {
        self.index.get(clip_id).map(|&i| &self.records[i])
    }

    pub fn records(&self) -> &[LabelRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<LabelRecord> for LabelTable {
    fn from_iter<I: IntoIterator<Item = LabelRecord>>(iter: I) -> Self {
        let mut table = Self::default();
        for record in iter {
            table.push(record);
        }
        table
    }
}

fn column_position(header: &[Cow<'_, str>], name: &str) -> Result<usize> {
    header
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| Error::MissingColumn(name.to_string()))
}

/// CSV行をパース（ダブルクォート対応）
fn parse_csv_line(line: &str) -> Vec<Cow<'_, str>> {
    let mut fields = Vec::new();
    let mut in_quotes = false;
    let mut field_start = 0;

    // "" はクォートを2回切り替えるだけなので区切り判定に影響しない
    for (i, c) in line.char_indices() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == ',' && !in_quotes {
            fields.push(unquote(&line[field_start..i]));
            field_start = i + 1;
        }
    }

    // 最後のフィールド
    fields.push(unquote(&line[field_start..]));

    fields
}

/// 前後の空白とクォートを除去し、クォート内の "" を " に戻す
fn unquote(s: &str) -> Cow<'_, str> {
    let s = s.trim();
    if s.starts_with('"') && s.ends_with('"') && s.len() >= 2 {
        let inner = &s[1..s.len() - 1];
        if inner.contains("\"\"") {
            Cow::Owned(inner.replace("\"\"", "\""))
        } else {
            Cow::Borrowed(inner)
        }
    } else {
        Cow::Borrowed(s)
    }
}

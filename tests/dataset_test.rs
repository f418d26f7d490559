//! データセット索引の統合テスト
//!
//! ファイルからの読み込み → 照合 → パス解決までを検証

use engagement_index::dataset::{build_index, get_dataset, load_clip_list, load_labels};
use engagement_index::scanner;
use engagement_index_common::{IndexOptions, StemMode};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

const LABELS_CSV: &str = "ClipID,Boredom,Engagement,Confusion,Frustration \n\
1100011002.avi,0,2,0,0\n\
1100011003.avi,0,2,0,0\n\
1100011004.avi,0,3,0,0\n\
1100021001.avi,1,1,0,0\n";

fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("フィクスチャ書き込み失敗");
    path
}

/// ラベルの行数と列
#[test]
fn test_load_labels_row_count() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_fixture(dir.path(), "AllLabels.csv", LABELS_CSV);

    let table = load_labels(&path).unwrap();
    assert_eq!(table.len(), 4);
    assert_eq!(table.records()[3].clip_id, "1100021001.avi");
    assert_eq!(table.records()[3].engagement, "1");
}

/// クリップリストの行数と空白除去
#[test]
fn test_load_clip_list_lines() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_fixture(dir.path(), "Train.txt", " 1100011002.avi\n\n1100011003.avi  \n");

    let clips = load_clip_list(&path).unwrap();
    assert_eq!(clips, vec!["1100011002.avi", "", "1100011003.avi"]);
}

/// ファイル → 照合までの一連の流れ
#[test]
fn test_end_to_end_build() {
    let dir = tempdir().expect("Failed to create temp dir");
    let labels_path = write_fixture(dir.path(), "AllLabels.csv", LABELS_CSV);
    let clips_path = write_fixture(
        dir.path(),
        "Train.txt",
        "1100011004.avi\n9999999999.avi\n1100011002.avi\n",
    );

    let table = load_labels(&labels_path).unwrap();
    let clips = load_clip_list(&clips_path).unwrap();
    let index = build_index(&clips, &table, &IndexOptions::default()).unwrap();

    assert_eq!(index.entries.len(), 2);
    assert_eq!(
        index.entries[0].full_path,
        PathBuf::from("DataSet/Train/110001/1100011004/1100011004.avi")
    );
    assert_eq!(index.entries[0].label, 3);
    assert_eq!(index.entries[1].label, 2);
    assert_eq!(index.unmatched, vec!["9999999999.avi"]);
}

/// 互換API: 照合できたものだけを返す
#[test]
fn test_get_dataset_scenarios() {
    let dir = tempdir().expect("Failed to create temp dir");
    let labels_path = write_fixture(dir.path(), "labels.csv", "ClipID,Engagement\nclip1.mp4,2\n");
    let table = load_labels(&labels_path).unwrap();

    let result = get_dataset(&["sub/clip1.mp4".to_string()], &table, Path::new("DataSet/Train"))
        .unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].full_path, PathBuf::from("DataSet/Train/clip1/clip1/sub/clip1.mp4"));
    assert_eq!(result[0].label, 2);

    let result = get_dataset(&["missing.mp4".to_string()], &table, Path::new("DataSet/Train"))
        .unwrap();
    assert!(result.is_empty());
}

/// 出力の各ラベルは同名クリップの最初の行と一致する
#[test]
fn test_labels_follow_basename() {
    let dir = tempdir().expect("Failed to create temp dir");
    let labels_path = write_fixture(
        dir.path(),
        "labels.csv",
        "ClipID,Engagement\na.avi,0\nb.avi,1\na.avi,3\nc.avi,2\n",
    );
    let table = load_labels(&labels_path).unwrap();
    let clips: Vec<String> = ["x/c.avi", "y/a.avi", "b.avi", "d.avi"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let index = build_index(&clips, &table, &IndexOptions::default()).unwrap();
    let labels: Vec<i64> = index.entries.iter().map(|e| e.label).collect();

    assert_eq!(labels, vec![2, 0, 1]);
    assert!(index.entries.len() <= clips.len());
}

/// ステムは最初の "." で切る（既定）
#[test]
fn test_stem_truncates_at_first_dot() {
    let dir = tempdir().expect("Failed to create temp dir");
    let labels_path = write_fixture(dir.path(), "labels.csv", "ClipID,Engagement\nuser01.v2.mp4,1\n");
    let table = load_labels(&labels_path).unwrap();
    let clips = vec!["user01.v2.mp4".to_string()];

    let index = build_index(&clips, &table, &IndexOptions::default()).unwrap();
    assert_eq!(
        index.entries[0].full_path,
        PathBuf::from("DataSet/Train/user01/user01/user01.v2.mp4")
    );

    let options = IndexOptions {
        stem_mode: StemMode::LastDot,
        ..Default::default()
    };
    let index = build_index(&clips, &table, &options).unwrap();
    assert_eq!(
        index.entries[0].full_path,
        PathBuf::from("DataSet/Train/user01/user01.v2/user01.v2.mp4")
    );
}

/// スキャン結果をそのまま照合すると元のファイルに解決される
#[test]
fn test_scan_then_build_resolves_files() {
    let dir = tempdir().expect("Failed to create temp dir");
    let root = dir.path().join("Train");

    for clip in ["1100011002", "1100011003", "1100021001"] {
        let clip_dir = root.join(&clip[..6]).join(clip);
        fs::create_dir_all(&clip_dir).unwrap();
        fs::write(clip_dir.join(format!("{}.avi", clip)), b"dummy").unwrap();
    }

    let scanned = scanner::scan_dataset(&root, &scanner::default_extensions()).unwrap();
    let list_path = write_fixture(dir.path(), "Train.txt", &scanner::to_clip_list(&scanned));
    let labels_path = write_fixture(dir.path(), "AllLabels.csv", LABELS_CSV);

    let clips = load_clip_list(&list_path).unwrap();
    let table = load_labels(&labels_path).unwrap();
    let index = build_index(&clips, &table, &IndexOptions::with_base_path(root.clone())).unwrap();

    assert_eq!(index.entries.len(), 3);
    assert!(index.is_complete());
    for entry in &index.entries {
        assert!(entry.full_path.is_file(), "解決できない: {}", entry.full_path.display());
    }
}

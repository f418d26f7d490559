use clap::{Parser, Subcommand};
use engagement_index_common::StemMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "engagement-index")]
#[command(about = "エンゲージメントラベルとクリップリストを照合してデータセット索引を生成", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ラベルCSVとクリップリストを照合してJSONを出力
    Build {
        /// ラベルCSV（ClipID, Engagement列）
        #[arg(short, long)]
        labels: PathBuf,

        /// クリップリスト（1行1クリップ）
        #[arg(short, long)]
        clips: PathBuf,

        /// 出力JSONファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 解決後パスのルート（省略時は設定値）
        #[arg(short, long)]
        base_path: Option<PathBuf>,

        /// ユーザーIDの文字数
        #[arg(long)]
        user_width: Option<usize>,

        /// 拡張子の除去方法 (first-dot/last-dot)
        #[arg(long)]
        stem_mode: Option<StemMode>,
    },

    /// データセットフォルダからクリップリストを生成
    Scan {
        /// データセットのルート（<user>/<stem>/<file>）
        #[arg(required = true)]
        root: PathBuf,

        /// 出力ファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 対象の拡張子（カンマ区切り）
        #[arg(long, value_delimiter = ',')]
        ext: Option<Vec<String>>,
    },

    /// 設定を表示/編集
    Config {
        /// ベースパスを設定
        #[arg(long)]
        set_base_path: Option<PathBuf>,

        /// ユーザーIDの文字数を設定
        #[arg(long)]
        set_user_width: Option<usize>,

        /// 拡張子の除去方法を設定
        #[arg(long)]
        set_stem_mode: Option<StemMode>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

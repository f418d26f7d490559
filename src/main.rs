use anyhow::{Context, Result};
use clap::Parser;
use engagement_index::{cli, config, dataset, scanner};
use cli::{Cli, Commands};
use config::Config;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;

    match cli.command {
        Commands::Build { labels, clips, output, base_path, user_width, stem_mode } => {
            let options = config.index_options_with(base_path, user_width, stem_mode);

            let label_table = dataset::load_labels(&labels)?;
            let clips_list = dataset::load_clip_list(&clips)?;
            let index = dataset::build_index(&clips_list, &label_table, &options)?;

            let json = index.to_json_pretty()?;
            write_output(output.as_deref(), &json)?;

            eprintln!(
                "✔ {}/{}件を照合（未照合 {}件）",
                index.matched_count(),
                clips_list.len(),
                index.unmatched.len()
            );
        }

        Commands::Scan { root, output, ext } => {
            let extensions = ext.unwrap_or_else(scanner::default_extensions);
            let clips = scanner::scan_dataset(&root, &extensions)?;
            write_output(output.as_deref(), &scanner::to_clip_list(&clips))?;

            eprintln!("✔ {}件のクリップを検出", clips.len());
        }

        Commands::Config { set_base_path, set_user_width, set_stem_mode, show } => {
            let mut config = config;
            let changed = set_base_path.is_some() || set_user_width.is_some() || set_stem_mode.is_some();

            if let Some(path) = set_base_path {
                config.base_path = path;
            }
            if let Some(width) = set_user_width {
                config.user_id_width = width;
            }
            if let Some(mode) = set_stem_mode {
                config.stem_mode = mode;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  ベースパス: {}", config.base_path().display());
                println!("  ユーザーID幅: {}", config.user_id_width);
                println!("  拡張子除去: {}", config.stem_mode);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// 出力先が指定されていればファイル、なければ標準出力
fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "output written");
        }
        None => print!("{}", content),
    }
    Ok(())
}

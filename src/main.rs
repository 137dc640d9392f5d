use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use photo_share::{cli, config, error, gallery, scanner, supabase};
use photo_share_common::{
    fetch_gallery_or_empty, object_name, ImageSource, UploadEvent, UploadPipeline,
};
use cli::{Cli, Commands};
use config::Config;
use error::{PhotoShareError, Result};
use std::time::Duration;
use supabase::SupabaseClient;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;
    let timeout = Duration::from_secs(config.timeout_seconds);

    match cli.command {
        Commands::Upload { paths, recursive } => {
            println!("📤 photo-share - アップロード\n");

            let backend = config.require_backend()?;
            let files = scanner::collect_files(&paths, recursive)?;
            if files.is_empty() {
                let targets: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
                return Err(PhotoShareError::NoImagesFound(targets.join(", ")));
            }

            let image_count = files.iter().filter(|f| f.is_image()).count();
            let client = SupabaseClient::new(backend, timeout);
            let pipeline = UploadPipeline::new(&client, cli_object_name);

            let progress = ProgressBar::new(image_count as u64);
            progress.set_style(
                ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("=> "),
            );

            let report = pipeline
                .run(files, |event| match event {
                    UploadEvent::Started { file_name, .. } => progress.set_message(file_name),
                    UploadEvent::Uploaded(uploaded) => {
                        progress.println(format!(
                            "✔ {} → {}",
                            uploaded.record.filename, uploaded.record.url
                        ));
                        progress.inc(1);
                    }
                    UploadEvent::Failed(failed) => {
                        progress.println(format!("✘ {}: {}", failed.file_name, failed.message));
                        progress.inc(1);
                    }
                })
                .await?;
            progress.finish_and_clear();

            println!(
                "\n成功: {}件 / 失敗: {}件 / 画像以外をスキップ: {}件",
                report.uploaded.len(),
                report.failed.len(),
                report.skipped
            );

            if report.uploaded.is_empty() {
                return Err(PhotoShareError::UploadFailed(report.failed.len()));
            }

            println!("\n✅ アップロード完了");
        }

        Commands::List { json, limit } => {
            let client = SupabaseClient::new(config.backend_config(), timeout);
            if !client.config().is_configured() {
                tracing::info!("Supabaseが未設定のため一覧を取得しません");
            }

            let mut records = fetch_gallery_or_empty(&client).await;
            if let Some(limit) = limit {
                records.truncate(limit.get());
            }

            if json {
                println!("{}", gallery::render_json(&records)?);
            } else {
                println!("{}", gallery::render_table(&records));
            }
        }

        Commands::Config { set_url, set_key, bucket, table, show } => {
            let mut config = config;
            let changed = set_url.is_some() || set_key.is_some() || bucket.is_some() || table.is_some();

            if let Some(url) = set_url {
                config.supabase_url = Some(url);
            }
            if let Some(key) = set_key {
                config.anon_key = Some(key);
            }
            if let Some(bucket) = bucket {
                config.bucket = bucket;
            }
            if let Some(table) = table {
                config.table = table;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                let backend = config.backend_config();
                println!("設定:");
                println!("  URL: {}", if backend.url.is_empty() { "未設定" } else { backend.url.as_str() });
                println!("  anonキー: {}", if backend.anon_key.is_empty() { "未設定" } else { "設定済み" });
                println!("  バケット: {}", backend.bucket);
                println!("  テーブル: {}", backend.table);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
            }
        }
    }

    Ok(())
}

/// `RUST_LOG` があればそれを優先、なければ --verbose で切り替え
fn init_tracing(verbose: bool) {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if verbose {
            "photo_share=debug,photo_share_common=debug".to_string()
        } else {
            "photo_share=warn,photo_share_common=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cli_object_name(original: &str) -> String {
    let timestamp_ms = chrono::Utc::now().timestamp_millis().max(0) as u64;
    object_name(original, timestamp_ms, rand::random::<u64>())
}

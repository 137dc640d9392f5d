use clap::{Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photo-share")]
#[command(about = "写真をSupabase Storageへアップロードし、ギャラリーを一覧表示する", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像ファイル/フォルダをアップロード
    Upload {
        /// 画像ファイルまたはフォルダ
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,
    },

    /// アップロード済み画像を新しい順に表示
    List {
        /// JSONで出力
        #[arg(long)]
        json: bool,

        /// 表示件数の上限（1以上）
        #[arg(short = 'n', long)]
        limit: Option<NonZeroUsize>,
    },

    /// 設定を表示/編集
    Config {
        /// SupabaseプロジェクトURLを設定
        #[arg(long)]
        set_url: Option<String>,

        /// anonキーを設定
        #[arg(long)]
        set_key: Option<String>,

        /// Storageバケット名
        #[arg(long)]
        bucket: Option<String>,

        /// メタデータのテーブル名
        #[arg(long)]
        table: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

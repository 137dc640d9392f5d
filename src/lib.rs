//! photo-share CLI
//!
//! Webアプリと同じアップロード処理・ギャラリー取得をネイティブで実行する

pub mod cli;
pub mod config;
pub mod error;
pub mod gallery;
pub mod scanner;
pub mod supabase;

//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 画像ファイルが1つも含まれていない（クライアント側の検証エラー）
    #[error("Please select valid image files.")]
    NoImageFiles,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// 画面に出すメッセージ（バックエンドの文言をそのまま使う）
    pub fn user_message(&self) -> String {
        match self {
            Error::Storage(message) | Error::Database(message) | Error::Network(message) => {
                message.clone()
            }
            other => other.to_string(),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotoShareError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("Supabaseの接続先が設定されていません。`photo-share config --set-url URL --set-key KEY` で設定してください")]
    MissingCredentials,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("画像が見つかりません: {0}")]
    NoImagesFound(String),

    #[error("アップロードに失敗しました: {0}件")]
    UploadFailed(usize),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] photo_share_common::Error),
}

pub type Result<T> = std::result::Result<T, PhotoShareError>;

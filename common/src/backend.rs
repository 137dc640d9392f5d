//! バックエンド抽象
//!
//! Storage（アップロード・公開URL）とテーブル（insert・select）をまとめたトレイト。
//! ブラウザ（fetch）とCLI（reqwest）で実装が異なるため `?Send` で定義する。

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::Result;
use crate::types::{ImageRecord, NewImageRecord};

/// アップロード対象ファイル
pub trait ImageSource {
    /// 元のファイル名
    fn file_name(&self) -> String;

    /// MIMEタイプ（不明なら空文字）
    fn mime_type(&self) -> String;

    fn is_image(&self) -> bool {
        is_image_mime(&self.mime_type())
    }
}

pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type.starts_with("image/")
}

#[async_trait(?Send)]
pub trait ImageBackend {
    type Payload: ImageSource;

    /// 接続先が設定済みか（プレースホルダなら false）
    fn is_configured(&self) -> bool;

    /// Storageへ書き込む
    async fn upload_object(&self, object_name: &str, payload: &Self::Payload) -> Result<()>;

    /// 公開URLを取得
    fn public_url(&self, object_name: &str) -> String;

    /// メタデータ行をinsert
    async fn insert_record(&self, record: &NewImageRecord) -> Result<()>;

    /// 全行を作成日時の降順でselect
    async fn list_records(&self) -> Result<Vec<ImageRecord>>;
}

#[derive(Deserialize)]
struct FailureBody {
    message: Option<String>,
    error: Option<String>,
}

/// 失敗レスポンスからメッセージを取り出す
///
/// Storage・PostgRESTともに `message` を返す。なければ `error`、
/// どちらもなければステータスと本文をそのまま使う。
pub fn failure_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<FailureBody>(body) {
        if let Some(message) = parsed.message.or(parsed.error) {
            if !message.is_empty() {
                return message;
            }
        }
    }

    let body = body.trim();
    if body.is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, body)
    }
}

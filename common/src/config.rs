//! バックエンド（Supabase）接続設定
//!
//! エンドポイントURLの組み立てはCLIとWebのクライアントで共有する。

use serde::{Deserialize, Serialize};

/// 未設定を表すプレースホルダURL
pub const PLACEHOLDER_URL: &str = "https://placeholder.supabase.co";
pub const DEFAULT_BUCKET: &str = "images";
pub const DEFAULT_TABLE: &str = "images";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
    pub bucket: String,
    pub table: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(PLACEHOLDER_URL, "")
    }
}

impl BackendConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            bucket: DEFAULT_BUCKET.to_string(),
            table: DEFAULT_TABLE.to_string(),
        }
    }

    /// URLが空またはプレースホルダなら未設定
    pub fn is_configured(&self) -> bool {
        let url = self.base_url();
        !url.is_empty() && url != PLACEHOLDER_URL
    }

    fn base_url(&self) -> &str {
        self.url.trim().trim_end_matches('/')
    }

    /// Storageへのアップロード先
    pub fn storage_object_url(&self, object_name: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url(), self.bucket, object_name)
    }

    /// 公開URL（ネットワークアクセスなしで決まる）
    pub fn public_object_url(&self, object_name: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url(),
            self.bucket,
            object_name
        )
    }

    /// insert先
    pub fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url(), self.table)
    }

    /// 作成日時の降順で全件select
    pub fn list_url(&self) -> String {
        format!("{}?select=*&order=created_at.desc", self.table_url())
    }

    /// 全リクエスト共通の認証ヘッダ
    pub fn auth_headers(&self) -> [(&'static str, String); 2] {
        [
            ("apikey", self.anon_key.clone()),
            ("Authorization", format!("Bearer {}", self.anon_key)),
        ]
    }
}

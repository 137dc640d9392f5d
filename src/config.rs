use crate::error::{PhotoShareError, Result};
use photo_share_common::config::{DEFAULT_BUCKET, DEFAULT_TABLE};
use photo_share_common::BackendConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const URL_ENV: &str = "SUPABASE_URL";
pub const KEY_ENV: &str = "SUPABASE_ANON_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub supabase_url: Option<String>,
    pub anon_key: Option<String>,
    pub bucket: String,
    pub table: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            supabase_url: None,
            anon_key: None,
            bucket: DEFAULT_BUCKET.into(),
            table: DEFAULT_TABLE.into(),
            timeout_seconds: 120,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PhotoShareError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("photo-share").join("config.json"))
    }

    /// 接続設定を組み立てる（環境変数を優先）
    pub fn backend_config(&self) -> BackendConfig {
        let url = env_or(URL_ENV, self.supabase_url.as_deref());
        let key = env_or(KEY_ENV, self.anon_key.as_deref());

        let mut backend = BackendConfig::new(url.unwrap_or_default(), key.unwrap_or_default());
        backend.bucket = self.bucket.clone();
        backend.table = self.table.clone();
        backend
    }

    /// 設定済みの接続先。未設定ならエラー
    pub fn require_backend(&self) -> Result<BackendConfig> {
        let backend = self.backend_config();
        if backend.is_configured() && !backend.anon_key.is_empty() {
            Ok(backend)
        } else {
            Err(PhotoShareError::MissingCredentials)
        }
    }
}

fn env_or(name: &str, fallback: Option<&str>) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => fallback.map(str::to_string),
    }
}

//! Supabase連携（ブラウザ fetch）
//!
//! 接続先はビルド時の環境変数 `SUPABASE_URL` / `SUPABASE_ANON_KEY`。
//! 未指定ならプレースホルダになり、ギャラリーは問い合わせを行わない。

use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, Request, RequestInit, RequestMode, Response};
use photo_share_common::{
    failure_message, BackendConfig, Error, ImageBackend, ImageRecord, ImageSource,
    NewImageRecord, Result, PLACEHOLDER_URL,
};

const PLACEHOLDER_KEY: &str = "placeholder-key";

/// ビルド時設定からバックエンド設定を作る
pub fn backend_config() -> BackendConfig {
    BackendConfig::new(
        option_env!("SUPABASE_URL").unwrap_or(PLACEHOLDER_URL),
        option_env!("SUPABASE_ANON_KEY").unwrap_or(PLACEHOLDER_KEY),
    )
}

/// ドロップ/選択されたブラウザのファイル
pub struct BrowserFile(File);

impl BrowserFile {
    pub fn new(file: File) -> Self {
        Self(file)
    }
}

impl ImageSource for BrowserFile {
    fn file_name(&self) -> String {
        self.0.name()
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }
}

/// Storageアップロード時の追加ヘッダ
pub fn upload_headers(mime_type: &str) -> Vec<(&'static str, String)> {
    vec![
        ("Content-Type", mime_type.to_string()),
        ("x-upsert", "false".to_string()),
        ("cache-control", "max-age=3600".to_string()),
    ]
}

/// insert時の追加ヘッダ
pub fn insert_headers() -> Vec<(&'static str, String)> {
    vec![
        ("Content-Type", "application/json".to_string()),
        ("Prefer", "return=minimal".to_string()),
    ]
}

fn js_error(value: JsValue) -> Error {
    Error::Network(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

pub struct SupabaseClient {
    config: BackendConfig,
}

impl SupabaseClient {
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> Self {
        Self::new(backend_config())
    }

    /// fetch呼び出し（共通処理）
    async fn send(
        &self,
        method: &str,
        url: &str,
        headers: &[(&'static str, String)],
        body: Option<&JsValue>,
    ) -> Result<Response> {
        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);
        if let Some(body) = body {
            opts.set_body(body);
        }

        let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
        for (name, value) in self.config.auth_headers().iter().chain(headers) {
            request.headers().set(name, value).map_err(js_error)?;
        }

        let window = web_sys::window()
            .ok_or_else(|| Error::Network("window is not available".to_string()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        resp_value.dyn_into::<Response>().map_err(js_error)
    }
}

/// 失敗レスポンスの本文からメッセージを作る
async fn read_failure(resp: &Response) -> String {
    let body = match resp.text() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    };
    failure_message(resp.status(), &body)
}

#[async_trait(?Send)]
impl ImageBackend for SupabaseClient {
    type Payload = BrowserFile;

    fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    async fn upload_object(&self, object_name: &str, payload: &BrowserFile) -> Result<()> {
        let url = self.config.storage_object_url(object_name);
        let body: &JsValue = payload.0.as_ref();
        let resp = self
            .send("POST", &url, &upload_headers(&payload.mime_type()), Some(body))
            .await?;

        if !resp.ok() {
            return Err(Error::Storage(read_failure(&resp).await));
        }
        Ok(())
    }

    fn public_url(&self, object_name: &str) -> String {
        self.config.public_object_url(object_name)
    }

    async fn insert_record(&self, record: &NewImageRecord) -> Result<()> {
        let body = JsValue::from_str(&serde_json::to_string(record)?);
        let resp = self
            .send("POST", &self.config.table_url(), &insert_headers(), Some(&body))
            .await?;

        if !resp.ok() {
            return Err(Error::Database(read_failure(&resp).await));
        }
        Ok(())
    }

    async fn list_records(&self) -> Result<Vec<ImageRecord>> {
        let resp = self.send("GET", &self.config.list_url(), &[], None).await?;

        if !resp.ok() {
            return Err(Error::Database(read_failure(&resp).await));
        }

        let json = JsFuture::from(resp.json().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        serde_wasm_bindgen::from_value(json).map_err(|e| Error::Database(e.to_string()))
    }
}

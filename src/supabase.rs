//! Supabase REST クライアント（reqwest）

use async_trait::async_trait;
use photo_share_common::{
    failure_message, BackendConfig, Error, ImageBackend, ImageRecord, NewImageRecord,
};
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;

use crate::scanner::LocalImage;

pub struct SupabaseClient {
    client: Client,
    config: BackendConfig,
}

impl SupabaseClient {
    pub fn new(config: BackendConfig, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client: {}", e);
                Client::new()
            });

        Self { client, config }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        self.config
            .auth_headers()
            .into_iter()
            .fold(builder, |b, (name, value)| b.header(name, value))
    }
}

fn network_error(e: reqwest::Error) -> Error {
    Error::Network(e.to_string())
}

/// 失敗レスポンスの本文からメッセージを作る
async fn read_failure(response: Response) -> String {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    failure_message(status, &body)
}

#[async_trait(?Send)]
impl ImageBackend for SupabaseClient {
    type Payload = LocalImage;

    fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    async fn upload_object(
        &self,
        object_name: &str,
        payload: &LocalImage,
    ) -> photo_share_common::Result<()> {
        let bytes = tokio::fs::read(&payload.path).await?;

        let response = self
            .authorized(self.client.post(self.config.storage_object_url(object_name)))
            .header("Content-Type", &payload.mime_type)
            .header("x-upsert", "false")
            .header("cache-control", "max-age=3600")
            .body(bytes)
            .send()
            .await
            .map_err(network_error)?;

        if !response.status().is_success() {
            return Err(Error::Storage(read_failure(response).await));
        }
        Ok(())
    }

    fn public_url(&self, object_name: &str) -> String {
        self.config.public_object_url(object_name)
    }

    async fn insert_record(&self, record: &NewImageRecord) -> photo_share_common::Result<()> {
        let response = self
            .authorized(self.client.post(self.config.table_url()))
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await
            .map_err(network_error)?;

        if !response.status().is_success() {
            return Err(Error::Database(read_failure(response).await));
        }
        Ok(())
    }

    async fn list_records(&self) -> photo_share_common::Result<Vec<ImageRecord>> {
        let response = self
            .authorized(self.client.get(self.config.list_url()))
            .send()
            .await
            .map_err(network_error)?;

        if !response.status().is_success() {
            return Err(Error::Database(read_failure(response).await));
        }

        let body = response.text().await.map_err(network_error)?;
        Ok(serde_json::from_str(&body)?)
    }
}

//! ギャラリー一覧の取得
//!
//! 未設定（プレースホルダ）のバックエンドには問い合わせない。
//! 取得結果は作成日時の降順に並べ直す。

use tracing::{debug, error};

use crate::backend::ImageBackend;
use crate::error::Result;
use crate::types::ImageRecord;

/// ギャラリーの表示状態
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GalleryState {
    #[default]
    Loading,
    Empty,
    Ready(Vec<ImageRecord>),
}

impl GalleryState {
    pub fn from_records(records: Vec<ImageRecord>) -> Self {
        if records.is_empty() {
            GalleryState::Empty
        } else {
            GalleryState::Ready(records)
        }
    }

    pub fn records(&self) -> &[ImageRecord] {
        match self {
            GalleryState::Ready(records) => records,
            _ => &[],
        }
    }
}

/// 新しい順（安定ソート）
pub fn sort_newest_first(records: &mut [ImageRecord]) {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

pub async fn fetch_gallery<B: ImageBackend>(backend: &B) -> Result<Vec<ImageRecord>> {
    if !backend.is_configured() {
        debug!("backend not configured; skipping gallery fetch");
        return Ok(Vec::new());
    }

    let mut records = backend.list_records().await?;
    sort_newest_first(&mut records);
    Ok(records)
}

/// 取得失敗はログに残して空リスト扱い
pub async fn fetch_gallery_or_empty<B: ImageBackend>(backend: &B) -> Vec<ImageRecord> {
    match fetch_gallery(backend).await {
        Ok(records) => records,
        Err(e) => {
            error!(error = %e, "error fetching images");
            Vec::new()
        }
    }
}

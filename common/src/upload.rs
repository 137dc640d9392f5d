//! アップロード処理
//!
//! 画像ファイルだけを残し、1件ずつ順番に
//! Storage書き込み → 公開URL取得 → メタデータinsert を行う。
//! 1件の失敗は他のファイルに影響しない。Storageへの書き込み済みデータは巻き戻さない。

use std::time::Duration;

use tracing::{debug, warn};

use crate::backend::{ImageBackend, ImageSource};
use crate::error::{Error, Result};
use crate::types::NewImageRecord;

/// 表示用のアップロード状態
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UploadStatus {
    #[default]
    Idle,
    Success,
    Error(String),
}

impl UploadStatus {
    pub const SUCCESS_DISPLAY: Duration = Duration::from_millis(2000);
    pub const ERROR_DISPLAY: Duration = Duration::from_millis(3000);

    pub fn as_str(&self) -> &'static str {
        match self {
            UploadStatus::Idle => "idle",
            UploadStatus::Success => "success",
            UploadStatus::Error(_) => "error",
        }
    }

    /// Idleに戻るまでの表示時間
    pub fn display_duration(&self) -> Option<Duration> {
        match self {
            UploadStatus::Idle => None,
            UploadStatus::Success => Some(Self::SUCCESS_DISPLAY),
            UploadStatus::Error(_) => Some(Self::ERROR_DISPLAY),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            UploadStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// アップロード成功したファイル
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedImage {
    pub object_name: String,
    pub record: NewImageRecord,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FailedUpload {
    pub file_name: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadEvent {
    Started {
        file_name: String,
        index: usize,
        total: usize,
    },
    Uploaded(UploadedImage),
    Failed(FailedUpload),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadReport {
    pub uploaded: Vec<UploadedImage>,
    pub failed: Vec<FailedUpload>,
    /// 画像でないため除外した件数
    pub skipped: usize,
}

impl UploadReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// 画像ファイルとそれ以外の件数に分ける
pub fn partition_images<P: ImageSource>(files: Vec<P>) -> (Vec<P>, usize) {
    let total = files.len();
    let images: Vec<P> = files.into_iter().filter(|f| f.is_image()).collect();
    let skipped = total - images.len();
    (images, skipped)
}

pub struct UploadPipeline<'a, B, N> {
    backend: &'a B,
    namer: N,
}

impl<'a, B, N> UploadPipeline<'a, B, N>
where
    B: ImageBackend,
    N: Fn(&str) -> String,
{
    /// `namer` は元のファイル名からStorageオブジェクト名を作る
    pub fn new(backend: &'a B, namer: N) -> Self {
        Self { backend, namer }
    }

    /// 1ファイル分のアップロード
    pub async fn upload_one(&self, file: &B::Payload) -> Result<UploadedImage> {
        let file_name = file.file_name();
        let object_name = (self.namer)(&file_name);

        debug!(file = %file_name, object = %object_name, "uploading to storage");
        self.backend.upload_object(&object_name, file).await?;

        let record = NewImageRecord {
            filename: file_name,
            url: self.backend.public_url(&object_name),
        };
        self.backend.insert_record(&record).await?;

        Ok(UploadedImage {
            object_name,
            record,
        })
    }

    /// 複数ファイルを順番に処理
    ///
    /// 画像が1つもなければ `Error::NoImageFiles` を返し、バックエンドには触れない。
    pub async fn run<F>(&self, files: Vec<B::Payload>, mut on_event: F) -> Result<UploadReport>
    where
        F: FnMut(UploadEvent),
    {
        let (images, skipped) = partition_images(files);
        if images.is_empty() {
            return Err(Error::NoImageFiles);
        }

        let total = images.len();
        let mut report = UploadReport {
            skipped,
            ..Default::default()
        };

        for (index, file) in images.iter().enumerate() {
            on_event(UploadEvent::Started {
                file_name: file.file_name(),
                index,
                total,
            });

            match self.upload_one(file).await {
                Ok(uploaded) => {
                    on_event(UploadEvent::Uploaded(uploaded.clone()));
                    report.uploaded.push(uploaded);
                }
                Err(e) => {
                    warn!(file = %file.file_name(), error = %e, "upload failed");
                    let failed = FailedUpload {
                        file_name: file.file_name(),
                        message: e.user_message(),
                    };
                    on_event(UploadEvent::Failed(failed.clone()));
                    report.failed.push(failed);
                }
            }
        }

        Ok(report)
    }
}

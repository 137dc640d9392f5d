//! Photo Share Common Library
//!
//! CLIとWeb(WASM)で共有される型・アップロード処理・ギャラリー取得

pub mod types;
pub mod error;
pub mod config;
pub mod naming;
pub mod backend;
pub mod upload;
pub mod gallery;

#[cfg(test)]
mod mock;

pub use types::{ImageRecord, NewImageRecord};
pub use error::{Error, Result};
pub use config::{BackendConfig, PLACEHOLDER_URL};
pub use naming::object_name;
pub use backend::{failure_message, is_image_mime, ImageBackend, ImageSource};
pub use upload::{UploadEvent, UploadPipeline, UploadReport, UploadStatus, UploadedImage, FailedUpload};
pub use gallery::{fetch_gallery, fetch_gallery_or_empty, GalleryState};

use crate::error::{PhotoShareError, Result};
use photo_share_common::ImageSource;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// アップロード候補のローカルファイル
#[derive(Debug, Clone, PartialEq)]
pub struct LocalImage {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: String,
}

impl LocalImage {
    pub fn from_path(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Self {
            path: path.to_path_buf(),
            file_name,
            mime_type: mime_for_path(path).to_string(),
        }
    }
}

impl ImageSource for LocalImage {
    fn file_name(&self) -> String {
        self.file_name.clone()
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }
}

const IMAGE_MIME_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("svg", "image/svg+xml"),
    ("avif", "image/avif"),
    ("heic", "image/heic"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
];

const OCTET_STREAM: &str = "application/octet-stream";

/// 拡張子からMIMEタイプを推定（大文字小文字は区別しない）
pub fn mime_for_path(path: &Path) -> &'static str {
    let Some(ext) = path.extension() else {
        return OCTET_STREAM;
    };
    let ext = ext.to_string_lossy().to_lowercase();

    IMAGE_MIME_TYPES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or(OCTET_STREAM)
}

/// 引数のパスからアップロード候補を集める
///
/// ファイル指定はそのまま（画像かどうかはアップロード処理側で判定）。
/// フォルダ指定は画像拡張子のファイルだけを名前順で拾う。
pub fn collect_files(paths: &[PathBuf], recursive: bool) -> Result<Vec<LocalImage>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            files.extend(scan_folder(path, recursive)?);
        } else if path.is_file() {
            files.push(LocalImage::from_path(path));
        } else {
            return Err(PhotoShareError::FileNotFound(path.display().to_string()));
        }
    }

    Ok(files)
}

pub fn scan_folder(folder: &Path, recursive: bool) -> Result<Vec<LocalImage>> {
    if !folder.is_dir() {
        return Err(PhotoShareError::FileNotFound(folder.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut images: Vec<LocalImage> = WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| LocalImage::from_path(e.path()))
        .filter(|image| image.is_image())
        .collect();

    images.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(images)
}

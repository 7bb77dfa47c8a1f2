//! 画像ファイルの読み込み
//!
//! ブラウザの `accept="image/*"` に相当する判定を拡張子で行い、
//! multipart送信用のMIMEタイプを決める。サイズや解像度は検証しない。

use crate::client::ImageUpload;
use crate::error::{AppError, Result};
use image::ImageFormat;
use std::path::Path;

/// 読み込んだ画像
#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub file_name: String,
    pub upload: ImageUpload,
}

/// 拡張子からMIMEタイプを判定
pub fn detect_mime(path: &Path) -> Option<&'static str> {
    ImageFormat::from_path(path).ok().map(|f| f.to_mime_type())
}

pub fn load_image(path: &Path) -> Result<ImageInfo> {
    if !path.is_file() {
        return Err(AppError::FileNotFound(path.display().to_string()));
    }

    let mime = detect_mime(path)
        .ok_or_else(|| AppError::UnsupportedImage(path.display().to_string()))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let bytes = std::fs::read(path)?;

    Ok(ImageInfo {
        file_name,
        upload: ImageUpload {
            bytes,
            mime: mime.to_string(),
        },
    })
}

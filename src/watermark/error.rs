use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WatermarkError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Input path not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Unsupported image format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Unknown color '{0}' (expected a color name, #RGB or #RRGGBB)")]
    InvalidColor(String),

    #[error("Unknown position '{0}'")]
    InvalidPosition(String),

    #[error("No usable font found (install a TrueType font or pass --font)")]
    FontUnavailable,
}

pub mod bmp;
pub mod jpeg;
pub mod png;
pub mod tiff;

use std::path::Path;

use image::DynamicImage;

use super::error::WatermarkError;
use super::types::SourceFormat;

/// Encode `image` in `format` and write it to `path`.
///
/// The whole file is encoded in memory first and written in one call, so an
/// interrupted run never leaves a half-encoded output behind.
pub fn save_image(
    image: &DynamicImage,
    path: &Path,
    format: SourceFormat,
    jpeg_quality: u8,
) -> Result<(), WatermarkError> {
    let encoded = match format {
        SourceFormat::Jpeg => jpeg::encode(image, jpeg_quality)?,
        SourceFormat::Png => png::encode(image)?,
        SourceFormat::Bmp => bmp::encode(image)?,
        SourceFormat::Tiff => tiff::encode(image)?,
    };

    std::fs::write(path, encoded)?;
    Ok(())
}

use image::{DynamicImage, ImageEncoder, codecs::jpeg::JpegEncoder};

use crate::watermark::error::WatermarkError;

/// Encode as JPEG at the given quality.
pub fn encode(image: &DynamicImage, quality: u8) -> Result<Vec<u8>, WatermarkError> {
    // JPEG doesn't support alpha channel, so convert to RGB
    let rgb_image = image.to_rgb8();

    let mut buffer = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    encoder.write_image(
        &rgb_image,
        rgb_image.width(),
        rgb_image.height(),
        image::ExtendedColorType::Rgb8,
    )?;
    Ok(buffer)
}

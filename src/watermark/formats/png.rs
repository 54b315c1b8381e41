use image::{DynamicImage, codecs::png::PngEncoder};

use crate::watermark::error::WatermarkError;

/// Encode as PNG, alpha preserved.
pub fn encode(image: &DynamicImage) -> Result<Vec<u8>, WatermarkError> {
    let mut buffer = Vec::new();
    let encoder = PngEncoder::new(&mut buffer);
    image.write_with_encoder(encoder)?;
    Ok(buffer)
}

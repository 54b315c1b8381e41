use std::io::Cursor;

use image::{DynamicImage, codecs::bmp::BmpEncoder};

use crate::watermark::error::WatermarkError;

/// Encode as BMP. Alpha is dropped for the widest viewer compatibility.
pub fn encode(image: &DynamicImage) -> Result<Vec<u8>, WatermarkError> {
    let rgb_image = image.to_rgb8();

    let mut cursor = Cursor::new(Vec::new());
    let mut encoder = BmpEncoder::new(&mut cursor);
    encoder.encode(
        &rgb_image,
        rgb_image.width(),
        rgb_image.height(),
        image::ExtendedColorType::Rgb8,
    )?;
    Ok(cursor.into_inner())
}

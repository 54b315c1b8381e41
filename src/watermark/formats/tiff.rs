use std::io::Cursor;

use image::{DynamicImage, codecs::tiff::TiffEncoder};

use crate::watermark::error::WatermarkError;

/// Encode as TIFF, alpha preserved.
pub fn encode(image: &DynamicImage) -> Result<Vec<u8>, WatermarkError> {
    let mut cursor = Cursor::new(Vec::new());
    let encoder = TiffEncoder::new(&mut cursor);
    image.write_with_encoder(encoder)?;
    Ok(cursor.into_inner())
}

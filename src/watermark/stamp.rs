use ab_glyph::{FontVec, PxScale};
use image::{DynamicImage, Rgba};
use imageproc::drawing::{draw_text_mut, text_size};

use super::position;
use super::types::StampConfig;

/// Offset of the drop shadow behind the date text, in pixels.
const SHADOW_OFFSET: i32 = 2;

/// Draw `text` onto a copy of `image` at the configured anchor.
///
/// The input image is never mutated; writing the result anywhere is the
/// caller's business.
pub fn stamp_text(
    image: &DynamicImage,
    text: &str,
    font: &FontVec,
    config: &StampConfig,
) -> DynamicImage {
    // Work on an RGBA copy
    let mut rgba_image = image.to_rgba8();

    let scale = PxScale::from(config.font_size);
    let (text_width, text_height) = text_size(scale, font, text);

    let (x, y) = position::compute(
        config.anchor,
        (rgba_image.width(), rgba_image.height()),
        (text_width, text_height),
        config.margin,
    );

    // Shadow first, so the date stays legible on light backgrounds
    draw_text_mut(
        &mut rgba_image,
        Rgba([0, 0, 0, 255]),
        x as i32 + SHADOW_OFFSET,
        y as i32 + SHADOW_OFFSET,
        scale,
        font,
        text,
    );
    draw_text_mut(
        &mut rgba_image,
        config.color.rgba(),
        x as i32,
        y as i32,
        scale,
        font,
        text,
    );

    DynamicImage::ImageRgba8(rgba_image)
}

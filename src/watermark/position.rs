use std::fmt;
use std::str::FromStr;

use super::error::WatermarkError;

/// Default distance between the text and the image edge, in pixels.
pub const DEFAULT_MARGIN: u32 = 10;

/// The nine places the date text can be anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

/// Placement along a single axis.
enum Align {
    Near,
    Center,
    Far,
}

impl Anchor {
    pub const ALL: [Anchor; 9] = [
        Anchor::TopLeft,
        Anchor::TopCenter,
        Anchor::TopRight,
        Anchor::CenterLeft,
        Anchor::Center,
        Anchor::CenterRight,
        Anchor::BottomLeft,
        Anchor::BottomCenter,
        Anchor::BottomRight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Anchor::TopLeft => "top-left",
            Anchor::TopCenter => "top-center",
            Anchor::TopRight => "top-right",
            Anchor::CenterLeft => "center-left",
            Anchor::Center => "center",
            Anchor::CenterRight => "center-right",
            Anchor::BottomLeft => "bottom-left",
            Anchor::BottomCenter => "bottom-center",
            Anchor::BottomRight => "bottom-right",
        }
    }

    fn horizontal(self) -> Align {
        match self {
            Anchor::TopLeft | Anchor::CenterLeft | Anchor::BottomLeft => Align::Near,
            Anchor::TopCenter | Anchor::Center | Anchor::BottomCenter => Align::Center,
            Anchor::TopRight | Anchor::CenterRight | Anchor::BottomRight => Align::Far,
        }
    }

    fn vertical(self) -> Align {
        match self {
            Anchor::TopLeft | Anchor::TopCenter | Anchor::TopRight => Align::Near,
            Anchor::CenterLeft | Anchor::Center | Anchor::CenterRight => Align::Center,
            Anchor::BottomLeft | Anchor::BottomCenter | Anchor::BottomRight => Align::Far,
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Anchor {
    type Err = WatermarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let anchor = match s.trim().to_ascii_lowercase().as_str() {
            "top-left" => Anchor::TopLeft,
            "top-center" => Anchor::TopCenter,
            "top-right" => Anchor::TopRight,
            "center-left" => Anchor::CenterLeft,
            "center" => Anchor::Center,
            "center-right" => Anchor::CenterRight,
            "bottom-left" => Anchor::BottomLeft,
            "bottom-center" => Anchor::BottomCenter,
            "bottom-right" => Anchor::BottomRight,
            _ => return Err(WatermarkError::InvalidPosition(s.to_string())),
        };
        Ok(anchor)
    }
}

/// Map an anchor to the top-left pixel of the text box.
///
/// Coordinates are clamped to `[0, image_dim - text_dim]` on each axis, so
/// the text never starts at a negative coordinate even when the image is
/// smaller than the text.
pub fn compute(
    anchor: Anchor,
    image_size: (u32, u32),
    text_size: (u32, u32),
    margin: u32,
) -> (u32, u32) {
    let x = align_axis(anchor.horizontal(), image_size.0, text_size.0, margin);
    let y = align_axis(anchor.vertical(), image_size.1, text_size.1, margin);
    (x, y)
}

fn align_axis(align: Align, image_dim: u32, text_dim: u32, margin: u32) -> u32 {
    let max = image_dim.saturating_sub(text_dim);
    match align {
        Align::Near => margin.min(max),
        Align::Center => max / 2,
        Align::Far => image_dim.saturating_sub(text_dim.saturating_add(margin)),
    }
}

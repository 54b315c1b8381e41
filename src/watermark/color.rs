use std::str::FromStr;

use image::Rgba;

use super::error::WatermarkError;

/// RGB text color parsed from a CLI argument or config value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn rgba(&self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 255])
    }
}

impl FromStr for Color {
    type Err = WatermarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = match trimmed.strip_prefix('#') {
            Some(hex) => parse_hex(hex),
            None => named_color(trimmed),
        };
        parsed.ok_or_else(|| WatermarkError::InvalidColor(s.to_string()))
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            // Double each component: 0xF -> 0xFF, 0xA -> 0xAA
            Some(Color::new(r * 17, g * 17, b * 17))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::new(r, g, b))
        }
        _ => None,
    }
}

fn named_color(name: &str) -> Option<Color> {
    let color = match name.to_ascii_lowercase().as_str() {
        "white" => Color::new(255, 255, 255),
        "black" => Color::new(0, 0, 0),
        "red" => Color::new(255, 0, 0),
        "green" => Color::new(0, 128, 0),
        "blue" => Color::new(0, 0, 255),
        "yellow" => Color::new(255, 255, 0),
        "cyan" => Color::new(0, 255, 255),
        "magenta" => Color::new(255, 0, 255),
        "gray" | "grey" => Color::new(128, 128, 128),
        "orange" => Color::new(255, 165, 0),
        _ => return None,
    };
    Some(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors() {
        assert_eq!("white".parse::<Color>().unwrap(), Color::new(255, 255, 255));
        assert_eq!("black".parse::<Color>().unwrap(), Color::new(0, 0, 0));
        assert_eq!("red".parse::<Color>().unwrap(), Color::new(255, 0, 0));
        assert_eq!("orange".parse::<Color>().unwrap(), Color::new(255, 165, 0));

        // Case insensitive, both spellings of gray
        assert_eq!("White".parse::<Color>().unwrap(), Color::new(255, 255, 255));
        assert_eq!(
            "gray".parse::<Color>().unwrap(),
            "grey".parse::<Color>().unwrap()
        );
    }

    #[test]
    fn test_hex_rrggbb() {
        assert_eq!("#FF0000".parse::<Color>().unwrap(), Color::new(255, 0, 0));
        assert_eq!("#00ff00".parse::<Color>().unwrap(), Color::new(0, 255, 0));
        assert_eq!("#0000FF".parse::<Color>().unwrap(), Color::new(0, 0, 255));
        assert_eq!("#000000".parse::<Color>().unwrap(), Color::new(0, 0, 0));
    }

    #[test]
    fn test_hex_rgb_short_form() {
        assert_eq!("#F00".parse::<Color>().unwrap(), Color::new(255, 0, 0));
        assert_eq!("#FFF".parse::<Color>().unwrap(), Color::new(255, 255, 255));
        // A=10*17=170, B=11*17=187, C=12*17=204
        assert_eq!("#ABC".parse::<Color>().unwrap(), Color::new(170, 187, 204));
    }

    #[test]
    fn test_invalid_colors() {
        assert!("".parse::<Color>().is_err());
        assert!("notacolor".parse::<Color>().is_err());
        assert!("#GGGGGG".parse::<Color>().is_err());
        assert!("#FF00".parse::<Color>().is_err());
        assert!("#FF00000".parse::<Color>().is_err());
        assert!("#ßAA".parse::<Color>().is_err());
    }

    #[test]
    fn test_rgba_is_opaque() {
        let color = Color::new(12, 34, 56);
        assert_eq!(color.rgba(), Rgba([12, 34, 56, 255]));
    }
}

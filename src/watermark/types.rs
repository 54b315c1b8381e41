use std::path::{Path, PathBuf};

use super::color::Color;
use super::position::{Anchor, DEFAULT_MARGIN};

/// A single source image and where its stamped copy will be written.
#[derive(Debug, Clone)]
pub struct ImageTask {
    pub source_path: PathBuf,
    pub output_path: PathBuf,
}

/// Rendering settings shared read-only by every file in a batch.
#[derive(Debug, Clone)]
pub struct StampConfig {
    /// Font size for the date text, in pixels
    pub font_size: f32,
    /// Text color; the drop shadow stays black
    pub color: Color,
    /// Which corner or edge the text is anchored to
    pub anchor: Anchor,
    /// Distance from the image edge in pixels
    pub margin: u32,
}

impl Default for StampConfig {
    fn default() -> Self {
        Self {
            font_size: 24.0,
            color: Color::new(255, 255, 255),
            anchor: Anchor::BottomRight,
            margin: DEFAULT_MARGIN,
        }
    }
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
    pub errors: Vec<BatchFailure>,
}

/// A file the batch could not process, and why.
#[derive(Debug)]
pub struct BatchFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Image container formats the tool reads and writes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SourceFormat {
    Jpeg,
    Png,
    Bmp,
    Tiff,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::from_extension(ext)
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(SourceFormat::Jpeg),
            "png" => Some(SourceFormat::Png),
            "bmp" => Some(SourceFormat::Bmp),
            "tif" | "tiff" => Some(SourceFormat::Tiff),
            _ => None,
        }
    }
}

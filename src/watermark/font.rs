use std::path::Path;

use ab_glyph::FontVec;
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

use super::error::WatermarkError;

/// Well-known font files checked in order before scanning whole directories.
const FONT_SEARCH_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

const FONT_SCAN_DIRS: &[&str] = &["/usr/share/fonts", "/usr/local/share/fonts"];

/// Load the font used for the date text.
///
/// The preferred path wins when it is readable and parseable; a missing or
/// broken preferred font only causes a fallback to the system fonts, never a
/// failure. Erroring out requires a host with no usable font at all.
pub fn load_font(preferred: Option<&Path>) -> Result<FontVec, WatermarkError> {
    if let Some(path) = preferred {
        if let Some(font) = read_font(path) {
            debug!("Using font {}", path.display());
            return Ok(font);
        }
        warn!(
            "Font {} is missing or unreadable, falling back to system fonts",
            path.display()
        );
    }

    for candidate in FONT_SEARCH_PATHS {
        let path = Path::new(candidate);
        if let Some(font) = read_font(path) {
            debug!("Using font {}", path.display());
            return Ok(font);
        }
    }

    for dir in FONT_SCAN_DIRS {
        for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() || !is_font_file(entry.path()) {
                continue;
            }
            if let Some(font) = read_font(entry.path()) {
                debug!("Using font {}", entry.path().display());
                return Ok(font);
            }
        }
    }

    Err(WatermarkError::FontUnavailable)
}

fn is_font_file(path: &Path) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => matches!(ext.to_ascii_lowercase().as_str(), "ttf" | "otf"),
        None => false,
    }
}

fn read_font(path: &Path) -> Option<FontVec> {
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            trace!("Cannot read font {}: {}", path.display(), e);
            return None;
        }
    };

    match FontVec::try_from_vec(data) {
        Ok(font) => Some(font),
        Err(_) => {
            trace!("Cannot parse font {}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_font_file() {
        assert!(is_font_file(Path::new("/tmp/DejaVuSans.ttf")));
        assert!(is_font_file(Path::new("/tmp/font.OTF")));
        assert!(!is_font_file(Path::new("/tmp/picture.jpg")));
        assert!(!is_font_file(Path::new("/tmp/no_extension")));
    }

    #[test]
    fn test_read_font_rejects_garbage() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("fake.ttf");
        std::fs::write(&path, b"definitely not a font").unwrap();
        assert!(read_font(&path).is_none());
    }

    #[test]
    fn test_broken_preferred_font_falls_back() {
        // Skip on hosts with no fonts at all
        let Ok(_) = load_font(None) else {
            return;
        };

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("fake.ttf");
        std::fs::write(&path, b"definitely not a font").unwrap();
        assert!(load_font(Some(&path)).is_ok());
    }
}

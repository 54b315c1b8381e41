use std::path::Path;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use tracing::{debug, trace};

use super::error::WatermarkError;

/// Resolve the date string to stamp on an image.
///
/// EXIF capture metadata wins when present and parseable; otherwise the
/// file's modification time is used. Only a file that cannot be stat'ed at
/// all is an error.
pub fn resolve_date(path: &Path) -> Result<String, WatermarkError> {
    match rexif::parse_file(path) {
        Ok(exif) => {
            if let Some(date) = extract_capture_date(&exif) {
                return Ok(date);
            }
        }
        Err(e) => {
            trace!("No EXIF data for {}: {}", path.display(), e);
        }
    }

    modified_date(path)
}

fn extract_capture_date(exif: &rexif::ExifData) -> Option<String> {
    // Try different date fields in order of preference
    let date_fields = [
        rexif::ExifTag::DateTimeOriginal,
        rexif::ExifTag::DateTimeDigitized,
        rexif::ExifTag::DateTime,
    ];

    for field in &date_fields {
        if let Some(entry) = exif.entries.iter().find(|e| e.tag == *field) {
            if let Some(datetime) = parse_exif_datetime(entry.value_more_readable.trim()) {
                debug!("Found capture date in {:?}: {}", field, datetime);
                return Some(datetime.format("%Y-%m-%d").to_string());
            }
        }
    }

    None
}

/// Parse an EXIF datetime string, e.g. "2005:07:30 07:22:46".
pub fn parse_exif_datetime(datetime_str: &str) -> Option<NaiveDateTime> {
    // Standard EXIF format first
    if let Ok(datetime) = NaiveDateTime::parse_from_str(datetime_str, "%Y:%m:%d %H:%M:%S") {
        return Some(datetime);
    }

    // Separators some cameras and editors write instead
    let formats = ["%Y-%m-%d %H:%M:%S", "%Y/%m/%d %H:%M:%S"];
    for format in &formats {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(datetime_str, format) {
            return Some(datetime);
        }
    }

    // Bare dates without a time component
    let date_formats = ["%Y:%m:%d", "%Y-%m-%d", "%Y/%m/%d"];
    for format in &date_formats {
        if let Ok(date) = NaiveDate::parse_from_str(datetime_str, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    None
}

fn modified_date(path: &Path) -> Result<String, WatermarkError> {
    let modified = std::fs::metadata(path)?.modified()?;
    let datetime: DateTime<Local> = modified.into();
    Ok(datetime.format("%Y-%m-%d").to_string())
}

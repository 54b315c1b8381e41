use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::experimental::Writer;
use exif::{Field, In, Tag, Value};
use image::{Rgb, RgbImage};
use img_parts::jpeg::Jpeg;
use img_parts::{Bytes, ImageEXIF};
use tempfile::TempDir;

use sukashi::watermark::{Anchor, Color, StampConfig, Watermarker, font};

fn gray_jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb([128, 128, 128]));
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, image::ImageFormat::Jpeg).unwrap();
    buffer.into_inner()
}

/// Write a gray JPEG whose EXIF block carries the given capture datetime.
fn write_jpeg_with_exif_date(path: &Path, datetime: &str) {
    let ascii = Value::Ascii(vec![datetime.as_bytes().to_vec()]);
    let original = Field {
        tag: Tag::DateTimeOriginal,
        ifd_num: In::PRIMARY,
        value: ascii.clone(),
    };
    let modified = Field {
        tag: Tag::DateTime,
        ifd_num: In::PRIMARY,
        value: ascii,
    };

    let mut writer = Writer::new();
    writer.push_field(&original);
    writer.push_field(&modified);
    let mut exif_buf = Cursor::new(Vec::new());
    writer.write(&mut exif_buf, false).unwrap();

    let mut jpeg = Jpeg::from_bytes(Bytes::from(gray_jpeg_bytes(200, 200))).unwrap();
    jpeg.set_exif(Some(Bytes::from(exif_buf.into_inner())));
    let mut out = Vec::new();
    jpeg.encoder().write_to(&mut out).unwrap();
    fs::write(path, out).unwrap();
}

fn derived_output_dir(dir: &Path) -> PathBuf {
    let name = dir.file_name().unwrap().to_string_lossy().to_string();
    dir.join(format!("{}_watermark", name))
}

#[test]
fn test_exif_dated_photo_stamped_in_red_at_top_left() {
    // Skip on hosts with no usable font
    let Ok(font) = font::load_font(None) else {
        return;
    };

    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("sunset.jpg");
    write_jpeg_with_exif_date(&source, "2022:09:10 14:23:00");

    let config = StampConfig {
        font_size: 24.0,
        color: Color::new(255, 0, 0),
        anchor: "top-left".parse::<Anchor>().unwrap(),
        margin: 10,
    };
    let watermarker = Watermarker::new(config, font, 95);
    let summary = watermarker.process(&source).unwrap();
    assert_eq!(summary.succeeded, 1);
    assert_eq!(summary.failed, 0);

    let output = derived_output_dir(temp_dir.path()).join("sunset_watermark.jpg");
    assert!(output.exists(), "missing {}", output.display());

    // The date text lands near (margin, margin); on a gray photo the red
    // stamp must leave clearly red pixels there even after JPEG compression
    let stamped = image::open(&output).unwrap().to_rgb8();
    let mut found_red = false;
    for y in 0..50 {
        for x in 0..180 {
            let p = stamped.get_pixel(x, y);
            if p[0] > 180 && p[1] < 110 && p[2] < 110 {
                found_red = true;
            }
        }
    }
    assert!(found_red, "expected red date text near the top-left corner");

    // The untouched bottom half stays gray
    let mut bottom_red = false;
    for y in 150..200 {
        for x in 0..200 {
            let p = stamped.get_pixel(x, y);
            if p[0] > 180 && p[1] < 110 && p[2] < 110 {
                bottom_red = true;
            }
        }
    }
    assert!(!bottom_red, "the stamp must stay inside its anchor region");
}

#[test]
fn test_directory_batch_summary_counts() {
    let Ok(font) = font::load_font(None) else {
        return;
    };

    let temp_dir = TempDir::new().unwrap();
    for name in ["one.jpg", "two.jpg", "three.png"] {
        let img = RgbImage::from_pixel(80, 60, Rgb([40, 80, 120]));
        img.save(temp_dir.path().join(name)).unwrap();
    }
    fs::write(temp_dir.path().join("notes.txt"), "not an image").unwrap();

    let watermarker = Watermarker::new(StampConfig::default(), font, 95);
    let summary = watermarker.process(temp_dir.path()).unwrap();
    assert_eq!(summary.succeeded, 3);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.errors.len(), 1);
    assert!(summary.errors[0].path.ends_with("notes.txt"));

    let output_dir = derived_output_dir(temp_dir.path());
    for name in [
        "one_watermark.jpg",
        "two_watermark.jpg",
        "three_watermark.png",
    ] {
        assert!(output_dir.join(name).exists(), "missing {}", name);
    }
}

#[test]
fn test_mtime_fallback_still_produces_output() {
    let Ok(font) = font::load_font(None) else {
        return;
    };

    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("scan.png");
    let img = RgbImage::from_pixel(120, 90, Rgb([200, 200, 200]));
    img.save(&source).unwrap();
    filetime::set_file_mtime(&source, filetime::FileTime::from_unix_time(1_662_819_780, 0))
        .unwrap();

    let watermarker = Watermarker::new(StampConfig::default(), font, 95);
    let summary = watermarker.process(&source).unwrap();
    assert_eq!(summary.succeeded, 1);

    let output = derived_output_dir(temp_dir.path()).join("scan_watermark.png");
    let stamped = image::open(&output).unwrap();
    assert_eq!((stamped.width(), stamped.height()), (120, 90));
}

#[test]
fn test_running_twice_is_predictable() {
    let Ok(font) = font::load_font(None) else {
        return;
    };

    let temp_dir = TempDir::new().unwrap();
    let img = RgbImage::from_pixel(80, 60, Rgb([10, 10, 10]));
    img.save(temp_dir.path().join("a.jpg")).unwrap();

    let watermarker = Watermarker::new(StampConfig::default(), font, 95);
    let first = watermarker.process(temp_dir.path()).unwrap();
    let second = watermarker.process(temp_dir.path()).unwrap();

    assert_eq!((first.succeeded, first.failed), (1, 0));
    assert_eq!((second.succeeded, second.failed), (1, 0));

    // Exactly one output file either way
    let output_dir = derived_output_dir(temp_dir.path());
    let outputs: Vec<_> = fs::read_dir(&output_dir).unwrap().collect();
    assert_eq!(outputs.len(), 1);
}

use std::path::{Path, PathBuf};

use ab_glyph::FontVec;
use tracing::{info, warn};
use walkdir::WalkDir;

use super::date;
use super::error::WatermarkError;
use super::formats;
use super::stamp;
use super::types::{BatchFailure, BatchSummary, ImageTask, SourceFormat, StampConfig};

/// Suffix appended to derived output directory and file names.
const OUTPUT_SUFFIX: &str = "_watermark";

/// Stamps images with their capture date, one file or a directory at a time.
pub struct Watermarker {
    config: StampConfig,
    font: FontVec,
    jpeg_quality: u8,
}

impl Watermarker {
    pub fn new(config: StampConfig, font: FontVec, jpeg_quality: u8) -> Self {
        Self {
            config,
            font,
            jpeg_quality,
        }
    }

    /// Process a single file, or every supported image directly inside a
    /// directory (non-recursive).
    ///
    /// One file failing is recorded in the summary and does not stop the
    /// rest of the batch. Only a missing input path is fatal.
    pub fn process(&self, input: &Path) -> Result<BatchSummary, WatermarkError> {
        if !input.exists() {
            return Err(WatermarkError::InputNotFound(input.to_path_buf()));
        }

        let mut summary = BatchSummary::default();

        if input.is_dir() {
            let output_dir = output_directory(input);
            for candidate in list_candidates(input) {
                self.process_candidate(&candidate, &output_dir, &mut summary);
            }
        } else {
            let parent = input.parent().unwrap_or_else(|| Path::new(""));
            let output_dir = output_directory(parent);
            self.process_candidate(input, &output_dir, &mut summary);
        }

        Ok(summary)
    }

    fn process_candidate(&self, path: &Path, output_dir: &Path, summary: &mut BatchSummary) {
        match self.process_file(path, output_dir) {
            Ok(output_path) => {
                info!("Watermarked {} -> {}", path.display(), output_path.display());
                summary.succeeded += 1;
            }
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                summary.failed += 1;
                summary.errors.push(BatchFailure {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        }
    }

    fn process_file(&self, path: &Path, output_dir: &Path) -> Result<PathBuf, WatermarkError> {
        let format = SourceFormat::from_path(path)
            .ok_or_else(|| WatermarkError::UnsupportedFormat(path.to_path_buf()))?;

        let task = ImageTask {
            source_path: path.to_path_buf(),
            output_path: output_path_for(path, output_dir),
        };

        let date_text = date::resolve_date(&task.source_path)?;
        let image = image::open(&task.source_path)?;
        let stamped = stamp::stamp_text(&image, &date_text, &self.font, &self.config);

        std::fs::create_dir_all(output_dir)?;
        formats::save_image(&stamped, &task.output_path, format, self.jpeg_quality)?;

        Ok(task.output_path)
    }
}

/// Direct regular files of a directory, dotfiles excluded, sorted by name.
fn list_candidates(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| !e.file_name().to_string_lossy().starts_with('.'))
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}

/// Output directory: a subdirectory of `dir` named `<dir_name>_watermark`.
///
/// A bare relative file has an empty parent, which degenerates to
/// `_watermark` in the current directory.
fn output_directory(dir: &Path) -> PathBuf {
    let mut name = dir.file_name().unwrap_or_default().to_os_string();
    name.push(OUTPUT_SUFFIX);
    dir.join(name)
}

/// Output file name: `<stem>_watermark<original_extension>`.
fn output_path_for(source: &Path, output_dir: &Path) -> PathBuf {
    let mut name = source.file_stem().unwrap_or_default().to_os_string();
    name.push(OUTPUT_SUFFIX);
    if let Some(ext) = source.extension() {
        name.push(".");
        name.push(ext);
    }
    output_dir.join(name)
}

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod watermark;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub watermark: WatermarkConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WatermarkConfig {
    pub font_size: u32,
    pub color: String,
    pub position: String,
    pub margin: u32,
    pub font_path: Option<PathBuf>,
    pub jpeg_quality: Option<u8>,
}

impl Default for WatermarkConfig {
    fn default() -> Self {
        Self {
            font_size: 24,
            color: "white".to_string(),
            position: "bottom-right".to_string(),
            margin: watermark::DEFAULT_MARGIN,
            font_path: None,
            jpeg_quality: Some(95),
        }
    }
}

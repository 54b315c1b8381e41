// Watermark pipeline - date resolution, placement, rendering, batch runs
mod batch;
mod color;
mod date;
mod error;
pub mod font;
pub mod formats;
mod position;
mod stamp;
mod types;

// Re-export public items
pub use batch::Watermarker;
pub use color::Color;
pub use error::WatermarkError;
pub use position::{Anchor, DEFAULT_MARGIN};
pub use stamp::stamp_text;
pub use types::*;

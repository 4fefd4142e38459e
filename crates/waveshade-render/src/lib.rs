//! # Waveshade Render
//!
//! Thumbnail rendering for the waveshade pipeline.
//!
//! Consumes the per-column summaries produced by `waveshade-analysis` and
//! draws them into an RGB [`PixelBuffer`]: one vertical segment per column,
//! centered on the midline, colored by spectral centroid and scaled against
//! the global amplitude peak. The buffer is then handed to an image encoder;
//! this crate performs no file I/O.

pub mod buffer;
pub mod error;
pub mod renderer;

pub use buffer::PixelBuffer;
pub use error::{RenderError, Result};
pub use renderer::{render, RenderOptions};

pub use waveshade_analysis::Rgb;

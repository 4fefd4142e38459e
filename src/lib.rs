//! # Waveshade - Colorized Waveform Thumbnails
//!
//! Converts a decoded audio waveform into a compact raster image: pixel
//! color encodes local spectral centroid (the perceived "brightness" of the
//! sound at that moment), pixel vertical extent encodes local loudness.
//!
//! ## Architecture
//!
//! Waveshade is an umbrella crate that coordinates:
//! - **waveshade-decode** - Audio file decoding (symphonia)
//! - **waveshade-analysis** - Windowing, envelope, spectral centroid, color
//! - **waveshade-render** - Pixel buffer construction and column drawing
//! - **waveshade-encode** - PNG serialization
//!
//! Data flows strictly left-to-right: decoded samples → sampler → ordered
//! (min, max, color) columns → renderer → pixel buffer → PNG bytes.
//!
//! ## Quick Start
//!
//! ```no_run
//! use waveshade::{render_thumbnail, ThumbnailOptions};
//!
//! render_thumbnail(
//!     "input.flac",
//!     "thumb.png",
//!     &ThumbnailOptions::new(500, 171),
//! )?;
//! # Ok::<(), waveshade::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `default` / `files` - All audio formats
//! - `wav`, `flac`, `mp3`, `ogg` - Individual format support
//! - `serialization` - Serde derives on analysis output

pub mod error;
mod options;
mod pipeline;

/// Re-export of the analysis crate for direct access
pub use waveshade_analysis as analysis;
/// Re-export of the decode crate for direct access
pub use waveshade_decode as decode;
/// Re-export of the encode crate for direct access
pub use waveshade_encode as encode;
/// Re-export of the render crate for direct access
pub use waveshade_render as render;

pub use error::{Error, Result};
pub use options::ThumbnailOptions;
pub use pipeline::{render_stream, render_thumbnail, render_thumbnail_bytes};

// Core pipeline types
pub use waveshade_analysis::{AnalysisOptions, ColumnSample, Palette, Rgb};
pub use waveshade_decode::SampleStream;
pub use waveshade_encode::{encode_png, encode_png_file};
pub use waveshade_render::{PixelBuffer, RenderOptions};

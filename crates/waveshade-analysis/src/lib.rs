//! # Waveshade Analysis
//!
//! Envelope and spectrum sampling for colorized waveform thumbnails.
//!
//! This crate implements the analysis half of the thumbnail pipeline:
//! - **Windowing**: partition a sample stream into one contiguous span per
//!   output column, as a pure function of (length, column count)
//! - **Envelope**: amplitude min/max per window
//! - **Spectral centroid**: Hann-windowed FFT centroid per window, the
//!   perceived "brightness" of the sound at that moment
//! - **Color mapping**: log-frequency palette from red/orange (dark sounds)
//!   to blue/violet (bright sounds)
//!
//! All functions operate on raw `&[f32]` sample buffers - no framework
//! dependencies.
//!
//! ## Example
//!
//! ```rust
//! use waveshade_analysis::{analyze, AnalysisOptions};
//!
//! let samples: Vec<f32> = (0..8000)
//!     .map(|i| (i as f32 * 0.3).sin() * 0.8)
//!     .collect();
//!
//! let columns = analyze(&samples, 1, 8000, 100, &AnalysisOptions::default()).unwrap();
//! assert_eq!(columns.len(), 100);
//! ```

pub mod centroid;
pub mod color;
pub mod error;
pub mod sampler;
pub mod window;

pub use centroid::{CentroidAnalyzer, DEFAULT_FFT_SIZE};
pub use color::{normalized_position, Palette, Rgb, CENTROID_CEIL_HZ, CENTROID_FLOOR_HZ};
pub use error::{AnalysisError, Result};
pub use sampler::{analyze, AnalysisOptions, ColumnSample};
pub use window::{window_bounds, Window};

//! Envelope & spectrum sampler
//!
//! Turns a decoded sample buffer into one [`ColumnSample`] per output
//! column: amplitude min/max over the column's window, the window's spectral
//! centroid, and the color the renderer will draw the column with.
//!
//! Analysis is two-phase: a per-window phase with no shared state (each
//! window only reads its own span of the input), then a global-peak
//! reduction that feeds the optional loudness modulation. Windows never
//! iterate past their own span, so per-column work is bounded by
//! construction.

use crate::centroid::{CentroidAnalyzer, DEFAULT_FFT_SIZE};
use crate::color::{Palette, Rgb};
use crate::error::{AnalysisError, Result};
use crate::window::{window_bounds, Window};

/// Derived per-window summary, index-aligned to output columns
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct ColumnSample {
    /// Minimum sample value in the window
    pub min: f32,
    /// Maximum sample value in the window
    pub max: f32,
    /// Spectral centroid in Hz, `None` for silent windows
    pub centroid_hz: Option<f32>,
    /// Color the column should be drawn with
    pub color: Rgb,
}

impl ColumnSample {
    /// Largest absolute amplitude in the window
    pub fn peak(&self) -> f32 {
        self.min.abs().max(self.max.abs())
    }
}

/// Sampler configuration
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Maximum FFT size for centroid analysis (rounded up to a power of two)
    pub fft_size: usize,
    /// Scale column brightness by relative loudness (peak vs. global peak)
    pub loudness_modulation: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            fft_size: DEFAULT_FFT_SIZE,
            loudness_modulation: false,
        }
    }
}

/// Brightness floor when loudness modulation is enabled, so quiet columns
/// remain visible instead of fading to background.
const MODULATION_FLOOR: f32 = 0.25;

/// Analyze interleaved samples into `columns` column summaries.
///
/// # Arguments
/// * `samples` - Interleaved audio samples, nominal range [-1.0, 1.0]
/// * `channels` - Number of interleaved channels (analysis reads channel 0)
/// * `sample_rate` - Sample rate in Hz
/// * `columns` - Target column count (= thumbnail width)
///
/// # Errors
/// [`AnalysisError::InsufficientData`] when the stream holds fewer frames
/// than `columns`. The remaining variants are internal invariants and do
/// not occur for inputs that pass that guard.
///
/// Output is deterministic: identical input always yields identical columns.
pub fn analyze(
    samples: &[f32],
    channels: usize,
    sample_rate: u32,
    columns: usize,
    options: &AnalysisOptions,
) -> Result<Vec<ColumnSample>> {
    if channels == 0 {
        return Err(AnalysisError::InsufficientData { frames: 0, columns });
    }

    let frames = samples.len() / channels;
    let windows = window_bounds(frames, columns)?;

    let mut analyzer = CentroidAnalyzer::with_fft_size(sample_rate, options.fft_size);
    let palette = Palette::new();

    // Phase 1: independent per-window analysis.
    let mut raw = Vec::with_capacity(columns);
    for (index, window) in windows.iter().enumerate() {
        raw.push(analyze_window(samples, channels, *window, index, &mut analyzer)?);
    }

    // Global-peak reduction; a plain max, so any evaluation order agrees.
    let global_peak = raw
        .iter()
        .map(|(min, max, _)| min.abs().max(max.abs()))
        .fold(0.0f32, f32::max);

    // Phase 2: color assignment against the global peak.
    let columns = raw
        .into_iter()
        .map(|(min, max, centroid_hz)| {
            let mut color = palette.color_for_centroid(centroid_hz);
            if options.loudness_modulation && global_peak > 0.0 {
                let ratio = min.abs().max(max.abs()) / global_peak;
                color = color.scaled(MODULATION_FLOOR + (1.0 - MODULATION_FLOOR) * ratio);
            }
            ColumnSample {
                min,
                max,
                centroid_hz,
                color,
            }
        })
        .collect();

    Ok(columns)
}

/// Amplitude range and centroid for a single window
fn analyze_window(
    samples: &[f32],
    channels: usize,
    window: Window,
    index: usize,
    analyzer: &mut CentroidAnalyzer,
) -> Result<(f32, f32, Option<f32>)> {
    if window.is_empty() {
        return Err(AnalysisError::DegenerateWindow { index });
    }

    let mut min = f32::MAX;
    let mut max = f32::MIN;
    let mut channel_samples = Vec::with_capacity(window.len());

    for frame in window.start..window.end {
        let sample = samples[frame * channels];
        min = min.min(sample);
        max = max.max(sample);
        channel_samples.push(sample);
    }

    // Exactly silent windows skip the transform; they have no meaningful
    // centroid and take the silence sentinel color.
    let centroid_hz = if min == 0.0 && max == 0.0 {
        None
    } else {
        analyzer.centroid_hz(&channel_samples)
    };

    if let Some(hz) = centroid_hz {
        if !hz.is_finite() {
            return Err(AnalysisError::NonFiniteCentroid { index });
        }
    }

    Ok((min, max, centroid_hz))
}

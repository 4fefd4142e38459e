//! Spectral centroid estimation
//!
//! Computes the magnitude-weighted mean frequency of a block of samples via
//! a Hann-windowed FFT. The centroid tracks the perceived "brightness" of
//! the sound: low for bass-heavy material, high for hissy or sibilant
//! material.

use rustfft::{num_complex::Complex, FftPlanner};

/// Default transform size in samples
pub const DEFAULT_FFT_SIZE: usize = 2048;

/// Magnitude sums below this are treated as silence (no centroid).
const SILENCE_EPSILON: f32 = 1e-10;

/// Spectral centroid analyzer
///
/// Holds the FFT planner so repeated calls across windows reuse plans.
pub struct CentroidAnalyzer {
    /// Sample rate in Hz
    sample_rate: u32,
    /// Maximum number of samples fed into one transform
    fft_size: usize,
    /// FFT planner
    fft_planner: FftPlanner<f32>,
}

impl CentroidAnalyzer {
    /// Create an analyzer for the given sample rate with the default
    /// transform size.
    pub fn new(sample_rate: u32) -> Self {
        Self::with_fft_size(sample_rate, DEFAULT_FFT_SIZE)
    }

    /// Create an analyzer with a custom maximum transform size.
    ///
    /// `fft_size` is rounded up to the next power of two.
    pub fn with_fft_size(sample_rate: u32, fft_size: usize) -> Self {
        Self {
            sample_rate,
            fft_size: fft_size.max(2).next_power_of_two(),
            fft_planner: FftPlanner::new(),
        }
    }

    /// Compute the spectral centroid of `samples` in Hz.
    ///
    /// Samples beyond the configured transform size are ignored; shorter
    /// blocks are zero-padded up to the next power of two. A Hann window is
    /// applied over the analyzed span to reduce edge artifacts. Only bins
    /// below Nyquist contribute.
    ///
    /// Returns `None` when total spectral magnitude is negligible, i.e. the
    /// block is silent or indistinguishable from silence.
    pub fn centroid_hz(&mut self, samples: &[f32]) -> Option<f32> {
        if samples.is_empty() {
            return None;
        }

        let analyzed = samples.len().min(self.fft_size);
        let padded = analyzed.next_power_of_two();

        let window = hann_window(analyzed);
        let mut buffer: Vec<Complex<f32>> = samples[..analyzed]
            .iter()
            .zip(window.iter())
            .map(|(s, w)| Complex::new(s * w, 0.0))
            .collect();
        buffer.resize(padded, Complex::new(0.0, 0.0));

        let fft = self.fft_planner.plan_fft_forward(padded);
        fft.process(&mut buffer);

        let bin_hz = self.sample_rate as f32 / padded as f32;
        let mut weighted = 0.0f32;
        let mut total = 0.0f32;

        // Bins below Nyquist; bin 0 (DC) carries zero frequency weight but
        // still counts toward the total magnitude.
        for (k, c) in buffer[..padded / 2].iter().enumerate() {
            let mag = c.norm();
            weighted += k as f32 * bin_hz * mag;
            total += mag;
        }

        if total <= SILENCE_EPSILON {
            return None;
        }

        Some(weighted / total)
    }
}

/// Hann window of the given length
fn hann_window(size: usize) -> Vec<f32> {
    if size == 1 {
        return vec![1.0];
    }
    (0..size)
        .map(|i| {
            let angle = 2.0 * core::f32::consts::PI * i as f32 / (size - 1) as f32;
            0.5 * (1.0 - angle.cos())
        })
        .collect()
}

//! Decoded sample stream

/// A fully decoded audio stream: interleaved f32 samples plus the format
/// facts the pipeline needs up front (sample rate, channel count, frame
/// count). Immutable once constructed.
#[derive(Debug, Clone)]
pub struct SampleStream {
    samples: Vec<f32>,
    sample_rate: u32,
    channels: usize,
}

impl SampleStream {
    /// Build a stream from interleaved samples.
    ///
    /// Any trailing partial frame is dropped so `samples.len()` is always a
    /// multiple of `channels`.
    ///
    /// # Panics
    /// Panics if `channels` is zero.
    pub fn from_interleaved(mut samples: Vec<f32>, sample_rate: u32, channels: usize) -> Self {
        assert!(channels > 0, "channel count must be positive");
        let frames = samples.len() / channels;
        samples.truncate(frames * channels);
        Self {
            samples,
            sample_rate,
            channels,
        }
    }

    /// Interleaved samples, nominal range [-1.0, 1.0]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of interleaved channels
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Number of frames (per-channel sample count)
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels
    }

    /// Stream duration in seconds
    pub fn duration_seconds(&self) -> f64 {
        self.frames() as f64 / self.sample_rate as f64
    }

    /// Check if the stream holds no frames
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

//! Thumbnail pipeline options

use waveshade_analysis::{Rgb, DEFAULT_FFT_SIZE};

/// Options for [`render_thumbnail`](crate::render_thumbnail).
///
/// The defaults match the classic waveform-preview shape: a wide, short
/// strip with an odd height so the midline lands on a pixel row.
#[derive(Debug, Clone)]
pub struct ThumbnailOptions {
    /// Image width in pixels (= analysis column count)
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Background color
    pub background: Rgb,
    /// Maximum FFT size for spectral centroid analysis
    pub fft_size: usize,
    /// Dim quiet columns relative to the loudest one
    pub loudness_modulation: bool,
    /// Brighten the zero-amplitude midline
    pub midline_highlight: bool,
}

impl Default for ThumbnailOptions {
    fn default() -> Self {
        Self {
            width: 500,
            height: 171,
            background: Rgb::BLACK,
            fft_size: DEFAULT_FFT_SIZE,
            loudness_modulation: false,
            midline_highlight: true,
        }
    }
}

impl ThumbnailOptions {
    /// Options for a `width` × `height` thumbnail with default styling
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Set the background color
    pub fn background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    /// Set the maximum FFT size for centroid analysis
    pub fn fft_size(mut self, fft_size: usize) -> Self {
        self.fft_size = fft_size;
        self
    }

    /// Enable or disable loudness-based brightness modulation
    pub fn loudness_modulation(mut self, enabled: bool) -> Self {
        self.loudness_modulation = enabled;
        self
    }

    /// Enable or disable the midline highlight
    pub fn midline_highlight(mut self, enabled: bool) -> Self {
        self.midline_highlight = enabled;
        self
    }

    /// Check dimensional constraints.
    ///
    /// Zero width or height is a caller configuration mistake, reported
    /// before any I/O happens.
    pub(crate) fn validate(&self) -> crate::Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(crate::Error::Configuration(format!(
                "thumbnail dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.fft_size < 2 {
            return Err(crate::Error::Configuration(format!(
                "fft_size must be at least 2, got {}",
                self.fft_size
            )));
        }
        Ok(())
    }
}

//! Centroid-to-color mapping
//!
//! Maps a spectral centroid frequency onto an RGB color through a
//! log-frequency palette. Low centroids land on red/orange, high centroids
//! on blue/violet, so the thumbnail reads like the visible-light spectrum:
//! "warm" colors for dark sounds, "cool" colors for bright ones.
//!
//! The mapping is a pure function of frequency so it can be swapped or
//! tested independently of the analysis pipeline.

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from channel intensities
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale all channels by `factor` in [0, 1], saturating
    pub fn scaled(self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Self {
            r: (self.r as f32 * f) as u8,
            g: (self.g as f32 * f) as u8,
            b: (self.b as f32 * f) as u8,
        }
    }
}

/// Lower bound of the perceptual frequency range in Hz
pub const CENTROID_FLOOR_HZ: f32 = 100.0;

/// Upper bound of the perceptual frequency range in Hz
pub const CENTROID_CEIL_HZ: f32 = 22050.0;

/// Palette position assigned to silent windows (palette midpoint)
const SILENCE_POSITION: f32 = 0.5;

/// Control points interpolated into the palette, low frequency first.
const PALETTE_STOPS: [Rgb; 4] = [
    Rgb::new(255, 70, 0),  // red/orange: dark, bass-heavy
    Rgb::new(255, 224, 0), // yellow
    Rgb::new(0, 220, 80),  // green
    Rgb::new(50, 0, 200),  // blue/violet: bright, hissy
];

/// Number of discrete palette entries
const PALETTE_SIZE: usize = 256;

/// A discretized color palette over the normalized centroid range
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<Rgb>,
}

impl Palette {
    /// Build the palette by linear interpolation between [`PALETTE_STOPS`].
    pub fn new() -> Self {
        let mut entries = Vec::with_capacity(PALETTE_SIZE);
        let segments = PALETTE_STOPS.len() - 1;

        for i in 0..PALETTE_SIZE {
            let pos = i as f32 / (PALETTE_SIZE - 1) as f32 * segments as f32;
            let seg = (pos as usize).min(segments - 1);
            let alpha = pos - seg as f32;

            let a = PALETTE_STOPS[seg];
            let b = PALETTE_STOPS[seg + 1];
            entries.push(Rgb::new(
                lerp_u8(a.r, b.r, alpha),
                lerp_u8(a.g, b.g, alpha),
                lerp_u8(a.b, b.b, alpha),
            ));
        }

        Self { entries }
    }

    /// Color at a normalized position in [0, 1]
    pub fn at(&self, position: f32) -> Rgb {
        let clamped = position.clamp(0.0, 1.0);
        let index = (clamped * (PALETTE_SIZE - 1) as f32).round() as usize;
        self.entries[index]
    }

    /// Color for a centroid frequency, or the silence color for `None`.
    ///
    /// The frequency is clamped to `[CENTROID_FLOOR_HZ, CENTROID_CEIL_HZ]`
    /// and placed on a log10 scale, so equal musical intervals cover equal
    /// palette distance.
    pub fn color_for_centroid(&self, centroid_hz: Option<f32>) -> Rgb {
        match centroid_hz {
            Some(hz) => self.at(normalized_position(hz)),
            None => self.at(SILENCE_POSITION),
        }
    }

    /// The color assigned to silent windows
    pub fn silence_color(&self) -> Rgb {
        self.at(SILENCE_POSITION)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a centroid frequency to its normalized log-scale position in [0, 1]
pub fn normalized_position(centroid_hz: f32) -> f32 {
    let clamped = centroid_hz.clamp(CENTROID_FLOOR_HZ, CENTROID_CEIL_HZ);
    let lo = CENTROID_FLOOR_HZ.log10();
    let hi = CENTROID_CEIL_HZ.log10();
    (clamped.log10() - lo) / (hi - lo)
}

fn lerp_u8(a: u8, b: u8, alpha: f32) -> u8 {
    ((1.0 - alpha) * a as f32 + alpha * b as f32).round() as u8
}

//! Fixed-size RGB pixel buffer
//!
//! Row-major grid of [`Rgb`] values, built column-by-column by the renderer
//! and handed off read-only to the image encoder.

use waveshade_analysis::Rgb;

/// A width × height grid of RGB pixels, row 0 at the top
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    /// Create a buffer filled with `background`
    pub fn new(width: usize, height: usize, background: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; width * height],
        }
    }

    /// Buffer width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Buffer height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at (x, y)
    ///
    /// # Panics
    /// Panics when the coordinate is out of bounds, like slice indexing.
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.pixels[y * self.width + x]
    }

    /// Set the pixel at (x, y)
    ///
    /// # Panics
    /// Panics when the coordinate is out of bounds.
    pub fn set(&mut self, x: usize, y: usize, color: Rgb) {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.pixels[y * self.width + x] = color;
    }

    /// Fill a vertical run `[y_top, y_bottom]` in column `x`
    pub fn fill_column(&mut self, x: usize, y_top: usize, y_bottom: usize, color: Rgb) {
        for y in y_top..=y_bottom.min(self.height - 1) {
            self.set(x, y, color);
        }
    }

    /// Flatten to packed RGB8 bytes, top row first (PNG scanline order)
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for p in &self.pixels {
            bytes.push(p.r);
            bytes.push(p.g);
            bytes.push(p.b);
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_background_filled() {
        let bg = Rgb::new(10, 20, 30);
        let buf = PixelBuffer::new(4, 3, bg);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(buf.get(x, y), bg);
            }
        }
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut buf = PixelBuffer::new(5, 5, Rgb::BLACK);
        buf.set(2, 3, Rgb::WHITE);
        assert_eq!(buf.get(2, 3), Rgb::WHITE);
        assert_eq!(buf.get(3, 2), Rgb::BLACK);
    }

    #[test]
    fn test_fill_column() {
        let mut buf = PixelBuffer::new(3, 10, Rgb::BLACK);
        buf.fill_column(1, 2, 6, Rgb::WHITE);
        for y in 0..10 {
            let expected = if (2..=6).contains(&y) { Rgb::WHITE } else { Rgb::BLACK };
            assert_eq!(buf.get(1, y), expected);
        }
    }

    #[test]
    fn test_rgb_bytes_layout() {
        let mut buf = PixelBuffer::new(2, 2, Rgb::BLACK);
        buf.set(1, 0, Rgb::new(1, 2, 3));
        let bytes = buf.to_rgb_bytes();
        assert_eq!(bytes.len(), 12);
        // (1, 0) is the second pixel of the first row
        assert_eq!(&bytes[3..6], &[1, 2, 3]);
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_panics() {
        let buf = PixelBuffer::new(2, 2, Rgb::BLACK);
        let _ = buf.get(2, 0);
    }
}

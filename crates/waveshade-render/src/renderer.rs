//! Thumbnail renderer
//!
//! Draws per-column (amplitude range, color) pairs into a [`PixelBuffer`].
//! Columns are scaled against the single global peak so relative loudness
//! is preserved across the image; the loudest column fills the available
//! height minus a small margin.

use crate::buffer::PixelBuffer;
use crate::error::{RenderError, Result};
use waveshade_analysis::{ColumnSample, Rgb};

/// Vertical margin in pixels kept clear above and below the loudest column
const VERTICAL_MARGIN: usize = 2;

/// Amount added to each channel of the midline row
const MIDLINE_HIGHLIGHT: u8 = 25;

/// Renderer configuration
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Color for pixels outside any column segment
    pub background: Rgb,
    /// Brighten the zero-amplitude midline so the time axis stays visible
    pub midline_highlight: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            background: Rgb::BLACK,
            midline_highlight: true,
        }
    }
}

/// Render column samples into a pixel buffer of the given height.
///
/// Width equals `columns.len()`. The global maximum absolute amplitude
/// defines the vertical scale; a completely silent input draws every column
/// as a single pixel on the midline (scale factor 0, no division).
///
/// Pure function of its inputs: no I/O, no hidden state.
pub fn render(columns: &[ColumnSample], height: usize, options: &RenderOptions) -> Result<PixelBuffer> {
    if height == 0 {
        return Err(RenderError::InvalidHeight(height));
    }
    if columns.is_empty() {
        return Err(RenderError::NoColumns);
    }

    let mut buffer = PixelBuffer::new(columns.len(), height, options.background);

    let global_peak = columns.iter().map(ColumnSample::peak).fold(0.0f32, f32::max);
    let half_span = height.saturating_sub(2 * VERTICAL_MARGIN) as f32 / 2.0;
    let scale = if global_peak > 0.0 {
        half_span / global_peak
    } else {
        0.0
    };

    let midline = (height / 2) as isize;
    let max_y = (height - 1) as isize;

    for (x, column) in columns.iter().enumerate() {
        // Positive amplitude extends upward (toward row 0).
        let y_top = (midline - (column.max * scale).round() as isize).clamp(0, max_y);
        let y_bottom = (midline - (column.min * scale).round() as isize).clamp(0, max_y);
        buffer.fill_column(x, y_top as usize, y_bottom as usize, column.color);
    }

    if options.midline_highlight {
        highlight_midline(&mut buffer, midline as usize);
    }

    Ok(buffer)
}

/// Brighten the midline row, saturating at white
fn highlight_midline(buffer: &mut PixelBuffer, midline: usize) {
    for x in 0..buffer.width() {
        let p = buffer.get(x, midline);
        buffer.set(
            x,
            midline,
            Rgb::new(
                p.r.saturating_add(MIDLINE_HIGHLIGHT),
                p.g.saturating_add(MIDLINE_HIGHLIGHT),
                p.b.saturating_add(MIDLINE_HIGHLIGHT),
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(min: f32, max: f32, color: Rgb) -> ColumnSample {
        ColumnSample {
            min,
            max,
            centroid_hz: None,
            color,
        }
    }

    fn no_highlight() -> RenderOptions {
        RenderOptions {
            midline_highlight: false,
            ..Default::default()
        }
    }

    /// Number of non-background pixels in column x
    fn column_extent(buffer: &PixelBuffer, x: usize, background: Rgb) -> usize {
        (0..buffer.height())
            .filter(|&y| buffer.get(x, y) != background)
            .count()
    }

    #[test]
    fn test_dimensions() {
        let columns = vec![column(-0.5, 0.5, Rgb::WHITE); 30];
        let buffer = render(&columns, 40, &no_highlight()).unwrap();
        assert_eq!(buffer.width(), 30);
        assert_eq!(buffer.height(), 40);
    }

    #[test]
    fn test_loudest_column_fills_most_of_height() {
        let color = Rgb::new(200, 50, 50);
        let columns = vec![
            column(-1.0, 1.0, color),
            column(-0.25, 0.25, color),
        ];
        let buffer = render(&columns, 40, &no_highlight()).unwrap();

        let loud = column_extent(&buffer, 0, Rgb::BLACK);
        let quiet = column_extent(&buffer, 1, Rgb::BLACK);

        // Loudest column spans the height minus the margins; the quiet one
        // is scaled against the same global peak, not independently.
        assert!(loud >= 40 - 2 * VERTICAL_MARGIN - 1, "extent {loud}");
        assert!(quiet < loud / 2, "quiet {quiet} vs loud {loud}");
        assert!(quiet >= 1);
    }

    #[test]
    fn test_silent_input_draws_midline_pixels() {
        let columns = vec![column(0.0, 0.0, Rgb::WHITE); 8];
        let buffer = render(&columns, 41, &no_highlight()).unwrap();

        for x in 0..8 {
            assert_eq!(column_extent(&buffer, x, Rgb::BLACK), 1);
            assert_eq!(buffer.get(x, 20), Rgb::WHITE);
        }
    }

    #[test]
    fn test_asymmetric_amplitude() {
        // All-positive window: segment sits entirely above the midline.
        let columns = vec![column(0.2, 0.9, Rgb::WHITE)];
        let buffer = render(&columns, 41, &no_highlight()).unwrap();

        let midline = 20;
        for y in midline + 1..41 {
            assert_eq!(buffer.get(0, y), Rgb::BLACK, "row {y} below midline");
        }
        assert!(column_extent(&buffer, 0, Rgb::BLACK) > 1);
    }

    #[test]
    fn test_midline_highlight_brightens_background() {
        let columns = vec![column(0.0, 0.0, Rgb::BLACK); 4];
        let options = RenderOptions::default();
        let buffer = render(&columns, 21, &options).unwrap();

        let p = buffer.get(0, 10);
        assert_eq!(
            p,
            Rgb::new(MIDLINE_HIGHLIGHT, MIDLINE_HIGHLIGHT, MIDLINE_HIGHLIGHT)
        );
    }

    #[test]
    fn test_background_color_respected() {
        let bg = Rgb::new(213, 217, 221);
        let columns = vec![column(-0.1, 0.1, Rgb::BLACK); 2];
        let options = RenderOptions {
            background: bg,
            midline_highlight: false,
        };
        let buffer = render(&columns, 20, &options).unwrap();
        assert_eq!(buffer.get(0, 0), bg);
        assert_eq!(buffer.get(1, 19), bg);
    }

    #[test]
    fn test_tiny_heights_do_not_panic() {
        let columns = vec![column(-1.0, 1.0, Rgb::WHITE); 3];
        for height in 1..6 {
            let buffer = render(&columns, height, &RenderOptions::default()).unwrap();
            assert_eq!(buffer.height(), height);
        }
    }

    #[test]
    fn test_zero_height_rejected() {
        let columns = vec![column(-1.0, 1.0, Rgb::WHITE)];
        assert!(matches!(
            render(&columns, 0, &RenderOptions::default()),
            Err(RenderError::InvalidHeight(0))
        ));
    }

    #[test]
    fn test_empty_columns_rejected() {
        assert!(matches!(
            render(&[], 10, &RenderOptions::default()),
            Err(RenderError::NoColumns)
        ));
    }
}

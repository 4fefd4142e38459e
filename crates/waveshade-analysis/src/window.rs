//! Window boundary computation
//!
//! Partitions a sample stream into one contiguous span per output column.
//! The partition is a pure function of (total frame count, column count):
//! no iteration state, no rounding drift, trivially testable.

use crate::error::{AnalysisError, Result};

/// A half-open frame range `[start, end)` assigned to one output column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Window {
    /// First frame of the window (inclusive)
    pub start: usize,
    /// End frame of the window (exclusive)
    pub end: usize,
}

impl Window {
    /// Number of frames in the window
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the window contains no frames
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Compute window boundaries dividing `total_frames` into `columns`
/// contiguous spans.
///
/// Boundary `i` is `round(i * total_frames / columns)`, which keeps window
/// lengths within one frame of each other and covers the input exactly:
/// windows are contiguous, non-overlapping, and their union is
/// `[0, total_frames)`.
///
/// # Errors
/// Returns [`AnalysisError::InsufficientData`] when `total_frames < columns`
/// (or either count is zero), since that would force an empty window.
pub fn window_bounds(total_frames: usize, columns: usize) -> Result<Vec<Window>> {
    if columns == 0 || total_frames < columns {
        return Err(AnalysisError::InsufficientData {
            frames: total_frames,
            columns,
        });
    }

    let mut windows = Vec::with_capacity(columns);
    let mut start = 0usize;

    for i in 1..=columns {
        // Rounded boundary; u128 keeps the product exact for any real file.
        let end = ((i as u128 * total_frames as u128 + columns as u128 / 2)
            / columns as u128) as usize;

        if end <= start {
            return Err(AnalysisError::DegenerateWindow { index: i - 1 });
        }

        windows.push(Window { start, end });
        start = end;
    }

    Ok(windows)
}

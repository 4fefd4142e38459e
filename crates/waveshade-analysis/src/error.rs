//! Error types for waveshade-analysis

use thiserror::Error;

/// Analysis error type
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Fewer source frames than requested columns; every column needs at
    /// least one sample.
    #[error("insufficient data: {frames} frames cannot fill {columns} columns")]
    InsufficientData { frames: usize, columns: usize },

    /// A window resolved to zero length even though the input was long
    /// enough. This indicates a boundary-computation bug, not bad input.
    #[error("internal invariant violated: window {index} is empty")]
    DegenerateWindow { index: usize },

    /// A non-finite centroid escaped the silence guard. Internal invariant,
    /// never expected on real input.
    #[error("internal invariant violated: non-finite centroid in window {index}")]
    NonFiniteCentroid { index: usize },
}

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

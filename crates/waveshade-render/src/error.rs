//! Error types for waveshade-render

use thiserror::Error;

/// Render error type
#[derive(Error, Debug)]
pub enum RenderError {
    /// The thumbnail height must be at least one pixel
    #[error("invalid height: {0} (must be positive)")]
    InvalidHeight(usize),

    /// There is nothing to draw without columns
    #[error("no columns to render")]
    NoColumns,
}

/// Result type for render operations
pub type Result<T> = std::result::Result<T, RenderError>;

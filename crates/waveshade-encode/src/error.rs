//! Error types for waveshade-encode

use std::io;
use thiserror::Error;

/// Encode error type
#[derive(Error, Debug)]
pub enum EncodeError {
    /// PNG serialization failed
    #[error("PNG encoding failed: {0}")]
    Png(#[from] png::EncodingError),

    /// I/O error while writing the output file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The pixel buffer has a zero dimension
    #[error("cannot encode empty image ({width}x{height})")]
    EmptyImage { width: usize, height: usize },
}

/// Result type for encode operations
pub type Result<T> = std::result::Result<T, EncodeError>;

//! Error types for waveshade-decode

use std::io;
use thiserror::Error;

/// Decode error type
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The input file could not be opened or read
    #[error("unreadable file {path}: {source}")]
    UnreadableFile {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The container or codec is unknown, unsupported, or corrupt
    #[error("unsupported codec or container: {0}")]
    UnsupportedCodec(String),

    /// The container holds no decodable audio track
    #[error("no audio track found")]
    NoAudioTrack,

    /// The track does not declare a sample rate
    #[error("sample rate not reported by decoder")]
    MissingSampleRate,

    /// Decoding finished without producing a single audio frame
    #[error("decoded stream is empty")]
    EmptyStream,
}

/// Result type for decode operations
pub type Result<T> = std::result::Result<T, DecodeError>;

//! Centralized error type for the waveshade umbrella crate.
//!
//! Wraps all subsystem errors so `?` propagates naturally across crate
//! boundaries, with the failing pipeline stage named in every message.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("decode: {0}")]
    Decode(#[from] waveshade_decode::DecodeError),

    #[error("analyze: {0}")]
    Analysis(#[from] waveshade_analysis::AnalysisError),

    #[error("render: {0}")]
    Render(#[from] waveshade_render::RenderError),

    #[error("encode: {0}")]
    Encode(#[from] waveshade_encode::EncodeError),

    #[error("configuration: {0}")]
    Configuration(String),

    #[error("I/O: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The pipeline stage that produced this error
    pub fn stage(&self) -> &'static str {
        match self {
            Error::Decode(_) => "decode",
            Error::Analysis(_) => "analyze",
            Error::Render(_) => "render",
            Error::Encode(_) | Error::Io(_) => "encode",
            Error::Configuration(_) => "configuration",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

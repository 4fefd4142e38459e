//! # Waveshade Decode
//!
//! Audio file decoding for the waveshade thumbnail pipeline.
//!
//! Wraps symphonia behind the narrow collaborator contract the pipeline
//! needs: `decode(path)` yields an immutable [`SampleStream`] with its
//! sample rate, channel count, and frame count, or a typed [`DecodeError`].
//!
//! ## Feature Flags
//!
//! Each format pulls in only its own codec, mirroring symphonia's feature
//! set:
//!
//! - `wav` - WAV/PCM (including ADPCM variants)
//! - `flac` - FLAC
//! - `mp3` - MP3
//! - `ogg` - OGG/Vorbis

pub mod decode;
pub mod error;
pub mod stream;

pub use decode::decode;
pub use error::{DecodeError, Result};
pub use stream::SampleStream;

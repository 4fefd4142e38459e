//! File decoding via symphonia
//!
//! Probes the container, selects the first audio track, and decodes the
//! whole file into a [`SampleStream`]. The packet loop is bounded by the
//! container's packet stream, so a malformed file ends in a typed error or
//! a truncated stream, never a hang.

use std::fs::File;
use std::path::Path;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::{DecodeError, Result};
use crate::stream::SampleStream;

/// Decode an audio file into a [`SampleStream`].
///
/// Reports sample rate, channel count, and frame count through the returned
/// stream; the entire file is decoded before returning, so those facts are
/// exact rather than header estimates.
///
/// # Errors
/// - [`DecodeError::UnreadableFile`] when the path cannot be opened
/// - [`DecodeError::UnsupportedCodec`] when probing or decoder creation fails
/// - [`DecodeError::NoAudioTrack`] / [`DecodeError::MissingSampleRate`] for
///   containers without usable audio metadata
/// - [`DecodeError::EmptyStream`] when no audio frame could be decoded
pub fn decode(path: impl AsRef<Path>) -> Result<SampleStream> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| DecodeError::UnreadableFile {
        path: path.display().to_string(),
        source: e,
    })?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(extension) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(extension);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| DecodeError::UnsupportedCodec(e.to_string()))?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or(DecodeError::NoAudioTrack)?;
    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or(DecodeError::MissingSampleRate)?;
    let mut channels = track.codec_params.channels.map(|c| c.count());

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| DecodeError::UnsupportedCodec(e.to_string()))?;

    log::debug!(
        "decoding {}: {} Hz, {:?} channels",
        path.display(),
        sample_rate,
        channels
    );

    let mut samples: Vec<f32> = Vec::new();
    let mut sample_buf: Option<SampleBuffer<f32>> = None;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            // Normal end of stream surfaces as an UnexpectedEof I/O error.
            Err(SymphoniaError::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => {
                if samples.is_empty() {
                    return Err(DecodeError::UnsupportedCodec(e.to_string()));
                }
                // Broken trailer after valid audio: keep what we have.
                log::warn!("packet stream ended early: {e}");
                break;
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                if channels.is_none() {
                    channels = Some(decoded.spec().channels.count());
                }
                if sample_buf.is_none() {
                    sample_buf = Some(SampleBuffer::new(
                        decoded.capacity() as u64,
                        *decoded.spec(),
                    ));
                }
                if let Some(buf) = sample_buf.as_mut() {
                    buf.copy_interleaved_ref(decoded);
                    samples.extend_from_slice(buf.samples());
                }
            }
            Err(SymphoniaError::DecodeError(e)) => {
                // Recoverable per-packet corruption; skip and continue.
                log::warn!("skipping undecodable packet: {e}");
                continue;
            }
            Err(e) => {
                if samples.is_empty() {
                    return Err(DecodeError::UnsupportedCodec(e.to_string()));
                }
                log::warn!("decoder failed mid-stream: {e}");
                break;
            }
        }
    }

    let channels = channels.filter(|&c| c > 0).ok_or(DecodeError::EmptyStream)?;
    if samples.len() < channels {
        return Err(DecodeError::EmptyStream);
    }

    let stream = SampleStream::from_interleaved(samples, sample_rate, channels);
    log::debug!(
        "decoded {} frames ({:.2}s)",
        stream.frames(),
        stream.duration_seconds()
    );
    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file() {
        let err = decode("/nonexistent/missing.wav").unwrap_err();
        assert!(matches!(err, DecodeError::UnreadableFile { .. }));
    }

    #[test]
    fn test_garbage_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noise.wav");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"this is definitely not audio").unwrap();
        drop(file);

        let err = decode(&path).unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedCodec(_)));
    }

    #[cfg(feature = "wav")]
    mod wav {
        use super::*;
        use approx::assert_relative_eq;

        fn write_sine_wav(path: &Path, frequency: f32, sample_rate: u32, frames: usize) {
            let spec = hound::WavSpec {
                channels: 1,
                sample_rate,
                bits_per_sample: 16,
                sample_format: hound::SampleFormat::Int,
            };
            let mut writer = hound::WavWriter::create(path, spec).unwrap();
            for i in 0..frames {
                let t = i as f32 / sample_rate as f32;
                let s = (2.0 * std::f32::consts::PI * frequency * t).sin();
                writer.write_sample((s * i16::MAX as f32) as i16).unwrap();
            }
            writer.finalize().unwrap();
        }

        #[test]
        fn test_decode_wav_reports_format() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("tone.wav");
            write_sine_wav(&path, 440.0, 8000, 8000);

            let stream = decode(&path).unwrap();
            assert_eq!(stream.sample_rate(), 8000);
            assert_eq!(stream.channels(), 1);
            assert_eq!(stream.frames(), 8000);
            assert_relative_eq!(stream.duration_seconds(), 1.0, epsilon = 1e-9);

            let peak = stream
                .samples()
                .iter()
                .fold(0.0f32, |a, s| a.max(s.abs()));
            assert!(peak > 0.9 && peak <= 1.0, "peak {peak}");
        }
    }
}

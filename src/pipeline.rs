//! Thumbnail pipeline entry point
//!
//! Runs the four stages in sequence: decode → analyze → render → encode.
//! Data flows strictly forward; the output file is written only after the
//! full image has been encoded in memory, so a failure at any stage leaves
//! no partial file behind.

use std::path::Path;

use waveshade_analysis::{analyze, AnalysisOptions};
use waveshade_decode::{decode, SampleStream};
use waveshade_encode::encode_png;
use waveshade_render::{render, PixelBuffer, RenderOptions};

use crate::error::Result;
use crate::options::ThumbnailOptions;

/// Render a colorized waveform thumbnail of `input` and write it to
/// `output` as a PNG.
///
/// # Errors
/// Every failure carries its stage: decoding problems surface as
/// [`Error::Decode`](crate::Error::Decode), a stream shorter than `width`
/// as [`Error::Analysis`](crate::Error::Analysis) (insufficient data),
/// invalid dimensions as [`Error::Configuration`](crate::Error::Configuration),
/// and serialization problems as [`Error::Encode`](crate::Error::Encode).
pub fn render_thumbnail(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &ThumbnailOptions,
) -> Result<()> {
    let bytes = render_thumbnail_bytes(input, options)?;
    std::fs::write(output, bytes)?;
    Ok(())
}

/// Like [`render_thumbnail`], but returns the encoded PNG bytes instead of
/// writing a file.
pub fn render_thumbnail_bytes(
    input: impl AsRef<Path>,
    options: &ThumbnailOptions,
) -> Result<Vec<u8>> {
    options.validate()?;

    let stream = decode(input.as_ref())?;
    log::debug!(
        "decoded {}: {} Hz, {} ch, {} frames",
        input.as_ref().display(),
        stream.sample_rate(),
        stream.channels(),
        stream.frames()
    );

    let buffer = render_stream(&stream, options)?;

    let bytes = encode_png(&buffer)?;
    log::debug!("encoded {}x{} PNG, {} bytes", buffer.width(), buffer.height(), bytes.len());
    Ok(bytes)
}

/// Analyze and render an already-decoded stream into a pixel buffer.
///
/// Useful when the caller decodes audio itself or wants the raw pixels.
pub fn render_stream(stream: &SampleStream, options: &ThumbnailOptions) -> Result<PixelBuffer> {
    options.validate()?;

    let analysis_options = AnalysisOptions {
        fft_size: options.fft_size,
        loudness_modulation: options.loudness_modulation,
    };
    let columns = analyze(
        stream.samples(),
        stream.channels(),
        stream.sample_rate(),
        options.width as usize,
        &analysis_options,
    )?;
    log::debug!("analyzed {} columns", columns.len());

    let render_options = RenderOptions {
        background: options.background,
        midline_highlight: options.midline_highlight,
    };
    let buffer = render(&columns, options.height as usize, &render_options)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use waveshade_analysis::AnalysisError;

    fn tone_stream(frequency: f32, sample_rate: u32, frames: usize) -> SampleStream {
        let samples: Vec<f32> = (0..frames)
            .map(|i| {
                let t = i as f32 / sample_rate as f32;
                (2.0 * std::f32::consts::PI * frequency * t).sin()
            })
            .collect();
        SampleStream::from_interleaved(samples, sample_rate, 1)
    }

    #[test]
    fn test_render_stream_dimensions() {
        let stream = tone_stream(440.0, 8000, 8000);
        let options = ThumbnailOptions::new(100, 40);
        let buffer = render_stream(&stream, &options).unwrap();
        assert_eq!(buffer.width(), 100);
        assert_eq!(buffer.height(), 40);
    }

    #[test]
    fn test_configuration_rejected_before_analysis() {
        let stream = tone_stream(440.0, 8000, 100);
        let err = render_stream(&stream, &ThumbnailOptions::new(10, 0)).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert_eq!(err.stage(), "configuration");
    }

    #[test]
    fn test_short_stream_is_insufficient_data() {
        let stream = tone_stream(440.0, 8000, 50);
        let err = render_stream(&stream, &ThumbnailOptions::new(100, 40)).unwrap_err();
        assert!(matches!(
            err,
            Error::Analysis(AnalysisError::InsufficientData { .. })
        ));
        assert_eq!(err.stage(), "analyze");
    }

    #[test]
    fn test_missing_input_is_decode_error() {
        let err =
            render_thumbnail_bytes("/nonexistent/audio.wav", &ThumbnailOptions::new(10, 10))
                .unwrap_err();
        assert_eq!(err.stage(), "decode");
    }
}

//! # Waveshade Encode
//!
//! PNG serialization of finished [`PixelBuffer`]s.
//!
//! The encoder is the pipeline's output collaborator: it turns a fully
//! populated pixel buffer into PNG bytes. The file-writing variant encodes
//! to memory first, so a failed encode never leaves a partial file behind.

pub mod error;

use std::fs;
use std::path::Path;

use waveshade_render::PixelBuffer;

pub use error::{EncodeError, Result};

/// Encode a pixel buffer as RGB8 PNG bytes.
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>> {
    if buffer.width() == 0 || buffer.height() == 0 {
        return Err(EncodeError::EmptyImage {
            width: buffer.width(),
            height: buffer.height(),
        });
    }

    let mut bytes = Vec::new();
    {
        let mut encoder =
            png::Encoder::new(&mut bytes, buffer.width() as u32, buffer.height() as u32);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&buffer.to_rgb_bytes())?;
        writer.finish()?;
    }
    Ok(bytes)
}

/// Encode a pixel buffer and write it to `path`.
///
/// Bytes are fully produced in memory before the file is created; no
/// partial or corrupt image is ever left on disk.
pub fn encode_png_file(buffer: &PixelBuffer, path: impl AsRef<Path>) -> Result<()> {
    let bytes = encode_png(buffer)?;
    fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use waveshade_render::Rgb;

    #[test]
    fn test_encode_has_png_signature() {
        let buffer = PixelBuffer::new(16, 9, Rgb::new(10, 20, 30));
        let bytes = encode_png(&buffer).unwrap();

        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']);
        assert!(bytes.len() > 8);
    }

    #[test]
    fn test_encode_rejects_empty() {
        let buffer = PixelBuffer::new(0, 9, Rgb::BLACK);
        assert!(matches!(
            encode_png(&buffer),
            Err(EncodeError::EmptyImage { .. })
        ));
    }

    #[test]
    fn test_encode_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("thumb.png");

        let buffer = PixelBuffer::new(4, 4, Rgb::WHITE);
        encode_png_file(&buffer, &path).unwrap();

        let on_disk = std::fs::read(&path).unwrap();
        assert_eq!(on_disk, encode_png(&buffer).unwrap());
    }
}

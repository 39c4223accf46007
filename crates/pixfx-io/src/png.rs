//! PNG format support.
//!
//! Decodes to normalized `[0, 1]` floats and encodes 8-bit output. No
//! gamma handling happens here; see [`ImageStore`](crate::ImageStore).
//!
//! # Features
//!
//! - 8-bit and 16-bit input
//! - RGB and RGBA; grayscale is expanded to RGB
//! - Palette and sub-byte input via `png::Transformations::EXPAND`
//!
//! # Example
//!
//! ```rust,ignore
//! use pixfx_io::png::{read, write};
//!
//! let image = read("input.png")?;
//! write("output.png", image.width, image.height, image.channels, &image.data)?;
//! ```

use crate::{IoError, IoResult};
use pixfx_core::{Error, PixelBuffer};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Seek, Write};
use std::path::Path;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Decoded PNG as normalized floats, row-major with interleaved channels.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    /// Pixel columns.
    pub width: usize,
    /// Pixel rows.
    pub height: usize,
    /// 3 (RGB) or 4 (RGBA).
    pub channels: usize,
    /// `width * height * channels` values in `[0, 1]`.
    pub data: Vec<f32>,
}

impl DecodedImage {
    /// Iterates over rows of `width * channels` values.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, f32> {
        self.data.chunks_exact(self.width * self.channels)
    }

    /// Wraps the decoded values in a [`PixelBuffer`] without conversion.
    pub fn into_buffer(self) -> IoResult<PixelBuffer> {
        Ok(PixelBuffer::from_decoded(
            self.data,
            self.width,
            self.height,
            self.channels,
        )?)
    }
}

/// Reads a PNG file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<DecodedImage> {
    let path = path.as_ref();
    trace!(path = %path.display(), "png::read");
    let file = File::open(path)?;
    read_from(BufReader::new(file))
}

/// Reads a PNG stream.
pub fn read_from<R: BufRead + Seek>(reader: R) -> IoResult<DecodedImage> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;
    let bytes = &buf[..info.buffer_size()];

    let samples: Vec<f32> = match info.bit_depth {
        png::BitDepth::Eight => bytes.iter().map(|&v| v as f32 / 255.0).collect(),
        png::BitDepth::Sixteen => bytes
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]) as f32 / 65535.0)
            .collect(),
        depth => {
            return Err(IoError::UnsupportedFormat(format!(
                "{:?} {:?}",
                info.color_type, depth
            )));
        }
    };

    let (channels, data) = match info.color_type {
        png::ColorType::Rgb => (3, samples),
        png::ColorType::Rgba => (4, samples),
        png::ColorType::Grayscale => {
            debug!("Expanding grayscale PNG to RGB");
            (3, samples.iter().flat_map(|&g| [g, g, g]).collect())
        }
        png::ColorType::GrayscaleAlpha => {
            debug!("Expanding grayscale+alpha PNG to RGBA");
            (
                4,
                samples
                    .chunks_exact(2)
                    .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
                    .collect(),
            )
        }
        color_type => {
            return Err(IoError::UnsupportedFormat(format!(
                "{:?} {:?}",
                color_type, info.bit_depth
            )));
        }
    };

    Ok(DecodedImage {
        width: info.width as usize,
        height: info.height as usize,
        channels,
        data,
    })
}

/// Scales a `[0, 1]` value to 8 bits, clamping and rounding to nearest.
#[inline]
pub fn quantize(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Writes normalized floats to an 8-bit PNG file.
///
/// `data` holds `width * height * channels` values; out-of-range values are
/// clamped.
pub fn write<P: AsRef<Path>>(
    path: P,
    width: usize,
    height: usize,
    channels: usize,
    data: &[f32],
) -> IoResult<()> {
    let path = path.as_ref();
    trace!(path = %path.display(), width, height, channels, "png::write");
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_to(&mut writer, width, height, channels, data)?;
    writer.flush()?;
    Ok(())
}

/// Writes normalized floats as an 8-bit PNG stream.
pub fn write_to<W: Write>(
    writer: W,
    width: usize,
    height: usize,
    channels: usize,
    data: &[f32],
) -> IoResult<()> {
    let color_type = match channels {
        1 => png::ColorType::Grayscale,
        2 => png::ColorType::GrayscaleAlpha,
        3 => png::ColorType::Rgb,
        4 => png::ColorType::Rgba,
        n => return Err(IoError::EncodeError(format!("unsupported channel count: {n}"))),
    };
    if width == 0 || height == 0 {
        return Err(Error::invalid_dimensions(width, height, channels, "cannot encode empty image").into());
    }
    if data.len() != width * height * channels {
        return Err(Error::length_mismatch(width * height * channels, data.len()).into());
    }
    let w = u32::try_from(width).map_err(|_| IoError::EncodeError(format!("width {width} too large")))?;
    let h = u32::try_from(height).map_err(|_| IoError::EncodeError(format!("height {height} too large")))?;

    let mut encoder = png::Encoder::new(writer, w, h);
    encoder.set_color(color_type);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    let bytes: Vec<u8> = data.iter().map(|&v| quantize(v)).collect();

    png_writer
        .write_image_data(&bytes)
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    png_writer
        .finish()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode(width: usize, height: usize, channels: usize, data: &[f32]) -> Vec<u8> {
        let mut bytes = Vec::new();
        write_to(&mut bytes, width, height, channels, data).unwrap();
        bytes
    }

    #[test]
    fn test_quantize() {
        assert_eq!(quantize(-0.2), 0);
        assert_eq!(quantize(0.5), 128);
        assert_eq!(quantize(1.0), 255);
        assert_eq!(quantize(7.0), 255);
    }

    #[test]
    fn test_roundtrip_rgb() {
        let (width, height) = (8, 4);
        let mut data = Vec::with_capacity(width * height * 3);
        for y in 0..height {
            for x in 0..width {
                data.push(x as f32 * 32.0 / 255.0);
                data.push(y as f32 * 64.0 / 255.0);
                data.push(128.0 / 255.0);
            }
        }

        let loaded = read_from(Cursor::new(encode(width, height, 3, &data))).unwrap();

        assert_eq!((loaded.width, loaded.height, loaded.channels), (width, height, 3));
        for (a, b) in loaded.data.iter().zip(&data) {
            assert!((a - b).abs() < 1e-6);
        }
        assert_eq!(loaded.rows().count(), height);
    }

    #[test]
    fn test_roundtrip_rgba() {
        let data = vec![1.0, 0.0, 0.25, 1.0, 0.0, 1.0, 0.75, 0.5];
        let loaded = read_from(Cursor::new(encode(2, 1, 4, &data))).unwrap();
        assert_eq!(loaded.channels, 4);
        for (a, b) in loaded.data.iter().zip(&data) {
            assert!((a - b).abs() <= 0.5 / 255.0 + 1e-6);
        }
    }

    #[test]
    fn test_grayscale_expands_to_rgb() {
        let loaded = read_from(Cursor::new(encode(2, 2, 1, &[0.0, 1.0, 1.0, 0.0]))).unwrap();
        assert_eq!(loaded.channels, 3);
        assert_eq!(&loaded.data[..6], &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_write_rejects_bad_input() {
        let mut sink = Vec::new();
        assert!(matches!(
            write_to(&mut sink, 2, 2, 5, &[0.0; 20]).unwrap_err(),
            IoError::EncodeError(_)
        ));
        assert!(matches!(
            write_to(&mut sink, 2, 2, 3, &[0.0; 11]).unwrap_err(),
            IoError::Buffer(Error::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_read_garbage() {
        let err = read_from(Cursor::new(b"not a png".to_vec())).unwrap_err();
        assert!(matches!(err, IoError::DecodeError(_)));
    }

    #[test]
    fn test_into_buffer() {
        let loaded = read_from(Cursor::new(encode(3, 2, 3, &[0.5; 18]))).unwrap();
        let buf = loaded.into_buffer().unwrap();
        assert_eq!(buf.shape(), (3, 2, 3));
    }
}

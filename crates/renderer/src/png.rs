//! PNG encoding for 8-bit grayscale and RGB pixel data.
//!
//! The encoder writes the minimal chunk sequence a decoder needs:
//! signature, `IHDR`, a single zlib-compressed `IDAT` with filter type 0 on
//! every scanline, and `IEND`.

use crate::error::{RenderError, RenderResult};
use std::io::Write;

/// The eight-byte PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// PNG color types supported by this encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PngColor {
    /// One byte per pixel (color type 0).
    Gray,
    /// Three bytes per pixel (color type 2).
    Rgb,
}

impl PngColor {
    pub fn color_type(self) -> u8 {
        match self {
            PngColor::Gray => 0,
            PngColor::Rgb => 2,
        }
    }

    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PngColor::Gray => 1,
            PngColor::Rgb => 3,
        }
    }
}

/// Create a grayscale PNG from one byte per pixel.
pub fn create_png_gray(pixels: &[u8], width: usize, height: usize) -> RenderResult<Vec<u8>> {
    create_png(pixels, width, height, PngColor::Gray)
}

/// Create an RGB PNG from three bytes per pixel.
pub fn create_png_rgb(pixels: &[u8], width: usize, height: usize) -> RenderResult<Vec<u8>> {
    create_png(pixels, width, height, PngColor::Rgb)
}

/// Create a PNG with the given color layout.
///
/// # Arguments
/// - `pixels`: row-major pixel bytes, `bytes_per_pixel` per pixel
/// - `width`: Image width in pixels
/// - `height`: Image height in pixels
pub fn create_png(
    pixels: &[u8],
    width: usize,
    height: usize,
    color: PngColor,
) -> RenderResult<Vec<u8>> {
    if width == 0 || height == 0 || width > u32::MAX as usize || height > u32::MAX as usize {
        return Err(RenderError::InvalidDimensions { width, height });
    }

    let expected = width * height * color.bytes_per_pixel();
    if pixels.len() != expected {
        return Err(RenderError::BufferSize {
            width,
            height,
            expected,
            actual: pixels.len(),
        });
    }

    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);

    // IHDR chunk
    let mut ihdr_data = Vec::with_capacity(13);
    ihdr_data.extend_from_slice(&(width as u32).to_be_bytes());
    ihdr_data.extend_from_slice(&(height as u32).to_be_bytes());
    ihdr_data.push(8); // bit depth
    ihdr_data.push(color.color_type());
    ihdr_data.push(0); // compression method
    ihdr_data.push(0); // filter method
    ihdr_data.push(0); // interlace method
    write_chunk(&mut png, b"IHDR", &ihdr_data);

    let idat_data = deflate_idat(pixels, width * color.bytes_per_pixel(), height)
        .map_err(RenderError::Compression)?;
    write_chunk(&mut png, b"IDAT", &idat_data);

    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    // CRC covers the chunk type and data, not the length
    let crc_data = [chunk_type.as_slice(), data].concat();
    png.extend_from_slice(&crc32fast::hash(&crc_data).to_be_bytes());
}

fn deflate_idat(pixels: &[u8], stride: usize, height: usize) -> std::io::Result<Vec<u8>> {
    let mut uncompressed = Vec::with_capacity(height * (1 + stride));
    for row in pixels.chunks_exact(stride) {
        uncompressed.push(0); // filter type: none
        uncompressed.extend_from_slice(row);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder.write_all(&uncompressed)?;
    encoder.finish()
}

//! Error types for PNG output.

use image_common::ImageError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while encoding or writing a PNG.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Pixel buffer has {actual} bytes, expected {expected} for {width}x{height}")]
    BufferSize {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Image dimensions {width}x{height} are not encodable")]
    InvalidDimensions { width: usize, height: usize },

    #[error("IDAT compression failed: {0}")]
    Compression(#[source] std::io::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Image(#[from] ImageError),
}

pub type RenderResult<T> = Result<T, RenderError>;

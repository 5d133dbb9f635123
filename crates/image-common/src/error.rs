//! Error types for grid and image construction.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ImageError.
pub type ImageResult<T> = Result<T, ImageError>;

/// Errors raised while building, validating or decoding images.
#[derive(Debug, Error)]
pub enum ImageError {
    // === Shape Errors ===
    #[error("Data must not be empty")]
    EmptyData,

    #[error("Buffer of length {len} cannot form a {rows}x{cols} grid")]
    ShapeMismatch { rows: usize, cols: usize, len: usize },

    #[error("Row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Channel {channel} is {actual_rows}x{actual_cols}, expected {rows}x{cols}")]
    ChannelShapeMismatch {
        channel: usize,
        rows: usize,
        cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },

    // === Value Errors ===
    #[error("Pixel value {value} at ({row}, {col}) is outside [0, 1]")]
    ValueOutOfRange { row: usize, col: usize, value: f64 },

    #[error("Number of channels must be positive")]
    InvalidChannelCount,

    #[error("Channel {channel} is not valid, must be between 0 and {max}")]
    ChannelOutOfRange { channel: usize, max: usize },

    #[error("Pixel ({x}, {y}) is outside a {width}x{height} image")]
    PixelOutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    // === I/O Errors ===
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not decode {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },
}

impl ImageError {
    /// True for errors caused by the shape of the data rather than its values.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            ImageError::EmptyData
                | ImageError::ShapeMismatch { .. }
                | ImageError::RaggedRows { .. }
                | ImageError::ChannelShapeMismatch { .. }
        )
    }
}

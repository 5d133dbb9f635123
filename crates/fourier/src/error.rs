//! Error types for Fourier operations.

use image_common::ImageError;
use thiserror::Error;

/// Errors that can occur while transforming or filtering an image.
#[derive(Error, Debug)]
pub enum FourierError {
    /// An operation needs a transform but none has been computed or set.
    #[error("no transform has been applied to the image")]
    NoTransform,

    /// A filter cutoff is negative or not a number.
    #[error("invalid cutoff '{name}': {value} (must be a non-negative number)")]
    InvalidCutoff { name: &'static str, value: f64 },

    /// Band-pass cutoffs are out of order.
    #[error("lower cutoff {low} must not exceed upper cutoff {high}")]
    InvalidBand { low: f64, high: f64 },

    /// A replacement transform does not match the image shape.
    #[error("invalid transform size: expected {expected:?} (rows, cols), got {actual:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// The grid handed to the transform has no rows or no columns.
    #[error("cannot transform an empty {rows}x{cols} grid")]
    EmptyGrid { rows: usize, cols: usize },

    /// Unknown filter name in configuration.
    #[error("invalid filter type '{0}' (expected low, high or band)")]
    InvalidFilterType(String),

    /// Configuration value could not be used.
    #[error("configuration error: {0}")]
    InvalidConfig(String),

    /// The underlying image could not be built.
    #[error(transparent)]
    Image(#[from] ImageError),
}

/// Coarse classification of a [`FourierError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The transform state does not allow the operation.
    State,
    /// A parameter was rejected.
    Validation,
    /// The input grid is empty or malformed.
    Dimension,
}

impl FourierError {
    /// Which family of failure this is.
    pub fn category(&self) -> ErrorCategory {
        match self {
            FourierError::NoTransform => ErrorCategory::State,
            FourierError::EmptyGrid { .. } => ErrorCategory::Dimension,
            FourierError::Image(err) if err.is_shape_error() => ErrorCategory::Dimension,
            FourierError::InvalidCutoff { .. }
            | FourierError::InvalidBand { .. }
            | FourierError::DimensionMismatch { .. }
            | FourierError::InvalidFilterType(_)
            | FourierError::InvalidConfig(_)
            | FourierError::Image(_) => ErrorCategory::Validation,
        }
    }
}

/// Result type for Fourier operations.
pub type FourierResult<T> = std::result::Result<T, FourierError>;

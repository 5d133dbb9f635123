//! Common types and utilities shared across the imgproc workspace.
//!
//! - [`Grid`]: dense row-major 2D storage used for pixel channels and spectra
//! - [`Image`]: one or more same-shaped channels with values in `[0, 1]`
//! - [`ImageError`]: validation and decoding failures

pub mod error;
pub mod grid;
pub mod raster;

pub use error::{ImageError, ImageResult};
pub use grid::Grid;
pub use raster::{Image, LUMA_WEIGHTS};

//! PNG output for processed images.
//!
//! Converts normalized `[0, 1]` grids and images to 8-bit pixels and writes
//! them with a small self-contained PNG encoder:
//! - Grayscale (color type 0) for single-channel data
//! - RGB (color type 2) for three-channel data

pub mod error;
pub mod pixels;
pub mod png;

pub use error::{RenderError, RenderResult};
pub use pixels::{grid_to_luma, image_to_pixels, save_grid_png, save_image_png, ColorKind};

//! Conversion of normalized grids and images to 8-bit pixels, and PNG files.

use crate::error::{RenderError, RenderResult};
use crate::png;
use image_common::{Grid, Image};
use std::path::Path;
use tracing::{debug, info};

/// Pixel layout produced by [`image_to_pixels`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKind {
    Gray,
    Rgb,
}

/// Map `[0, 1]` values to bytes: clamp, scale by 255 and round.
///
/// NaN maps to 0.
pub fn grid_to_luma(grid: &Grid<f64>) -> Vec<u8> {
    grid.iter().map(|&v| to_byte(v)).collect()
}

fn to_byte(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Interleaved 8-bit pixels for an image.
///
/// One channel gives grayscale and three channels give RGB. Any other
/// channel count is reduced to grayscale first.
pub fn image_to_pixels(image: &Image) -> (Vec<u8>, ColorKind) {
    match image.channel_count() {
        1 => (grid_to_luma(&image.channels()[0]), ColorKind::Gray),
        3 => {
            let channels = image.channels();
            let mut pixels = Vec::with_capacity(image.width() * image.height() * 3);
            for ((r, g), b) in channels[0].iter().zip(channels[1].iter()).zip(channels[2].iter()) {
                pixels.extend_from_slice(&[to_byte(*r), to_byte(*g), to_byte(*b)]);
            }
            (pixels, ColorKind::Rgb)
        }
        _ => {
            let gray = image.reduce_channels();
            (grid_to_luma(&gray.channels()[0]), ColorKind::Gray)
        }
    }
}

/// Encode a single-channel grid as a grayscale PNG file.
pub fn save_grid_png(path: impl AsRef<Path>, grid: &Grid<f64>) -> RenderResult<()> {
    let bytes = png::create_png_gray(&grid_to_luma(grid), grid.cols(), grid.rows())?;
    write_file(path.as_ref(), &bytes)
}

/// Encode an image as a grayscale or RGB PNG file.
pub fn save_image_png(path: impl AsRef<Path>, image: &Image) -> RenderResult<()> {
    let (pixels, kind) = image_to_pixels(image);
    let bytes = match kind {
        ColorKind::Gray => png::create_png_gray(&pixels, image.width(), image.height())?,
        ColorKind::Rgb => png::create_png_rgb(&pixels, image.width(), image.height())?,
    };
    write_file(path.as_ref(), &bytes)
}

fn write_file(path: &Path, bytes: &[u8]) -> RenderResult<()> {
    debug!(path = %path.display(), bytes = bytes.len(), "Writing PNG");
    std::fs::write(path, bytes).map_err(|source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "Saved image");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_to_luma_rounds_and_clamps() {
        let grid = Grid::from_rows(vec![vec![0.0, 0.5, 1.0], vec![-0.2, 1.7, f64::NAN]]).unwrap();
        assert_eq!(grid_to_luma(&grid), vec![0, 128, 255, 0, 255, 0]);
    }

    #[test]
    fn test_image_to_pixels_gray() {
        let image = Image::from_grid(Grid::filled(2, 3, 1.0)).unwrap();
        let (pixels, kind) = image_to_pixels(&image);
        assert_eq!(kind, ColorKind::Gray);
        assert_eq!(pixels, vec![255; 6]);
    }

    #[test]
    fn test_image_to_pixels_rgb_interleaves() {
        let image = Image::new(vec![
            Grid::filled(1, 2, 1.0),
            Grid::filled(1, 2, 0.0),
            Grid::filled(1, 2, 0.2),
        ])
        .unwrap();
        let (pixels, kind) = image_to_pixels(&image);
        assert_eq!(kind, ColorKind::Rgb);
        assert_eq!(pixels, vec![255, 0, 51, 255, 0, 51]);
    }

    #[test]
    fn test_image_to_pixels_two_channels_reduced() {
        let image = Image::new(vec![Grid::filled(1, 1, 0.0), Grid::filled(1, 1, 1.0)]).unwrap();
        let (pixels, kind) = image_to_pixels(&image);
        assert_eq!(kind, ColorKind::Gray);
        assert_eq!(pixels, vec![128]);
    }
}

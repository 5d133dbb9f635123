//! Multi-channel raster images with values in `[0, 1]`.

use crate::{Grid, ImageError, ImageResult};
use std::path::Path;
use tracing::{debug, warn};

/// Perceptual weights for converting RGB to grayscale (Rec. 709 luma).
pub const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// An image made of one or more channels of identical shape.
///
/// Every pixel value lies in `[0, 1]`; constructors reject anything else.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: usize,
    height: usize,
    channels: Vec<Grid<f64>>,
}

impl Image {
    /// Build an image from per-channel grids.
    pub fn new(channels: Vec<Grid<f64>>) -> ImageResult<Self> {
        let first = channels.first().ok_or(ImageError::EmptyData)?;
        let (rows, cols) = first.shape();
        if first.is_empty() {
            return Err(ImageError::EmptyData);
        }

        for (channel, grid) in channels.iter().enumerate() {
            if grid.shape() != (rows, cols) {
                return Err(ImageError::ChannelShapeMismatch {
                    channel,
                    rows,
                    cols,
                    actual_rows: grid.rows(),
                    actual_cols: grid.cols(),
                });
            }
            check_unit_range(grid)?;
        }

        Ok(Self {
            width: cols,
            height: rows,
            channels,
        })
    }

    /// Single-channel image.
    pub fn from_grid(grid: Grid<f64>) -> ImageResult<Self> {
        Self::new(vec![grid])
    }

    /// Image with `channel_count` copies of the same grid.
    pub fn replicated(channel_count: usize, grid: Grid<f64>) -> ImageResult<Self> {
        if channel_count == 0 {
            return Err(ImageError::InvalidChannelCount);
        }
        Self::new(vec![grid; channel_count])
    }

    /// All-black image.
    pub fn blank(width: usize, height: usize, channel_count: usize) -> ImageResult<Self> {
        if channel_count == 0 {
            return Err(ImageError::InvalidChannelCount);
        }
        Self::new(vec![Grid::zeros(height, width); channel_count])
    }

    /// Decode an image file from disk.
    ///
    /// Grayscale sources become one channel; everything else becomes three
    /// RGB channels with any alpha dropped. 8-bit samples are scaled by 1/255.
    pub fn open(path: impl AsRef<Path>) -> ImageResult<Self> {
        let path = path.as_ref();
        std::fs::metadata(path).map_err(|source| ImageError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let decoded = ::image::open(path).map_err(|e| ImageError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let image = Self::from_dynamic(&decoded)?;
        debug!(
            path = %path.display(),
            width = image.width,
            height = image.height,
            channels = image.channel_count(),
            "Decoded image"
        );
        Ok(image)
    }

    /// Convert a decoded `image` crate buffer.
    pub fn from_dynamic(decoded: &::image::DynamicImage) -> ImageResult<Self> {
        let width = decoded.width() as usize;
        let height = decoded.height() as usize;

        if !decoded.color().has_color() {
            let luma = decoded.to_luma8();
            let values = luma.as_raw().iter().map(|&v| v as f64 / 255.0).collect();
            return Self::from_grid(Grid::from_vec(height, width, values)?);
        }

        let rgb = decoded.to_rgb8();
        let mut channels = vec![Vec::with_capacity(width * height); 3];
        for pixel in rgb.as_raw().chunks_exact(3) {
            for (channel, &sample) in channels.iter_mut().zip(pixel) {
                channel.push(sample as f64 / 255.0);
            }
        }

        let grids = channels
            .into_iter()
            .map(|values| Grid::from_vec(height, width, values))
            .collect::<ImageResult<Vec<_>>>()?;
        Self::new(grids)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    pub fn channels(&self) -> &[Grid<f64>] {
        &self.channels
    }

    /// Borrow one channel.
    pub fn data(&self, channel: usize) -> ImageResult<&Grid<f64>> {
        self.channels
            .get(channel)
            .ok_or(ImageError::ChannelOutOfRange {
                channel,
                max: self.channels.len() - 1,
            })
    }

    /// Value at column `x`, row `y` of `channel`.
    pub fn pixel(&self, x: usize, y: usize, channel: usize) -> ImageResult<f64> {
        if x >= self.width || y >= self.height {
            return Err(ImageError::PixelOutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.data(channel)?[(y, x)])
    }

    /// Collapse to a single grayscale channel.
    ///
    /// Three channels use the perceptual [`LUMA_WEIGHTS`]; any other count
    /// is averaged without weighting.
    pub fn reduce_channels(&self) -> Image {
        match self.channels.len() {
            1 => self.clone(),
            3 => {
                let mut gray = Grid::zeros(self.height, self.width);
                for (weight, channel) in LUMA_WEIGHTS.iter().zip(&self.channels) {
                    for (out, &v) in gray.iter_mut().zip(channel.iter()) {
                        *out += weight * v;
                    }
                }
                self.single_channel(gray)
            }
            n => {
                warn!(
                    channels = n,
                    "Perceptual grayscale needs 3 channels, averaging all channels instead"
                );
                let mut gray = Grid::zeros(self.height, self.width);
                for channel in &self.channels {
                    for (out, &v) in gray.iter_mut().zip(channel.iter()) {
                        *out += v;
                    }
                }
                let count = n as f64;
                gray.iter_mut().for_each(|v| *v /= count);
                self.single_channel(gray)
            }
        }
    }

    // Weighted sums of [0, 1] inputs can drift past 1.0 by an ulp.
    fn single_channel(&self, mut gray: Grid<f64>) -> Image {
        gray.iter_mut().for_each(|v| *v = v.clamp(0.0, 1.0));
        Image {
            width: self.width,
            height: self.height,
            channels: vec![gray],
        }
    }
}

fn check_unit_range(grid: &Grid<f64>) -> ImageResult<()> {
    for ((row, col), &value) in grid.indexed_iter() {
        if !(0.0..=1.0).contains(&value) {
            return Err(ImageError::ValueOutOfRange { row, col, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(rows: usize, cols: usize) -> Grid<f64> {
        let n = (rows * cols) as f64;
        Grid::from_vec(rows, cols, (0..rows * cols).map(|i| i as f64 / n).collect()).unwrap()
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(matches!(Image::new(vec![]), Err(ImageError::EmptyData)));
        assert!(matches!(
            Image::from_grid(Grid::zeros(0, 3)),
            Err(ImageError::EmptyData)
        ));
    }

    #[test]
    fn test_new_rejects_out_of_range_values() {
        let grid = Grid::from_rows(vec![vec![0.0, 1.5]]).unwrap();
        assert!(matches!(
            Image::from_grid(grid),
            Err(ImageError::ValueOutOfRange { row: 0, col: 1, .. })
        ));
    }

    #[test]
    fn test_new_rejects_mismatched_channels() {
        let err = Image::new(vec![Grid::zeros(2, 2), Grid::zeros(2, 3)]).unwrap_err();
        assert!(matches!(err, ImageError::ChannelShapeMismatch { channel: 1, .. }));
    }

    #[test]
    fn test_dimensions() {
        let image = Image::blank(5, 3, 2).unwrap();
        assert_eq!(image.width(), 5);
        assert_eq!(image.height(), 3);
        assert_eq!(image.channel_count(), 2);
        assert!(image.data(2).is_err());
        assert!(image.pixel(5, 0, 0).is_err());
    }

    #[test]
    fn test_reduce_three_channels_uses_luma_weights() {
        let r = Grid::filled(2, 2, 1.0);
        let g = Grid::filled(2, 2, 0.0);
        let b = Grid::filled(2, 2, 0.5);
        let gray = Image::new(vec![r, g, b]).unwrap().reduce_channels();

        assert_eq!(gray.channel_count(), 1);
        let expected = 0.2126 + 0.0722 * 0.5;
        assert!((gray.pixel(1, 1, 0).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_reduce_replicated_rgb_is_identity() {
        let grid = ramp(4, 4);
        let gray = Image::replicated(3, grid.clone()).unwrap().reduce_channels();
        for (a, b) in gray.data(0).unwrap().iter().zip(grid.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_reduce_two_channels_averages() {
        let image = Image::new(vec![Grid::filled(1, 2, 0.2), Grid::filled(1, 2, 0.6)]).unwrap();
        let gray = image.reduce_channels();
        assert!((gray.pixel(0, 0, 0).unwrap() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_reduce_single_channel_is_clone() {
        let image = Image::from_grid(ramp(2, 3)).unwrap();
        assert_eq!(image.reduce_channels(), image);
    }
}

//! An image paired with its (optional) centered spectrum.

use crate::complex::{self, ComplexGrid};
use crate::dft::{dft2_with_progress, Direction};
use crate::error::{FourierError, FourierResult};
use crate::filter::{self, FrequencyFilter};
use crate::progress::{NoProgress, ProgressReporter};
use image_common::{Grid, Image};
use tracing::{debug, info, warn};

/// Image side above which a transform logs a performance warning.
///
/// The direct transform is O(N³) for an `N x N` image.
pub const LARGE_IMAGE_WARNING_SIDE: usize = 512;

/// Whether a `width x height` image is big enough to warn about.
pub fn is_large_image(width: usize, height: usize) -> bool {
    width.max(height) > LARGE_IMAGE_WARNING_SIDE
}

/// Scale used when reading out the spectrum magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MagnitudeScale {
    /// `|X|`
    #[default]
    Linear,
    /// `ln(|X| + 1e-8)`
    Log,
}

/// An image together with the spectrum computed from it.
///
/// The spectrum starts out absent. [`apply_transform`](Self::apply_transform)
/// or [`set_transform`](Self::set_transform) fill it in; every accessor and
/// filter that needs it fails with [`FourierError::NoTransform`] until then.
/// Cloning copies both the image and the spectrum.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformedImage {
    image: Image,
    transform: Option<ComplexGrid>,
}

impl TransformedImage {
    pub fn new(image: Image) -> Self {
        Self {
            image,
            transform: None,
        }
    }

    /// Wrap a single-channel grid with values in `[0, 1]`.
    pub fn from_grid(grid: Grid<f64>) -> FourierResult<Self> {
        Ok(Self::new(Image::from_grid(grid)?))
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn into_image(self) -> Image {
        self.image
    }

    pub fn width(&self) -> usize {
        self.image.width()
    }

    pub fn height(&self) -> usize {
        self.image.height()
    }

    pub fn is_transformed(&self) -> bool {
        self.transform.is_some()
    }

    /// Compute and store the forward transform, replacing any previous one.
    pub fn apply_transform(&mut self) -> FourierResult<()> {
        self.apply_transform_with(&mut NoProgress)
    }

    /// [`apply_transform`](Self::apply_transform) with progress reporting.
    pub fn apply_transform_with(&mut self, progress: &mut dyn ProgressReporter) -> FourierResult<()> {
        if is_large_image(self.width(), self.height()) {
            warn!(
                width = self.width(),
                height = self.height(),
                "Direct DFT is O(N^3); this image will take a long time"
            );
        }

        let gray;
        let source = if self.image.channel_count() > 1 {
            info!(
                channels = self.image.channel_count(),
                "Converting to grayscale before transform"
            );
            gray = self.image.reduce_channels();
            gray.data(0)?
        } else {
            self.image.data(0)?
        };

        let spectrum = dft2_with_progress(&complex::promote(source), Direction::Forward, progress)?;
        debug!(rows = spectrum.rows(), cols = spectrum.cols(), "Stored forward transform");
        self.transform = Some(spectrum);
        Ok(())
    }

    /// Borrow the stored spectrum.
    pub fn transform(&self) -> FourierResult<&ComplexGrid> {
        self.transform.as_ref().ok_or(FourierError::NoTransform)
    }

    pub fn magnitude(&self, scale: MagnitudeScale) -> FourierResult<Grid<f64>> {
        let transform = self.transform()?;
        Ok(match scale {
            MagnitudeScale::Linear => complex::magnitude(transform),
            MagnitudeScale::Log => complex::log_magnitude(transform),
        })
    }

    pub fn phase(&self) -> FourierResult<Grid<f64>> {
        Ok(complex::phase(self.transform()?))
    }

    pub fn real(&self) -> FourierResult<Grid<f64>> {
        Ok(complex::real_part(self.transform()?))
    }

    pub fn imaginary(&self) -> FourierResult<Grid<f64>> {
        Ok(complex::imaginary_part(self.transform()?))
    }

    /// Replace the spectrum. Its shape must be `(height, width)`.
    pub fn set_transform(&mut self, transform: ComplexGrid) -> FourierResult<()> {
        let expected = (self.height(), self.width());
        if transform.shape() != expected {
            return Err(FourierError::DimensionMismatch {
                expected,
                actual: transform.shape(),
            });
        }
        self.transform = Some(transform);
        Ok(())
    }

    /// Invert the stored spectrum into a new image.
    ///
    /// The result's pixels are the real part of the inverse, min-max
    /// rescaled to `[0, 1]`. Its spectrum is a copy of this image's spectrum
    /// (including any filtering), not a transform of its own pixels.
    pub fn apply_inverse_transform(&self) -> FourierResult<TransformedImage> {
        self.apply_inverse_transform_with(&mut NoProgress)
    }

    /// [`apply_inverse_transform`](Self::apply_inverse_transform) with progress reporting.
    pub fn apply_inverse_transform_with(
        &self,
        progress: &mut dyn ProgressReporter,
    ) -> FourierResult<TransformedImage> {
        let transform = self.transform()?;
        let spatial = dft2_with_progress(transform, Direction::Inverse, progress)?;
        let pixels = complex::real_part(&spatial).normalized();

        Ok(TransformedImage {
            image: Image::from_grid(pixels)?,
            transform: Some(transform.clone()),
        })
    }

    /// Zero frequencies at or beyond `cutoff`.
    pub fn low_pass(&mut self, cutoff: f64) -> FourierResult<()> {
        filter::low_pass(self.transform_mut()?, cutoff)
    }

    /// Zero frequencies at or inside `cutoff`.
    pub fn high_pass(&mut self, cutoff: f64) -> FourierResult<()> {
        filter::high_pass(self.transform_mut()?, cutoff)
    }

    /// Keep frequencies strictly between `low` and `high`.
    pub fn band_pass(&mut self, low: f64, high: f64) -> FourierResult<()> {
        filter::band_pass(self.transform_mut()?, low, high)
    }

    pub fn apply_filter(&mut self, filter: FrequencyFilter) -> FourierResult<()> {
        filter.apply(self.transform_mut()?)
    }

    /// Magnitude rescaled to `[0, 1]` for display.
    pub fn magnitude_image(&self, scale: MagnitudeScale) -> FourierResult<Image> {
        Ok(Image::from_grid(self.magnitude(scale)?.normalized())?)
    }

    /// Phase rescaled to `[0, 1]` for display.
    pub fn phase_image(&self) -> FourierResult<Image> {
        Ok(Image::from_grid(self.phase()?.normalized())?)
    }

    fn transform_mut(&mut self) -> FourierResult<&mut ComplexGrid> {
        self.transform.as_mut().ok_or(FourierError::NoTransform)
    }
}

impl From<Image> for TransformedImage {
    fn from(image: Image) -> Self {
        Self::new(image)
    }
}

//! The `fourier` pipeline: load, transform, filter, invert, save.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use fourier::{
    FourierConfig, FrequencyFilter, LogProgress, MagnitudeScale, NoProgress, ProgressReporter,
    TransformedImage,
};
use image_common::Image;
use tracing::info;

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub width: usize,
    pub height: usize,
    pub filter: FrequencyFilter,
    pub output: PathBuf,
    /// Magnitude and phase images, when requested.
    pub spectrum_images: Option<(PathBuf, PathBuf)>,
}

/// Paths of the magnitude and phase images saved next to `output`.
pub fn spectrum_paths(output: &Path) -> (PathBuf, PathBuf) {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let dir = output.parent().unwrap_or_else(|| Path::new(""));
    (
        dir.join(format!("{}_magnitude.png", stem)),
        dir.join(format!("{}_phase.png", stem)),
    )
}

/// Run the full pipeline on one image.
///
/// The configuration is expected to be validated already; the filter is
/// validated again before any work so a bad value never costs a transform.
pub fn run_fourier(input: &Path, output: &Path, config: &FourierConfig) -> Result<RunSummary> {
    let filter = config.filter();
    filter.validate().context("Invalid filter parameters")?;

    let image = Image::open(input)
        .with_context(|| format!("Failed to load input image: {}", input.display()))?;
    info!(
        path = %input.display(),
        width = image.width(),
        height = image.height(),
        channels = image.channel_count(),
        "Loaded input image"
    );

    let mut progress: Box<dyn ProgressReporter> = if config.show_progress {
        Box::new(LogProgress::new())
    } else {
        Box::new(NoProgress)
    };

    let mut transformed = TransformedImage::new(image);
    let started = Instant::now();
    transformed
        .apply_transform_with(progress.as_mut())
        .context("Forward transform failed")?;
    info!(elapsed_ms = started.elapsed().as_millis() as u64, "Forward transform complete");

    let spectrum_images = if config.show_transform_images {
        Some(save_spectrum(&transformed, output, config)?)
    } else {
        None
    };

    transformed
        .apply_filter(filter)
        .context("Failed to apply filter")?;
    info!(filter = %filter.kind(), ?filter, "Applied filter");

    let started = Instant::now();
    let filtered = transformed
        .apply_inverse_transform_with(progress.as_mut())
        .context("Inverse transform failed")?;
    info!(elapsed_ms = started.elapsed().as_millis() as u64, "Inverse transform complete");

    renderer::save_image_png(output, filtered.image())
        .with_context(|| format!("Failed to save output image: {}", output.display()))?;

    Ok(RunSummary {
        width: filtered.width(),
        height: filtered.height(),
        filter,
        output: output.to_path_buf(),
        spectrum_images,
    })
}

fn save_spectrum(
    transformed: &TransformedImage,
    output: &Path,
    config: &FourierConfig,
) -> Result<(PathBuf, PathBuf)> {
    let scale = if config.log_magnitude {
        MagnitudeScale::Log
    } else {
        MagnitudeScale::Linear
    };
    let (magnitude_path, phase_path) = spectrum_paths(output);

    renderer::save_image_png(&magnitude_path, &transformed.magnitude_image(scale)?)
        .context("Failed to save magnitude image")?;
    renderer::save_image_png(&phase_path, &transformed.phase_image()?)
        .context("Failed to save phase image")?;

    Ok((magnitude_path, phase_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fourier::FilterKind;
    use test_utils::{checkerboard_grid, ramp_grid};

    fn quiet(config: FourierConfig) -> FourierConfig {
        FourierConfig {
            show_progress: false,
            ..config
        }
    }

    #[test]
    fn test_spectrum_paths() {
        let (magnitude, phase) = spectrum_paths(Path::new("/tmp/out/result.png"));
        assert_eq!(magnitude, Path::new("/tmp/out/result_magnitude.png"));
        assert_eq!(phase, Path::new("/tmp/out/result_phase.png"));

        let (magnitude, _) = spectrum_paths(Path::new("plain"));
        assert_eq!(magnitude, Path::new("plain_magnitude.png"));
    }

    #[test]
    fn test_run_low_pass_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.png");
        let output = dir.path().join("output.png");
        renderer::save_grid_png(&input, &checkerboard_grid(12, 10, 2)).unwrap();

        let summary = run_fourier(&input, &output, &quiet(FourierConfig::default())).unwrap();

        assert_eq!((summary.width, summary.height), (10, 12));
        assert_eq!(summary.filter, FrequencyFilter::LowPass { cutoff: 0.5 });
        assert!(summary.spectrum_images.is_none());

        let result = Image::open(&output).unwrap();
        assert_eq!((result.width(), result.height()), (10, 12));
        assert_eq!(result.channel_count(), 1);
    }

    #[test]
    fn test_run_saves_spectrum_images() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("ramp.png");
        let output = dir.path().join("filtered.png");
        renderer::save_grid_png(&input, &ramp_grid(8, 8)).unwrap();

        let config = quiet(FourierConfig {
            filter_type: FilterKind::Band,
            low_cutoff: 0.1,
            high_cutoff: 0.8,
            show_transform_images: true,
            ..Default::default()
        });
        let summary = run_fourier(&input, &output, &config).unwrap();

        let (magnitude, phase) = summary.spectrum_images.unwrap();
        assert_eq!(magnitude, dir.path().join("filtered_magnitude.png"));
        assert!(magnitude.exists());
        assert!(phase.exists());
        assert!(output.exists());
    }

    #[test]
    fn test_invalid_filter_fails_before_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.png");
        let output = dir.path().join("output.png");
        renderer::save_grid_png(&input, &ramp_grid(4, 4)).unwrap();

        let config = quiet(FourierConfig {
            filter_type: FilterKind::High,
            high_cutoff: -1.0,
            ..Default::default()
        });
        assert!(run_fourier(&input, &output, &config).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_fourier(
            &dir.path().join("nope.png"),
            &dir.path().join("out.png"),
            &quiet(FourierConfig::default()),
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to load input image"));
    }
}

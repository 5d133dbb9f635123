//! Direct 2D Discrete Fourier Transform with frequency-domain filtering.
//!
//! The transform is the textbook O(N²) sum applied separably along rows and
//! then columns, so an `N x N` image costs O(N³). There is no FFT here: the
//! crate is meant for small and medium images where clarity beats speed.
//!
//! The zero-frequency term is kept at the center of the spectrum without a
//! separate shift step: the forward 1D transform writes its output over the
//! centered index range and the inverse reads its input from it.
//!
//! # Architecture
//!
//! ```text
//! Image (1..n channels, [0,1])
//!      │
//!      ▼
//! TransformedImage::apply_transform()
//!      │
//!      ├─► reduce_channels()          (grayscale if needed)
//!      ├─► promote()                  (f64 → Complex)
//!      └─► dft2(Forward)              rows, then columns
//!               │
//!               ▼
//!        Option<ComplexGrid>  ◄── low_pass / high_pass / band_pass (in place)
//!               │
//!               ▼
//! TransformedImage::apply_inverse_transform()
//!      │
//!      ├─► dft2(Inverse)
//!      └─► real part → normalize → new TransformedImage (same spectrum)
//! ```
//!
//! # Example
//!
//! ```
//! use fourier::{FrequencyFilter, TransformedImage};
//! use image_common::Grid;
//!
//! let grid = Grid::from_rows(vec![
//!     vec![0.0, 0.2, 0.4, 0.6],
//!     vec![0.1, 0.3, 0.5, 0.7],
//!     vec![0.2, 0.4, 0.6, 0.8],
//!     vec![0.3, 0.5, 0.7, 1.0],
//! ]).unwrap();
//!
//! let mut image = TransformedImage::from_grid(grid).unwrap();
//! image.apply_transform().unwrap();
//! image.apply_filter(FrequencyFilter::LowPass { cutoff: 0.9 }).unwrap();
//!
//! let smoothed = image.apply_inverse_transform().unwrap();
//! assert_eq!(smoothed.width(), 4);
//! ```

pub mod complex;
pub mod config;
pub mod dft;
pub mod error;
pub mod filter;
pub mod progress;
pub mod transformed;

// Re-export commonly used types at crate root
pub use complex::{
    imaginary_part, log_magnitude, magnitude, phase, promote, real_part, Complex, ComplexGrid,
    LOG_EPSILON,
};
pub use config::FourierConfig;
pub use dft::{dft, dft2, dft2_with_progress, Direction};
pub use error::{ErrorCategory, FourierError, FourierResult};
pub use filter::{
    band_pass, cutoff_radius, high_pass, low_pass, radial_distance, spectrum_center, FilterKind,
    FrequencyFilter,
};
pub use progress::{Axis, LogProgress, NoProgress, ProgressReporter};
pub use transformed::{is_large_image, MagnitudeScale, TransformedImage, LARGE_IMAGE_WARNING_SIDE};

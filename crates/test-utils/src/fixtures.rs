//! Common test fixtures for the Fourier pipeline.
//!
//! The 4x4 reference image holds the values 1..=16 in row-major order,
//! min-max rescaled to `[0, 1]`. Its centered spectrum is known in closed
//! form and used as ground truth by the transform tests.

use image_common::Grid;
use num_complex::Complex64;

/// Raw pixel values of the 4x4 reference image, before rescaling.
pub const SAMPLE_4X4: [[f64; 4]; 4] = [
    [1.0, 2.0, 3.0, 4.0],
    [5.0, 6.0, 7.0, 8.0],
    [9.0, 10.0, 11.0, 12.0],
    [13.0, 14.0, 15.0, 16.0],
];

/// Tolerance used when comparing against the reference spectrum.
pub const SPECTRUM_TOLERANCE: f64 = 1e-10;

/// The 4x4 reference image rescaled to `[0, 1]` as `(x - 1) / 15`.
pub fn sample_4x4() -> Grid<f64> {
    let rows = SAMPLE_4X4
        .iter()
        .map(|row| row.iter().map(|x| (x - 1.0) / 15.0).collect())
        .collect();
    Grid::from_rows(rows).expect("reference rows have equal length")
}

/// Centered forward transform of [`sample_4x4`].
///
/// The DC term `8 + 0i` sits at `(2, 2)`. Only row 2 and column 2 are
/// non-zero because the ramp is separable.
pub fn expected_4x4_transform() -> Grid<Complex64> {
    let a = 32.0 / 15.0;
    let b = 8.0 / 15.0;
    let z = Complex64::new(0.0, 0.0);
    let c = Complex64::new;

    Grid::from_rows(vec![
        vec![z, z, c(-a, 0.0), z],
        vec![z, z, c(-a, -a), z],
        vec![c(-b, 0.0), c(-b, -b), c(8.0, 0.0), c(-b, b)],
        vec![z, z, c(-a, a), z],
    ])
    .expect("reference rows have equal length")
}

/// Common grid shapes for testing.
pub mod shapes {
    /// Square with even side.
    pub const SQUARE_EVEN: (usize, usize) = (8, 8);

    /// Square with odd side.
    pub const SQUARE_ODD: (usize, usize) = (7, 7);

    /// More rows than columns.
    pub const TALL: (usize, usize) = (6, 4);

    /// More columns than rows, both odd.
    pub const WIDE_ODD: (usize, usize) = (3, 5);

    /// Degenerate single pixel.
    pub const SINGLE: (usize, usize) = (1, 1);

    /// A single row.
    pub const ROW: (usize, usize) = (1, 6);

    /// All shapes above.
    pub const ALL: [(usize, usize); 6] = [SQUARE_EVEN, SQUARE_ODD, TALL, WIDE_ODD, SINGLE, ROW];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_4x4_is_normalized() {
        let grid = sample_4x4();
        assert_eq!(grid.shape(), (4, 4));
        assert_eq!(grid[(0, 0)], 0.0);
        assert_eq!(grid[(3, 3)], 1.0);
    }

    #[test]
    fn test_expected_transform_dc() {
        let expected = expected_4x4_transform();
        // DC equals the pixel sum.
        let sum: f64 = sample_4x4().iter().sum();
        assert!((expected[(2, 2)].re - sum).abs() < 1e-12);
        assert_eq!(expected[(0, 0)], Complex64::new(0.0, 0.0));
    }
}

//! Complex grids and their real-valued views.

use image_common::Grid;

/// Double-precision complex number.
pub type Complex = num_complex::Complex64;

/// A 2D grid of complex values (a spectrum, or a promoted image).
pub type ComplexGrid = Grid<Complex>;

/// Offset added before taking the logarithm of a magnitude so that empty
/// frequencies do not produce `-inf`.
pub const LOG_EPSILON: f64 = 1e-8;

/// Promote real intensities to complex values with zero imaginary part.
pub fn promote(grid: &Grid<f64>) -> ComplexGrid {
    grid.map(|&v| Complex::new(v, 0.0))
}

pub fn real_part(grid: &ComplexGrid) -> Grid<f64> {
    grid.map(|z| z.re)
}

pub fn imaginary_part(grid: &ComplexGrid) -> Grid<f64> {
    grid.map(|z| z.im)
}

/// `|z|` for every cell.
pub fn magnitude(grid: &ComplexGrid) -> Grid<f64> {
    grid.map(|z| z.norm())
}

/// `ln(|z| + LOG_EPSILON)` for every cell.
pub fn log_magnitude(grid: &ComplexGrid) -> Grid<f64> {
    grid.map(|z| (z.norm() + LOG_EPSILON).ln())
}

/// `atan2(im, re)` for every cell, in `(-π, π]`.
pub fn phase(grid: &ComplexGrid) -> Grid<f64> {
    grid.map(|z| z.arg())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn sample() -> ComplexGrid {
        Grid::from_rows(vec![
            vec![Complex::new(3.0, 4.0), Complex::new(0.0, 0.0)],
            vec![Complex::new(-1.0, 0.0), Complex::new(0.0, -2.0)],
        ])
        .unwrap()
    }

    #[test]
    fn test_promote_has_zero_imaginary() {
        let grid = Grid::from_rows(vec![vec![0.25, 0.5]]).unwrap();
        let promoted = promote(&grid);
        assert_eq!(promoted[(0, 1)], Complex::new(0.5, 0.0));
        assert!(imaginary_part(&promoted).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_magnitude_and_phase() {
        let grid = sample();
        let mag = magnitude(&grid);
        let arg = phase(&grid);

        assert!((mag[(0, 0)] - 5.0).abs() < 1e-12);
        assert_eq!(mag[(0, 1)], 0.0);
        assert!((arg[(1, 0)] - PI).abs() < 1e-12);
        assert!((arg[(1, 1)] + PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_log_magnitude_is_finite_for_zero() {
        let log = log_magnitude(&sample());
        assert!((log[(0, 1)] - LOG_EPSILON.ln()).abs() < 1e-12);
        assert!(log.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_real_and_imaginary_parts() {
        let grid = sample();
        assert_eq!(real_part(&grid).as_slice(), &[3.0, 0.0, -1.0, 0.0]);
        assert_eq!(imaginary_part(&grid).as_slice(), &[4.0, 0.0, 0.0, -2.0]);
    }
}

//! Shared test utilities for the imgproc workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Grid generators with predictable or seeded-random content
//! - The 4x4 reference image and its known spectrum
//! - Approximate-equality assertions for scalars, complex values and grids
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{assert_grid_approx_eq, fixtures, ramp_grid};
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f64, 1.0_f64, 0.001_f64);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if !(diff <= epsilon) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Approximate equality of complex numbers, checked per component.
///
/// ```ignore
/// use test_utils::assert_complex_approx_eq;
///
/// assert_complex_approx_eq!(a, Complex64::new(8.0, 0.0), 1e-10);
/// ```
#[macro_export]
macro_rules! assert_complex_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: $crate::num_complex::Complex64 = $left;
        let right: $crate::num_complex::Complex64 = $right;
        $crate::assert_approx_eq!(left.re, right.re, $epsilon);
        $crate::assert_approx_eq!(left.im, right.im, $epsilon);
    }};
}

/// Approximate equality of two real grids of the same shape.
#[macro_export]
macro_rules! assert_grid_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: &$crate::image_common::Grid<f64> = &$left;
        let right: &$crate::image_common::Grid<f64> = &$right;
        assert_eq!(left.shape(), right.shape(), "grid shapes differ");
        for ((row, col), value) in left.indexed_iter() {
            let expected = right[(row, col)];
            let diff = (value - expected).abs();
            if !(diff <= $epsilon) {
                panic!(
                    "assertion failed at ({}, {}): left `{:?}`, right `{:?}`, diff `{:?}`",
                    row, col, value, expected, diff
                );
            }
        }
    }};
}

#[doc(hidden)]
pub use image_common;
#[doc(hidden)]
pub use num_complex;

#[cfg(test)]
mod tests {
    use num_complex::Complex64;

    #[test]
    fn test_assert_approx_eq_passes() {
        assert_approx_eq!(1.0001, 1.0, 0.001);
        assert_approx_eq!(0.0, 0.0, 0.0001);
        assert_approx_eq!(-5.5, -5.500001, 0.0001);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq!(1.1, 1.0, 0.001);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_assert_approx_eq_rejects_nan() {
        assert_approx_eq!(f64::NAN, 1.0, 0.001);
    }

    #[test]
    fn test_assert_complex_approx_eq_passes() {
        assert_complex_approx_eq!(Complex64::new(1.0, -2.0), Complex64::new(1.0, -2.0 + 1e-12), 1e-10);
    }

    #[test]
    fn test_assert_grid_approx_eq_passes() {
        let a = crate::ramp_grid(3, 2);
        let b = a.map(|v| v + 1e-12);
        assert_grid_approx_eq!(a, b, 1e-10);
    }
}

//! Direct (non-fast) discrete Fourier transforms.
//!
//! Frequencies are indexed over the centered range `[-h, N - h - 1]` with
//! `h = N / 2`, stored at array position `index + h`. For even `N` that is
//! the familiar `[-N/2, N/2 - 1]`, which puts the zero-frequency term at
//! position `N / 2`.
//!
//! The forward transform reads spatial samples `0..N` and writes centered
//! frequencies; the inverse reads centered frequencies and writes spatial
//! samples. Keeping this asymmetry is what makes an fft-shift unnecessary.

use crate::complex::{Complex, ComplexGrid};
use crate::error::{FourierError, FourierResult};
use crate::progress::{Axis, NoProgress, ProgressReporter};
use std::f64::consts::PI;
use std::ops::Range;
use tracing::debug;

/// Transform direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Spatial samples to centered frequencies.
    Forward,
    /// Centered frequencies back to spatial samples, scaled by `1/N`.
    Inverse,
}

impl Direction {
    pub fn from_inverse(inverse: bool) -> Self {
        if inverse {
            Direction::Inverse
        } else {
            Direction::Forward
        }
    }

    pub fn is_inverse(self) -> bool {
        self == Direction::Inverse
    }
}

/// Signed index range centered on zero for a sequence of length `n`.
fn centered_range(n: i64) -> Range<i64> {
    let half = n / 2;
    -half..n - half
}

/// 1D DFT of `input`.
///
/// Runs in O(N²). An empty input yields an empty output.
pub fn dft(input: &[Complex], direction: Direction) -> Vec<Complex> {
    let len = input.len();
    let mut output = vec![Complex::new(0.0, 0.0); len];
    if len == 0 {
        return output;
    }

    let n = len as i64;
    let (out_range, in_range, sign) = match direction {
        Direction::Forward => (centered_range(n), 0..n, -1.0),
        Direction::Inverse => (0..n, centered_range(n), 1.0),
    };

    for k in out_range.clone() {
        let mut acc = Complex::new(0.0, 0.0);
        for m in in_range.clone() {
            let angle = sign * 2.0 * PI * (k * m) as f64 / n as f64;
            acc += input[(m - in_range.start) as usize] * Complex::from_polar(1.0, angle);
        }
        output[(k - out_range.start) as usize] = acc;
    }

    if direction.is_inverse() {
        let scale = len as f64;
        for value in output.iter_mut() {
            *value /= scale;
        }
    }

    output
}

/// Separable 2D DFT: every row, then every column of the intermediate grid.
///
/// Each axis is transformed with its own length, so non-square grids are
/// fine. Fails with [`FourierError::EmptyGrid`] for a grid with no cells.
pub fn dft2(grid: &ComplexGrid, direction: Direction) -> FourierResult<ComplexGrid> {
    dft2_with_progress(grid, direction, &mut NoProgress)
}

/// [`dft2`] with a callback per transformed row and column.
pub fn dft2_with_progress(
    grid: &ComplexGrid,
    direction: Direction,
    progress: &mut dyn ProgressReporter,
) -> FourierResult<ComplexGrid> {
    let (rows, cols) = grid.shape();
    if grid.is_empty() {
        return Err(FourierError::EmptyGrid { rows, cols });
    }

    debug!(rows, cols, ?direction, "Computing 2D DFT");

    let mut output = grid.clone();

    for row in 0..rows {
        progress.on_step(Axis::Row, row, rows);
        let transformed = dft(grid.row(row), direction);
        output.row_mut(row).copy_from_slice(&transformed);
    }
    progress.on_pass_complete(Axis::Row, rows);

    for col in 0..cols {
        progress.on_step(Axis::Column, col, cols);
        let transformed = dft(&output.column(col), direction);
        output.set_column(col, &transformed);
    }
    progress.on_pass_complete(Axis::Column, cols);

    Ok(output)
}

//! Test data generators for creating synthetic image grids.
//!
//! Every generator returns values in `[0, 1]` so the result can be wrapped
//! directly in an `Image`.

use image_common::Grid;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a grid that increases in row-major order from 0 to 1.
///
/// Cell `(row, col)` holds `(row * cols + col) / (rows * cols - 1)`, so the
/// first cell is exactly 0 and the last exactly 1.
///
/// # Example
///
/// ```
/// use test_utils::ramp_grid;
///
/// let grid = ramp_grid(2, 3);
/// assert_eq!(grid[(0, 0)], 0.0);
/// assert_eq!(grid[(1, 2)], 1.0);
/// ```
pub fn ramp_grid(rows: usize, cols: usize) -> Grid<f64> {
    let cells = rows * cols;
    let denom = cells.saturating_sub(1).max(1) as f64;
    let data = (0..cells).map(|i| i as f64 / denom).collect();
    Grid::from_vec(rows, cols, data).expect("ramp dimensions are consistent")
}

/// Creates a grid of uniform random values from a fixed seed.
///
/// The same seed always produces the same grid.
pub fn random_grid(rows: usize, cols: usize, seed: u64) -> Grid<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..rows * cols).map(|_| rng.gen_range(0.0..=1.0)).collect();
    Grid::from_vec(rows, cols, data).expect("random dimensions are consistent")
}

/// Creates a checkerboard of `cell`-sized squares alternating 0 and 1.
pub fn checkerboard_grid(rows: usize, cols: usize, cell: usize) -> Grid<f64> {
    let cell = cell.max(1);
    let mut grid = Grid::zeros(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            if (row / cell + col / cell) % 2 == 1 {
                grid[(row, col)] = 1.0;
            }
        }
    }
    grid
}

/// Creates horizontal sinusoidal stripes with `cycles` periods across the width.
///
/// The energy of this pattern sits in a single pair of horizontal
/// frequencies plus the DC term.
pub fn stripes_grid(rows: usize, cols: usize, cycles: usize) -> Grid<f64> {
    let mut grid = Grid::zeros(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            let phase = 2.0 * std::f64::consts::PI * (cycles * col) as f64 / cols as f64;
            grid[(row, col)] = 0.5 + 0.5 * phase.cos();
        }
    }
    grid
}

/// Creates a grid with every value equal to `value`.
pub fn constant_grid(rows: usize, cols: usize, value: f64) -> Grid<f64> {
    Grid::filled(rows, cols, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_grid_bounds() {
        let grid = ramp_grid(4, 4);
        assert_eq!(grid[(0, 0)], 0.0);
        assert_eq!(grid[(3, 3)], 1.0);
        assert!((grid[(0, 1)] - 1.0 / 15.0).abs() < 1e-15);
    }

    #[test]
    fn test_random_grid_is_deterministic() {
        assert_eq!(random_grid(3, 5, 7), random_grid(3, 5, 7));
        assert_ne!(random_grid(3, 5, 7), random_grid(3, 5, 8));
        assert!(random_grid(8, 8, 1).iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn test_checkerboard_grid() {
        let grid = checkerboard_grid(4, 4, 2);
        assert_eq!(grid[(0, 0)], 0.0);
        assert_eq!(grid[(0, 2)], 1.0);
        assert_eq!(grid[(2, 0)], 1.0);
        assert_eq!(grid[(2, 2)], 0.0);
    }

    #[test]
    fn test_stripes_grid_range() {
        let grid = stripes_grid(4, 8, 2);
        assert!(grid.iter().all(|v| (-1e-12..=1.0 + 1e-12).contains(v)));
        assert!((grid[(0, 0)] - 1.0).abs() < 1e-12);
    }
}

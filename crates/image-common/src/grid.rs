//! Dense 2D grids.

use crate::{ImageError, ImageResult};
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A rectangular `rows x cols` grid stored in row-major order.
///
/// Every row has the same length: the backing buffer always holds exactly
/// `rows * cols` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Build a grid from nested rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<T>>) -> ImageResult<Self> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        let mut data = Vec::with_capacity(rows.len() * cols);

        for (row, values) in rows.iter().enumerate() {
            if values.len() != cols {
                return Err(ImageError::RaggedRows {
                    row,
                    expected: cols,
                    actual: values.len(),
                });
            }
            data.extend_from_slice(values);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Copy of column `col`, top to bottom.
    ///
    /// # Panics
    /// If `col >= self.cols()`.
    pub fn column(&self, col: usize) -> Vec<T> {
        assert!(col < self.cols, "column {} out of range for {} columns", col, self.cols);
        (0..self.rows)
            .map(|row| self.data[row * self.cols + col].clone())
            .collect()
    }

    /// Overwrite column `col` with `values`.
    ///
    /// # Panics
    /// If `col` is out of range or `values.len() != self.rows()`.
    pub fn set_column(&mut self, col: usize, values: &[T]) {
        assert!(col < self.cols, "column {} out of range for {} columns", col, self.cols);
        assert_eq!(values.len(), self.rows, "column length must equal row count");
        for (row, value) in values.iter().enumerate() {
            self.data[row * self.cols + col] = value.clone();
        }
    }
}

impl<T: Zero + Clone> Grid<T> {
    /// Create a grid of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, T::zero())
    }
}

impl<T> Grid<T> {
    /// Wrap a row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> ImageResult<Self> {
        if data.len() != rows * cols {
            return Err(ImageError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the grid has no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col)
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get_mut(row * self.cols + col)
    }

    /// Borrow row `row` as a slice.
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Iterate over `((row, col), value)` in row-major order.
    pub fn indexed_iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .map(move |(idx, value)| ((idx / cols, idx % cols), value))
    }

    /// Apply `f` to every cell, producing a grid of the same shape.
    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(f).collect(),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl Grid<f64> {
    /// Smallest value, or `None` for an empty grid.
    pub fn min(&self) -> Option<f64> {
        self.data.iter().copied().reduce(f64::min)
    }

    /// Largest value, or `None` for an empty grid.
    pub fn max(&self) -> Option<f64> {
        self.data.iter().copied().reduce(f64::max)
    }

    /// Rescale to `[0, 1]` using the global minimum and maximum.
    ///
    /// A constant grid has no range to stretch and maps to all zeros.
    pub fn normalized(&self) -> Grid<f64> {
        let (min, max) = match (self.min(), self.max()) {
            (Some(min), Some(max)) => (min, max),
            _ => return self.clone(),
        };
        let range = max - min;
        if range == 0.0 || !range.is_finite() {
            return Grid::zeros(self.rows, self.cols);
        }
        self.map(|&v| (v - min) / range)
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} grid",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} grid",
            row,
            col,
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_is_row_major() {
        let grid = Grid::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(grid.shape(), (2, 3));
        assert_eq!(grid[(0, 2)], 3.0);
        assert_eq!(grid[(1, 0)], 4.0);
        assert_eq!(grid.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(grid.column(1), vec![2.0, 5.0]);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Grid::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert!(matches!(
            err,
            ImageError::RaggedRows { row: 1, expected: 2, actual: 1 }
        ));
    }

    #[test]
    fn test_from_vec_checks_length() {
        assert!(Grid::from_vec(2, 2, vec![0u8; 4]).is_ok());
        assert!(matches!(
            Grid::from_vec(2, 3, vec![0u8; 4]),
            Err(ImageError::ShapeMismatch { rows: 2, cols: 3, len: 4 })
        ));
    }

    #[test]
    fn test_set_column() {
        let mut grid: Grid<i32> = Grid::zeros(3, 2);
        grid.set_column(1, &[7, 8, 9]);
        assert_eq!(grid.column(1), vec![7, 8, 9]);
        assert_eq!(grid.column(0), vec![0, 0, 0]);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid: Grid<f64> = Grid::zeros(2, 2);
        assert!(grid.get(2, 0).is_none());
        assert!(grid.get(0, 2).is_none());
        assert_eq!(grid.get(1, 1), Some(&0.0));
    }

    #[test]
    fn test_is_empty() {
        assert!(Grid::<f64>::zeros(0, 4).is_empty());
        assert!(Grid::<f64>::zeros(4, 0).is_empty());
        assert!(!Grid::<f64>::zeros(1, 1).is_empty());
    }

    #[test]
    fn test_normalized_min_max() {
        let grid = Grid::from_rows(vec![vec![1.0, 2.0], vec![3.0, 5.0]]).unwrap();
        let norm = grid.normalized();
        assert_eq!(norm[(0, 0)], 0.0);
        assert_eq!(norm[(1, 1)], 1.0);
        assert!((norm[(0, 1)] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_normalized_constant_grid_is_zero() {
        let grid = Grid::filled(3, 3, 0.7);
        assert!(grid.normalized().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_indexed_iter_coordinates() {
        let grid = Grid::from_rows(vec![vec![0, 1], vec![2, 3]]).unwrap();
        let coords: Vec<_> = grid.indexed_iter().map(|(rc, &v)| (rc, v)).collect();
        assert_eq!(coords, vec![((0, 0), 0), ((0, 1), 1), ((1, 0), 2), ((1, 1), 3)]);
    }
}

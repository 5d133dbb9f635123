//! Progress reporting for the 2D transform.
//!
//! Reporting is purely observational: implementations receive a callback
//! per transformed row or column and must not influence the result.

use std::fmt;
use tracing::info;

/// Which pass of the separable transform is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Receives one call per 1D transform performed by [`crate::dft2_with_progress`].
pub trait ProgressReporter {
    /// `index` is zero-based and `total` is the number of rows or columns.
    fn on_step(&mut self, axis: Axis, index: usize, total: usize);

    /// Called once after each full pass.
    fn on_pass_complete(&mut self, _axis: Axis, _total: usize) {}
}

/// Discards all progress events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn on_step(&mut self, _axis: Axis, _index: usize, _total: usize) {}
}

/// Emits a `tracing` event every `interval` steps.
#[derive(Debug, Clone, Copy)]
pub struct LogProgress {
    interval: usize,
}

impl LogProgress {
    /// Log every single row and column.
    pub fn new() -> Self {
        Self { interval: 1 }
    }

    /// Log every `interval`-th step (and the last one of each pass).
    pub fn every(interval: usize) -> Self {
        Self {
            interval: interval.max(1),
        }
    }
}

impl Default for LogProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for LogProgress {
    fn on_step(&mut self, axis: Axis, index: usize, total: usize) {
        if index % self.interval == 0 || index + 1 == total {
            info!(%axis, index, total, "Computing {} {} of {}", axis, index, total);
        }
    }

    fn on_pass_complete(&mut self, axis: Axis, total: usize) {
        info!(%axis, total, "Finished {} pass", axis);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_display() {
        assert_eq!(Axis::Row.to_string(), "row");
        assert_eq!(Axis::Column.to_string(), "column");
    }

    #[test]
    fn test_every_clamps_zero_interval() {
        let progress = LogProgress::every(0);
        assert_eq!(progress.interval, 1);
    }
}

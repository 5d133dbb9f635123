//! Radially symmetric masks applied to a centered spectrum.
//!
//! Distances are measured from `((rows - 1) / 2, (cols - 1) / 2)` using
//! integer division, and cutoffs are expressed as a fraction of half the
//! smaller grid dimension. A low-pass zeroes everything at or beyond the
//! cutoff radius, a high-pass zeroes everything at or inside it, so the ring
//! lying exactly on the radius is removed by both.

use crate::complex::{Complex, ComplexGrid};
use crate::error::{FourierError, FourierResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Center used for distance measurements on a `rows x cols` spectrum.
pub fn spectrum_center(rows: usize, cols: usize) -> (i64, i64) {
    ((rows as i64 - 1) / 2, (cols as i64 - 1) / 2)
}

/// Euclidean distance of `(row, col)` from [`spectrum_center`].
pub fn radial_distance(rows: usize, cols: usize, row: usize, col: usize) -> f64 {
    let (center_row, center_col) = spectrum_center(rows, cols);
    let dr = (row as i64 - center_row) as f64;
    let dc = (col as i64 - center_col) as f64;
    (dr * dr + dc * dc).sqrt()
}

/// Radius, in cells, corresponding to a normalized `cutoff`.
pub fn cutoff_radius(rows: usize, cols: usize, cutoff: f64) -> f64 {
    cutoff * rows.min(cols) as f64 / 2.0
}

pub(crate) fn check_cutoff(name: &'static str, value: f64) -> FourierResult<()> {
    if value.is_nan() || value < 0.0 {
        return Err(FourierError::InvalidCutoff { name, value });
    }
    Ok(())
}

/// Zero every cell for which `reject(distance, radius)` holds.
fn apply_mask(spectrum: &mut ComplexGrid, cutoff: f64, reject: impl Fn(f64, f64) -> bool) -> usize {
    let (rows, cols) = spectrum.shape();
    let radius = cutoff_radius(rows, cols, cutoff);
    let mut zeroed = 0;

    for row in 0..rows {
        for (col, value) in spectrum.row_mut(row).iter_mut().enumerate() {
            if reject(radial_distance(rows, cols, row, col), radius) {
                *value = Complex::new(0.0, 0.0);
                zeroed += 1;
            }
        }
    }
    zeroed
}

/// Keep only frequencies strictly inside the cutoff radius.
pub fn low_pass(spectrum: &mut ComplexGrid, cutoff: f64) -> FourierResult<()> {
    check_cutoff("cutoff", cutoff)?;
    let zeroed = apply_mask(spectrum, cutoff, |distance, radius| distance >= radius);
    debug!(cutoff, zeroed, "Applied low-pass filter");
    Ok(())
}

/// Remove frequencies at or inside the cutoff radius.
pub fn high_pass(spectrum: &mut ComplexGrid, cutoff: f64) -> FourierResult<()> {
    check_cutoff("cutoff", cutoff)?;
    let zeroed = apply_mask(spectrum, cutoff, |distance, radius| distance <= radius);
    debug!(cutoff, zeroed, "Applied high-pass filter");
    Ok(())
}

/// High-pass at `low` followed by low-pass at `high`.
pub fn band_pass(spectrum: &mut ComplexGrid, low: f64, high: f64) -> FourierResult<()> {
    check_cutoff("low", low)?;
    check_cutoff("high", high)?;
    if low > high {
        return Err(FourierError::InvalidBand { low, high });
    }
    high_pass(spectrum, low)?;
    low_pass(spectrum, high)
}

/// A frequency-domain filter with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FrequencyFilter {
    LowPass { cutoff: f64 },
    HighPass { cutoff: f64 },
    BandPass { low: f64, high: f64 },
}

impl FrequencyFilter {
    /// Check parameters without touching any spectrum.
    pub fn validate(&self) -> FourierResult<()> {
        match *self {
            FrequencyFilter::LowPass { cutoff } | FrequencyFilter::HighPass { cutoff } => {
                check_cutoff("cutoff", cutoff)
            }
            FrequencyFilter::BandPass { low, high } => {
                check_cutoff("low", low)?;
                check_cutoff("high", high)?;
                if low > high {
                    return Err(FourierError::InvalidBand { low, high });
                }
                Ok(())
            }
        }
    }

    /// Apply in place to a centered spectrum.
    pub fn apply(&self, spectrum: &mut ComplexGrid) -> FourierResult<()> {
        match *self {
            FrequencyFilter::LowPass { cutoff } => low_pass(spectrum, cutoff),
            FrequencyFilter::HighPass { cutoff } => high_pass(spectrum, cutoff),
            FrequencyFilter::BandPass { low, high } => band_pass(spectrum, low, high),
        }
    }

    pub fn kind(&self) -> FilterKind {
        match self {
            FrequencyFilter::LowPass { .. } => FilterKind::Low,
            FrequencyFilter::HighPass { .. } => FilterKind::High,
            FrequencyFilter::BandPass { .. } => FilterKind::Band,
        }
    }
}

/// Filter family as named in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    #[default]
    Low,
    High,
    Band,
}

impl FilterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::Low => "low",
            FilterKind::High => "high",
            FilterKind::Band => "band",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = FourierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(FilterKind::Low),
            "high" => Ok(FilterKind::High),
            "band" => Ok(FilterKind::Band),
            other => Err(FourierError::InvalidFilterType(other.to_string())),
        }
    }
}

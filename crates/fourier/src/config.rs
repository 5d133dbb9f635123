//! Parameters for the Fourier filtering pipeline.

use crate::error::{FourierError, FourierResult};
use crate::filter::{check_cutoff, FilterKind, FrequencyFilter};
use serde::{Deserialize, Serialize};

/// Configuration for a transform → filter → inverse run.
///
/// Deserializes from snake_case keys or from the upper-case names used in
/// environment variables, so a parameter file may use either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FourierConfig {
    /// Which filter to apply between the forward and inverse transforms.
    #[serde(alias = "FILTER_TYPE")]
    pub filter_type: FilterKind,

    /// Lower cutoff, as a fraction of half the smaller image side.
    #[serde(alias = "LOW_CUTOFF")]
    pub low_cutoff: f64,

    /// Upper cutoff, as a fraction of half the smaller image side.
    #[serde(alias = "HIGH_CUTOFF")]
    pub high_cutoff: f64,

    /// Log progress for every transformed row and column.
    #[serde(alias = "SHOW_FOURIER_PROGRESS")]
    pub show_progress: bool,

    /// Use `ln(|X| + 1e-8)` instead of `|X|` for the magnitude image.
    #[serde(alias = "SHOW_FOURIER_LOG_MAGNITUDE")]
    pub log_magnitude: bool,

    /// Save magnitude and phase images alongside the output.
    #[serde(alias = "SHOW_FOURIER_TRANSFORM_IMAGES")]
    pub show_transform_images: bool,
}

impl Default for FourierConfig {
    fn default() -> Self {
        Self {
            filter_type: FilterKind::Low,
            low_cutoff: 0.5,
            high_cutoff: 0.9,
            show_progress: true,
            log_magnitude: true,
            show_transform_images: false,
        }
    }
}

impl FourierConfig {
    /// Defaults overridden by environment variables.
    pub fn from_env() -> FourierResult<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Override fields from the process environment.
    pub fn apply_env(&mut self) -> FourierResult<()> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    /// Override fields from any key/value source.
    ///
    /// Recognized keys: `FILTER_TYPE`, `LOW_CUTOFF`, `HIGH_CUTOFF`,
    /// `SHOW_FOURIER_PROGRESS`, `SHOW_FOURIER_LOG_MAGNITUDE`,
    /// `SHOW_FOURIER_TRANSFORM_IMAGES`.
    pub fn apply_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) -> FourierResult<()> {
        if let Some(val) = lookup("FILTER_TYPE") {
            self.filter_type = val.parse()?;
        }

        if let Some(val) = lookup("LOW_CUTOFF") {
            self.low_cutoff = parse_f64("LOW_CUTOFF", &val)?;
        }

        if let Some(val) = lookup("HIGH_CUTOFF") {
            self.high_cutoff = parse_f64("HIGH_CUTOFF", &val)?;
        }

        if let Some(val) = lookup("SHOW_FOURIER_PROGRESS") {
            self.show_progress = parse_bool(&val);
        }

        if let Some(val) = lookup("SHOW_FOURIER_LOG_MAGNITUDE") {
            self.log_magnitude = parse_bool(&val);
        }

        if let Some(val) = lookup("SHOW_FOURIER_TRANSFORM_IMAGES") {
            self.show_transform_images = parse_bool(&val);
        }

        Ok(())
    }

    /// Validate the configuration.
    ///
    /// Both cutoffs must be non-negative numbers, including the one the
    /// selected filter does not use.
    pub fn validate(&self) -> FourierResult<()> {
        check_cutoff("low_cutoff", self.low_cutoff)?;
        check_cutoff("high_cutoff", self.high_cutoff)?;
        self.filter().validate()
    }

    /// The filter selected by `filter_type`.
    ///
    /// `low` uses `low_cutoff`, `high` uses `high_cutoff` and `band` keeps
    /// the range between them.
    pub fn filter(&self) -> FrequencyFilter {
        match self.filter_type {
            FilterKind::Low => FrequencyFilter::LowPass {
                cutoff: self.low_cutoff,
            },
            FilterKind::High => FrequencyFilter::HighPass {
                cutoff: self.high_cutoff,
            },
            FilterKind::Band => FrequencyFilter::BandPass {
                low: self.low_cutoff,
                high: self.high_cutoff,
            },
        }
    }
}

fn parse_f64(key: &str, val: &str) -> FourierResult<f64> {
    val.trim()
        .parse()
        .map_err(|_| FourierError::InvalidConfig(format!("{} must be a number, got '{}'", key, val)))
}

fn parse_bool(val: &str) -> bool {
    let val = val.trim();
    val.eq_ignore_ascii_case("true") || val == "1"
}

//! Layered configuration for the `fourier` command.
//!
//! Precedence, lowest to highest: built-in defaults, an optional YAML
//! parameter file, environment variables, command-line flags.

use std::path::Path;

use anyhow::{Context, Result};
use fourier::{FilterKind, FourierConfig};
use tracing::debug;

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct FlagOverrides {
    pub filter_type: Option<FilterKind>,
    pub low_cutoff: Option<f64>,
    pub high_cutoff: Option<f64>,
    pub show_progress: Option<bool>,
    pub save_spectrum: bool,
}

impl FlagOverrides {
    fn apply(&self, config: &mut FourierConfig) {
        if let Some(kind) = self.filter_type {
            config.filter_type = kind;
        }
        if let Some(low) = self.low_cutoff {
            config.low_cutoff = low;
        }
        if let Some(high) = self.high_cutoff {
            config.high_cutoff = high;
        }
        if let Some(show) = self.show_progress {
            config.show_progress = show;
        }
        if self.save_spectrum {
            config.show_transform_images = true;
        }
    }
}

/// Load a parameter file. Missing keys keep their defaults.
pub fn load_file(path: &Path) -> Result<FourierConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    // An empty file parses as YAML null
    if content.trim().is_empty() {
        return Ok(FourierConfig::default());
    }

    let config: FourierConfig = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    debug!(path = %path.display(), ?config, "Loaded config file");
    Ok(config)
}

/// Resolve the effective configuration and validate it.
pub fn resolve(
    file: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
    flags: &FlagOverrides,
) -> Result<FourierConfig> {
    let mut config = match file {
        Some(path) => load_file(path)?,
        None => FourierConfig::default(),
    };

    config
        .apply_vars(env)
        .context("Invalid configuration in environment")?;
    flags.apply(&mut config);
    config.validate().context("Invalid filter parameters")?;

    Ok(config)
}

//! Image processing command-line tool.
//!
//! The `fourier` mode runs a direct 2D DFT over the input image, applies a
//! low-, high- or band-pass filter to the centered spectrum, inverts it and
//! writes the result as a PNG.

mod config;
mod pipeline;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use fourier::FilterKind;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use config::FlagOverrides;

#[derive(Parser, Debug)]
#[command(name = "imgproc")]
#[command(about = "Image processing tools", long_about = None)]
struct Cli {
    /// Log level or filter directives, e.g. `debug` or `imgproc=debug,fourier=info`
    #[arg(long, env = "LOG_LEVEL", default_value = "info", global = true)]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, env = "LOG_JSON", global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Filter an image in the frequency domain
    Fourier(FourierArgs),
}

#[derive(Args, Debug)]
struct FourierArgs {
    /// Input image (any format the `image` crate decodes)
    #[arg(short, long)]
    input: PathBuf,

    /// Output PNG path
    #[arg(short, long)]
    output: PathBuf,

    /// YAML parameter file
    #[arg(short, long, env = "FOURIER_CONFIG")]
    config: Option<PathBuf>,

    /// Filter type: low, high or band
    #[arg(long)]
    filter_type: Option<FilterKind>,

    /// Lower cutoff (fraction of half the smaller image side)
    #[arg(long)]
    low_cutoff: Option<f64>,

    /// Upper cutoff (fraction of half the smaller image side)
    #[arg(long)]
    high_cutoff: Option<f64>,

    /// Log progress for each transformed row and column
    #[arg(long, value_name = "BOOL")]
    show_progress: Option<bool>,

    /// Also save magnitude and phase images next to the output
    #[arg(long)]
    save_spectrum: bool,
}

impl FourierArgs {
    fn overrides(&self) -> FlagOverrides {
        FlagOverrides {
            filter_type: self.filter_type,
            low_cutoff: self.low_cutoff,
            high_cutoff: self.high_cutoff,
            show_progress: self.show_progress,
            save_spectrum: self.save_spectrum,
        }
    }
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = log_filter(&cli.log_level)?;
    let builder = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if cli.log_json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }

    match cli.command {
        Commands::Fourier(args) => {
            let config = config::resolve(
                args.config.as_deref(),
                |key| std::env::var(key).ok(),
                &args.overrides(),
            )?;
            info!(?config, "Starting fourier filtering");

            let summary = pipeline::run_fourier(&args.input, &args.output, &config)?;
            info!(
                width = summary.width,
                height = summary.height,
                filter = %summary.filter.kind(),
                output = %summary.output.display(),
                "Done"
            );
            if let Some((magnitude, phase)) = &summary.spectrum_images {
                info!(
                    magnitude = %magnitude.display(),
                    phase = %phase.display(),
                    "Saved spectrum images"
                );
            }
        }
    }

    Ok(())
}

/// Parse `--log-level` as `RUST_LOG`-style directives.
fn log_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives).with_context(|| format!("Invalid log level: {}", directives))
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `fu-plot`: emit generated point clouds.
//!
//! # Usage
//! ```text
//! fu-plot [--config FILE] [--generator KIND] [--count N] [--format json|csv] [--output FILE]
//! ```
//!
//! Points go to stdout (or `--output`); logs go to stderr.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fu_cli::{generate, write_points, GeneratorKind, OutputFormat, PlotConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Emit generated point clouds as JSON or CSV")]
struct Args {
    /// JSON config file; explicit flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Point generator
    #[arg(long, value_enum)]
    generator: Option<GeneratorKind>,
    /// Number of points
    #[arg(long)]
    count: Option<usize>,
    /// Azimuthal step (spherical) or turn fraction per point (spiroid)
    #[arg(long, allow_hyphen_values = true)]
    step: Option<f64>,
    /// Fraction of the sphere to cover (spherical, fibonacci)
    #[arg(long, allow_hyphen_values = true)]
    coverage: Option<f64>,
    /// Radial exponent (spiroid)
    #[arg(long, allow_hyphen_values = true)]
    distribution: Option<f64>,
    /// Seed for the random generator
    #[arg(long)]
    seed: Option<u64>,
    /// Output encoding
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// Write points to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
    /// Default log level; `RUST_LOG` directives take precedence per target
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn resolve(&self) -> Result<PlotConfig> {
        let mut config = match &self.config {
            Some(path) => PlotConfig::load(path)
                .with_context(|| format!("load config {}", path.display()))?,
            None => PlotConfig::default(),
        };
        if let Some(generator) = self.generator {
            config.generator = generator;
        }
        if let Some(count) = self.count {
            config.count = count;
        }
        if let Some(step) = self.step {
            config.step = step;
        }
        if let Some(coverage) = self.coverage {
            config.coverage = coverage;
        }
        if let Some(distribution) = self.distribution {
            config.distribution = distribution;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        config.validate().context("invalid plot config")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                args.log_level
                    .parse()
                    .with_context(|| format!("invalid --log-level {:?}", args.log_level))?,
            ),
        )
        .init();

    let config = args.resolve()?;
    debug!(?config, "resolved plot config");
    let points = generate(&config);

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("create output {}", path.display()))?;
            write_points(&points, config.format, BufWriter::new(file))
                .with_context(|| format!("write {}", path.display()))?;
        }
        None => {
            write_points(&points, config.format, io::stdout().lock()).context("write stdout")?;
        }
    }
    Ok(())
}

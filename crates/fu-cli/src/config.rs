// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Plot configuration: JSON file values with built-in defaults.

use std::path::Path;

use clap::ValueEnum;
use fu_math::plot::GOLDEN_RATIO;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which point generator to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    /// Spiral over the sphere with a configurable azimuthal step.
    Spherical,
    /// Golden-ratio sphere spiral.
    #[default]
    Fibonacci,
    /// Planar spiral inside the unit disc.
    Spiroid,
    /// Seeded uniform directions on the sphere.
    Random,
}

impl GeneratorKind {
    /// Whether the generator produces 2D points.
    pub const fn is_planar(self) -> bool {
        matches!(self, Self::Spiroid)
    }
}

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON array of `{x, y[, z]}` objects.
    #[default]
    Json,
    /// Header row plus one comma-separated record per point.
    Csv,
}

/// Error type for config loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error while reading the file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed or unrecognised JSON.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Zero points requested.
    #[error("count must be at least 1")]
    EmptyCount,
    /// A numeric parameter is NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// Offending field name.
        field: &'static str,
        /// Value supplied.
        value: f64,
    },
    /// `step` is zero, which would divide the azimuth by zero.
    #[error("step must be non-zero")]
    ZeroStep,
    /// `coverage` outside `[0, 1]` pushes `acos` out of its domain.
    #[error("coverage must be within [0, 1], got {0}")]
    CoverageOutOfRange(f64),
    /// A negative `distribution` sends the first spiroid radius to infinity.
    #[error("distribution must not be negative, got {0}")]
    NegativeDistribution(f64),
}

/// Parameters for a single `fu-plot` run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
    /// Number of points to emit.
    pub count: usize,
    /// Generator to run.
    pub generator: GeneratorKind,
    /// Azimuthal step (`spherical`) or turn fraction per point (`spiroid`).
    pub step: f64,
    /// Fraction of the sphere covered by `spherical`/`fibonacci`.
    pub coverage: f64,
    /// Radial exponent for `spiroid`.
    pub distribution: f64,
    /// Seed for `random`; `None` seeds from the clock.
    pub seed: Option<u64>,
    /// Output encoding.
    pub format: OutputFormat,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            count: 100,
            generator: GeneratorKind::default(),
            step: GOLDEN_RATIO,
            coverage: 1.0,
            distribution: 1.0,
            seed: None,
            format: OutputFormat::default(),
        }
    }
}

impl PlotConfig {
    /// Reads a JSON config; absent fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let bytes = std::fs::read(path)?;
        Self::from_json(&bytes)
    }

    /// Parses a JSON config from bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ConfigError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Rejects parameters that cannot produce finite points.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::EmptyCount);
        }
        for (field, value) in [
            ("step", self.step),
            ("coverage", self.coverage),
            ("distribution", self.distribution),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        if self.step == 0.0 {
            return Err(ConfigError::ZeroStep);
        }
        if !(0.0..=1.0).contains(&self.coverage) {
            return Err(ConfigError::CoverageOutOfRange(self.coverage));
        }
        if self.distribution < 0.0 {
            return Err(ConfigError::NegativeDistribution(self.distribution));
        }
        Ok(())
    }
}

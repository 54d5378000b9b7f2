// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Library half of `fu-plot`: configuration, generation and encoding.
#![forbid(unsafe_code)]

pub mod config;
pub mod output;
pub mod points;

pub use config::{ConfigError, GeneratorKind, OutputFormat, PlotConfig};
pub use output::write_points;
pub use points::{generate, Points};

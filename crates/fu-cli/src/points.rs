// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Runs the configured generator.

use fu_math::{plot, Vec2, Vec3};
use fu_rnd::{unit_vec3, Rng};
use tracing::{debug, info};

use crate::config::{GeneratorKind, PlotConfig};

/// Generated points, planar or spatial depending on the generator.
#[derive(Debug, Clone, PartialEq)]
pub enum Points {
    /// 2D points.
    Planar(Vec<Vec2<f64>>),
    /// 3D points.
    Spatial(Vec<Vec3<f64>>),
}

impl Points {
    /// Number of points.
    pub fn len(&self) -> usize {
        match self {
            Self::Planar(points) => points.len(),
            Self::Spatial(points) => points.len(),
        }
    }

    /// Whether there are no points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Generates `config.count` points. `config` is expected to be validated.
pub fn generate(config: &PlotConfig) -> Points {
    let n = config.count;
    let points = match config.generator {
        GeneratorKind::Spherical => Points::Spatial(
            plot::range(n, plot::spherical(n, config.step, config.coverage)).collect(),
        ),
        GeneratorKind::Fibonacci => Points::Spatial(
            plot::range(n, plot::fibonacci_sphere(n, config.coverage)).collect(),
        ),
        GeneratorKind::Spiroid => Points::Planar(
            plot::range(n, plot::spiroid(n, config.step, config.distribution)).collect(),
        ),
        GeneratorKind::Random => {
            let mut rng = match config.seed {
                Some(seed) => {
                    debug!(seed, "seeding random generator");
                    Rng::from_seed_u64(seed)
                }
                None => Rng::from_entropy(),
            };
            Points::Spatial(plot::range(n, |_| unit_vec3(&mut rng)).collect())
        }
    };
    info!(count = points.len(), generator = ?config.generator, "generated points");
    points
}

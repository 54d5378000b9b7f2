// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use fu_math::{Float, Vec2, Vec3};

use crate::rng::Rng;

/// Uniformly distributed direction on the unit circle.
pub fn unit_vec2<T: Float>(rng: &mut Rng) -> Vec2<T> {
    let theta = T::tau() * T::from_f64(rng.next_f64());
    Vec2::from_polar(theta, T::one())
}

/// Uniformly distributed direction on the unit sphere.
///
/// `cos φ` is drawn uniformly from `[-1, 1)` (Archimedes' hat-box theorem),
/// then converted through spherical coordinates.
pub fn unit_vec3<T: Float>(rng: &mut Rng) -> Vec3<T> {
    let z = T::from_f64(rng.double(-1.0, 1.0));
    let theta = T::tau() * T::from_f64(rng.next_f64());
    Vec3::from_spherical(z.acos(), theta)
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Conversions from polar, spherical and cylindrical coordinates.
//!
//! Angles are in radians. These functions never fail; non-finite inputs
//! propagate as NaN/infinity.

use crate::scalar::Trig;

/// Polar `(theta, r)` to `(x, y) = (r·cosθ, r·sinθ)`.
pub fn from_polar<T: Trig>(theta: T, r: T) -> (T, T) {
    let (sin, cos) = theta.sin_cos();
    (r * cos, r * sin)
}

/// Unit-sphere spherical coordinates to `(x, y, z)`.
///
/// `phi` is the inclination measured from the +Z pole and `theta` the
/// azimuth around it: `(sinφ·cosθ, sinφ·sinθ, cosφ)`.
pub fn from_spherical<T: Trig>(phi: T, theta: T) -> (T, T, T) {
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    (sin_phi * cos_theta, sin_phi * sin_theta, cos_phi)
}

/// [`from_spherical`] scaled by radius `r`.
pub fn from_spherical_radius<T: Trig>(phi: T, theta: T, r: T) -> (T, T, T) {
    let (x, y, z) = from_spherical(phi, theta);
    (x * r, y * r, z * r)
}

/// Cylindrical `(theta, r, z)` to `(r·cosθ, r·sinθ, z)`.
pub fn from_cylindrical<T: Trig>(theta: T, r: T, z: T) -> (T, T, T) {
    let (x, y) = from_polar(theta, r);
    (x, y, z)
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Index-driven point generators.
//!
//! Each generator is a closure `index -> point` for a fixed point count `n`;
//! [`range`] turns one into a lazy sequence. Laziness and restart semantics
//! belong to the caller: the closures themselves are pure.
//!
//! Generators with fewer than two points clamp the `i / (n − 1)` progress
//! denominator to one, so a single point lands on the starting pole instead of
//! becoming NaN.

use tracing::debug;

use crate::scalar::Float;
use crate::vec2::Vec2;
use crate::vec3::Vec3;

/// The golden ratio, used as the azimuthal step of [`fibonacci_sphere`].
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Lazily yields `f(0), f(1), …, f(n − 1)`.
pub fn range<P, F>(n: usize, f: F) -> impl Iterator<Item = P>
where
    F: FnMut(usize) -> P,
{
    (0..n).map(f)
}

fn progress_denominator<T: Float>(n: usize) -> T {
    if n < 2 {
        debug!(count = n, "degenerate point count; clamping progress denominator");
    }
    T::from_count(n.saturating_sub(1).max(1))
}

/// Points spiralling from the `-Z` pole towards `+Z`.
///
/// Point `i` sits at inclination `acos(2p − 1)` with `p = i / (n − 1) ·
/// coverage` and azimuth `τ · i / step`. `coverage = 1` spans the whole
/// sphere; smaller values stop short of the `+Z` pole.
pub fn spherical<T: Float>(n: usize, step: T, coverage: T) -> impl Fn(usize) -> Vec3<T> {
    debug!(count = n, step = ?step, coverage = ?coverage, "spherical point generator");
    let denom = progress_denominator::<T>(n);
    let tau = T::tau();

    move |index| {
        let i = T::from_count(index);
        let pct = i / denom * coverage;
        let phi = (pct + pct - T::one()).acos();
        let theta = tau * i / step;
        Vec3::from_spherical(phi, theta)
    }
}

/// Near-uniform sphere sampling: [`spherical`] with a golden-ratio step.
pub fn fibonacci_sphere<T: Float>(n: usize, coverage: T) -> impl Fn(usize) -> Vec3<T> {
    spherical(n, T::from_f64(GOLDEN_RATIO), coverage)
}

/// Planar spiral of `n` points growing from the origin to radius one.
///
/// Point `i` has angle `τ · step · i` and radius `(i / (n − 1))^distribution`;
/// `distribution > 1` packs points towards the centre, `< 1` towards the rim.
pub fn spiroid<T: Float>(n: usize, step: T, distribution: T) -> impl Fn(usize) -> Vec2<T> {
    debug!(count = n, step = ?step, distribution = ?distribution, "spiroid point generator");
    let denom = progress_denominator::<T>(n);
    let tau = T::tau();

    move |index| {
        let i = T::from_count(index);
        let radius = (i / denom).pow(distribution);
        Vec2::from_polar(tau * step * i, radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_lazy_and_sized() {
        let points: Vec<usize> = range(4, |i| i * i).collect();
        assert_eq!(points, vec![0, 1, 4, 9]);
    }

    #[test]
    fn full_coverage_spans_both_poles() {
        let generator = spherical(5, 1.0_f64, 1.0);
        let first = generator(0);
        let last = generator(4);
        assert!((first.z + 1.0).abs() < 1e-12);
        assert!((last.z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn single_point_does_not_produce_nan() {
        let generator = fibonacci_sphere(1, 1.0_f64);
        let p = generator(0);
        assert!(p.x.is_finite() && p.y.is_finite() && p.z.is_finite());
    }

    #[test]
    fn spiroid_ends_on_the_unit_circle() {
        let generator = spiroid(10, 0.25_f64, 1.0);
        assert_eq!(generator(0), Vec2::new(0.0, 0.0));
        assert!((generator(9).length() - 1.0).abs() < 1e-12);
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Normally distributed sampling.
//!
//! A transform maps two uniforms in `(0, 1]` to a standard normal deviate, or
//! NaN to reject the draw. [`next`] retries rejected draws and then scales the
//! deviate by the requested mean and standard deviation.

use fu_math::math;
use tracing::trace;

use crate::rng::Rng;

/// Draws `mean + std_dev · transform(u1, u2)`, redrawing `u1, u2` while the
/// transform yields NaN.
///
/// A transform that never accepts any input never returns.
pub fn next<F>(rng: &mut Rng, mean: f64, std_dev: f64, transform: F) -> f64
where
    F: Fn(f64, f64) -> f64,
{
    let mut rejected = 0_u32;
    loop {
        let u1 = 1.0 - rng.next_f64();
        let u2 = 1.0 - rng.next_f64();
        let z = transform(u1, u2);
        if !z.is_nan() {
            if rejected > 0 {
                trace!(rejected, "normal draw accepted after rejections");
            }
            return mean + std_dev * z;
        }
        rejected = rejected.saturating_add(1);
    }
}

/// [`next`] with the [`box_muller`] transform.
pub fn normal(rng: &mut Rng, mean: f64, std_dev: f64) -> f64 {
    next(rng, mean, std_dev, box_muller)
}

/// Box–Muller transform: `sqrt(-2 ln u1) · sin(2π u2)`.
pub fn box_muller(u1: f64, u2: f64) -> f64 {
    (-2.0 * u1.ln()).sqrt() * (math::tau::<f64>() * u2).sin()
}

/// Marsaglia polar transform.
///
/// Maps both uniforms to `[-1, 1]` and rejects (NaN) points outside the unit
/// disc or at its centre.
pub fn marsaglia_polar(u1: f64, u2: f64) -> f64 {
    let v1 = 2.0 * u1 - 1.0;
    let v2 = 2.0 * u2 - 1.0;
    let s = v1 * v1 + v2 * v2;
    if s >= 1.0 || s == 0.0 {
        return f64::NAN;
    }
    v1 * (-2.0 * s.ln() / s).sqrt()
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Free-function facade over the scalar capability traits.
//!
//! Each function is a thin pass-through to the type's own operation, bounded by
//! the narrowest capability that provides it. Nothing here fails explicitly:
//! domain errors come back as NaN or infinities under IEEE-754 types.

use crate::scalar::{
    Abs, Float, Hyperbolic, Log, Num, Ordered, Pow, Root, Rounding, Signed, Trig,
};

// ── Constants ───────────────────────────────────────────────────────

/// Additive identity.
pub fn zero<T: Num>() -> T {
    T::zero()
}

/// Multiplicative identity.
pub fn one<T: Num>() -> T {
    T::one()
}

/// `-1`.
pub fn neg_one<T: Signed>() -> T {
    T::neg_one()
}

/// Negative zero.
pub fn neg_zero<T: Float>() -> T {
    T::neg_zero()
}

/// Positive infinity.
pub fn infinity<T: Float>() -> T {
    T::infinity()
}

/// Negative infinity.
pub fn neg_infinity<T: Float>() -> T {
    T::neg_infinity()
}

/// Quiet NaN.
pub fn nan<T: Float>() -> T {
    T::nan()
}

/// Machine epsilon.
pub fn epsilon<T: Float>() -> T {
    T::epsilon()
}

/// Euler's number.
pub fn e<T: Float>() -> T {
    T::e()
}

/// π in the precision of `T`.
pub fn pi<T: Trig>() -> T {
    T::pi()
}

/// 2π in the precision of `T`.
pub fn tau<T: Float>() -> T {
    T::tau()
}

// ── Signs ───────────────────────────────────────────────────────────

/// Absolute value.
pub fn abs<T: Abs>(value: T) -> T {
    value.abs()
}

/// `-1`, `0` or `1` by comparison against zero.
///
/// Values that compare neither below nor above zero (zero itself, NaN) yield
/// `0`.
pub fn sign<T: Ordered>(value: T) -> i32 {
    if value < T::zero() {
        -1
    } else if value > T::zero() {
        1
    } else {
        0
    }
}

/// Unary negation.
pub fn negate<T: Signed>(value: T) -> T {
    -value
}

// ── Checks ──────────────────────────────────────────────────────────

/// `value == 0`.
pub fn is_zero<T: Num>(value: T) -> bool {
    value.is_zero()
}

/// `value >= 0`; floats read the sign bit, so `+0.0` is positive and `-0.0`
/// is not.
pub fn is_positive<T: Ordered>(value: T) -> bool {
    value.is_sign_positive()
}

/// `value < 0`; floats read the sign bit, so `-0.0` is negative.
pub fn is_negative<T: Ordered>(value: T) -> bool {
    value.is_sign_negative()
}

/// `value` is NaN.
pub fn is_nan<T: Float>(value: T) -> bool {
    value.is_nan()
}

/// `value` is `+∞`.
pub fn is_positive_infinity<T: Float>(value: T) -> bool {
    value.is_infinite() && value > T::zero()
}

/// `value` is `-∞`.
pub fn is_negative_infinity<T: Float>(value: T) -> bool {
    value.is_infinite() && value < T::zero()
}

// ── Comparisons ─────────────────────────────────────────────────────

/// Restricts `value` to `[min, max]` using the type's own clamp.
pub fn clamp<T: Ordered>(value: T, min: T, max: T) -> T {
    value.clamp(min, max)
}

/// Smaller of two values. For floats a NaN operand is ignored.
pub fn min<T: Ordered>(x: T, y: T) -> T {
    x.min(y)
}

/// Larger of two values. For floats a NaN operand is ignored.
pub fn max<T: Ordered>(x: T, y: T) -> T {
    x.max(y)
}

/// Smaller of two floats, propagating NaN and ordering `-0.0` below `+0.0`.
pub fn minimum<T: Float>(x: T, y: T) -> T {
    if x.is_nan() || y.is_nan() {
        T::nan()
    } else if x < y {
        x
    } else if y < x {
        y
    } else if x.is_sign_negative() {
        x
    } else {
        y
    }
}

/// Larger of two floats, propagating NaN and ordering `+0.0` above `-0.0`.
pub fn maximum<T: Float>(x: T, y: T) -> T {
    if x.is_nan() || y.is_nan() {
        T::nan()
    } else if x > y {
        x
    } else if y > x {
        y
    } else if x.is_sign_negative() {
        y
    } else {
        x
    }
}

/// Whichever of `x`, `y` has the smaller magnitude; ties pick the smaller
/// value.
pub fn min_magnitude<T: Abs>(x: T, y: T) -> T {
    let (ax, ay) = (x.abs(), y.abs());
    if ax < ay {
        x
    } else if ay < ax {
        y
    } else {
        x.min(y)
    }
}

/// Whichever of `x`, `y` has the larger magnitude; ties pick the larger value.
pub fn max_magnitude<T: Abs>(x: T, y: T) -> T {
    let (ax, ay) = (x.abs(), y.abs());
    if ax > ay {
        x
    } else if ay > ax {
        y
    } else {
        x.max(y)
    }
}

// ── Rounding ────────────────────────────────────────────────────────

/// Nearest integer, ties to even.
pub fn round<T: Rounding>(value: T) -> T {
    value.round()
}

/// Rounds to `digits` fractional decimal digits, ties to even.
pub fn round_digits<T: Rounding>(value: T, digits: i32) -> T {
    value.round_digits(digits)
}

/// Largest integer `<= value`.
pub fn floor<T: Rounding>(value: T) -> T {
    value.floor()
}

/// Smallest integer `>= value`.
pub fn ceiling<T: Rounding>(value: T) -> T {
    value.ceil()
}

// ── Arithmetic ──────────────────────────────────────────────────────

/// `augend + addend`.
pub fn add<T: Num>(augend: T, addend: T) -> T {
    augend + addend
}

/// `minuend - subtrahend`.
pub fn sub<T: Num>(minuend: T, subtrahend: T) -> T {
    minuend - subtrahend
}

/// `multiplicand * multiplier`.
pub fn mul<T: Num>(multiplicand: T, multiplier: T) -> T {
    multiplicand * multiplier
}

/// `dividend / divisor`.
pub fn div<T: Num>(dividend: T, divisor: T) -> T {
    dividend / divisor
}

/// `base` raised to `exp`.
pub fn pow<T: Pow>(base: T, exp: T) -> T {
    base.pow(exp)
}

// ── Roots ───────────────────────────────────────────────────────────

/// Square root.
pub fn sqrt<T: Root>(value: T) -> T {
    value.sqrt()
}

/// Cube root.
pub fn cbrt<T: Root>(value: T) -> T {
    value.cbrt()
}

/// `sqrt(x² + y²)`.
pub fn hypot<T: Root>(x: T, y: T) -> T {
    x.hypot(y)
}

/// `n`-th root.
pub fn root_n<T: Root>(value: T, n: i32) -> T {
    value.root_n(n)
}

// ── Logarithms ──────────────────────────────────────────────────────

/// Natural logarithm.
pub fn log<T: Log>(value: T) -> T {
    value.ln()
}

/// Base-2 logarithm.
pub fn log2<T: Log>(value: T) -> T {
    value.log2()
}

/// Base-10 logarithm.
pub fn log10<T: Log>(value: T) -> T {
    value.log10()
}

/// `ln(1 + x)`.
pub fn log_p1<T: Log>(x: T) -> T {
    x.ln_1p()
}

/// `log2(1 + x)`.
pub fn log2_p1<T: Log>(x: T) -> T {
    x.log2_1p()
}

/// `log10(1 + x)`.
pub fn log10_p1<T: Log>(x: T) -> T {
    x.log10_1p()
}

/// `e^x`.
pub fn exp<T: Log>(x: T) -> T {
    x.exp()
}

// ── Trigonometry ────────────────────────────────────────────────────

/// Four-quadrant arctangent of `y / x`.
pub fn atan2<T: Float>(y: T, x: T) -> T {
    y.atan2(x)
}

/// `atan2(y, x) / π`.
pub fn atan2_pi<T: Float>(y: T, x: T) -> T {
    y.atan2_pi(x)
}

/// Arccosine.
pub fn acos<T: Trig>(value: T) -> T {
    value.acos()
}

/// `acos(value) / π`.
pub fn acos_pi<T: Trig>(value: T) -> T {
    value.acos_pi()
}

/// Arcsine.
pub fn asin<T: Trig>(value: T) -> T {
    value.asin()
}

/// `asin(value) / π`.
pub fn asin_pi<T: Trig>(value: T) -> T {
    value.asin_pi()
}

/// Arctangent.
pub fn atan<T: Trig>(value: T) -> T {
    value.atan()
}

/// `atan(value) / π`.
pub fn atan_pi<T: Trig>(value: T) -> T {
    value.atan_pi()
}

/// Cosine.
pub fn cos<T: Trig>(value: T) -> T {
    value.cos()
}

/// `cos(value · π)`.
pub fn cos_pi<T: Trig>(value: T) -> T {
    value.cos_pi()
}

/// Sine.
pub fn sin<T: Trig>(value: T) -> T {
    value.sin()
}

/// `sin(value · π)`.
pub fn sin_pi<T: Trig>(value: T) -> T {
    value.sin_pi()
}

/// Tangent.
pub fn tan<T: Trig>(value: T) -> T {
    value.tan()
}

/// `tan(value · π)`.
pub fn tan_pi<T: Trig>(value: T) -> T {
    value.tan_pi()
}

/// `(sin, cos)` of `value`.
pub fn sin_cos<T: Trig>(value: T) -> (T, T) {
    value.sin_cos()
}

/// `(sin, cos)` of `value · π`.
pub fn sin_cos_pi<T: Trig>(value: T) -> (T, T) {
    value.sin_cos_pi()
}

/// `degrees · π / 180`, using the type's own π.
pub fn deg_to_rad<T: Float>(degrees: T) -> T {
    T::pi() * degrees / T::from_f64(180.0)
}

/// `radians · 180 / π`, using the type's own π.
pub fn rad_to_deg<T: Float>(radians: T) -> T {
    radians * T::from_f64(180.0) / T::pi()
}

// ── Hyperbolics ─────────────────────────────────────────────────────

/// Inverse hyperbolic cosine.
pub fn acosh<T: Hyperbolic>(value: T) -> T {
    value.acosh()
}

/// Inverse hyperbolic sine.
pub fn asinh<T: Hyperbolic>(value: T) -> T {
    value.asinh()
}

/// Inverse hyperbolic tangent.
pub fn atanh<T: Hyperbolic>(value: T) -> T {
    value.atanh()
}

/// Hyperbolic cosine.
pub fn cosh<T: Hyperbolic>(value: T) -> T {
    value.cosh()
}

/// Hyperbolic sine.
pub fn sinh<T: Hyperbolic>(value: T) -> T {
    value.sinh()
}

/// Hyperbolic tangent.
pub fn tanh<T: Hyperbolic>(value: T) -> T {
    value.tanh()
}

// ── Interpolation ───────────────────────────────────────────────────

/// Linear interpolation; exact at `weight = 0` and `weight = 1`.
pub fn lerp<T: Float>(from: T, to: T, weight: T) -> T {
    from.lerp(to, weight)
}

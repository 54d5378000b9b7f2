// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Numeric capability traits for generic math.
//!
//! Every operation family lives in its own trait so a concrete numeric type
//! opts into exactly the families it supports, and generic code declares only
//! the bounds it needs:
//!
//! - [`Num`]: ring arithmetic (`+`, `-`, `*`, `/`) and the additive and
//!   multiplicative identities.
//! - [`Signed`], [`Ordered`], [`Abs`]: negation, total-ish ordering and
//!   magnitude.
//! - [`Root`], [`Pow`], [`Log`], [`Trig`], [`Hyperbolic`], [`Rounding`]:
//!   transcendental families.
//! - [`Float`]: IEEE-754 semantics (NaN, signed infinities, signed zero) on top
//!   of all of the above.
//!
//! Implementations are thin pass-throughs to the type's own operations. Domain
//! errors (`sqrt(-1)`, `ln(0)`) surface as whatever the representation
//! produces; nothing here converts them into explicit failures.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Ring-like arithmetic plus division and the two identities.
///
/// Arithmetic operators are required via the standard operator traits so
/// generic code can use `+`, `-`, `*` and `/` directly.
pub trait Num:
    Copy
    + Debug
    + PartialEq
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Returns the additive identity (zero).
    fn zero() -> Self;

    /// Returns the multiplicative identity (one).
    fn one() -> Self;

    /// Converts an element count into this type (used when averaging).
    ///
    /// Counts beyond the type's range saturate at its maximum; floats round to
    /// the nearest representable value. A non-zero count never maps to zero.
    fn from_count(count: usize) -> Self;

    /// Returns `true` when `self` equals [`Num::zero`].
    fn is_zero(self) -> bool {
        self == Self::zero()
    }
}

/// Types with an additive inverse.
pub trait Signed: Num + Neg<Output = Self> {
    /// Returns `-1`.
    fn neg_one() -> Self {
        -Self::one()
    }
}

/// Types with a partial order.
///
/// `min`, `max` and `clamp` delegate to the type's own definitions, including
/// how they treat unordered values such as NaN.
pub trait Ordered: Num + PartialOrd {
    /// Smaller of `self` and `other`.
    fn min(self, other: Self) -> Self;

    /// Larger of `self` and `other`.
    fn max(self, other: Self) -> Self;

    /// Restricts `self` to `[min, max]`.
    fn clamp(self, min: Self, max: Self) -> Self;

    /// `true` for zero and everything above it. IEEE-754 types read the
    /// sign bit, so `-0.0` is not positive.
    fn is_sign_positive(self) -> bool {
        self >= Self::zero()
    }

    /// `true` below zero. IEEE-754 types read the sign bit, so `-0.0` is
    /// negative.
    fn is_sign_negative(self) -> bool {
        self < Self::zero()
    }
}

/// Magnitude of a signed, ordered value.
pub trait Abs: Signed + Ordered {
    /// Absolute value.
    fn abs(self) -> Self;
}

/// Root extraction.
pub trait Root: Num {
    /// Square root.
    fn sqrt(self) -> Self;

    /// Cube root.
    fn cbrt(self) -> Self;

    /// `sqrt(self² + other²)` without undue overflow where the type allows it.
    fn hypot(self, other: Self) -> Self;

    /// The `n`-th root of `self`.
    fn root_n(self, n: i32) -> Self;
}

/// Exponentiation.
pub trait Pow: Num {
    /// `self` raised to `exp`.
    fn pow(self, exp: Self) -> Self;
}

/// Logarithms and the natural exponential.
pub trait Log: Num {
    /// Natural logarithm.
    fn ln(self) -> Self;

    /// Base-2 logarithm.
    fn log2(self) -> Self;

    /// Base-10 logarithm.
    fn log10(self) -> Self;

    /// `ln(1 + self)`, accurate near zero.
    fn ln_1p(self) -> Self;

    /// `log2(1 + self)`.
    fn log2_1p(self) -> Self;

    /// `log10(1 + self)`.
    fn log10_1p(self) -> Self;

    /// `e^self`.
    fn exp(self) -> Self;
}

/// Circular trigonometry (angles in radians).
pub trait Trig: Num {
    /// The type's own π constant.
    fn pi() -> Self;

    /// Sine.
    fn sin(self) -> Self;

    /// Cosine.
    fn cos(self) -> Self;

    /// Tangent.
    fn tan(self) -> Self;

    /// Arcsine.
    fn asin(self) -> Self;

    /// Arccosine.
    fn acos(self) -> Self;

    /// Arctangent.
    fn atan(self) -> Self;

    /// Returns `(sin, cos)`.
    ///
    /// The default computes both separately; implementations may share range
    /// reduction.
    fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }

    /// `sin(self · π)`.
    fn sin_pi(self) -> Self {
        (self * Self::pi()).sin()
    }

    /// `cos(self · π)`.
    fn cos_pi(self) -> Self {
        (self * Self::pi()).cos()
    }

    /// `tan(self · π)`.
    fn tan_pi(self) -> Self {
        (self * Self::pi()).tan()
    }

    /// `(sin(self · π), cos(self · π))`.
    fn sin_cos_pi(self) -> (Self, Self) {
        (self * Self::pi()).sin_cos()
    }

    /// `asin(self) / π`.
    fn asin_pi(self) -> Self {
        self.asin() / Self::pi()
    }

    /// `acos(self) / π`.
    fn acos_pi(self) -> Self {
        self.acos() / Self::pi()
    }

    /// `atan(self) / π`.
    fn atan_pi(self) -> Self {
        self.atan() / Self::pi()
    }
}

/// Hyperbolic functions.
pub trait Hyperbolic: Num {
    /// Hyperbolic sine.
    fn sinh(self) -> Self;

    /// Hyperbolic cosine.
    fn cosh(self) -> Self;

    /// Hyperbolic tangent.
    fn tanh(self) -> Self;

    /// Inverse hyperbolic sine.
    fn asinh(self) -> Self;

    /// Inverse hyperbolic cosine.
    fn acosh(self) -> Self;

    /// Inverse hyperbolic tangent.
    fn atanh(self) -> Self;
}

/// Rounding to integral values.
pub trait Rounding: Num {
    /// Rounds to the nearest integer, ties to even.
    fn round(self) -> Self;

    /// Rounds to `digits` fractional decimal digits, ties to even.
    fn round_digits(self, digits: i32) -> Self;

    /// Largest integer `<= self`.
    fn floor(self) -> Self;

    /// Smallest integer `>= self`.
    fn ceil(self) -> Self;
}

/// Lossy conversion to and from `f32` for boundary crossings (interop,
/// serialization, test scaffolding).
pub trait F32Boundary: Copy {
    /// Converts from `f32`, saturating or truncating as the type requires.
    fn from_f32(value: f32) -> Self;

    /// Converts to `f32`, rounding to nearest.
    fn to_f32(self) -> f32;
}

/// IEEE-754 floating point: every capability family plus NaN, signed
/// infinities and signed zero.
pub trait Float:
    Abs + Root + Pow + Log + Trig + Hyperbolic + Rounding + F32Boundary
{
    /// Quiet NaN.
    fn nan() -> Self;

    /// Positive infinity.
    fn infinity() -> Self;

    /// Negative infinity.
    fn neg_infinity() -> Self;

    /// Negative zero.
    fn neg_zero() -> Self;

    /// Machine epsilon (distance from `1.0` to the next representable value).
    fn epsilon() -> Self;

    /// Euler's number.
    fn e() -> Self;

    /// Converts from `f64`, rounding to nearest.
    fn from_f64(value: f64) -> Self;

    /// Returns `true` for NaN.
    fn is_nan(self) -> bool;

    /// Returns `true` for either infinity.
    fn is_infinite(self) -> bool;

    /// Returns `true` when neither NaN nor infinite.
    fn is_finite(self) -> bool;

    /// Four-quadrant arctangent of `self / x`, in `(-π, π]`.
    fn atan2(self, x: Self) -> Self;

    /// Full turn, `2π`.
    fn tau() -> Self {
        Self::pi() + Self::pi()
    }

    /// `atan2(self, x) / π`.
    fn atan2_pi(self, x: Self) -> Self {
        self.atan2(x) / Self::pi()
    }

    /// Linear interpolation `self · (1 − weight) + to · weight`.
    ///
    /// Exact at both endpoints for finite inputs: `weight = 0` yields `self`,
    /// `weight = 1` yields `to`.
    fn lerp(self, to: Self, weight: Self) -> Self {
        self * (Self::one() - weight) + to * weight
    }
}

macro_rules! impl_float {
    ($t:ident) => {
        impl Num for $t {
            fn zero() -> Self {
                0.0
            }

            fn one() -> Self {
                1.0
            }

            fn from_count(count: usize) -> Self {
                count as $t
            }
        }

        impl Signed for $t {}

        impl Ordered for $t {
            fn min(self, other: Self) -> Self {
                $t::min(self, other)
            }

            fn max(self, other: Self) -> Self {
                $t::max(self, other)
            }

            fn clamp(self, min: Self, max: Self) -> Self {
                $t::clamp(self, min, max)
            }

            fn is_sign_positive(self) -> bool {
                $t::is_sign_positive(self)
            }

            fn is_sign_negative(self) -> bool {
                $t::is_sign_negative(self)
            }
        }

        impl Abs for $t {
            fn abs(self) -> Self {
                $t::abs(self)
            }
        }

        impl Root for $t {
            fn sqrt(self) -> Self {
                $t::sqrt(self)
            }

            fn cbrt(self) -> Self {
                $t::cbrt(self)
            }

            fn hypot(self, other: Self) -> Self {
                $t::hypot(self, other)
            }

            fn root_n(self, n: i32) -> Self {
                if n == 0 {
                    return $t::NAN;
                }
                let inv = 1.0 / (n as $t);
                // Odd roots of negative values are real.
                if self < 0.0 && n % 2 != 0 {
                    -$t::powf(-self, inv)
                } else {
                    $t::powf(self, inv)
                }
            }
        }

        impl Pow for $t {
            fn pow(self, exp: Self) -> Self {
                $t::powf(self, exp)
            }
        }

        impl Log for $t {
            fn ln(self) -> Self {
                $t::ln(self)
            }

            fn log2(self) -> Self {
                $t::log2(self)
            }

            fn log10(self) -> Self {
                $t::log10(self)
            }

            fn ln_1p(self) -> Self {
                $t::ln_1p(self)
            }

            fn log2_1p(self) -> Self {
                $t::ln_1p(self) / core::$t::consts::LN_2
            }

            fn log10_1p(self) -> Self {
                $t::ln_1p(self) / core::$t::consts::LN_10
            }

            fn exp(self) -> Self {
                $t::exp(self)
            }
        }

        impl Trig for $t {
            fn pi() -> Self {
                core::$t::consts::PI
            }

            fn sin(self) -> Self {
                $t::sin(self)
            }

            fn cos(self) -> Self {
                $t::cos(self)
            }

            fn tan(self) -> Self {
                $t::tan(self)
            }

            fn asin(self) -> Self {
                $t::asin(self)
            }

            fn acos(self) -> Self {
                $t::acos(self)
            }

            fn atan(self) -> Self {
                $t::atan(self)
            }

            fn sin_cos(self) -> (Self, Self) {
                $t::sin_cos(self)
            }
        }

        impl Hyperbolic for $t {
            fn sinh(self) -> Self {
                $t::sinh(self)
            }

            fn cosh(self) -> Self {
                $t::cosh(self)
            }

            fn tanh(self) -> Self {
                $t::tanh(self)
            }

            fn asinh(self) -> Self {
                $t::asinh(self)
            }

            fn acosh(self) -> Self {
                $t::acosh(self)
            }

            fn atanh(self) -> Self {
                $t::atanh(self)
            }
        }

        impl Rounding for $t {
            fn round(self) -> Self {
                $t::round_ties_even(self)
            }

            fn round_digits(self, digits: i32) -> Self {
                let scale = $t::powi(10.0, digits);
                $t::round_ties_even(self * scale) / scale
            }

            fn floor(self) -> Self {
                $t::floor(self)
            }

            fn ceil(self) -> Self {
                $t::ceil(self)
            }
        }

        impl Float for $t {
            fn nan() -> Self {
                $t::NAN
            }

            fn infinity() -> Self {
                $t::INFINITY
            }

            fn neg_infinity() -> Self {
                $t::NEG_INFINITY
            }

            fn neg_zero() -> Self {
                -0.0
            }

            fn epsilon() -> Self {
                $t::EPSILON
            }

            fn e() -> Self {
                core::$t::consts::E
            }

            fn from_f64(value: f64) -> Self {
                value as $t
            }

            fn is_nan(self) -> bool {
                $t::is_nan(self)
            }

            fn is_infinite(self) -> bool {
                $t::is_infinite(self)
            }

            fn is_finite(self) -> bool {
                $t::is_finite(self)
            }

            fn atan2(self, x: Self) -> Self {
                $t::atan2(self, x)
            }

            fn tau() -> Self {
                core::$t::consts::TAU
            }
        }

        impl F32Boundary for $t {
            fn from_f32(value: f32) -> Self {
                Self::from(value)
            }

            fn to_f32(self) -> f32 {
                self as f32
            }
        }
    };
}

impl_float!(f32);
impl_float!(f64);

macro_rules! impl_int {
    ($($t:ty),*) => {$(
        impl Num for $t {
            fn zero() -> Self {
                0
            }

            fn one() -> Self {
                1
            }

            #[allow(clippy::unnecessary_fallible_conversions)]
            fn from_count(count: usize) -> Self {
                <$t>::try_from(count).unwrap_or(<$t>::MAX)
            }
        }

        impl Ordered for $t {
            fn min(self, other: Self) -> Self {
                Ord::min(self, other)
            }

            fn max(self, other: Self) -> Self {
                Ord::max(self, other)
            }

            fn clamp(self, min: Self, max: Self) -> Self {
                Ord::clamp(self, min, max)
            }
        }

        impl F32Boundary for $t {
            #[allow(clippy::cast_sign_loss)]
            fn from_f32(value: f32) -> Self {
                value as $t
            }

            fn to_f32(self) -> f32 {
                self as f32
            }
        }
    )*};
}

impl_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_signed_int {
    ($($t:ty),*) => {$(
        impl Signed for $t {}

        impl Abs for $t {
            fn abs(self) -> Self {
                <$t>::abs(self)
            }
        }
    )*};
}

impl_signed_int!(i8, i16, i32, i64, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_is_half_to_even() {
        assert_eq!(Rounding::round(2.5_f64), 2.0);
        assert_eq!(Rounding::round(3.5_f64), 4.0);
        assert_eq!(Rounding::round(-2.5_f32), -2.0);
    }

    #[test]
    fn round_digits_keeps_requested_precision() {
        assert!((Rounding::round_digits(1.23456_f64, 2) - 1.23).abs() < 1e-12);
        assert_eq!(Rounding::round_digits(0.125_f64, 2), 0.12);
    }

    #[test]
    fn odd_roots_of_negative_values_are_real() {
        assert!((Root::root_n(-8.0_f64, 3) + 2.0).abs() < 1e-12);
        assert!(Root::root_n(-4.0_f64, 2).is_nan());
        assert!(Root::root_n(4.0_f64, 0).is_nan());
    }

    #[test]
    fn float_lerp_endpoints_are_exact() {
        let from = 0.1_f64;
        let to = 7.3_f64;
        assert_eq!(Float::lerp(from, to, 0.0), from);
        assert_eq!(Float::lerp(from, to, 1.0), to);
    }

    #[test]
    fn integer_capabilities_delegate() {
        assert_eq!(<i32 as Signed>::neg_one(), -1);
        assert_eq!(Abs::abs(-7_i64), 7);
        assert_eq!(Ordered::clamp(12_u8, 0, 10), 10);
        assert_eq!(<u16 as Num>::from_count(3), 3);
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Q32.32 fixed-point scalar.
//!
//! `Fix64` stores a real value scaled by `2^32` in an `i64`:
//!
//! ```text
//! real_value = raw / 2^32
//! ```
//!
//! It opts into ring arithmetic, ordering, sign and root extraction, but not
//! trigonometry or IEEE-754 semantics, so `Vec2<Fix64>`/`Vec3<Fix64>` support
//! dot/cross/length/normalize while rotation and slerp stay unavailable at the
//! type level.
//!
//! Arithmetic saturates instead of overflowing. Multiplication and division
//! round to nearest with ties to even. Division by zero saturates towards the
//! sign of the dividend, and `0 / 0` is `0`.

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::scalar::{Abs, F32Boundary, Num, Ordered, Root, Signed};

/// Number of fractional bits.
const FRAC_BITS: u32 = 32;

/// Raw encoding of `1.0`.
const ONE_RAW: i64 = 1_i64 << FRAC_BITS;

/// `2^32` as a float, for conversions.
const SCALE: f64 = 4_294_967_296.0;

/// Q32.32 fixed-point number stored in an `i64`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Fix64 {
    raw: i64,
}

impl Fix64 {
    /// `0.0`.
    pub const ZERO: Self = Self { raw: 0 };

    /// `1.0`.
    pub const ONE: Self = Self { raw: ONE_RAW };

    /// Largest representable value (just under `2^31`).
    pub const MAX: Self = Self { raw: i64::MAX };

    /// Smallest representable value (`-2^31`).
    pub const MIN: Self = Self { raw: i64::MIN };

    /// Wraps a raw Q32.32 integer without scaling.
    pub const fn from_raw(raw: i64) -> Self {
        Self { raw }
    }

    /// Returns the raw Q32.32 integer.
    pub const fn raw(self) -> i64 {
        self.raw
    }

    /// Converts an integer exactly.
    pub fn from_int(value: i32) -> Self {
        Self::from_raw(i64::from(value) << FRAC_BITS)
    }

    /// Converts from `f64`, rounding to nearest.
    ///
    /// NaN maps to zero (there is no NaN encoding) and infinities saturate.
    pub fn from_f64(value: f64) -> Self {
        // `as` saturates and maps NaN to 0.
        Self::from_raw((value * SCALE).round_ties_even() as i64)
    }

    /// Converts to `f64`, rounding to nearest.
    pub fn to_f64(self) -> f64 {
        self.raw as f64 / SCALE
    }

    fn saturate(value: i128) -> i64 {
        i64::try_from(value).unwrap_or(if value.is_negative() {
            i64::MIN
        } else {
            i64::MAX
        })
    }

    /// Divides a non-negative `u128` by `2^shift`, ties to even.
    fn round_shift(value: u128, shift: u32) -> u128 {
        let q = value >> shift;
        let r = value & ((1_u128 << shift) - 1);
        let half = 1_u128 << (shift - 1);
        if r > half || (r == half && q & 1 == 1) {
            q + 1
        } else {
            q
        }
    }

    fn signed(magnitude: u128, negative: bool) -> i64 {
        let magnitude = i128::try_from(magnitude).unwrap_or(i128::MAX);
        Self::saturate(if negative { -magnitude } else { magnitude })
    }

    fn mul_raw(a: i64, b: i64) -> i64 {
        let prod = i128::from(a) * i128::from(b);
        let rounded = Self::round_shift(prod.unsigned_abs(), FRAC_BITS);
        Self::signed(rounded, prod.is_negative())
    }

    fn div_raw(a: i64, b: i64) -> i64 {
        if b == 0 {
            return match a.signum() {
                0 => 0,
                1 => i64::MAX,
                _ => i64::MIN,
            };
        }

        let num = (i128::from(a) << FRAC_BITS).unsigned_abs();
        let den = i128::from(b).unsigned_abs();
        let q = num / den;
        let twice_r = (num % den) * 2;
        let rounded = if twice_r > den || (twice_r == den && q & 1 == 1) {
            q + 1
        } else {
            q
        };
        Self::signed(rounded, (a < 0) ^ (b < 0))
    }

    /// Integer square root of a Q32.32 magnitude; negative inputs yield zero.
    fn sqrt_raw(raw: i64) -> i64 {
        if raw <= 0 {
            return 0;
        }
        // sqrt(raw / 2^32) * 2^32 == sqrt(raw * 2^32)
        let scaled = u128::from(raw.unsigned_abs()) << FRAC_BITS;
        Self::signed(scaled.isqrt(), false)
    }
}

impl fmt::Display for Fix64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}

impl Add for Fix64 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_raw(self.raw.saturating_add(rhs.raw))
    }
}

impl Sub for Fix64 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_raw(self.raw.saturating_sub(rhs.raw))
    }
}

impl Mul for Fix64 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_raw(Self::mul_raw(self.raw, rhs.raw))
    }
}

impl Div for Fix64 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::from_raw(Self::div_raw(self.raw, rhs.raw))
    }
}

impl Neg for Fix64 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_raw(self.raw.saturating_neg())
    }
}

impl Num for Fix64 {
    fn zero() -> Self {
        Self::ZERO
    }

    fn one() -> Self {
        Self::ONE
    }

    fn from_count(count: usize) -> Self {
        let count = i128::try_from(count).unwrap_or(i128::MAX);
        Self::from_raw(Self::saturate(count << FRAC_BITS))
    }
}

impl Signed for Fix64 {}

impl Ordered for Fix64 {
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

impl Abs for Fix64 {
    fn abs(self) -> Self {
        Self::from_raw(self.raw.saturating_abs())
    }
}

impl Root for Fix64 {
    fn sqrt(self) -> Self {
        Self::from_raw(Self::sqrt_raw(self.raw))
    }

    fn cbrt(self) -> Self {
        Self::from_f64(self.to_f64().cbrt())
    }

    fn hypot(self, other: Self) -> Self {
        (self * self + other * other).sqrt()
    }

    fn root_n(self, n: i32) -> Self {
        Self::from_f64(Root::root_n(self.to_f64(), n))
    }
}

impl F32Boundary for Fix64 {
    fn from_f32(value: f32) -> Self {
        Self::from_f64(f64::from(value))
    }

    fn to_f32(self) -> f32 {
        self.to_f64() as f32
    }
}

impl From<i32> for Fix64 {
    fn from(value: i32) -> Self {
        Self::from_int(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_is_two_to_the_thirty_two() {
        assert_eq!(Fix64::ONE.raw(), 1_i64 << 32);
        assert_eq!(Fix64::from_int(-1).raw(), -(1_i64 << 32));
    }

    #[test]
    fn multiplication_rounds_ties_to_even() {
        // 1 ulp * 0.5 = 0.5 ulp -> ties to even -> 0
        let tiny = Fix64::from_raw(1);
        let half = Fix64::from_f64(0.5);
        assert_eq!((tiny * half).raw(), 0);
        // 3 ulp * 0.5 = 1.5 ulp -> 2
        assert_eq!((Fix64::from_raw(3) * half).raw(), 2);
    }

    #[test]
    fn division_by_zero_saturates() {
        assert_eq!((Fix64::ONE / Fix64::ZERO).raw(), i64::MAX);
        assert_eq!((-Fix64::ONE / Fix64::ZERO).raw(), i64::MIN);
        assert_eq!((Fix64::ZERO / Fix64::ZERO).raw(), 0);
    }

    #[test]
    fn nan_maps_to_zero_and_infinity_saturates() {
        assert_eq!(Fix64::from_f64(f64::NAN), Fix64::ZERO);
        assert_eq!(Fix64::from_f64(f64::INFINITY), Fix64::MAX);
        assert_eq!(Fix64::from_f64(f64::NEG_INFINITY), Fix64::MIN);
    }

    #[test]
    fn sqrt_of_perfect_squares_is_exact() {
        assert_eq!(Fix64::from_int(9).sqrt(), Fix64::from_int(3));
        assert_eq!(Fix64::from_f64(0.25).sqrt(), Fix64::from_f64(0.5));
        assert_eq!(Fix64::from_int(-4).sqrt(), Fix64::ZERO);
    }
}

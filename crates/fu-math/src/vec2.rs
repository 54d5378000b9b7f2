// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::cartesian;
use crate::error::MathError;
use crate::fixed::Fix64;
use crate::scalar::{Abs, F32Boundary, Float, Num, Ordered, Root, Signed, Trig};

/// Two-component vector over any numeric type `T`.
///
/// * Represents either a point or a direction depending on the caller.
/// * Equality is exact component-wise equality; there is no epsilon.
/// * Every operation returns a new value; compound assignment operators are
///   provided only as sugar over the same component-wise arithmetic.
///
/// Each method is bounded by the capability it needs, so `Vec2<i32>` supports
/// `dot` and `cross` while `length` requires [`Root`] and `rotate` requires
/// [`Trig`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<T> {
    /// Horizontal component.
    pub x: T,
    /// Vertical component.
    pub y: T,
}

impl<T> Vec2<T> {
    /// Number of components.
    pub const DIM: usize = 2;

    /// Creates a vector from components.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Copy> Vec2<T> {
    /// Broadcasts one value to both components.
    pub fn splat(value: T) -> Self {
        Self::new(value, value)
    }

    /// Builds a vector by calling `f` with each component index.
    pub fn from_fn(mut f: impl FnMut(usize) -> T) -> Self {
        let x = f(0);
        let y = f(1);
        Self::new(x, y)
    }

    /// Returns the component at `index` (`0 = x`, `1 = y`).
    pub fn get(&self, index: usize) -> Result<T, MathError> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(MathError::IndexOutOfRange {
                index,
                max: Self::DIM - 1,
            }),
        }
    }

    /// Returns the components as `[x, y]`.
    pub fn to_array(self) -> [T; 2] {
        [self.x, self.y]
    }

    /// Returns the components as `(x, y)`.
    pub fn to_tuple(self) -> (T, T) {
        (self.x, self.y)
    }

    /// Applies `f` to each component.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Vec2<U> {
        Vec2::new(f(self.x), f(self.y))
    }

    /// Combines matching components of `self` and `other` with `f`.
    pub fn zip_map<U: Copy, R>(self, other: Vec2<U>, mut f: impl FnMut(T, U) -> R) -> Vec2<R> {
        Vec2::new(f(self.x, other.x), f(self.y, other.y))
    }
}

impl<T: Num> Vec2<T> {
    /// `(0, 0)`.
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// `(1, 1)`.
    pub fn one() -> Self {
        Self::splat(T::one())
    }

    /// `(1, 0)`.
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// `(0, 1)`.
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product: the signed area `x·other.y − y·other.x`.
    ///
    /// Positive when `other` lies counter-clockwise from `self`.
    pub fn cross(self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Squared magnitude.
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    /// Squared distance to `other`.
    pub fn distance_squared(self, other: Self) -> T {
        (other - self).length_squared()
    }

    /// Average of `items`.
    ///
    /// The sum is divided by the item count converted into `T`, saturating at
    /// `T`'s maximum. Only an empty input divides by zero, with `T`'s own
    /// semantics (NaN for floats).
    pub fn average<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let (sum, count) = items
            .into_iter()
            .fold((Self::zero(), 0_usize), |(sum, count), v| (sum + v, count + 1));
        sum / T::from_count(count)
    }
}

impl<T: Signed> Vec2<T> {
    /// `(-1, -1)`.
    pub fn neg_one() -> Self {
        Self::splat(T::neg_one())
    }

    /// Counter-clockwise perpendicular `(-y, x)`.
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }
}

impl<T: Abs> Vec2<T> {
    /// Component-wise absolute value.
    pub fn abs(self) -> Self {
        self.map(Abs::abs)
    }

    /// Component-wise minimum.
    pub fn min(self, other: Self) -> Self {
        self.zip_map(other, Ordered::min)
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        self.zip_map(other, Ordered::max)
    }
}

impl<T: Root> Vec2<T> {
    /// Magnitude.
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    /// Distance to `other`.
    pub fn distance(self, other: Self) -> T {
        (other - self).length()
    }
}

impl<T: Root + Ordered> Vec2<T> {
    /// Unit vector in the same direction, or [`Vec2::zero`] when the squared
    /// length is not strictly positive.
    pub fn normalize(self) -> Self {
        let len_sq = self.length_squared();
        if len_sq > T::zero() {
            self / len_sq.sqrt()
        } else {
            Self::zero()
        }
    }
}

impl<T: Trig> Vec2<T> {
    /// Rotates counter-clockwise by `angle` radians.
    pub fn rotate(self, angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(
            self.x * cos - self.y * sin,
            self.x * sin + self.y * cos,
        )
    }

    /// `(r·cosθ, r·sinθ)`.
    pub fn from_polar(theta: T, r: T) -> Self {
        cartesian::from_polar(theta, r).into()
    }
}

impl<T: Float> Vec2<T> {
    /// Signed angle from `self` to `other` in `(-π, π]`.
    ///
    /// Opposite vectors give `π` whichever way the zero cross product is
    /// signed.
    pub fn angle_to(self, other: Self) -> T {
        let angle = self.cross(other).atan2(self.dot(other));
        if angle == -T::pi() {
            T::pi()
        } else {
            angle
        }
    }

    /// Absolute bearing of `to` as seen from the point `self`.
    pub fn angle_to_point(self, to: Self) -> T {
        (to.y - self.y).atan2(to.x - self.x)
    }

    /// Bearing of `self` from the origin, `atan2(y, x)`.
    pub fn angle(self) -> T {
        self.y.atan2(self.x)
    }

    /// Component-wise linear interpolation.
    pub fn lerp(self, to: Self, weight: T) -> Self {
        Self::new(self.x.lerp(to.x, weight), self.y.lerp(to.y, weight))
    }

    /// Spherical interpolation: the radius moves linearly from `|self|` to
    /// `|to|` while the direction rotates through `weight · angle_to(to)`.
    ///
    /// Falls back to [`Vec2::lerp`] when either vector has zero length.
    pub fn slerp(self, to: Self, weight: T) -> Self {
        let r1 = self.length_squared();
        let r2 = to.length_squared();
        if r1 == T::zero() || r2 == T::zero() {
            return self.lerp(to, weight);
        }

        let from = r1.sqrt();
        let radius = from.lerp(r2.sqrt(), weight);
        self.rotate(self.angle_to(to) * weight) * (radius / from)
    }
}

impl<T: F32Boundary> Vec2<T> {
    /// Components converted to `f32` for external consumers.
    pub fn to_f32_array(self) -> [f32; 2] {
        [self.x.to_f32(), self.y.to_f32()]
    }

    /// Builds a vector from `f32` components.
    pub fn from_f32_array(value: [f32; 2]) -> Self {
        Self::new(T::from_f32(value[0]), T::from_f32(value[1]))
    }
}

impl Vec2<f64> {
    /// Narrows both components to `f32`.
    pub fn narrow(self) -> Vec2<f32> {
        self.map(|c| c as f32)
    }
}

impl Vec2<f32> {
    /// Widens both components to `f64` (lossless).
    pub fn widen(self) -> Vec2<f64> {
        self.map(f64::from)
    }
}

impl From<Vec2<f32>> for Vec2<f64> {
    fn from(value: Vec2<f32>) -> Self {
        value.widen()
    }
}

impl<T> From<(T, T)> for Vec2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<[T; 2]> for Vec2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<Vec2<T>> for (T, T) {
    fn from(value: Vec2<T>) -> Self {
        (value.x, value.y)
    }
}

impl<T> From<Vec2<T>> for [T; 2] {
    fn from(value: Vec2<T>) -> Self {
        [value.x, value.y]
    }
}

impl<T: fmt::Display> fmt::Display for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T: Num> Add for Vec2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Num> Sub for Vec2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Num> Mul for Vec2<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl<T: Num> Div for Vec2<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl<T: Num> Mul<T> for Vec2<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: Num> Div<T> for Vec2<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl<T: Signed> Neg for Vec2<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Num> AddAssign for Vec2<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Num> SubAssign for Vec2<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Num> MulAssign<T> for Vec2<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Num> DivAssign<T> for Vec2<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

impl<T: Num> Sum for Vec2<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a, T: Num> Sum<&'a Vec2<T>> for Vec2<T> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, v| acc + *v)
    }
}

// Scalar on the left: `s * v` and `s / v = (s / x, s / y)`.
macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {$(
        impl Mul<Vec2<$t>> for $t {
            type Output = Vec2<$t>;

            fn mul(self, rhs: Vec2<$t>) -> Vec2<$t> {
                Vec2::new(self * rhs.x, self * rhs.y)
            }
        }

        impl Div<Vec2<$t>> for $t {
            type Output = Vec2<$t>;

            fn div(self, rhs: Vec2<$t>) -> Vec2<$t> {
                Vec2::new(self / rhs.x, self / rhs.y)
            }
        }
    )*};
}

impl_scalar_lhs!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, Fix64);

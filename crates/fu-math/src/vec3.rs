// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::cartesian;
use crate::error::MathError;
use crate::fixed::Fix64;
use crate::scalar::{Abs, F32Boundary, Float, Num, Ordered, Root, Signed, Trig};

/// `|dot(normal, up)|` at or above which [`Vec3::reference_up`] switches to
/// `forward` to keep the basis well conditioned.
const PARALLEL_THRESHOLD: f64 = 0.99;

/// Three-component vector over any numeric type `T`.
///
/// * Components may represent a point or a direction depending on the caller.
/// * Equality is exact component-wise equality; there is no epsilon.
/// * Canonical directions follow a Y-up, `-Z`-forward convention:
///   [`Vec3::forward`] is `(0, 0, -1)`. Boundary conversions copy components
///   verbatim and never flip handedness.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3<T> {
    /// X component.
    pub x: T,
    /// Y component (up).
    pub y: T,
    /// Z component (backwards).
    pub z: T,
}

/// Orthonormal tangent/bitangent frame perpendicular to a normal.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Basis<T> {
    /// First in-plane axis, `normalize(cross(normal, reference_up))`.
    pub tangent: Vec3<T>,
    /// Second in-plane axis, `normalize(cross(normal, tangent))`.
    pub bitangent: Vec3<T>,
}

impl<T> Vec3<T> {
    /// Number of components.
    pub const DIM: usize = 3;

    /// Creates a vector from components.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Copy> Vec3<T> {
    /// Broadcasts one value to every component.
    pub fn splat(value: T) -> Self {
        Self::new(value, value, value)
    }

    /// Builds a vector by calling `f` with each component index.
    pub fn from_fn(mut f: impl FnMut(usize) -> T) -> Self {
        let x = f(0);
        let y = f(1);
        let z = f(2);
        Self::new(x, y, z)
    }

    /// Returns the component at `index` (`0 = x`, `1 = y`, `2 = z`).
    pub fn get(&self, index: usize) -> Result<T, MathError> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(MathError::IndexOutOfRange {
                index,
                max: Self::DIM - 1,
            }),
        }
    }

    /// Returns the components as `[x, y, z]`.
    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns the components as `(x, y, z)`.
    pub fn to_tuple(self) -> (T, T, T) {
        (self.x, self.y, self.z)
    }

    /// Applies `f` to each component.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Vec3<U> {
        Vec3::new(f(self.x), f(self.y), f(self.z))
    }

    /// Combines matching components of `self` and `other` with `f`.
    pub fn zip_map<U: Copy, R>(self, other: Vec3<U>, mut f: impl FnMut(T, U) -> R) -> Vec3<R> {
        Vec3::new(f(self.x, other.x), f(self.y, other.y), f(self.z, other.z))
    }
}

impl<T: Num> Vec3<T> {
    /// `(0, 0, 0)`.
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// `(1, 1, 1)`.
    pub fn one() -> Self {
        Self::splat(T::one())
    }

    /// `(1, 0, 0)`.
    pub fn right() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    /// `(0, 1, 0)`.
    pub fn up() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    /// `(0, 0, 1)`.
    pub fn back() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
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

impl<T: Signed> Vec3<T> {
    /// `(-1, -1, -1)`.
    pub fn neg_one() -> Self {
        Self::splat(T::neg_one())
    }

    /// `(-1, 0, 0)`.
    pub fn left() -> Self {
        -Self::right()
    }

    /// `(0, -1, 0)`.
    pub fn down() -> Self {
        -Self::up()
    }

    /// `(0, 0, -1)`.
    pub fn forward() -> Self {
        -Self::back()
    }
}

impl<T: Abs> Vec3<T> {
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

impl<T: Root> Vec3<T> {
    /// Magnitude.
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    /// Distance to `other`.
    pub fn distance(self, other: Self) -> T {
        (other - self).length()
    }
}

impl<T: Root + Ordered> Vec3<T> {
    /// Unit vector in the same direction, or [`Vec3::zero`] when the squared
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

impl<T: Trig> Vec3<T> {
    /// Point on the unit sphere at inclination `phi` and azimuth `theta`.
    pub fn from_spherical(phi: T, theta: T) -> Self {
        cartesian::from_spherical(phi, theta).into()
    }

    /// Point on the sphere of radius `r`.
    pub fn from_spherical_radius(phi: T, theta: T, r: T) -> Self {
        cartesian::from_spherical_radius(phi, theta, r).into()
    }

    /// Point at azimuth `theta`, radial distance `r` and height `z`.
    pub fn from_cylindrical(theta: T, r: T, z: T) -> Self {
        cartesian::from_cylindrical(theta, r, z).into()
    }
}

impl<T: Float> Vec3<T> {
    /// Unsigned angle between `self` and `other` in `[0, π]`.
    pub fn angle_to(self, other: Self) -> T {
        self.cross(other).length().atan2(self.dot(other))
    }

    /// Component-wise linear interpolation.
    pub fn lerp(self, to: Self, weight: T) -> Self {
        Self::new(
            self.x.lerp(to.x, weight),
            self.y.lerp(to.y, weight),
            self.z.lerp(to.z, weight),
        )
    }

    /// Helper "up" direction that is never nearly parallel to `self`.
    ///
    /// Returns [`Vec3::up`] unless `|dot(self, up)| >= 0.99`, in which case
    /// [`Vec3::forward`] is used instead. `self` is expected to be a unit
    /// normal.
    pub fn reference_up(self) -> Self {
        let up = Self::up();
        if self.dot(up).abs() >= T::from_f64(PARALLEL_THRESHOLD) {
            Self::forward()
        } else {
            up
        }
    }

    /// Orthonormal tangent/bitangent frame perpendicular to the unit normal
    /// `self`.
    pub fn orthonormal_basis(self) -> Basis<T> {
        let tangent = self.cross(self.reference_up()).normalize();
        let bitangent = self.cross(tangent).normalize();
        Basis { tangent, bitangent }
    }

    /// Signed azimuth of `other` as seen from `self`, measured in `basis`:
    /// `atan2(d·bitangent, d·tangent)` with `d = other − self`.
    pub fn azimuth_to(self, other: Self, basis: &Basis<T>) -> T {
        let d = other - self;
        d.dot(basis.bitangent).atan2(d.dot(basis.tangent))
    }

    /// [`Vec3::azimuth_to`] in the frame built from `self`'s own direction.
    pub fn azimuth_to_local(self, other: Self) -> T {
        let basis = self.normalize().orthonormal_basis();
        self.azimuth_to(other, &basis)
    }
}

impl<T: F32Boundary> Vec3<T> {
    /// Components converted to `f32` for external consumers.
    pub fn to_f32_array(self) -> [f32; 3] {
        [self.x.to_f32(), self.y.to_f32(), self.z.to_f32()]
    }

    /// Builds a vector from `f32` components.
    pub fn from_f32_array(value: [f32; 3]) -> Self {
        Self::new(
            T::from_f32(value[0]),
            T::from_f32(value[1]),
            T::from_f32(value[2]),
        )
    }
}

impl Vec3<f64> {
    /// Narrows every component to `f32`.
    pub fn narrow(self) -> Vec3<f32> {
        self.map(|c| c as f32)
    }
}

impl Vec3<f32> {
    /// Widens every component to `f64` (lossless).
    pub fn widen(self) -> Vec3<f64> {
        self.map(f64::from)
    }
}

impl From<Vec3<f32>> for Vec3<f64> {
    fn from(value: Vec3<f32>) -> Self {
        value.widen()
    }
}

impl<T> From<(T, T, T)> for Vec3<T> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Self::new(x, y, z)
    }
}

impl<T> From<[T; 3]> for Vec3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<T> From<Vec3<T>> for (T, T, T) {
    fn from(value: Vec3<T>) -> Self {
        (value.x, value.y, value.z)
    }
}

impl<T> From<Vec3<T>> for [T; 3] {
    fn from(value: Vec3<T>) -> Self {
        [value.x, value.y, value.z]
    }
}

impl<T: fmt::Display> fmt::Display for Vec3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl<T: Num> Add for Vec3<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Num> Sub for Vec3<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Num> Mul for Vec3<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl<T: Num> Div for Vec3<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl<T: Num> Mul<T> for Vec3<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<T: Num> Div<T> for Vec3<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl<T: Signed> Neg for Vec3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Num> AddAssign for Vec3<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Num> SubAssign for Vec3<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Num> MulAssign<T> for Vec3<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Num> DivAssign<T> for Vec3<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

impl<T: Num> Sum for Vec3<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a, T: Num> Sum<&'a Vec3<T>> for Vec3<T> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, v| acc + *v)
    }
}

// Scalar on the left: `s * v` and `s / v = (s / x, s / y, s / z)`.
macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {$(
        impl Mul<Vec3<$t>> for $t {
            type Output = Vec3<$t>;

            fn mul(self, rhs: Vec3<$t>) -> Vec3<$t> {
                Vec3::new(self * rhs.x, self * rhs.y, self * rhs.z)
            }
        }

        impl Div<Vec3<$t>> for $t {
            type Output = Vec3<$t>;

            fn div(self, rhs: Vec3<$t>) -> Vec3<$t> {
                Vec3::new(self / rhs.x, self / rhs.y, self / rhs.z)
            }
        }
    )*};
}

impl_scalar_lhs!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, Fix64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_directions_are_y_up_minus_z_forward() {
        assert_eq!(Vec3::<f64>::up(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(Vec3::<f64>::down(), Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(Vec3::<f64>::left(), Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(Vec3::<f64>::right(), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(Vec3::<f64>::forward(), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(Vec3::<f64>::back(), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn reference_up_avoids_parallel_normals() {
        let n = Vec3::new(0.0_f64, 1.0, 0.0);
        assert_eq!(n.reference_up(), Vec3::forward());
        assert_eq!((-n).reference_up(), Vec3::forward());

        let tilted = Vec3::new(1.0_f64, 0.0, 0.0);
        assert_eq!(tilted.reference_up(), Vec3::up());
    }

    #[test]
    fn get_rejects_index_three() {
        let v = Vec3::new(1, 2, 3);
        assert_eq!(v.get(2), Ok(3));
        assert_eq!(
            v.get(3),
            Err(MathError::IndexOutOfRange { index: 3, max: 2 })
        );
    }

    #[test]
    fn integer_vectors_support_ring_operations() {
        let a = Vec3::new(1_i64, 2, 3);
        let b = Vec3::new(4_i64, 5, 6);
        assert_eq!(a.dot(b), 32);
        assert_eq!(a.cross(b), Vec3::new(-3, 6, -3));
        assert_eq!(2_i64 * a, Vec3::new(2, 4, 6));
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! fu-math: generic scalar math and 2D/3D vector algebra.
//!
//! Everything here is written once over capability traits ([`scalar`]) so the
//! same `Vec2`/`Vec3` code serves `f32`, `f64`, integers and the [`Fix64`]
//! fixed-point type, each limited to the operations its numeric type supports.
//! All operations are pure functions over `Copy` values.
#![forbid(unsafe_code)]

/// Polar, spherical and cylindrical to Cartesian conversion.
pub mod cartesian;
mod error;
mod fixed;
/// Free-function facade over the scalar capability traits.
pub mod math;
pub mod plot;
pub mod scalar;
mod vec2;
mod vec3;

pub use error::MathError;
pub use fixed::Fix64;
pub use scalar::{
    Abs, F32Boundary, Float, Hyperbolic, Log, Num, Ordered, Pow, Root, Rounding, Signed, Trig,
};
pub use vec2::Vec2;
pub use vec3::{Basis, Vec3};

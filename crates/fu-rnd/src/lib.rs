// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! fu-rnd: deterministic pseudo-random values, incrementors, normal
//! distributions, random durations and random directions.
#![forbid(unsafe_code)]

pub mod distributed;
mod error;
mod incr;
mod rng;
mod sphere;
pub mod time;

pub use error::RndError;
pub use incr::{add, ascending};
pub use rng::{Rng, DEFAULT_CHARSET};
pub use sphere::{unit_vec2, unit_vec3};

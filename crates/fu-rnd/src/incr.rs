// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Random incrementors.

use crate::error::RndError;
use crate::rng::Rng;

/// `value` advanced by a random step in `[at_least, at_most)`.
///
/// Sums saturate at the `i64` bounds.
pub fn add(rng: &mut Rng, value: i64, at_most: i64, at_least: i64) -> Result<i64, RndError> {
    if at_least > at_most {
        return Err(RndError::InvalidRange {
            min: at_least,
            max: at_most,
        });
    }
    Ok(rng.between(value.saturating_add(at_least), value.saturating_add(at_most)))
}

/// Producer of an ascending sequence: every call steps the previous value
/// forward by a random amount in `[min_step, max_step)`, starting from
/// `start`. The sequence is non-decreasing whenever `min_step >= 0`.
///
/// The generator owns `rng`; seed it for reproducible sequences.
pub fn ascending(
    mut rng: Rng,
    max_step: i64,
    min_step: i64,
    start: i64,
) -> Result<impl FnMut() -> i64, RndError> {
    if min_step > max_step {
        return Err(RndError::InvalidRange {
            min: min_step,
            max: max_step,
        });
    }
    Ok(fu_seq::stateful(start, move |value: i64| {
        rng.between(value.saturating_add(min_step), value.saturating_add(max_step))
    }))
}

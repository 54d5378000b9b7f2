// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Random durations and wall-clock instants.
//!
//! Everything here works in whole minutes: a drawn offset is a uniform number
//! of minutes in `[0, span)`, where `span` is truncated to whole minutes.

use std::time::{Duration, SystemTime};

use crate::error::RndError;
use crate::rng::Rng;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_DAY: u64 = 86_400;

fn whole_minutes(span: Duration) -> i64 {
    i64::try_from(span.as_secs() / SECS_PER_MINUTE).unwrap_or(i64::MAX)
}

fn random_offset(rng: &mut Rng, span: Duration) -> Duration {
    let minutes = rng.between(0, whole_minutes(span));
    Duration::from_secs(u64::try_from(minutes).unwrap_or_default() * SECS_PER_MINUTE)
}

/// `min` plus a random whole number of minutes below `max - min`.
pub fn duration(rng: &mut Rng, min: Duration, max: Duration) -> Result<Duration, RndError> {
    let span = max.checked_sub(min).ok_or(RndError::InvertedSpan)?;
    Ok(min + random_offset(rng, span))
}

/// [`duration`] starting at one minute.
pub fn duration_up_to(rng: &mut Rng, max: Duration) -> Result<Duration, RndError> {
    duration(rng, Duration::from_secs(SECS_PER_MINUTE), max)
}

/// [`duration_up_to`] `max` days. `max == 0` is an inverted span.
pub fn days(rng: &mut Rng, max: u32) -> Result<Duration, RndError> {
    duration_up_to(rng, Duration::from_secs(u64::from(max) * SECS_PER_DAY))
}

/// Instant in `[min, max)` at whole-minute offsets from `min`.
pub fn date(rng: &mut Rng, min: SystemTime, max: SystemTime) -> Result<SystemTime, RndError> {
    let span = max.duration_since(min).map_err(|_| RndError::InvertedSpan)?;
    min.checked_add(random_offset(rng, span)).ok_or(RndError::TimeOverflow)
}

/// `value` moved forward by a random [`duration`] in `[at_least, at_most)`.
pub fn add(
    rng: &mut Rng,
    value: SystemTime,
    at_most: Duration,
    at_least: Duration,
) -> Result<SystemTime, RndError> {
    let step = duration(rng, at_least, at_most)?;
    value.checked_add(step).ok_or(RndError::TimeOverflow)
}

/// Producer of non-decreasing instants: every call moves the previous one
/// forward by less than `max_step`. The first call already steps away from
/// `start`.
///
/// A step that would overflow the platform clock leaves the instant in place.
pub fn ascending(
    mut rng: Rng,
    max_step: Duration,
    start: SystemTime,
) -> impl FnMut() -> SystemTime {
    fu_seq::stateful(start, move |value: SystemTime| {
        value
            .checked_add(random_offset(&mut rng, max_step))
            .unwrap_or(value)
    })
}

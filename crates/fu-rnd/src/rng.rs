// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

use crate::error::RndError;

/// Alphabet used by [`Rng::string_default`].
pub const DEFAULT_CHARSET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-_";

/// Substitute for the all-zero state, which xoroshiro cannot leave.
const ZERO_STATE_FIX: u64 = 0x9e37_79b9_7f4a_7c15;

/// `2^-53`, the spacing of `f64` values in `[0.5, 1)`.
const F64_UNIT: f64 = 1.0 / 9_007_199_254_740_992.0;

/// Stateful `xoroshiro128+` pseudo-random number generator.
///
/// * Not cryptographically secure; use for simulation and test data only.
/// * Matching seeds yield identical sequences across supported platforms.
#[derive(Debug, Clone)]
pub struct Rng {
    state: [u64; 2],
}

impl Rng {
    /// Constructs a generator from two 64-bit seeds.
    pub fn from_seed(seed0: u64, seed1: u64) -> Self {
        let mut state = [seed0, seed1];
        if state == [0, 0] {
            state[0] = ZERO_STATE_FIX;
        }
        Self { state }
    }

    /// Constructs a generator from a single 64-bit seed via SplitMix64
    /// expansion.
    pub fn from_seed_u64(seed: u64) -> Self {
        fn splitmix64(state: &mut u64) -> u64 {
            *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
            let mut z = *state;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        }

        let mut sm_state = seed;
        let s0 = splitmix64(&mut sm_state);
        let s1 = splitmix64(&mut sm_state);
        Self::from_seed(s0, s1)
    }

    /// Seeds from the system clock. The chosen seed is logged at debug level
    /// so a run can be replayed with [`Rng::from_seed_u64`].
    pub fn from_entropy() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();
        debug!(seed, "seeded rng from system clock");
        Self::from_seed_u64(seed)
    }

    /// Next raw 64-bit output.
    pub fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.state[1] = s1.rotate_left(36);

        result
    }

    /// Next double in `[0, 1)` from the high 53 bits.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * F64_UNIT
    }

    /// Next float in `[0, 1)`.
    ///
    /// Uses the high 23 bits to fill the mantissa.
    pub fn next_f32(&mut self) -> f32 {
        let raw = self.next_u64();
        let bits = ((raw >> 41) as u32) | 0x3f80_0000;
        f32::from_bits(bits) - 1.0
    }

    /// Uniform integer in the half-open range `[min, max)`.
    ///
    /// `min == max` yields `min`.
    pub fn int(&mut self, min: i64, max: i64) -> Result<i64, RndError> {
        if min > max {
            return Err(RndError::InvalidRange { min, max });
        }
        Ok(self.between(min, max))
    }

    /// Uniform integer in `[0, max)`.
    pub fn int_below(&mut self, max: i64) -> Result<i64, RndError> {
        self.int(0, max)
    }

    /// [`Rng::int`] for callers that have already ordered the bounds.
    ///
    /// Uses rejection sampling to avoid modulo bias.
    pub(crate) fn between(&mut self, min: i64, max: i64) -> i64 {
        let span = max.abs_diff(min);
        if span <= 1 {
            return min;
        }

        let value = if span.is_power_of_two() {
            self.next_u64() & (span - 1)
        } else {
            let bound = u64::MAX - u64::MAX % span;
            loop {
                let candidate = self.next_u64();
                if candidate < bound {
                    break candidate % span;
                }
            }
        };

        min.wrapping_add_unsigned(value)
    }

    /// Uniform double in `[min, max)`.
    pub fn double(&mut self, min: f64, max: f64) -> f64 {
        self.next_f64() * (max - min) + min
    }

    /// [`Rng::double`] narrowed to `f32`.
    pub fn float(&mut self, min: f32, max: f32) -> f32 {
        self.double(f64::from(min), f64::from(max)) as f32
    }

    /// Uniformly chosen element, or `None` for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.between(0, i64::try_from(items.len()).ok()?);
        items.get(usize::try_from(index).ok()?)
    }

    /// `n` characters drawn independently from `charset`.
    pub fn string(&mut self, n: usize, charset: &str) -> Result<String, RndError> {
        let chars: Vec<char> = charset.chars().collect();
        fu_seq::repeat_with(n, || self.pick(&chars).copied())
            .collect::<Option<String>>()
            .ok_or(RndError::EmptyCharset)
    }

    /// [`Rng::string`] over [`DEFAULT_CHARSET`].
    pub fn string_default(&mut self, n: usize) -> String {
        let chars: Vec<char> = DEFAULT_CHARSET.chars().collect();
        fu_seq::repeat_with(n, || self.pick(&chars).copied())
            .flatten()
            .collect()
    }
}

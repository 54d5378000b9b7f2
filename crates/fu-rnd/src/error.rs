// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors returned by range-based sampling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RndError {
    /// Lower bound above the upper bound.
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange {
        /// Requested lower bound.
        min: i64,
        /// Requested upper bound.
        max: i64,
    },
    /// A non-empty string was requested from an empty alphabet.
    #[error("cannot draw characters from an empty charset")]
    EmptyCharset,
    /// Time span whose end precedes its start.
    #[error("invalid time span: end precedes start")]
    InvertedSpan,
    /// Result does not fit the platform's `SystemTime`.
    #[error("time value out of range")]
    TimeOverflow,
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors produced by vector component access.
///
/// Numeric domain errors are never reported here; they propagate as NaN or
/// infinities through the arithmetic itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// A component index fell outside `0..=max`.
    #[error("index {index} out of range [0, {max}]")]
    IndexOutOfRange {
        /// Requested component index.
        index: usize,
        /// Largest valid component index.
        max: usize,
    },
}

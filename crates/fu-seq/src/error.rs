// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors produced by indexed aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeqError {
    /// An `(index, value)` entry addressed a slot outside the destination.
    #[error("index {index} out of range for {count} slots")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Number of destination slots.
        count: usize,
    },
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! fu-seq: sequence generators and pairwise combinators.
#![forbid(unsafe_code)]

mod error;
pub mod generate;
pub mod pairs;

pub use error::SeqError;
pub use generate::{
    from_slice, naturals, range, repeat_with, select, stateful, stateful_default, Stateful,
};
pub use pairs::{
    aggregate_indexed, distinct_pairs_with, indexed_unique_pairs, pairwise, pairwise_with,
    unique_pairs, unique_pairs_with, unique_pairwise, IndexedPair, Pairwise,
};

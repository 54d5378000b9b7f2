// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use fu_math::Vec3;
use fu_seq::{
    aggregate_indexed, distinct_pairs_with, from_slice, indexed_unique_pairs, naturals, pairwise,
    pairwise_with, repeat_with, select, stateful_default, unique_pairs, unique_pairwise,
    IndexedPair,
};
use proptest::prelude::*;

#[test]
fn naturals_start_at_zero() {
    assert_eq!(naturals().take(4).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
}

#[test]
fn select_maps_over_an_offset_range() {
    let squares: Vec<i64> = select(3, 2, |i| i * i).collect();
    assert_eq!(squares, vec![4, 9, 16]);
}

#[test]
fn repeat_with_calls_the_producer_n_times() {
    let mut calls = 0;
    let out: Vec<i32> = repeat_with(3, || {
        calls += 1;
        calls * 10
    })
    .collect();
    assert_eq!(out, vec![10, 20, 30]);
}

#[test]
fn stateful_default_counts_from_default() {
    let mut next = stateful_default(|n: u64| n + 1);
    assert_eq!((next(), next(), next()), (1, 2, 3));
}

#[test]
fn from_slice_reapplies_the_selector() {
    let mut cursor = 0;
    let mut cycle = from_slice(vec!['a', 'b', 'c'], move |items| {
        let item = items[cursor % items.len()];
        cursor += 1;
        item
    });
    let drawn: String = (0..5).map(|_| cycle()).collect();
    assert_eq!(drawn, "abcab");
}

#[test]
fn adjacent_pairs() {
    let pairs: Vec<(i32, i32)> = pairwise([1, 2, 3]).collect();
    assert_eq!(pairs, vec![(1, 2), (2, 3)]);
    let gaps: Vec<i32> = pairwise_with([1, 4, 9, 16], |a, b| b - a).collect();
    assert_eq!(gaps, vec![3, 5, 7]);
}

#[test]
fn unique_pairs_are_row_major() {
    let items = ['a', 'b', 'c'];
    let pairs: Vec<(char, char)> = unique_pairs(&items).map(|(a, b)| (*a, *b)).collect();
    assert_eq!(pairs, vec![('a', 'b'), ('a', 'c'), ('b', 'c')]);
}

#[test]
fn indexed_pairs_carry_positions() {
    let items = [10, 20, 30];
    let pairs: Vec<IndexedPair<'_, i32>> = indexed_unique_pairs(&items).collect();
    assert_eq!(pairs.len(), 3);
    assert_eq!(
        pairs[2],
        IndexedPair {
            i: 1,
            j: 2,
            a: &20,
            b: &30
        }
    );
}

#[test]
fn distinct_pairs_skip_equal_elements() {
    let pairs = distinct_pairs_with(&[1, 2, 2], |a, b| (*a, *b));
    assert_eq!(pairs, vec![(1, 2), (1, 2), (2, 1), (2, 1)]);
}

#[test]
fn aggregate_indexed_folds_from_default() {
    let totals = aggregate_indexed([(0, 1), (2, 5), (0, 2)], 3, |acc, v| acc + v).unwrap();
    assert_eq!(totals, vec![3, 0, 5]);
}

#[test]
fn unique_pairwise_applies_equal_and_opposite_forces() {
    let bodies = [
        Vec3::new(0.0_f64, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 2.0, 0.0),
    ];
    let forces = unique_pairwise(&bodies, |a, b| *b - *a);
    assert_eq!(forces.len(), 3);
    assert_eq!(forces[0].0, &bodies[0]);
    // body 0 is pulled towards 1 and 2
    assert_eq!(forces[0].1, Vec3::new(1.0, 2.0, 0.0));
    assert_eq!(forces[1].1, Vec3::new(-2.0, 2.0, 0.0));
    assert_eq!(forces[2].1, Vec3::new(1.0, -4.0, 0.0));
}

proptest! {
    #[test]
    fn unique_pair_count_is_n_choose_two(n in 0_usize..40) {
        let items: Vec<usize> = (0..n).collect();
        prop_assert_eq!(unique_pairs(&items).count(), n * n.saturating_sub(1) / 2);
    }

    #[test]
    fn pairwise_totals_cancel(values in proptest::collection::vec(-1_000_i64..1_000, 0..24)) {
        let forces = unique_pairwise(&values, |a, b| a - b);
        let total: i64 = forces.iter().map(|(_, f)| *f).sum();
        prop_assert_eq!(total, 0);
    }
}

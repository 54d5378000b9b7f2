// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Pairwise combinators.
//!
//! Three pair shapes are provided:
//! - adjacent: `(a0, a1), (a1, a2), …` ([`pairwise`]);
//! - unique: every `i < j` exactly once ([`unique_pairs`]);
//! - distinct: every ordered pair whose elements compare unequal
//!   ([`distinct_pairs_with`]).

use core::mem;
use core::ops::{Add, Neg};

use crate::error::SeqError;

/// Iterator over adjacent pairs of an inner iterator.
#[derive(Debug, Clone)]
pub struct Pairwise<I: Iterator> {
    inner: I,
    prev: Option<I::Item>,
}

impl<I> Iterator for Pairwise<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (I::Item, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        if self.prev.is_none() {
            self.prev = Some(self.inner.next()?);
        }
        let snd = self.inner.next()?;
        let fst = self.prev.replace(snd.clone())?;
        Some((fst, snd))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.inner.size_hint();
        if self.prev.is_some() {
            (lo, hi)
        } else {
            (lo.saturating_sub(1), hi.map(|h| h.saturating_sub(1)))
        }
    }
}

/// Adjacent pairs: `n` items yield `n − 1` pairs; fewer than two yield none.
pub fn pairwise<I>(items: I) -> Pairwise<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Pairwise {
        inner: items.into_iter(),
        prev: None,
    }
}

/// [`pairwise`] mapped through `f`.
pub fn pairwise_with<I, R, F>(items: I, mut f: F) -> impl Iterator<Item = R>
where
    I: IntoIterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> R,
{
    pairwise(items).map(move |(a, b)| f(a, b))
}

/// Every `(items[i], items[j])` with `i < j`, in row-major order.
pub fn unique_pairs<T>(items: &[T]) -> impl Iterator<Item = (&T, &T)> {
    indexed_unique_pairs(items).map(|pair| (pair.a, pair.b))
}

/// [`unique_pairs`] mapped through `f`.
pub fn unique_pairs_with<'a, T, R, F>(
    items: &'a [T],
    mut f: F,
) -> impl Iterator<Item = R> + use<'a, T, R, F>
where
    F: FnMut(&'a T, &'a T) -> R,
{
    unique_pairs(items).map(move |(a, b)| f(a, b))
}

/// A unique pair together with the positions it was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedPair<'a, T> {
    /// Index of `a`.
    pub i: usize,
    /// Index of `b`; always greater than `i`.
    pub j: usize,
    /// `items[i]`.
    pub a: &'a T,
    /// `items[j]`.
    pub b: &'a T,
}

/// [`unique_pairs`] with the indices of both elements.
pub fn indexed_unique_pairs<T>(items: &[T]) -> impl Iterator<Item = IndexedPair<'_, T>> {
    items.iter().enumerate().flat_map(move |(i, a)| {
        items
            .iter()
            .enumerate()
            .skip(i + 1)
            .map(move |(j, b)| IndexedPair { i, j, a, b })
    })
}

/// `f(a, b)` for every ordered pair of elements that compare unequal.
///
/// Equality is by value, so duplicated elements are never paired with each
/// other even at different positions.
pub fn distinct_pairs_with<T, R, F>(items: &[T], mut f: F) -> Vec<R>
where
    T: PartialEq,
    F: FnMut(&T, &T) -> R,
{
    let mut out = Vec::new();
    for fst in items {
        for snd in items {
            if fst != snd {
                out.push(f(fst, snd));
            }
        }
    }
    out
}

/// Folds `(index, value)` entries into `count` slots starting from
/// `T::default()`, combining with `f(slot, value)`.
pub fn aggregate_indexed<T, I, F>(entries: I, count: usize, mut f: F) -> Result<Vec<T>, SeqError>
where
    T: Default,
    I: IntoIterator<Item = (usize, T)>,
    F: FnMut(T, T) -> T,
{
    let mut dest: Vec<T> = core::iter::repeat_with(T::default).take(count).collect();
    for (index, value) in entries {
        let slot = dest
            .get_mut(index)
            .ok_or(SeqError::IndexOutOfRange { index, count })?;
        *slot = f(mem::take(slot), value);
    }
    Ok(dest)
}

/// Equal-and-opposite accumulation over unique pairs.
///
/// For every `i < j`, `v = f(items[i], items[j])` is added to item `i`'s
/// total and `-v` to item `j`'s. Returns each item paired with its total.
pub fn unique_pairwise<'a, T, V, F>(items: &'a [T], mut f: F) -> Vec<(&'a T, V)>
where
    V: Default + Clone + Add<Output = V> + Neg<Output = V>,
    F: FnMut(&T, &T) -> V,
{
    let mut totals: Vec<V> = core::iter::repeat_with(V::default)
        .take(items.len())
        .collect();
    for pair in indexed_unique_pairs(items) {
        let v = f(pair.a, pair.b);
        totals[pair.i] = mem::take(&mut totals[pair.i]) + v.clone();
        totals[pair.j] = mem::take(&mut totals[pair.j]) + -v;
    }
    items.iter().zip(totals).collect()
}

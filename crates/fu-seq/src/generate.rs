// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Sequence producers.
//!
//! Iterators here are lazy and restartable only by calling the constructor
//! again. Producers returned as closures (`stateful`, `from_slice`) own their
//! state; each call advances it.

use core::fmt;

/// `0, 1, 2, …` without end.
pub fn naturals() -> impl Iterator<Item = usize> {
    0..
}

/// `n` consecutive integers beginning at `start`.
pub fn range(n: usize, start: i64) -> impl Iterator<Item = i64> {
    (start..).take(n)
}

/// Calls `f` `n` times, yielding each result.
pub fn repeat_with<T, F>(n: usize, f: F) -> impl Iterator<Item = T>
where
    F: FnMut() -> T,
{
    core::iter::repeat_with(f).take(n)
}

/// Maps `f` over [`range(n, start)`](range).
pub fn select<T, F>(n: usize, start: i64, f: F) -> impl Iterator<Item = T>
where
    F: FnMut(i64) -> T,
{
    range(n, start).map(f)
}

/// Unfold over a state: each step replaces the state with `next(state)` and
/// yields the new state.
///
/// The initial state itself is never yielded. As an [`Iterator`] it is
/// infinite; bound it with [`Iterator::take`].
#[derive(Clone)]
pub struct Stateful<T, F> {
    state: T,
    next: F,
}

impl<T, F> Stateful<T, F>
where
    T: Clone,
    F: FnMut(T) -> T,
{
    /// Starts an unfold at `initial`.
    pub fn new(initial: T, next: F) -> Self {
        Self {
            state: initial,
            next,
        }
    }

    /// Advances the state once and returns the new value.
    pub fn advance(&mut self) -> T {
        self.state = (self.next)(self.state.clone());
        self.state.clone()
    }

    /// Current state without advancing.
    pub fn state(&self) -> &T {
        &self.state
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Stateful<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stateful")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<T, F> Iterator for Stateful<T, F>
where
    T: Clone,
    F: FnMut(T) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Some(self.advance())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Producer that yields `next(initial)`, then `next(next(initial))`, and so
/// on, one value per call.
pub fn stateful<T, F>(initial: T, next: F) -> impl FnMut() -> T
where
    T: Clone,
    F: FnMut(T) -> T,
{
    let mut unfold = Stateful::new(initial, next);
    move || unfold.advance()
}

/// [`stateful`] starting from `T::default()`.
pub fn stateful_default<T, F>(next: F) -> impl FnMut() -> T
where
    T: Clone + Default,
    F: FnMut(T) -> T,
{
    stateful(T::default(), next)
}

/// Captures `items` once and applies `selector` to the whole slice on every
/// call.
pub fn from_slice<T, R, I, F>(items: I, mut selector: F) -> impl FnMut() -> R
where
    I: IntoIterator<Item = T>,
    F: FnMut(&[T]) -> R,
{
    let items: Vec<T> = items.into_iter().collect();
    move || selector(&items)
}

//! Lazy synchronous outcome sequences.
//!
//! [`OutcomeIter`] wraps any `Iterator<Item = Outcome<S, F>>` and is itself
//! such an iterator: elements are produced strictly on demand, and whether
//! re-iteration replays upstream work is the wrapped iterator's contract —
//! this layer buffers nothing.
//!
//! Sources are lifted in through [`lift_values`] (each element becomes a
//! success), [`from_outcomes`] (pass-through), or [`once`] (a single
//! outcome). Plain iterators can also be lifted and bound in place through
//! [`IteratorOutcomeExt`].
//!
//! # Examples
//!
//! ```rust
//! use outcome::{iter, Outcome};
//!
//! let collected: Vec<_> = iter::lift_values::<_, &str>(1..=2).collect();
//! assert_eq!(collected, vec![Outcome::success(1), Outcome::success(2)]);
//! ```

use std::marker::PhantomData;

use crate::bind::{Bind, OutcomeFn, ValuesFn};
use crate::outcome::Outcome;
use crate::stream::{IterStream, OutcomeStream};

/// A lazy sequence of [`Outcome`] values.
///
/// A live iteration state is single-consumer: driving one `OutcomeIter` from
/// two consumers concurrently is a usage error, exactly as it is for the
/// wrapped iterator.
#[derive(Debug, Clone)]
pub struct OutcomeIter<I> {
    iter: I,
}

/// Wrap an already-outcome-typed source without touching its elements.
pub fn from_outcomes<I, S, F>(outcomes: I) -> OutcomeIter<I::IntoIter>
where
    I: IntoIterator<Item = Outcome<S, F>>,
{
    OutcomeIter { iter: outcomes.into_iter() }
}

/// Lift a plain-value source, wrapping each element in a success.
///
/// The failure type is free: it is fixed by the operators applied downstream.
pub fn lift_values<I, F>(values: I) -> OutcomeIter<LiftValues<I::IntoIter, F>>
where
    I: IntoIterator,
{
    OutcomeIter { iter: LiftValues::new(values.into_iter()) }
}

/// Lift a single outcome into a one-element sequence.
pub fn once<S, F>(outcome: Outcome<S, F>) -> OutcomeIter<std::iter::Once<Outcome<S, F>>> {
    OutcomeIter { iter: std::iter::once(outcome) }
}

impl<I> OutcomeIter<I> {
    /// Unwraps the adapter, returning the underlying iterator.
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I, S, F> OutcomeIter<I>
where
    I: Iterator<Item = Outcome<S, F>>,
{
    /// Maps every success element, passing failures through untouched.
    pub fn map_success<T, M>(self, f: M) -> OutcomeIter<MapSuccess<I, M>>
    where
        M: FnMut(S) -> T,
    {
        OutcomeIter { iter: MapSuccess { iter: self.iter, f } }
    }

    /// Maps every failure element, passing successes through untouched.
    pub fn map_failure<G, M>(self, f: M) -> OutcomeIter<MapFailure<I, M>>
    where
        M: FnMut(F) -> G,
    {
        OutcomeIter { iter: MapFailure { iter: self.iter, f } }
    }

    /// Binds an outcome continuation against every success element and
    /// projects each bound value with the original.
    ///
    /// A failure element passes through unchanged without invoking `bind`,
    /// and does not suppress the elements after it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::{iter, Outcome};
    ///
    /// let bound: Vec<_> = iter::lift_values(1..=3)
    ///     .bind(
    ///         |&x| if x == 2 { Outcome::failure("bad") } else { Outcome::success(x) },
    ///         |a, b| a + b,
    ///     )
    ///     .collect();
    /// assert_eq!(
    ///     bound,
    ///     vec![Outcome::success(2), Outcome::failure("bad"), Outcome::success(6)],
    /// );
    /// ```
    pub fn bind<B, R, K, P>(self, bind: K, project: P) -> OutcomeIter<Bind<S, F, I, OutcomeFn<K>, P>>
    where
        K: FnMut(&S) -> Outcome<B, F>,
        P: FnMut(&S, B) -> R,
    {
        OutcomeIter { iter: Bind::new(self.iter, OutcomeFn::new(bind), project) }
    }

    /// Binds a plain-value sequence continuation against every success
    /// element: each item the continuation yields becomes one projected
    /// success. Failure elements pass through as single elements.
    pub fn bind_values<It, R, K, P>(
        self,
        bind: K,
        project: P,
    ) -> OutcomeIter<Bind<S, F, I, ValuesFn<K, F>, P>>
    where
        K: FnMut(&S) -> It,
        It: IntoIterator,
        P: FnMut(&S, It::Item) -> R,
    {
        OutcomeIter { iter: Bind::new(self.iter, ValuesFn::new(bind), project) }
    }

    /// Lifts this synchronous sequence into a suspension-capable one whose
    /// elements are always immediately ready.
    ///
    /// Fully evaluated, the lifted sequence yields exactly the elements the
    /// synchronous one would.
    pub fn into_stream(self) -> OutcomeStream<IterStream<I>>
    where
        I: Unpin,
    {
        crate::stream::from_outcomes(IterStream::new(self.iter))
    }
}

impl<I, S, F> Iterator for OutcomeIter<I>
where
    I: Iterator<Item = Outcome<S, F>>,
{
    type Item = Outcome<S, F>;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Iterator lifting each plain element into a success.
#[derive(Debug, Clone)]
pub struct LiftValues<I, F> {
    iter: I,
    _failure: PhantomData<fn() -> F>,
}

impl<I, F> LiftValues<I, F> {
    pub(crate) fn new(iter: I) -> Self {
        Self { iter, _failure: PhantomData }
    }
}

impl<I, F> Iterator for LiftValues<I, F>
where
    I: Iterator,
{
    type Item = Outcome<I::Item, F>;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(Outcome::Success)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Iterator mapping success elements, passing failures through.
#[derive(Debug, Clone)]
pub struct MapSuccess<I, M> {
    iter: I,
    f: M,
}

impl<I, M, S, F, T> Iterator for MapSuccess<I, M>
where
    I: Iterator<Item = Outcome<S, F>>,
    M: FnMut(S) -> T,
{
    type Item = Outcome<T, F>;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|outcome| outcome.map(&mut self.f))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Iterator mapping failure elements, passing successes through.
#[derive(Debug, Clone)]
pub struct MapFailure<I, M> {
    iter: I,
    f: M,
}

impl<I, M, S, F, G> Iterator for MapFailure<I, M>
where
    I: Iterator<Item = Outcome<S, F>>,
    M: FnMut(F) -> G,
{
    type Item = Outcome<S, G>;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|outcome| outcome.map_failure(&mut self.f))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Outcome operations attachable to any plain iterator.
///
/// Automatically implemented for every sized [`Iterator`].
pub trait IteratorOutcomeExt: Iterator + Sized {
    /// Lift this iterator into an outcome sequence, wrapping each element in
    /// a success.
    fn into_outcomes<F>(self) -> OutcomeIter<LiftValues<Self, F>> {
        OutcomeIter { iter: LiftValues::new(self) }
    }

    /// Bind an outcome continuation directly against a plain iterator:
    /// every element is lifted to a success and bound in one step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::{IteratorOutcomeExt, Outcome};
    ///
    /// let halves: Vec<_> = [4, 5]
    ///     .into_iter()
    ///     .bind_outcome(
    ///         |&x: &i32| if x % 2 == 0 { Outcome::success(x / 2) } else { Outcome::failure("odd") },
    ///         |a, b| a + b,
    ///     )
    ///     .collect();
    /// assert_eq!(halves, vec![Outcome::success(6), Outcome::failure("odd")]);
    /// ```
    fn bind_outcome<B, F, R, K, P>(
        self,
        bind: K,
        project: P,
    ) -> OutcomeIter<Bind<Self::Item, F, LiftValues<Self, F>, OutcomeFn<K>, P>>
    where
        K: FnMut(&Self::Item) -> Outcome<B, F>,
        P: FnMut(&Self::Item, B) -> R,
    {
        self.into_outcomes().bind(bind, project)
    }
}

impl<I: Iterator> IteratorOutcomeExt for I {}

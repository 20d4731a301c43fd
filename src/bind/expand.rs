//! The continuation-step seam and its lifting adapters.

use std::future::Future;
use std::marker::PhantomData;

use futures_core::Stream;

use crate::iter::LiftValues;
use crate::outcome::Outcome;
use crate::stream::{FutureOutcome, FutureValues, IterStream, LiftStream};

/// One synchronous continuation step: expands a success value into a
/// sequence of outcomes.
///
/// Implementations exist for each continuation-result shape; the bind
/// operators pick the adapter, and [`Bind`](crate::bind::Bind) drives it.
pub trait Expand<S, F> {
    /// Value type carried by the expansion's success elements.
    type Bound;
    /// Expansion sequence produced for one source element.
    type Iter: Iterator<Item = Outcome<Self::Bound, F>>;

    /// Expands one success value. Never invoked for failure elements.
    fn expand(&mut self, value: &S) -> Self::Iter;
}

/// One suspension-capable continuation step: as [`Expand`], but producing
/// the expansion may suspend.
pub trait ExpandStream<S, F> {
    /// Value type carried by the expansion's success elements.
    type Bound;
    /// Expansion stream produced for one source element.
    type Stream: Stream<Item = Outcome<Self::Bound, F>> + Unpin;

    /// Expands one success value. Never invoked for failure elements.
    fn expand(&mut self, value: &S) -> Self::Stream;
}

/// Adapter for continuations returning a single [`Outcome`].
///
/// The expansion is exactly one element: the continuation's outcome itself,
/// success or failure.
pub struct OutcomeFn<K>(K);

impl<K> OutcomeFn<K> {
    pub(crate) fn new(f: K) -> Self {
        Self(f)
    }
}

impl<S, F, B, K> Expand<S, F> for OutcomeFn<K>
where
    K: FnMut(&S) -> Outcome<B, F>,
{
    type Bound = B;
    type Iter = std::iter::Once<Outcome<B, F>>;

    fn expand(&mut self, value: &S) -> Self::Iter {
        std::iter::once((self.0)(value))
    }
}

/// Adapter for continuations returning a plain-value sequence: each item is
/// lifted to a success.
pub struct ValuesFn<K, F> {
    f: K,
    _failure: PhantomData<fn() -> F>,
}

impl<K, F> ValuesFn<K, F> {
    pub(crate) fn new(f: K) -> Self {
        Self { f, _failure: PhantomData }
    }
}

impl<S, F, K, It> Expand<S, F> for ValuesFn<K, F>
where
    K: FnMut(&S) -> It,
    It: IntoIterator,
{
    type Bound = It::Item;
    type Iter = LiftValues<It::IntoIter, F>;

    fn expand(&mut self, value: &S) -> Self::Iter {
        LiftValues::new((self.f)(value).into_iter())
    }
}

/// Adapter lifting any synchronous step into the suspension-capable seam;
/// its expansions are always immediately ready.
pub struct Ready<K>(K);

impl<K> Ready<K> {
    pub(crate) fn new(step: K) -> Self {
        Self(step)
    }
}

impl<S, F, K> ExpandStream<S, F> for Ready<K>
where
    K: Expand<S, F>,
    K::Iter: Unpin,
{
    type Bound = K::Bound;
    type Stream = IterStream<K::Iter>;

    fn expand(&mut self, value: &S) -> Self::Stream {
        IterStream::new(self.0.expand(value))
    }
}

/// Adapter for continuations returning a pending [`Outcome`]: the future is
/// awaited at a suspension point, then yielded as one element.
pub struct FutureOutcomeFn<K>(K);

impl<K> FutureOutcomeFn<K> {
    pub(crate) fn new(f: K) -> Self {
        Self(f)
    }
}

impl<S, F, B, K, Fut> ExpandStream<S, F> for FutureOutcomeFn<K>
where
    K: FnMut(&S) -> Fut,
    Fut: Future<Output = Outcome<B, F>>,
{
    type Bound = B;
    type Stream = FutureOutcome<Fut>;

    fn expand(&mut self, value: &S) -> Self::Stream {
        FutureOutcome::new((self.0)(value))
    }
}

/// Adapter for continuations returning a plain-value stream: each element
/// is lifted to a success as it arrives.
pub struct StreamFn<K, F> {
    f: K,
    _failure: PhantomData<fn() -> F>,
}

impl<K, F> StreamFn<K, F> {
    pub(crate) fn new(f: K) -> Self {
        Self { f, _failure: PhantomData }
    }
}

impl<S, F, K, St> ExpandStream<S, F> for StreamFn<K, F>
where
    K: FnMut(&S) -> St,
    St: Stream + Unpin,
{
    type Bound = St::Item;
    type Stream = LiftStream<St, F>;

    fn expand(&mut self, value: &S) -> Self::Stream {
        LiftStream::new((self.f)(value))
    }
}

/// Adapter for continuations returning a pending plain sequence: the future
/// is awaited, then each item it carried is lifted to a success.
pub struct FutureValuesFn<K, F> {
    f: K,
    _failure: PhantomData<fn() -> F>,
}

impl<K, F> FutureValuesFn<K, F> {
    pub(crate) fn new(f: K) -> Self {
        Self { f, _failure: PhantomData }
    }
}

impl<S, F, K, Fut> ExpandStream<S, F> for FutureValuesFn<K, F>
where
    K: FnMut(&S) -> Fut,
    Fut: Future,
    Fut::Output: IntoIterator,
    <Fut::Output as IntoIterator>::IntoIter: Unpin,
{
    type Bound = <Fut::Output as IntoIterator>::Item;
    type Stream = FutureValues<Fut, F>;

    fn expand(&mut self, value: &S) -> Self::Stream {
        FutureValues::new((self.f)(value))
    }
}

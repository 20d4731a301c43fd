//! Suspension-capable outcome sequences.
//!
//! [`OutcomeStream`] wraps any `futures_core::Stream` of [`Outcome`] values.
//! Producing the next element is a suspension point: `poll_next` yields the
//! calling context instead of blocking a thread while the upstream producer
//! works. The crate owns no executor — any parallelism belongs to the
//! caller-supplied upstream.
//!
//! Sources are lifted in through [`lift_stream`] (plain stream, each element
//! becomes a success), [`from_outcomes`] (pass-through), [`from_future`] /
//! [`from_pending`] (a pending single value), or [`from_pending_values`] (a
//! pending plain sequence). Plain streams can also be lifted and bound in
//! place through [`StreamOutcomeExt`].
//!
//! Whether re-polling a fresh iteration replays upstream side effects is the
//! wrapped stream's contract; this layer buffers nothing and re-executes
//! nothing.

use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;

use crate::bind::{
    BindStream, FutureOutcomeFn, FutureValuesFn, OutcomeFn, Ready, StreamFn, ValuesFn,
};
use crate::cancel::{CancelToken, Cancellable};
use crate::iter::LiftValues;
use crate::outcome::Outcome;

/// A lazy, suspension-capable sequence of [`Outcome`] values.
///
/// A live iteration state is single-consumer: polling one `OutcomeStream`
/// from two consumers concurrently is a usage error, exactly as it is for
/// the wrapped stream.
#[derive(Debug, Clone)]
#[must_use = "streams do nothing unless polled"]
pub struct OutcomeStream<St> {
    stream: St,
}

/// Wrap an already-outcome-typed stream without touching its elements.
pub fn from_outcomes<St, S, F>(stream: St) -> OutcomeStream<St>
where
    St: Stream<Item = Outcome<S, F>>,
{
    OutcomeStream { stream }
}

/// Lift a plain-value stream, wrapping each element in a success.
pub fn lift_stream<St, F>(stream: St) -> OutcomeStream<LiftStream<St, F>>
where
    St: Stream,
{
    OutcomeStream { stream: LiftStream::new(stream) }
}

/// Lift a pending single value into a one-element sequence of its success.
pub fn from_future<Fut, F>(future: Fut) -> OutcomeStream<FutureValue<Fut, F>>
where
    Fut: Future,
{
    OutcomeStream { stream: FutureValue::new(future) }
}

/// Lift a pending outcome into a one-element sequence, pass-through.
pub fn from_pending<Fut, S, F>(future: Fut) -> OutcomeStream<FutureOutcome<Fut>>
where
    Fut: Future<Output = Outcome<S, F>>,
{
    OutcomeStream { stream: FutureOutcome::new(future) }
}

/// Lift a pending plain sequence: once the future resolves, each item it
/// carried is yielded as a success.
pub fn from_pending_values<Fut, F>(future: Fut) -> OutcomeStream<FutureValues<Fut, F>>
where
    Fut: Future,
    Fut::Output: IntoIterator,
{
    OutcomeStream { stream: FutureValues::new(future) }
}

impl<St> OutcomeStream<St> {
    /// Unwraps the adapter, returning the underlying stream.
    pub fn into_inner(self) -> St {
        self.stream
    }
}

impl<St, S, F> OutcomeStream<St>
where
    St: Stream<Item = Outcome<S, F>> + Unpin,
{
    /// Maps every success element, passing failures through untouched.
    pub fn map_success<T, M>(self, f: M) -> OutcomeStream<MapSuccess<St, M>>
    where
        M: FnMut(S) -> T,
    {
        OutcomeStream { stream: MapSuccess { stream: self.stream, f } }
    }

    /// Maps every failure element, passing successes through untouched.
    pub fn map_failure<G, M>(self, f: M) -> OutcomeStream<MapFailure<St, M>>
    where
        M: FnMut(F) -> G,
    {
        OutcomeStream { stream: MapFailure { stream: self.stream, f } }
    }

    /// Binds a synchronous outcome continuation against every success
    /// element. Failure elements pass through without invoking `bind` and
    /// do not suppress the elements after them.
    pub fn bind<B, R, K, P>(
        self,
        bind: K,
        project: P,
    ) -> OutcomeStream<BindStream<S, F, St, Ready<OutcomeFn<K>>, P>>
    where
        B: Unpin,
        F: Unpin,
        K: FnMut(&S) -> Outcome<B, F>,
        P: FnMut(&S, B) -> R,
    {
        OutcomeStream {
            stream: BindStream::new(self.stream, Ready::new(OutcomeFn::new(bind)), project),
        }
    }

    /// Binds a pending outcome continuation: the returned future is awaited
    /// at a suspension point before its outcome is projected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::{iter, Outcome};
    ///
    /// let bound: Vec<_> = futures::executor::block_on(async {
    ///     use futures::StreamExt;
    ///     iter::lift_values::<_, &str>(vec![5])
    ///         .into_stream()
    ///         .bind_async(|&x| async move { Outcome::success(x + 1) }, |a, b| a + b)
    ///         .collect()
    ///         .await
    /// });
    /// assert_eq!(bound, vec![Outcome::success(11)]);
    /// ```
    pub fn bind_async<B, R, Fut, K, P>(
        self,
        bind: K,
        project: P,
    ) -> OutcomeStream<BindStream<S, F, St, FutureOutcomeFn<K>, P>>
    where
        K: FnMut(&S) -> Fut,
        Fut: Future<Output = Outcome<B, F>>,
        P: FnMut(&S, B) -> R,
    {
        OutcomeStream {
            stream: BindStream::new(self.stream, FutureOutcomeFn::new(bind), project),
        }
    }

    /// Binds a plain-value sequence continuation: each item it yields
    /// becomes one projected success.
    pub fn bind_values<It, R, K, P>(
        self,
        bind: K,
        project: P,
    ) -> OutcomeStream<BindStream<S, F, St, Ready<ValuesFn<K, F>>, P>>
    where
        K: FnMut(&S) -> It,
        It: IntoIterator,
        It::IntoIter: Unpin,
        P: FnMut(&S, It::Item) -> R,
    {
        OutcomeStream {
            stream: BindStream::new(self.stream, Ready::new(ValuesFn::new(bind)), project),
        }
    }

    /// Binds a plain-value stream continuation: each element it produces is
    /// awaited at a suspension point and becomes one projected success.
    pub fn bind_stream<St2, R, K, P>(
        self,
        bind: K,
        project: P,
    ) -> OutcomeStream<BindStream<S, F, St, StreamFn<K, F>, P>>
    where
        K: FnMut(&S) -> St2,
        St2: Stream + Unpin,
        P: FnMut(&S, St2::Item) -> R,
    {
        OutcomeStream { stream: BindStream::new(self.stream, StreamFn::new(bind), project) }
    }

    /// Binds a pending plain-sequence continuation: the returned future is
    /// awaited, then each item it carried becomes one projected success.
    pub fn bind_pending_values<R, Fut, K, P>(
        self,
        bind: K,
        project: P,
    ) -> OutcomeStream<BindStream<S, F, St, FutureValuesFn<K, F>, P>>
    where
        K: FnMut(&S) -> Fut,
        Fut: Future,
        Fut::Output: IntoIterator,
        <Fut::Output as IntoIterator>::IntoIter: Unpin,
        P: FnMut(&S, <Fut::Output as IntoIterator>::Item) -> R,
    {
        OutcomeStream {
            stream: BindStream::new(self.stream, FutureValuesFn::new(bind), project),
        }
    }

    /// Ends the iteration once `token` is cancelled.
    ///
    /// Cancellation is observed at the suspension point: the in-flight
    /// element and everything after it are aborted, while elements already
    /// delivered remain valid.
    pub fn cancellable(self, token: CancelToken) -> OutcomeStream<Cancellable<St>> {
        OutcomeStream { stream: Cancellable::new(self.stream, token) }
    }
}

impl<St, S, F> Stream for OutcomeStream<St>
where
    St: Stream<Item = Outcome<S, F>> + Unpin,
{
    type Item = Outcome<S, F>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.get_mut().stream).poll_next(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.stream.size_hint()
    }
}

/// Stream driving a synchronous iterator; every element is immediately
/// ready.
#[derive(Debug, Clone)]
#[must_use = "streams do nothing unless polled"]
pub struct IterStream<I> {
    iter: I,
}

impl<I> IterStream<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I> Stream for IterStream<I>
where
    I: Iterator + Unpin,
{
    type Item = I::Item;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Poll::Ready(self.get_mut().iter.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Stream lifting each plain element into a success.
#[derive(Debug, Clone)]
#[must_use = "streams do nothing unless polled"]
pub struct LiftStream<St, F> {
    stream: St,
    _failure: PhantomData<fn() -> F>,
}

impl<St, F> LiftStream<St, F> {
    pub(crate) fn new(stream: St) -> Self {
        Self { stream, _failure: PhantomData }
    }
}

impl<St, F> Stream for LiftStream<St, F>
where
    St: Stream + Unpin,
{
    type Item = Outcome<St::Item, F>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.get_mut().stream)
            .poll_next(cx)
            .map(|item| item.map(Outcome::Success))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.stream.size_hint()
    }
}

/// One-element stream lifting a pending plain value into a success.
#[must_use = "streams do nothing unless polled"]
pub struct FutureValue<Fut, F> {
    future: Option<Pin<Box<Fut>>>,
    _failure: PhantomData<fn() -> F>,
}

impl<Fut, F> FutureValue<Fut, F> {
    pub(crate) fn new(future: Fut) -> Self {
        Self { future: Some(Box::pin(future)), _failure: PhantomData }
    }
}

impl<Fut, F> Stream for FutureValue<Fut, F>
where
    Fut: Future,
{
    type Item = Outcome<Fut::Output, F>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        match this.future.as_mut() {
            None => Poll::Ready(None),
            Some(future) => match future.as_mut().poll(cx) {
                Poll::Ready(value) => {
                    this.future = None;
                    Poll::Ready(Some(Outcome::Success(value)))
                }
                Poll::Pending => Poll::Pending,
            },
        }
    }
}

/// One-element stream awaiting a pending outcome, pass-through.
#[must_use = "streams do nothing unless polled"]
pub struct FutureOutcome<Fut> {
    future: Option<Pin<Box<Fut>>>,
}

impl<Fut> FutureOutcome<Fut> {
    pub(crate) fn new(future: Fut) -> Self {
        Self { future: Some(Box::pin(future)) }
    }
}

impl<Fut, S, F> Stream for FutureOutcome<Fut>
where
    Fut: Future<Output = Outcome<S, F>>,
{
    type Item = Outcome<S, F>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        match this.future.as_mut() {
            None => Poll::Ready(None),
            Some(future) => match future.as_mut().poll(cx) {
                Poll::Ready(outcome) => {
                    this.future = None;
                    Poll::Ready(Some(outcome))
                }
                Poll::Pending => Poll::Pending,
            },
        }
    }
}

/// Stream awaiting a pending plain sequence, then yielding each of its
/// items as a success.
#[must_use = "streams do nothing unless polled"]
pub struct FutureValues<Fut, F>
where
    Fut: Future,
    Fut::Output: IntoIterator,
{
    state: FutureValuesState<Fut, F>,
}

enum FutureValuesState<Fut, F>
where
    Fut: Future,
    Fut::Output: IntoIterator,
{
    Waiting(Pin<Box<Fut>>),
    Draining(LiftValues<<Fut::Output as IntoIterator>::IntoIter, F>),
    Finished,
}

impl<Fut, F> FutureValues<Fut, F>
where
    Fut: Future,
    Fut::Output: IntoIterator,
{
    pub(crate) fn new(future: Fut) -> Self {
        Self { state: FutureValuesState::Waiting(Box::pin(future)) }
    }
}

impl<Fut, F> Stream for FutureValues<Fut, F>
where
    Fut: Future,
    Fut::Output: IntoIterator,
    <Fut::Output as IntoIterator>::IntoIter: Unpin,
{
    type Item = Outcome<<Fut::Output as IntoIterator>::Item, F>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        loop {
            match std::mem::replace(&mut this.state, FutureValuesState::Finished) {
                FutureValuesState::Waiting(mut future) => match future.as_mut().poll(cx) {
                    Poll::Ready(values) => {
                        this.state =
                            FutureValuesState::Draining(LiftValues::new(values.into_iter()));
                    }
                    Poll::Pending => {
                        this.state = FutureValuesState::Waiting(future);
                        return Poll::Pending;
                    }
                },
                FutureValuesState::Draining(mut iter) => match iter.next() {
                    Some(outcome) => {
                        this.state = FutureValuesState::Draining(iter);
                        return Poll::Ready(Some(outcome));
                    }
                    None => return Poll::Ready(None),
                },
                FutureValuesState::Finished => return Poll::Ready(None),
            }
        }
    }
}

/// Stream mapping success elements, passing failures through.
#[derive(Debug, Clone)]
#[must_use = "streams do nothing unless polled"]
pub struct MapSuccess<St, M> {
    stream: St,
    f: M,
}

impl<St, M, S, F, T> Stream for MapSuccess<St, M>
where
    St: Stream<Item = Outcome<S, F>> + Unpin,
    M: FnMut(S) -> T + Unpin,
{
    type Item = Outcome<T, F>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        Pin::new(&mut this.stream)
            .poll_next(cx)
            .map(|item| item.map(|outcome| outcome.map(&mut this.f)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.stream.size_hint()
    }
}

/// Stream mapping failure elements, passing successes through.
#[derive(Debug, Clone)]
#[must_use = "streams do nothing unless polled"]
pub struct MapFailure<St, M> {
    stream: St,
    f: M,
}

impl<St, M, S, F, G> Stream for MapFailure<St, M>
where
    St: Stream<Item = Outcome<S, F>> + Unpin,
    M: FnMut(F) -> G + Unpin,
{
    type Item = Outcome<S, G>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        Pin::new(&mut this.stream)
            .poll_next(cx)
            .map(|item| item.map(|outcome| outcome.map_failure(&mut this.f)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.stream.size_hint()
    }
}

/// Outcome operations attachable to any plain stream.
///
/// Automatically implemented for every sized [`Stream`].
pub trait StreamOutcomeExt: Stream + Sized {
    /// Lift this stream into an outcome sequence, wrapping each element in
    /// a success.
    fn into_outcomes<F>(self) -> OutcomeStream<LiftStream<Self, F>> {
        OutcomeStream { stream: LiftStream::new(self) }
    }

    /// Bind a synchronous outcome continuation directly against a plain
    /// stream: every element is lifted to a success and bound in one step.
    fn bind_outcome<B, F, R, K, P>(
        self,
        bind: K,
        project: P,
    ) -> OutcomeStream<BindStream<Self::Item, F, LiftStream<Self, F>, Ready<OutcomeFn<K>>, P>>
    where
        Self: Unpin,
        B: Unpin,
        F: Unpin,
        K: FnMut(&Self::Item) -> Outcome<B, F>,
        P: FnMut(&Self::Item, B) -> R,
    {
        self.into_outcomes().bind(bind, project)
    }

    /// Bind a pending outcome continuation directly against a plain stream.
    fn bind_outcome_async<B, F, R, Fut, K, P>(
        self,
        bind: K,
        project: P,
    ) -> OutcomeStream<BindStream<Self::Item, F, LiftStream<Self, F>, FutureOutcomeFn<K>, P>>
    where
        Self: Unpin,
        K: FnMut(&Self::Item) -> Fut,
        Fut: Future<Output = Outcome<B, F>>,
        P: FnMut(&Self::Item, B) -> R,
    {
        self.into_outcomes().bind_async(bind, project)
    }
}

impl<St: Stream> StreamOutcomeExt for St {}

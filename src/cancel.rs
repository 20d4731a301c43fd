//! Cooperative cancellation for suspension-capable sequences.
//!
//! A [`CancelToken`] is a clonable handle to shared cancellation state. The
//! [`Cancellable`] combinator checks the token at every suspension point:
//! once the token trips, the iteration ends — the in-flight element and
//! everything after it are aborted, while elements already delivered remain
//! valid and are not retracted.
//!
//! Cancellation is a signal, not a domain failure: a cancelled sequence
//! simply ends, and no [`Failure`](crate::Outcome::Failure) element is
//! synthesized.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::task::{Context, Poll, Waker};

use futures_core::Stream;
use thiserror::Error;

/// The value produced by [`CancelToken::cancelled`] once a token trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("iteration cancelled")]
pub struct Cancelled;

#[derive(Debug, Default)]
struct Shared {
    cancelled: AtomicBool,
    wakers: Mutex<Vec<Waker>>,
}

/// Clonable handle to shared cancellation state.
///
/// All clones observe the same flag; cancelling any one of them cancels
/// every sequence and future attached to the token.
///
/// # Examples
///
/// ```rust
/// use outcome::CancelToken;
///
/// let token = CancelToken::new();
/// let observer = token.clone();
/// assert!(!observer.is_cancelled());
/// token.cancel();
/// assert!(observer.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    shared: Arc<Shared>,
}

impl CancelToken {
    /// Creates a fresh, untripped token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Trips the token and wakes every registered waiter.
    ///
    /// Idempotent: cancelling an already-cancelled token is a no-op.
    pub fn cancel(&self) {
        self.shared.cancelled.store(true, Ordering::SeqCst);
        let mut wakers =
            self.shared.wakers.lock().unwrap_or_else(PoisonError::into_inner);
        for waker in wakers.drain(..) {
            waker.wake();
        }
    }

    /// Returns `true` once the token has been tripped.
    pub fn is_cancelled(&self) -> bool {
        self.shared.cancelled.load(Ordering::SeqCst)
    }

    /// Resolves to [`Cancelled`] once the token trips.
    pub fn cancelled(&self) -> CancelledFuture {
        CancelledFuture { token: self.clone() }
    }

    fn register(&self, waker: &Waker) {
        let mut wakers =
            self.shared.wakers.lock().unwrap_or_else(PoisonError::into_inner);
        if !wakers.iter().any(|registered| registered.will_wake(waker)) {
            wakers.push(waker.clone());
        }
    }
}

/// Future resolving to [`Cancelled`] once its token trips.
#[derive(Debug, Clone)]
#[must_use = "futures do nothing unless polled"]
pub struct CancelledFuture {
    token: CancelToken,
}

impl Future for CancelledFuture {
    type Output = Cancelled;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.token.is_cancelled() {
            return Poll::Ready(Cancelled);
        }
        self.token.register(cx.waker());
        // Re-check after registering so a cancel racing between the first
        // check and registration is not missed.
        if self.token.is_cancelled() {
            Poll::Ready(Cancelled)
        } else {
            Poll::Pending
        }
    }
}

/// Stream that ends once its token is cancelled.
#[derive(Debug, Clone)]
#[must_use = "streams do nothing unless polled"]
pub struct Cancellable<St> {
    stream: St,
    token: CancelToken,
}

impl<St> Cancellable<St> {
    pub(crate) fn new(stream: St, token: CancelToken) -> Self {
        Self { stream, token }
    }
}

impl<St> Stream for Cancellable<St>
where
    St: Stream + Unpin,
{
    type Item = St::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.token.is_cancelled() {
            return Poll::Ready(None);
        }
        match Pin::new(&mut this.stream).poll_next(cx) {
            Poll::Pending => {
                this.token.register(cx.waker());
                // Re-check after registering so a cancel racing with the
                // upstream poll is observed instead of sleeping forever.
                if this.token.is_cancelled() {
                    Poll::Ready(None)
                } else {
                    Poll::Pending
                }
            }
            ready => ready,
        }
    }
}

//! The two-case outcome type distinguishing success from failure.
//!
//! [`Outcome`] is the value every sequence and combinator in this crate
//! carries: exactly one of a success payload or a failure payload, fixed at
//! construction. Unlike [`Result`], an `Outcome` inside a sequence is a
//! per-element value — a failure element never aborts the sequence it sits
//! in (see the [`bind`](crate::bind) module).
//!
//! # Examples
//!
//! ```rust
//! use outcome::Outcome;
//!
//! let doubled: Outcome<i32, &str> = Outcome::success(21).map(|x| x * 2);
//! assert_eq!(doubled, Outcome::success(42));
//!
//! let failed: Outcome<i32, &str> = Outcome::failure("nope").map(|x: i32| x * 2);
//! assert_eq!(failed, Outcome::failure("nope"));
//! ```

use std::future::Future;

use either::Either;

use crate::bind::{Bind, OutcomeFn, ValuesFn};
use crate::iter::OutcomeIter;
use crate::stream::{IterStream, OutcomeStream};

/// A value holding exactly one of a success payload or a failure payload.
///
/// `Outcome` is immutable after construction and freely shareable: it is
/// `Send`/`Sync`/`Copy` whenever its payloads are. Failures are ordinary
/// values, never panics; panics raised by user closures propagate untouched
/// and are never converted into a `Failure`.
///
/// # Examples
///
/// ```rust
/// use outcome::Outcome;
///
/// let ok: Outcome<i32, String> = Outcome::success(5);
/// let sum = ok.bind_with(|v| Outcome::success(v + 1), |a, b| a + b);
/// assert_eq!(sum, Outcome::success(11));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<S, F> {
    /// The computation produced a value.
    Success(S),
    /// The computation produced a domain failure.
    Failure(F),
}

impl<S, F> Outcome<S, F> {
    /// Wrap a value in the success case.
    #[inline]
    pub const fn success(value: S) -> Self {
        Outcome::Success(value)
    }

    /// Wrap an error in the failure case.
    #[inline]
    pub const fn failure(error: F) -> Self {
        Outcome::Failure(error)
    }

    /// Returns `true` if the outcome is a `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::success(42);
    /// assert!(x.is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if the outcome is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Converts from `Outcome<S, F>` to `Option<S>`, discarding the failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::success(42);
    /// assert_eq!(x.success_value(), Some(42));
    ///
    /// let y: Outcome<i32, &str> = Outcome::failure("bad");
    /// assert_eq!(y.success_value(), None);
    /// ```
    #[inline]
    pub fn success_value(self) -> Option<S> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Converts from `Outcome<S, F>` to `Option<F>`, discarding the success.
    #[inline]
    pub fn failure_value(self) -> Option<F> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Returns the success value or a default.
    #[inline]
    pub fn success_or(self, default: S) -> S {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// Returns the success value or computes one from the failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let y: Outcome<usize, &str> = Outcome::failure("bad");
    /// assert_eq!(y.success_or_else(|e| e.len()), 3);
    /// ```
    #[inline]
    pub fn success_or_else<G>(self, f: G) -> S
    where
        G: FnOnce(F) -> S,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => f(error),
        }
    }

    /// Converts from `&Outcome<S, F>` to `Outcome<&S, &F>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&S, &F> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Converts from `&mut Outcome<S, F>` to `Outcome<&mut S, &mut F>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut S, &mut F> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns the contained success value, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the outcome is a `Failure`.
    #[inline]
    pub fn expect_success(self, msg: &str) -> S {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => panic!("{}", msg),
        }
    }

    /// Returns the contained success value, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Failure`.
    #[inline]
    pub fn unwrap_success(self) -> S {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => {
                panic!("called `Outcome::unwrap_success()` on a `Failure` value")
            }
        }
    }

    /// Returns the contained failure value, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Success`.
    #[inline]
    pub fn unwrap_failure(self) -> F {
        match self {
            Outcome::Success(_) => {
                panic!("called `Outcome::unwrap_failure()` on a `Success` value")
            }
            Outcome::Failure(error) => error,
        }
    }

    /// Invokes exactly one of the two handlers based on the case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::success(2);
    /// let rendered = x.match_with(|v| format!("got {v}"), |e| format!("err {e}"));
    /// assert_eq!(rendered, "got 2");
    /// ```
    #[inline]
    pub fn match_with<R, OS, OF>(self, on_success: OS, on_failure: OF) -> R
    where
        OS: FnOnce(S) -> R,
        OF: FnOnce(F) -> R,
    {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(error) => on_failure(error),
        }
    }

    /// Like [`match_with`](Outcome::match_with), but the invoked branch may
    /// itself suspend. The two branches may be distinct future types as long
    /// as they resolve to the same output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::success(20);
    /// let value = futures::executor::block_on(
    ///     x.match_async(|v| async move { v + 1 }, |_| async move { 0 }),
    /// );
    /// assert_eq!(value, 21);
    /// ```
    pub async fn match_async<R, OS, OF, FutS, FutF>(self, on_success: OS, on_failure: OF) -> R
    where
        OS: FnOnce(S) -> FutS,
        OF: FnOnce(F) -> FutF,
        FutS: Future<Output = R>,
        FutF: Future<Output = R>,
    {
        match self {
            Outcome::Success(value) => on_success(value).await,
            Outcome::Failure(error) => on_failure(error).await,
        }
    }

    /// Maps the success payload, leaving a failure untouched.
    ///
    /// Obeys the functor laws: `success(x).map(f) == success(f(x))` and
    /// `failure(e).map(f) == failure(e)`.
    #[inline]
    pub fn map<T, M>(self, f: M) -> Outcome<T, F>
    where
        M: FnOnce(S) -> T,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Maps the failure payload, leaving a success untouched.
    #[inline]
    pub fn map_failure<G, M>(self, f: M) -> Outcome<S, G>
    where
        M: FnOnce(F) -> G,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Monadic bind: threads a success into a dependent computation.
    ///
    /// A failure short-circuits — `f` is never invoked and the original
    /// failure payload propagates unchanged. The failure type is fixed
    /// across a bind chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// fn half(x: i32) -> Outcome<i32, &'static str> {
    ///     if x % 2 == 0 { Outcome::success(x / 2) } else { Outcome::failure("odd") }
    /// }
    ///
    /// assert_eq!(Outcome::success(8).and_then(half), Outcome::success(4));
    /// assert_eq!(Outcome::success(3).and_then(half), Outcome::failure("odd"));
    /// ```
    #[inline]
    pub fn and_then<T, K>(self, f: K) -> Outcome<T, F>
    where
        K: FnOnce(S) -> Outcome<T, F>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Bind then project: runs `bind` on the success value and combines the
    /// original value with the bound value through `project`.
    ///
    /// Equivalent to `self.and_then(|v| bind(&v).map(|b| project(v, b)))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let r: Outcome<i32, &str> = Outcome::success(5)
    ///     .bind_with(|v| Outcome::success(v + 1), |a, b| a + b);
    /// assert_eq!(r, Outcome::success(11));
    /// ```
    #[inline]
    pub fn bind_with<B, R, K, P>(self, bind: K, project: P) -> Outcome<R, F>
    where
        K: FnOnce(&S) -> Outcome<B, F>,
        P: FnOnce(S, B) -> R,
    {
        match self {
            Outcome::Success(value) => match bind(&value) {
                Outcome::Success(bound) => Outcome::Success(project(value, bound)),
                Outcome::Failure(error) => Outcome::Failure(error),
            },
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Binds a plain-value sequence continuation against this single
    /// outcome, producing a lazy outcome sequence.
    ///
    /// A success expands into one projected success per item yielded by
    /// `bind`; a failure yields exactly one failure element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let seq: Vec<_> = Outcome::<i32, &str>::success(10)
    ///     .bind_values(|v| 0..*v / 4, |a, b| a + b)
    ///     .collect();
    /// assert_eq!(seq, vec![Outcome::success(10), Outcome::success(11)]);
    /// ```
    pub fn bind_values<It, R, K, P>(
        self,
        bind: K,
        project: P,
    ) -> OutcomeIter<Bind<S, F, std::iter::Once<Outcome<S, F>>, ValuesFn<K, F>, P>>
    where
        K: FnMut(&S) -> It,
        It: IntoIterator,
        P: FnMut(&S, It::Item) -> R,
    {
        self.into_outcome_iter().bind_values(bind, project)
    }

    /// Binds an outcome continuation against this single outcome, producing
    /// a lazy one-element outcome sequence.
    pub fn bind_outcome<B, R, K, P>(
        self,
        bind: K,
        project: P,
    ) -> OutcomeIter<Bind<S, F, std::iter::Once<Outcome<S, F>>, OutcomeFn<K>, P>>
    where
        K: FnMut(&S) -> Outcome<B, F>,
        P: FnMut(&S, B) -> R,
    {
        self.into_outcome_iter().bind(bind, project)
    }

    /// Lifts this single outcome into a one-element lazy sequence.
    #[inline]
    pub fn into_outcome_iter(self) -> OutcomeIter<std::iter::Once<Outcome<S, F>>> {
        crate::iter::once(self)
    }

    /// Lifts this single outcome into a one-element suspension-capable
    /// sequence.
    #[inline]
    pub fn into_stream(self) -> OutcomeStream<IterStream<std::iter::Once<Outcome<S, F>>>>
    where
        S: Unpin,
        F: Unpin,
    {
        self.into_outcome_iter().into_stream()
    }

    /// Converts into the standard [`Result`].
    #[inline]
    pub fn into_result(self) -> Result<S, F> {
        self.into()
    }

    /// Converts an unbiased [`Either`] into an outcome, reading `Left` as
    /// success and `Right` as failure.
    #[inline]
    pub fn from_either(value: Either<S, F>) -> Self {
        match value {
            Either::Left(value) => Outcome::Success(value),
            Either::Right(error) => Outcome::Failure(error),
        }
    }

    /// Converts into an [`Either`], mapping success to `Left` and failure to
    /// `Right`.
    #[inline]
    pub fn into_either(self) -> Either<S, F> {
        match self {
            Outcome::Success(value) => Either::Left(value),
            Outcome::Failure(error) => Either::Right(error),
        }
    }
}

impl<S, F> From<Result<S, F>> for Outcome<S, F> {
    #[inline]
    fn from(value: Result<S, F>) -> Self {
        match value {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<S, F> From<Outcome<S, F>> for Result<S, F> {
    #[inline]
    fn from(value: Outcome<S, F>) -> Self {
        match value {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double(x: i32) -> Outcome<i32, &'static str> {
        Outcome::success(x * 2)
    }

    fn reject_negative(x: i32) -> Outcome<i32, &'static str> {
        if x < 0 {
            Outcome::failure("negative")
        } else {
            Outcome::success(x)
        }
    }

    #[test]
    fn test_accessors() {
        let s: Outcome<i32, &str> = Outcome::success(42);
        let f: Outcome<i32, &str> = Outcome::failure("bad");

        assert!(s.is_success());
        assert!(!s.is_failure());
        assert!(f.is_failure());
        assert_eq!(s.success_value(), Some(42));
        assert_eq!(f.success_value(), None);
        assert_eq!(f.failure_value(), Some("bad"));
        assert_eq!(f.success_or(0), 0);
        assert_eq!(s.success_or(0), 42);
        assert_eq!(s.as_ref(), Outcome::Success(&42));
    }

    #[test]
    fn test_functor_laws() {
        let x: Outcome<i32, &str> = Outcome::success(3);
        assert_eq!(x.map(|v| v + 1), Outcome::success(4));

        let e: Outcome<i32, &str> = Outcome::failure("bad");
        assert_eq!(e.map(|v| v + 1), Outcome::failure("bad"));

        // Composition: map(f).map(g) == map(g . f)
        let composed = Outcome::<i32, &str>::success(3).map(|v| v + 1).map(|v| v * 2);
        assert_eq!(composed, Outcome::success(3).map(|v| (v + 1) * 2));
    }

    #[test]
    fn test_map_failure() {
        let e: Outcome<i32, i32> = Outcome::failure(4);
        assert_eq!(e.map_failure(|v| v * 10), Outcome::failure(40));

        let s: Outcome<i32, i32> = Outcome::success(4);
        assert_eq!(s.map_failure(|v| v * 10), Outcome::success(4));
    }

    #[test]
    fn test_bind_left_identity() {
        // success(x).and_then(f) == f(x)
        assert_eq!(Outcome::success(7).and_then(double), double(7));
    }

    #[test]
    fn test_bind_right_identity() {
        // r.and_then(success) == r
        let s: Outcome<i32, &str> = Outcome::success(7);
        let f: Outcome<i32, &str> = Outcome::failure("bad");
        assert_eq!(s.and_then(Outcome::success), s);
        assert_eq!(f.and_then(Outcome::success), f);
    }

    #[test]
    fn test_bind_associativity() {
        // r.and_then(f).and_then(g) == r.and_then(|x| f(x).and_then(g))
        for r in [Outcome::success(5), Outcome::success(-5), Outcome::failure("bad")] {
            assert_eq!(
                r.and_then(reject_negative).and_then(double),
                r.and_then(|x| reject_negative(x).and_then(double)),
            );
        }
    }

    #[test]
    fn test_bind_short_circuits_without_invoking() {
        let f: Outcome<i32, &str> = Outcome::failure("bad");
        let bound = f.and_then(|_| -> Outcome<i32, &str> { panic!("must not be invoked") });
        assert_eq!(bound, Outcome::failure("bad"));
    }

    #[test]
    fn test_bind_with_projects() {
        let r = Outcome::<i32, &str>::success(5)
            .bind_with(|v| Outcome::success(v + 1), |a, b| a + b);
        assert_eq!(r, Outcome::success(11));
    }

    #[test]
    fn test_bind_with_propagates_continuation_failure() {
        let r = Outcome::<i32, &str>::success(5)
            .bind_with(|_| Outcome::<i32, _>::failure("inner"), |a, b| a + b);
        assert_eq!(r, Outcome::failure("inner"));
    }

    #[test]
    fn test_match_with_invokes_single_branch() {
        let s: Outcome<i32, &str> = Outcome::success(1);
        assert_eq!(s.match_with(|v| v + 1, |_| 0), 2);

        let f: Outcome<i32, &str> = Outcome::failure("bad");
        assert_eq!(f.match_with(|v| v + 1, |e| e.len() as i32), 3);
    }

    #[test]
    fn test_match_async() {
        let s: Outcome<i32, &str> = Outcome::success(20);
        let out = futures::executor::block_on(
            s.match_async(|v| async move { v * 2 }, |_| async move { 0 }),
        );
        assert_eq!(out, 40);

        let f: Outcome<i32, &str> = Outcome::failure("bad");
        let out = futures::executor::block_on(
            f.match_async(|_| async move { 0usize }, |e| async move { e.len() }),
        );
        assert_eq!(out, 3);
    }

    #[test]
    fn test_result_and_either_interop() {
        let s = Outcome::<i32, &str>::from(Ok(1));
        assert_eq!(s, Outcome::success(1));
        assert_eq!(s.into_result(), Ok(1));

        let f: Outcome<i32, &str> = Err("bad").into();
        assert_eq!(f.into_either(), Either::Right("bad"));
        assert_eq!(Outcome::from_either(Either::<i32, &str>::Left(2)), Outcome::success(2));
    }

    #[test]
    fn test_bind_values_on_single_outcome() {
        let seq: Vec<_> = Outcome::<i32, &str>::success(2)
            .bind_values(|_| vec![10, 20], |a, b| a + b)
            .collect();
        assert_eq!(seq, vec![Outcome::success(12), Outcome::success(22)]);

        let seq: Vec<_> = Outcome::<i32, &str>::failure("bad")
            .bind_values(|_| vec![10, 20], |a, b| a + b)
            .collect();
        assert_eq!(seq, vec![Outcome::failure("bad")]);
    }
}

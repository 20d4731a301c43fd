//! # Outcome: Composable Success/Failure Sequences
//!
//! Functional-composition primitives built around a two-case [`Outcome`]
//! value: closed tagged unions with exhaustive matching, lazy synchronous
//! and suspension-capable outcome sequences, and a bind/map combinator
//! algebra that behaves identically across every shape pairing.
//!
//! ## Core Types
//!
//! - **[`Outcome<S, F>`]**: success or failure, fixed at construction
//! - **[`Union1`]–[`Union8`]**: closed N-ary tagged variants, matched with
//!   exactly one handler per alternative
//! - **[`OutcomeIter`]**: lazy synchronous sequence of outcomes
//! - **[`OutcomeStream`]**: suspension-capable sequence of outcomes, with
//!   cooperative cancellation via [`CancelToken`]
//!
//! ## Key Guarantees
//!
//! - **Lazy**: no upstream element is consumed before a consumer requests it
//! - **Per-element short-circuit**: a failure never reaches its continuation
//!   and propagates unmodified
//! - **Per-element independence**: a failure element never suppresses the
//!   elements after it
//! - **No threads, no executor**: suspension happens only at `poll` points;
//!   the crate never blocks
//!
//! ## Example
//!
//! ```rust
//! use outcome::{iter, Outcome};
//!
//! let bound: Vec<_> = iter::lift_values(1..=3)
//!     .bind(
//!         |&x| if x == 2 { Outcome::failure("bad") } else { Outcome::success(x) },
//!         |a, b| a + b,
//!     )
//!     .collect();
//!
//! assert_eq!(
//!     bound,
//!     vec![Outcome::success(2), Outcome::failure("bad"), Outcome::success(6)],
//! );
//! ```
//!
//! ## Common Entry Points
//!
//! **Lifting sources:**
//! - [`iter::lift_values`] / [`iter::from_outcomes`] / [`iter::once`] —
//!   synchronous sequences
//! - [`stream::lift_stream`] / [`stream::from_future`] /
//!   [`stream::from_pending`] / [`stream::from_pending_values`] —
//!   suspension-capable sequences
//! - [`IteratorOutcomeExt`] / [`StreamOutcomeExt`] — lift and bind plain
//!   iterators and streams in place
//!
//! **Composing:**
//! - [`Outcome::and_then`], [`Outcome::bind_with`] — single values
//! - `bind`, `bind_values`, `bind_async`, `bind_stream` — sequences (see
//!   the [`bind`] module for the algebra)

pub mod bind;
pub mod cancel;
pub mod iter;
pub mod prelude;
pub mod stream;

mod outcome;
mod union;

pub use cancel::{CancelToken, Cancellable, Cancelled};
pub use iter::{IteratorOutcomeExt, OutcomeIter};
pub use outcome::Outcome;
pub use stream::{OutcomeStream, StreamOutcomeExt};
pub use union::{Union1, Union2, Union3, Union4, Union5, Union6, Union7, Union8};

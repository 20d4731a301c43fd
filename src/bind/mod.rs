//! The bind/map combinator algebra.
//!
//! Every bind operator in this crate — across single values, sequences,
//! pending values, and pending sequences, plain or outcome-wrapped — is
//! built from one minimal primitive: a continuation step that expands a
//! single success value into a sequence of outcomes, possibly suspending.
//! The [`Expand`] and [`ExpandStream`] traits name that step; the lifting
//! adapters ([`OutcomeFn`], [`ValuesFn`], [`FutureOutcomeFn`], [`StreamFn`],
//! [`FutureValuesFn`], [`Ready`]) adapt each continuation-result shape onto
//! it; the [`Bind`] and [`BindStream`] state machines drive it.
//!
//! Shared semantics, identical in every pairing:
//!
//! - elements are consumed strictly on demand, in source order;
//! - a failure element never reaches the continuation — its payload passes
//!   through unmodified;
//! - a failure element does not suppress the elements after it;
//! - the projection combines the source success with each bound value;
//! - panics from user closures propagate untouched and are never converted
//!   into failure elements.

mod expand;
mod iter;
mod stream;

pub use expand::{
    Expand, ExpandStream, FutureOutcomeFn, FutureValuesFn, OutcomeFn, Ready, StreamFn, ValuesFn,
};
pub use iter::Bind;
pub use stream::BindStream;

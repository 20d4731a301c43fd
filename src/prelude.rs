//! Commonly used imports
//!
//! Use `use outcome::prelude::*;` for quick access to the most common types
//! and functions.

// Core types
pub use crate::{Outcome, OutcomeIter, OutcomeStream};

// Union family
pub use crate::{Union1, Union2, Union3, Union4, Union5, Union6, Union7, Union8};

// Lifting constructors (the pass-through `from_outcomes` constructors share
// a name across the sync and suspending modules; reach them by path)
pub use crate::iter::{lift_values, once};
pub use crate::stream::{from_future, from_pending, from_pending_values, lift_stream};

// Extension traits for plain sources
pub use crate::{IteratorOutcomeExt, StreamOutcomeExt};

// Cancellation
pub use crate::cancel::{CancelToken, Cancelled};

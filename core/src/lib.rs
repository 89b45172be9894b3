//! Outcome values for expected, recoverable failures.
//!
//! [`Outcome`] is returned instead of raising when the caller is expected to
//! handle the failure. The crate also provides do-notation style sequencing
//! ([`Sequence`], [`seq!`]), adapters turning raising functions into outcome
//! returning ones ([`as_result`], [`as_async_result`]) and helpers to cross
//! back into raising code ([`Outcome::eject`], [`throw_err_val`]).

pub mod adapter;
pub mod boundary;
pub mod fault;
pub mod outcome;
pub mod sequence;

pub use adapter::{
    as_async_result, as_result, AsAsyncResult, AsResult, AsyncFallible, AsyncWrapped, Fallible,
    Kind, KindSet, Wrapped,
};
pub use boundary::{ignore, resultify, resultify_with, throw_err_val};
pub use fault::{DecorationError, UnwrapFault, ValueError};
pub use outcome::{is_err, is_ok, Outcome, Res};
pub use sequence::{AsyncSequence, Sequence};

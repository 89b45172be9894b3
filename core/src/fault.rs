use std::{
    any::Any,
    fmt::{Debug, Display},
};

use thiserror::Error;

use crate::outcome::Outcome;

/// Raised by the unwrap family when called on the variant it does not apply to.
///
/// Carries the offending outcome for diagnostics. It is built and raised in
/// the same call, `Outcome::unwrap` turns it into a panic while the `try_`
/// variants return it.
pub struct UnwrapFault<T, E> {
    outcome: Outcome<T, E>,
    message: String,
}

impl<T, E> UnwrapFault<T, E> {
    pub(crate) fn new(outcome: Outcome<T, E>, message: String) -> Self {
        Self { outcome, message }
    }

    pub fn outcome(&self) -> &Outcome<T, E> {
        &self.outcome
    }

    pub fn into_outcome(self) -> Outcome<T, E> {
        self.outcome
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Stable identifier of this fault kind.
    pub fn code() -> &'static str {
        "unwrap_err"
    }

    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        panic!("{}", self.message)
    }
}

impl<T, E> UnwrapFault<T, E>
where
    E: Into<anyhow::Error>,
{
    /// Turns the fault into an error chain whose cause is the `Err` payload.
    ///
    /// A fault raised from an `Ok` value has no cause, the message alone is
    /// returned then.
    pub fn into_error(self) -> anyhow::Error {
        match self.outcome {
            Outcome::Err(cause) => Into::<anyhow::Error>::into(cause).context(self.message),
            Outcome::Ok(_) => anyhow::Error::msg(self.message),
        }
    }
}

impl<T, E> Display for UnwrapFault<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl<T, E> Debug for UnwrapFault<T, E>
where
    T: Debug,
    E: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnwrapFault")
            .field("outcome", &self.outcome)
            .field("message", &self.message)
            .finish()
    }
}

/// The fault itself reports no `source`; use [`UnwrapFault::into_error`] to
/// get a chain with the `Err` payload as its cause.
impl<T, E> std::error::Error for UnwrapFault<T, E>
where
    T: Debug,
    E: Debug,
{
}

/// Generic value error raised when a plain (non error) failure payload has to
/// leave the outcome world. The payload itself is kept next to its rendering.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ValueError {
    message: String,
    payload: Box<dyn Any + Send + Sync>,
}

impl ValueError {
    pub fn new<P>(payload: P) -> Self
    where
        P: Display + Send + Sync + 'static,
    {
        Self {
            message: payload.to_string(),
            payload: Box::new(payload),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Original payload, if it is a `P`.
    pub fn payload<P: 'static>(&self) -> Option<&P> {
        self.payload.downcast_ref::<P>()
    }
}

/// Rejected declared-kind set, reported when an adapter is built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecorationError {
    #[error("as_result() requires one or more failure kinds")]
    EmptyKindSet,
    #[error("failure kind `{0}` is declared more than once")]
    DuplicateKind(&'static str),
}

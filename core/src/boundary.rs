//! Helpers at the border between raising code and outcome based code.

use std::fmt::{Debug, Display};

use log::debug;

use crate::{
    adapter::{convert, KindSet},
    fault::ValueError,
    outcome::{Outcome, Res},
};

impl<T, E> Outcome<T, E>
where
    E: Into<anyhow::Error>,
{
    /// Like `unwrap`, but raises the `Err` payload itself instead of a fault.
    ///
    /// ```rust
    /// use outcome_core::Outcome;
    ///
    /// let missing: Outcome<i32, std::io::Error> =
    ///     Outcome::Err(std::io::Error::from(std::io::ErrorKind::NotFound));
    /// let err = missing.eject().unwrap_err();
    /// assert!(err.is::<std::io::Error>());
    /// ```
    pub fn eject(self) -> anyhow::Result<T> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error.into()),
        }
    }
}

impl<T, E> Outcome<T, E>
where
    E: Display + Debug + Send + Sync + 'static,
{
    /// `eject` for plain payloads: raises a [`ValueError`] rendering the
    /// payload. The payload stays reachable through `ValueError::payload`.
    pub fn eject_value(self) -> anyhow::Result<T> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(ValueError::new(error).into()),
        }
    }
}

/// Explicitly discards an outcome.
pub fn ignore<T, E>(outcome: Outcome<T, E>) {
    outcome.ignore()
}

/// Calls `f` now and turns any raised error into `Err`.
pub fn resultify<T, F>(f: F) -> Res<T>
where
    F: FnOnce() -> anyhow::Result<T>,
{
    f().into()
}

/// Calls `f` now; only errors of the declared kinds become `Err`, the rest is
/// raised again.
pub fn resultify_with<T, F>(kinds: &KindSet, f: F) -> anyhow::Result<Res<T>>
where
    F: FnOnce() -> anyhow::Result<T>,
{
    convert(f(), kinds.as_slice())
}

/// Calls `f` and raises its `Err` payload, handing back the `Ok` payload
/// otherwise.
pub fn throw_err_val<T, E, F>(f: F) -> anyhow::Result<T>
where
    F: FnOnce() -> Outcome<T, E>,
    E: Into<anyhow::Error>,
{
    f().inspect_err(|_| debug!("throw_err_val - re-raising Err payload"))
        .eject()
}

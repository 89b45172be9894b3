use std::{fmt::Debug, future::Future};

use crate::fault::UnwrapFault;

/// Value that is either a success (`Ok`) or an expected, recoverable failure (`Err`).
///
/// Outcomes are plain values: once built the variant and payload never change,
/// combinators consume `self` and hand back a new outcome owning the
/// transformed payload.
///
/// ```rust
/// use outcome_core::Outcome;
///
/// let parsed: Outcome<i32, String> = Outcome::Ok(2);
/// assert_eq!(parsed.map(|v| v * 10).unwrap(), 20);
/// ```
#[must_use = "this `Outcome` may be an `Err` variant, which should be handled or explicitly ignored"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<T, E> {
    Ok(T),
    Err(E),
}

/// Outcome whose failure payload is always an error value.
pub type Res<T> = Outcome<T, anyhow::Error>;

impl<T, E> Outcome<T, E> {
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    pub fn is_err(&self) -> bool {
        matches!(self, Outcome::Err(_))
    }

    /// Returns success payload, `None` for `Err`.
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Err(_) => None,
        }
    }

    /// Returns failure payload, `None` for `Ok`.
    pub fn err(self) -> Option<E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(error) => Some(error),
        }
    }

    /// Borrows the payload without consuming the outcome.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => default,
        }
    }

    pub fn unwrap_or_else<F>(self, op: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => op(error),
        }
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|_| T::default())
    }

    /// Returns success payload or converts failure payload into `K`.
    ///
    /// ```rust
    /// use outcome_core::Outcome;
    ///
    /// #[derive(Debug)]
    /// struct Rejected(String);
    ///
    /// impl From<&str> for Rejected {
    ///     fn from(reason: &str) -> Self {
    ///         Rejected(reason.to_string())
    ///     }
    /// }
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Err("negative");
    /// let rejected = outcome.unwrap_or_raise::<Rejected>().unwrap_err();
    /// assert_eq!(rejected.0, "negative");
    /// ```
    pub fn unwrap_or_raise<K>(self) -> Result<T, K>
    where
        K: From<E>,
    {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(K::from(error)),
        }
    }

    pub fn map<U, F>(self, op: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(op(value)),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Like `map` but `op` suspends before producing the new payload.
    pub async fn map_async<U, F, Fut>(self, op: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(op(value).await),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    pub fn map_err<G, F>(self, op: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(op(error)),
        }
    }

    pub fn map_or<U, F>(self, default: U, op: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => op(value),
            Outcome::Err(_) => default,
        }
    }

    /// Folds to a plain value, `default_op` is only called for `Err`.
    pub fn map_or_else<U, D, F>(self, default_op: D, op: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => op(value),
            Outcome::Err(_) => default_op(),
        }
    }

    pub fn and_then<U, F>(self, op: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Ok(value) => op(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    pub async fn and_then_async<U, F, Fut>(self, op: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        match self {
            Outcome::Ok(value) => op(value).await,
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    pub fn or_else<G, F>(self, op: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => op(error),
        }
    }

    pub async fn or_else_async<G, F, Fut>(self, op: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = Outcome<T, G>>,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => op(error).await,
        }
    }

    /// Calls `op` with success payload and returns the outcome unchanged.
    pub fn inspect<F>(self, op: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Outcome::Ok(ref value) = self {
            op(value);
        }
        self
    }

    /// Calls `op` with failure payload and returns the outcome unchanged.
    pub fn inspect_err<F>(self, op: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Outcome::Err(ref error) = self {
            op(error);
        }
        self
    }

    /// Marks that the failure path of this outcome was considered and
    /// intentionally discarded. Does nothing else.
    pub fn ignore(self) {}
}

/// Unwrap family. Panics are reserved for programmer errors, the `try_` forms
/// hand back the fault instead.
impl<T, E> Outcome<T, E>
where
    T: Debug,
    E: Debug,
{
    pub fn try_unwrap(self) -> Result<T, UnwrapFault<T, E>> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => {
                let message = format!("called `Outcome::unwrap()` on an `Err` value: {:?}", error);
                Err(UnwrapFault::new(Outcome::Err(error), message))
            }
        }
    }

    pub fn try_unwrap_err(self) -> Result<E, UnwrapFault<T, E>> {
        match self {
            Outcome::Ok(value) => {
                let message = format!("called `Outcome::unwrap_err()` on an `Ok` value: {:?}", value);
                Err(UnwrapFault::new(Outcome::Ok(value), message))
            }
            Outcome::Err(error) => Ok(error),
        }
    }

    pub fn try_expect(self, msg: &str) -> Result<T, UnwrapFault<T, E>> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => {
                let message = format!("{}: {:?}", msg, error);
                Err(UnwrapFault::new(Outcome::Err(error), message))
            }
        }
    }

    pub fn try_expect_err(self, msg: &str) -> Result<E, UnwrapFault<T, E>> {
        match self {
            Outcome::Ok(value) => {
                let message = format!("{}: {:?}", msg, value);
                Err(UnwrapFault::new(Outcome::Ok(value), message))
            }
            Outcome::Err(error) => Ok(error),
        }
    }

    /// Returns success payload.
    ///
    /// # Panics
    ///
    /// Panics with an [`UnwrapFault`] message if the outcome is `Err`. The
    /// panic carries the message only; use [`Outcome::try_unwrap`] when the
    /// offending outcome is needed.
    ///
    /// ```rust
    /// use outcome_core::Outcome;
    ///
    /// let failed: Outcome<i32, &str> = Outcome::Err("timeout");
    /// let fault = failed.try_unwrap().unwrap_err();
    /// assert_eq!(fault.into_outcome(), Outcome::Err("timeout"));
    /// ```
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(payload) => payload,
            Err(fault) => fault.raise(),
        }
    }

    /// Returns failure payload.
    ///
    /// # Panics
    ///
    /// Panics with an [`UnwrapFault`] message if the outcome is `Ok`. See
    /// [`Outcome::try_unwrap_err`] to keep the offending outcome.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self.try_unwrap_err() {
            Ok(payload) => payload,
            Err(fault) => fault.raise(),
        }
    }

    /// Returns success payload, panicking with `msg` and the `Err` payload
    /// otherwise. [`Outcome::try_expect`] returns the fault instead.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self.try_expect(msg) {
            Ok(payload) => payload,
            Err(fault) => fault.raise(),
        }
    }

    /// Failure counterpart of [`Outcome::expect`]; see
    /// [`Outcome::try_expect_err`] for the non-panicking form.
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E {
        match self.try_expect_err(msg) {
            Ok(payload) => payload,
            Err(fault) => fault.raise(),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}

pub fn is_ok<T, E>(outcome: &Outcome<T, E>) -> bool {
    outcome.is_ok()
}

pub fn is_err<T, E>(outcome: &Outcome<T, E>) -> bool {
    outcome.is_err()
}

#[cfg(test)]
mod tests {
    use super::Outcome;
    use std::{
        cell::Cell,
        collections::hash_map::DefaultHasher,
        hash::{Hash, Hasher},
    };

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_predicates_and_extraction() {
        let ok: Outcome<i32, &str> = Outcome::Ok(7);
        let err: Outcome<i32, &str> = Outcome::Err("bad");

        assert!(ok.is_ok());
        assert!(!ok.is_err());
        assert!(err.is_err());
        assert!(super::is_err(&err));
        assert!(super::is_ok(&ok));

        assert_eq!(ok.ok(), Some(7));
        assert_eq!(ok.err(), None);
        assert_eq!(err.ok(), None);
        assert_eq!(err.err(), Some("bad"));
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(Outcome::<i32, i32>::Ok(1), Outcome::Ok(1));
        assert_ne!(Outcome::<i32, i32>::Ok(1), Outcome::Err(1));
        assert_ne!(Outcome::<i32, i32>::Ok(1), Outcome::Ok(2));
    }

    #[test]
    fn test_hash_includes_variant() {
        let ok: Outcome<i32, i32> = Outcome::Ok(1);
        let err: Outcome<i32, i32> = Outcome::Err(1);

        assert_eq!(hash_of(&ok), hash_of(&Outcome::<i32, i32>::Ok(1)));
        assert_ne!(hash_of(&ok), hash_of(&err));
    }

    #[test]
    fn test_debug_matches_constructor_syntax() {
        assert_eq!(format!("{:?}", Outcome::<i32, &str>::Ok(5)), "Ok(5)");
        assert_eq!(format!("{:?}", Outcome::<i32, &str>::Err("bad")), "Err(\"bad\")");
    }

    #[test]
    fn test_defaulted_extraction() {
        let err: Outcome<usize, &str> = Outcome::Err("four");

        assert_eq!(Outcome::<usize, &str>::Ok(1).unwrap_or(9), 1);
        assert_eq!(err.unwrap_or(9), 9);
        assert_eq!(err.unwrap_or_else(|e| e.len()), 4);
        assert_eq!(err.unwrap_or_default(), 0);
    }

    #[test]
    fn test_map_family() {
        let ok: Outcome<i32, &str> = Outcome::Ok(2);
        let err: Outcome<i32, &str> = Outcome::Err("bad");

        assert_eq!(ok.map(|v| v + 1), Outcome::Ok(3));
        assert_eq!(err.map(|v| v + 1), Outcome::Err("bad"));
        assert_eq!(ok.map_err(|e| e.len()), Outcome::Ok(2));
        assert_eq!(err.map_err(|e| e.len()), Outcome::Err(3));
        assert_eq!(ok.map_or(0, |v| v * 2), 4);
        assert_eq!(err.map_or(0, |v| v * 2), 0);
        assert_eq!(ok.map_or_else(|| -1, |v| v * 3), 6);
        assert_eq!(err.map_or_else(|| -1, |v| v * 3), -1);
    }

    #[test]
    fn test_and_then_skips_op_on_err() {
        let calls = Cell::new(0);
        let op = |v: i32| {
            calls.set(calls.get() + 1);
            Outcome::<i32, &str>::Ok(v * 2)
        };

        assert_eq!(Outcome::Err("bad").and_then(op), Outcome::Err("bad"));
        assert_eq!(calls.get(), 0);

        assert_eq!(Outcome::Ok(4).and_then(op), Outcome::Ok(8));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_or_else_recovers() {
        let err: Outcome<i32, &str> = Outcome::Err("7");
        let recovered: Outcome<i32, String> =
            err.or_else(|e| e.parse::<i32>().map_err(|e| e.to_string()).into());

        assert_eq!(recovered, Outcome::Ok(7));
    }

    #[test]
    fn test_inspect_does_not_alter() {
        let seen = Cell::new(0);

        let ok = Outcome::<i32, &str>::Ok(3).inspect(|v| seen.set(*v));
        assert_eq!(ok, Outcome::Ok(3));
        assert_eq!(seen.get(), 3);

        let err = Outcome::<i32, &str>::Err("four")
            .inspect(|v| seen.set(*v))
            .inspect_err(|e| seen.set(e.len() as i32));
        assert_eq!(err, Outcome::Err("four"));
        assert_eq!(seen.get(), 4);
    }

    #[test]
    fn test_try_unwrap_carries_outcome() {
        let fault = Outcome::<i32, &str>::Err("bad").try_unwrap().unwrap_err();

        assert_eq!(fault.outcome(), &Outcome::Err("bad"));
        assert_eq!(
            fault.message(),
            "called `Outcome::unwrap()` on an `Err` value: \"bad\""
        );

        let fault = Outcome::<i32, &str>::Ok(1).try_expect_err("wanted failure").unwrap_err();
        assert_eq!(fault.to_string(), "wanted failure: 1");
    }

    #[test]
    #[should_panic(expected = "called `Outcome::unwrap()` on an `Err` value")]
    fn test_unwrap_on_err_panics() {
        Outcome::<i32, &str>::Err("bad").unwrap();
    }

    #[test]
    #[should_panic(expected = "called `Outcome::unwrap_err()` on an `Ok` value: 1")]
    fn test_unwrap_err_on_ok_panics() {
        Outcome::<i32, &str>::Ok(1).unwrap_err();
    }

    #[test]
    #[should_panic(expected = "config missing: \"port\"")]
    fn test_expect_prefixes_message() {
        Outcome::<i32, &str>::Err("port").expect("config missing");
    }

    #[test]
    fn test_result_conversion() {
        let result: Result<i32, String> = Outcome::Ok(1).into();
        assert_eq!(result, Ok(1));

        let outcome: Outcome<i32, String> = Err(String::from("bad")).into();
        assert_eq!(outcome.into_result(), Err(String::from("bad")));
    }
}

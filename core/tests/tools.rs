#![allow(dead_code)]
use std::cell::Cell;

use outcome_core::Outcome;

/// Counts how many times producers handed out by it were called.
#[derive(Default)]
pub struct CallCounter {
    calls: Cell<usize>,
}

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn hit(&self) {
        self.calls.set(self.calls.get() + 1);
    }

    /// Returns producer that records the call and yields `outcome`.
    pub fn producer<'a, T: 'a, E: 'a>(
        &'a self,
        outcome: Outcome<T, E>,
    ) -> impl FnOnce() -> Outcome<T, E> + 'a {
        move || {
            self.hit();
            outcome
        }
    }

    /// Returns `and_then` style op that records the call and yields `Ok(v)`.
    pub fn passthrough<'a, T: 'a, E: 'a>(&'a self) -> impl FnOnce(T) -> Outcome<T, E> + 'a {
        move |value| {
            self.hit();
            Outcome::Ok(value)
        }
    }
}

/// Failure kinds used by adapter tests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value: {0}")]
pub struct ValueKind(pub String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing key: {0}")]
pub struct KeyKind(pub String);

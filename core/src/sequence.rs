use std::future::Future;

use futures::future::{FutureExt, LocalBoxFuture};
use log::trace;

use crate::outcome::Outcome;

/// Single step of a synchronous sequence.
enum Step<'a, T, E> {
    /// Outcome that was already computed when the step was registered.
    Resolved(Outcome<T, E>),
    /// Producer that is invoked only if every previous step succeeded.
    Deferred(Box<dyn FnOnce() -> Outcome<T, E> + 'a>),
}

impl<'a, T, E> Step<'a, T, E> {
    fn resolve(self) -> Outcome<T, E> {
        match self {
            Step::Resolved(outcome) => outcome,
            Step::Deferred(producer) => producer(),
        }
    }
}

/// Ordered list of outcome producing steps evaluated left to right.
///
/// Evaluation stops at the first `Err`, which becomes the result of the whole
/// sequence. Deferred steps after it are dropped without being called.
///
/// ```rust
/// use outcome_core::{Outcome, Sequence};
///
/// let sum = Sequence::new()
///     .resolved(Outcome::<i32, &str>::Ok(2))
///     .step(|| Outcome::Ok(3))
///     .run(|values| values.iter().sum::<i32>());
///
/// assert_eq!(sum, Outcome::Ok(5));
/// ```
pub struct Sequence<'a, T, E> {
    steps: Vec<Step<'a, T, E>>,
}

impl<'a, T, E> Default for Sequence<'a, T, E> {
    fn default() -> Self {
        Self { steps: vec![] }
    }
}

impl<'a, T, E> Sequence<'a, T, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds already computed outcome.
    pub fn resolved(mut self, outcome: Outcome<T, E>) -> Self {
        self.steps.push(Step::Resolved(outcome));
        self
    }

    /// Adds producer that runs only when its turn comes.
    pub fn step<F>(mut self, producer: F) -> Self
    where
        F: FnOnce() -> Outcome<T, E> + 'a,
    {
        self.steps.push(Step::Deferred(Box::new(producer)));
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Drives all steps, calls `combine` with every unwrapped success payload
    /// in registration order.
    pub fn run<R, C>(self, combine: C) -> Outcome<R, E>
    where
        C: FnOnce(Vec<T>) -> R,
    {
        let mut values = Vec::with_capacity(self.steps.len());

        for (index, step) in self.steps.into_iter().enumerate() {
            match step.resolve() {
                Outcome::Ok(value) => values.push(value),
                Outcome::Err(error) => {
                    trace!("Sequence::run - short-circuited at step {}", index);
                    return Outcome::Err(error);
                }
            }
        }

        Outcome::Ok(combine(values))
    }
}

enum AsyncStep<'a, T, E> {
    Resolved(Outcome<T, E>),
    Deferred(Box<dyn FnOnce() -> Outcome<T, E> + 'a>),
    Suspended(Box<dyn FnOnce() -> LocalBoxFuture<'a, Outcome<T, E>> + 'a>),
}

impl<'a, T, E> AsyncStep<'a, T, E> {
    async fn resolve(self) -> Outcome<T, E> {
        match self {
            AsyncStep::Resolved(outcome) => outcome,
            AsyncStep::Deferred(producer) => producer(),
            AsyncStep::Suspended(producer) => producer().await,
        }
    }
}

/// Asynchronous counterpart of [`Sequence`].
///
/// Synchronous and suspending steps may be mixed. A suspending step is not
/// even created before the previous step's outcome is known, so there is no
/// concurrent fan-out. Futures are not required to be `Send`, the sequence is
/// meant for a single-threaded cooperative executor.
pub struct AsyncSequence<'a, T, E> {
    steps: Vec<AsyncStep<'a, T, E>>,
}

impl<'a, T, E> Default for AsyncSequence<'a, T, E> {
    fn default() -> Self {
        Self { steps: vec![] }
    }
}

impl<'a, T, E> AsyncSequence<'a, T, E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolved(mut self, outcome: Outcome<T, E>) -> Self {
        self.steps.push(AsyncStep::Resolved(outcome));
        self
    }

    pub fn step<F>(mut self, producer: F) -> Self
    where
        F: FnOnce() -> Outcome<T, E> + 'a,
    {
        self.steps.push(AsyncStep::Deferred(Box::new(producer)));
        self
    }

    /// Adds producer whose outcome is available only after suspending.
    pub fn suspend<F, Fut>(mut self, producer: F) -> Self
    where
        F: FnOnce() -> Fut + 'a,
        Fut: Future<Output = Outcome<T, E>> + 'a,
    {
        self.steps
            .push(AsyncStep::Suspended(Box::new(move || producer().boxed_local())));
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub async fn run<R, C>(self, combine: C) -> Outcome<R, E>
    where
        C: FnOnce(Vec<T>) -> R,
    {
        let mut values = Vec::with_capacity(self.steps.len());

        for (index, step) in self.steps.into_iter().enumerate() {
            match step.resolve().await {
                Outcome::Ok(value) => values.push(value),
                Outcome::Err(error) => {
                    trace!("AsyncSequence::run - short-circuited at step {}", index);
                    return Outcome::Err(error);
                }
            }
        }

        Outcome::Ok(combine(values))
    }
}

/// Unwraps an `Ok` payload or returns the `Err` from the enclosing closure or
/// async block. Only meant for the expansion of `seq!` and `seq_async!`.
#[doc(hidden)]
#[macro_export]
macro_rules! __seq_bind {
    ($step:expr) => {
        match $step {
            $crate::Outcome::Ok(value) => value,
            $crate::Outcome::Err(error) => return $crate::Outcome::Err(error),
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __seq_steps {
    (_ <- $step:expr ; $($rest:tt)+) => {{
        let _ = $crate::__seq_bind!($step);
        $crate::__seq_steps!($($rest)+)
    }};
    ($name:ident <- $step:expr ; $($rest:tt)+) => {{
        let $name = $crate::__seq_bind!($step);
        $crate::__seq_steps!($($rest)+)
    }};
    (=> $body:expr) => {
        $crate::Outcome::Ok($body)
    };
}

/// Do-notation over outcomes.
///
/// Each `name <- step;` line evaluates `step` and binds its success payload to
/// `name`; the first `Err` becomes the value of the whole expression and no
/// later line is evaluated. The trailing `=> expr` is wrapped in `Ok`.
///
/// ```rust
/// use outcome_core::{seq, Outcome};
///
/// fn half(v: i32) -> Outcome<i32, String> {
///     if v % 2 == 0 {
///         Outcome::Ok(v / 2)
///     } else {
///         Outcome::Err(format!("{} is odd", v))
///     }
/// }
///
/// let total = seq! {
///     a <- half(8);
///     b <- half(a);
///     => a + b
/// };
/// assert_eq!(total, Outcome::Ok(6));
///
/// let failed: Outcome<i32, String> = seq! {
///     a <- half(3);
///     b <- half(a);
///     => a + b
/// };
/// assert_eq!(failed, Outcome::Err(String::from("3 is odd")));
/// ```
#[macro_export]
macro_rules! seq {
    ($($steps:tt)+) => {
        (|| $crate::__seq_steps!($($steps)+))()
    };
}

/// Async do-notation, evaluates to a future of the sequence's outcome.
///
/// Steps may `.await`; each one completes before the next starts.
///
/// ```rust
/// use outcome_core::{seq_async, Outcome};
///
/// async fn fetch(v: i32) -> Outcome<i32, &'static str> {
///     Outcome::Ok(v)
/// }
///
/// let total = futures::executor::block_on(seq_async! {
///     a <- fetch(2).await;
///     b <- Outcome::Ok(3);
///     => a + b
/// });
/// assert_eq!(total, Outcome::Ok(5));
/// ```
#[macro_export]
macro_rules! seq_async {
    ($($steps:tt)+) => {
        async { $crate::__seq_steps!($($steps)+) }
    };
}

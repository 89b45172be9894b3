use std::{any::TypeId, future::Future, marker::PhantomData, sync::Arc};

use log::debug;

use crate::{
    fault::DecorationError,
    outcome::{Outcome, Res},
};

/// Descriptor of a single recognized failure kind.
///
/// A kind is a concrete error type; a raised `anyhow::Error` belongs to the
/// kind when it downcasts to that type.
#[derive(Clone, Copy)]
pub struct Kind {
    id: TypeId,
    name: &'static str,
    check: fn(&anyhow::Error) -> bool,
}

impl Kind {
    pub fn of<K>() -> Self
    where
        K: std::error::Error + Send + Sync + 'static,
    {
        Self {
            id: TypeId::of::<K>(),
            name: std::any::type_name::<K>(),
            check: |err| err.is::<K>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Checks whether `err` is a failure of this kind.
    pub fn claims(&self, err: &anyhow::Error) -> bool {
        (self.check)(err)
    }
}

impl std::fmt::Debug for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

impl PartialEq for Kind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Kind {}

/// Declared set of failure kinds an adapter converts into `Err`.
///
/// ```rust
/// use outcome_core::KindSet;
///
/// let kinds = KindSet::new()
///     .with::<std::num::ParseIntError>()
///     .with::<std::io::Error>();
/// assert_eq!(kinds.len(), 2);
/// assert!(kinds.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KindSet {
    kinds: Vec<Kind>,
}

impl KindSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `K` to declared kinds.
    pub fn with<K>(mut self) -> Self
    where
        K: std::error::Error + Send + Sync + 'static,
    {
        self.kinds.push(Kind::of::<K>());
        self
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn as_slice(&self) -> &[Kind] {
        &self.kinds
    }

    /// Rejects empty sets and kinds declared twice.
    pub fn validate(&self) -> Result<(), DecorationError> {
        if self.kinds.is_empty() {
            return Err(DecorationError::EmptyKindSet);
        }

        for (i, kind) in self.kinds.iter().enumerate() {
            if self.kinds[..i].contains(kind) {
                return Err(DecorationError::DuplicateKind(kind.name()));
            }
        }
        Ok(())
    }
}

/// Function that may raise, callable with its arguments packed into a tuple.
///
/// Implemented for every `Fn(A1, .., An) -> anyhow::Result<R>` up to five
/// arguments, so adapters can wrap plain functions and closures.
pub trait Fallible<Args> {
    type Output;

    fn invoke(&self, args: Args) -> anyhow::Result<Self::Output>;
}

/// Suspending counterpart of [`Fallible`].
pub trait AsyncFallible<Args> {
    type Output;
    type Future: Future<Output = anyhow::Result<Self::Output>>;

    fn invoke(&self, args: Args) -> Self::Future;
}

macro_rules! implement_fallible {
    ($($ty:ident),*) => {
        #[allow(non_snake_case)]
        impl<F, R, $($ty,)*> Fallible<($($ty,)*)> for F
        where
            F: Fn($($ty),*) -> anyhow::Result<R>,
        {
            type Output = R;

            fn invoke(&self, ($($ty,)*): ($($ty,)*)) -> anyhow::Result<R> {
                self($($ty),*)
            }
        }

        #[allow(non_snake_case)]
        impl<F, Fut, R, $($ty,)*> AsyncFallible<($($ty,)*)> for F
        where
            F: Fn($($ty),*) -> Fut,
            Fut: Future<Output = anyhow::Result<R>>,
        {
            type Output = R;
            type Future = Fut;

            fn invoke(&self, ($($ty,)*): ($($ty,)*)) -> Fut {
                self($($ty),*)
            }
        }
    };
}

implement_fallible!();
implement_fallible!(T1);
implement_fallible!(T1, T2);
implement_fallible!(T1, T2, T3);
implement_fallible!(T1, T2, T3, T4);
implement_fallible!(T1, T2, T3, T4, T5);

/// Converts a raised result: success becomes `Ok`, a declared failure becomes
/// `Err`, anything else is handed back as the outer error untouched.
pub fn convert<T>(result: anyhow::Result<T>, kinds: &[Kind]) -> anyhow::Result<Res<T>> {
    match result {
        Ok(value) => Ok(Outcome::Ok(value)),
        Err(err) => match kinds.iter().find(|kind| kind.claims(&err)) {
            Some(kind) => {
                debug!("convert - declared failure `{}` turned into Err: {}", kind.name(), err);
                Ok(Outcome::Err(err))
            }
            None => {
                debug!("convert - undeclared failure propagated: {}", err);
                Err(err)
            }
        },
    }
}

/// Awaits a raising future. Gives async bodies a concrete output type in
/// generated code.
#[doc(hidden)]
pub async fn settle<T, Fut>(fut: Fut) -> anyhow::Result<T>
where
    Fut: Future<Output = anyhow::Result<T>>,
{
    fut.await
}

/// Wrapper-builder produced by [`as_result`].
#[derive(Debug, Clone)]
pub struct AsResult {
    kinds: Arc<KindSet>,
}

/// Builds a wrapper that turns raising functions into outcome returning ones.
///
/// The declared kinds are validated here, before any function is wrapped.
///
/// ```rust
/// use outcome_core::{as_result, KindSet, Outcome};
/// use std::num::ParseIntError;
///
/// # fn main() -> anyhow::Result<()> {
/// let parse = as_result(KindSet::new().with::<ParseIntError>())?
///     .wrap(|s: &str| -> anyhow::Result<i32> { Ok(s.parse::<i32>()?) });
///
/// assert_eq!(parse.call(("12",))?.ok(), Some(12));
/// assert!(parse.call(("x",))?.is_err());
/// # Ok(())
/// # }
/// ```
pub fn as_result(kinds: KindSet) -> Result<AsResult, DecorationError> {
    kinds.validate()?;
    debug!("as_result - declared failure kinds: {:?}", kinds.as_slice());

    Ok(AsResult {
        kinds: Arc::new(kinds),
    })
}

impl AsResult {
    pub fn kinds(&self) -> &KindSet {
        &self.kinds
    }

    pub fn wrap<F, Args>(&self, f: F) -> Wrapped<F, Args>
    where
        F: Fallible<Args>,
    {
        Wrapped {
            f,
            kinds: self.kinds.clone(),
            _marker: PhantomData,
        }
    }
}

/// Function wrapped by [`AsResult`].
pub struct Wrapped<F, Args> {
    f: F,
    kinds: Arc<KindSet>,
    _marker: PhantomData<fn() -> Args>,
}

impl<F, Args> Wrapped<F, Args>
where
    F: Fallible<Args>,
{
    /// Calls wrapped function. The outer `Err` is an undeclared fault, the
    /// inner one a declared failure.
    pub fn call(&self, args: Args) -> anyhow::Result<Res<F::Output>> {
        convert(Fallible::invoke(&self.f, args), self.kinds.as_slice())
    }
}

/// Wrapper-builder produced by [`as_async_result`].
#[derive(Debug, Clone)]
pub struct AsAsyncResult {
    kinds: Arc<KindSet>,
}

/// Async form of [`as_result`]: wraps functions returning a raising future.
pub fn as_async_result(kinds: KindSet) -> Result<AsAsyncResult, DecorationError> {
    kinds.validate()?;
    debug!("as_async_result - declared failure kinds: {:?}", kinds.as_slice());

    Ok(AsAsyncResult {
        kinds: Arc::new(kinds),
    })
}

impl AsAsyncResult {
    pub fn kinds(&self) -> &KindSet {
        &self.kinds
    }

    pub fn wrap<F, Args>(&self, f: F) -> AsyncWrapped<F, Args>
    where
        F: AsyncFallible<Args>,
    {
        AsyncWrapped {
            f,
            kinds: self.kinds.clone(),
            _marker: PhantomData,
        }
    }
}

/// Function wrapped by [`AsAsyncResult`].
pub struct AsyncWrapped<F, Args> {
    f: F,
    kinds: Arc<KindSet>,
    _marker: PhantomData<fn() -> Args>,
}

impl<F, Args> AsyncWrapped<F, Args>
where
    F: AsyncFallible<Args>,
{
    /// Awaits wrapped function before sorting success from failure.
    pub async fn call(&self, args: Args) -> anyhow::Result<Res<F::Output>> {
        convert(
            AsyncFallible::invoke(&self.f, args).await,
            self.kinds.as_slice(),
        )
    }
}

impl<T> Outcome<T, anyhow::Error> {
    /// Narrows the failure payload to a concrete kind. Payloads of any other
    /// type are returned as the outer error.
    pub fn downcast_err<K>(self) -> anyhow::Result<Outcome<T, K>>
    where
        K: std::fmt::Display + std::fmt::Debug + Send + Sync + 'static,
    {
        match self {
            Outcome::Ok(value) => Ok(Outcome::Ok(value)),
            Outcome::Err(err) => Ok(Outcome::Err(err.downcast::<K>()?)),
        }
    }
}

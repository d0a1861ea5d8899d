//! A deferred value that resolves to `Ok` or rejects with `Err`.
//!
//! Combining promises (`lift2`, `tie`, `sequence`) awaits the operands concurrently and rejects
//! with the first error encountered. Nothing runs until the result is awaited.
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{self, LocalBoxFuture, Shared};
use futures::{FutureExt, TryFutureExt};

use crate::derive::{warp_from, BlindApply, Warped};
use crate::kind::{Kind, PartiallyApplied};
use crate::typeclass::{Applicative, Functor, Monad, Traversable};

pub struct Promise<'a, T, E> {
    inner: LocalBoxFuture<'a, Result<T, E>>,
}

pub type PromiseKind<'a, E> = Promise<'a, PartiallyApplied, E>;

impl<'a, T: 'a, E: 'a> Promise<'a, T, E> {
    pub fn new(fut: impl Future<Output = Result<T, E>> + 'a) -> Self {
        Self {
            inner: fut.boxed_local(),
        }
    }

    pub fn resolve(t: T) -> Self {
        Self::new(future::ready(Ok(t)))
    }

    pub fn reject(e: E) -> Self {
        Self::new(future::ready(Err(e)))
    }
}

/// A promise that can be awaited any number of times; every copy sees the same outcome.
pub struct SharedPromise<'a, T, E> {
    inner: Shared<LocalBoxFuture<'a, Result<T, E>>>,
}

impl<'a, T, E> Clone for SharedPromise<'a, T, E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T: Clone + 'a, E: Clone + 'a> Promise<'a, T, E> {
    pub fn shared(self) -> SharedPromise<'a, T, E> {
        SharedPromise {
            inner: self.inner.shared(),
        }
    }
}

impl<'a, T: Clone + 'a, E: Clone + 'a> From<SharedPromise<'a, T, E>> for Promise<'a, T, E> {
    fn from(shared: SharedPromise<'a, T, E>) -> Self {
        Promise::new(shared.inner)
    }
}

pub type PromiseWarped<'a, E, F, A, Rest, R> =
    Warped<'a, PromiseKind<'a, E>, SharedPromise<'a, A, E>, F, A, Rest, R>;

/// N-ary bind over a promise: `f`'s first parameter is filled from `ma` once it resolves.
///
/// `ma` is shared, so the returned function can be called repeatedly; `ma` itself runs once.
pub fn warp<'a, E, F, A, Rest, R>(
    ma: Promise<'a, A, E>,
    f: F,
) -> <PromiseWarped<'a, E, F, A, Rest, R> as BlindApply>::Applied
where
    A: Clone + 'a,
    E: Clone + 'a,
    PromiseWarped<'a, E, F, A, Rest, R>: BlindApply,
{
    warp_from::<PromiseKind<'a, E>, SharedPromise<'a, A, E>, F, A, Rest, R>(ma.shared(), f)
}

impl<'a, T, E> Future for Promise<'a, T, E> {
    type Output = Result<T, E>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.poll_unpin(cx)
    }
}

impl<'a, E> Kind for Promise<'a, PartiallyApplied, E> {
    type Layer<X> = Promise<'a, X, E>;
}

impl<'a, E: 'a> Functor<'a> for Promise<'a, PartiallyApplied, E> {
    fn fmap<A: 'a, B: 'a>(f: impl FnMut(A) -> B + 'a, fa: Promise<'a, A, E>) -> Promise<'a, B, E> {
        Promise::new(fa.map_ok(f))
    }
}

// `tie` comes from `lift2` via the provided method
impl<'a, E: 'a> Applicative<'a> for Promise<'a, PartiallyApplied, E> {
    fn pure<A: 'a>(a: A) -> Promise<'a, A, E> {
        Promise::resolve(a)
    }

    fn lift2<A, B, R>(
        f: impl Fn(A, B) -> R + Clone + 'a,
        fa: Promise<'a, A, E>,
        fb: Promise<'a, B, E>,
    ) -> Promise<'a, R, E>
    where
        A: Clone + 'a,
        B: Clone + 'a,
        R: 'a,
    {
        Promise::new(async move {
            let (a, b) = futures::try_join!(fa, fb)?;
            Ok::<R, E>(f(a, b))
        })
    }

    fn right_tie<A: Clone + 'a, B: Clone + 'a>(
        u: Promise<'a, A, E>,
        v: Promise<'a, B, E>,
    ) -> Promise<'a, B, E> {
        Promise::new(async move {
            let (_, b) = futures::try_join!(u, v)?;
            Ok::<B, E>(b)
        })
    }

    fn left_tie<A: Clone + 'a, B: Clone + 'a>(
        u: Promise<'a, A, E>,
        v: Promise<'a, B, E>,
    ) -> Promise<'a, A, E> {
        Promise::new(async move {
            let (a, _) = futures::try_join!(u, v)?;
            Ok::<A, E>(a)
        })
    }
}

impl<'a, E: 'a> Monad<'a> for Promise<'a, PartiallyApplied, E> {
    fn bind<A: 'a, B: 'a>(
        ma: Promise<'a, A, E>,
        mut f: impl FnMut(A) -> Promise<'a, B, E> + 'a,
    ) -> Promise<'a, B, E> {
        Promise::new(async move {
            let a = ma.await?;
            f(a).await
        })
    }
}

impl<'a, E: 'a> Traversable<'a> for Promise<'a, PartiallyApplied, E> {
    fn sequence<A: Clone + 'a>(tfa: Vec<Promise<'a, A, E>>) -> Promise<'a, Vec<A>, E> {
        Promise::new(future::try_join_all(tfa))
    }
}

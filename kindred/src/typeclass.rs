use crate::arity::Partial;
use crate::derive;
use crate::kind::Kind;

/// Map a function over every element of a container.
///
/// The lifetime `'a` bounds whatever a container may hold on to past the call (the `Promise`
/// adapter stores the mapping function inside a future); eager containers ignore it.
pub trait Functor<'a>: Kind {
    fn fmap<A: 'a, B: 'a>(f: impl FnMut(A) -> B + 'a, fa: Self::Layer<A>) -> Self::Layer<B>;

    /// Replace every element with `a`.
    fn replace<A: Clone + 'a, B: 'a>(a: A, fb: Self::Layer<B>) -> Self::Layer<A> {
        derive::replace::<Self, A, B>(a, fb)
    }
}

/// Lift values and functions into a container and combine containers pointwise.
///
/// # Minimal definition
///
/// `pure` plus at least one of `tie` and `lift2`. Each has a default written in terms of the
/// other, so an adapter providing neither is rejected at compile time the first time either is
/// used: every round trip through the defaults instantiates them at a larger function type, and
/// the compiler overflows its recursion limit.
///
/// ```compile_fail
/// use kindred::{Applicative, Functor, Kind, PartiallyApplied};
///
/// struct Id<A>(A);
///
/// impl Kind for Id<PartiallyApplied> {
///     type Layer<X> = Id<X>;
/// }
///
/// impl<'a> Functor<'a> for Id<PartiallyApplied> {
///     fn fmap<A: 'a, B: 'a>(mut f: impl FnMut(A) -> B + 'a, fa: Id<A>) -> Id<B> {
///         Id(f(fa.0))
///     }
/// }
///
/// // neither `tie` nor `lift2`
/// impl<'a> Applicative<'a> for Id<PartiallyApplied> {
///     fn pure<A: 'a>(a: A) -> Id<A> {
///         Id(a)
///     }
/// }
///
/// let sum = <Id<PartiallyApplied> as Applicative>::lift2(|a: i32, b: i32| a + b, Id(1), Id(2));
/// assert_eq!(sum.0, 3);
/// ```
pub trait Applicative<'a>: Functor<'a> {
    fn pure<A: 'a>(a: A) -> Self::Layer<A>;

    /// Apply a container of functions to a container of values, binding each function's
    /// first argument. Functions of higher arity come back partially applied.
    fn tie<G, Args>(ff: Self::Layer<G>, fa: Self::Layer<G::Head>) -> Self::Layer<G::Applied>
    where
        G: Partial<Args> + Clone + 'a,
        G::Head: Clone + 'a,
        G::Applied: 'a,
    {
        derive::tie_via_lift::<Self, G, Args>(ff, fa)
    }

    fn lift2<A, B, R>(
        f: impl Fn(A, B) -> R + Clone + 'a,
        fa: Self::Layer<A>,
        fb: Self::Layer<B>,
    ) -> Self::Layer<R>
    where
        A: Clone + 'a,
        B: Clone + 'a,
        R: 'a,
    {
        derive::lift2::<Self, A, B, R, _>(f, fa, fb)
    }

    /// Sequence two containers, keeping the elements of the second.
    fn right_tie<A: Clone + 'a, B: Clone + 'a>(
        u: Self::Layer<A>,
        v: Self::Layer<B>,
    ) -> Self::Layer<B> {
        derive::right_tie::<Self, A, B>(u, v)
    }

    /// Sequence two containers, keeping the elements of the first.
    fn left_tie<A: Clone + 'a, B: Clone + 'a>(
        u: Self::Layer<A>,
        v: Self::Layer<B>,
    ) -> Self::Layer<A> {
        derive::left_tie::<Self, A, B>(u, v)
    }

    /// Alias of [`Applicative::right_tie`].
    ///
    /// `Vec`'s inherent `insert` shadows this on the array token, so call it there as
    /// `<ArrayKind as Applicative>::insert(u, v)`.
    fn insert<A: Clone + 'a, B: Clone + 'a>(
        u: Self::Layer<A>,
        v: Self::Layer<B>,
    ) -> Self::Layer<B> {
        Self::right_tie::<A, B>(u, v)
    }
}

/// Chain computations whose next step depends on the previous result.
pub trait Monad<'a>: Applicative<'a> {
    fn bind<A: 'a, B: 'a>(
        ma: Self::Layer<A>,
        f: impl FnMut(A) -> Self::Layer<B> + 'a,
    ) -> Self::Layer<B>;

    fn compose<A: Clone + 'a, B: Clone + 'a>(
        ma: Self::Layer<A>,
        mb: Self::Layer<B>,
    ) -> Self::Layer<B> {
        derive::compose::<Self, A, B>(ma, mb)
    }

    fn remit<A: 'a>(a: A) -> Self::Layer<A> {
        Self::pure(a)
    }
}

/// Turn a list of containers inside out.
///
/// `sequence` defaults to a right fold over `tie`; `traverse` defaults to mapping then
/// sequencing. Adapters with a cheaper primitive may override either.
pub trait Traversable<'a>: Applicative<'a> {
    fn sequence<A: Clone + 'a>(tfa: Vec<Self::Layer<A>>) -> Self::Layer<Vec<A>> {
        derive::sequence::<Self, A>(tfa)
    }

    fn traverse<A, B: Clone + 'a>(
        f: impl FnMut(A) -> Self::Layer<B>,
        ta: Vec<A>,
    ) -> Self::Layer<Vec<B>> {
        derive::traverse::<Self, A, B, _>(f, ta)
    }
}

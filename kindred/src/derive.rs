//! Typeclass operations derived from primitive ones.
//!
//! Every function here is generic over a container token `K` and asks only for the traits that
//! supply its primitives, so it runs unchanged on every adapter. The provided methods of
//! [`Functor`], [`Applicative`], [`Monad`] and [`Traversable`] delegate here; the functions are
//! also public so adapters can be checked against them.
use std::marker::PhantomData;

use crate::arity::{blind_bind, cons, id, left, partial_one, Bound, Function, Partial};
use crate::typeclass::{Applicative, Functor, Monad, Traversable};

/// `fmap(const a, fb)`
pub fn replace<'a, K, A, B>(a: A, fb: K::Layer<B>) -> K::Layer<A>
where
    K: Functor<'a>,
    A: Clone + 'a,
    B: 'a,
{
    K::fmap(move |b: B| left(a.clone(), b), fb)
}

/// `tie(pure(f), fa)`
pub fn fmap_via_tie<'a, K, A, B, F>(f: F, fa: K::Layer<A>) -> K::Layer<B>
where
    K: Applicative<'a>,
    F: Fn(A) -> B + Clone + 'a,
    A: Clone + 'a,
    B: 'a,
{
    K::tie::<F, (A,)>(K::pure(f), fa)
}

/// `tie(fmap(partial f, fa), fb)`
pub fn lift2<'a, K, A, B, R, F>(f: F, fa: K::Layer<A>, fb: K::Layer<B>) -> K::Layer<R>
where
    K: Applicative<'a>,
    F: Fn(A, B) -> R + Clone + 'a,
    A: Clone + 'a,
    B: Clone + 'a,
    R: 'a,
{
    let partially = K::fmap(move |a: A| partial_one::<F, (A, B)>(f.clone(), a), fa);
    K::tie::<Bound<F, A>, (B,)>(partially, fb)
}

/// `lift2(partial_one)(ff, fa)`
pub fn tie_via_lift<'a, K, G, Args>(
    ff: K::Layer<G>,
    fa: K::Layer<G::Head>,
) -> K::Layer<G::Applied>
where
    K: Applicative<'a>,
    G: Partial<Args> + Clone + 'a,
    G::Head: Clone + 'a,
    G::Applied: 'a,
{
    K::lift2(|g: G, head: G::Head| g.partial(head), ff, fa)
}

/// `tie(replace(id, u), v)`
pub fn right_tie<'a, K, A, B>(u: K::Layer<A>, v: K::Layer<B>) -> K::Layer<B>
where
    K: Applicative<'a>,
    A: Clone + 'a,
    B: Clone + 'a,
{
    let ids = K::replace::<fn(B) -> B, A>(id::<B>, u);
    K::tie::<fn(B) -> B, (B,)>(ids, v)
}

/// `lift2(left)(u, v)`
pub fn left_tie<'a, K, A, B>(u: K::Layer<A>, v: K::Layer<B>) -> K::Layer<A>
where
    K: Applicative<'a>,
    A: Clone + 'a,
    B: Clone + 'a,
{
    K::lift2(left::<A, B>, u, v)
}

pub fn compose<'a, K, A, B>(ma: K::Layer<A>, mb: K::Layer<B>) -> K::Layer<B>
where
    K: Applicative<'a>,
    A: Clone + 'a,
    B: Clone + 'a,
{
    K::right_tie::<A, B>(ma, mb)
}

/// Right fold with `cons`: `tie(fmap(cons, x), sequence(xs))`, starting from `pure([])`.
pub fn sequence<'a, K, A>(tfa: Vec<K::Layer<A>>) -> K::Layer<Vec<A>>
where
    K: Applicative<'a>,
    A: Clone + 'a,
{
    let prepend: fn(A, Vec<A>) -> Vec<A> = cons::<A>;
    tfa.into_iter()
        .rev()
        .fold(K::pure(Vec::<A>::new()), |rest, fa| {
            let heads = K::fmap(
                move |a: A| partial_one::<fn(A, Vec<A>) -> Vec<A>, (A, Vec<A>)>(prepend, a),
                fa,
            );
            K::tie::<Bound<fn(A, Vec<A>) -> Vec<A>, A>, (Vec<A>,)>(heads, rest)
        })
}

/// `sequence(fmap(f, ta))`
pub fn traverse<'a, K, A, B, F>(f: F, ta: Vec<A>) -> K::Layer<Vec<B>>
where
    K: Traversable<'a>,
    B: Clone + 'a,
    F: FnMut(A) -> K::Layer<B>,
{
    K::sequence::<B>(ta.into_iter().map(f).collect())
}

/// `traverse(id, tfa)`
pub fn sequence_via_traverse<'a, K, A>(tfa: Vec<K::Layer<A>>) -> K::Layer<Vec<A>>
where
    K: Traversable<'a>,
    A: Clone + 'a,
{
    K::traverse::<K::Layer<A>, A>(id, tfa)
}

/// An n-ary function lifted to take one container per argument.
///
/// Built by [`lift`]; calling it maps the first argument's container with the partially
/// applied function and ties in the remaining containers left to right.
pub struct Lifted<'a, K, F, Args> {
    f: F,
    _kind: PhantomData<(&'a (), fn() -> K, fn(Args))>,
}

impl<'a, K, F: Clone, Args> Clone for Lifted<'a, K, F, Args> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _kind: PhantomData,
        }
    }
}

/// Lift `f` so that it takes containers in place of each of its arguments.
///
/// ```rust
/// use kindred::arity::Function;
/// use kindred::derive::lift;
/// use kindred::maybe::{Maybe, MaybeKind};
///
/// let add = |a: i32, b: i32, c: i32| a + b + c;
/// let lifted = lift::<MaybeKind, _, _>(add);
///
/// assert_eq!(lifted.call((Maybe::Just(1), Maybe::Just(2), Maybe::Just(3))), Maybe::Just(6));
/// assert_eq!(lifted.call((Maybe::Just(1), Maybe::Nothing, Maybe::Just(3))), Maybe::Nothing);
/// ```
pub fn lift<'a, K, F, Args>(f: F) -> Lifted<'a, K, F, Args>
where
    K: Applicative<'a>,
    F: Function<Args>,
{
    Lifted {
        f,
        _kind: PhantomData,
    }
}

macro_rules! tie_chain {
    ($k:ident, $f:ident, $acc:expr, [$($done:ident),+], []) => { $acc };
    (
        $k:ident,
        $f:ident,
        $acc:expr,
        [$($done:ident),+],
        [$next:ident : $nv:ident $(, $rest:ident : $rv:ident)*]
    ) => {
        tie_chain!(
            $k,
            $f,
            $k::tie::<nested_bound!($f ; $($done),+), ($next, $($rest,)*)>($acc, $nv),
            [$($done,)+ $next],
            [$($rest : $rv),*]
        )
    };
}

macro_rules! impl_lifted {
    ($n:expr; $first:ident : $fv:ident $(, $ty:ident : $val:ident)*) => {
        impl<'a, K, Func, $first, $($ty),*> Function<(K::Layer<$first>, $(K::Layer<$ty>,)*)>
            for Lifted<'a, K, Func, ($first, $($ty,)*)>
        where
            K: Applicative<'a>,
            Func: Function<($first, $($ty,)*)> + Clone + 'a,
            Func::Output: 'a,
            $first: Clone + 'a,
            $($ty: Clone + 'a,)*
        {
            type Output = K::Layer<Func::Output>;
            const ARITY: usize = $n;

            fn call(
                &self,
                ($fv, $($val,)*): (K::Layer<$first>, $(K::Layer<$ty>,)*),
            ) -> Self::Output {
                let f = self.f.clone();
                let acc = K::fmap(
                    move |head: $first| {
                        partial_one::<Func, ($first, $($ty,)*)>(f.clone(), head)
                    },
                    $fv,
                );
                tie_chain!(K, Func, acc, [$first], [$($ty : $val),*])
            }
        }
    };
}

impl_lifted!(1; T1: fa);
impl_lifted!(2; T1: fa, T2: fb);
impl_lifted!(3; T1: fa, T2: fb, T3: fc);
impl_lifted!(4; T1: fa, T2: fb, T3: fc, T4: fd);
impl_lifted!(5; T1: fa, T2: fb, T3: fc, T4: fd, T5: fe);
impl_lifted!(6; T1: fa, T2: fb, T3: fc, T4: fd, T5: fe, T6: ff);

/// `f` waiting on the first argument to come out of `ma`.
///
/// Exposed as a [`Function`] whose first parameter is a `()` placeholder; [`warp`] fills that
/// slot with [`blind_bind`], leaving a function of `f`'s remaining parameters. `ma` is any
/// cloneable value convertible into `K::Layer<A>`, so a container that can't be cloned itself
/// can hand in a shareable handle instead.
pub struct Warped<'a, K, M, F, A, Rest, R> {
    ma: M,
    f: F,
    _marker: PhantomData<(&'a (), fn() -> K, fn(A, Rest) -> R)>,
}

impl<'a, K, M: Clone, F: Clone, A, Rest, R> Clone for Warped<'a, K, M, F, A, Rest, R> {
    fn clone(&self) -> Self {
        Self {
            ma: self.ma.clone(),
            f: self.f.clone(),
            _marker: PhantomData,
        }
    }
}

/// Fill a function's leading `()` placeholder.
pub trait BlindApply {
    type Applied;

    fn blind_apply(self) -> Self::Applied;
}

macro_rules! impl_warped {
    ($($ty:ident : $val:ident),*) => {
        impl<'a, K, M, Func, A, $($ty,)* R> Function<((), $($ty,)*)>
            for Warped<'a, K, M, Func, A, ($($ty,)*), R>
        where
            K: Monad<'a>,
            M: Clone + Into<K::Layer<A>>,
            Func: Function<(A, $($ty,)*), Output = K::Layer<R>> + Clone + 'a,
            A: 'a,
            R: 'a,
            $($ty: Clone + 'a,)*
        {
            type Output = K::Layer<R>;
            const ARITY: usize = <Func as Function<(A, $($ty,)*)>>::ARITY;

            fn call(&self, ((), $($val,)*): ((), $($ty,)*)) -> K::Layer<R> {
                let f = self.f.clone();
                let ma: K::Layer<A> = self.ma.clone().into();
                K::bind::<A, R>(ma, move |a: A| f.call((a, $($val.clone(),)*)))
            }
        }

        impl<'a, K, M, Func, A, $($ty,)* R> BlindApply
            for Warped<'a, K, M, Func, A, ($($ty,)*), R>
        where
            Self: Function<((), $($ty,)*)>,
        {
            type Applied = <Self as Partial<((), $($ty,)*)>>::Applied;

            fn blind_apply(self) -> Self::Applied {
                blind_bind::<Self, ((), $($ty,)*)>(self)
            }
        }
    };
}

impl_warped!();
impl_warped!(T2: b);
impl_warped!(T2: b, T3: c);
impl_warped!(T2: b, T3: c, T4: d);
impl_warped!(T2: b, T3: c, T4: d, T5: e);

/// N-ary bind: feed the value(s) inside `ma` to `f`'s first parameter.
///
/// For a unary `f` this is `bind(ma, f)`; otherwise the result is a function of `f`'s remaining
/// parameters that performs the bind once they are supplied. `Rest` and `R` name `f`'s remaining
/// parameter tuple and the element type of the container it returns.
pub fn warp<'a, K, F, A, Rest, R>(
    ma: K::Layer<A>,
    f: F,
) -> <Warped<'a, K, K::Layer<A>, F, A, Rest, R> as BlindApply>::Applied
where
    K: Monad<'a>,
    Warped<'a, K, K::Layer<A>, F, A, Rest, R>: BlindApply,
{
    warp_from::<K, K::Layer<A>, F, A, Rest, R>(ma, f)
}

/// [`warp`] over a handle `ma` that converts into the container each time the bind runs.
pub fn warp_from<'a, K, M, F, A, Rest, R>(
    ma: M,
    f: F,
) -> <Warped<'a, K, M, F, A, Rest, R> as BlindApply>::Applied
where
    K: Monad<'a>,
    Warped<'a, K, M, F, A, Rest, R>: BlindApply,
{
    Warped {
        ma,
        f,
        _marker: PhantomData,
    }
    .blind_apply()
}

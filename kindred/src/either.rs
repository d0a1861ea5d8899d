//! A value that is either a failure (`Left`) or a success (`Right`).
//!
//! Typeclass operations act on the `Right` side and stop at the first `Left` they meet, in
//! argument order, without calling the user's function.
use crate::arity::Partial;
use crate::kind::{Kind, PartiallyApplied};
use crate::typeclass::{Applicative, Functor, Monad, Traversable};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

pub type EitherKind<L> = Either<L, PartiallyApplied>;

impl<L, R> Either<L, R> {
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Case analysis: `on_left` for a `Left`, `on_right` for a `Right`.
    pub fn either<T>(self, on_left: impl FnOnce(L) -> T, on_right: impl FnOnce(R) -> T) -> T {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    pub fn from_left(self, default: L) -> L {
        match self {
            Either::Left(l) => l,
            Either::Right(_) => default,
        }
    }

    pub fn from_right(self, default: R) -> R {
        match self {
            Either::Left(_) => default,
            Either::Right(r) => r,
        }
    }

    pub fn left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    pub fn right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    pub fn map_either<L2, R2>(
        self,
        on_left: impl FnOnce(L) -> L2,
        on_right: impl FnOnce(R) -> R2,
    ) -> Either<L2, R2> {
        match self {
            Either::Left(l) => Either::Left(on_left(l)),
            Either::Right(r) => Either::Right(on_right(r)),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }
}

/// every `Left` value, in order
pub fn lefts<L, R>(eithers: impl IntoIterator<Item = Either<L, R>>) -> Vec<L> {
    eithers.into_iter().filter_map(Either::left).collect()
}

/// every `Right` value, in order
pub fn rights<L, R>(eithers: impl IntoIterator<Item = Either<L, R>>) -> Vec<R> {
    eithers.into_iter().filter_map(Either::right).collect()
}

/// `(lefts, rights)` in a single pass
pub fn partition_eithers<L, R>(
    eithers: impl IntoIterator<Item = Either<L, R>>,
) -> (Vec<L>, Vec<R>) {
    let mut ls = Vec::new();
    let mut rs = Vec::new();
    for either in eithers {
        match either {
            Either::Left(l) => ls.push(l),
            Either::Right(r) => rs.push(r),
        }
    }
    (ls, rs)
}

impl<L> Kind for Either<L, PartiallyApplied> {
    type Layer<X> = Either<L, X>;
}

impl<'a, L> Functor<'a> for Either<L, PartiallyApplied> {
    #[inline(always)]
    fn fmap<A: 'a, B: 'a>(mut f: impl FnMut(A) -> B + 'a, fa: Either<L, A>) -> Either<L, B> {
        match fa {
            Either::Left(l) => Either::Left(l),
            Either::Right(a) => Either::Right(f(a)),
        }
    }
}

impl<'a, L> Applicative<'a> for Either<L, PartiallyApplied> {
    fn pure<A: 'a>(a: A) -> Either<L, A> {
        Either::Right(a)
    }

    fn tie<G, Args>(ff: Either<L, G>, fa: Either<L, G::Head>) -> Either<L, G::Applied>
    where
        G: Partial<Args> + Clone + 'a,
        G::Head: Clone + 'a,
        G::Applied: 'a,
    {
        match (ff, fa) {
            (Either::Left(l), _) => Either::Left(l),
            (Either::Right(_), Either::Left(l)) => Either::Left(l),
            (Either::Right(f), Either::Right(a)) => Either::Right(f.partial(a)),
        }
    }

    fn lift2<A, B, R>(
        f: impl Fn(A, B) -> R + Clone + 'a,
        fa: Either<L, A>,
        fb: Either<L, B>,
    ) -> Either<L, R>
    where
        A: Clone + 'a,
        B: Clone + 'a,
        R: 'a,
    {
        match (fa, fb) {
            (Either::Left(l), _) | (Either::Right(_), Either::Left(l)) => Either::Left(l),
            (Either::Right(a), Either::Right(b)) => Either::Right(f(a, b)),
        }
    }

    fn right_tie<A: Clone + 'a, B: Clone + 'a>(u: Either<L, A>, v: Either<L, B>) -> Either<L, B> {
        match u {
            Either::Left(l) => Either::Left(l),
            Either::Right(_) => v,
        }
    }

    fn left_tie<A: Clone + 'a, B: Clone + 'a>(u: Either<L, A>, v: Either<L, B>) -> Either<L, A> {
        match (u, v) {
            (Either::Left(l), _) | (Either::Right(_), Either::Left(l)) => Either::Left(l),
            (Either::Right(a), Either::Right(_)) => Either::Right(a),
        }
    }
}

impl<'a, L> Monad<'a> for Either<L, PartiallyApplied> {
    fn bind<A: 'a, B: 'a>(
        ma: Either<L, A>,
        mut f: impl FnMut(A) -> Either<L, B> + 'a,
    ) -> Either<L, B> {
        match ma {
            Either::Left(l) => Either::Left(l),
            Either::Right(a) => f(a),
        }
    }
}

impl<'a, L> Traversable<'a> for Either<L, PartiallyApplied> {
    /// all the `Right` values, or the first `Left` by position
    fn sequence<A: Clone + 'a>(tfa: Vec<Either<L, A>>) -> Either<L, Vec<A>> {
        let mut out = Vec::with_capacity(tfa.len());
        for either in tfa {
            match either {
                Either::Left(l) => return Either::Left(l),
                Either::Right(a) => out.push(a),
            }
        }
        Either::Right(out)
    }
}

//! An optional value: `Just` a value or `Nothing`.
//!
//! Typeclass operations short-circuit on the first `Nothing` without calling the user's function.
use crate::arity::Partial;
use crate::kind::{Kind, PartiallyApplied};
use crate::typeclass::{Applicative, Functor, Monad, Traversable};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    Nothing,
    Just(T),
}

pub type MaybeKind = Maybe<PartiallyApplied>;

impl<T> Maybe<T> {
    pub fn is_just(&self) -> bool {
        matches!(self, Maybe::Just(_))
    }

    pub fn is_nothing(&self) -> bool {
        matches!(self, Maybe::Nothing)
    }

    /// `default` for `Nothing`, otherwise `f` applied to the value.
    pub fn maybe<B>(self, default: B, f: impl FnOnce(T) -> B) -> B {
        match self {
            Maybe::Nothing => default,
            Maybe::Just(t) => f(t),
        }
    }

    pub fn from_maybe(self, default: T) -> T {
        self.maybe(default, |t| t)
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(t) => Maybe::Just(t),
            None => Maybe::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Just(t) => Some(t),
            Maybe::Nothing => None,
        }
    }
}

/// every `Just` value, in order
pub fn cat_maybes<T>(maybes: impl IntoIterator<Item = Maybe<T>>) -> Vec<T> {
    maybes.into_iter().filter_map(Option::from).collect()
}

impl Kind for Maybe<PartiallyApplied> {
    type Layer<X> = Maybe<X>;
}

impl<'a> Functor<'a> for Maybe<PartiallyApplied> {
    #[inline(always)]
    fn fmap<A: 'a, B: 'a>(mut f: impl FnMut(A) -> B + 'a, fa: Maybe<A>) -> Maybe<B> {
        match fa {
            Maybe::Nothing => Maybe::Nothing,
            Maybe::Just(a) => Maybe::Just(f(a)),
        }
    }
}

impl<'a> Applicative<'a> for Maybe<PartiallyApplied> {
    fn pure<A: 'a>(a: A) -> Maybe<A> {
        Maybe::Just(a)
    }

    fn tie<G, Args>(ff: Maybe<G>, fa: Maybe<G::Head>) -> Maybe<G::Applied>
    where
        G: Partial<Args> + Clone + 'a,
        G::Head: Clone + 'a,
        G::Applied: 'a,
    {
        match (ff, fa) {
            (Maybe::Just(f), Maybe::Just(a)) => Maybe::Just(f.partial(a)),
            _ => Maybe::Nothing,
        }
    }

    fn lift2<A, B, R>(f: impl Fn(A, B) -> R + Clone + 'a, fa: Maybe<A>, fb: Maybe<B>) -> Maybe<R>
    where
        A: Clone + 'a,
        B: Clone + 'a,
        R: 'a,
    {
        match (fa, fb) {
            (Maybe::Just(a), Maybe::Just(b)) => Maybe::Just(f(a, b)),
            _ => Maybe::Nothing,
        }
    }

    fn right_tie<A: Clone + 'a, B: Clone + 'a>(u: Maybe<A>, v: Maybe<B>) -> Maybe<B> {
        match u {
            Maybe::Nothing => Maybe::Nothing,
            Maybe::Just(_) => v,
        }
    }

    fn left_tie<A: Clone + 'a, B: Clone + 'a>(u: Maybe<A>, v: Maybe<B>) -> Maybe<A> {
        match v {
            Maybe::Nothing => Maybe::Nothing,
            Maybe::Just(_) => u,
        }
    }
}

impl<'a> Monad<'a> for Maybe<PartiallyApplied> {
    fn bind<A: 'a, B: 'a>(ma: Maybe<A>, mut f: impl FnMut(A) -> Maybe<B> + 'a) -> Maybe<B> {
        match ma {
            Maybe::Nothing => Maybe::Nothing,
            Maybe::Just(a) => f(a),
        }
    }
}

impl<'a> Traversable<'a> for Maybe<PartiallyApplied> {
    fn sequence<A: Clone + 'a>(tfa: Vec<Maybe<A>>) -> Maybe<Vec<A>> {
        tfa.into_iter()
            .map(Option::from)
            .collect::<Option<Vec<A>>>()
            .into()
    }
}

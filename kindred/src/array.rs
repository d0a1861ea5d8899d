//! `Vec` as a non-deterministic container: `tie` and `lift2` enumerate every combination.
use crate::arity::Partial;
use crate::kind::{Kind, PartiallyApplied};
use crate::typeclass::{Applicative, Functor, Monad, Traversable};

pub type ArrayKind = Vec<PartiallyApplied>;

impl Kind for Vec<PartiallyApplied> {
    type Layer<X> = Vec<X>;
}

impl<'a> Functor<'a> for Vec<PartiallyApplied> {
    #[inline(always)]
    fn fmap<A: 'a, B: 'a>(f: impl FnMut(A) -> B + 'a, fa: Vec<A>) -> Vec<B> {
        fa.into_iter().map(f).collect()
    }

    fn replace<A: Clone + 'a, B: 'a>(a: A, fb: Vec<B>) -> Vec<A> {
        vec![a; fb.len()]
    }
}

impl<'a> Applicative<'a> for Vec<PartiallyApplied> {
    fn pure<A: 'a>(a: A) -> Vec<A> {
        vec![a]
    }

    /// For each `x` in `fa` and then each `f` in `ff`, `f(x)`.
    ///
    /// ```rust
    /// # use kindred::{Applicative, array::ArrayKind};
    /// fn inc(x: i32) -> i32 { x + 1 }
    /// fn dec(x: i32) -> i32 { x - 1 }
    ///
    /// let fs: Vec<fn(i32) -> i32> = vec![inc, dec];
    /// assert_eq!(ArrayKind::tie(fs, vec![10, 20]), vec![11, 9, 21, 19]);
    /// ```
    fn tie<G, Args>(ff: Vec<G>, fa: Vec<G::Head>) -> Vec<G::Applied>
    where
        G: Partial<Args> + Clone + 'a,
        G::Head: Clone + 'a,
        G::Applied: 'a,
    {
        let mut out = Vec::with_capacity(ff.len() * fa.len());
        for x in fa {
            for f in ff.iter() {
                out.push(f.clone().partial(x.clone()));
            }
        }
        out
    }

    fn lift2<A, B, R>(f: impl Fn(A, B) -> R + Clone + 'a, fa: Vec<A>, fb: Vec<B>) -> Vec<R>
    where
        A: Clone + 'a,
        B: Clone + 'a,
        R: 'a,
    {
        let mut out = Vec::with_capacity(fa.len() * fb.len());
        for b in fb {
            for a in fa.iter() {
                out.push(f(a.clone(), b.clone()));
            }
        }
        out
    }

    fn right_tie<A: Clone + 'a, B: Clone + 'a>(u: Vec<A>, v: Vec<B>) -> Vec<B> {
        v.into_iter()
            .flat_map(|b| std::iter::repeat(b).take(u.len()))
            .collect()
    }

    fn left_tie<A: Clone + 'a, B: Clone + 'a>(u: Vec<A>, v: Vec<B>) -> Vec<A> {
        v.iter().flat_map(|_| u.iter().cloned()).collect()
    }
}

impl<'a> Monad<'a> for Vec<PartiallyApplied> {
    fn bind<A: 'a, B: 'a>(ma: Vec<A>, f: impl FnMut(A) -> Vec<B> + 'a) -> Vec<B> {
        ma.into_iter().flat_map(f).collect()
    }
}

impl<'a> Traversable<'a> for Vec<PartiallyApplied> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arity::Function;

    fn inc(x: i32) -> i32 {
        x + 1
    }

    fn dec(x: i32) -> i32 {
        x - 1
    }

    fn add(a: i32, b: i32) -> i32 {
        a + b
    }

    fn mul(a: i32, b: i32) -> i32 {
        a * b
    }

    #[test]
    fn tie_enumerates_values_outer_functions_inner() {
        let fs: Vec<fn(i32) -> i32> = vec![inc, dec];
        assert_eq!(ArrayKind::tie(fs, vec![10, 20]), vec![11, 9, 21, 19]);
    }

    #[test]
    fn tie_partially_applies_higher_arity() {
        let fs: Vec<fn(i32, i32) -> i32> = vec![add, mul];
        let partial = ArrayKind::tie(fs, vec![2, 3]);
        assert_eq!(partial.len(), 4);
        let applied: Vec<i32> = partial.iter().map(|f| f.call((10,))).collect();
        assert_eq!(applied, vec![12, 20, 13, 30]);
    }

    #[test]
    fn lift2_matches_tie_order() {
        let sums = ArrayKind::lift2(|a: i32, b: i32| a * 10 + b, vec![1, 2], vec![3, 4]);
        assert_eq!(sums, vec![13, 23, 14, 24]);
    }

    #[test]
    fn sequencing_keeps_one_side() {
        assert_eq!(
            ArrayKind::right_tie(vec![1, 2], vec!['a', 'b']),
            vec!['a', 'a', 'b', 'b']
        );
        assert_eq!(
            ArrayKind::left_tie(vec![1, 2], vec!['a', 'b']),
            vec![1, 2, 1, 2]
        );
    }

    #[test]
    fn insert_through_the_trait_path() {
        assert_eq!(
            <ArrayKind as Applicative>::insert(vec![1, 2], vec!['a']),
            vec!['a', 'a']
        );
        assert_eq!(
            <ArrayKind as Applicative>::insert(Vec::<i32>::new(), vec!['a']),
            Vec::<char>::new()
        );
    }

    #[test]
    fn bind_flat_maps() {
        let out = ArrayKind::bind(vec![1, 2, 3], |x| vec![x; x as usize]);
        assert_eq!(out, vec![1, 2, 2, 3, 3, 3]);
        assert_eq!(ArrayKind::compose(vec![(), ()], vec![7]), vec![7, 7]);
    }

    #[test]
    fn empty_inputs() {
        let fs: Vec<fn(i32) -> i32> = vec![inc];
        assert_eq!(ArrayKind::tie(fs, vec![]), Vec::<i32>::new());
        assert_eq!(
            ArrayKind::sequence(Vec::<Vec<i32>>::new()),
            vec![Vec::<i32>::new()]
        );
        assert_eq!(
            ArrayKind::sequence(vec![vec![1], vec![]]),
            Vec::<Vec<i32>>::new()
        );
    }
}

//! Functor, Applicative and Monad laws, checked against every adapter.
use std::fmt::Debug;

#[cfg(test)]
use crate::arb::{arb_array, arb_either, arb_maybe, arb_outcome};
use crate::arb::{double, offset};
use kindred::arity::{chain, id, partial_one, Bound};
use kindred::{Applicative, Functor};
use proptest::prelude::*;

/// `fmap(id) == id` and `fmap(f . g) == fmap(f) . fmap(g)`
pub fn functor_laws<'a, K>(fa: K::Layer<i32>) -> Result<(), TestCaseError>
where
    K: Functor<'a>,
    K::Layer<i32>: Clone + PartialEq + Debug,
{
    prop_assert_eq!(K::fmap(id::<i32>, fa.clone()), fa.clone());
    prop_assert_eq!(
        K::fmap(chain(double, offset), fa.clone()),
        K::fmap(double, K::fmap(offset, fa))
    );
    Ok(())
}

fn apply(x: i32, g: fn(i32) -> i32) -> i32 {
    g(x)
}

/// identity, homomorphism and interchange
pub fn applicative_laws<'a, K>(v: K::Layer<i32>, x: i32) -> Result<(), TestCaseError>
where
    K: Applicative<'a>,
    K::Layer<i32>: Clone + PartialEq + Debug,
    K::Layer<fn(i32) -> i32>: Clone,
{
    let identity: fn(i32) -> i32 = id::<i32>;
    prop_assert_eq!(
        K::tie::<fn(i32) -> i32, (i32,)>(K::pure(identity), v.clone()),
        v.clone()
    );

    let f: fn(i32) -> i32 = double;
    prop_assert_eq!(
        K::tie::<fn(i32) -> i32, (i32,)>(K::pure(f), K::pure(x)),
        K::pure(double(x))
    );

    let u = K::fmap(move |_: i32| f, v);
    let apply_to_x = partial_one(apply as fn(i32, fn(i32) -> i32) -> i32, x);
    prop_assert_eq!(
        K::tie::<fn(i32) -> i32, (i32,)>(u.clone(), K::pure(x)),
        K::tie::<Bound<fn(i32, fn(i32) -> i32) -> i32, i32>, (fn(i32) -> i32,)>(
            K::pure(apply_to_x),
            u
        )
    );
    Ok(())
}


#[cfg(test)]
proptest! {
    #[test]
    fn array_laws(v in arb_array(), x in any::<i32>()) {
        functor_laws::<kindred::array::ArrayKind>(v.clone())?;
        applicative_laws::<kindred::array::ArrayKind>(v, x)?;
    }

    #[test]
    fn maybe_laws(v in arb_maybe(), x in any::<i32>()) {
        functor_laws::<kindred::maybe::MaybeKind>(v)?;
        applicative_laws::<kindred::maybe::MaybeKind>(v, x)?;
    }

    #[test]
    fn either_laws(v in arb_either(), x in any::<i32>()) {
        functor_laws::<kindred::either::EitherKind<String>>(v.clone())?;
        applicative_laws::<kindred::either::EitherKind<String>>(v, x)?;
    }

    #[test]
    fn promise_functor_laws(outcome in arb_outcome()) {
        use futures::executor::block_on;
        use kindred::promise::{Promise, PromiseKind};

        type P<'a> = PromiseKind<'a, String>;
        let fa = || Promise::new(futures::future::ready(outcome.clone()));

        prop_assert_eq!(block_on(P::fmap(id::<i32>, fa())), outcome.clone());
        prop_assert_eq!(
            block_on(P::fmap(chain(double, offset), fa())),
            block_on(P::fmap(double, P::fmap(offset, fa())))
        );

        let identity: fn(i32) -> i32 = id::<i32>;
        prop_assert_eq!(
            block_on(P::tie::<fn(i32) -> i32, (i32,)>(P::pure(identity), fa())),
            outcome
        );
    }
}

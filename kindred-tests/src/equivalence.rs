//! Hand-written adapter methods must agree with the generic derivations in `kindred::derive`.
use std::fmt::Debug;

use crate::arb::{add, double};
use kindred::arity::{partial_one, Bound};
use kindred::derive;
use kindred::{Applicative, Functor, Traversable};
use proptest::prelude::*;

#[cfg(test)]
use crate::arb::{arb_array, arb_either, arb_maybe};

type Adder = Bound<fn(i32, i32) -> i32, i32>;

pub fn derived_matches_primitive<'a, K>(
    u: K::Layer<i32>,
    v: K::Layer<i32>,
    x: i32,
) -> Result<(), TestCaseError>
where
    K: Traversable<'a>,
    K::Layer<i32>: Clone + PartialEq + Debug,
    K::Layer<Vec<i32>>: PartialEq + Debug,
    K::Layer<Adder>: Clone,
{
    prop_assert_eq!(
        K::replace::<i32, i32>(x, u.clone()),
        derive::replace::<K, i32, i32>(x, u.clone())
    );
    prop_assert_eq!(
        K::fmap(double, u.clone()),
        derive::fmap_via_tie::<K, i32, i32, _>(double, u.clone())
    );

    prop_assert_eq!(
        K::right_tie::<i32, i32>(u.clone(), v.clone()),
        derive::right_tie::<K, i32, i32>(u.clone(), v.clone())
    );
    prop_assert_eq!(
        K::left_tie::<i32, i32>(u.clone(), v.clone()),
        derive::left_tie::<K, i32, i32>(u.clone(), v.clone())
    );
    prop_assert_eq!(
        K::lift2(add, u.clone(), v.clone()),
        derive::lift2::<K, i32, i32, i32, _>(add, u.clone(), v.clone())
    );

    let adders = K::fmap(
        |a: i32| partial_one(add as fn(i32, i32) -> i32, a),
        u.clone(),
    );
    prop_assert_eq!(
        K::tie::<Adder, (i32,)>(adders.clone(), v.clone()),
        derive::tie_via_lift::<K, Adder, (i32,)>(adders, v.clone())
    );

    let both = vec![u, v];
    let sequenced = K::sequence::<i32>(both.clone());
    prop_assert_eq!(&sequenced, &derive::sequence::<K, i32>(both.clone()));
    prop_assert_eq!(&sequenced, &derive::sequence_via_traverse::<K, i32>(both));
    Ok(())
}

#[cfg(test)]
proptest! {
    #[test]
    fn array_agrees(u in arb_array(), v in arb_array(), x in any::<i32>()) {
        derived_matches_primitive::<kindred::array::ArrayKind>(u, v, x)?;
    }

    #[test]
    fn maybe_agrees(u in arb_maybe(), v in arb_maybe(), x in any::<i32>()) {
        derived_matches_primitive::<kindred::maybe::MaybeKind>(u, v, x)?;
    }

    #[test]
    fn either_agrees(u in arb_either(), v in arb_either(), x in any::<i32>()) {
        derived_matches_primitive::<kindred::either::EitherKind<String>>(u, v, x)?;
    }
}

#[cfg(test)]
mod short_circuit {
    use std::cell::Cell;

    use kindred::arity::Function;
    use kindred::derive::{self, lift};
    use kindred::either::{Either, EitherKind};
    use kindred::maybe::{Maybe, MaybeKind};

    type E = EitherKind<&'static str>;

    #[test]
    fn derived_lift2_stops_at_first_failure() {
        let calls = Cell::new(0);
        let add = |a: i32, b: i32| {
            calls.set(calls.get() + 1);
            a + b
        };

        assert_eq!(
            derive::lift2::<E, i32, i32, i32, _>(add, Either::Left("a"), Either::Left("b")),
            Either::Left("a")
        );
        assert_eq!(
            derive::lift2::<E, i32, i32, i32, _>(add, Either::Right(1), Either::Left("b")),
            Either::Left("b")
        );
        assert_eq!(
            derive::lift2::<MaybeKind, i32, i32, i32, _>(add, Maybe::Nothing, Maybe::Just(2)),
            Maybe::Nothing
        );
        assert_eq!(calls.get(), 0);

        assert_eq!(
            derive::lift2::<E, i32, i32, i32, _>(add, Either::Right(1), Either::Right(2)),
            Either::Right(3)
        );
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn lifted_call_stops_at_first_failure() {
        let calls = Cell::new(0);
        let add3 = |a: i32, b: i32, c: i32| {
            calls.set(calls.get() + 1);
            a + b + c
        };

        let lifted = lift::<E, _, _>(add3);
        assert_eq!(
            lifted.call((Either::Right(1), Either::Left("b"), Either::Left("c"))),
            Either::Left("b")
        );
        assert_eq!(
            lifted.call((Either::Left("a"), Either::Right(2), Either::Left("c"))),
            Either::Left("a")
        );

        let lifted = lift::<MaybeKind, _, _>(add3);
        assert_eq!(
            lifted.call((Maybe::Just(1), Maybe::Just(2), Maybe::Nothing)),
            Maybe::Nothing
        );
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn tie_via_lift_stops_at_first_failure() {
        let calls = Cell::new(0);
        let double = |x: i32| {
            calls.set(calls.get() + 1);
            x * 2
        };

        assert_eq!(
            derive::tie_via_lift::<E, _, (i32,)>(Either::Right(double), Either::Left("x")),
            Either::Left("x")
        );
        assert_eq!(
            derive::tie_via_lift::<MaybeKind, _, (i32,)>(Maybe::Just(double), Maybe::Nothing),
            Maybe::Nothing
        );
        assert_eq!(calls.get(), 0);

        let no_function: Either<&str, fn(i32) -> i32> = Either::Left("f");
        assert_eq!(
            derive::tie_via_lift::<E, _, (i32,)>(no_function, Either::Left("x")),
            Either::Left("f")
        );
    }

    #[test]
    fn derived_left_tie_keeps_first_failure() {
        assert_eq!(
            derive::left_tie::<E, i32, i32>(Either::Left("u"), Either::Left("v")),
            Either::Left("u")
        );
        assert_eq!(
            derive::left_tie::<E, i32, i32>(Either::Right(1), Either::Left("v")),
            Either::Left("v")
        );
        assert_eq!(
            derive::left_tie::<E, i32, i32>(Either::Right(1), Either::Right(2)),
            Either::Right(1)
        );
        assert_eq!(
            derive::left_tie::<MaybeKind, i32, i32>(Maybe::Just(1), Maybe::Nothing),
            Maybe::Nothing
        );
    }
}

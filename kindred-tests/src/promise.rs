use futures::executor::block_on;
use kindred::arity::{partial_one, Bound, Function};
use kindred::derive::{self, lift};
use kindred::promise::{Promise, PromiseKind};
use kindred::{Applicative, Functor, Monad, Traversable};
use proptest::prelude::*;
use tokio::sync::oneshot;

use crate::arb::{add, add3, arb_outcome, double};

type P<'a> = PromiseKind<'a, String>;

fn settle<'a>(outcome: &Result<i32, String>) -> Promise<'a, i32, String> {
    Promise::new(futures::future::ready(outcome.clone()))
}

#[tokio::test]
async fn lift_waits_on_every_argument() {
    let add4 = |a: i32, b: i32, c: i32, d: i32| a + b + c + d;
    let sum = lift::<P, _, _>(add4).call((P::pure(1), P::pure(2), P::pure(3), P::pure(4)));
    assert_eq!(sum.await, Ok(10));

    let sum = lift::<P, _, _>(add3).call((
        P::pure(1),
        Promise::reject("second".to_string()),
        Promise::reject("third".to_string()),
    ));
    assert_eq!(sum.await, Err("second".to_string()));
}

// the left operand only resolves once the right one has run, so sequential awaiting would hang
#[tokio::test]
async fn lift2_polls_both_sides_concurrently() {
    let (tx, rx) = oneshot::channel::<i32>();
    let waiting = Promise::new(async move { rx.await.map_err(|e| e.to_string()) });
    let sending = Promise::new(async move {
        tx.send(40).map_err(|n| format!("{n} was never received"))?;
        Ok::<i32, String>(2)
    });

    assert_eq!(P::lift2(add, waiting, sending).await, Ok(42));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn resolves_values_from_other_tasks() {
    let (tx, rx) = oneshot::channel::<i32>();
    let handle = tokio::spawn(async move {
        tokio::task::yield_now().await;
        tx.send(21)
    });

    let received = Promise::new(async move { rx.await.map_err(|e| e.to_string()) });
    let doubled = P::bind(received, |n: i32| P::pure(double(n)));
    assert_eq!(doubled.await, Ok(42));
    assert_eq!(handle.await.map_err(|e| e.to_string()), Ok(Ok(())));
}

#[tokio::test]
async fn traverse_rejects_with_first_failure() {
    let halve = |n: i32| {
        if n % 2 == 0 {
            P::pure(n / 2)
        } else {
            Promise::reject(format!("{n} is odd"))
        }
    };

    assert_eq!(P::traverse(halve, vec![2, 4, 6]).await, Ok(vec![1, 2, 3]));
    assert_eq!(
        P::traverse(halve, vec![2, 3, 5]).await,
        Err("3 is odd".to_string())
    );
}

type Adder = Bound<fn(i32, i32) -> i32, i32>;

proptest! {
    #[test]
    fn promise_agrees_with_derivations(
        u in arb_outcome(),
        v in arb_outcome(),
        x in any::<i32>(),
    ) {
        prop_assert_eq!(
            block_on(P::replace::<i32, i32>(x, settle(&u))),
            block_on(derive::replace::<P, i32, i32>(x, settle(&u)))
        );
        prop_assert_eq!(
            block_on(P::fmap(double, settle(&u))),
            block_on(derive::fmap_via_tie::<P, i32, i32, _>(double, settle(&u)))
        );
        prop_assert_eq!(
            block_on(P::right_tie::<i32, i32>(settle(&u), settle(&v))),
            block_on(derive::right_tie::<P, i32, i32>(settle(&u), settle(&v)))
        );
        prop_assert_eq!(
            block_on(P::left_tie::<i32, i32>(settle(&u), settle(&v))),
            block_on(derive::left_tie::<P, i32, i32>(settle(&u), settle(&v)))
        );
        prop_assert_eq!(
            block_on(P::lift2(add, settle(&u), settle(&v))),
            block_on(derive::lift2::<P, i32, i32, i32, _>(add, settle(&u), settle(&v)))
        );

        let adders = P::fmap(
            |a: i32| partial_one(add as fn(i32, i32) -> i32, a),
            settle(&u),
        );
        prop_assert_eq!(
            block_on(P::tie::<Adder, (i32,)>(adders, settle(&v))),
            block_on(P::lift2(add, settle(&u), settle(&v)))
        );

        prop_assert_eq!(
            block_on(P::sequence::<i32>(vec![settle(&u), settle(&v)])),
            block_on(derive::sequence::<P, i32>(vec![settle(&u), settle(&v)]))
        );
    }
}

use kindred::either::Either;
use kindred::maybe::Maybe;
use proptest::prelude::*;

/// small arrays keep the cartesian products in `tie` and `sequence` cheap
pub fn arb_array() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..5)
}

pub fn arb_maybe() -> impl Strategy<Value = Maybe<i32>> {
    prop_oneof![
        1 => Just(Maybe::Nothing),
        3 => any::<i32>().prop_map(Maybe::Just),
    ]
}

pub fn arb_either() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        1 => "[a-z]{1,4}".prop_map(Either::Left),
        3 => any::<i32>().prop_map(Either::Right),
    ]
}

/// `Ok` or `Err`, later lifted into a promise
pub fn arb_outcome() -> impl Strategy<Value = Result<i32, String>> {
    prop_oneof![
        1 => "[a-z]{1,4}".prop_map(Err),
        3 => any::<i32>().prop_map(Ok),
    ]
}

pub fn double(x: i32) -> i32 {
    x.wrapping_mul(2)
}

pub fn offset(x: i32) -> i32 {
    x.wrapping_add(7)
}

pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

pub fn add3(a: i32, b: i32, c: i32) -> i32 {
    a.wrapping_add(b).wrapping_mul(c)
}

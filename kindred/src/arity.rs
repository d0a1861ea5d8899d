//! Arity-tracking partial application.
//!
//! A function's arity is carried by its type: anything implementing [`Function<Args>`] for an
//! argument tuple `Args` has `ARITY == Args::len`. Binding a leading argument with
//! [`partial_one`] produces a [`Bound`] whose arity is one less, or, once the last argument is
//! supplied, the function's output itself.
//!
//! ```rust
//! use kindred::arity::{partial_one, Function};
//!
//! fn add(a: i32, b: i32, c: i32) -> i32 {
//!     a + b + c
//! }
//!
//! let add_one = partial_one(add, 1);
//! assert_eq!(add_one.call((2, 3)), 6);
//!
//! let add_three = partial_one(add_one, 2);
//! assert_eq!(partial_one(add_three, 3), 6);
//! ```
//!
//! Nullary functions have no [`Partial`] impl and variadic functions can't be named here at
//! all, so the errors the dynamic engine raises at runtime are type errors in this module.
//!
//! A function with nothing left to bind:
//!
//! ```compile_fail
//! use kindred::arity::partial_one;
//!
//! fn unit() -> i32 {
//!     0
//! }
//!
//! let _ = partial_one(unit, ());
//! ```
//!
//! Currying a unary function:
//!
//! ```compile_fail
//! use kindred::arity::curry;
//!
//! let _ = curry(|x: i32| x + 1);
//! ```
//!
//! A prefix longer than the function's arity:
//!
//! ```compile_fail
//! use kindred::arity::partial_many;
//!
//! let _ = partial_many(|a: i32, b: i32| a + b, (1, 2, 3));
//! ```
use std::marker::PhantomData;

/// A function with a statically known arity, called with all of its arguments as a tuple.
pub trait Function<Args> {
    type Output;

    /// the number of arguments this function still needs
    const ARITY: usize;

    fn call(&self, args: Args) -> Self::Output;
}

/// Bind the first argument of a [`Function`].
///
/// Binding the only remaining argument calls the function, so `Applied` is either a [`Bound`]
/// or the function's output.
pub trait Partial<Args>: Function<Args> {
    /// type of the first argument
    type Head;
    type Applied;

    fn partial(self, head: Self::Head) -> Self::Applied;
}

/// Bind a non-empty prefix of a [`Function`]'s arguments at once.
pub trait PartialMany<Args, Prefix>: Function<Args> {
    type Applied;

    fn partial_many(self, prefix: Prefix) -> Self::Applied;
}

/// Marker for functions of arity two or more, the only ones worth currying.
pub trait Curry<Args>: Function<Args> {}

/// `f` with its first argument fixed to `head`.
///
/// `head` is cloned into every call, so a `Bound` can be called any number of times.
#[derive(Clone, Debug)]
pub struct Bound<F, A> {
    f: F,
    head: A,
}

/// A function of arity `n >= 2` reshaped into a chain of `n` unary functions.
pub struct Curried<F, Args> {
    f: F,
    _args: PhantomData<fn(Args)>,
}

impl<F: Clone, Args> Clone for Curried<F, Args> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _args: PhantomData,
        }
    }
}

impl<F, Args> Curried<F, Args> {
    /// Supply the next argument, getting back either the rest of the chain or the result.
    pub fn apply<A>(&self, a: A) -> <Self as Function<(A,)>>::Output
    where
        Self: Function<(A,)>,
    {
        self.call((a,))
    }
}

/// A function with the same arity as `F` that ignores its arguments and returns a constant.
pub struct Constant<F, R> {
    value: R,
    _shape: PhantomData<fn() -> F>,
}

impl<F, R: Clone> Clone for Constant<F, R> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _shape: PhantomData,
        }
    }
}

impl<F, Args, R> Function<Args> for Constant<F, R>
where
    F: Function<Args>,
    R: Clone,
{
    type Output = R;
    const ARITY: usize = F::ARITY;

    fn call(&self, _args: Args) -> R {
        self.value.clone()
    }
}

macro_rules! impl_function {
    ($n:expr; $($ty:ident : $val:ident),+) => {
        impl<Func, Ret, $($ty),+> Function<($($ty,)+)> for Func
        where
            Func: Fn($($ty),+) -> Ret,
        {
            type Output = Ret;
            const ARITY: usize = $n;

            #[inline(always)]
            fn call(&self, ($($val,)+): ($($ty,)+)) -> Ret {
                self($($val),+)
            }
        }
    };
}

impl_function!(1; T1: t1);
impl_function!(2; T1: t1, T2: t2);
impl_function!(3; T1: t1, T2: t2, T3: t3);
impl_function!(4; T1: t1, T2: t2, T3: t3, T4: t4);
impl_function!(5; T1: t1, T2: t2, T3: t3, T4: t4, T5: t5);
impl_function!(6; T1: t1, T2: t2, T3: t3, T4: t4, T5: t5, T6: t6);

macro_rules! impl_bound {
    ($n:expr; $($ty:ident : $val:ident),+) => {
        impl<Func, Held, $($ty),+> Function<($($ty,)+)> for Bound<Func, Held>
        where
            Func: Function<(Held, $($ty,)+)>,
            Held: Clone,
        {
            type Output = Func::Output;
            const ARITY: usize = $n;

            #[inline(always)]
            fn call(&self, ($($val,)+): ($($ty,)+)) -> Self::Output {
                self.f.call((self.head.clone(), $($val,)+))
            }
        }
    };
}

impl_bound!(1; T1: t1);
impl_bound!(2; T1: t1, T2: t2);
impl_bound!(3; T1: t1, T2: t2, T3: t3);
impl_bound!(4; T1: t1, T2: t2, T3: t3, T4: t4);
impl_bound!(5; T1: t1, T2: t2, T3: t3, T4: t4, T5: t5);

impl<Func, T1> Partial<(T1,)> for Func
where
    Func: Function<(T1,)>,
{
    type Head = T1;
    type Applied = Func::Output;

    fn partial(self, head: T1) -> Self::Applied {
        self.call((head,))
    }
}

macro_rules! impl_partial {
    ($head:ident $(, $rest:ident)+) => {
        impl<Func, $head, $($rest),+> Partial<($head, $($rest,)+)> for Func
        where
            Func: Function<($head, $($rest,)+)>,
            $head: Clone,
        {
            type Head = $head;
            type Applied = Bound<Func, $head>;

            fn partial(self, head: $head) -> Bound<Func, $head> {
                Bound { f: self, head }
            }
        }

        impl<Func, $head, $($rest),+> Curry<($head, $($rest,)+)> for Func
        where
            Func: Function<($head, $($rest,)+)>,
        {
        }
    };
}

impl_partial!(T1, T2);
impl_partial!(T1, T2, T3);
impl_partial!(T1, T2, T3, T4);
impl_partial!(T1, T2, T3, T4, T5);
impl_partial!(T1, T2, T3, T4, T5, T6);

macro_rules! impl_partial_many {
    ([$($p:ident : $pv:ident),+] []) => {
        impl<Func, $($p),+> PartialMany<($($p,)+), ($($p,)+)> for Func
        where
            Func: Function<($($p,)+)>,
        {
            type Applied = Func::Output;

            fn partial_many(self, ($($pv,)+): ($($p,)+)) -> Self::Applied {
                self.call(($($pv,)+))
            }
        }
    };
    ([$($p:ident : $pv:ident),+] [$($r:ident),+]) => {
        impl<Func, $($p,)+ $($r),+> PartialMany<($($p,)+ $($r,)+), ($($p,)+)> for Func
        where
            Func: Function<($($p,)+ $($r,)+)>,
            $($p: Clone,)+
        {
            type Applied = nested_bound!(Func ; $($p),+);

            fn partial_many(self, ($($pv,)+): ($($p,)+)) -> Self::Applied {
                bind_all!(self ; $($pv),+)
            }
        }
    };
}

impl_partial_many!([T1: t1] []);
impl_partial_many!([T1: t1] [T2]);
impl_partial_many!([T1: t1, T2: t2] []);
impl_partial_many!([T1: t1] [T2, T3]);
impl_partial_many!([T1: t1, T2: t2] [T3]);
impl_partial_many!([T1: t1, T2: t2, T3: t3] []);
impl_partial_many!([T1: t1] [T2, T3, T4]);
impl_partial_many!([T1: t1, T2: t2] [T3, T4]);
impl_partial_many!([T1: t1, T2: t2, T3: t3] [T4]);
impl_partial_many!([T1: t1, T2: t2, T3: t3, T4: t4] []);
impl_partial_many!([T1: t1] [T2, T3, T4, T5]);
impl_partial_many!([T1: t1, T2: t2] [T3, T4, T5]);
impl_partial_many!([T1: t1, T2: t2, T3: t3] [T4, T5]);
impl_partial_many!([T1: t1, T2: t2, T3: t3, T4: t4] [T5]);
impl_partial_many!([T1: t1, T2: t2, T3: t3, T4: t4, T5: t5] []);
impl_partial_many!([T1: t1] [T2, T3, T4, T5, T6]);
impl_partial_many!([T1: t1, T2: t2] [T3, T4, T5, T6]);
impl_partial_many!([T1: t1, T2: t2, T3: t3] [T4, T5, T6]);
impl_partial_many!([T1: t1, T2: t2, T3: t3, T4: t4] [T5, T6]);
impl_partial_many!([T1: t1, T2: t2, T3: t3, T4: t4, T5: t5] [T6]);
impl_partial_many!([T1: t1, T2: t2, T3: t3, T4: t4, T5: t5, T6: t6] []);

impl<Func, T1> Function<(T1,)> for Curried<Func, (T1,)>
where
    Func: Function<(T1,)>,
{
    type Output = Func::Output;
    const ARITY: usize = 1;

    fn call(&self, args: (T1,)) -> Self::Output {
        self.f.call(args)
    }
}

macro_rules! impl_curried {
    ($head:ident $(, $rest:ident)+) => {
        impl<Func, $head, $($rest),+> Function<($head,)> for Curried<Func, ($head, $($rest,)+)>
        where
            Func: Function<($head, $($rest,)+)> + Clone,
            $head: Clone,
        {
            type Output = Curried<Bound<Func, $head>, ($($rest,)+)>;
            const ARITY: usize = 1;

            fn call(&self, (head,): ($head,)) -> Self::Output {
                Curried {
                    f: Bound {
                        f: self.f.clone(),
                        head,
                    },
                    _args: PhantomData,
                }
            }
        }
    };
}

impl_curried!(T1, T2);
impl_curried!(T1, T2, T3);
impl_curried!(T1, T2, T3, T4);
impl_curried!(T1, T2, T3, T4, T5);
impl_curried!(T1, T2, T3, T4, T5, T6);

/// Bind exactly one leading argument of `f`.
///
/// For an arity-1 `f` this calls it, otherwise the result is a [`Bound`] of arity `n - 1`.
pub fn partial_one<F, Args>(f: F, head: F::Head) -> F::Applied
where
    F: Partial<Args>,
{
    f.partial(head)
}

/// Bind a prefix tuple of `f`'s arguments, equivalent to repeated [`partial_one`].
pub fn partial_many<F, Args, Prefix>(f: F, prefix: Prefix) -> F::Applied
where
    F: PartialMany<Args, Prefix>,
{
    f.partial_many(prefix)
}

/// Bind a placeholder (`Default::default()`) as the first argument of `f`.
pub fn blind_bind<F, Args>(f: F) -> F::Applied
where
    F: Partial<Args>,
    F::Head: Default,
{
    f.partial(Default::default())
}

pub fn curry<F, Args>(f: F) -> Curried<F, Args>
where
    F: Curry<Args>,
{
    Curried {
        f,
        _args: PhantomData,
    }
}

/// Adapt `f` to take its whole argument list as a single tuple.
pub fn unspread<F, Args>(f: F) -> impl Fn(Args) -> F::Output
where
    F: Function<Args>,
{
    move |args| f.call(args)
}

/// the number of arguments `f` still needs
pub fn arity_of<F, Args>(_f: &F) -> usize
where
    F: Function<Args>,
{
    F::ARITY
}

pub fn with_constant<F, Args, R>(_f: &F, value: R) -> Constant<F, R>
where
    F: Function<Args>,
    R: Clone,
{
    Constant {
        value,
        _shape: PhantomData,
    }
}

pub fn id<T>(x: T) -> T {
    x
}

pub fn left<A, B>(a: A, _b: B) -> A {
    a
}

pub fn right<A, B>(_a: A, b: B) -> B {
    b
}

pub fn cons<A>(head: A, mut tail: Vec<A>) -> Vec<A> {
    tail.insert(0, head);
    tail
}

pub fn swapped<A, B, R>(f: impl Fn(A, B) -> R) -> impl Fn(B, A) -> R {
    move |b, a| f(a, b)
}

/// `f` after `g`
pub fn chain<A, B, C>(f: impl Fn(B) -> C, g: impl Fn(A) -> B) -> impl Fn(A) -> C {
    move |a| f(g(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(a: i32, b: i32, c: i32, d: i32) -> i32 {
        a + b + c + d
    }

    fn label(tag: u8, n: i32) -> String {
        format!("{tag}:{n}")
    }

    #[test]
    fn arity_steps_down_to_saturation() {
        assert_eq!(arity_of(&add), 4);

        let f = partial_one(add, 1);
        assert_eq!(arity_of(&f), 3);

        let f = partial_one(f, 2);
        assert_eq!(arity_of(&f), 2);

        let f = partial_one(f, 3);
        assert_eq!(arity_of(&f), 1);

        assert_eq!(partial_one(f, 4), 10);
    }

    #[test]
    fn bound_functions_are_reusable() {
        let sub = |a: i32, b: i32| a - b;
        let from_ten = partial_one(sub, 10);

        assert_eq!(from_ten.call((3,)), 7);
        assert_eq!(from_ten.call((4,)), 6);
        assert_eq!(from_ten.clone().call((10,)), 0);
    }

    #[test]
    fn partial_many_binds_prefix() {
        let f = partial_many(add, (1, 2));
        assert_eq!(arity_of(&f), 2);
        assert_eq!(f.call((3, 4)), 10);

        assert_eq!(partial_many(add, (1, 2, 3, 4)), 10);
    }

    #[test]
    fn curried_chain() {
        let curried = curry(add);
        assert_eq!(arity_of(&curried), 1);

        let step = curried.apply(1).apply(2);
        assert_eq!(step.apply(3).apply(4), 10);
        // earlier links in the chain are untouched
        assert_eq!(curried.apply(5).apply(5).apply(5).apply(5), 20);
    }

    #[test]
    fn blind_bind_fills_first_with_default() {
        let f = blind_bind(label);
        assert_eq!(f.call((5,)), "0:5");
    }

    #[test]
    fn unspread_takes_tuple() {
        let f = unspread(add);
        assert_eq!(f((1, 2, 3, 4)), 10);
    }

    #[test]
    fn combinators() {
        assert_eq!(id(3), 3);
        assert_eq!(left(1, "ignored"), 1);
        assert_eq!(right("ignored", 2), 2);
        assert_eq!(cons(1, vec![2, 3]), vec![1, 2, 3]);

        let minus = swapped(|a: i32, b: i32| a - b);
        assert_eq!(minus(1, 10), 9);

        let inc_then_double = chain(|x: i32| x * 2, |x: i32| x + 1);
        assert_eq!(inc_then_double(4), 10);

        let always = with_constant(&add, "done");
        assert_eq!(arity_of(&always), 4);
        assert_eq!(always.call((1, 2, 3, 4)), "done");
    }
}

//! Partial application for functions whose arity is only known at runtime.
//!
//! A [`DynFn`] carries a name, a declared [`Arity`] and the arguments bound so far. Every entry
//! point checks the arity before binding anything and reports violations as [`ArityError`].
use std::fmt;
use std::rc::Rc;

use tracing::{debug, instrument, trace};

use crate::error::{render_args, ArityError};

/// Declared number of parameters of a [`DynFn`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Arity {
    Fixed(usize),
    /// accepts any number of arguments, so its arity is meaningless for partial application
    Variadic,
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Fixed(n) => write!(f, "{n}"),
            Arity::Variadic => write!(f, "variadic"),
        }
    }
}

/// A named function over a homogeneous argument type `T`, with a prefix of already-bound arguments.
pub struct DynFn<T, R> {
    name: Rc<str>,
    arity: Arity,
    bound: Vec<T>,
    body: Rc<dyn Fn(Vec<T>) -> R>,
}

impl<T: Clone, R> Clone for DynFn<T, R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            arity: self.arity,
            bound: self.bound.clone(),
            body: self.body.clone(),
        }
    }
}

impl<T: fmt::Debug, R> fmt::Debug for DynFn<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynFn")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("bound", &self.bound)
            .finish_non_exhaustive()
    }
}

/// Outcome of binding arguments: either the function's result, or a function awaiting the rest.
pub enum Applied<T, R> {
    Saturated(R),
    Partial(DynFn<T, R>),
}

impl<T, R> Applied<T, R> {
    pub fn saturated(self) -> Option<R> {
        match self {
            Applied::Saturated(r) => Some(r),
            Applied::Partial(_) => None,
        }
    }

    pub fn partial(self) -> Option<DynFn<T, R>> {
        match self {
            Applied::Saturated(_) => None,
            Applied::Partial(f) => Some(f),
        }
    }
}

/// A [`DynFn`] of arity two or more, taking its arguments one at a time.
pub struct DynCurried<T, R> {
    f: DynFn<T, R>,
    remaining: usize,
}

impl<T: Clone, R> Clone for DynCurried<T, R> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            remaining: self.remaining,
        }
    }
}

pub enum Step<T, R> {
    Done(R),
    Next(DynCurried<T, R>),
}

impl<T: Clone, R> DynCurried<T, R> {
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn apply(&self, arg: T) -> Step<T, R> {
        match self.f.bind_unchecked(vec![arg], self.remaining) {
            Applied::Saturated(r) => Step::Done(r),
            Applied::Partial(f) => Step::Next(DynCurried {
                f,
                remaining: self.remaining - 1,
            }),
        }
    }
}

impl<T, R> DynFn<T, R> {
    pub fn fixed(name: &str, arity: usize, body: impl Fn(Vec<T>) -> R + 'static) -> Self {
        Self {
            name: Rc::from(name),
            arity: Arity::Fixed(arity),
            bound: Vec::new(),
            body: Rc::new(body),
        }
    }

    pub fn variadic(name: &str, body: impl Fn(Vec<T>) -> R + 'static) -> Self {
        Self {
            name: Rc::from(name),
            arity: Arity::Variadic,
            bound: Vec::new(),
            body: Rc::new(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Arity still outstanding after the arguments bound so far.
    pub fn arity(&self) -> Arity {
        match self.arity {
            Arity::Fixed(n) => Arity::Fixed(n - self.bound.len()),
            Arity::Variadic => Arity::Variadic,
        }
    }
}

impl<T: Clone + fmt::Debug, R> DynFn<T, R> {
    /// Call with every remaining argument.
    ///
    /// Variadic functions accept any argument count here; fixed ones need exactly their arity.
    pub fn call(&self, args: Vec<T>) -> Result<R, ArityError> {
        let mut full = self.bound.clone();
        match self.arity() {
            Arity::Fixed(expected) if expected != args.len() => {
                debug!(
                    function = %self.name,
                    expected,
                    actual = args.len(),
                    "rejected call"
                );
                Err(ArityError::WrongArgumentCount {
                    function: self.name.to_string(),
                    expected,
                    actual: args.len(),
                })
            }
            _ => {
                full.extend(args);
                Ok((self.body)(full))
            }
        }
    }

    pub fn partial_one(&self, arg: T) -> Result<Applied<T, R>, ArityError> {
        self.partial_many(vec![arg])
    }

    /// Bind a non-empty prefix of arguments, calling the function if that saturates it.
    #[instrument(skip(self, args), fields(function = %self.name))]
    pub fn partial_many(&self, args: Vec<T>) -> Result<Applied<T, R>, ArityError> {
        if args.is_empty() {
            debug!("rejected empty prefix");
            return Err(ArityError::EmptyPrefix {
                function: self.name.to_string(),
            });
        }
        let remaining = self.check(&args)?;
        trace!(bound = args.len(), remaining, "partially applied");
        Ok(self.bind_unchecked(args, remaining))
    }

    pub fn curry(&self) -> Result<DynCurried<T, R>, ArityError> {
        match self.arity() {
            Arity::Fixed(n) if n >= 2 => Ok(DynCurried {
                f: self.clone(),
                remaining: n,
            }),
            arity => {
                debug!(function = %self.name, %arity, "rejected curry");
                Err(ArityError::NotCurryable {
                    function: self.name.to_string(),
                    arity,
                })
            }
        }
    }

    /// Adapt to a function taking its whole argument list at once.
    pub fn unspread(&self) -> impl Fn(Vec<T>) -> Result<R, ArityError> {
        let this = self.clone();
        move |args| this.call(args)
    }

    fn check(&self, args: &[T]) -> Result<usize, ArityError> {
        let arity = self.arity();
        let rejected = match arity {
            Arity::Variadic => ArityError::Variadic {
                function: self.name.to_string(),
                args: render_args(args),
            },
            Arity::Fixed(0) => ArityError::Nullary {
                function: self.name.to_string(),
                args: render_args(args),
            },
            Arity::Fixed(n) if args.len() > n => ArityError::TooManyArguments {
                function: self.name.to_string(),
                arity: n,
                args: render_args(args),
            },
            Arity::Fixed(n) => return Ok(n),
        };
        debug!(
            function = %self.name,
            %arity,
            supplied = args.len(),
            "rejected partial application"
        );
        Err(rejected)
    }
}

impl<T: Clone, R> DynFn<T, R> {
    // caller guarantees `args.len() <= remaining`
    fn bind_unchecked(&self, args: Vec<T>, remaining: usize) -> Applied<T, R> {
        let saturates = args.len() == remaining;
        let mut bound = self.bound.clone();
        bound.extend(args);
        if saturates {
            Applied::Saturated((self.body)(bound))
        } else {
            Applied::Partial(DynFn {
                name: self.name.clone(),
                arity: self.arity,
                bound,
                body: self.body.clone(),
            })
        }
    }
}

impl<T: Clone + fmt::Debug + Default, R> DynFn<T, R> {
    /// Bind `T::default()` as the first argument.
    pub fn blind_bind(&self) -> Result<Applied<T, R>, ArityError> {
        self.partial_one(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add4() -> DynFn<i64, i64> {
        DynFn::fixed("add", 4, |args| args.iter().sum())
    }

    fn sum_all() -> DynFn<i64, i64> {
        DynFn::variadic("sum_all", |args| args.iter().sum())
    }

    #[test]
    fn arity_decreases_per_bound_argument() {
        let f = add4();
        assert_eq!(f.arity(), Arity::Fixed(4));

        let f = f.partial_one(1).unwrap().partial().unwrap();
        assert_eq!(f.arity(), Arity::Fixed(3));
        let f = f.partial_one(2).unwrap().partial().unwrap();
        assert_eq!(f.arity(), Arity::Fixed(2));
        let f = f.partial_one(3).unwrap().partial().unwrap();
        assert_eq!(f.arity(), Arity::Fixed(1));

        assert_eq!(f.partial_one(4).unwrap().saturated(), Some(10));
    }

    #[test]
    fn partial_many_then_call() {
        let f = add4().partial_many(vec![1, 2]).unwrap().partial().unwrap();
        assert_eq!(f.call(vec![3, 4]), Ok(10));
        assert_eq!(
            f.call(vec![3]),
            Err(ArityError::WrongArgumentCount {
                function: "add".to_string(),
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn variadic_rejected_at_every_entry_point() {
        let f = sum_all();
        assert!(matches!(f.partial_one(1), Err(ArityError::Variadic { .. })));
        assert!(matches!(
            f.partial_many(vec![1, 2]),
            Err(ArityError::Variadic { .. })
        ));
        assert!(matches!(f.blind_bind(), Err(ArityError::Variadic { .. })));

        let err = f.curry().err().unwrap();
        assert_eq!(
            err,
            ArityError::NotCurryable {
                function: "sum_all".to_string(),
                arity: Arity::Variadic,
            }
        );
        assert_eq!(
            err.to_string(),
            "sum_all with arity of variadic can not be curried"
        );

        // plain calls are fine
        assert_eq!(f.call(vec![1, 2, 3]), Ok(6));
    }

    #[test]
    fn over_long_prefix_lists_offending_args() {
        let err = add4().partial_many(vec![1, 2, 3, 4, 5]).err().unwrap();
        assert_eq!(
            err,
            ArityError::TooManyArguments {
                function: "add".to_string(),
                arity: 4,
                args: "1, 2, 3, 4, 5".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "add with arity of 4 can not be partially applied by [1, 2, 3, 4, 5]"
        );
    }

    #[test]
    fn nullary_and_empty_prefix() {
        let unit: DynFn<i64, i64> = DynFn::fixed("unit", 0, |_| 0);
        assert!(matches!(
            unit.partial_one(1),
            Err(ArityError::Nullary { .. })
        ));
        assert!(matches!(
            add4().partial_many(vec![]),
            Err(ArityError::EmptyPrefix { .. })
        ));
    }

    #[test]
    fn curry_chain() {
        let mut step = add4().curry().unwrap();
        for arg in 1..4 {
            step = match step.apply(arg) {
                Step::Next(next) => next,
                Step::Done(_) => panic!("saturated early"),
            };
        }
        assert_eq!(step.remaining(), 1);
        assert!(matches!(step.apply(4), Step::Done(10)));

        let inc: DynFn<i64, i64> = DynFn::fixed("inc", 1, |args| args[0] + 1);
        assert!(matches!(
            inc.curry(),
            Err(ArityError::NotCurryable {
                arity: Arity::Fixed(1),
                ..
            })
        ));
    }

    #[test]
    fn blind_bind_uses_default() {
        let pair: DynFn<i64, Vec<i64>> = DynFn::fixed("pair", 2, |args| args);
        let f = pair.blind_bind().unwrap().partial().unwrap();
        assert_eq!(f.call(vec![7]), Ok(vec![0, 7]));
    }

    #[test]
    fn unspread_calls_with_list() {
        let f = add4().unspread();
        assert_eq!(f(vec![1, 2, 3, 4]), Ok(10));
    }
}

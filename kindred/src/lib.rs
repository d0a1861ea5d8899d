//! Arity-tracking partial application, and Functor / Applicative / Monad operations derived
//! from a handful of primitives per container.
//!
//! Containers are named by token types (see [`Kind`]): `Vec<PartiallyApplied>`,
//! `Either<L, PartiallyApplied>`, `Maybe<PartiallyApplied>` and, with the `promise` feature,
//! `Promise<'a, PartiallyApplied, E>`. Each adapter implements the required methods of
//! [`Functor`], [`Applicative`], [`Monad`] and [`Traversable`]; everything else is filled in by
//! the generic functions in [`derive`], which lean on [`arity`] whenever they need to bind
//! arguments one at a time.
//!
//! ```rust
//! use kindred::{Applicative, Monad};
//! use kindred::maybe::{Maybe, MaybeKind};
//!
//! let add = |a: i32, b: i32| a + b;
//! let partially = MaybeKind::tie(MaybeKind::pure(add), Maybe::Just(1));
//! let sum = MaybeKind::tie(partially, Maybe::Just(2));
//! assert_eq!(sum, Maybe::Just(3));
//!
//! let halved = MaybeKind::bind(sum, |n| {
//!     if n % 2 == 0 {
//!         Maybe::Just(n / 2)
//!     } else {
//!         Maybe::Nothing
//!     }
//! });
//! assert_eq!(halved, Maybe::Nothing);
//! ```
#[macro_use]
mod macros;

pub mod arity;
pub mod array;
pub mod decay;
pub mod derive;
pub mod dynamic;
pub mod either;
mod error;
mod kind;
pub mod maybe;
mod typeclass;

#[cfg(feature = "promise")]
pub mod promise;

pub use error::{ArityError, DecayError};
pub use kind::{Kind, PartiallyApplied};
pub use typeclass::{Applicative, Functor, Monad, Traversable};

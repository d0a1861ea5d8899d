//! Unwrapping a container down to the single value it holds.
use std::fmt::Debug;

use crate::arity::{partial_one, Partial};
use crate::either::Either;
use crate::error::DecayError;
use crate::maybe::Maybe;

/// A container with at most one value in its decay slot.
pub trait Decay {
    type Inner;

    fn decay(self) -> Result<Self::Inner, DecayError>;
}

impl<T: Debug> Decay for Maybe<T> {
    type Inner = T;

    fn decay(self) -> Result<T, DecayError> {
        match self {
            Maybe::Just(t) => Ok(t),
            nothing => Err(DecayError::NotDecayable {
                value: format!("{nothing:?}"),
            }),
        }
    }
}

/// Decays to the `Right` value; a `Left` has nothing to unwrap on this side.
impl<L: Debug, R: Debug> Decay for Either<L, R> {
    type Inner = R;

    fn decay(self) -> Result<R, DecayError> {
        match self {
            Either::Right(r) => Ok(r),
            left => Err(DecayError::NotDecayable {
                value: format!("{left:?}"),
            }),
        }
    }
}

/// Partially apply `f` to the value unwrapped from `d`.
pub fn dmap<D, F, Args>(f: F, d: D) -> Result<F::Applied, DecayError>
where
    D: Decay,
    F: Partial<Args, Head = D::Inner>,
{
    let inner = d.decay()?;
    Ok(partial_one(f, inner))
}

/// A container kind: something that, given an element type `X`, names a container of `X`.
///
/// # Implementing this trait
///
/// Rust does not let us implement a trait for a partially applied type: we can implement
/// a trait for `Vec<usize>` but not for just `Vec`. So every kind in this crate is named by
/// a token type, the container applied to the uninhabited [`PartiallyApplied`] marker:
///
/// ```rust
/// # use kindred::{Kind, PartiallyApplied};
/// enum Pair<A> {
///     Both(A, A),
/// }
///
/// impl Kind for Pair<PartiallyApplied> {
///     type Layer<X> = Pair<X>;
/// }
/// ```
///
/// The typeclass traits ([`crate::Functor`], [`crate::Applicative`], [`crate::Monad`]) are
/// then implemented on the token and called through it, eg `Vec::<PartiallyApplied>::pure(1)`.
pub trait Kind: Sized {
    /// the container type for some element type `X`
    type Layer<X>;
}

/// An uninhabited type used to name container kinds via partially-applied container types.
///
/// For example: the [`Kind`] instance for `Maybe<A>` cannot be written over the
/// partially-applied type `Maybe`, so instead we write it over `Maybe<PartiallyApplied>`
#[derive(Clone, Debug)]
pub enum PartiallyApplied {}

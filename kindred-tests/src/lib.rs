//! Property tests for the kindred adapters: typeclass laws, and agreement between each
//! adapter's hand-written operations and the generic derivations they override.
pub mod arb;
pub mod equivalence;
pub mod laws;

#[cfg(test)]
mod promise;

//! Supply infrastructure for variable relationship tracking.
//!
//! Supplies are automatically maintained data structures that answer
//! questions about the working solution which would otherwise require an
//! O(n) scan, such as "which entities currently point at this value?".
//! They are kept consistent incrementally by the variable listener
//! protocol, thousands to millions of times per second on the move hot
//! path, without drift and without full recomputation.

mod inverse_relation;
mod ordered_set;

#[cfg(test)]
mod tests;

pub use inverse_relation::{CollectionInverseVariableSupply, InverseCollection};

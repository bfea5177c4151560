#![deny(missing_docs)]

//! Edge encoding and the dual-backend existence oracle behind the XSwap engine.
//!
//! Edges are mapped to 64-bit keys with the Cantor pairing function
//! ([`encode`]/[`decode`]). The [`ExistenceOracle`] stores those keys either in
//! a [`DenseEdgeSet`] (one bit per possible key, constant time, memory
//! quadratic in the largest node id) or a [`CompressedEdgeSet`] (roaring
//! bitmap, memory proportional to the number of edges). The choice is made
//! once per run by [`select_backend`] from a caller supplied memory ceiling.

mod codec;
mod compressed;
mod degrees;
mod dense;
mod hash;
mod oracle;

pub use codec::{decode, encode, max_key};
pub use compressed::CompressedEdgeSet;
pub use degrees::DegreeSequence;
pub use dense::DenseEdgeSet;
pub use hash::canonical_edge_hash;
pub use oracle::{memory_estimate, select_backend, BackendKind, EdgeSet, ExistenceOracle};

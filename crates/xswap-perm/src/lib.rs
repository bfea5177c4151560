#![deny(missing_docs)]

//! Degree-preserving edge swap permutations and the priors derived from them.
//!
//! [`permute`] validates an edge list, builds the existence oracle and runs a
//! fixed budget of swap attempts through the [`SwapEngine`]. The [`prior`]
//! module repeats that across many seeds to estimate how likely each node pair
//! is to be connected given only the degree sequence.

pub mod config;
pub mod driver;
pub mod engine;
pub mod prior;
pub mod stats;

pub use config::{PermuteConfig, PriorConfig};
pub use driver::{permute, Permutation};
pub use engine::{EngineOutput, EngineState, SwapConditions, SwapEngine};
pub use prior::{approximate_xswap_prior, compute_occurrence_matrix, compute_priors, PriorRow};
pub use stats::{AttemptOutcome, RejectReason, SwapStats};

#![deny(missing_docs)]

//! Core edge types, error surface and seeded randomness shared by the XSwap crates.

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod rng;

pub use errors::{ErrorInfo, XswapError};
pub use rng::{permutation_seed, RngHandle};

/// Largest node identifier accepted anywhere in the engine.
///
/// Ids must be representable as a signed 32-bit integer.
pub const MAX_NODE_ID: u32 = i32::MAX as u32;

/// Directed edge between two integer node identifiers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Edge {
    /// Source node identifier.
    pub source: u32,
    /// Target node identifier.
    pub target: u32,
}

impl Edge {
    /// Creates a new edge. Range checks happen in [`Edge::validate`].
    pub const fn new(source: u32, target: u32) -> Self {
        Self { source, target }
    }

    /// Returns the edge pointing in the opposite direction.
    pub const fn reversed(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
        }
    }

    /// Whether both endpoints are the same node.
    pub const fn is_self_loop(self) -> bool {
        self.source == self.target
    }

    /// Largest of the two endpoints.
    pub fn max_id(self) -> u32 {
        self.source.max(self.target)
    }

    /// Checks that both endpoints fit the signed 32-bit id range.
    pub fn validate(self) -> Result<Self, XswapError> {
        for (side, id) in [("source", self.source), ("target", self.target)] {
            if id > MAX_NODE_ID {
                return Err(XswapError::Input(
                    ErrorInfo::new("node-id-out-of-range", "node id exceeds the 32-bit range")
                        .with_context(side, id.to_string())
                        .with_context("max", MAX_NODE_ID.to_string()),
                ));
            }
        }
        Ok(self)
    }
}

impl From<(u32, u32)> for Edge {
    fn from((source, target): (u32, u32)) -> Self {
        Self::new(source, target)
    }
}

impl From<Edge> for (u32, u32) {
    fn from(edge: Edge) -> Self {
        (edge.source, edge.target)
    }
}

impl TryFrom<(i64, i64)> for Edge {
    type Error = XswapError;

    fn try_from((source, target): (i64, i64)) -> Result<Self, Self::Error> {
        let convert = |side: &str, raw: i64| -> Result<u32, XswapError> {
            if (0..=i64::from(MAX_NODE_ID)).contains(&raw) {
                Ok(raw as u32)
            } else {
                Err(XswapError::Input(
                    ErrorInfo::new(
                        "node-id-out-of-range",
                        "node ids must be non-negative 32-bit integers",
                    )
                    .with_context(side, raw.to_string()),
                ))
            }
        };
        Ok(Self::new(convert("source", source)?, convert("target", target)?))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.source, self.target)
    }
}

/// Converts a slice of `(source, target)` tuples into edges.
pub fn edges_from_pairs(pairs: &[(u32, u32)]) -> Vec<Edge> {
    pairs.iter().copied().map(Edge::from).collect()
}

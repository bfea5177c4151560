use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use xswap_core::errors::XswapError;
use xswap_core::Edge;

use crate::compressed::CompressedEdgeSet;
use crate::dense::DenseEdgeSet;

/// Set-of-edges capability shared by the dense and compressed backends.
pub trait EdgeSet: fmt::Debug + Send {
    /// Whether `edge` is present.
    fn contains(&self, edge: Edge) -> bool;

    /// Adds `edge`. Returns `false` when it was already present.
    fn insert(&mut self, edge: Edge) -> bool;

    /// Removes `edge`. Returns `false` when it was absent.
    fn remove(&mut self, edge: Edge) -> bool;

    /// Number of stored edges.
    fn len(&self) -> usize;

    /// Whether the set stores no edges.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Backend identifier, for reporting only.
    fn kind(&self) -> BackendKind;

    /// Approximate heap footprint in bytes.
    fn memory_bytes(&self) -> u64;
}

/// Physical representation chosen for a permutation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    /// Uncompressed bit array indexed by edge key.
    Dense,
    /// Roaring bitmap over edge keys.
    Compressed,
}

impl BackendKind {
    /// Stable label used in logs and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Dense => "dense",
            BackendKind::Compressed => "compressed",
        }
    }
}

/// Bytes the dense backend needs for ids up to `max_id`.
pub fn memory_estimate(max_id: u32) -> u64 {
    DenseEdgeSet::required_bytes(max_id)
}

/// Picks the dense backend when it fits under `max_bytes`, otherwise the compressed one.
pub fn select_backend(max_id: u32, max_bytes: u64) -> BackendKind {
    if memory_estimate(max_id) <= max_bytes {
        BackendKind::Dense
    } else {
        BackendKind::Compressed
    }
}

/// Membership oracle consulted by the swap engine.
///
/// Holds the live edges in the backend selected at construction and a
/// read-only excluded set that is only ever tested.
#[derive(Debug)]
pub struct ExistenceOracle {
    live: Box<dyn EdgeSet>,
    excluded: CompressedEdgeSet,
}

impl ExistenceOracle {
    /// Builds the oracle, choosing the backend from `max_bytes` and the id range of `edges`.
    ///
    /// Emits a warning when the memory ceiling forces the compressed backend.
    pub fn build(edges: &[Edge], excluded: &[Edge], max_bytes: u64) -> Result<Self, XswapError> {
        let max_id = edges.iter().map(|edge| edge.max_id()).max().unwrap_or(0);
        let kind = select_backend(max_id, max_bytes);
        let required = memory_estimate(max_id);
        debug!(
            max_id,
            required_bytes = required,
            max_bytes,
            backend = kind.as_str(),
            "selected edge-set backend"
        );
        if kind == BackendKind::Compressed {
            warn!(
                required_bytes = required,
                max_bytes,
                "dense bitset exceeds the memory ceiling; using the slower compressed bitset"
            );
        }
        Self::with_backend(kind, edges, excluded, max_id)
    }

    /// Builds the oracle with an explicit backend covering ids up to `max_id`.
    pub fn with_backend(
        kind: BackendKind,
        edges: &[Edge],
        excluded: &[Edge],
        max_id: u32,
    ) -> Result<Self, XswapError> {
        let live: Box<dyn EdgeSet> = match kind {
            BackendKind::Dense => Box::new(DenseEdgeSet::from_edges(edges, max_id)?),
            BackendKind::Compressed => Box::new(CompressedEdgeSet::from_edges(edges)?),
        };
        Ok(Self {
            live,
            excluded: CompressedEdgeSet::from_edges(excluded)?,
        })
    }

    /// Whether `edge` is currently present.
    pub fn contains(&self, edge: Edge) -> bool {
        self.live.contains(edge)
    }

    /// Whether the reverse of `edge` is currently present.
    pub fn contains_reverse(&self, edge: Edge) -> bool {
        self.live.contains(edge.reversed())
    }

    /// Whether `edge` belongs to the excluded set.
    pub fn is_excluded(&self, edge: Edge) -> bool {
        self.excluded.contains(edge)
    }

    /// Adds a live edge.
    pub fn insert(&mut self, edge: Edge) -> bool {
        self.live.insert(edge)
    }

    /// Removes a live edge.
    pub fn remove(&mut self, edge: Edge) -> bool {
        self.live.remove(edge)
    }

    /// Number of live edges.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Whether no live edges are stored.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Number of excluded edges.
    pub fn excluded_len(&self) -> usize {
        self.excluded.len()
    }

    /// Backend holding the live edges.
    pub fn backend(&self) -> BackendKind {
        self.live.kind()
    }

    /// Approximate footprint of the live and excluded sets.
    pub fn memory_bytes(&self) -> u64 {
        self.live.memory_bytes() + self.excluded.memory_bytes()
    }
}

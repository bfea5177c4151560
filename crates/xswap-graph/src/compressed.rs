use roaring::RoaringTreemap;
use xswap_core::errors::{ErrorInfo, XswapError};
use xswap_core::Edge;

use crate::codec;
use crate::oracle::{BackendKind, EdgeSet};

/// Roaring bitmap over 64-bit edge keys.
///
/// Slower per operation than [`crate::DenseEdgeSet`] but its footprint tracks
/// the number of stored edges instead of the id range.
#[derive(Debug, Clone, Default)]
pub struct CompressedEdgeSet {
    bitmap: RoaringTreemap,
}

impl CompressedEdgeSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from `edges`, ignoring repeated entries.
    pub fn from_edges(edges: &[Edge]) -> Result<Self, XswapError> {
        let mut keys: Vec<u64> = Vec::new();
        keys.try_reserve_exact(edges.len()).map_err(|err| {
            XswapError::ResourceExhausted(
                ErrorInfo::new("compressed-alloc", err.to_string())
                    .with_context("edges", edges.len().to_string()),
            )
        })?;
        keys.extend(edges.iter().map(|edge| codec::encode(*edge)));
        keys.sort_unstable();
        keys.dedup();
        let mut bitmap = RoaringTreemap::new();
        bitmap.extend(keys);
        Ok(Self { bitmap })
    }
}

impl EdgeSet for CompressedEdgeSet {
    fn contains(&self, edge: Edge) -> bool {
        self.bitmap.contains(codec::encode(edge))
    }

    fn insert(&mut self, edge: Edge) -> bool {
        self.bitmap.insert(codec::encode(edge))
    }

    fn remove(&mut self, edge: Edge) -> bool {
        self.bitmap.remove(codec::encode(edge))
    }

    fn len(&self) -> usize {
        self.bitmap.len() as usize
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Compressed
    }

    fn memory_bytes(&self) -> u64 {
        self.bitmap.serialized_size() as u64
    }
}

use bitvec::prelude::*;
use xswap_core::errors::{ErrorInfo, XswapError};
use xswap_core::Edge;

use crate::codec;
use crate::oracle::{BackendKind, EdgeSet};

const WORD_BITS: u64 = u64::BITS as u64;

/// Uncompressed bit array with one bit per possible edge key up to `max_id`.
///
/// Memory is fixed at construction and independent of how many edges are
/// stored, see [`DenseEdgeSet::required_bytes`].
#[derive(Debug, Clone)]
pub struct DenseEdgeSet {
    bits: BitVec<u64, Lsb0>,
    capacity: u64,
    len: usize,
}

impl DenseEdgeSet {
    /// Number of bytes needed to cover every key for ids up to `max_id`.
    pub fn required_bytes(max_id: u32) -> u64 {
        Self::word_count(max_id) * (WORD_BITS / 8)
    }

    /// Allocates an empty set covering every edge with endpoints `<= max_id`.
    pub fn with_max_id(max_id: u32) -> Result<Self, XswapError> {
        let capacity = codec::max_key(max_id) + 1;
        let words = usize::try_from(Self::word_count(max_id)).map_err(|_| {
            XswapError::ResourceExhausted(
                ErrorInfo::new("dense-alloc", "bitset exceeds the addressable memory range")
                    .with_context("max_id", max_id.to_string()),
            )
        })?;
        let mut storage: Vec<u64> = Vec::new();
        storage.try_reserve_exact(words).map_err(|err| {
            XswapError::ResourceExhausted(
                ErrorInfo::new("dense-alloc", err.to_string())
                    .with_context("max_id", max_id.to_string())
                    .with_context("bytes", Self::required_bytes(max_id).to_string())
                    .with_hint("lower max_bytes so the compressed backend is selected"),
            )
        })?;
        storage.resize(words, 0);
        Ok(Self {
            bits: BitVec::from_vec(storage),
            capacity,
            len: 0,
        })
    }

    /// Allocates the set and inserts every edge in `edges`.
    pub fn from_edges(edges: &[Edge], max_id: u32) -> Result<Self, XswapError> {
        let mut set = Self::with_max_id(max_id)?;
        for edge in edges {
            set.insert(*edge);
        }
        Ok(set)
    }

    fn word_count(max_id: u32) -> u64 {
        (codec::max_key(max_id) + 1).div_ceil(WORD_BITS)
    }

    fn slot(&self, edge: Edge) -> Option<usize> {
        let key = codec::encode(edge);
        (key < self.capacity).then_some(key as usize)
    }
}

impl EdgeSet for DenseEdgeSet {
    fn contains(&self, edge: Edge) -> bool {
        self.slot(edge)
            .and_then(|idx| self.bits.get(idx).map(|bit| *bit))
            .unwrap_or(false)
    }

    fn insert(&mut self, edge: Edge) -> bool {
        let Some(idx) = self.slot(edge) else {
            debug_assert!(false, "edge {edge} outside dense capacity");
            return false;
        };
        if self.bits[idx] {
            return false;
        }
        self.bits.set(idx, true);
        self.len += 1;
        true
    }

    fn remove(&mut self, edge: Edge) -> bool {
        let Some(idx) = self.slot(edge) else {
            return false;
        };
        if !self.bits[idx] {
            return false;
        }
        self.bits.set(idx, false);
        self.len -= 1;
        true
    }

    fn len(&self) -> usize {
        self.len
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Dense
    }

    fn memory_bytes(&self) -> u64 {
        (self.bits.as_raw_slice().len() as u64) * (WORD_BITS / 8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizing_covers_the_largest_key() {
        // max_key(3) = 24, so 25 bits fit into a single word.
        assert_eq!(DenseEdgeSet::required_bytes(3), 8);
        // max_key(10) = 220, 221 bits need four words.
        assert_eq!(DenseEdgeSet::required_bytes(10), 32);
        let set = DenseEdgeSet::with_max_id(10).unwrap();
        assert_eq!(set.memory_bytes(), 32);
        assert!(set.is_empty());
    }

    #[test]
    fn insert_and_remove_are_idempotent() {
        let mut set = DenseEdgeSet::with_max_id(4).unwrap();
        let edge = Edge::new(4, 1);
        assert!(set.insert(edge));
        assert!(!set.insert(edge));
        assert_eq!(set.len(), 1);
        assert!(set.contains(edge));
        assert!(!set.contains(edge.reversed()));
        assert!(set.remove(edge));
        assert!(!set.remove(edge));
        assert!(set.is_empty());
    }

    #[test]
    fn lookups_past_capacity_report_absent() {
        let set = DenseEdgeSet::from_edges(&[Edge::new(0, 1)], 1).unwrap();
        assert!(!set.contains(Edge::new(7, 7)));
    }
}

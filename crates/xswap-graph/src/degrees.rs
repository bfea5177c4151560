use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use xswap_core::Edge;

/// Per-node out- and in-degree counts of an edge list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeSequence {
    /// Number of edges leaving each node that has at least one.
    pub out_degree: BTreeMap<u32, usize>,
    /// Number of edges entering each node that has at least one.
    pub in_degree: BTreeMap<u32, usize>,
}

impl DegreeSequence {
    /// Counts degrees over `edges`.
    pub fn from_edges(edges: &[Edge]) -> Self {
        let mut degrees = Self::default();
        for edge in edges {
            *degrees.out_degree.entry(edge.source).or_insert(0) += 1;
            *degrees.in_degree.entry(edge.target).or_insert(0) += 1;
        }
        degrees
    }

    /// Out-degree of `node`, zero when absent.
    pub fn out_of(&self, node: u32) -> usize {
        self.out_degree.get(&node).copied().unwrap_or(0)
    }

    /// In-degree of `node`, zero when absent.
    pub fn in_of(&self, node: u32) -> usize {
        self.in_degree.get(&node).copied().unwrap_or(0)
    }

    /// Combined endpoint count (in + out) of `node`.
    pub fn total_of(&self, node: u32) -> usize {
        self.out_of(node) + self.in_of(node)
    }
}

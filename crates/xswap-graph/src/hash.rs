use sha2::{Digest, Sha256};
use xswap_core::Edge;

/// Computes an order-independent SHA-256 digest of an edge list.
pub fn canonical_edge_hash(edges: &[Edge]) -> String {
    let mut sorted = edges.to_vec();
    sorted.sort_unstable();

    let mut hasher = Sha256::new();
    hasher.update(b"xswap-edges:v1");
    hasher.update((sorted.len() as u64).to_le_bytes());
    for edge in sorted {
        hasher.update(edge.source.to_le_bytes());
        hasher.update(edge.target.to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}

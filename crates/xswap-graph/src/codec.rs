use xswap_core::{Edge, MAX_NODE_ID};

/// Encodes an edge as its Cantor pairing key.
///
/// The mapping is injective over all `u32` pairs and order sensitive, so
/// `(a, b)` and `(b, a)` land on different keys. For ids up to
/// [`MAX_NODE_ID`] the key stays below `2^63`.
pub fn encode(edge: Edge) -> u64 {
    let source = u64::from(edge.source);
    let target = u64::from(edge.target);
    let diagonal = source + target;
    diagonal * (diagonal + 1) / 2 + target
}

/// Inverse of [`encode`]. Returns `None` for keys whose endpoints fall outside the id range.
pub fn decode(key: u64) -> Option<Edge> {
    let z = u128::from(key);
    let diagonal = (isqrt(8 * z + 1) - 1) / 2;
    let base = diagonal * (diagonal + 1) / 2;
    let target = z - base;
    let source = diagonal - target;
    if source > u128::from(MAX_NODE_ID) || target > u128::from(MAX_NODE_ID) {
        return None;
    }
    Some(Edge::new(source as u32, target as u32))
}

/// Largest key produced by any edge whose endpoints are both `<= max_id`.
pub fn max_key(max_id: u32) -> u64 {
    encode(Edge::new(max_id, max_id))
}

fn isqrt(value: u128) -> u128 {
    let mut root = (value as f64).sqrt() as u128;
    while root * root > value {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= value {
        root += 1;
    }
    root
}

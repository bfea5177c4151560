use xswap_core::Edge;
use xswap_graph::{
    memory_estimate, select_backend, BackendKind, CompressedEdgeSet, DenseEdgeSet, EdgeSet,
    ExistenceOracle,
};
use proptest::prelude::*;

fn sample_edges() -> Vec<Edge> {
    vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 0), Edge::new(3, 3)]
}

#[test]
fn backend_follows_memory_ceiling() {
    let required = memory_estimate(3);
    assert_eq!(select_backend(3, required), BackendKind::Dense);
    assert_eq!(select_backend(3, required - 1), BackendKind::Compressed);
    assert_eq!(select_backend(3, 0), BackendKind::Compressed);
}

#[test]
fn estimate_grows_quadratically_with_id_range() {
    let small = memory_estimate(1_000);
    let large = memory_estimate(10_000);
    assert!(large > small * 90);
    assert!(large < small * 110);
}

#[test]
fn oracle_reports_selected_backend() {
    let edges = sample_edges();
    let dense = ExistenceOracle::build(&edges, &[], u64::MAX).unwrap();
    assert_eq!(dense.backend(), BackendKind::Dense);
    let compressed = ExistenceOracle::build(&edges, &[], 0).unwrap();
    assert_eq!(compressed.backend(), BackendKind::Compressed);
    assert_eq!(dense.len(), compressed.len());
}

#[test]
fn excluded_edges_are_tested_separately_from_live_edges() {
    let edges = sample_edges();
    let excluded = [Edge::new(0, 2), Edge::new(50, 60)];
    let oracle = ExistenceOracle::build(&edges, &excluded, u64::MAX).unwrap();
    assert_eq!(oracle.backend(), BackendKind::Dense);
    assert_eq!(oracle.excluded_len(), 2);
    assert!(oracle.is_excluded(Edge::new(0, 2)));
    assert!(oracle.is_excluded(Edge::new(50, 60)));
    assert!(!oracle.contains(Edge::new(0, 2)));
    assert!(!oracle.is_excluded(Edge::new(2, 0)));
}

#[test]
fn reverse_lookup_sees_antiparallel_edges() {
    let oracle = ExistenceOracle::build(&[Edge::new(5, 2)], &[], u64::MAX).unwrap();
    assert!(oracle.contains_reverse(Edge::new(2, 5)));
    assert!(!oracle.contains(Edge::new(2, 5)));
}

#[test]
fn empty_input_builds_a_tiny_dense_set() {
    let oracle = ExistenceOracle::build(&[], &[], 8).unwrap();
    assert_eq!(oracle.backend(), BackendKind::Dense);
    assert!(oracle.is_empty());
}

#[derive(Debug, Clone)]
enum Op {
    Insert(u32, u32),
    Remove(u32, u32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u32..16, 0u32..16).prop_map(|(s, t)| Op::Insert(s, t)),
        (0u32..16, 0u32..16).prop_map(|(s, t)| Op::Remove(s, t)),
    ]
}

proptest! {
    #[test]
    fn backends_agree_on_every_operation(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut dense = DenseEdgeSet::with_max_id(15).unwrap();
        let mut compressed = CompressedEdgeSet::new();
        for op in ops {
            match op {
                Op::Insert(s, t) => {
                    let edge = Edge::new(s, t);
                    prop_assert_eq!(dense.insert(edge), compressed.insert(edge));
                }
                Op::Remove(s, t) => {
                    let edge = Edge::new(s, t);
                    prop_assert_eq!(dense.remove(edge), compressed.remove(edge));
                }
            }
            prop_assert_eq!(dense.len(), compressed.len());
        }
        for s in 0..16 {
            for t in 0..16 {
                let edge = Edge::new(s, t);
                prop_assert_eq!(dense.contains(edge), compressed.contains(edge));
            }
        }
    }

    #[test]
    fn codec_decode_inverts_encode(source in 0u32..=xswap_core::MAX_NODE_ID, target in 0u32..=xswap_core::MAX_NODE_ID) {
        let edge = Edge::new(source, target);
        prop_assert_eq!(xswap_graph::decode(xswap_graph::encode(edge)), Some(edge));
    }
}

use std::collections::HashSet;

use proptest::prelude::*;
use xswap_core::Edge;
use xswap_graph::{BackendKind, DegreeSequence};
use xswap_perm::{permute, PermuteConfig};

fn edge_lists(max_id: u32, max_len: usize) -> impl Strategy<Value = Vec<Edge>> {
    prop::collection::btree_set((0..=max_id, 0..=max_id), 0..max_len)
        .prop_map(|pairs| pairs.into_iter().map(Edge::from).collect())
}

fn forward_edge_lists(max_id: u32, max_len: usize) -> impl Strategy<Value = Vec<Edge>> {
    edge_lists(max_id, max_len)
        .prop_map(|edges| edges.into_iter().filter(|e| e.source < e.target).collect())
}

fn configs() -> impl Strategy<Value = PermuteConfig> {
    (any::<bool>(), any::<bool>(), 0.0f64..6.0, any::<u64>()).prop_map(
        |(allow_self_loops, allow_antiparallel, swap_multiplier, seed)| PermuteConfig {
            allow_self_loops,
            allow_antiparallel,
            swap_multiplier,
            seed,
            ..PermuteConfig::default()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn degrees_and_length_are_preserved(edges in edge_lists(15, 40), config in configs()) {
        let result = permute(&edges, &[], &config).unwrap();
        prop_assert_eq!(result.edges.len(), edges.len());
        prop_assert_eq!(
            DegreeSequence::from_edges(&result.edges),
            DegreeSequence::from_edges(&edges)
        );
    }

    #[test]
    fn no_duplicates_are_introduced(edges in edge_lists(15, 40), config in configs()) {
        let result = permute(&edges, &[], &config).unwrap();
        let unique: HashSet<Edge> = result.edges.iter().copied().collect();
        prop_assert_eq!(unique.len(), result.edges.len());
    }

    #[test]
    fn forbidden_shapes_never_appear(edges in forward_edge_lists(12, 40), seed in any::<u64>()) {
        let config = PermuteConfig { seed, ..PermuteConfig::default() };
        let result = permute(&edges, &[], &config).unwrap();
        let present: HashSet<Edge> = result.edges.iter().copied().collect();
        for edge in &result.edges {
            prop_assert!(!edge.is_self_loop());
            prop_assert!(!present.contains(&edge.reversed()));
        }
    }

    #[test]
    fn runs_are_deterministic_and_leave_input_alone(edges in edge_lists(15, 40), config in configs()) {
        let before = edges.clone();
        let first = permute(&edges, &[], &config).unwrap();
        let second = permute(&edges, &[], &config).unwrap();
        prop_assert_eq!(&edges, &before);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn attempts_are_fully_accounted(edges in edge_lists(15, 40), config in configs()) {
        let result = permute(&edges, &[], &config).unwrap();
        let stats = &result.stats;
        let expected = (config.swap_multiplier * edges.len() as f64).floor() as u64;
        prop_assert_eq!(stats.swap_attempts, expected);
        prop_assert_eq!(
            stats.same_edge + stats.self_loop + stats.duplicate
                + stats.undirected_duplicate + stats.excluded + stats.accepted,
            stats.swap_attempts
        );
    }

    #[test]
    fn backends_agree(edges in edge_lists(15, 40), config in configs()) {
        let dense = permute(&edges, &[], &PermuteConfig { max_bytes: u64::MAX, ..config.clone() }).unwrap();
        let compressed = permute(&edges, &[], &PermuteConfig { max_bytes: 0, ..config }).unwrap();
        prop_assert_eq!(dense.backend, BackendKind::Dense);
        prop_assert_eq!(compressed.backend, BackendKind::Compressed);
        prop_assert_eq!(dense.edges, compressed.edges);
        prop_assert_eq!(dense.stats, compressed.stats);
    }

    #[test]
    fn excluded_edges_stay_out(edges in forward_edge_lists(10, 30), excluded in edge_lists(10, 20), seed in any::<u64>()) {
        let excluded: Vec<Edge> = excluded
            .into_iter()
            .filter(|edge| !edges.contains(edge))
            .collect();
        let config = PermuteConfig { seed, ..PermuteConfig::default() };
        let result = permute(&edges, &excluded, &config).unwrap();
        for edge in &excluded {
            prop_assert!(!result.edges.contains(edge));
        }
    }
}

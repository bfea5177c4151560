//! Validated entry point for a single permutation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use xswap_core::errors::{ErrorInfo, XswapError};
use xswap_core::{Edge, RngHandle};
use xswap_graph::{BackendKind, ExistenceOracle};

use crate::config::PermuteConfig;
use crate::engine::{SwapConditions, SwapEngine};
use crate::stats::SwapStats;

/// Outcome of one [`permute`] call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permutation {
    /// Permuted edges. Position `k` holds whatever edge ended up in slot `k`.
    pub edges: Vec<Edge>,
    /// Attempt counters for the run.
    pub stats: SwapStats,
    /// Backend chosen for the live edge set.
    pub backend: BackendKind,
}

/// Randomizes `edges` while preserving every node's in- and out-degree.
///
/// `excluded` lists edges that swaps may never create; it is not required to
/// be disjoint from `edges`. The caller's slices are left untouched. All input
/// validation happens before any oracle storage is allocated.
#[instrument(
    skip_all,
    fields(edges = edges.len(), excluded = excluded.len(), seed = config.seed)
)]
pub fn permute(
    edges: &[Edge],
    excluded: &[Edge],
    config: &PermuteConfig,
) -> Result<Permutation, XswapError> {
    let attempts = config.swap_attempts(edges.len())?;
    ensure_simple(edges)?;
    for edge in excluded {
        edge.validate()?;
    }

    let oracle = ExistenceOracle::build(edges, excluded, config.max_bytes)?;
    let mut engine = SwapEngine::new(
        edges.to_vec(),
        oracle,
        RngHandle::from_seed(config.seed),
        SwapConditions::from(config),
    );
    engine.run(attempts);
    let output = engine.into_output();

    info!(
        backend = output.backend.as_str(),
        swap_attempts = output.stats.swap_attempts,
        accepted = output.stats.accepted,
        same_edge = output.stats.same_edge,
        self_loop = output.stats.self_loop,
        duplicate = output.stats.duplicate,
        undirected_duplicate = output.stats.undirected_duplicate,
        excluded = output.stats.excluded,
        "permutation finished"
    );
    Ok(Permutation {
        edges: output.edges,
        stats: output.stats,
        backend: output.backend,
    })
}

/// Checks id ranges and rejects repeated `(source, target)` pairs.
pub(crate) fn ensure_simple(edges: &[Edge]) -> Result<(), XswapError> {
    let mut seen = HashSet::with_capacity(edges.len());
    for (position, edge) in edges.iter().enumerate() {
        edge.validate()?;
        if !seen.insert(*edge) {
            return Err(XswapError::Input(
                ErrorInfo::new("duplicate-edge", "edge list contains duplicate edges")
                    .with_context("edge", edge.to_string())
                    .with_context("position", position.to_string())
                    .with_hint("multigraphs are not supported; deduplicate the edge list"),
            ));
        }
    }
    Ok(())
}

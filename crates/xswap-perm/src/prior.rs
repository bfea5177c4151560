//! Edge priors estimated from many independent permutations of one network.

use std::collections::HashMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;
use xswap_core::errors::{ErrorInfo, XswapError};
use xswap_core::{permutation_seed, Edge};
use xswap_formats::{edges_to_matrix, SparseMatrix};

use crate::config::{PermuteConfig, PriorConfig};
use crate::driver::{ensure_simple, permute};

/// One node pair of the prior table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorRow {
    /// Row index of the pair.
    pub source_id: u32,
    /// Column index of the pair.
    pub target_id: u32,
    /// Whether the pair is connected in the unpermuted network.
    pub edge: bool,
    /// Row sum of the unpermuted (bi)adjacency matrix.
    pub source_degree: u64,
    /// Column sum of the unpermuted (bi)adjacency matrix.
    pub target_degree: u64,
    /// Fraction of permutations, pooled over pairs with the same degrees, containing the pair.
    pub xswap_prior: f64,
}

/// Counts, for every node pair, how many permutations contain it.
///
/// Permutation `i` uses seed `config.permute.seed + i` and runs on a pool of
/// `config.threads` workers. Each permuted network is mirrored across the
/// diagonal when antiparallel edges are disallowed. Counts are plain sums, so
/// the result does not depend on the thread count.
pub fn compute_occurrence_matrix(
    edges: &[Edge],
    shape: (usize, usize),
    config: &PriorConfig,
) -> Result<SparseMatrix, XswapError> {
    config.permute.validate()?;
    ensure_simple(edges)?;
    let mirror = !config.permute.allow_antiparallel;
    edges_to_matrix(edges, mirror, shape)?;

    info!(
        edges = edges.len(),
        n_permutations = config.n_permutations,
        threads = config.threads,
        "computing occurrence matrix"
    );
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads.max(1))
        .build()
        .map_err(|err| {
            XswapError::ResourceExhausted(
                ErrorInfo::new("thread-pool", err.to_string())
                    .with_context("threads", config.threads.to_string()),
            )
        })?;

    pool.install(|| {
        (0..config.n_permutations)
            .into_par_iter()
            .map(|index| {
                let run = PermuteConfig {
                    seed: permutation_seed(config.permute.seed, index),
                    ..config.permute.clone()
                };
                let permutation = permute(edges, &[], &run)?;
                edges_to_matrix(&permutation.edges, mirror, shape)
            })
            .try_reduce(
                || SparseMatrix::new(shape),
                |mut total, matrix| {
                    total.add_assign(&matrix)?;
                    Ok(total)
                },
            )
    })
}

/// Computes the XSwap prior of every node pair in row-major order.
///
/// Pairs sharing `(source_degree, target_degree)` pool their occurrence
/// counts, so each prior is the number of occurrences within the group over
/// `n_permutations` times the group size. With zero permutations every prior
/// is zero.
pub fn compute_priors(
    edges: &[Edge],
    shape: (usize, usize),
    config: &PriorConfig,
) -> Result<Vec<PriorRow>, XswapError> {
    let original = edges_to_matrix(edges, !config.permute.allow_antiparallel, shape)?;
    let source_degrees = original.row_sums();
    let target_degrees = original.col_sums();
    let occurrences = compute_occurrence_matrix(edges, shape, config)?;

    let mut group_occurrences: HashMap<(u64, u64), u64> = HashMap::new();
    for ((row, col), count) in occurrences.iter() {
        let key = (source_degrees[row as usize], target_degrees[col as usize]);
        *group_occurrences.entry(key).or_insert(0) += count;
    }
    let source_histogram = histogram(&source_degrees);
    let target_histogram = histogram(&target_degrees);

    let mut rows = Vec::with_capacity(shape.0 * shape.1);
    for (source, &source_degree) in source_degrees.iter().enumerate() {
        for (target, &target_degree) in target_degrees.iter().enumerate() {
            let key = (source_degree, target_degree);
            let group_size = source_histogram[&source_degree] * target_histogram[&target_degree];
            let trials = config.n_permutations as u64 * group_size;
            let hits = group_occurrences.get(&key).copied().unwrap_or(0);
            let xswap_prior = if trials == 0 {
                0.0
            } else {
                hits as f64 / trials as f64
            };
            rows.push(PriorRow {
                source_id: source as u32,
                target_id: target as u32,
                edge: original.get(source as u32, target as u32) != 0,
                source_degree,
                target_degree,
                xswap_prior,
            });
        }
    }
    info!(pairs = rows.len(), "priors computed");
    Ok(rows)
}

/// Closed-form prior assuming the swap chain has reached stationarity.
///
/// `s·t / (s·t + m − s − t + 1)` for source degree `s`, target degree `t` and
/// `m` edges. Accurate for some networks, not all.
pub fn approximate_xswap_prior(source_degree: f64, target_degree: f64, num_edges: f64) -> f64 {
    let product = source_degree * target_degree;
    product / (product + num_edges - source_degree - target_degree + 1.0)
}

fn histogram(degrees: &[u64]) -> HashMap<u64, u64> {
    let mut counts = HashMap::new();
    for &degree in degrees {
        *counts.entry(degree).or_insert(0) += 1;
    }
    counts
}

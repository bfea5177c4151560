use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use xswap_formats::{load_processed_edges, write_edges};
use xswap_graph::{canonical_edge_hash, BackendKind};
use xswap_perm::{permute, PermuteConfig, SwapStats};

use super::{write_json, SwapFlags};

#[derive(Args, Debug)]
pub struct PermuteArgs {
    /// Comma separated integer edge list.
    #[arg(long)]
    pub edges: PathBuf,
    /// Edges that swaps must never create, same format as `--edges`.
    #[arg(long)]
    pub excluded: Option<PathBuf>,
    /// Destination of the permuted edge list.
    #[arg(long)]
    pub out: PathBuf,
    /// Where to write the JSON run report; printed to stdout when omitted.
    #[arg(long)]
    pub report: Option<PathBuf>,
    #[command(flatten)]
    pub swap: SwapFlags,
}

#[derive(Debug, Serialize)]
struct PermuteReport {
    edges: usize,
    input_hash: String,
    output_hash: String,
    backend: BackendKind,
    acceptance_rate: f64,
    stats: SwapStats,
    config: PermuteConfig,
}

pub fn run(args: &PermuteArgs) -> Result<(), Box<dyn Error>> {
    let mut config = match &args.swap.config {
        Some(path) => PermuteConfig::load(path)?,
        None => PermuteConfig::default(),
    };
    args.swap.apply(&mut config);

    let edges = load_processed_edges(&args.edges)?;
    let excluded = match &args.excluded {
        Some(path) => load_processed_edges(path)?,
        None => Vec::new(),
    };
    let permutation = permute(&edges, &excluded, &config)?;
    write_edges(&args.out, &permutation.edges, b',')?;

    let report = PermuteReport {
        edges: edges.len(),
        input_hash: canonical_edge_hash(&edges),
        output_hash: canonical_edge_hash(&permutation.edges),
        backend: permutation.backend,
        acceptance_rate: permutation.stats.acceptance_rate(),
        stats: permutation.stats,
        config,
    };
    write_json(args.report.as_deref(), &report)
}

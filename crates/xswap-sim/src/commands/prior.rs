use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use tracing::info;
use xswap_core::Edge;
use xswap_formats::load_processed_edges;
use xswap_perm::{compute_priors, PriorConfig};

use super::SwapFlags;

#[derive(Args, Debug)]
pub struct PriorArgs {
    /// Comma separated integer edge list.
    #[arg(long)]
    pub edges: PathBuf,
    /// Destination CSV with one row per node pair.
    #[arg(long)]
    pub out: PathBuf,
    /// Number of permuted networks.
    #[arg(long)]
    pub permutations: Option<usize>,
    /// Worker threads running permutations.
    #[arg(long)]
    pub threads: Option<usize>,
    /// Treat sources and targets as separate node sets (rectangular matrix).
    #[arg(long)]
    pub bipartite: bool,
    #[command(flatten)]
    pub swap: SwapFlags,
}

pub fn run(args: &PriorArgs) -> Result<(), Box<dyn Error>> {
    let mut config = match &args.swap.config {
        Some(path) => PriorConfig::load(path)?,
        None => PriorConfig::default(),
    };
    args.swap.apply(&mut config.permute);
    if let Some(permutations) = args.permutations {
        config.n_permutations = permutations;
    }
    if let Some(threads) = args.threads {
        config.threads = threads;
    }

    let edges = load_processed_edges(&args.edges)?;
    let shape = matrix_shape(&edges, args.bipartite);
    let rows = compute_priors(&edges, shape, &config)?;

    let mut writer = csv::Writer::from_path(&args.out)?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    info!(rows = rows.len(), out = %args.out.display(), "wrote priors");
    Ok(())
}

/// Smallest matrix holding every edge: square unless bipartite.
fn matrix_shape(edges: &[Edge], bipartite: bool) -> (usize, usize) {
    let rows = edges.iter().map(|e| e.source as usize + 1).max().unwrap_or(0);
    let cols = edges.iter().map(|e| e.target as usize + 1).max().unwrap_or(0);
    if bipartite {
        (rows, cols)
    } else {
        let side = rows.max(cols);
        (side, side)
    }
}

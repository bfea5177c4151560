pub mod map;
pub mod permute;
pub mod prior;

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;
use xswap_perm::PermuteConfig;

/// Swap settings shared by `permute` and `prior`.
#[derive(Args, Debug, Default)]
pub struct SwapFlags {
    /// YAML file with swap settings; the flags below take precedence.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Seed of the (first) permutation.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Swap attempts per edge.
    #[arg(long = "multiplier")]
    pub swap_multiplier: Option<f64>,
    /// Permit swaps that create self-loops.
    #[arg(long)]
    pub allow_self_loops: bool,
    /// Permit swaps that create antiparallel edge pairs.
    #[arg(long)]
    pub allow_antiparallel: bool,
    /// Memory ceiling for the dense edge bitset, in bytes.
    #[arg(long)]
    pub max_bytes: Option<u64>,
}

impl SwapFlags {
    fn apply(&self, config: &mut PermuteConfig) {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(multiplier) = self.swap_multiplier {
            config.swap_multiplier = multiplier;
        }
        if let Some(max_bytes) = self.max_bytes {
            config.max_bytes = max_bytes;
        }
        config.allow_self_loops |= self.allow_self_loops;
        config.allow_antiparallel |= self.allow_antiparallel;
    }
}

fn write_json<T: Serialize>(path: Option<&Path>, value: &T) -> Result<(), Box<dyn Error>> {
    let mut body = serde_json::to_string_pretty(value)?;
    body.push('\n');
    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, body)?;
        }
        None => print!("{body}"),
    }
    Ok(())
}

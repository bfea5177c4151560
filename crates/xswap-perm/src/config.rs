//! Run configuration, loadable from YAML.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use xswap_core::errors::{ErrorInfo, XswapError};

/// Immutable parameters for a single permutation call.
///
/// A fresh value is built per call; nothing here is shared between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermuteConfig {
    /// Whether edges like `(0, 0)` may be created.
    #[serde(default)]
    pub allow_self_loops: bool,
    /// Whether `(a, b)` and `(b, a)` may coexist.
    #[serde(default)]
    pub allow_antiparallel: bool,
    /// Swap attempts per input edge; the product is rounded down.
    #[serde(default = "default_swap_multiplier")]
    pub swap_multiplier: f64,
    /// Seed for the index generator.
    #[serde(default)]
    pub seed: u64,
    /// Memory ceiling for the dense edge bitset, in bytes.
    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,
}

fn default_swap_multiplier() -> f64 {
    10.0
}

fn default_max_bytes() -> u64 {
    4_000_000_000
}

impl Default for PermuteConfig {
    fn default() -> Self {
        Self {
            allow_self_loops: false,
            allow_antiparallel: false,
            swap_multiplier: default_swap_multiplier(),
            seed: 0,
            max_bytes: default_max_bytes(),
        }
    }
}

impl PermuteConfig {
    /// Checks that the multiplier is a finite, non-negative number.
    pub fn validate(&self) -> Result<(), XswapError> {
        if !self.swap_multiplier.is_finite() || self.swap_multiplier < 0.0 {
            return Err(XswapError::Input(
                ErrorInfo::new("invalid-multiplier", "swap multiplier must be finite and >= 0")
                    .with_context("swap_multiplier", self.swap_multiplier.to_string()),
            ));
        }
        Ok(())
    }

    /// Number of swap attempts for an edge list of `num_edges` edges.
    pub fn swap_attempts(&self, num_edges: usize) -> Result<u64, XswapError> {
        self.validate()?;
        Ok((self.swap_multiplier * num_edges as f64).floor() as u64)
    }

    /// Parses a YAML document, filling omitted fields with defaults.
    pub fn from_yaml_str(text: &str) -> Result<Self, XswapError> {
        parse_yaml(text)
    }

    /// Loads a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self, XswapError> {
        load_yaml(path)
    }
}

/// Parameters for estimating edge priors over many permutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorConfig {
    /// Settings shared by every permutation; `seed` is the first seed of the batch.
    #[serde(flatten)]
    pub permute: PermuteConfig,
    /// Number of permuted networks to generate.
    #[serde(default = "default_permutations")]
    pub n_permutations: usize,
    /// Worker threads used to run permutations (1 runs them sequentially).
    #[serde(default = "default_threads")]
    pub threads: usize,
}

fn default_permutations() -> usize {
    1000
}

fn default_threads() -> usize {
    1
}

impl Default for PriorConfig {
    fn default() -> Self {
        Self {
            permute: PermuteConfig::default(),
            n_permutations: default_permutations(),
            threads: default_threads(),
        }
    }
}

impl PriorConfig {
    /// Parses a YAML document, filling omitted fields with defaults.
    pub fn from_yaml_str(text: &str) -> Result<Self, XswapError> {
        parse_yaml(text)
    }

    /// Loads a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self, XswapError> {
        load_yaml(path)
    }
}

fn parse_yaml<T: for<'de> Deserialize<'de>>(text: &str) -> Result<T, XswapError> {
    serde_yaml::from_str(text)
        .map_err(|err| XswapError::Serde(ErrorInfo::new("config-parse", err.to_string())))
}

fn load_yaml<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, XswapError> {
    let text = fs::read_to_string(path).map_err(|err| {
        XswapError::Io(
            ErrorInfo::new("config-read", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    parse_yaml(&text)
}

//! The swap loop: draws edge pairs, validates the rewired candidates against
//! the existence oracle and applies accepted swaps in place.

use serde::{Deserialize, Serialize};
use tracing::debug;
use xswap_core::{Edge, RngHandle};
use xswap_graph::{BackendKind, ExistenceOracle};

use crate::config::PermuteConfig;
use crate::stats::{AttemptOutcome, RejectReason, SwapStats};

/// Lifecycle of a [`SwapEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EngineState {
    /// Constructed, no attempt made yet.
    Idle,
    /// At least one attempt made, budget not yet closed.
    Running,
    /// Budget exhausted; further steps are refused.
    Done,
}

/// Which edge shapes a swap is allowed to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwapConditions {
    /// Permit `(a, a)`.
    pub allow_self_loops: bool,
    /// Permit `(a, b)` alongside `(b, a)`.
    pub allow_antiparallel: bool,
}

impl From<&PermuteConfig> for SwapConditions {
    fn from(config: &PermuteConfig) -> Self {
        Self {
            allow_self_loops: config.allow_self_loops,
            allow_antiparallel: config.allow_antiparallel,
        }
    }
}

/// Final state handed back once the engine is consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineOutput {
    /// Edge list after every accepted swap.
    pub edges: Vec<Edge>,
    /// Attempt counters.
    pub stats: SwapStats,
    /// Backend that held the live edges.
    pub backend: BackendKind,
}

/// Single-threaded swap engine owning one run's edges, oracle and RNG.
#[derive(Debug)]
pub struct SwapEngine {
    edges: Vec<Edge>,
    oracle: ExistenceOracle,
    rng: RngHandle,
    conditions: SwapConditions,
    stats: SwapStats,
    state: EngineState,
}

impl SwapEngine {
    /// Creates an idle engine. `oracle` must hold exactly the edges in `edges`.
    pub fn new(
        edges: Vec<Edge>,
        oracle: ExistenceOracle,
        rng: RngHandle,
        conditions: SwapConditions,
    ) -> Self {
        Self {
            edges,
            oracle,
            rng,
            conditions,
            stats: SwapStats::default(),
            state: EngineState::Idle,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> &SwapStats {
        &self.stats
    }

    /// Current edge list.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Performs one swap attempt. Returns `None` once the engine is done.
    ///
    /// Lists with fewer than two edges cannot swap; their attempts are
    /// counted as `same_edge` without drawing.
    pub fn step(&mut self) -> Option<AttemptOutcome> {
        if self.state == EngineState::Done {
            return None;
        }
        self.state = EngineState::Running;
        let outcome = self.attempt();
        self.stats.record(outcome);
        Some(outcome)
    }

    /// Runs `attempts` swap attempts and closes the engine.
    pub fn run(&mut self, attempts: u64) -> &SwapStats {
        for _ in 0..attempts {
            if self.step().is_none() {
                break;
            }
        }
        self.state = EngineState::Done;
        debug!(
            attempts = self.stats.swap_attempts,
            accepted = self.stats.accepted,
            "swap budget exhausted"
        );
        &self.stats
    }

    /// Consumes the engine, returning the permuted edges and counters.
    pub fn into_output(self) -> EngineOutput {
        EngineOutput {
            backend: self.oracle.backend(),
            edges: self.edges,
            stats: self.stats,
        }
    }

    fn attempt(&mut self) -> AttemptOutcome {
        if self.edges.len() < 2 {
            return AttemptOutcome::Rejected(RejectReason::SameEdge);
        }
        let i = self.rng.index(self.edges.len());
        let j = self.rng.index(self.edges.len());
        if i == j {
            return AttemptOutcome::Rejected(RejectReason::SameEdge);
        }

        let first = self.edges[i];
        let second = self.edges[j];
        let new_first = Edge::new(first.source, second.target);
        let new_second = Edge::new(second.source, first.target);

        if let Some(reason) = self.reject_candidate(new_first) {
            return AttemptOutcome::Rejected(reason);
        }
        if let Some(reason) = self.reject_candidate(new_second) {
            return AttemptOutcome::Rejected(reason);
        }
        // Two self-loops swapping into (a, b) and (b, a).
        if !self.conditions.allow_antiparallel && new_second == new_first.reversed() {
            return AttemptOutcome::Rejected(RejectReason::UndirectedDuplicate);
        }

        self.oracle.remove(first);
        self.oracle.remove(second);
        self.oracle.insert(new_first);
        self.oracle.insert(new_second);
        self.edges[i] = new_first;
        self.edges[j] = new_second;
        AttemptOutcome::Accepted
    }

    fn reject_candidate(&self, candidate: Edge) -> Option<RejectReason> {
        if !self.conditions.allow_self_loops && candidate.is_self_loop() {
            return Some(RejectReason::SelfLoop);
        }
        if self.oracle.contains(candidate) {
            return Some(RejectReason::Duplicate);
        }
        if !self.conditions.allow_antiparallel && self.oracle.contains_reverse(candidate) {
            return Some(RejectReason::UndirectedDuplicate);
        }
        if self.oracle.is_excluded(candidate) {
            return Some(RejectReason::Excluded);
        }
        None
    }
}

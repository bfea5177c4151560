//! Swap attempt counters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Why a swap attempt was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Both draws picked the same edge index.
    SameEdge,
    /// A candidate was a self-loop while self-loops are disallowed.
    SelfLoop,
    /// A candidate already exists.
    Duplicate,
    /// A candidate's reverse exists (or would be created) while antiparallel edges are disallowed.
    UndirectedDuplicate,
    /// A candidate belongs to the excluded set.
    Excluded,
}

impl RejectReason {
    /// Stable label used in logs and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::SameEdge => "same_edge",
            RejectReason::SelfLoop => "self_loop",
            RejectReason::Duplicate => "duplicate",
            RejectReason::UndirectedDuplicate => "undirected_duplicate",
            RejectReason::Excluded => "excluded",
        }
    }
}

/// Result of a single swap attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Both edges were rewired.
    Accepted,
    /// The edge list was left untouched.
    Rejected(RejectReason),
}

/// Counters describing one permutation run.
///
/// Every attempt lands in exactly one of the outcome counters, so the sum of
/// the rejections plus `accepted` equals `swap_attempts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapStats {
    /// Attempts performed.
    pub swap_attempts: u64,
    /// Attempts that drew the same index twice.
    pub same_edge: u64,
    /// Attempts rejected for creating a self-loop.
    pub self_loop: u64,
    /// Attempts rejected for creating an existing edge.
    pub duplicate: u64,
    /// Attempts rejected for creating an antiparallel pair.
    #[serde(alias = "undir_duplicate")]
    pub undirected_duplicate: u64,
    /// Attempts rejected for creating an excluded edge.
    pub excluded: u64,
    /// Attempts that rewired two edges.
    pub accepted: u64,
}

impl SwapStats {
    /// Counts one attempt with the given outcome.
    pub fn record(&mut self, outcome: AttemptOutcome) {
        self.swap_attempts += 1;
        match outcome {
            AttemptOutcome::Accepted => self.accepted += 1,
            AttemptOutcome::Rejected(RejectReason::SameEdge) => self.same_edge += 1,
            AttemptOutcome::Rejected(RejectReason::SelfLoop) => self.self_loop += 1,
            AttemptOutcome::Rejected(RejectReason::Duplicate) => self.duplicate += 1,
            AttemptOutcome::Rejected(RejectReason::UndirectedDuplicate) => {
                self.undirected_duplicate += 1
            }
            AttemptOutcome::Rejected(RejectReason::Excluded) => self.excluded += 1,
        }
    }

    /// Total rejected attempts.
    pub fn rejected(&self) -> u64 {
        self.same_edge + self.self_loop + self.duplicate + self.undirected_duplicate + self.excluded
    }

    /// Fraction of attempts that were accepted; zero when nothing was attempted.
    pub fn acceptance_rate(&self) -> f64 {
        if self.swap_attempts == 0 {
            0.0
        } else {
            self.accepted as f64 / self.swap_attempts as f64
        }
    }

    /// Counters keyed by name, in a stable order.
    pub fn as_map(&self) -> BTreeMap<&'static str, u64> {
        BTreeMap::from([
            ("swap_attempts", self.swap_attempts),
            ("same_edge", self.same_edge),
            ("self_loop", self.self_loop),
            ("duplicate", self.duplicate),
            ("undirected_duplicate", self.undirected_duplicate),
            ("excluded", self.excluded),
            ("accepted", self.accepted),
        ])
    }
}

//! `SearchGraph`: expansion-event audit log.
//!
//! The normative decision surface is the ordered list of [`ExpandEvent`]
//! entries: which node was selected, with what novelty, and what happened to
//! every candidate it produced. Two runs on the same world and policy must
//! produce byte-identical graphs.

use crawler_kernel::carrier::position::Position;
use crawler_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_SEARCH_GRAPH};
use serde::Serialize;

use crate::novelty::Novelty;

/// The complete search audit trail.
#[derive(Debug, Clone, Serialize)]
pub struct SearchGraph {
    /// Ordered expansion events.
    pub expansions: Vec<ExpandEvent>,
    /// Aggregate metadata.
    pub metadata: SearchGraphMetadata,
}

/// A single selection + expansion event.
#[derive(Debug, Clone, Serialize)]
pub struct ExpandEvent {
    /// 1-based position in the selection sequence.
    pub expansion_order: u64,
    pub node_id: u64,
    pub parent_id: Option<u64>,
    pub state_fingerprint: String,
    pub head: Position,
    pub depth: u32,
    pub path_cost: u64,
    /// Novelty the node had when it was selected.
    pub novelty: Novelty,
    /// Frontier size at selection time (including the selected node).
    pub frontier_size: u64,
    /// True if the selected node satisfied the goal; no candidates then.
    pub is_goal: bool,
    /// Ordered candidate decision log.
    pub candidates: Vec<CandidateRecord>,
    /// Nodes dropped when the working set was bounded to capacity.
    pub pruned_node_ids: Vec<u64>,
}

/// One candidate child and its fate.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateRecord {
    /// Index in the world's move order.
    pub index: u64,
    #[serde(rename = "move")]
    pub move_label: String,
    pub outcome: CandidateOutcome,
}

/// Outcome of processing a candidate during expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum CandidateOutcome {
    /// Entered the working set as a new node.
    Admitted { to_node: u64 },
    /// State was already expanded.
    DuplicateExplored { fingerprint: String },
    /// State is already held by another frontier member (first path wins).
    DuplicateFrontier { fingerprint: String },
    /// An earlier sibling in this expansion already reached the state.
    DuplicateSibling { fingerprint: String },
}

impl CandidateOutcome {
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        !matches!(self, Self::Admitted { .. })
    }
}

/// Aggregate metadata.
#[derive(Debug, Clone, Serialize)]
pub struct SearchGraphMetadata {
    pub world_id: String,
    pub root_state_fingerprint: String,
    pub capacity: u64,
    pub max_expansions: Option<u64>,

    pub total_expansions: u64,
    pub total_candidates_generated: u64,
    pub total_duplicates_suppressed: u64,
    pub total_pruned: u64,
    pub frontier_high_water: u64,
    pub termination_reason: TerminationReason,
}

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum TerminationReason {
    /// The selected node satisfied the goal.
    GoalReached { node_id: u64 },
    /// The frontier emptied without a goal. Not a proof that none exists.
    FrontierExhausted,
    /// The policy's `max_expansions` budget was hit.
    ExpansionBudgetExceeded,
}

impl SearchGraph {
    /// Serialize to JSON bytes.
    ///
    /// Field order is fixed by declaration order and every number is an
    /// integer, so equal graphs always serialize to equal bytes.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Content hash of [`Self::to_json_bytes`].
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, serde_json::Error> {
        Ok(canonical_hash(DOMAIN_SEARCH_GRAPH, &self.to_json_bytes()?))
    }
}

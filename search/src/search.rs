//! Search entry point and expansion loop.
//!
//! # Loop
//!
//! 1. Empty frontier: stop with `FrontierExhausted`.
//! 2. Select the most novel entry (see [`crate::frontier`] for the order).
//! 3. Count the expansion.
//! 4. Goal: stop with `GoalReached`.
//! 5. Mark the state explored.
//! 6. Expand it.
//! 7. Drop children whose state is explored, held by the frontier, or
//!    reached by an earlier sibling (first path wins).
//! 8. Remove the selected entry.
//! 9. Merge and bound the working set to capacity.
//! 10. Recompute novelty; repeat.
//!
//! All state is committed at iteration boundaries, so a host budget
//! (`max_expansions`) can stop the loop between iterations.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use tracing::{debug, info, trace};

use crate::contract::SearchWorld;
use crate::error::SearchError;
use crate::frontier::NoveltyFrontier;
use crate::graph::{
    CandidateOutcome, CandidateRecord, ExpandEvent, SearchGraph, SearchGraphMetadata,
    TerminationReason,
};
use crate::node::SearchNode;
use crate::policy::SearchPolicy;

/// Result of a search execution.
///
/// Always contains the complete audit trail. `goal_node == None` is the
/// explicit "no solution found" outcome.
#[derive(Debug)]
pub struct SearchResult<S, M> {
    /// The goal node (if found). Its path is recoverable via parent links.
    pub goal_node: Option<Arc<SearchNode<S, M>>>,
    /// Number of nodes selected from the frontier, including the goal node.
    pub expansions: u64,
    pub graph: SearchGraph,
}

impl<S, M: Copy> SearchResult<S, M> {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(
            self.graph.metadata.termination_reason,
            TerminationReason::GoalReached { .. }
        )
    }

    #[must_use]
    pub fn termination_reason(&self) -> TerminationReason {
        self.graph.metadata.termination_reason
    }

    /// Moves from the root to the goal, if one was found.
    #[must_use]
    pub fn path(&self) -> Option<Vec<M>> {
        self.goal_node.as_ref().map(|n| n.path())
    }
}

#[derive(Default)]
struct Counters {
    candidates_generated: u64,
    duplicates_suppressed: u64,
    pruned: u64,
}

/// Run bounded-frontier novelty search.
///
/// # Errors
///
/// - [`SearchError::InvalidCapacity`] if `policy.capacity` is zero (checked
///   before any step is taken).
/// - [`SearchError::IllegalTransition`] if the world rejects a move it
///   enumerated itself.
pub fn search<W: SearchWorld>(
    world: &W,
    policy: &SearchPolicy,
) -> Result<SearchResult<W::State, W::Move>, SearchError> {
    policy.validate()?;

    let root_state = world.root_state();
    let root_fingerprint = world.fingerprint(&root_state);
    let root_head = world.head(&root_state);
    let root = Arc::new(SearchNode::root(0, root_state, root_head));
    let mut next_node_id: u64 = 1;

    let mut frontier = NoveltyFrontier::with_root(root, policy.capacity);
    let mut explored: FxHashSet<W::State> = FxHashSet::default();
    let mut events: Vec<ExpandEvent> = Vec::new();
    let mut counters = Counters::default();
    let mut expansions: u64 = 0;
    let mut goal_node = None;

    debug!(
        world_id = world.world_id(),
        capacity = policy.capacity,
        root = %root_fingerprint,
        "search started"
    );

    let termination_reason = loop {
        if frontier.is_empty() {
            break TerminationReason::FrontierExhausted;
        }
        if policy.max_expansions.is_some_and(|limit| expansions >= limit) {
            break TerminationReason::ExpansionBudgetExceeded;
        }

        let frontier_size = frontier.len() as u64;
        let Some(selected) = frontier.pop_most_novel() else {
            break TerminationReason::FrontierExhausted;
        };
        expansions += 1;

        let node = selected.node;
        let fingerprint = world.fingerprint(&node.state);
        debug!(
            expansion = expansions,
            node_id = node.node_id,
            head = %node.head,
            novelty = selected.novelty.as_f64(),
            frontier_size,
            "selected"
        );

        let mut event = ExpandEvent {
            expansion_order: expansions,
            node_id: node.node_id,
            parent_id: node.parent_id(),
            state_fingerprint: fingerprint.as_str().to_string(),
            head: node.head,
            depth: node.depth,
            path_cost: node.path_cost,
            novelty: selected.novelty,
            frontier_size,
            is_goal: false,
            candidates: Vec::new(),
            pruned_node_ids: Vec::new(),
        };

        if world.is_goal(&node.state) {
            event.is_goal = true;
            events.push(event);
            let node_id = node.node_id;
            goal_node = Some(node);
            break TerminationReason::GoalReached { node_id };
        }

        explored.insert(node.state.clone());

        let children = node
            .expand(world, &mut next_node_id)
            .map_err(|(mv, e)| SearchError::IllegalTransition {
                node_id: node.node_id,
                mv: mv.to_string(),
                detail: e.to_string(),
            })?;
        counters.candidates_generated += children.len() as u64;

        let mut admitted = Vec::with_capacity(children.len());
        let mut admitted_states: FxHashSet<W::State> = FxHashSet::default();
        for (index, (mv, child)) in children.into_iter().enumerate() {
            let outcome = if explored.contains(&child.state) {
                CandidateOutcome::DuplicateExplored {
                    fingerprint: world.fingerprint(&child.state).as_str().to_string(),
                }
            } else if frontier.contains_state(&child.state) {
                CandidateOutcome::DuplicateFrontier {
                    fingerprint: world.fingerprint(&child.state).as_str().to_string(),
                }
            } else if !admitted_states.insert(child.state.clone()) {
                CandidateOutcome::DuplicateSibling {
                    fingerprint: world.fingerprint(&child.state).as_str().to_string(),
                }
            } else {
                CandidateOutcome::Admitted {
                    to_node: child.node_id,
                }
            };
            trace!(node_id = node.node_id, %mv, ?outcome, "candidate");

            if outcome.is_duplicate() {
                counters.duplicates_suppressed += 1;
            } else {
                admitted.push(child);
            }
            event.candidates.push(CandidateRecord {
                index: index as u64,
                move_label: mv.to_string(),
                outcome,
            });
        }

        event.pruned_node_ids = frontier.admit(admitted);
        counters.pruned += event.pruned_node_ids.len() as u64;
        if !event.pruned_node_ids.is_empty() {
            debug!(
                pruned = event.pruned_node_ids.len(),
                capacity = policy.capacity,
                "working set bounded"
            );
        }
        events.push(event);
    };

    info!(
        world_id = world.world_id(),
        ?termination_reason,
        expansions,
        explored = explored.len(),
        duplicates = counters.duplicates_suppressed,
        pruned = counters.pruned,
        "search finished"
    );

    let graph = SearchGraph {
        expansions: events,
        metadata: SearchGraphMetadata {
            world_id: world.world_id().to_string(),
            root_state_fingerprint: root_fingerprint.as_str().to_string(),
            capacity: policy.capacity as u64,
            max_expansions: policy.max_expansions,
            total_expansions: expansions,
            total_candidates_generated: counters.candidates_generated,
            total_duplicates_suppressed: counters.duplicates_suppressed,
            total_pruned: counters.pruned,
            frontier_high_water: frontier.high_water(),
            termination_reason,
        },
    };

    Ok(SearchResult {
        goal_node,
        expansions,
        graph,
    })
}

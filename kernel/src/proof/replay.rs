//! `execute()`: deterministic replay of a move sequence.
//!
//! Replay applies moves one at a time through [`CrawlerRules::apply`],
//! accumulating step costs, and stops as soon as the goal is reached. It is
//! side-effect free and is the reference used to verify search results: the
//! path recovered from a goal node must replay to exactly that node's state
//! and cost.

use crate::carrier::state::CrawlerState;
use crate::operators::moves::Move;
use crate::operators::rules::{ApplyFailure, CrawlerRules};

/// Final configuration of a replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayOutcome {
    pub state: CrawlerState,
    /// Accumulated path cost of the applied moves.
    pub cost: u64,
    pub goal_reached: bool,
    /// Number of moves actually applied (less than the input length when the
    /// goal was reached early).
    pub steps_applied: usize,
}

/// Error during replay: a move in the sequence was illegal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("replay diverged at step {step_index}: {failure}")]
pub struct ReplayError {
    pub step_index: usize,
    #[source]
    pub failure: ApplyFailure,
}

/// Replay `moves` from `start`.
///
/// A start state that already satisfies the goal applies nothing.
///
/// # Errors
///
/// Returns [`ReplayError`] for the first illegal move.
pub fn execute(
    rules: &CrawlerRules,
    start: &CrawlerState,
    moves: &[Move],
) -> Result<ReplayOutcome, ReplayError> {
    let mut state = start.clone();
    let mut cost = 0u64;
    let mut goal_reached = rules.is_goal(&state);
    let mut steps_applied = 0usize;

    for (step_index, &mv) in moves.iter().enumerate() {
        if goal_reached {
            break;
        }
        state = rules
            .apply(&state, mv)
            .map_err(|failure| ReplayError {
                step_index,
                failure,
            })?;
        cost += rules.step_cost(mv);
        steps_applied += 1;
        goal_reached = rules.is_goal(&state);
    }

    Ok(ReplayOutcome {
        state,
        cost,
        goal_reached,
        steps_applied,
    })
}

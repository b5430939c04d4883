//! Step costs and goal-distance heuristics.
//!
//! Costs are integers so cumulative path cost is exact and reproducible.
//! Every edge cost is positive, so path cost is strictly increasing along a
//! path.
//!
//! The heuristics are not used by the novelty search; they are provided for
//! cost-aware search variants and for diagnostics.

use crate::carrier::position::Position;
use crate::operators::moves::Move;

/// Cost of climbing one cell.
pub const COST_UP: u64 = 3;
/// Cost of dropping one cell.
pub const COST_DOWN: u64 = 1;
/// Cost of one sideways step.
pub const COST_SIDEWAYS: u64 = 2;

/// Incremental edge cost of a move.
#[must_use]
pub const fn step_cost(mv: Move) -> u64 {
    match mv {
        Move::Up => COST_UP,
        Move::Down => COST_DOWN,
        Move::Left | Move::Right => COST_SIDEWAYS,
    }
}

/// Manhattan distance from `head` to `goal`. Zero exactly at the goal.
#[must_use]
pub fn manhattan(head: Position, goal: Position) -> u64 {
    head.manhattan(goal)
}

/// Manhattan distance weighted by the true per-step costs.
///
/// Horizontal distance is weighted by [`COST_SIDEWAYS`]; the vertical part
/// costs [`COST_UP`] per cell when the goal lies above the head and
/// [`COST_DOWN`] per cell when it lies below. Zero exactly at the goal.
#[must_use]
pub fn weighted_cost(head: Position, goal: Position) -> u64 {
    let horizontal = u64::from(head.x.abs_diff(goal.x)) * COST_SIDEWAYS;
    let rise = u64::from(head.y.abs_diff(goal.y));
    let vertical = if goal.y > head.y {
        rise * COST_UP
    } else {
        rise * COST_DOWN
    };
    horizontal + vertical
}

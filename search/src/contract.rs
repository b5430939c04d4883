//! Search world contract trait.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use crawler_kernel::carrier::position::Position;
use crawler_kernel::proof::hash::ContentHash;

/// Trait for worlds that support novelty search.
///
/// # Contract
///
/// - `enumerate_moves` must be deterministic: same state → same moves in the
///   same order.
/// - `apply_move` is only ever called with a move returned by
///   `enumerate_moves` for the same state; a failure is a world bug and
///   aborts the search.
/// - `Eq`/`Hash` on `State` is the identity used for deduplication and must
///   not depend on any incidental ordering inside the state.
/// - `head` is the only part of a state the novelty metric looks at.
pub trait SearchWorld {
    type State: Clone + Eq + Hash + Debug;
    type Move: Copy + Eq + Debug + Display;
    type Error: std::error::Error;

    /// Unique world identifier, echoed into the search graph.
    fn world_id(&self) -> &str;

    /// The state the search starts from.
    fn root_state(&self) -> Self::State;

    /// Legal moves from `state`, in canonical order.
    fn enumerate_moves(&self, state: &Self::State) -> Vec<Self::Move>;

    /// Successor of `state` under `mv`.
    ///
    /// # Errors
    ///
    /// Returns the world's error if `mv` is not legal from `state`.
    fn apply_move(&self, state: &Self::State, mv: Self::Move) -> Result<Self::State, Self::Error>;

    /// Positive edge cost of `mv`.
    fn step_cost(&self, mv: Self::Move) -> u64;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// Head position used by the novelty metric and the selection tie-break.
    fn head(&self, state: &Self::State) -> Position;

    /// Content-addressed fingerprint recorded in the search graph.
    fn fingerprint(&self, state: &Self::State) -> ContentHash;
}

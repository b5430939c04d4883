//! `CrawlerRules`: legality and transition for crawler moves.
//!
//! # Legality (evaluated in priority order)
//!
//! 1. **Forced fall.** If the cell below the head is free, `Down` is the only
//!    legal move.
//! 2. Otherwise, independently:
//!    - `Up` iff the cell above is free and `stamina < max_stamina`.
//!    - `Left` / `Right` iff the target is free and either `stamina == 0` or
//!      the target is supported.
//!
//! A cell is *free* if it is neither a wall nor a trail cell; cells outside
//! the grid count as walls. A cell is *supported* if the cell directly
//! beneath it is a wall or a trail cell, so the bottom row always is.
//!
//! # Transition
//!
//! The head moves by the unit displacement; `Up` adds one stamina; landing
//! on a supported cell (judged against the predecessor's trail) resets
//! stamina to zero; the vacated cell joins the trail.

use crate::carrier::grid::GridModel;
use crate::carrier::position::Position;
use crate::carrier::state::CrawlerState;
use crate::operators::cost::step_cost;
use crate::operators::moves::Move;

/// Default stamina ceiling.
pub const DEFAULT_MAX_STAMINA: u32 = 3;

/// Tunable rule parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CrawlerConfig {
    /// Upper bound on consecutive unsupported climbs.
    pub max_stamina: u32,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_stamina: DEFAULT_MAX_STAMINA,
        }
    }
}

/// Typed failure for move application. Fail-closed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplyFailure {
    /// The move is not legal from the given state.
    #[error("move {mv} is not legal from head {head} (stamina {stamina})")]
    PreconditionNotMet {
        mv: Move,
        head: Position,
        stamina: u32,
    },
}

/// The crawler transition model over a fixed grid.
#[derive(Debug, Clone)]
pub struct CrawlerRules {
    grid: GridModel,
    config: CrawlerConfig,
}

impl CrawlerRules {
    #[must_use]
    pub fn new(grid: GridModel, config: CrawlerConfig) -> Self {
        Self { grid, config }
    }

    #[must_use]
    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    #[must_use]
    pub fn config(&self) -> CrawlerConfig {
        self.config
    }

    #[must_use]
    pub fn initial_state(&self) -> CrawlerState {
        self.grid.initial_state()
    }

    /// Not a wall and not occupied by the crawler's trail.
    #[must_use]
    pub fn is_free(&self, state: &CrawlerState, cell: Position) -> bool {
        !self.grid.is_wall(cell) && !state.trail_contains(cell)
    }

    /// The cell beneath `cell` is a wall or a trail cell.
    #[must_use]
    pub fn is_supported(&self, state: &CrawlerState, cell: Position) -> bool {
        !self.is_free(state, cell.below())
    }

    /// Legal moves from `state`, sorted by label.
    #[must_use]
    pub fn legal_moves(&self, state: &CrawlerState) -> Vec<Move> {
        let head = state.head();
        if self.is_free(state, head.below()) {
            return vec![Move::Down];
        }

        let mut moves = Vec::with_capacity(3);
        if self.is_free(state, head.above()) && state.stamina() < self.config.max_stamina {
            moves.push(Move::Up);
        }
        for mv in [Move::Left, Move::Right] {
            let target = mv.target(head);
            if self.is_free(state, target)
                && (state.stamina() == 0 || self.is_supported(state, target))
            {
                moves.push(mv);
            }
        }
        moves.sort_unstable();
        moves
    }

    /// Apply `mv` to `state`, producing a new state.
    ///
    /// # Errors
    ///
    /// Returns [`ApplyFailure::PreconditionNotMet`] if `mv` is not in
    /// [`Self::legal_moves`] for `state`.
    pub fn apply(&self, state: &CrawlerState, mv: Move) -> Result<CrawlerState, ApplyFailure> {
        if !self.legal_moves(state).contains(&mv) {
            return Err(ApplyFailure::PreconditionNotMet {
                mv,
                head: state.head(),
                stamina: state.stamina(),
            });
        }

        let new_head = mv.target(state.head());
        let mut stamina = state.stamina();
        if mv == Move::Up {
            stamina += 1;
        }
        if self.is_supported(state, new_head) {
            stamina = 0;
        }
        Ok(state.advance(new_head, stamina))
    }

    #[must_use]
    pub fn is_goal(&self, state: &CrawlerState) -> bool {
        state.head() == self.grid.goal()
    }

    #[must_use]
    pub fn step_cost(&self, mv: Move) -> u64 {
        step_cost(mv)
    }
}

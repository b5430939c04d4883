//! `CrawlerWorld`: the crawler puzzle as a searchable world.
//!
//! Wraps [`CrawlerRules`] and exposes it through [`SearchWorld`]. The state
//! identity used for deduplication is the full crawler state (head, trail,
//! stamina); the novelty metric sees only the head.

use crawler_kernel::carrier::grid::GridModel;
use crawler_kernel::carrier::position::Position;
use crawler_kernel::carrier::state::CrawlerState;
use crawler_kernel::operators::moves::Move;
use crawler_kernel::operators::rules::{
    ApplyFailure, CrawlerConfig, CrawlerRules, DEFAULT_MAX_STAMINA,
};
use crawler_kernel::proof::hash::ContentHash;
use crawler_kernel::proof::replay::{execute, ReplayError, ReplayOutcome};

use crawler_search::contract::SearchWorld;
use crawler_search::error::SearchError;
use crawler_search::policy::SearchPolicy;
use crawler_search::search::{search, SearchResult};

/// Search result specialised to the crawler.
pub type CrawlerSearchResult = SearchResult<CrawlerState, Move>;

/// The crawler puzzle over one fixed grid.
#[derive(Debug, Clone)]
pub struct CrawlerWorld {
    rules: CrawlerRules,
}

impl CrawlerWorld {
    #[must_use]
    pub fn new(grid: GridModel, max_stamina: u32) -> Self {
        Self {
            rules: CrawlerRules::new(grid, CrawlerConfig { max_stamina }),
        }
    }

    /// Same as [`Self::new`] with a stamina ceiling of 3.
    #[must_use]
    pub fn with_default_stamina(grid: GridModel) -> Self {
        Self::new(grid, DEFAULT_MAX_STAMINA)
    }

    #[must_use]
    pub fn rules(&self) -> &CrawlerRules {
        &self.rules
    }

    #[must_use]
    pub fn initial_state(&self) -> CrawlerState {
        self.rules.initial_state()
    }

    /// Novelty search with frontier bound `capacity` and no expansion budget.
    ///
    /// # Errors
    ///
    /// See [`Self::search_with`].
    pub fn search(&self, capacity: usize) -> Result<CrawlerSearchResult, SearchError> {
        self.search_with(&SearchPolicy::with_capacity(capacity))
    }

    /// Novelty search under an explicit policy.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidCapacity`] for a zero capacity, or
    /// [`SearchError::IllegalTransition`] if the rules reject a move they
    /// reported as legal.
    pub fn search_with(&self, policy: &SearchPolicy) -> Result<CrawlerSearchResult, SearchError> {
        search(self, policy)
    }

    /// Replay `moves` from the initial state.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError`] at the first illegal move.
    pub fn replay(&self, moves: &[Move]) -> Result<ReplayOutcome, ReplayError> {
        execute(&self.rules, &self.initial_state(), moves)
    }
}

impl SearchWorld for CrawlerWorld {
    type State = CrawlerState;
    type Move = Move;
    type Error = ApplyFailure;

    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "crawler"
    }

    fn root_state(&self) -> CrawlerState {
        self.rules.initial_state()
    }

    fn enumerate_moves(&self, state: &CrawlerState) -> Vec<Move> {
        self.rules.legal_moves(state)
    }

    fn apply_move(&self, state: &CrawlerState, mv: Move) -> Result<CrawlerState, ApplyFailure> {
        self.rules.apply(state, mv)
    }

    fn step_cost(&self, mv: Move) -> u64 {
        self.rules.step_cost(mv)
    }

    fn is_goal(&self, state: &CrawlerState) -> bool {
        self.rules.is_goal(state)
    }

    fn head(&self, state: &CrawlerState) -> Position {
        state.head()
    }

    fn fingerprint(&self, state: &CrawlerState) -> ContentHash {
        state.fingerprint()
    }
}

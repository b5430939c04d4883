//! Harness runner: one configured search over one grid.
//!
//! # Pipeline
//!
//! ```text
//! RunConfig::policy() → CrawlerWorld::new()
//!   → search_with() → [replay() of the found path]
//!   → grid.digest() + graph.digest() → RunReport
//! ```
//!
//! A found path is always replayed through the kernel before it is reported.
//! A replay that disagrees with the goal node's state or cost is a bug in the
//! search layer and fails the run.

use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn};

use crawler_kernel::carrier::grid::GridModel;
use crawler_kernel::operators::moves::{format_moves, Move};
use crawler_kernel::operators::rules::DEFAULT_MAX_STAMINA;
use crawler_kernel::proof::replay::ReplayError;
use crawler_search::error::SearchError;
use crawler_search::graph::TerminationReason;
use crawler_search::policy::SearchPolicy;

use crate::loader::{parse_grid, LoadError};
use crate::worlds::crawler::CrawlerWorld;

/// Host-facing run parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Frontier bound `N`.
    pub capacity: usize,
    pub max_stamina: u32,
    /// Optional expansion budget. `None` runs to goal or exhaustion.
    pub max_expansions: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            capacity: SearchPolicy::default().capacity,
            max_stamina: DEFAULT_MAX_STAMINA,
            max_expansions: None,
        }
    }
}

impl RunConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Config`] for malformed JSON or unknown fields.
    pub fn from_json(text: &str) -> Result<Self, RunError> {
        serde_json::from_str(text).map_err(RunError::Config)
    }

    #[must_use]
    pub fn policy(&self) -> SearchPolicy {
        SearchPolicy {
            capacity: self.capacity,
            max_expansions: self.max_expansions,
        }
    }
}

/// Error during a harness run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("invalid run config: {0}")]
    Config(#[source] serde_json::Error),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Search(#[from] SearchError),

    /// The found path does not replay at all.
    #[error("found path does not replay: {0}")]
    Replay(#[from] ReplayError),

    /// The found path replays, but not to the goal node's state and cost.
    #[error("replay diverged from goal node {node_id}: {detail}")]
    ReplayDivergence { node_id: u64, detail: String },

    #[error("search graph serialization failed: {0}")]
    GraphSerialization(#[source] serde_json::Error),
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub world_id: String,
    /// `sha256:<hex>` digest of the puzzle grid.
    pub grid_digest: String,
    pub termination: TerminationReason,
    pub expansions: u64,
    /// Moves from the start to the goal, if one was found.
    pub moves: Option<Vec<Move>>,
    /// Path cost of `moves`.
    pub cost: Option<u64>,
    pub frontier_high_water: u64,
    /// `sha256:<hex>` digest of the search graph.
    pub graph_digest: String,
}

impl RunReport {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self.termination, TerminationReason::GoalReached { .. })
    }

    /// Moves as a compact label string (`"RRUU"`), empty when no goal.
    #[must_use]
    pub fn moves_label(&self) -> String {
        self.moves.as_deref().map(format_moves).unwrap_or_default()
    }
}

/// Run novelty search over `grid` under `config`.
///
/// # Errors
///
/// Returns [`RunError`] if the search rejects the config, the found path
/// fails to replay, or the graph cannot be serialized.
pub fn run(grid: GridModel, config: &RunConfig) -> Result<RunReport, RunError> {
    let span = info_span!(
        "run",
        capacity = config.capacity,
        max_stamina = config.max_stamina
    );
    let _guard = span.enter();

    let grid_digest = grid.digest();
    let world = CrawlerWorld::new(grid, config.max_stamina);
    let result = world.search_with(&config.policy())?;

    let (moves, cost) = match &result.goal_node {
        Some(goal) => {
            let path = goal.path();
            let replay = world.replay(&path)?;
            if !replay.goal_reached || replay.state != goal.state || replay.cost != goal.path_cost
            {
                warn!(node_id = goal.node_id, "replay diverged from search");
                return Err(RunError::ReplayDivergence {
                    node_id: goal.node_id,
                    detail: format!(
                        "replay cost {} goal {} vs node cost {}",
                        replay.cost, replay.goal_reached, goal.path_cost
                    ),
                });
            }
            (Some(path), Some(goal.path_cost))
        }
        None => (None, None),
    };

    let graph_digest = result
        .graph
        .digest()
        .map_err(RunError::GraphSerialization)?;

    let report = RunReport {
        world_id: result.graph.metadata.world_id.clone(),
        grid_digest: grid_digest.as_str().to_string(),
        termination: result.termination_reason(),
        expansions: result.expansions,
        moves,
        cost,
        frontier_high_water: result.graph.metadata.frontier_high_water,
        graph_digest: graph_digest.as_str().to_string(),
    };
    info!(
        termination = ?report.termination,
        expansions = report.expansions,
        moves = %report.moves_label(),
        "run complete"
    );
    Ok(report)
}

/// Load `text` with [`parse_grid`] and [`run`] it.
///
/// # Errors
///
/// Returns [`RunError::Load`] for bad grid text, otherwise as [`run`].
pub fn run_text(text: &str, config: &RunConfig) -> Result<RunReport, RunError> {
    run(parse_grid(text)?, config)
}

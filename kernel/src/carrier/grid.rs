//! `GridModel`: validated, immutable puzzle geometry.
//!
//! A grid loader produces a raw [`GridSpec`] (anything may be missing or
//! inconsistent). [`GridModel::try_from`] validates it once; after that the
//! walls, goal, and start configuration never change.
//!
//! The grid is closed: every cell outside `0..width x 0..height` behaves as a
//! wall, so the border blocks movement and supports whatever stands on it.
//!
//! Walls are held in an `FxHashSet` for O(1) membership tests on the hot
//! legality path. Canonical (sorted) views are available for hashing and
//! serialization via [`GridModel::walls_sorted`].

use std::collections::BTreeSet;

use rustc_hash::FxHashSet;

use crate::carrier::position::Position;
use crate::carrier::state::CrawlerState;
use crate::proof::hash::{canonical_hash, ContentHash, DOMAIN_GRID_FIXTURE};

/// Raw grid description as handed over by a loader. Unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridSpec {
    pub walls: BTreeSet<Position>,
    pub goal: Option<Position>,
    pub head: Option<Position>,
    pub trail: BTreeSet<Position>,
    /// `(width, height)` in cells.
    pub dimensions: (u32, u32),
}

/// Typed failure for grid validation. Fatal: no search may start.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid has no goal position")]
    MissingGoal,
    #[error("grid has no crawler head position")]
    MissingHead,
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    EmptyDimensions { width: u32, height: u32 },
    #[error("grid dimensions {width}x{height} exceed the addressable plane")]
    DimensionsTooLarge { width: u32, height: u32 },
    #[error("{what} {cell} lies outside the {width}x{height} grid")]
    OutOfBounds {
        what: &'static str,
        cell: Position,
        width: u32,
        height: u32,
    },
    #[error("crawler head {head} is inside a wall")]
    HeadInWall { head: Position },
    #[error("goal {goal} is inside a wall")]
    GoalInWall { goal: Position },
    #[error("crawler head {head} is also listed as a trail cell")]
    HeadInTrail { head: Position },
    #[error("trail cell {cell} is inside a wall")]
    TrailInWall { cell: Position },
}

/// Immutable, validated grid.
#[derive(Debug, Clone)]
pub struct GridModel {
    walls: FxHashSet<Position>,
    goal: Position,
    start_head: Position,
    start_trail: BTreeSet<Position>,
    width: u32,
    height: u32,
}

impl TryFrom<GridSpec> for GridModel {
    type Error = GridError;

    fn try_from(spec: GridSpec) -> Result<Self, Self::Error> {
        let (width, height) = spec.dimensions;
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimensions { width, height });
        }
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(GridError::DimensionsTooLarge { width, height });
        }
        let goal = spec.goal.ok_or(GridError::MissingGoal)?;
        let head = spec.head.ok_or(GridError::MissingHead)?;

        let bounds_check = |what: &'static str, cell: Position| {
            if in_bounds(cell, width, height) {
                Ok(())
            } else {
                Err(GridError::OutOfBounds {
                    what,
                    cell,
                    width,
                    height,
                })
            }
        };
        bounds_check("crawler head", head)?;
        bounds_check("goal", goal)?;
        for &cell in &spec.trail {
            bounds_check("trail cell", cell)?;
        }

        if spec.walls.contains(&head) {
            return Err(GridError::HeadInWall { head });
        }
        if spec.walls.contains(&goal) {
            return Err(GridError::GoalInWall { goal });
        }
        if spec.trail.contains(&head) {
            return Err(GridError::HeadInTrail { head });
        }
        if let Some(&cell) = spec.trail.iter().find(|c| spec.walls.contains(c)) {
            return Err(GridError::TrailInWall { cell });
        }

        Ok(Self {
            walls: spec.walls.into_iter().collect(),
            goal,
            start_head: head,
            start_trail: spec.trail,
            width,
            height,
        })
    }
}

fn in_bounds(cell: Position, width: u32, height: u32) -> bool {
    u32::try_from(cell.x).is_ok_and(|x| x < width)
        && u32::try_from(cell.y).is_ok_and(|y| y < height)
}

impl GridModel {
    /// Build a grid directly from parts.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] if the parts violate any grid invariant.
    pub fn new(
        walls: impl IntoIterator<Item = Position>,
        goal: Position,
        head: Position,
        trail: impl IntoIterator<Item = Position>,
        dimensions: (u32, u32),
    ) -> Result<Self, GridError> {
        Self::try_from(GridSpec {
            walls: walls.into_iter().collect(),
            goal: Some(goal),
            head: Some(head),
            trail: trail.into_iter().collect(),
            dimensions,
        })
    }

    /// `cell` lies inside `0..width x 0..height`.
    #[must_use]
    pub fn contains(&self, cell: Position) -> bool {
        in_bounds(cell, self.width, self.height)
    }

    /// A wall cell, or any cell outside the grid.
    #[must_use]
    pub fn is_wall(&self, cell: Position) -> bool {
        !self.contains(cell) || self.walls.contains(&cell)
    }

    #[must_use]
    pub fn goal(&self) -> Position {
        self.goal
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Walls in canonical (sorted) order.
    #[must_use]
    pub fn walls_sorted(&self) -> Vec<Position> {
        let mut walls: Vec<Position> = self.walls.iter().copied().collect();
        walls.sort_unstable();
        walls
    }

    /// The start configuration: given head, given trail, stamina 0.
    #[must_use]
    pub fn initial_state(&self) -> CrawlerState {
        CrawlerState::new(self.start_head, self.start_trail.iter().copied(), 0)
    }

    /// Content hash of the whole puzzle (geometry and start configuration).
    ///
    /// Layout: `width u32le || height u32le || goal (8) || head (8) ||
    /// wall_count u32le || sorted walls || trail_len u32le || sorted trail`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn digest(&self) -> ContentHash {
        let walls = self.walls_sorted();
        let mut bytes = Vec::with_capacity(32 + (walls.len() + self.start_trail.len()) * 8);
        bytes.extend_from_slice(&self.width.to_le_bytes());
        bytes.extend_from_slice(&self.height.to_le_bytes());
        bytes.extend_from_slice(&self.goal.to_le_bytes());
        bytes.extend_from_slice(&self.start_head.to_le_bytes());
        bytes.extend_from_slice(&(walls.len() as u32).to_le_bytes());
        for wall in &walls {
            bytes.extend_from_slice(&wall.to_le_bytes());
        }
        bytes.extend_from_slice(&(self.start_trail.len() as u32).to_le_bytes());
        for cell in &self.start_trail {
            bytes.extend_from_slice(&cell.to_le_bytes());
        }
        canonical_hash(DOMAIN_GRID_FIXTURE, &bytes)
    }
}

//! Minimal worlds for unit tests of the generic search layer.

use std::collections::BTreeSet;
use std::fmt;

use crawler_kernel::carrier::position::Position;
use crawler_kernel::proof::hash::{canonical_hash, ContentHash};

use crate::contract::SearchWorld;

const DOMAIN_WALK_STATE: &[u8] = b"CRAWLER::TEST_WALK_STATE::V1\0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    East,
    North,
    South,
    West,
}

impl Step {
    const ALL: [Self; 4] = [Self::East, Self::North, Self::South, Self::West];

    fn delta(self) -> (i32, i32) {
        match self {
            Self::East => (1, 0),
            Self::North => (0, 1),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::East => "E",
            Self::North => "N",
            Self::South => "S",
            Self::West => "W",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot step {step} from {from}")]
pub struct WalkError {
    pub from: Position,
    pub step: Step,
}

/// Four-neighbour walk inside a `width x height` rectangle starting at the
/// origin. The state is just the position. `North` costs 2, everything else 1.
#[derive(Debug, Clone)]
pub struct WalkWorld {
    width: i32,
    height: i32,
    goal: Position,
    blocked: BTreeSet<Position>,
    /// Cells the world enumerates but then refuses to enter.
    poisoned: BTreeSet<Position>,
}

impl WalkWorld {
    pub fn open(width: i32, height: i32, goal: Position) -> Self {
        Self {
            width,
            height,
            goal,
            blocked: BTreeSet::new(),
            poisoned: BTreeSet::new(),
        }
    }

    pub fn with_blocked(mut self, cells: impl IntoIterator<Item = Position>) -> Self {
        self.blocked.extend(cells);
        self
    }

    pub fn with_poisoned(mut self, cells: impl IntoIterator<Item = Position>) -> Self {
        self.poisoned.extend(cells);
        self
    }

    fn inside(&self, p: Position) -> bool {
        (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y)
    }
}

impl SearchWorld for WalkWorld {
    type State = Position;
    type Move = Step;
    type Error = WalkError;

    fn world_id(&self) -> &str {
        "test_walk"
    }

    fn root_state(&self) -> Position {
        Position::new(0, 0)
    }

    fn enumerate_moves(&self, state: &Position) -> Vec<Step> {
        Step::ALL
            .into_iter()
            .filter(|s| {
                let (dx, dy) = s.delta();
                let next = state.offset(dx, dy);
                self.inside(next) && !self.blocked.contains(&next)
            })
            .collect()
    }

    fn apply_move(&self, state: &Position, mv: Step) -> Result<Position, WalkError> {
        let (dx, dy) = mv.delta();
        let next = state.offset(dx, dy);
        if !self.inside(next) || self.blocked.contains(&next) || self.poisoned.contains(&next) {
            return Err(WalkError {
                from: *state,
                step: mv,
            });
        }
        Ok(next)
    }

    fn step_cost(&self, mv: Step) -> u64 {
        if mv == Step::North {
            2
        } else {
            1
        }
    }

    fn is_goal(&self, state: &Position) -> bool {
        *state == self.goal
    }

    fn head(&self, state: &Position) -> Position {
        *state
    }

    fn fingerprint(&self, state: &Position) -> ContentHash {
        canonical_hash(DOMAIN_WALK_STATE, &state.to_le_bytes())
    }
}

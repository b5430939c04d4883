//! `Move`: the four unit displacements available to the crawler head.
//!
//! Moves carry a single-letter label. The label order (`D < L < R < U`) is
//! the canonical move order: legal-move lists are always returned sorted by
//! label, which keeps child creation order (and therefore search) fully
//! reproducible.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::carrier::position::Position;

/// A crawler move.
///
/// Variant declaration order matches label order so the derived `Ord` is the
/// canonical move order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Move {
    #[serde(rename = "D")]
    Down,
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
    #[serde(rename = "U")]
    Up,
}

impl Move {
    /// All moves in canonical (label) order.
    pub const ALL: [Self; 4] = [Self::Down, Self::Left, Self::Right, Self::Up];

    #[must_use]
    pub const fn label(self) -> char {
        match self {
            Self::Down => 'D',
            Self::Left => 'L',
            Self::Right => 'R',
            Self::Up => 'U',
        }
    }

    #[must_use]
    pub fn from_label(label: char) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }

    /// Unit displacement `(dx, dy)`; `y` grows upward.
    #[must_use]
    pub const fn displacement(self) -> (i32, i32) {
        match self {
            Self::Down => (0, -1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::Up => (0, 1),
        }
    }

    /// The cell reached from `from` by this move.
    #[must_use]
    pub const fn target(self, from: Position) -> Position {
        let (dx, dy) = self.displacement();
        from.offset(dx, dy)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Parse a compact label string (e.g. `"RRUL"`) into moves.
///
/// Whitespace and commas are ignored. Returns the first unknown character on
/// failure.
///
/// # Errors
///
/// Returns the offending character if it is not a move label.
pub fn parse_moves(labels: &str) -> Result<Vec<Move>, char> {
    labels
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| Move::from_label(c).ok_or(c))
        .collect()
}

/// Render moves as a compact label string.
#[must_use]
pub fn format_moves(moves: &[Move]) -> String {
    moves.iter().map(|m| m.label()).collect()
}

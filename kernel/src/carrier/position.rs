//! `Position`: a cell address on the crawler plane.
//!
//! Cells are 0-based with `y` increasing upward (row 0 is the bottom row of
//! the grid). `Position` itself is unbounded; a validated grid only admits
//! cells whose coordinates and neighbours fit in `i32`.
//!
//! # Ordering
//!
//! `Position` orders lexicographically by `x`, then `y`. This is the order
//! used for tie-breaking in search and for canonical trail snapshots.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A grid cell `(x, y)`.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell displaced by `(dx, dy)`.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The cell directly beneath this one.
    #[must_use]
    pub const fn below(self) -> Self {
        self.offset(0, -1)
    }

    /// The cell directly above this one.
    #[must_use]
    pub const fn above(self) -> Self {
        self.offset(0, 1)
    }

    /// Manhattan (L1) distance between two cells.
    #[must_use]
    pub fn manhattan(self, other: Self) -> u64 {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.y.abs_diff(other.y))
    }

    /// Fixed-width little-endian encoding used in canonical state bytes.
    #[must_use]
    pub fn to_le_bytes(self) -> [u8; 8] {
        let mut out = [0u8; 8];
        out[..4].copy_from_slice(&self.x.to_le_bytes());
        out[4..].copy_from_slice(&self.y.to_le_bytes());
        out
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

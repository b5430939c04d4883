//! `CrawlerState`: one immutable configuration of the crawler.
//!
//! # Identity
//!
//! Two states are equal iff `head`, `stamina`, and the trail (as an unordered
//! set) all match. The trail's live representation is an `FxHashSet` for O(1)
//! membership; hashing and canonical bytes go through a sorted snapshot so
//! insertion order never leaks into identity.
//!
//! # Immutability
//!
//! There is no `&mut self` API. [`CrawlerState::advance`] builds a successor
//! with a fresh copy of the trail; the predecessor is never touched. The trail
//! sits behind an `Arc` so cloning a state (frontier, nodes, explored set)
//! does not copy cells.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use rustc_hash::FxHashSet;

use crate::carrier::position::Position;
use crate::proof::hash::{canonical_hash, ContentHash, DOMAIN_CRAWLER_STATE};

/// Immutable crawler configuration.
#[derive(Debug, Clone)]
pub struct CrawlerState {
    head: Position,
    trail: Arc<FxHashSet<Position>>,
    stamina: u32,
}

impl CrawlerState {
    #[must_use]
    pub fn new(head: Position, trail: impl IntoIterator<Item = Position>, stamina: u32) -> Self {
        Self {
            head,
            trail: Arc::new(trail.into_iter().collect()),
            stamina,
        }
    }

    #[must_use]
    pub fn head(&self) -> Position {
        self.head
    }

    #[must_use]
    pub fn stamina(&self) -> u32 {
        self.stamina
    }

    #[must_use]
    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    #[must_use]
    pub fn trail_contains(&self, cell: Position) -> bool {
        self.trail.contains(&cell)
    }

    /// Trail cells in canonical (sorted) order.
    #[must_use]
    pub fn trail_sorted(&self) -> Vec<Position> {
        let mut cells: Vec<Position> = self.trail.iter().copied().collect();
        cells.sort_unstable();
        cells
    }

    /// Successor with the head relocated to `new_head`, the old head appended
    /// to the trail, and `stamina` replaced.
    #[must_use]
    pub fn advance(&self, new_head: Position, stamina: u32) -> Self {
        let mut trail = FxHashSet::clone(&self.trail);
        trail.insert(self.head);
        Self {
            head: new_head,
            trail: Arc::new(trail),
            stamina,
        }
    }

    /// Canonical identity bytes.
    ///
    /// Layout: `head (8) || stamina u32le (4) || trail_len u32le (4) ||
    /// sorted trail cells (8 each)`.
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        let cells = self.trail_sorted();
        let mut out = Vec::with_capacity(16 + cells.len() * 8);
        out.extend_from_slice(&self.head.to_le_bytes());
        out.extend_from_slice(&self.stamina.to_le_bytes());
        #[allow(clippy::cast_possible_truncation)]
        out.extend_from_slice(&(cells.len() as u32).to_le_bytes());
        for cell in cells {
            out.extend_from_slice(&cell.to_le_bytes());
        }
        out
    }

    /// Content-addressed fingerprint of [`Self::identity_bytes`].
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        canonical_hash(DOMAIN_CRAWLER_STATE, &self.identity_bytes())
    }
}

impl PartialEq for CrawlerState {
    fn eq(&self, other: &Self) -> bool {
        self.head == other.head
            && self.stamina == other.stamina
            && (Arc::ptr_eq(&self.trail, &other.trail) || self.trail == other.trail)
    }
}

impl Eq for CrawlerState {}

impl Hash for CrawlerState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.head.hash(state);
        self.stamina.hash(state);
        self.trail_sorted().hash(state);
    }
}

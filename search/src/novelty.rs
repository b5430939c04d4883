//! Novelty metric: mean Manhattan distance to the other members of a set.
//!
//! Novelty is kept as an exact rational `total_distance / peers` so that
//! comparisons never depend on float rounding. Two novelties are compared by
//! cross-multiplication in `u128`.
//!
//! The metric is recomputed from scratch whenever set membership changes.
//! It is a pure function of the multiset of head positions: input order only
//! determines which output slot a value lands in.

use std::cmp::Ordering;

use crawler_kernel::carrier::position::Position;
use serde::Serialize;

/// Mean distance from one head to every other head in the set.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Novelty {
    /// Sum of Manhattan distances to every peer.
    pub total_distance: u64,
    /// Number of peers (set size minus one).
    pub peers: u64,
}

impl Novelty {
    /// The novelty of a lone node.
    pub const ZERO: Self = Self {
        total_distance: 0,
        peers: 0,
    };

    /// Lossy float view, for logs and reports only.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        if self.peers == 0 {
            0.0
        } else {
            self.total_distance as f64 / self.peers as f64
        }
    }

    fn denominator(self) -> u128 {
        u128::from(self.peers.max(1))
    }
}

impl PartialEq for Novelty {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Novelty {}

impl PartialOrd for Novelty {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Novelty {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = u128::from(self.total_distance) * other.denominator();
        let rhs = u128::from(other.total_distance) * self.denominator();
        lhs.cmp(&rhs)
    }
}

/// Novelty of each head with respect to all the others.
///
/// `out[i]` belongs to `heads[i]`. A single head has novelty zero; an empty
/// input yields an empty output.
#[must_use]
pub fn novelties(heads: &[Position]) -> Vec<Novelty> {
    if heads.len() <= 1 {
        return vec![Novelty::ZERO; heads.len()];
    }
    let peers = (heads.len() - 1) as u64;
    heads
        .iter()
        .enumerate()
        .map(|(i, &head)| {
            let total_distance = heads
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, &other)| head.manhattan(other))
                .sum();
            Novelty {
                total_distance,
                peers,
            }
        })
        .collect()
}

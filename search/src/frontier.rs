//! Capacity-bounded novelty frontier.
//!
//! # Selection order
//!
//! Entries are ranked by novelty (highest first), then head `x` (lowest
//! first), then head `y` (lowest first), then `node_id` (oldest first). The
//! last key only matters for distinct states sharing a head; it makes the
//! order total, so selection never depends on storage order.
//!
//! # Re-bounding
//!
//! When the merged working set exceeds capacity, novelty is computed over the
//! whole merged set, entries are ranked by the selection order, and only the
//! first `capacity` survive. Novelty is then recomputed over the survivors,
//! which is what the next selection sees. Dropped nodes are gone for good.

use std::cmp::Ordering;
use std::hash::Hash;
use std::sync::Arc;

use rustc_hash::FxHashSet;

use crate::node::SearchNode;
use crate::novelty::{novelties, Novelty};

/// A frontier member with its current novelty.
#[derive(Debug)]
pub struct FrontierEntry<S, M> {
    pub node: Arc<SearchNode<S, M>>,
    pub novelty: Novelty,
}

impl<S, M> Clone for FrontierEntry<S, M> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
            novelty: self.novelty,
        }
    }
}

/// `Less` means `a` is selected before `b`.
fn selection_order<S, M>(a: &FrontierEntry<S, M>, b: &FrontierEntry<S, M>) -> Ordering {
    b.novelty
        .cmp(&a.novelty)
        .then_with(|| a.node.head.cmp(&b.node.head))
        .then_with(|| a.node.node_id.cmp(&b.node.node_id))
}

/// Novelty frontier manager.
///
/// Maintains:
/// - the current entries (at most `capacity`, no two with equal states)
/// - a state set mirroring the entries for O(1) duplicate checks
/// - the largest merged working set seen before bounding
pub struct NoveltyFrontier<S, M> {
    entries: Vec<FrontierEntry<S, M>>,
    members: FxHashSet<S>,
    capacity: usize,
    high_water: u64,
}

impl<S: Clone + Eq + Hash, M> NoveltyFrontier<S, M> {
    /// A frontier holding only `root`, with novelty zero.
    #[must_use]
    pub fn with_root(root: Arc<SearchNode<S, M>>, capacity: usize) -> Self {
        let mut members = FxHashSet::default();
        members.insert(root.state.clone());
        Self {
            entries: vec![FrontierEntry {
                node: root,
                novelty: Novelty::ZERO,
            }],
            members,
            capacity,
            high_water: 1,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Largest working-set size seen before bounding.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }

    #[must_use]
    pub fn contains_state(&self, state: &S) -> bool {
        self.members.contains(state)
    }

    #[must_use]
    pub fn entries(&self) -> &[FrontierEntry<S, M>] {
        &self.entries
    }

    /// Remove and return the entry that ranks first in selection order.
    pub fn pop_most_novel(&mut self) -> Option<FrontierEntry<S, M>> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| selection_order(a, b))
            .map(|(i, _)| i)?;
        let entry = self.entries.remove(index);
        self.members.remove(&entry.node.state);
        Some(entry)
    }

    /// Merge `admitted` into the remaining entries, bound the result to
    /// capacity, and recompute novelty.
    ///
    /// `admitted` must not contain states already in the frontier. Returns
    /// the ids of nodes dropped by bounding, in selection order.
    pub fn admit(&mut self, admitted: Vec<Arc<SearchNode<S, M>>>) -> Vec<u64> {
        let mut merged: Vec<Arc<SearchNode<S, M>>> =
            self.entries.drain(..).map(|e| e.node).collect();
        merged.extend(admitted);
        self.high_water = self.high_water.max(merged.len() as u64);

        let mut ranked = score(merged);
        let mut pruned = Vec::new();
        if ranked.len() > self.capacity {
            ranked.sort_by(selection_order);
            pruned = ranked[self.capacity..]
                .iter()
                .map(|e| e.node.node_id)
                .collect();
            ranked.truncate(self.capacity);
            ranked = score(ranked.into_iter().map(|e| e.node).collect());
        }

        self.members = ranked.iter().map(|e| e.node.state.clone()).collect();
        self.entries = ranked;
        pruned
    }
}

fn score<S, M>(nodes: Vec<Arc<SearchNode<S, M>>>) -> Vec<FrontierEntry<S, M>> {
    let heads: Vec<_> = nodes.iter().map(|n| n.head).collect();
    nodes
        .into_iter()
        .zip(novelties(&heads))
        .map(|(node, novelty)| FrontierEntry { node, novelty })
        .collect()
}

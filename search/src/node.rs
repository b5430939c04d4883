//! Core search node type.

use std::sync::Arc;

use crawler_kernel::carrier::position::Position;

use crate::contract::SearchWorld;

/// An immutable search node.
///
/// A child holds an `Arc` to its parent, so the full path from the root can
/// be recovered from any node alone. Parents are never mutated by children.
#[derive(Debug)]
pub struct SearchNode<S, M> {
    /// Monotonic identifier; assigned in creation order, root = 0.
    pub node_id: u64,
    /// Parent node (`None` for root).
    pub parent: Option<Arc<SearchNode<S, M>>>,
    /// Full immutable state at this node.
    pub state: S,
    /// Cached head position of `state`.
    pub head: Position,
    /// The move that produced this node from its parent.
    pub producing_move: Option<M>,
    /// Tree depth (root = 0).
    pub depth: u32,
    /// Cumulative path cost from the root.
    pub path_cost: u64,
}

impl<S, M: Copy> SearchNode<S, M> {
    #[must_use]
    pub fn root(node_id: u64, state: S, head: Position) -> Self {
        Self {
            node_id,
            parent: None,
            state,
            head,
            producing_move: None,
            depth: 0,
            path_cost: 0,
        }
    }

    #[must_use]
    pub fn parent_id(&self) -> Option<u64> {
        self.parent.as_ref().map(|p| p.node_id)
    }

    /// Moves from the root to this node, in application order.
    #[must_use]
    pub fn path(&self) -> Vec<M> {
        let mut moves = Vec::with_capacity(self.depth as usize);
        let mut cursor = Some(self);
        while let Some(node) = cursor {
            if let Some(mv) = node.producing_move {
                moves.push(mv);
            }
            cursor = node.parent.as_deref();
        }
        moves.reverse();
        moves
    }

    /// Expand this node into one child per legal move.
    ///
    /// Children take ids from `next_node_id` in move order. The receiver is
    /// not modified.
    ///
    /// # Errors
    ///
    /// Returns the rejected move and the world's error if the world refuses
    /// a move it enumerated.
    pub fn expand<W>(
        self: &Arc<Self>,
        world: &W,
        next_node_id: &mut u64,
    ) -> Result<Vec<(M, Arc<Self>)>, (M, W::Error)>
    where
        W: SearchWorld<State = S, Move = M>,
    {
        let moves = world.enumerate_moves(&self.state);
        let mut children = Vec::with_capacity(moves.len());
        for mv in moves {
            let state = world.apply_move(&self.state, mv).map_err(|e| (mv, e))?;
            let head = world.head(&state);
            let child = Self {
                node_id: *next_node_id,
                parent: Some(Arc::clone(self)),
                state,
                head,
                producing_move: Some(mv),
                depth: self.depth + 1,
                path_cost: self.path_cost + world.step_cost(mv),
            };
            *next_node_id += 1;
            children.push((mv, Arc::new(child)));
        }
        Ok(children)
    }
}

/// Unlinks the ancestor chain iteratively. The default drop recurses once
/// per ancestor and overflows the stack on deep paths.
impl<S, M> Drop for SearchNode<S, M> {
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(parent) = next {
            next = match Arc::try_unwrap(parent) {
                Ok(mut node) => node.parent.take(),
                Err(_) => None,
            };
        }
    }
}

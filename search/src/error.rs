//! Typed search errors.
//!
//! `SearchError` covers pre-flight failures and world contract breaches.
//! Normal terminations (goal found, frontier exhausted, budget hit) are not
//! errors; they are expressed via [`crate::graph::TerminationReason`].

/// Typed failure for search execution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A frontier of capacity zero can never hold the root node.
    #[error("frontier capacity must be at least 1, got {capacity}")]
    InvalidCapacity { capacity: usize },

    /// The world rejected a move it had itself enumerated.
    #[error("world rejected its own move {mv} while expanding node {node_id}: {detail}")]
    IllegalTransition {
        node_id: u64,
        mv: String,
        detail: String,
    },
}

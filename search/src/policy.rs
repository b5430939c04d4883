//! Search policy types.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Frontier bound and host-imposed budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPolicy {
    /// Maximum number of nodes held in the frontier (`N`).
    pub capacity: usize,
    /// Optional cap on node expansions. `None` runs until goal or exhaustion.
    #[serde(default)]
    pub max_expansions: Option<u64>,
}

impl SearchPolicy {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            max_expansions: None,
        }
    }

    /// Validate the policy before any search step is taken.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidCapacity`] if `capacity` is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.capacity == 0 {
            return Err(SearchError::InvalidCapacity {
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            capacity: 10,
            max_expansions: None,
        }
    }
}

//! Operators module: moves, legality, transitions, and step costs.

pub mod cost;
pub mod moves;
pub mod rules;

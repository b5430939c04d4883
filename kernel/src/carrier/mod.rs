//! Carrier module: positions, the grid model, and the crawler state value.

pub mod grid;
pub mod position;
pub mod state;

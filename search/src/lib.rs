//! Crawler Search: bounded-frontier graph search ordered by novelty.
//!
//! This crate provides the search layer. It depends only on `crawler_kernel`;
//! it does NOT depend on `crawler_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! crawler_kernel  ←  crawler_search  ←  crawler_harness
//! (state model)      (frontier, nodes)   (loader, worlds, runner)
//! ```
//!
//! # Key types
//!
//! - [`node::SearchNode`]: immutable node with parent link and path cost
//! - [`novelty::Novelty`]: exact mean Manhattan distance to frontier peers
//! - [`frontier::NoveltyFrontier`]: capacity-bounded working set
//! - [`graph::SearchGraph`]: expansion-event audit log
//! - [`policy::SearchPolicy`]: capacity and expansion budget
//! - [`contract::SearchWorld`]: trait for worlds that support search
//!
//! # Completeness
//!
//! The search is NOT complete: bounding the frontier to `capacity` nodes can
//! permanently discard every node on every path to a goal. A run that ends
//! in [`graph::TerminationReason::FrontierExhausted`] only means that no goal
//! was found under this bound.

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod node;
pub mod novelty;
pub mod policy;
pub mod search;

#[cfg(test)]
mod testing;

//! Crawler Kernel: the deterministic state model of the crawler puzzle.
//!
//! # API Surface
//!
//! - [`carrier::grid::GridModel`] -- validated, immutable walls / goal / start
//! - [`operators::rules::CrawlerRules`] -- legal moves and the transition function
//! - [`proof::replay::execute`] -- replay a move sequence from a state
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `operators` ← `proof`
//!
//! `operators` depends on `carrier`. `proof` depends on both, except for the
//! canonical hash, which `carrier` uses for state fingerprints.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod operators;
pub mod proof;

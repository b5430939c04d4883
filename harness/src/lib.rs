//! Crawler Harness: puzzle loading and run orchestration.
//!
//! The harness turns grid text into a validated [`GridModel`], wraps it in a
//! [`worlds::crawler::CrawlerWorld`] that implements the generic search
//! contract, and runs the search through [`runner::run`].
//!
//! The harness does NOT implement search or transition logic; it delegates
//! to `crawler_search` and `crawler_kernel`.
//!
//! [`GridModel`]: crawler_kernel::carrier::grid::GridModel

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod loader;
pub mod runner;
pub mod worlds;

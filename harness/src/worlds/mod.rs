//! World implementations for the harness runner.

pub mod crawler;
pub mod fixtures;

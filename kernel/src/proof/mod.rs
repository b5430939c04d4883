//! Proof module: canonical hashing and deterministic replay.

pub mod hash;
pub mod replay;

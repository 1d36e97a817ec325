//! Terminal 2048.
//!
//! The rule engine lives in `core` (grid, slide-and-merge, spawning) and
//! `policy` (heuristic auto-play); both are pure and deterministic under a
//! seeded `SimpleRng`. `input` and `term` are the thin keyboard and
//! rendering layers around them.

pub mod cli;
pub mod core;
pub mod input;
pub mod policy;
pub mod term;
pub mod types;

//! # League Almanac
//!
//! Cross-league fantasy sports aggregation and ranking engine.
//!
//! Turns already-parsed per-team statistics from independent fantasy
//! leagues into comparable outputs: tie-averaged rank points per category,
//! composite power rankings, head-to-head records with streaks, keeper
//! round eligibility, and multi-season standings.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (teams, categories, matchups,
//!   seasons, keeper candidates)
//! - **calculate**: Pure scoring and aggregation functions
//! - **config**: Configuration loading and validation
//!
//! The engine performs no I/O and holds no state between invocations;
//! every entry point is a deterministic function of its inputs.

pub mod calculate;
pub mod config;
pub mod models;

pub use models::*;

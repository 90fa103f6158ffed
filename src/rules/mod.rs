//! Wolf scoring rules.
//!
//! - `scoring`: point arithmetic and the leaderboard
//! - `decision`: maps a scorer's per-hole answers onto an engine outcome

pub mod decision;
pub mod scoring;

pub use decision::{HoleDecision, HoleWinner, WolfStrategy};
pub use scoring::{hole_points, standings, Standing};

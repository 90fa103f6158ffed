//! # wolf-golf
//!
//! Scoring engine for the golf betting game "Wolf".
//!
//! On every hole one player is the Wolf. The Wolf picks a partner, goes
//! solo after seeing the tee shots, or goes solo before anyone tees off.
//! The winning side is paid `(carry_over + 1) * multiplier` points each,
//! where the multiplier is 1, 2 or 3 for those choices and the carry-over
//! counts the tied holes just before this one.
//!
//! ## Design Principles
//!
//! 1. **Closed choices**: win types and hole outcomes are enums, so an
//!    invalid tag or a tie with a winning team can't be constructed.
//!
//! 2. **Fixed rotation**: the wolf order is drawn once, by a single seeded
//!    shuffle, and cycles by hole number for the rest of the game.
//!
//! 3. **Explicit persistence**: nothing touches the disk except `Session`,
//!    and only at start and after each change.
//!
//! ## Modules
//!
//! - `core`: players, holes, the `WolfGame` engine, RNG, configuration, errors
//! - `rules`: point arithmetic, standings, hole-entry resolution
//! - `session`: the scorer's session and snapshot store

pub mod core;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    EngineConfig, GameRng, HoleOutcome, HoleResult, PlayerId, PlayerMap, Result, Roster, Team,
    WinType, WolfError, WolfGame,
};

pub use crate::rules::{hole_points, HoleDecision, HoleWinner, Standing, WolfStrategy};

pub use crate::session::Session;

//! Core engine types: players, holes, game state, RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod hole;
pub mod player;
pub mod rng;
pub mod state;

pub use config::EngineConfig;
pub use error::{Result, WolfError};
pub use hole::{HoleOutcome, HoleResult, Team, WinType, TIE_TEXT};
pub use player::{PlayerId, PlayerMap, Roster, MAX_PLAYERS};
pub use rng::GameRng;
pub use state::{generate_rotation, WolfGame};

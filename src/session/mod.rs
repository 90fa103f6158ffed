//! Session state and persistence.
//!
//! `Session` holds the game for one scorer and saves a whole-game snapshot
//! after every change. `store` does the encoding and file handling.

pub mod manager;
pub mod store;

pub use manager::Session;
pub use store::SNAPSHOT_VERSION;

//! Whole-game snapshots on disk.
//!
//! A snapshot is the complete `WolfGame` behind a format version, encoded
//! with bincode. Writes go to a sibling temp file first and are renamed
//! into place, so a reader never sees a half-written game.

use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::core::error::{Result, WolfError};
use crate::core::state::WolfGame;

/// Current snapshot format.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    game: &'a WolfGame,
}

#[derive(Deserialize)]
struct Snapshot {
    version: u32,
    game: WolfGame,
}

/// Encode a game into snapshot bytes.
pub fn encode(game: &WolfGame) -> Result<Vec<u8>> {
    let snapshot = SnapshotRef {
        version: SNAPSHOT_VERSION,
        game,
    };
    bincode::serialize(&snapshot).map_err(|e| WolfError::Codec(e.to_string()))
}

/// Decode snapshot bytes, rejecting other versions and inconsistent games.
pub fn decode(bytes: &[u8]) -> Result<WolfGame> {
    let snapshot: Snapshot =
        bincode::deserialize(bytes).map_err(|e| WolfError::Codec(e.to_string()))?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(WolfError::SnapshotVersion {
            found: snapshot.version,
            expected: SNAPSHOT_VERSION,
        });
    }
    snapshot.game.check_consistency()?;
    Ok(snapshot.game)
}

/// Write a snapshot to `path`.
pub fn save(path: &Path, game: &WolfGame) -> Result<()> {
    let bytes = encode(game)?;
    let tmp = temp_path(path);
    std::fs::write(&tmp, bytes).map_err(|e| io_error(&tmp, &e))?;
    std::fs::rename(&tmp, path).map_err(|e| io_error(path, &e))?;
    Ok(())
}

/// Read the snapshot at `path`, or `None` if there isn't one.
pub fn load(path: &Path) -> Result<Option<WolfGame>> {
    match std::fs::read(path) {
        Ok(bytes) => decode(&bytes).map(Some),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(io_error(path, &e)),
    }
}

/// Delete the snapshot at `path` if present.
pub fn remove(path: &Path) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(io_error(path, &e)),
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn io_error(path: &Path, e: &std::io::Error) -> WolfError {
    WolfError::Io(format!("{}: {e}", path.display()))
}

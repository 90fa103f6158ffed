//! A scorer's session: the current game plus explicit save/load points.

use std::path::Path;

use crate::core::config::EngineConfig;
use crate::core::error::{Result, WolfError};
use crate::core::hole::HoleResult;
use crate::core::rng::GameRng;
use crate::core::state::WolfGame;
use crate::rules::decision::HoleDecision;

use super::store;

/// Owns the game in progress and persists it after every change.
///
/// The snapshot is read once by `load` and written by `start`, `submit`
/// and `save`. Reads never touch the disk.
#[derive(Debug)]
pub struct Session {
    config: EngineConfig,
    game: Option<WolfGame>,
}

impl Session {
    /// Open a session, resuming the saved game if one exists.
    pub fn load(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let game = store::load(&config.state_path)?;
        match &game {
            Some(g) => tracing::info!(
                path = %config.state_path.display(),
                hole = g.current_hole(),
                "Resumed saved game"
            ),
            None => tracing::info!(path = %config.state_path.display(), "No saved game"),
        }
        Ok(Self { config, game })
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn game(&self) -> Option<&WolfGame> {
        self.game.as_ref()
    }

    #[must_use]
    pub fn state_path(&self) -> &Path {
        &self.config.state_path
    }

    /// Start a new game, replacing any game in progress.
    pub fn start<I, S>(&mut self, names: I) -> Result<&WolfGame>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        self.config.check_player_count(names.len())?;

        let seed = self
            .config
            .seed
            .unwrap_or_else(|| GameRng::from_entropy().seed());
        let game = WolfGame::new(names, seed)?;
        tracing::info!(players = game.player_count(), seed, "Started game");

        store::save(&self.config.state_path, &game)?;
        Ok(&*self.game.insert(game))
    }

    /// Record the scorer's entry for the current hole, move to the next hole
    /// and save.
    ///
    /// The hole is applied to a copy that replaces the session's game only
    /// once it is on disk. On any error the game is left as it was.
    pub fn submit(&mut self, decision: HoleDecision) -> Result<HoleResult> {
        let game = self.game.as_ref().ok_or(WolfError::NoActiveGame)?;

        let mut next = game.clone();
        let outcome = decision.resolve(&next)?;
        let wolf = next.current_wolf();
        let result = next.record_hole(wolf, outcome)?.clone();
        next.advance_hole();

        store::save(&self.config.state_path, &next)?;
        tracing::info!(
            path = %self.config.state_path.display(),
            hole = next.current_hole(),
            "Saved game"
        );
        self.game = Some(next);
        Ok(result)
    }

    /// Write the current game to the state file.
    pub fn save(&self) -> Result<()> {
        let game = self.game.as_ref().ok_or(WolfError::NoActiveGame)?;
        store::save(&self.config.state_path, game)?;
        tracing::info!(
            path = %self.config.state_path.display(),
            hole = game.current_hole(),
            "Saved game"
        );
        Ok(())
    }

    /// Drop the game in progress and delete its state file.
    pub fn reset(&mut self) -> Result<()> {
        store::remove(&self.config.state_path)?;
        self.game = None;
        tracing::info!(path = %self.config.state_path.display(), "Reset game");
        Ok(())
    }
}

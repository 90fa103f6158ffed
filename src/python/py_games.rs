//! Game bindings for Python.

use pyo3::prelude::*;
use pyo3::types::PyBytes;
use std::collections::HashMap;

use crate::core::{GameRng, HoleOutcome, WinType, WolfGame};
use crate::session::store;

use super::py_core::PyHoleResult;

/// Python wrapper for WolfGame.
///
/// Players and teams are passed by name; win types use the tags
/// `"team"`, `"solo_post"` and `"solo_pre"`.
#[pyclass(name = "WolfGame")]
pub struct PyWolfGame {
    game: WolfGame,
}

#[pymethods]
impl PyWolfGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - players: Unique player names
    /// - seed: RNG seed for the wolf rotation; random if omitted
    #[new]
    #[pyo3(signature = (players, seed = None))]
    fn new(players: Vec<String>, seed: Option<u64>) -> PyResult<Self> {
        let seed = seed.unwrap_or_else(|| GameRng::from_entropy().seed());
        Ok(Self {
            game: WolfGame::new(players, seed)?,
        })
    }

    #[getter]
    fn players(&self) -> Vec<String> {
        self.game
            .roster()
            .iter()
            .map(|(_, name)| name.to_string())
            .collect()
    }

    /// Wolf order by name.
    #[getter]
    fn rotation(&self) -> Vec<String> {
        self.game
            .rotation()
            .iter()
            .map(|&p| self.name(p))
            .collect()
    }

    #[getter]
    fn current_hole(&self) -> u32 {
        self.game.current_hole()
    }

    #[getter]
    fn carry_over_points(&self) -> u32 {
        self.game.carry_over()
    }

    fn get_wolf_for_hole(&self, hole: u32) -> String {
        self.name(self.game.wolf_for_hole(hole))
    }

    /// Record the current hole. `team` and `win_type` are ignored for a tie.
    #[pyo3(signature = (wolf, team, win_type, is_tie))]
    fn record_hole(
        &mut self,
        wolf: &str,
        team: Vec<String>,
        win_type: &str,
        is_tie: bool,
    ) -> PyResult<PyHoleResult> {
        let roster = self.game.roster();
        let wolf = roster
            .id_of(wolf)
            .ok_or_else(|| crate::core::WolfError::UnknownPlayer(wolf.to_string()))?;

        let outcome = if is_tie {
            HoleOutcome::Tie
        } else {
            let win_type: WinType = win_type.parse()?;
            HoleOutcome::won(&roster.resolve(&team)?, win_type)
        };

        let result = self.game.record_hole(wolf, outcome)?.clone();
        Ok(PyHoleResult::from_result(&self.game, &result))
    }

    fn advance_hole(&mut self) {
        self.game.advance_hole();
    }

    fn get_scores(&self) -> HashMap<String, i64> {
        self.game.scores().into_iter().collect()
    }

    fn get_hole_summary(&self) -> Vec<PyHoleResult> {
        self.game
            .hole_summary()
            .iter()
            .map(|r| PyHoleResult::from_result(&self.game, r))
            .collect()
    }

    /// Snapshot bytes, readable by `WolfGame.from_bytes`.
    fn to_bytes<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let bytes = store::encode(&self.game)?;
        Ok(PyBytes::new_bound(py, &bytes))
    }

    #[staticmethod]
    fn from_bytes(data: &[u8]) -> PyResult<Self> {
        Ok(Self {
            game: store::decode(data)?,
        })
    }

    fn __repr__(&self) -> String {
        format!(
            "WolfGame(players={:?}, hole={}, carry_over={})",
            self.players(),
            self.game.current_hole(),
            self.game.carry_over()
        )
    }
}

impl PyWolfGame {
    fn name(&self, player: crate::core::PlayerId) -> String {
        self.game.player_name(player).unwrap_or_default().to_string()
    }
}

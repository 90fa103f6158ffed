//! Core type bindings for Python.

use pyo3::exceptions::{PyOSError, PyValueError};
use pyo3::prelude::*;

use crate::core::{HoleResult, WolfError, WolfGame};

impl From<WolfError> for PyErr {
    fn from(err: WolfError) -> Self {
        match err {
            WolfError::Io(_) => PyOSError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Python view of one hole log entry.
///
/// Player references are resolved to names.
#[pyclass(name = "HoleResult", frozen)]
#[derive(Clone, Debug)]
pub struct PyHoleResult {
    #[pyo3(get)]
    hole: u32,
    #[pyo3(get)]
    wolf: String,
    #[pyo3(get)]
    result: String,
    #[pyo3(get)]
    points_awarded: i64,
    #[pyo3(get)]
    carry_over: u32,
    #[pyo3(get)]
    winners: Vec<String>,
    /// `None` for a tie.
    #[pyo3(get)]
    win_type: Option<String>,
}

impl PyHoleResult {
    pub(crate) fn from_result(game: &WolfGame, result: &HoleResult) -> Self {
        let name = |p| game.player_name(p).unwrap_or_default().to_string();
        Self {
            hole: result.hole,
            wolf: name(result.wolf),
            result: result.result.clone(),
            points_awarded: result.points_awarded,
            carry_over: result.carry_over,
            winners: result.winners.iter().map(|&p| name(p)).collect(),
            win_type: result.win_type.map(|w| w.tag().to_string()),
        }
    }
}

#[pymethods]
impl PyHoleResult {
    fn __repr__(&self) -> String {
        format!(
            "HoleResult(hole={}, wolf={:?}, result={:?}, points_awarded={}, carry_over={})",
            self.hole, self.wolf, self.result, self.points_awarded, self.carry_over
        )
    }
}

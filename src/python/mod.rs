//! Python bindings for the wolf-golf scoring engine.
//!
//! Lets a Python front end (forms, pages) keep its UI and hand the scoring
//! to Rust.
//!
//! # Quick Start
//!
//! ```python
//! import wolf_golf
//!
//! game = wolf_golf.WolfGame(["Ann", "Bob", "Cat"], seed=42)
//!
//! wolf = game.get_wolf_for_hole(game.current_hole)
//! game.record_hole(wolf, [wolf], "solo_pre", is_tie=False)
//! game.advance_hole()
//!
//! print(game.get_scores())
//! open("game_state.bin", "wb").write(game.to_bytes())
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// wolf_golf: scoring engine for the Wolf golf betting game.
#[pymodule]
fn wolf_golf(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyHoleResult>()?;
    m.add_class::<PyWolfGame>()?;
    Ok(())
}

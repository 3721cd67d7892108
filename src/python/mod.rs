//! Python bindings for the party-quiz session engine.
//!
//! A Python front end drives the same engine a Rust one would: read the
//! session through getters, call operations, and treat a raised
//! `ValueError` as a refused (no-op) operation.
//!
//! # Quick Start
//!
//! ```python
//! import party_quiz as pq
//!
//! session = pq.QuizSession.from_catalog_file("data/questions.json", seed=42)
//! session.add_player("Ada")
//! session.add_player("Bo")
//! session.start_game()
//!
//! print(session.current_player.name, session.current_question.text)
//! session.skip_turn()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_session;

pub use py_core::*;
pub use py_session::*;

/// party_quiz: turn-based party quiz session engine.
#[pymodule]
fn party_quiz(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core types
    m.add_class::<PyPlayer>()?;
    m.add_class::<PyQuestion>()?;

    // Session
    m.add_class::<PyQuizSession>()?;

    Ok(())
}

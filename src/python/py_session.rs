//! Session bindings for Python.

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use crate::catalog::{Catalog, CatalogError};
use crate::core::{ConfigError, SessionConfig};
use crate::rules::{Rejection, SessionEngine, TurnOutcome};

use super::py_core::{PyPlayer, PyQuestion};

fn refused(reason: Rejection) -> PyErr {
    PyValueError::new_err(reason.to_string())
}

fn catalog_err(err: CatalogError) -> PyErr {
    match err {
        CatalogError::Read { .. } => PyIOError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

fn config_err(err: ConfigError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn outcome_name(outcome: &TurnOutcome) -> &'static str {
    match outcome {
        TurnOutcome::Answered { .. } => "answered",
        TurnOutcome::LifeLost { .. } => "life_lost",
        TurnOutcome::Eliminated { .. } => "eliminated",
        TurnOutcome::GameOver { .. } => "game_over",
    }
}

/// Python wrapper for SessionEngine.
///
/// Refused operations raise `ValueError` and leave the session unchanged.
#[pyclass(name = "QuizSession")]
pub struct PyQuizSession {
    engine: SessionEngine,
}

impl PyQuizSession {
    fn build(catalog: Catalog, seed: Option<u64>, health_variant: bool) -> PyResult<Self> {
        let mut config = SessionConfig::default().with_health_variant(health_variant);
        config.seed = seed;
        let engine = SessionEngine::new(catalog, config).map_err(config_err)?;
        Ok(Self { engine })
    }
}

#[pymethods]
impl PyQuizSession {
    /// Create a session from a catalog JSON string.
    ///
    /// # Arguments
    /// - catalog_json: Array of {category, emoji, questions}
    /// - seed: RNG seed for reproducible draws (None = random)
    /// - health_variant: Whether skipping costs a life
    #[new]
    #[pyo3(signature = (catalog_json, seed = None, health_variant = true))]
    fn new(catalog_json: &str, seed: Option<u64>, health_variant: bool) -> PyResult<Self> {
        let catalog = Catalog::from_json_str(catalog_json).map_err(catalog_err)?;
        Self::build(catalog, seed, health_variant)
    }

    /// Create a session from a catalog file.
    #[staticmethod]
    #[pyo3(signature = (path, seed = None, health_variant = true))]
    fn from_catalog_file(path: &str, seed: Option<u64>, health_variant: bool) -> PyResult<Self> {
        let catalog = Catalog::from_path(path).map_err(catalog_err)?;
        Self::build(catalog, seed, health_variant)
    }

    // === Operations ===

    /// Add a player; returns their stable ID.
    fn add_player(&mut self, name: &str) -> PyResult<u32> {
        self.engine.add_player(name).map(|id| id.raw()).map_err(refused)
    }

    /// Remove the player at a roster position (setup only).
    fn remove_player(&mut self, index: usize) -> PyResult<PyPlayer> {
        self.engine.remove_player(index).map(PyPlayer).map_err(refused)
    }

    /// Remove the player at a roster position, keeping at least one.
    fn kick_player(&mut self, index: usize) -> PyResult<PyPlayer> {
        self.engine.kick_player(index).map(PyPlayer).map_err(refused)
    }

    /// Toggle a category name, or "All".
    fn toggle_category(&mut self, name: &str) -> PyResult<()> {
        self.engine.toggle_category(name).map_err(refused)
    }

    fn select_all_categories(&mut self) {
        self.engine.select_all_categories();
    }

    fn deselect_all_categories(&mut self) {
        self.engine.deselect_all_categories();
    }

    /// Start the game; returns the first question, if any.
    fn start_game(&mut self) -> PyResult<Option<PyQuestion>> {
        self.engine
            .start_game()
            .map(|q| q.map(PyQuestion))
            .map_err(refused)
    }

    /// Current player answered. Returns the outcome name.
    fn advance_turn(&mut self) -> PyResult<&'static str> {
        self.engine
            .advance_turn()
            .map(|outcome| outcome_name(&outcome))
            .map_err(refused)
    }

    /// Current player skipped. Returns the outcome name.
    fn skip_turn(&mut self) -> PyResult<&'static str> {
        self.engine
            .skip_turn()
            .map(|outcome| outcome_name(&outcome))
            .map_err(refused)
    }

    fn reset_game(&mut self) {
        self.engine.reset_game();
    }

    // === State ===

    /// "setup", "active" or "ended".
    #[getter]
    fn phase(&self) -> String {
        self.engine.session().phase().to_string()
    }

    #[getter]
    fn players(&self) -> Vec<PyPlayer> {
        self.engine.session().roster().iter().cloned().map(PyPlayer).collect()
    }

    #[getter]
    fn current_index(&self) -> usize {
        self.engine.session().current_index()
    }

    #[getter]
    fn current_player(&self) -> Option<PyPlayer> {
        self.engine.current_player().cloned().map(PyPlayer)
    }

    #[getter]
    fn current_question(&self) -> Option<PyQuestion> {
        self.engine.session().current_question().cloned().map(PyQuestion)
    }

    #[getter]
    fn winner(&self) -> Option<PyPlayer> {
        self.engine.session().winner().cloned().map(PyPlayer)
    }

    /// Explicitly selected category names; empty when "All" is active.
    #[getter]
    fn selected_categories(&self) -> Vec<String> {
        self.engine
            .session()
            .filter()
            .selected_names()
            .map(str::to_string)
            .collect()
    }

    #[getter]
    fn all_categories_selected(&self) -> bool {
        self.engine.all_categories_selected()
    }

    /// Category names in catalog order.
    #[getter]
    fn categories(&self) -> Vec<String> {
        self.engine.catalog().names().map(str::to_string).collect()
    }

    #[getter]
    fn used_count(&self) -> usize {
        self.engine.used_count()
    }

    #[getter]
    fn available_count(&self) -> usize {
        self.engine.available_count()
    }

    #[getter]
    fn out_of_questions(&self) -> bool {
        self.engine.session().is_out_of_questions()
    }

    #[getter]
    fn can_start(&self) -> bool {
        self.engine.can_start()
    }

    /// Session snapshot as JSON.
    fn snapshot_json(&self) -> PyResult<String> {
        serde_json::to_string(self.engine.session()).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        let session = self.engine.session();
        format!(
            "QuizSession(phase={}, players={}, question {} of {})",
            session.phase(),
            session.roster().len(),
            self.engine.used_count(),
            self.engine.available_count()
        )
    }
}

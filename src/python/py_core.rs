//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::catalog::Question;
use crate::core::Player;

/// Python wrapper for Player.
#[pyclass(name = "Player")]
#[derive(Clone, Debug)]
pub struct PyPlayer(pub Player);

#[pymethods]
impl PyPlayer {
    /// Stable player ID.
    #[getter]
    fn id(&self) -> u32 {
        self.0.id.raw()
    }

    #[getter]
    fn name(&self) -> String {
        self.0.name.clone()
    }

    /// Remaining lives.
    #[getter]
    fn health(&self) -> u8 {
        self.0.health
    }

    #[getter]
    fn emoji(&self) -> String {
        self.0.emoji.clone()
    }

    fn __repr__(&self) -> String {
        format!("Player(id={}, name={:?}, health={})", self.0.id.raw(), self.0.name, self.0.health)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.id.raw() as u64
    }
}

/// Python wrapper for a drawn Question.
#[pyclass(name = "Question")]
#[derive(Clone, Debug)]
pub struct PyQuestion(pub Question);

#[pymethods]
impl PyQuestion {
    #[getter]
    fn text(&self) -> String {
        self.0.text.clone()
    }

    /// Name of the category it was drawn from.
    #[getter]
    fn category(&self) -> String {
        self.0.category.clone()
    }

    #[getter]
    fn emoji(&self) -> String {
        self.0.emoji.clone()
    }

    fn __repr__(&self) -> String {
        format!("Question({:?}, category={:?})", self.0.text, self.0.category)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.text.hash(&mut hasher);
        hasher.finish()
    }
}

//! Session rules: the engine that owns a quiz session and every
//! transition on it.
//!
//! The presentation layer holds a `SessionEngine`, renders
//! `engine.session()`, and calls operations (or `apply`) in response to
//! user input. Refused operations return a `Rejection` and change nothing.

pub mod engine;

pub use engine::{Rejection, SessionEngine, TurnOutcome};

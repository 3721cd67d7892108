//! # party-quiz
//!
//! Session engine for a turn-based party quiz game.
//!
//! Players take turns answering prompts drawn at random from the selected
//! categories. In the health variant a skipped turn costs a life, and
//! players at zero lives are eliminated until one remains.
//!
//! ## Design Principles
//!
//! 1. **Single writer**: `SessionEngine` is the only code that changes a
//!    `Session`. Presentation layers read the snapshot and call operations.
//!
//! 2. **Refuse, don't corrupt**: an operation that does not apply in the
//!    current state returns a `Rejection` and leaves everything untouched.
//!
//! 3. **Injectable randomness**: draws go through `RandomSource`, so games
//!    are reproducible from a seed and tests can script exact sequences.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: sessions use `im` collections, so each
//!   transition clones in O(1) and swaps the whole snapshot.
//!
//! - **Stable Player Ids**: turn order is positional, but every player also
//!   carries a `PlayerId` that survives roster shifts.
//!
//! - **Action History**: accepted actions are recorded; `SessionEngine::replay`
//!   rebuilds a session from them.
//!
//! ## Modules
//!
//! - `core`: players, roster, session state, actions, RNG, configuration
//! - `catalog`: categories, questions, category filter
//! - `rules`: the session engine

pub mod core;
pub mod catalog;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerId, Roster, PLAYER_EMOJIS,
    GameRng, GameRngState, RandomSource, ScriptedSource,
    ConfigError, SessionConfig,
    ActionRecord, SessionAction,
    Phase, Session,
};

pub use crate::catalog::{Catalog, CatalogError, Category, CategoryFilter, Question, ALL_CATEGORIES};

pub use crate::rules::{Rejection, SessionEngine, TurnOutcome};

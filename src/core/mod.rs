//! Core session types: players, state, actions, RNG, configuration.
//!
//! Everything here is plain data plus the small invariant-keeping helpers
//! the engine uses. Transitions live in `rules`.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{Player, PlayerId, Roster, PLAYER_EMOJIS};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedSource};
pub use config::{ConfigError, SessionConfig};
pub use action::{ActionRecord, SessionAction};
pub use state::{Phase, Session};

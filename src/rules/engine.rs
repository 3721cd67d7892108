//! The session engine: every state transition of a quiz game.
//!
//! ## Transitions
//!
//! Each operation validates against the current snapshot first and, if it
//! is refused, returns a `Rejection` without touching anything (including
//! the RNG). Accepted operations clone the session, edit the clone, record
//! the action, and replace the snapshot wholesale.
//!
//! ## Turn order
//!
//! Answering passes the turn to the next roster slot. In the health
//! variant, skipping costs a life; a player at zero lives is removed and
//! the turn stays on their slot, which now belongs to the next player.
//!
//! ## Example
//!
//! ```
//! use party_quiz::{Catalog, Category, Phase, ScriptedSource, SessionConfig, SessionEngine};
//!
//! let catalog = Catalog::new(vec![
//!     Category::new("Math", "➗").with_questions(["Is zero even?", "Name a prime."]),
//! ]).unwrap();
//! let mut engine = SessionEngine::with_rng(catalog, SessionConfig::default(), ScriptedSource::first()).unwrap();
//!
//! engine.add_player("Ada").unwrap();
//! engine.add_player("Bo").unwrap();
//! engine.start_game().unwrap();
//!
//! assert_eq!(engine.session().phase(), Phase::Active);
//! assert_eq!(engine.session().current_question().unwrap().text, "Is zero even?");
//! ```

use std::sync::Arc;

use thiserror::Error;

use crate::catalog::{Catalog, CategoryFilter, Question, ALL_CATEGORIES};
use crate::core::{
    ConfigError, GameRng, GameRngState, Phase, Player, PlayerId, RandomSource, Session, SessionAction,
    SessionConfig,
};

/// Why an operation was refused. The session is unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("player name is empty")]
    EmptyName,
    #[error("roster is full ({0} players)")]
    RosterFull(usize),
    #[error("no player at position {0}")]
    NoSuchPlayer(usize),
    #[error("cannot remove the last player")]
    LastPlayer,
    #[error("unknown category {0:?}")]
    UnknownCategory(String),
    #[error("game is not in setup")]
    NotInSetup,
    #[error("need at least {needed} players, have {have}")]
    NotEnoughPlayers { needed: usize, have: usize },
    #[error("no categories selected")]
    NoCategories,
    #[error("game is not active")]
    NotActive,
    #[error("no question left to answer")]
    OutOfQuestions,
    #[error("health variant is disabled")]
    HealthVariantDisabled,
}

/// What a completed turn did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Question answered; the turn passed on.
    Answered { next: PlayerId },
    /// Skipped and lost a life; the turn passed on.
    LifeLost { player: PlayerId, health: u8, next: PlayerId },
    /// Skipped on the last life and removed; `next` now holds the same slot.
    Eliminated { player: Player, next: PlayerId },
    /// Elimination left one player (or none) standing.
    GameOver { eliminated: Player, winner: Option<Player> },
}

impl TurnOutcome {
    /// Check if this turn ended the game.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, TurnOutcome::GameOver { .. })
    }
}

fn rejected(action: &str, reason: Rejection) -> Rejection {
    log::debug!("Rejected {}: {}", action, reason);
    reason
}

/// Owns one quiz session and the catalog it draws from.
///
/// `R` is the randomness used for draws: `GameRng` in play, a
/// `ScriptedSource` when a test needs exact sequences.
///
/// The action history is never trimmed, resets included, so it grows by
/// one record per accepted action for the life of the engine. A fresh
/// history means a fresh engine.
#[derive(Clone, Debug)]
pub struct SessionEngine<R = GameRng> {
    catalog: Arc<Catalog>,
    config: SessionConfig,
    rng: R,
    session: Session,
}

impl SessionEngine<GameRng> {
    /// Create an engine seeded from `config.seed`.
    ///
    /// Without a seed one is taken from the OS and written back into the
    /// stored config, so `config()` always holds what `replay` needs.
    pub fn new(catalog: impl Into<Arc<Catalog>>, mut config: SessionConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        config.seed = Some(rng.seed());
        Self::with_rng(catalog, config, rng)
    }

    /// Rebuild a session by re-applying actions from a fresh engine.
    ///
    /// With the same seed and catalog the result matches the session the
    /// actions were recorded from. Rejected actions are skipped, as they
    /// were originally.
    pub fn replay(
        catalog: impl Into<Arc<Catalog>>,
        config: SessionConfig,
        actions: impl IntoIterator<Item = SessionAction>,
    ) -> Result<Self, ConfigError> {
        let mut engine = Self::new(catalog, config)?;
        for action in actions {
            // Refusals replay as refusals.
            let _ = engine.apply(action);
        }
        Ok(engine)
    }

    /// Resume from a saved session and RNG position.
    ///
    /// The resumed engine draws exactly what the engine the snapshot was
    /// taken from would have drawn next. The stored config seed is set to
    /// the snapshot's.
    pub fn from_snapshot(
        catalog: impl Into<Arc<Catalog>>,
        mut config: SessionConfig,
        session: Session,
        rng_state: &GameRngState,
    ) -> Result<Self, ConfigError> {
        config.seed = Some(rng_state.seed);
        let mut engine = Self::with_rng(catalog, config, GameRng::from_state(rng_state))?;
        engine.session = session;
        Ok(engine)
    }

    /// Snapshot of the RNG stream position.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl<R: RandomSource> SessionEngine<R> {
    /// Create an engine drawing through a caller-supplied source.
    pub fn with_rng(catalog: impl Into<Arc<Catalog>>, config: SessionConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            catalog: catalog.into(),
            config,
            rng,
            session: Session::new(),
        })
    }

    // === Queries ===

    /// The current snapshot.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The catalog questions are drawn from.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Rules in force.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.session.current_player()
    }

    /// Every question the current filter pools, in catalog order.
    #[must_use]
    pub fn filtered_questions(&self) -> Vec<Question> {
        self.catalog.filtered_questions(&self.session.filter)
    }

    /// Size of the filtered pool ("Y" in "question X of Y").
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.catalog.filtered_count(&self.session.filter)
    }

    /// Questions drawn this game ("X" in "question X of Y").
    #[must_use]
    pub fn used_count(&self) -> usize {
        self.session.used_count()
    }

    /// Filtered questions not yet drawn.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.catalog
            .filtered_questions(&self.session.filter)
            .iter()
            .filter(|q| !self.session.is_used(&q.text))
            .count()
    }

    /// Check if every catalog category is selected.
    #[must_use]
    pub fn all_categories_selected(&self) -> bool {
        self.catalog.covers_all(&self.session.filter)
    }

    /// Check if `start_game` would be accepted.
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.check_start().is_ok()
    }

    // === Drawing ===

    /// Draw a random unused question from the filtered pool.
    ///
    /// Uniform over the remaining candidates; `None` once the pool is
    /// covered by the used set. Does not mark the question used, and the
    /// draw is not recorded in the history.
    pub fn draw_question(&mut self) -> Option<Question> {
        Self::draw_for(&self.catalog, &mut self.rng, &self.session)
    }

    fn draw_for(catalog: &Catalog, rng: &mut R, session: &Session) -> Option<Question> {
        let mut candidates: Vec<Question> = catalog
            .filtered_questions(&session.filter)
            .into_iter()
            .filter(|q| !session.is_used(&q.text))
            .collect();

        if candidates.is_empty() {
            return None;
        }

        let pick = rng.pick_index(candidates.len());
        Some(candidates.swap_remove(pick))
    }

    /// Draw into `next`, marking the question used.
    fn draw_next(&mut self, next: &mut Session) {
        let question = Self::draw_for(&self.catalog, &mut self.rng, next);
        if let Some(question) = &question {
            next.mark_used(question);
        }
        next.current_question = question;
    }

    fn commit(&mut self, mut next: Session, action: SessionAction) {
        let sequence = next.record(action);
        if let Some(record) = next.history.get(sequence as usize) {
            log::debug!("#{} {} -> phase {}", record.sequence, record.action, next.phase);
        }
        self.session = next;
    }

    // === Roster ===

    /// Add a player at the end of the turn order.
    ///
    /// The name is trimmed; blank names and a full roster are refused.
    pub fn add_player(&mut self, name: &str) -> Result<PlayerId, Rejection> {
        let name = name.trim();
        if name.is_empty() {
            return Err(rejected("add_player", Rejection::EmptyName));
        }
        let slot = self.session.roster.len();
        if slot >= self.config.max_players {
            return Err(rejected("add_player", Rejection::RosterFull(self.config.max_players)));
        }

        let mut next = self.session.clone();
        let id = next.alloc_player_id();
        let emoji = self.config.emoji_for_slot(slot).to_string();
        next.roster.push(Player::new(id, name, self.config.starting_health, emoji));

        self.commit(next, SessionAction::AddPlayer(name.to_string()));
        Ok(id)
    }

    /// Remove the player at a roster position. Setup only; in-game
    /// removals go through `kick_player`.
    pub fn remove_player(&mut self, index: usize) -> Result<Player, Rejection> {
        if self.session.phase != Phase::Setup {
            return Err(rejected("remove_player", Rejection::NotInSetup));
        }
        if index >= self.session.roster.len() {
            return Err(rejected("remove_player", Rejection::NoSuchPlayer(index)));
        }
        self.remove_with(index, SessionAction::RemovePlayer(index))
    }

    /// Remove the player at a roster position unless they are the last one.
    pub fn kick_player(&mut self, index: usize) -> Result<Player, Rejection> {
        if self.session.roster.len() <= 1 {
            return Err(rejected("kick_player", Rejection::LastPlayer));
        }
        if index >= self.session.roster.len() {
            return Err(rejected("kick_player", Rejection::NoSuchPlayer(index)));
        }
        self.remove_with(index, SessionAction::KickPlayer(index))
    }

    fn remove_with(&mut self, index: usize, action: SessionAction) -> Result<Player, Rejection> {
        let mut next = self.session.clone();
        let removed = next
            .remove_player_at(index)
            .ok_or(Rejection::NoSuchPlayer(index))?;
        self.commit(next, action);
        Ok(removed)
    }

    // === Categories ===

    /// Toggle a category, or the `"All"` shortcut.
    pub fn toggle_category(&mut self, name: &str) -> Result<(), Rejection> {
        if name != ALL_CATEGORIES && !self.catalog.contains(name) {
            return Err(rejected("toggle_category", Rejection::UnknownCategory(name.to_string())));
        }

        let mut next = self.session.clone();
        next.filter.toggle(name);
        self.commit(next, SessionAction::ToggleCategory(name.to_string()));
        Ok(())
    }

    /// Select every category.
    pub fn select_all_categories(&mut self) {
        let mut next = self.session.clone();
        next.filter = CategoryFilter::All;
        self.commit(next, SessionAction::SelectAllCategories);
    }

    /// Clear the category selection.
    pub fn deselect_all_categories(&mut self) {
        let mut next = self.session.clone();
        next.filter = CategoryFilter::none();
        self.commit(next, SessionAction::DeselectAllCategories);
    }

    // === Game flow ===

    fn check_start(&self) -> Result<(), Rejection> {
        if self.session.phase != Phase::Setup {
            return Err(Rejection::NotInSetup);
        }
        let have = self.session.roster.len();
        if have < self.config.min_players {
            return Err(Rejection::NotEnoughPlayers {
                needed: self.config.min_players,
                have,
            });
        }
        if self.session.filter.is_empty() {
            return Err(Rejection::NoCategories);
        }
        Ok(())
    }

    fn check_turn(&self, action: &str) -> Result<(), Rejection> {
        if self.session.phase != Phase::Active {
            return Err(rejected(action, Rejection::NotActive));
        }
        if self.session.roster.is_empty() {
            return Err(rejected(action, Rejection::NotEnoughPlayers { needed: 1, have: 0 }));
        }
        if self.session.current_question.is_none() {
            return Err(rejected(action, Rejection::OutOfQuestions));
        }
        Ok(())
    }

    fn current_id(session: &Session) -> PlayerId {
        session
            .current_player()
            .map_or(PlayerId::new(0), |p| p.id)
    }

    /// Start the game and draw the first question.
    ///
    /// Returns the first question, or `None` if the pool is already empty.
    pub fn start_game(&mut self) -> Result<Option<Question>, Rejection> {
        self.check_start().map_err(|reason| rejected("start_game", reason))?;

        let mut next = self.session.clone();
        next.used.clear();
        self.draw_next(&mut next);
        next.winner = None;
        next.phase = Phase::Active;

        let first = next.current_question.clone();
        log::info!(
            "Game started: {} players, {} questions in pool",
            next.roster.len(),
            self.catalog.filtered_count(&next.filter)
        );
        self.commit(next, SessionAction::StartGame);
        Ok(first)
    }

    /// The current player answered: draw the next question and pass the turn.
    pub fn advance_turn(&mut self) -> Result<TurnOutcome, Rejection> {
        self.check_turn("advance_turn")?;

        let mut next = self.session.clone();
        self.draw_next(&mut next);
        next.pass_turn();

        let outcome = TurnOutcome::Answered {
            next: Self::current_id(&next),
        };
        self.commit(next, SessionAction::AdvanceTurn);
        Ok(outcome)
    }

    /// The current player skipped: costs a life in the health variant.
    ///
    /// At zero lives the player is removed. If that leaves one player the
    /// game ends with them as winner; otherwise the turn stays on the same
    /// slot (wrapping past the end) and a new question is drawn. With lives
    /// left the turn passes as if answered.
    pub fn skip_turn(&mut self) -> Result<TurnOutcome, Rejection> {
        if !self.config.health_variant {
            return Err(rejected("skip_turn", Rejection::HealthVariantDisabled));
        }
        self.check_turn("skip_turn")?;

        let mut next = self.session.clone();
        let index = next.current_index;
        let Some(player) = next.roster.get_mut(index) else {
            return Err(rejected("skip_turn", Rejection::NoSuchPlayer(index)));
        };
        player.health = player.health.saturating_sub(1);
        let (id, health) = (player.id, player.health);

        let outcome = if health == 0 {
            let Some(eliminated) = next.roster.remove(index) else {
                return Err(rejected("skip_turn", Rejection::NoSuchPlayer(index)));
            };

            if next.roster.len() <= 1 {
                next.phase = Phase::Ended;
                next.winner = next.roster.get(0).cloned();
                next.current_question = None;
                next.current_index = 0;

                match &next.winner {
                    Some(winner) => log::info!("{} eliminated; {} wins", eliminated.name, winner.name),
                    None => log::info!("{} eliminated; nobody left standing", eliminated.name),
                }
                TurnOutcome::GameOver {
                    winner: next.winner.clone(),
                    eliminated,
                }
            } else {
                if next.current_index >= next.roster.len() {
                    next.current_index = 0;
                }
                self.draw_next(&mut next);
                log::debug!("{} eliminated, {} players left", eliminated.name, next.roster.len());
                TurnOutcome::Eliminated {
                    player: eliminated,
                    next: Self::current_id(&next),
                }
            }
        } else {
            self.draw_next(&mut next);
            next.pass_turn();
            TurnOutcome::LifeLost {
                player: id,
                health,
                next: Self::current_id(&next),
            }
        };

        self.commit(next, SessionAction::SkipTurn);
        Ok(outcome)
    }

    /// Clear everything back to an empty setup with every category selected.
    pub fn reset_game(&mut self) {
        let mut next = self.session.clone();
        next.reset();
        log::info!("Session reset");
        self.commit(next, SessionAction::ResetGame);
    }

    /// Dispatch an action to its operation.
    pub fn apply(&mut self, action: SessionAction) -> Result<(), Rejection> {
        match action {
            SessionAction::AddPlayer(name) => self.add_player(&name).map(|_| ()),
            SessionAction::RemovePlayer(index) => self.remove_player(index).map(|_| ()),
            SessionAction::KickPlayer(index) => self.kick_player(index).map(|_| ()),
            SessionAction::ToggleCategory(name) => self.toggle_category(&name),
            SessionAction::SelectAllCategories => {
                self.select_all_categories();
                Ok(())
            }
            SessionAction::DeselectAllCategories => {
                self.deselect_all_categories();
                Ok(())
            }
            SessionAction::StartGame => self.start_game().map(|_| ()),
            SessionAction::AdvanceTurn => self.advance_turn().map(|_| ()),
            SessionAction::SkipTurn => self.skip_turn().map(|_| ()),
            SessionAction::ResetGame => {
                self.reset_game();
                Ok(())
            }
        }
    }
}

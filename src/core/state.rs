//! Session state: the snapshot a presentation layer renders.
//!
//! ## Session
//!
//! - Phase (setup, active, ended)
//! - Roster and whose turn it is
//! - Category filter
//! - Current question and the used-question set
//! - Winner of an elimination game
//! - History of accepted actions
//!
//! Fields are read through accessors only; `SessionEngine` is the single
//! writer. Collections are `im` persistent structures, so each transition
//! clones the whole session in O(1), edits the clone, and swaps it in.

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};

use super::action::{ActionRecord, SessionAction};
use super::player::{Player, PlayerId, Roster};
use crate::catalog::{CategoryFilter, Question};

/// Game phase.
///
/// `Setup -> Active -> Ended`, and back to `Setup` on reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Gathering players and choosing categories.
    #[default]
    Setup,
    /// Taking turns.
    Active,
    /// One player left standing.
    Ended,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Setup => "setup",
            Phase::Active => "active",
            Phase::Ended => "ended",
        };
        f.write_str(name)
    }
}

/// Complete session snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub(crate) phase: Phase,
    pub(crate) roster: Roster,
    /// Roster position of the current player. 0 when the roster is empty.
    pub(crate) current_index: usize,
    pub(crate) filter: CategoryFilter,
    pub(crate) current_question: Option<Question>,
    /// Texts drawn this game.
    pub(crate) used: OrdSet<String>,
    pub(crate) winner: Option<Player>,
    pub(crate) next_player_id: u32,
    pub(crate) history: Vector<ActionRecord>,
}

impl Session {
    /// Create an empty session in setup with every category selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Phase ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if turns are being taken.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    /// Check if the game is active but the pool ran dry.
    #[must_use]
    pub fn is_out_of_questions(&self) -> bool {
        self.is_active() && self.current_question.is_none()
    }

    // === Players ===

    /// Players in turn order.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Roster position of the current player.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.roster.get(self.current_index)
    }

    /// Winner of an ended elimination game.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.winner.as_ref()
    }

    // === Questions ===

    /// Which categories feed the pool.
    #[must_use]
    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// The question on the table.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.current_question.as_ref()
    }

    /// Check if a question text was already drawn this game.
    #[must_use]
    pub fn is_used(&self, text: &str) -> bool {
        self.used.contains(text)
    }

    /// Number of questions drawn this game.
    #[must_use]
    pub fn used_count(&self) -> usize {
        self.used.len()
    }

    /// Drawn question texts, sorted.
    pub fn used_questions(&self) -> impl Iterator<Item = &str> {
        self.used.iter().map(String::as_str)
    }

    // === History ===

    /// Accepted actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Accepted actions without sequence numbers, for replay.
    #[must_use]
    pub fn actions(&self) -> Vec<SessionAction> {
        self.history.iter().map(|r| r.action.clone()).collect()
    }

    // === Engine-side mutation ===

    pub(crate) fn alloc_player_id(&mut self) -> PlayerId {
        let id = PlayerId::new(self.next_player_id);
        self.next_player_id += 1;
        id
    }

    pub(crate) fn mark_used(&mut self, question: &Question) {
        self.used.insert(question.text.clone());
    }

    /// Remove a player, keeping the current index on a valid slot.
    ///
    /// Removing before the current player shifts the index down; removing
    /// the current player leaves the index on the same slot, wrapping to 0
    /// past the end.
    pub(crate) fn remove_player_at(&mut self, index: usize) -> Option<Player> {
        let removed = self.roster.remove(index)?;
        let len = self.roster.len();

        if index < self.current_index {
            self.current_index -= 1;
        } else if index == self.current_index {
            self.current_index = if len == 0 { 0 } else { self.current_index % len };
        }

        Some(removed)
    }

    /// Hand the turn to the next player in roster order.
    pub(crate) fn pass_turn(&mut self) {
        if !self.roster.is_empty() {
            self.current_index = (self.current_index + 1) % self.roster.len();
        }
    }

    /// Back to an empty setup. History is kept so the session stays replayable.
    pub(crate) fn reset(&mut self) {
        let history = std::mem::take(&mut self.history);
        *self = Self {
            history,
            ..Self::default()
        };
    }

    pub(crate) fn record(&mut self, action: SessionAction) -> u32 {
        let sequence = self.history.len() as u32;
        self.history.push_back(ActionRecord::new(sequence, action));
        sequence
    }
}

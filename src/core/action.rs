//! Session actions as data.
//!
//! Every user-triggered transition has a `SessionAction` variant, so a
//! presentation layer can route input through a single `apply` call and a
//! session can be replayed from its history.

use serde::{Deserialize, Serialize};

/// A user-triggered session transition.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionAction {
    /// Join a player with the given name.
    AddPlayer(String),
    /// Remove the player at a roster position.
    RemovePlayer(usize),
    /// Remove the player at a roster position, keeping at least one.
    KickPlayer(usize),
    /// Toggle a category name (or the `"All"` shortcut).
    ToggleCategory(String),
    /// Select every category.
    SelectAllCategories,
    /// Clear the category selection.
    DeselectAllCategories,
    /// Leave setup and draw the first question.
    StartGame,
    /// Current player answered; move on.
    AdvanceTurn,
    /// Current player skipped; costs a life in the health variant.
    SkipTurn,
    /// Back to an empty setup.
    ResetGame,
}

impl SessionAction {
    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddPlayer(_) => "add_player",
            Self::RemovePlayer(_) => "remove_player",
            Self::KickPlayer(_) => "kick_player",
            Self::ToggleCategory(_) => "toggle_category",
            Self::SelectAllCategories => "select_all_categories",
            Self::DeselectAllCategories => "deselect_all_categories",
            Self::StartGame => "start_game",
            Self::AdvanceTurn => "advance_turn",
            Self::SkipTurn => "skip_turn",
            Self::ResetGame => "reset_game",
        }
    }
}

impl std::fmt::Display for SessionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AddPlayer(name) => write!(f, "add_player({name:?})"),
            Self::RemovePlayer(index) | Self::KickPlayer(index) => write!(f, "{}({index})", self.name()),
            Self::ToggleCategory(name) => write!(f, "toggle_category({name:?})"),
            _ => f.write_str(self.name()),
        }
    }
}

/// An accepted action with its position in the session history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Sequence number since the session was created. Resets do not restart it.
    pub sequence: u32,

    /// The action taken.
    pub action: SessionAction,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(sequence: u32, action: SessionAction) -> Self {
        Self { sequence, action }
    }
}

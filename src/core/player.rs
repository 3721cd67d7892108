//! Player identification and the ordered roster.
//!
//! ## PlayerId
//!
//! Stable identifier assigned when a player joins. It never changes while
//! the player is in the session, unlike their roster position.
//!
//! ## Roster
//!
//! Ordered sequence of active players. Turn order is the roster order;
//! removing a player shifts everyone after them down one slot.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Default emoji palette, one per roster slot.
pub const PLAYER_EMOJIS: [&str; 8] = ["🎯", "🎮", "🎲", "🎪", "🎨", "🎭", "🎸", "🎤"];

/// Stable player identifier.
///
/// Allocated from a per-session counter, starting at 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player in the session.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Stable identity.
    pub id: PlayerId,
    /// Display name, already trimmed.
    pub name: String,
    /// Remaining lives.
    pub health: u8,
    /// Display token picked from the palette by join position.
    pub emoji: String,
}

impl Player {
    /// Create a new player.
    pub fn new(id: PlayerId, name: impl Into<String>, health: u8, emoji: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            health,
            emoji: emoji.into(),
        }
    }

    /// Check whether the player still has lives left.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.emoji, self.name)
    }
}

/// Ordered player list.
///
/// Backed by `im::Vector` so cloning a session is O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vector<Player>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Check if the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Get the player at a roster position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Get a mutable reference to the player at a roster position.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    /// Find a player by stable ID.
    #[must_use]
    pub fn find(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Current roster position of a player.
    #[must_use]
    pub fn position_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    /// Append a player at the end of the turn order.
    pub fn push(&mut self, player: Player) {
        self.players.push_back(player);
    }

    /// Remove the player at `index`, shifting later players down.
    ///
    /// Returns `None` if the index is out of range.
    pub fn remove(&mut self, index: usize) -> Option<Player> {
        if index < self.players.len() {
            Some(self.players.remove(index))
        } else {
            None
        }
    }

    /// Remove every player.
    pub fn clear(&mut self) {
        self.players.clear();
    }

    /// Iterate over players in turn order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Names in turn order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(|p| p.name.as_str())
    }

    /// Health values in turn order.
    #[must_use]
    pub fn healths(&self) -> Vec<u8> {
        self.players.iter().map(|p| p.health).collect()
    }
}

impl Index<usize> for Roster {
    type Output = Player;

    fn index(&self, index: usize) -> &Self::Output {
        &self.players[index]
    }
}

impl FromIterator<Player> for Roster {
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        Self {
            players: iter.into_iter().collect(),
        }
    }
}

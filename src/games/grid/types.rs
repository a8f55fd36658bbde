//! Core domain types for N×N tic-tac-toe.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Mark written to the board by a player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Player one's mark (moves first).
    X,
    /// Player two's mark.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Blank cell.
    #[default]
    Empty,
    /// Cell marked by a player.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Square::Empty => write!(f, "_"),
            Square::Occupied(mark) => write!(f, "{}", mark),
        }
    }
}

/// Index of a player in the game's two player slots.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter,
)]
pub enum PlayerSlot {
    /// First player, plays [`Mark::X`].
    #[default]
    One,
    /// Second player, plays [`Mark::O`].
    Two,
}

impl PlayerSlot {
    /// Returns the slot whose turn follows this one.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Returns the mark written by the player in this slot.
    pub fn mark(self) -> Mark {
        match self {
            Self::One => Mark::X,
            Self::Two => Mark::O,
        }
    }

    /// Slot of the player who writes `mark`.
    pub fn for_mark(mark: Mark) -> Self {
        match mark {
            Mark::X => Self::One,
            Mark::O => Self::Two,
        }
    }

    /// Position of this slot in a two-element array.
    pub(crate) fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

impl From<Mark> for PlayerSlot {
    fn from(mark: Mark) -> Self {
        Self::for_mark(mark)
    }
}

/// A participant in the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display label.
    name: String,
    /// Mark this player writes.
    mark: Mark,
    /// Rounds won so far.
    score: u32,
}

impl Player {
    /// Creates a player with a zero score.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub(crate) fn new(name: impl AsRef<str>, mark: Mark) -> Self {
        Self {
            name: name.as_ref().to_string(),
            mark,
            score: 0,
        }
    }

    /// Credits this player with a won round.
    #[instrument(skip(self), fields(name = %self.name))]
    pub fn record_win(&mut self) {
        self.score += 1;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for the next move.
    InProgress,
    /// A line was completed by this mark.
    Won(Mark),
    /// Board filled with no completed line.
    Draw,
}

impl GameStatus {
    /// Returns true once no further moves should be requested.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

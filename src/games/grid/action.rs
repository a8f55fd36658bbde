//! Move types for grid tic-tac-toe.
//!
//! A move is the player's intent. It is validated against the game before
//! anything is written to the board.

use super::{Mark, PlayerSlot};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A candidate move in zero-based board coordinates.
///
/// Coordinates are signed because input arrives 1-based from outside and
/// may fall below zero after conversion; [`Game`](super::Game) rejects those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// Zero-based row.
    pub row: i64,
    /// Zero-based column.
    pub col: i64,
}

impl Move {
    /// Converts a 1-based human coordinate pair to a move.
    ///
    /// Saturates at `i64::MIN`, which is off the board either way.
    pub fn from_one_based(row: i64, col: i64) -> Self {
        Self::new(row.saturating_sub(1), col.saturating_sub(1))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row.saturating_add(1), self.col.saturating_add(1))
    }
}

/// A move that has been written to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Slot of the player who moved.
    pub slot: PlayerSlot,
    /// Mark written.
    pub mark: Mark,
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

/// Why a candidate move was rejected.
///
/// None of these are fatal: the driver reports the message and asks again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Input could not be parsed as a coordinate pair.
    #[display(
        "Invalid input! Please enter row and column as two numbers separated by a comma (e.g., 1,3)."
    )]
    BadInput,

    /// Row or column falls outside the board.
    #[display("Invalid move! Row and column must be between 1 and {}.", size)]
    OutOfBounds {
        /// Side length of the board.
        #[error(not(source))]
        size: usize,
    },

    /// Target cell already holds a mark.
    #[display("Invalid move! That spot is already taken.")]
    Occupied {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
    },
}

//! Tic-tac-toe on an N×N board.

mod action;
mod board;
mod game;
mod input;
pub mod rules;
mod types;

pub use action::{Move, MoveError, Placement};
pub use board::{Board, BoardError, MIN_BOARD_SIZE};
pub use game::{DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, Game};
pub use input::parse_move;
pub use types::{GameStatus, Mark, Player, PlayerSlot, Square};

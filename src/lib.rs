//! Strictly Grid library - tic-tac-toe on an N×N board
//!
//! Two players alternate marks on a square board of any size from 3 up; a
//! row, column or either diagonal filled by one mark wins, and a full board
//! without such a line is a draw.
//!
//! # Architecture
//!
//! - **Games**: board storage, win/draw rules and the turn engine
//! - **Config**: optional TOML settings merged with command-line flags
//! - **Console**: line-oriented driver with the turn and replay loops
//!
//! # Example
//!
//! ```
//! use strictly_grid::{Game, GameStatus, Mark, Move};
//!
//! let mut game = Game::new(3);
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     game.make_move(Some(Move::new(row, col))).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Won(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, validate_size};

// Crate-level exports - Console driver
pub use console::{Console, new_game};

// Crate-level exports - Game types
pub use games::grid::{
    Board, BoardError, DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, Game, GameStatus, MIN_BOARD_SIZE,
    Mark, Move, MoveError, Placement, Player, PlayerSlot, Square, parse_move, rules,
};

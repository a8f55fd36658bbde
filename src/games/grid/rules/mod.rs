//! Game rules for grid tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! board storage so the game engine and tests can evaluate any board state.

pub mod draw;
pub mod win;

pub use draw::check_draw;
pub use win::check_winner;

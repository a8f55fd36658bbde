//! Win detection for any board size.

use super::super::{Board, Mark, Square};
use tracing::instrument;

/// Checks if any line is filled by a single mark.
///
/// Lines are scanned in [`Board::lines`] order and the first complete line
/// wins, so the result is deterministic even on boards that alternating play
/// could never reach.
#[instrument(skip(board), fields(size = board.size()))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    board.lines().into_iter().find_map(|line| {
        let first = line.first().copied()?;
        match first {
            Square::Occupied(mark) if line.iter().all(|sq| *sq == first) => Some(mark),
            _ => None,
        }
    })
}

//! Draw detection.

use super::super::Board;
use tracing::instrument;

/// Checks if the board has no blank square left.
///
/// This does not look for a winner. A full board with a completed line is
/// still "full"; callers check [`check_winner`](super::check_winner) first.
#[instrument(skip(board), fields(size = board.size()))]
pub fn check_draw(board: &Board) -> bool {
    board.is_full()
}

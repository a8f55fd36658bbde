//! Game engine for grid tic-tac-toe.

use super::action::{Move, MoveError, Placement};
use super::rules;
use super::types::{GameStatus, Mark, Player, PlayerSlot, Square};
use super::Board;
use tracing::{debug, info, instrument};

/// Default label for the first player.
pub const DEFAULT_PLAYER_ONE: &str = "Player 1";
/// Default label for the second player.
pub const DEFAULT_PLAYER_TWO: &str = "Player 2";

/// Two players taking turns on one board.
///
/// The engine performs a single validate-or-reject step per
/// [`make_move`](Self::make_move) call; asking again after a rejected move
/// is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    current: PlayerSlot,
}

impl Game {
    /// Creates a game on an empty `size`×`size` board with default player names.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self::with_players(size, DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO)
    }

    /// Creates a game with named players in slots one (X) and two (O).
    #[instrument(skip(one, two), fields(one = %one.as_ref(), two = %two.as_ref()))]
    pub fn with_players(size: usize, one: impl AsRef<str>, two: impl AsRef<str>) -> Self {
        Self {
            board: Board::new(size),
            players: [
                Player::new(one, PlayerSlot::One.mark()),
                Player::new(two, PlayerSlot::Two.mark()),
            ],
            current: PlayerSlot::One,
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board for direct edits (fixtures, tests).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Slot whose turn it is.
    pub fn current_slot(&self) -> PlayerSlot {
        self.current
    }

    /// Player whose turn it is.
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// Returns the player in a slot.
    pub fn player(&self, slot: PlayerSlot) -> &Player {
        &self.players[slot.index()]
    }

    /// Returns the player in a slot for score updates.
    pub fn player_mut(&mut self, slot: PlayerSlot) -> &mut Player {
        &mut self.players[slot.index()]
    }


    /// Returns the mark of the first complete line, if any.
    #[instrument(skip(self))]
    pub fn check_winner(&self) -> Option<Mark> {
        rules::check_winner(&self.board)
    }

    /// Checks if the board is full.
    ///
    /// A full board that also holds a winning line returns `true` as well;
    /// use [`status`](Self::status) for the combined verdict.
    #[instrument(skip(self))]
    pub fn check_draw(&self) -> bool {
        rules::check_draw(&self.board)
    }

    /// Current status. A winner takes precedence over a full board.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        if let Some(mark) = self.check_winner() {
            GameStatus::Won(mark)
        } else if self.check_draw() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Validates a candidate move and returns the zero-based target cell.
    ///
    /// Checks run in order: missing input, bounds, occupancy.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] that applies.
    #[instrument(skip(self))]
    pub fn validate_move(&self, mv: Option<Move>) -> Result<(usize, usize), MoveError> {
        let mv = mv.ok_or(MoveError::BadInput)?;

        let size = self.size();
        let in_range = |v: i64| usize::try_from(v).ok().filter(|v| *v < size);
        let (Some(row), Some(col)) = (in_range(mv.row), in_range(mv.col)) else {
            return Err(MoveError::OutOfBounds { size });
        };

        if !self.board.is_empty(row, col) {
            return Err(MoveError::Occupied { row, col });
        }

        Ok((row, col))
    }

    /// Checks if a candidate move may be played, logging why when it may not.
    #[instrument(skip(self))]
    pub fn is_move_valid(&self, mv: Option<Move>) -> bool {
        match self.validate_move(mv) {
            Ok(_) => true,
            Err(err) => {
                debug!(%err, "Rejected move");
                false
            }
        }
    }

    /// Applies one candidate move for the current player.
    ///
    /// On success the current player's mark is written and the turn passes
    /// to the other slot. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] from [`validate_move`](Self::validate_move).
    #[instrument(skip(self), fields(player = %self.current_player()))]
    pub fn make_move(&mut self, mv: Option<Move>) -> Result<Placement, MoveError> {
        let (row, col) = self.validate_move(mv).inspect_err(|err| {
            debug!(%err, "Rejected move");
        })?;

        let slot = self.current;
        let mark = slot.mark();
        self.board.set(row, col, Square::Occupied(mark));
        self.current = slot.toggle();

        debug!(row, col, %mark, next = ?self.current, "Move applied");
        Ok(Placement {
            slot,
            mark,
            row,
            col,
        })
    }

    /// Clears the board and gives the first move back to slot one.
    ///
    /// Players, and therefore scores, are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.current = PlayerSlot::One;
        info!("Game reset");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(super::MIN_BOARD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_move_alternates_turns() {
        let mut game = Game::new(3);
        assert_eq!(game.current_slot(), PlayerSlot::One);

        let placed = game.make_move(Some(Move::new(1, 1))).unwrap();
        assert_eq!(placed.mark, Mark::X);
        assert_eq!(placed.slot, PlayerSlot::One);
        assert_eq!(game.board().get(1, 1), Square::Occupied(Mark::X));
        assert_eq!(game.current_slot(), PlayerSlot::Two);

        game.make_move(Some(Move::new(0, 0))).unwrap();
        assert_eq!(game.board().get(0, 0), Square::Occupied(Mark::O));
        assert_eq!(game.current_slot(), PlayerSlot::One);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut game = Game::new(3);
        game.make_move(Some(Move::new(0, 0))).unwrap();
        let before = game.clone();

        assert_eq!(game.make_move(None), Err(MoveError::BadInput));
        assert_eq!(
            game.make_move(Some(Move::new(0, 3))),
            Err(MoveError::OutOfBounds { size: 3 })
        );
        assert_eq!(
            game.make_move(Some(Move::new(0, 0))),
            Err(MoveError::Occupied { row: 0, col: 0 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_validation_order() {
        let mut game = Game::new(3);
        game.board_mut().set(0, 0, Square::Occupied(Mark::X));

        assert_eq!(game.validate_move(None), Err(MoveError::BadInput));
        assert_eq!(
            game.validate_move(Some(Move::new(-1, 0))),
            Err(MoveError::OutOfBounds { size: 3 })
        );
        assert_eq!(game.validate_move(Some(Move::new(2, 2))), Ok((2, 2)));
    }

    #[test]
    fn test_status_prefers_winner_over_full_board() {
        let mut game = Game::new(3);
        let (x, o) = (Square::Occupied(Mark::X), Square::Occupied(Mark::O));
        *game.board_mut() = Board::from_cells(vec![x, x, x, o, o, x, o, x, o]).unwrap();

        assert!(game.check_draw());
        assert_eq!(game.status(), GameStatus::Won(Mark::X));
    }

    #[test]
    fn test_reset_keeps_scores() {
        let mut game = Game::new(4);
        game.player_mut(PlayerSlot::Two).record_win();
        game.make_move(Some(Move::new(3, 3))).unwrap();

        game.reset();

        assert_eq!(game.current_slot(), PlayerSlot::One);
        assert!(game.board().squares().iter().all(|s| *s == Square::Empty));
        assert_eq!(game.size(), 4);
        assert_eq!(*game.player(PlayerSlot::Two).score(), 1);
    }

    #[test]
    fn test_winner_slot_from_mark() {
        let mut game = Game::new(3);
        game.player_mut(PlayerSlot::from(Mark::O)).record_win();
        assert_eq!(game.player(PlayerSlot::Two).name(), DEFAULT_PLAYER_TWO);
        assert_eq!(*game.player(PlayerSlot::Two).score(), 1);
        assert_eq!(*game.player(PlayerSlot::One).score(), 0);
    }

    #[test]
    fn test_named_players_write_slot_marks() {
        let mut game = Game::with_players(3, "Ann", "Ben");
        assert_eq!(*game.player(PlayerSlot::One).mark(), Mark::X);
        assert_eq!(*game.player(PlayerSlot::Two).mark(), Mark::O);

        game.make_move(Some(Move::new(0, 0))).unwrap();
        let placed = game.make_move(Some(Move::new(0, 1))).unwrap();

        assert_eq!(placed.slot, PlayerSlot::Two);
        assert_eq!(placed.mark, Mark::O);
        assert_eq!(game.board().get(0, 1), Square::Occupied(PlayerSlot::Two.mark()));
        assert_eq!(game.current_slot(), PlayerSlot::One);
    }

    #[test]
    fn test_move_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(MoveError::OutOfBounds { size: 4 });
        assert!(err.source().is_none());
        assert_eq!(
            err.to_string(),
            "Invalid move! Row and column must be between 1 and 4."
        );
    }
}

//! Square N×N board storage.

use super::types::Square;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Smallest board that still makes for a meaningful game.
pub const MIN_BOARD_SIZE: usize = 3;

/// N×N board with cells stored in row-major order.
///
/// The board knows nothing about the rules. Coordinates are zero-based and
/// callers are responsible for keeping them inside `0..size`; indexing
/// outside the grid panics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    /// `size * size` cells, indexed by `row * size + col`.
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board of the given side length.
    ///
    /// The caller validates `size` against [`MIN_BOARD_SIZE`] beforehand.
    #[instrument]
    pub fn new(size: usize) -> Self {
        debug_assert!(size >= MIN_BOARD_SIZE, "board size below minimum");
        Self {
            size,
            squares: vec![Square::Empty; size * size],
        }
    }

    /// Builds a board from row-major cells.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] unless the cell count is the square of a side
    /// length of at least [`MIN_BOARD_SIZE`].
    #[instrument(skip(squares), fields(len = squares.len()))]
    pub fn from_cells(squares: Vec<Square>) -> Result<Self, BoardError> {
        let size = squares.len().isqrt();
        if size * size != squares.len() {
            return Err(BoardError::NotSquare(squares.len()));
        }
        if size < MIN_BOARD_SIZE {
            return Err(BoardError::TooSmall(size));
        }
        Ok(Self { size, squares })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the square at the given coordinate.
    pub fn get(&self, row: usize, col: usize) -> Square {
        self.squares[self.offset(row, col)]
    }

    /// Overwrites the square at the given coordinate.
    ///
    /// No check is made that the cell was blank.
    #[instrument(skip(self))]
    pub fn set(&mut self, row: usize, col: usize, square: Square) {
        let offset = self.offset(row, col);
        self.squares[offset] = square;
    }

    /// Checks if a square is blank.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Square::Empty
    }

    /// Checks if no blank square remains.
    #[instrument(skip(self))]
    pub fn is_full(&self) -> bool {
        !self.squares.contains(&Square::Empty)
    }

    /// Blanks every square. The size is unchanged.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn reset(&mut self) {
        self.squares.fill(Square::Empty);
        debug!("Board cleared");
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Enumerates every line that can win the game.
    ///
    /// For each index `i`, row `i` is followed by column `i`; the main
    /// diagonal and then the anti-diagonal come last. Always yields
    /// `2 * size + 2` lines of `size` squares each.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn lines(&self) -> Vec<Vec<Square>> {
        let n = self.size;
        let mut lines = Vec::with_capacity(2 * n + 2);

        for i in 0..n {
            lines.push((0..n).map(|j| self.get(i, j)).collect());
            lines.push((0..n).map(|j| self.get(j, i)).collect());
        }

        lines.push((0..n).map(|i| self.get(i, i)).collect());
        lines.push((0..n).map(|i| self.get(i, n - i - 1)).collect());

        lines
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "({}, {}) is off a {}x{} board",
            row,
            col,
            self.size,
            self.size
        );
        row * self.size + col
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(MIN_BOARD_SIZE)
    }
}

/// Renders the board with 1-based coordinate labels.
///
/// ```text
///   1 2 3
/// 1 X _ _
/// 2 _ O _
/// 3 _ _ _
/// ```
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label_width = self.size.to_string().len();

        write!(f, "{:width$} ", "", width = label_width)?;
        for col in 1..=self.size {
            write!(f, "{:<width$} ", col, width = label_width)?;
        }
        writeln!(f)?;

        for row in 0..self.size {
            write!(f, "{:>width$} ", row + 1, width = label_width)?;
            for col in 0..self.size {
                write!(
                    f,
                    "{:<width$} ",
                    self.get(row, col).to_string(),
                    width = label_width
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Error building a board from raw cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Cell count is not a perfect square.
    #[display("{} cells cannot form a square board", _0)]
    NotSquare(#[error(not(source))] usize),
    /// Side length is below the minimum.
    #[display("Board size {} is below the minimum of {}", _0, MIN_BOARD_SIZE)]
    TooSmall(#[error(not(source))] usize),
}

//! The N×N board engine.
//!
//! The board owns the grid and nothing else. Game status is never cached:
//! [`Board::check_winner`] recomputes it from the squares every time, so a
//! [`Board::reset`] is all it takes to start over.

use super::action::{Move, MoveError};
use super::error::BoardError;
use super::rules;
use super::types::{BoardStatus, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Size used by [`Board::default`].
pub const DEFAULT_SIZE: usize = 3;

/// A square grid of [`Square`]s, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

/// Wire shape of a [`Board`], checked before it becomes one.
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    squares: Vec<Square>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        if raw.size == 0 {
            return Err(BoardError::ZeroSize);
        }
        if raw.size.checked_mul(raw.size) != Some(raw.squares.len()) {
            return Err(BoardError::Mismatched {
                size: raw.size,
                len: raw.squares.len(),
            });
        }
        Ok(Self {
            size: raw.size,
            squares: raw.squares,
        })
    }
}

impl Board {
    /// Creates an empty `size`×`size` board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ZeroSize`] if `size` is zero, and
    /// [`BoardError::TooLarge`] if the grid cannot be allocated.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::ZeroSize);
        }
        let cells = size.checked_mul(size).ok_or(BoardError::TooLarge(size))?;
        let mut squares = Vec::new();
        squares
            .try_reserve_exact(cells)
            .map_err(|_| BoardError::TooLarge(size))?;
        squares.resize(cells, Square::Empty);
        debug!(size, "Allocating board");
        Ok(Self { size, squares })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the square at `(row, col)`, or `None` if out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        self.index(row, col).map(|i| self.squares[i])
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, Square> {
        self.squares.chunks_exact(self.size)
    }

    /// True if no square is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Clears every square back to empty without reallocating.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn reset(&mut self) {
        self.squares.fill(Square::Empty);
        debug!("Board reset");
    }

    /// Explains why `mv` cannot be played, if it cannot.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if the row or column is not in `[0, size)`.
    /// - [`MoveError::Occupied`] if the target square already holds a mark.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn validate(&self, mv: &Move) -> Result<(), MoveError> {
        match self.get(mv.row(), mv.col()) {
            None => Err(MoveError::OutOfBounds {
                row: mv.row(),
                col: mv.col(),
                size: self.size,
            }),
            Some(Square::Occupied(by)) => Err(MoveError::Occupied {
                row: mv.row(),
                col: mv.col(),
                by,
            }),
            Some(Square::Empty) => Ok(()),
        }
    }

    /// True if `mv` is in range and targets an empty square.
    pub fn is_valid_move(&self, mv: &Move) -> bool {
        self.validate(mv).is_ok()
    }

    /// Writes `mv` onto the board without validating it.
    ///
    /// The caller must have checked [`Board::is_valid_move`] first; debug
    /// builds assert it. Release builds overwrite whatever is there, and an
    /// out-of-range move panics on indexing.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn update(&mut self, mv: &Move) {
        debug_assert!(
            self.is_valid_move(mv),
            "update called with unvalidated move {mv}"
        );
        let i = mv.row() * self.size + mv.col();
        self.squares[i] = Square::Occupied(mv.side());
    }

    /// Validates and applies `mv` in one step.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] from [`Board::validate`]; the board is left
    /// untouched in that case.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn try_update(&mut self, mv: &Move) -> Result<(), MoveError> {
        self.validate(mv)?;
        self.update(mv);
        Ok(())
    }

    /// Validates, applies, and evaluates `mv`.
    ///
    /// # Errors
    ///
    /// Same as [`Board::try_update`].
    #[instrument(skip(self), fields(size = self.size))]
    pub fn place(&mut self, mv: &Move) -> Result<BoardStatus, MoveError> {
        self.try_update(mv)?;
        Ok(self.check_winner(mv))
    }

    /// Computes the board status given the most recently applied move.
    ///
    /// Lines through the move are checked in order: row, column, main
    /// diagonal (only when `row == col`), anti-diagonal (only when
    /// `row + col == size - 1`). A uniform line is credited to the mover.
    /// Otherwise a full board is a draw and anything else is unfinished.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn check_winner(&self, mv: &Move) -> BoardStatus {
        let (row, col) = (mv.row(), mv.col());
        let anchor = self.get(row, col).unwrap_or_default();
        debug_assert!(
            anchor.is_empty() || anchor == Square::Occupied(mv.side()),
            "check_winner called with a move that is not on the board"
        );

        let won = rules::row_uniform(self, row, anchor)
            || rules::column_uniform(self, col, anchor)
            || (row == col && rules::main_diagonal_uniform(self, anchor))
            || (row.checked_add(col) == Some(self.size - 1)
                && rules::anti_diagonal_uniform(self, anchor));

        let status = if won {
            BoardStatus::win_for(mv.side())
        } else if self.is_full() {
            BoardStatus::Draw
        } else {
            BoardStatus::Unfinished
        };
        debug!(%status, "Board evaluated");
        status
    }

    /// Square at `(row, col)`; callers guarantee the indices are in range.
    pub(crate) fn at(&self, row: usize, col: usize) -> Square {
        self.squares[row * self.size + col]
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            squares: vec![Square::Empty; DEFAULT_SIZE * DEFAULT_SIZE],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Side;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4).unwrap();
        assert_eq!(board.size(), 4);
        assert_eq!(board.rows().count(), 4);
        assert!(board.rows().flatten().all(|sq| sq.is_empty()));
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(Board::new(0), Err(BoardError::ZeroSize));
    }

    #[test]
    fn test_unallocatable_size_rejected() {
        assert_eq!(Board::new(usize::MAX), Err(BoardError::TooLarge(usize::MAX)));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_huge_size_rejected_without_abort() {
        assert_eq!(Board::new(1 << 31), Err(BoardError::TooLarge(1 << 31)));
    }

    #[test]
    fn test_deserialize_round_trips_valid_board() {
        let mut board = Board::new(2).unwrap();
        board.update(&Move::new(Side::O, 1, 0));
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);
    }

    #[test]
    fn test_deserialize_rejects_mismatched_squares() {
        let err = serde_json::from_str::<Board>(r#"{"size":3,"squares":[]}"#).unwrap_err();
        assert!(err.to_string().contains("3x3"), "{err}");

        let four = r#"{"size":1,"squares":["Empty","Empty","Empty","Empty"]}"#;
        assert!(serde_json::from_str::<Board>(four).is_err());
    }

    #[test]
    fn test_deserialize_rejects_zero_size() {
        assert!(serde_json::from_str::<Board>(r#"{"size":0,"squares":[]}"#).is_err());
    }

    #[test]
    fn test_default_is_three_by_three() {
        assert_eq!(Board::default(), Board::new(3).unwrap());
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::default();
        assert_eq!(board.get(0, 3), None);
        assert_eq!(board.get(3, 0), None);
        assert_eq!(board.get(2, 2), Some(Square::Empty));
    }

    #[test]
    fn test_validate_reports_reason() {
        let mut board = Board::default();
        board.update(&Move::new(Side::X, 1, 1));

        assert_eq!(
            board.validate(&Move::new(Side::O, 1, 1)),
            Err(MoveError::Occupied {
                row: 1,
                col: 1,
                by: Side::X
            })
        );
        assert_eq!(
            board.validate(&Move::new(Side::O, 0, 5)),
            Err(MoveError::OutOfBounds {
                row: 0,
                col: 5,
                size: 3
            })
        );
    }

    #[test]
    fn test_try_update_leaves_board_on_error() {
        let mut board = Board::default();
        board.try_update(&Move::new(Side::X, 0, 0)).unwrap();
        let before = board.clone();

        assert!(board.try_update(&Move::new(Side::O, 0, 0)).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_returns_status() {
        let mut board = Board::default();
        assert_eq!(
            board.place(&Move::new(Side::O, 2, 2)),
            Ok(BoardStatus::Unfinished)
        );
    }

    #[test]
    fn test_check_winner_out_of_range_move_is_not_a_win() {
        let board = Board::default();
        assert_eq!(
            board.check_winner(&Move::new(Side::X, 9, 9)),
            BoardStatus::Unfinished
        );
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "unvalidated move")]
    fn test_update_asserts_precondition_in_debug() {
        let mut board = Board::default();
        board.update(&Move::new(Side::X, 0, 0));
        board.update(&Move::new(Side::O, 0, 0));
    }
}

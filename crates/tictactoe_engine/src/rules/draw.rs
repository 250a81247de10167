//! Fullness check used for draw detection.

use super::super::Board;
use tracing::instrument;

/// Checks if every square on the board is occupied.
///
/// A full board with no completed line is a draw.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.rows().flatten().all(|sq| !sq.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Side};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::default()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::default();
        board.update(&Move::new(Side::X, 1, 1));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(2).unwrap();
        for r in 0..2 {
            for c in 0..2 {
                board.update(&Move::new(Side::O, r, c));
            }
        }
        assert!(is_full(&board));
    }
}

//! Line checks used for win detection.
//!
//! Each check is O(size) and compares every square on one line against an
//! anchor square. An `Empty` anchor never matches, so an empty line is never
//! reported as uniform.

use super::super::{Board, Square};
use tracing::instrument;

fn uniform(anchor: Square, mut line: impl Iterator<Item = Square>) -> bool {
    !anchor.is_empty() && line.all(|sq| sq == anchor)
}

/// True if every square in `row` equals `anchor`.
#[instrument(skip(board), fields(size = board.size()))]
pub fn row_uniform(board: &Board, row: usize, anchor: Square) -> bool {
    row < board.size() && uniform(anchor, (0..board.size()).map(|c| board.at(row, c)))
}

/// True if every square in `col` equals `anchor`.
#[instrument(skip(board), fields(size = board.size()))]
pub fn column_uniform(board: &Board, col: usize, anchor: Square) -> bool {
    col < board.size() && uniform(anchor, (0..board.size()).map(|r| board.at(r, col)))
}

/// True if every square `(i, i)` equals `anchor`.
#[instrument(skip(board), fields(size = board.size()))]
pub fn main_diagonal_uniform(board: &Board, anchor: Square) -> bool {
    uniform(anchor, (0..board.size()).map(|i| board.at(i, i)))
}

/// True if every square `(i, size - 1 - i)` equals `anchor`.
#[instrument(skip(board), fields(size = board.size()))]
pub fn anti_diagonal_uniform(board: &Board, anchor: Square) -> bool {
    let last = board.size() - 1;
    uniform(anchor, (0..board.size()).map(|i| board.at(i, last - i)))
}

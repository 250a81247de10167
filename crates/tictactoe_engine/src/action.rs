//! Move type and the reasons a move can be rejected.
//!
//! A move only records intent. It is never valid or invalid by itself:
//! validity is judged against a particular board's size and contents.

use super::types::Side;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A side placing its mark at `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    side: Side,
    row: usize,
    col: usize,
}

impl Move {
    /// The side making the move.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Zero-based row index.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Zero-based column index.
    pub fn col(&self) -> usize {
        self.col
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.side, self.row, self.col)
    }
}

/// Why a move cannot be applied to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Row or column lies outside `[0, size)`.
    #[display("Square ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board size.
        size: usize,
    },

    /// The target square already holds a mark.
    #[display("Square ({row}, {col}) is already occupied by {by}")]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Side holding the square.
        by: Side,
    },
}

//! Core domain types for the board engine.

use serde::{Deserialize, Serialize};

/// The mark a player places on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Side {
    /// Side X (moves first in a fresh session).
    #[display("X")]
    X,
    /// Side O.
    #[display("O")]
    O,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }
}

/// A single cell of the grid.
///
/// `Empty` is the unoccupied state; it is a real cell value, not the
/// absence of a cell (out-of-range lookups return `None` instead).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Square taken by a side.
    Occupied(Side),
}

impl Square {
    /// Returns the occupying side, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Square::Empty => None,
            Square::Occupied(side) => Some(side),
        }
    }

    /// True if nobody has played here.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

/// Classification of the board after a move.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum BoardStatus {
    /// X completed a line.
    #[display("X wins!")]
    XWin,
    /// O completed a line.
    #[display("O wins!")]
    OWin,
    /// Board is full and nobody completed a line.
    #[display("Draw.")]
    Draw,
    /// Game continues.
    #[display("Unfinished")]
    Unfinished,
}

impl BoardStatus {
    /// The winning status for `side`.
    pub fn win_for(side: Side) -> Self {
        match side {
            Side::X => BoardStatus::XWin,
            Side::O => BoardStatus::OWin,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Side> {
        match self {
            BoardStatus::XWin => Some(Side::X),
            BoardStatus::OWin => Some(Side::O),
            BoardStatus::Draw | BoardStatus::Unfinished => None,
        }
    }

    /// True once the game is over (win or draw).
    pub fn is_terminal(self) -> bool {
        self != BoardStatus::Unfinished
    }
}

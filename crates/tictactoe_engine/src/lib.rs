//! Board engine for N×N tic-tac-toe.
//!
//! The engine owns a square grid, validates moves against it, applies them,
//! and classifies the board after each move. It does no I/O; prompting,
//! parsing and rendering belong to the caller.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Board, BoardStatus, Move, Side};
//!
//! let mut board = Board::default();
//! for col in 0..3 {
//!     let mv = Move::new(Side::X, 0, col);
//!     assert!(board.is_valid_move(&mv));
//!     board.update(&mv);
//!     if col == 2 {
//!         assert_eq!(board.check_winner(&mv), BoardStatus::XWin);
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod error;
mod player;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use board::{Board, DEFAULT_SIZE};
pub use error::BoardError;
pub use player::Player;
pub use types::{BoardStatus, Side, Square};

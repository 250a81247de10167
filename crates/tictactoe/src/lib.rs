//! Two-player terminal tic-tac-toe.
//!
//! Wires the [`tictactoe_engine`] board to a text prompt loop: moves are
//! typed as `row,col`, the board is redrawn after every turn, and finished
//! games offer a rematch while keeping each side's win count.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod display;
mod game;
mod input;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig, MAX_SIZE};
pub use display::render;
pub use game::{Game, SessionSummary, TurnError};
pub use input::{parse_answer, parse_move, Answer, InputError};

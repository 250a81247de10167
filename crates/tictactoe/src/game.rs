//! Turn loop and rematch loop for two players sharing one terminal.

use crate::display::render;
use crate::input::{parse_answer, parse_move, Answer, InputError};
use anyhow::Result;
use derive_getters::Getters;
use std::io::{BufRead, Write};
use tictactoe_engine::{Board, BoardStatus, Move, MoveError, Player, Side};
use tracing::{debug, info, instrument, warn};

/// Why a submitted turn was refused.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum TurnError {
    /// The text was not a move at all.
    Input(InputError),
    /// The move does not fit the board.
    Move(MoveError),
}

/// Totals for a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters)]
pub struct SessionSummary {
    /// Games that reached a win or draw.
    #[getter(copy)]
    games: u32,
    /// Games won by X.
    #[getter(copy)]
    x_wins: u32,
    /// Games won by O.
    #[getter(copy)]
    o_wins: u32,
    /// Drawn games.
    #[getter(copy)]
    draws: u32,
}

impl SessionSummary {
    fn record(&mut self, status: BoardStatus) {
        self.games += 1;
        match status {
            BoardStatus::XWin => self.x_wins += 1,
            BoardStatus::OWin => self.o_wins += 1,
            BoardStatus::Draw => self.draws += 1,
            BoardStatus::Unfinished => {}
        }
    }
}

/// Drives games on one board between two players, reading moves from
/// `input` and writing the board and prompts to `output`.
///
/// Players persist across rematches so their win counts accumulate.
pub struct Game<R, W> {
    board: Board,
    player_x: Player,
    player_o: Player,
    to_move: Side,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Game<R, W> {
    /// Creates a session on `board`; X moves first.
    pub fn new(board: Board, input: R, output: W) -> Self {
        Self {
            board,
            player_x: Player::new(Side::X),
            player_o: Player::new(Side::O),
            to_move: Side::X,
            input,
            output,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player for `side`.
    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::X => &self.player_x,
            Side::O => &self.player_o,
        }
    }

    /// Side whose turn it is.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Runs games until a player declines a rematch or input runs out.
    #[instrument(skip(self), fields(size = self.board.size()))]
    pub fn run(&mut self) -> Result<SessionSummary> {
        info!("Starting session");
        let mut summary = SessionSummary::default();
        let mut hint = self.turn_prompt();

        loop {
            self.show_board()?;
            write!(self.output, "{hint}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                info!("Input closed mid-game");
                return Ok(summary);
            };

            match self.submit(&line) {
                Ok(BoardStatus::Unfinished) => {
                    self.to_move = self.to_move.opponent();
                    hint = self.turn_prompt();
                }
                Ok(status) => {
                    summary.record(status);
                    if let Some(winner) = status.winner() {
                        self.player_mut(winner).record_win();
                    }
                    if !self.offer_rematch(status)? {
                        writeln!(self.output, "See you!")?;
                        info!(?summary, "Session finished");
                        return Ok(summary);
                    }
                    self.board.reset();
                    hint = self.turn_prompt();
                }
                Err(e) => {
                    debug!(error = %e, "Turn rejected");
                    hint = format!("Invalid move: {}. Pick a square.\n(row, col): ", line.trim());
                }
            }
        }
    }

    /// Parses, validates, applies and evaluates one typed move for the side to move.
    #[instrument(skip(self), fields(side = %self.to_move))]
    pub fn submit(&mut self, line: &str) -> Result<BoardStatus, TurnError> {
        let (row, col) = parse_move(line)?;
        let mv = Move::new(self.to_move, row, col);
        self.board.try_update(&mv)?;
        let status = self.board.check_winner(&mv);
        debug!(%mv, %status, "Move applied");
        Ok(status)
    }

    /// Announces the result and asks for a rematch; false ends the session.
    fn offer_rematch(&mut self, status: BoardStatus) -> Result<bool> {
        info!(%status, "Game over");
        self.show_board()?;
        write!(
            self.output,
            "{status}\nCurrent number of wins:\nPlayer X: {}, Player O: {}\nPlay again?\nAnswer(yes or no):",
            self.player_x.wins(),
            self.player_o.wins(),
        )?;
        self.output.flush()?;

        loop {
            let Some(line) = self.read_line()? else {
                info!("Input closed at rematch prompt");
                return Ok(false);
            };
            match parse_answer(&line) {
                Ok(Answer::Yes) => return Ok(true),
                Ok(Answer::No) => return Ok(false),
                Err(e) => {
                    warn!(error = %e, "Unrecognised rematch answer");
                    write!(self.output, "Please answer yes or no.\nAnswer(yes or no):")?;
                    self.output.flush()?;
                }
            }
        }
    }

    fn turn_prompt(&self) -> String {
        format!("Player {}'s turn. Pick a square.\n(row, col): ", self.to_move)
    }

    fn show_board(&mut self) -> Result<()> {
        write!(self.output, "{}", render(&self.board))?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn player_mut(&mut self, side: Side) -> &mut Player {
        match side {
            Side::X => &mut self.player_x,
            Side::O => &mut self.player_o,
        }
    }
}

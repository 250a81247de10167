//! Parsing of typed moves and rematch answers.

use derive_more::{Display, Error};
use std::str::FromStr;
use strum::EnumString;
use tracing::instrument;

/// Text that could not be turned into a move or an answer.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Not of the form `digit,digit`.
    #[display("Expected row,col such as 1,2 but got {:?}", _0)]
    Malformed(#[error(not(source))] String),

    /// Not `yes` or `no`.
    #[display("Expected yes or no but got {:?}", _0)]
    UnknownAnswer(#[error(not(source))] String),
}

/// Reply to the "play again?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Answer {
    /// Start a rematch.
    Yes,
    /// End the session.
    No,
}

/// Parses a move typed as `row,col`, e.g. `1,2`.
///
/// Surrounding whitespace (including the line terminator) is ignored; what
/// remains must be exactly one digit, a comma, and one digit.
#[instrument]
pub fn parse_move(line: &str) -> Result<(usize, usize), InputError> {
    match line.trim().as_bytes() {
        [row @ b'0'..=b'9', b',', col @ b'0'..=b'9'] => {
            Ok((usize::from(row - b'0'), usize::from(col - b'0')))
        }
        _ => Err(InputError::Malformed(line.trim().to_string())),
    }
}

/// Parses a rematch answer, case-insensitively.
#[instrument]
pub fn parse_answer(line: &str) -> Result<Answer, InputError> {
    let line = line.trim();
    Answer::from_str(line).map_err(|_| InputError::UnknownAnswer(line.to_string()))
}

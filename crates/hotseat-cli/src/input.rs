//! Parsing of typed input lines.

use hotseat_core::Square;
use thiserror::Error;

/// A command entered at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Tap the given square.
    Tap(Square),
    /// Start over from the initial position.
    Reset,
    /// Show the input help.
    Help,
    /// Leave the program.
    Quit,
}

/// Errors produced for lines that are not a command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("row and column must be between 0 and 7, got {row} {col}")]
    OutOfRange { row: u8, col: u8 },

    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    #[error("unrecognized input '{0}' (type 'help' for usage)")]
    Unrecognized(String),
}

/// Input help printed for the `help` command.
pub const HELP: &str = "\
Enter a square to tap it:
  6 4      row and column (row 0 is black's back rank)
  e2       algebraic square
Other commands:
  reset    start a new game
  help     show this message
  quit     leave";

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command>, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    match line.to_ascii_lowercase().as_str() {
        "reset" | "new" => return Ok(Some(Command::Reset)),
        "help" | "?" => return Ok(Some(Command::Help)),
        "quit" | "exit" | "q" => return Ok(Some(Command::Quit)),
        _ => {}
    }

    if let Some(square) = Square::from_algebraic(line) {
        return Ok(Some(Command::Tap(square)));
    }

    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();
    match parts.as_slice() {
        [row, col] => {
            let row = parse_coordinate(row)?;
            let col = parse_coordinate(col)?;
            Square::new(row, col)
                .map(|sq| Some(Command::Tap(sq)))
                .ok_or(InputError::OutOfRange { row, col })
        }
        _ => Err(InputError::Unrecognized(line.to_string())),
    }
}

fn parse_coordinate(text: &str) -> Result<u8, InputError> {
    text.parse::<u8>()
        .map_err(|_| InputError::InvalidNumber(text.to_string()))
}

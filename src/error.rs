//! Error types for board construction and the terminal front end.
//!
//! The engine itself has no recoverable errors: slides, rotations and the
//! detector are total over any valid board, and coordinate misuse panics.

use derive_more::{Display, Error};

/// A board description that can't be turned into a [`Board`](crate::Board).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
  #[display("board has no rows")]
  Empty,
  #[display("row {row} has {found} cells, expected {expected}")]
  NotSquare { row: usize, found: usize, expected: usize },
  #[display("{value} is not a valid tile")]
  BadTile { value: u32 },
}

#[derive(Debug, Display, Error)]
pub enum GameError {
  #[display("terminal I/O failed: {source}")]
  Io { source: std::io::Error },
  #[display("{source}")]
  Options { source: getopts::Fail },
  #[display("invalid value '{value}' for --{option}")]
  BadValue { option: &'static str, value: String },
  #[display("unexpected argument '{value}'")]
  UnexpectedArgument { value: String },
}

impl From<std::io::Error> for GameError {
  fn from(source: std::io::Error) -> Self {
    GameError::Io { source }
  }
}

impl From<getopts::Fail> for GameError {
  fn from(source: getopts::Fail) -> Self {
    GameError::Options { source }
  }
}

//! Quarter turns of the board.
//!
//! Only the left slide is implemented directly; every other direction turns
//! the board so that direction points left, slides, and turns it back.

use crate::board::{Board, Direction};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Rotation {
  Clockwise,
  CounterClockwise,
}

impl Rotation {
  pub fn inverse(self) -> Rotation {
    match self {
      Rotation::Clockwise => Rotation::CounterClockwise,
      Rotation::CounterClockwise => Rotation::Clockwise,
    }
  }
}

pub fn rotate(board: &Board, rotation: Rotation) -> Board {
  let n = board.len();
  let mut dst = Board::new(n);
  for row in 0..n {
    for col in 0..n {
      let val = match rotation {
        Rotation::Clockwise => board.get(n - 1 - col, row),
        Rotation::CounterClockwise => board.get(col, n - 1 - row),
      };
      dst.set(row, col, val);
    }
  }
  dst
}

pub fn rotate_half(board: &Board) -> Board {
  rotate(&rotate(board, Rotation::Clockwise), Rotation::Clockwise)
}

/// How far to turn a board.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Turn {
  None,
  Quarter(Rotation),
  Half,
}

impl Turn {
  pub fn inverse(self) -> Turn {
    match self {
      Turn::Quarter(r) => Turn::Quarter(r.inverse()),
      other => other,
    }
  }

  pub fn apply(self, board: &Board) -> Board {
    match self {
      Turn::None => board.clone(),
      Turn::Quarter(r) => rotate(board, r),
      Turn::Half => rotate_half(board),
    }
  }
}

impl Direction {
  /// The turn that brings this direction onto `Left`.
  pub fn to_left(self) -> Turn {
    match self {
      Direction::Left => Turn::None,
      Direction::Right => Turn::Half,
      Direction::Up => Turn::Quarter(Rotation::CounterClockwise),
      Direction::Down => Turn::Quarter(Rotation::Clockwise),
    }
  }

  pub fn from_left(self) -> Turn {
    self.to_left().inverse()
  }
}

//! Win and loss detection.
//!
//! Loss is decided locally: a full board where no tile has an equal
//! orthogonal neighbour. Any merge needs such a pair and a full board can't
//! slide, so this matches "no direction changes the board" for full boards
//! of any size. `can_move` does the brute-force check and the tests hold
//! the two against each other.

use crate::board::{Board, Direction};
use crate::slide::{merged, shift};

/// Tile value that wins the game.
pub const TARGET: u32 = 2048;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Status {
  Continue,
  Won,
  Lost,
}

impl Status {
  pub fn is_terminal(self) -> bool {
    self != Status::Continue
  }
}

/// Checks `board` for a finished game. A winning tile beats a locked board.
pub fn status(board: &Board, target: u32) -> Status {
  let n = board.len();
  if board.has_tile(target) {
    Status::Won
  } else if stuck_cells(board) == n * n {
    Status::Lost
  } else {
    Status::Continue
  }
}

/// Number of tiles with no neighbour they could merge with. Empty cells
/// never count.
pub fn stuck_cells(board: &Board) -> usize {
  let n = board.len();
  let mut stuck = 0;
  for row in 0..n {
    for col in 0..n {
      let val = board.get(row, col);
      if val == 0 {
        continue;
      }
      let same = |r: usize, c: usize| merged(board.get(r, c), val).is_some();
      let paired = (row > 0 && same(row - 1, col)) ||
                   (row + 1 < n && same(row + 1, col)) ||
                   (col > 0 && same(row, col - 1)) ||
                   (col + 1 < n && same(row, col + 1));
      if !paired {
        stuck += 1;
      }
    }
  }
  stuck
}

/// True if sliding in some direction would change the board.
pub fn can_move(board: &Board) -> bool {
  Direction::ALL.iter().any(|&dir| shift(&mut board.clone(), dir))
}

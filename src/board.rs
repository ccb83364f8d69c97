use std::fmt;

use crate::error::BoardError;

/// Side length of the board the game is played on.
pub const BOARD_LEN: usize = 4;

/// Largest tile a board holds. Two of these never merge, so sums stay in `u32`.
pub const MAX_TILE: u32 = 1 << 30;

/// A square grid of tile values. `0` is an empty cell, anything else is a
/// power of two.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
  len: usize,
  cells: Vec<u32>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
  Up,
  Down,
  Left,
  Right,
}

impl Direction {
  pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
}

impl Default for Board {
  fn default() -> Board {
    Board::new(BOARD_LEN)
  }
}

impl Board {
  pub fn new(len: usize) -> Board {
    assert!(len > 0, "board needs at least one cell");
    Board { len, cells: vec![0; len * len] }
  }

  /// Builds a board from rows, mostly for setting up positions in tests.
  pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Board, BoardError> {
    let len = rows.len();
    if len == 0 {
      return Err(BoardError::Empty);
    }
    let mut cells = Vec::with_capacity(len * len);
    for (row, vals) in rows.iter().enumerate() {
      let vals = vals.as_ref();
      if vals.len() != len {
        return Err(BoardError::NotSquare { row, found: vals.len(), expected: len });
      }
      if let Some(&value) = vals.iter().find(|&&v| v == 1 || v > MAX_TILE || (v != 0 && !v.is_power_of_two())) {
        return Err(BoardError::BadTile { value });
      }
      cells.extend_from_slice(vals);
    }
    Ok(Board { len, cells })
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn get(&self, row: usize, col: usize) -> u32 {
    self.cells[self.index(row, col)]
  }

  pub fn set(&mut self, row: usize, col: usize, value: u32) {
    let idx = self.index(row, col);
    self.cells[idx] = value;
  }

  pub fn row(&self, row: usize) -> &[u32] {
    assert!(row < self.len, "row {} out of range for {}x{} board", row, self.len, self.len);
    &self.cells[row * self.len..(row + 1) * self.len]
  }

  pub fn row_mut(&mut self, row: usize) -> &mut [u32] {
    assert!(row < self.len, "row {} out of range for {}x{} board", row, self.len, self.len);
    let len = self.len;
    &mut self.cells[row * len..(row + 1) * len]
  }

  pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
    self.cells.chunks(self.len)
  }

  /// Row-major indices of every empty cell.
  pub fn empty_cells(&self) -> Vec<usize> {
    self.cells.iter()
      .enumerate()
      .filter(|&(_, &v)| v == 0)
      .map(|(idx, _)| idx)
      .collect()
  }

  pub fn cell_of(&self, index: usize) -> (usize, usize) {
    assert!(index < self.cells.len(), "cell {} out of range", index);
    (index / self.len, index % self.len)
  }

  pub fn max_tile(&self) -> u32 {
    self.cells.iter().copied().max().unwrap_or(0)
  }

  pub fn tile_sum(&self) -> u64 {
    self.cells.iter().map(|&v| v as u64).sum()
  }

  pub fn has_tile(&self, value: u32) -> bool {
    self.cells.contains(&value)
  }

  fn index(&self, row: usize, col: usize) -> usize {
    assert!(row < self.len && col < self.len,
            "({}, {}) out of range for {}x{} board", row, col, self.len, self.len);
    row * self.len + col
  }
}

impl fmt::Debug for Board {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.rows()).finish()
  }
}

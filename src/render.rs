use std::fmt::Write as _;
use std::io::{self, Write};

use crate::board::Board;
use crate::detect::Status;

const CELL_WIDTH: usize = 5;
const EMPTY_GLYPH: &str = ".";

/// Text grid for `board`, one line per row, cells right-aligned.
pub fn format_board(board: &Board) -> String {
  let mut out = String::new();
  for row in board.rows() {
    for &val in row {
      if val == 0 {
        let _ = write!(out, "{:>width$}", EMPTY_GLYPH, width = CELL_WIDTH);
      } else {
        let _ = write!(out, "{:>width$}", val, width = CELL_WIDTH);
      }
    }
    out.push('\n');
  }
  out
}

pub fn status_line(board: &Board, status: Status) -> String {
  match status {
    Status::Continue => format!("Max tile: {}  (arrows/wasd to move, q to quit)", board.max_tile()),
    Status::Won => format!("You win! Reached {}.  Press any key to exit.", board.max_tile()),
    Status::Lost => "Game over. No moves left.  Press any key to exit.".to_string(),
  }
}

/// Redraws the board in place by moving the cursor back over the previous
/// frame.
#[derive(Debug, Default)]
pub struct Screen {
  printed_lines: usize,
}

impl Screen {
  pub fn new() -> Screen {
    Screen::default()
  }

  /// Clears the terminal and homes the cursor.
  pub fn clear<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
    write!(out, "\x1b[2J\x1b[H")?;
    self.printed_lines = 0;
    out.flush()
  }

  pub fn draw<W: Write>(&mut self, out: &mut W, board: &Board, status: Status) -> io::Result<()> {
    if self.printed_lines != 0 {
      write!(out, "\x1b[{}A", self.printed_lines)?;
    }
    let frame = format_board(board);
    // Erase each line first so a shorter status line leaves no residue.
    for line in frame.lines() {
      write!(out, "\x1b[2K{}\n", line)?;
    }
    write!(out, "\x1b[2K\n\x1b[2K{}\n", status_line(board, status))?;
    self.printed_lines = board.len() + 2;
    out.flush()
  }
}

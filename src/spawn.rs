use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{trace, warn};

use crate::board::Board;

/// Value of every newly placed tile.
pub const SPAWN_VALUE: u32 = 2;

/// Places a `2` on an empty cell picked uniformly at random.
///
/// Returns the cell it used, or `None` if the board was full, in which case
/// the board is left as it was.
pub fn spawn<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Option<(usize, usize)> {
  let empty = board.empty_cells();
  let Some(&idx) = empty.choose(rng) else {
    warn!("no empty cell to spawn into");
    return None;
  };
  let (row, col) = board.cell_of(idx);
  board.set(row, col, SPAWN_VALUE);
  trace!(row, col, free = empty.len() - 1, "spawned tile");
  Some((row, col))
}

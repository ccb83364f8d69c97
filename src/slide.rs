use crate::board::{Board, Direction, MAX_TILE};

/// The tile two neighbours merge into, if they merge at all. Equal tiles at
/// `MAX_TILE` stay apart.
pub fn merged(a: u32, b: u32) -> Option<u32> {
  if a == 0 || a != b {
    return None;
  }
  a.checked_add(b).filter(|&sum| sum <= MAX_TILE)
}

/// Slides one row towards index 0, merging equal neighbours.
///
/// `boundary` is the leftmost slot a tile may still move into. A merge
/// pushes it just past the merged tile, so that tile can't merge again in
/// the same sweep: `[2, 2, 2, 2]` gives `[4, 4, 0, 0]`, never `[8, 0, 0, 0]`.
///
/// Returns true if anything moved.
pub fn slide_row(row: &mut [u32]) -> bool {
  let mut changed = false;
  let mut boundary = 0;
  for pos in 1..row.len() {
    if row[pos] == 0 {
      continue;
    }
    let mut cur = pos;
    while cur > boundary {
      let left = cur - 1;
      if row[left] == 0 {
        row[left] = row[cur];
        row[cur] = 0;
        cur = left;
        changed = true;
      } else if let Some(sum) = merged(row[left], row[cur]) {
        row[left] = sum;
        row[cur] = 0;
        boundary = cur;
        changed = true;
        break;
      } else {
        break;
      }
    }
  }
  changed
}

pub fn slide_left(board: &mut Board) -> bool {
  let mut changed = false;
  for row in 0..board.len() {
    changed |= slide_row(board.row_mut(row));
  }
  changed
}

/// Slides the whole board in `dir`, turning it so `dir` points left first.
pub fn shift(board: &mut Board, dir: Direction) -> bool {
  if dir == Direction::Left {
    return slide_left(board);
  }
  let mut turned = dir.to_left().apply(board);
  let changed = slide_left(&mut turned);
  *board = dir.from_left().apply(&turned);
  changed
}

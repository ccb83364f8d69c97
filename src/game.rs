//! One game session: the board, the spawn RNG and the terminal state.

use rand::Rng;
use tracing::{debug, info};

use crate::board::{Board, Direction};
use crate::detect::{status, Status};
use crate::slide::shift;
use crate::spawn::spawn;

/// What a single move did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MoveReport {
  pub changed: bool,
  pub status: Status,
  pub spawned: Option<(usize, usize)>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
  Unchanged,
  Changed,
  Won,
  Lost,
}

impl MoveReport {
  pub fn outcome(&self) -> MoveOutcome {
    match (self.status, self.changed) {
      (Status::Won, _) => MoveOutcome::Won,
      (Status::Lost, _) => MoveOutcome::Lost,
      (Status::Continue, true) => MoveOutcome::Changed,
      (Status::Continue, false) => MoveOutcome::Unchanged,
    }
  }
}

/// Slides `board` in `dir`, spawns a tile if anything moved, then checks for
/// a finished game.
pub fn apply_move<R: Rng + ?Sized>(board: &mut Board, dir: Direction, rng: &mut R, target: u32) -> MoveReport {
  let snapshot = board.clone();
  shift(board, dir);
  let changed = *board != snapshot;
  let spawned = if changed { spawn(board, rng) } else { None };
  MoveReport { changed, status: status(board, target), spawned }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
  AwaitingInput,
  Terminal(Status),
}

pub struct Game<R> {
  board: Board,
  rng: R,
  target: u32,
  phase: Phase,
  moves: u32,
}

impl<R: Rng> Game<R> {
  /// Starts a game on an empty `len`x`len` board with two spawned tiles.
  pub fn new(len: usize, target: u32, rng: R) -> Game<R> {
    let mut game = Game { board: Board::new(len), rng, target, phase: Phase::AwaitingInput, moves: 0 };
    for _ in 0..2 {
      spawn(&mut game.board, &mut game.rng);
      game.settle(status(&game.board, target));
    }
    game
  }

  /// Starts from an existing position, without spawning.
  pub fn from_board(board: Board, target: u32, rng: R) -> Game<R> {
    let mut game = Game { board, rng, target, phase: Phase::AwaitingInput, moves: 0 };
    let st = status(&game.board, target);
    game.settle(st);
    game
  }

  /// Plays one move. Returns `None` once the game is over; the board no
  /// longer changes after that.
  pub fn play(&mut self, dir: Direction) -> Option<MoveReport> {
    if let Phase::Terminal(st) = self.phase {
      debug!(?dir, ?st, "ignoring move after game end");
      return None;
    }
    let report = apply_move(&mut self.board, dir, &mut self.rng, self.target);
    if report.changed {
      self.moves += 1;
    }
    debug!(?dir, changed = report.changed, spawned = ?report.spawned, status = ?report.status, "move");
    self.settle(report.status);
    Some(report)
  }

  pub fn board(&self) -> &Board {
    &self.board
  }

  /// An owned copy of the board, safe to hand to the renderer.
  pub fn snapshot(&self) -> Board {
    self.board.clone()
  }

  pub fn phase(&self) -> Phase {
    self.phase
  }

  pub fn target(&self) -> u32 {
    self.target
  }

  /// Number of moves that changed the board.
  pub fn moves(&self) -> u32 {
    self.moves
  }

  pub fn is_over(&self) -> bool {
    matches!(self.phase, Phase::Terminal(_))
  }

  fn settle(&mut self, st: Status) {
    if self.is_over() || !st.is_terminal() {
      return;
    }
    info!(status = ?st, moves = self.moves, max_tile = self.board.max_tile(), "game over");
    self.phase = Phase::Terminal(st);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::detect::TARGET;
  use rand::SeedableRng;
  use rand_chacha::ChaCha8Rng;

  fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(2048)
  }

  fn board(rows: &[[u32; 4]]) -> Board {
    Board::from_rows(rows).unwrap()
  }

  #[test]
  fn new_game_has_two_tiles() {
    let game = Game::new(4, TARGET, rng());
    let board = game.board();
    assert_eq!(board.empty_cells().len(), 14);
    assert_eq!(board.tile_sum(), 4);
    assert!(board.rows().flatten().all(|&v| v == 0 || v == 2));
    assert_eq!(game.phase(), Phase::AwaitingInput);
    assert_eq!(game.target(), TARGET);
  }

  #[test]
  fn left_merges_and_spawns() {
    let start = board(&[[2, 0, 0, 2],
                        [0, 0, 0, 0],
                        [0, 0, 0, 0],
                        [0, 0, 0, 0]]);
    let mut game = Game::from_board(start, TARGET, rng());
    let report = game.play(Direction::Left).unwrap();
    assert!(report.changed);
    assert_eq!(report.status, Status::Continue);
    assert_eq!(report.outcome(), MoveOutcome::Changed);

    let b = game.board();
    assert_eq!(b.get(0, 0), 4);
    let (row, col) = report.spawned.unwrap();
    assert!((row, col) != (0, 0));
    assert_eq!(b.get(row, col), 2);
    assert_eq!(b.tile_sum(), 6);
    assert_eq!(b.empty_cells().len(), 14);
    assert_eq!(game.moves(), 1);
  }

  #[test]
  fn unchanged_move_does_not_spawn() {
    let start = board(&[[2, 4, 0, 0],
                        [8, 0, 0, 0],
                        [0, 0, 0, 0],
                        [16, 2, 0, 0]]);
    let mut game = Game::from_board(start.clone(), TARGET, rng());
    let report = game.play(Direction::Left).unwrap();
    assert_eq!(report, MoveReport { changed: false, status: Status::Continue, spawned: None });
    assert_eq!(report.outcome(), MoveOutcome::Unchanged);
    assert_eq!(game.board(), &start);
    assert_eq!(game.moves(), 0);
  }

  #[test]
  fn apply_move_without_game() {
    let mut b = board(&[[0, 0, 0, 0],
                        [0, 0, 0, 0],
                        [2, 0, 0, 0],
                        [2, 0, 0, 0]]);
    let report = apply_move(&mut b, Direction::Up, &mut rng(), TARGET);
    assert!(report.changed);
    assert_eq!(b.get(0, 0), 4);
    assert_eq!(b.tile_sum(), 6);
  }

  #[test]
  fn reaching_target_wins() {
    let start = board(&[[1024, 1024, 0, 0],
                        [0, 0, 0, 0],
                        [0, 0, 0, 0],
                        [0, 0, 0, 0]]);
    let mut game = Game::from_board(start, TARGET, rng());
    let report = game.play(Direction::Right).unwrap();
    assert_eq!(report.outcome(), MoveOutcome::Won);
    assert_eq!(game.phase(), Phase::Terminal(Status::Won));
  }

  #[test]
  fn last_merge_then_locked() {
    // Sliding right merges the 4s; the spawn fills the only gap and leaves
    // no pairs.
    let start = board(&[[8, 16, 4, 4],
                        [4, 2, 4, 2],
                        [8, 4, 2, 4],
                        [2, 8, 4, 2]]);
    let mut game = Game::from_board(start, TARGET, rng());
    let report = game.play(Direction::Right).unwrap();
    assert_eq!(report.spawned, Some((0, 0)));
    assert_eq!(game.board().row(0), &[2, 8, 16, 8]);
    assert_eq!(report.status, Status::Lost);
    assert!(game.is_over());
  }

  #[test]
  fn terminal_ignores_input() {
    let locked = board(&[[2, 4, 2, 4],
                         [4, 2, 4, 2],
                         [2, 4, 2, 4],
                         [4, 2, 4, 2]]);
    let mut game = Game::from_board(locked.clone(), TARGET, rng());
    assert_eq!(game.phase(), Phase::Terminal(Status::Lost));
    for dir in Direction::ALL {
      assert_eq!(game.play(dir), None);
    }
    assert_eq!(game.snapshot(), locked);
  }

  #[test]
  fn won_is_absorbing() {
    let start = board(&[[2048, 2, 0, 0],
                        [0, 0, 0, 0],
                        [0, 0, 0, 0],
                        [0, 0, 0, 0]]);
    let mut game = Game::from_board(start.clone(), TARGET, rng());
    assert_eq!(game.play(Direction::Down), None);
    assert_eq!(game.board(), &start);
  }

  #[test]
  fn seeded_games_repeat() {
    let play = || {
      let mut game = Game::new(4, TARGET, rng());
      for dir in [Direction::Left, Direction::Up, Direction::Right, Direction::Down].iter().cycle().take(40) {
        game.play(*dir);
      }
      game.snapshot()
    };
    assert_eq!(play(), play());
  }

  #[test]
  fn snapshot_is_detached() {
    let mut game = Game::new(4, TARGET, rng());
    let before = game.snapshot();
    let mut dirs = Direction::ALL.iter().cycle();
    while !game.play(*dirs.next().unwrap()).map_or(true, |r| r.changed) {}
    assert_ne!(game.snapshot(), before);
  }
}

//! Sliding-tile 2048 engine.
//!
//! The board, the single left slide every move is reduced to, tile spawning
//! and end-of-game detection live here; the `slide2048` binary wraps them in
//! a terminal front end.

pub mod board;
pub mod detect;
pub mod error;
pub mod game;
pub mod input;
pub mod render;
pub mod rotate;
pub mod slide;
pub mod spawn;

pub use crate::board::{Board, Direction, BOARD_LEN, MAX_TILE};
pub use crate::detect::{can_move, status, stuck_cells, Status, TARGET};
pub use crate::error::{BoardError, GameError};
pub use crate::game::{apply_move, Game, MoveOutcome, MoveReport, Phase};
pub use crate::input::{read_key, Key};
pub use crate::render::{format_board, Screen};
pub use crate::rotate::{rotate, rotate_half, Rotation, Turn};
pub use crate::slide::{merged, shift, slide_left, slide_row};
pub use crate::spawn::{spawn, SPAWN_VALUE};

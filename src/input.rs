//! Keyboard decoding for the terminal front end.

use std::io;

use crate::board::Direction;

const ESC: u8 = 0x1b;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
  Move(Direction),
  Quit,
  Other,
}

/// Reads one key press, pulling as many bytes from `next` as it needs.
///
/// Arrow keys arrive as `ESC [ A`..`ESC [ D`. An `ESC` followed by anything
/// other than `[` counts as quit and that byte is consumed. Reads block with
/// no timeout, so a lone `ESC` press only registers once another key comes.
pub fn read_key<F>(mut next: F) -> io::Result<Key>
  where F: FnMut() -> io::Result<u8>
{
  let key = match next()? {
    b'w' | b'k' => Key::Move(Direction::Up),
    b's' | b'j' => Key::Move(Direction::Down),
    b'a' | b'h' => Key::Move(Direction::Left),
    b'd' | b'l' => Key::Move(Direction::Right),
    b'q' | b'Q' => Key::Quit,
    ESC => {
      if next()? != b'[' {
        return Ok(Key::Quit);
      }
      match next()? {
        b'A' => Key::Move(Direction::Up),
        b'B' => Key::Move(Direction::Down),
        b'C' => Key::Move(Direction::Right),
        b'D' => Key::Move(Direction::Left),
        _ => Key::Other,
      }
    }
    _ => Key::Other,
  };
  Ok(key)
}

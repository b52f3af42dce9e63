//! Fixed mapping from the turner's arrow keys to MIDI controller numbers.

use evdev::Key;
use std::fmt;

/// One of the four keys the turner sends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn key(self) -> Key {
        match self {
            Direction::Left => Key::KEY_LEFT,
            Direction::Right => Key::KEY_RIGHT,
            Direction::Up => Key::KEY_UP,
            Direction::Down => Key::KEY_DOWN,
        }
    }

    /// Controller number carried by CC messages for this key
    pub fn controller(self) -> u8 {
        match self {
            Direction::Left => 16,
            Direction::Right => 17,
            Direction::Up => 18,
            Direction::Down => 19,
        }
    }

    pub fn from_code(code: u16) -> Option<Direction> {
        let key = Key::new(code);
        Direction::ALL.into_iter().find(|d| d.key() == key)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        f.write_str(name)
    }
}

/// Controller number for a raw key code, `None` for keys the turner doesn't map
pub fn map(code: u16) -> Option<u8> {
    Direction::from_code(code).map(Direction::controller)
}

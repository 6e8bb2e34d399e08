//! Compass Directions
//!
//! The nine canonical grid directions. `Direction` is a closed enum, separate
//! from `Vec2`; it converts to its unit offset with `From`.

use std::fmt;
use serde::{Serialize, Deserialize};

use super::vec2::Vec2;

/// One of the eight compass directions, or `None` for no movement.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Direction {
    /// No direction (zero offset)
    None,
    /// North, `(0, -1)`
    N,
    /// North-east, `(1, -1)`
    NE,
    /// East, `(1, 0)`
    E,
    /// South-east, `(1, 1)`
    SE,
    /// South, `(0, 1)`
    S,
    /// South-west, `(-1, 1)`
    SW,
    /// West, `(-1, 0)`
    W,
    /// North-west, `(-1, -1)`
    NW,
}

impl Direction {
    /// The eight cardinal and intercardinal directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// The four cardinal directions: north, east, south and west.
    pub const CARDINAL: [Direction; 4] = [Direction::N, Direction::E, Direction::S, Direction::W];

    /// The four directions between the cardinal ones.
    pub const INTERCARDINAL: [Direction; 4] =
        [Direction::NE, Direction::SE, Direction::SW, Direction::NW];

    /// Unit offset of this direction.
    #[inline]
    pub const fn offset(self) -> Vec2 {
        match self {
            Direction::None => Vec2::new(0, 0),
            Direction::N => Vec2::new(0, -1),
            Direction::NE => Vec2::new(1, -1),
            Direction::E => Vec2::new(1, 0),
            Direction::SE => Vec2::new(1, 1),
            Direction::S => Vec2::new(0, 1),
            Direction::SW => Vec2::new(-1, 1),
            Direction::W => Vec2::new(-1, 0),
            Direction::NW => Vec2::new(-1, -1),
        }
    }

    /// X component of the unit offset.
    #[inline]
    pub const fn x(self) -> i32 {
        self.offset().x
    }

    /// Y component of the unit offset.
    #[inline]
    pub const fn y(self) -> i32 {
        self.offset().y
    }

    /// Rotate 45 degrees counter-clockwise. `None` stays `None`.
    pub const fn rotate_left45(self) -> Self {
        match self {
            Direction::None => Direction::None,
            Direction::N => Direction::NW,
            Direction::NE => Direction::N,
            Direction::E => Direction::NE,
            Direction::SE => Direction::E,
            Direction::S => Direction::SE,
            Direction::SW => Direction::S,
            Direction::W => Direction::SW,
            Direction::NW => Direction::W,
        }
    }

    /// Rotate 45 degrees clockwise. `None` stays `None`.
    pub const fn rotate_right45(self) -> Self {
        match self {
            Direction::None => Direction::None,
            Direction::N => Direction::NE,
            Direction::NE => Direction::E,
            Direction::E => Direction::SE,
            Direction::SE => Direction::S,
            Direction::S => Direction::SW,
            Direction::SW => Direction::W,
            Direction::W => Direction::NW,
            Direction::NW => Direction::N,
        }
    }

    /// Rotate 90 degrees counter-clockwise.
    #[inline]
    pub const fn rotate_left90(self) -> Self {
        self.rotate_left45().rotate_left45()
    }

    /// Rotate 90 degrees clockwise.
    #[inline]
    pub const fn rotate_right90(self) -> Self {
        self.rotate_right45().rotate_right45()
    }

    /// Reverse the direction.
    #[inline]
    pub const fn rotate180(self) -> Self {
        self.rotate_right90().rotate_right90()
    }

    /// Lowercase compass name (`"n"`, `"se"`, `"none"`).
    pub const fn name(self) -> &'static str {
        match self {
            Direction::None => "none",
            Direction::N => "n",
            Direction::NE => "ne",
            Direction::E => "e",
            Direction::SE => "se",
            Direction::S => "s",
            Direction::SW => "sw",
            Direction::W => "w",
            Direction::NW => "nw",
        }
    }
}

impl From<Direction> for Vec2 {
    #[inline]
    fn from(dir: Direction) -> Self {
        dir.offset()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// TESTS
// =============================================================================

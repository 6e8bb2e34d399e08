//! Integer 2D Vector
//!
//! Grid positions and offsets. All arithmetic is integer; only `length`
//! produces a float. Squared lengths are widened to `i64` so comparisons
//! stay exact.

use std::fmt;
use std::ops::{Add, Sub, Mul, Div, Neg};
use serde::{Serialize, Deserialize};

use super::direction::Direction;

/// 2D vector with integer components.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vec2 {
    /// X component (grows east)
    pub x: i32,
    /// Y component (grows south)
    pub y: i32,
}

/// Anything whose squared magnitude can be compared against a `Vec2`.
///
/// Vectors and directions contribute their squared length. A scalar is a
/// plain length and gets squared.
pub trait Magnitude {
    /// Squared magnitude.
    fn magnitude_squared(&self) -> i64;
}

impl Magnitude for Vec2 {
    #[inline]
    fn magnitude_squared(&self) -> i64 {
        self.length_squared()
    }
}

impl Magnitude for Direction {
    #[inline]
    fn magnitude_squared(&self) -> i64 {
        self.offset().length_squared()
    }
}

impl Magnitude for i32 {
    #[inline]
    fn magnitude_squared(&self) -> i64 {
        let v = *self as i64;
        v * v
    }
}

impl Vec2 {
    /// Zero vector
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new vector.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Create a vector by flooring float coordinates.
    #[inline]
    pub fn floor(x: f64, y: f64) -> Self {
        Self::new(x.floor() as i32, y.floor() as i32)
    }

    /// Area of the rect with corners (0, 0) and this vector.
    /// Negative if exactly one coordinate is negative.
    #[inline]
    pub fn area(self) -> i64 {
        self.x as i64 * self.y as i64
    }

    /// Manhattan distance from the origin: the moves a rook needs.
    #[inline]
    pub fn rook_length(self) -> i32 {
        self.x.wrapping_abs().wrapping_add(self.y.wrapping_abs())
    }

    /// Chebyshev distance from the origin: the moves a king needs.
    #[inline]
    pub fn king_length(self) -> i32 {
        self.x.wrapping_abs().max(self.y.wrapping_abs())
    }

    /// Squared length (exact - prefer this for comparisons).
    #[inline]
    pub fn length_squared(self) -> i64 {
        let x = self.x as i64;
        let y = self.y as i64;
        x * x + y * y
    }

    /// Euclidean length. Prefer `length_squared` or the `is_*_than`
    /// comparisons when only ordering matters.
    #[inline]
    pub fn length(self) -> f64 {
        (self.length_squared() as f64).sqrt()
    }

    /// The direction whose octant contains this vector.
    ///
    /// Octants are split by slope, not true angle, at `±0.5` and `±2.0`.
    /// A vector exactly on a boundary goes to the clockwise neighbour:
    ///
    /// ```text
    ///               n
    ///      nw   2.0  -2.0  ne
    ///         \  '  |  '  /
    ///      0.5  \ ' | ' /   -0.5
    ///           ' \'|'/ '
    ///       w ------0------ e
    ///           ' /'|'\ '
    ///     -0.5  / ' | ' \   0.5
    ///         /  '  |  '  \
    ///       sw -2.0   2.0  se
    ///               s
    /// ```
    pub fn nearest_direction(self) -> Direction {
        if self.x == 0 {
            return match self.y.signum() {
                -1 => Direction::N,
                0 => Direction::None,
                _ => Direction::S,
            };
        }

        let slope = self.y as f64 / self.x as f64;

        if self.x < 0 {
            if slope >= 2.0 {
                Direction::N
            } else if slope >= 0.5 {
                Direction::NW
            } else if slope >= -0.5 {
                Direction::W
            } else if slope >= -2.0 {
                Direction::SW
            } else {
                Direction::S
            }
        } else if slope >= 2.0 {
            Direction::S
        } else if slope >= 0.5 {
            Direction::SE
        } else if slope >= -0.5 {
            Direction::E
        } else if slope >= -2.0 {
            Direction::NE
        } else {
            Direction::N
        }
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.wrapping_abs(), self.y.wrapping_abs())
    }

    /// Translate by `x` and `y`.
    #[inline]
    pub fn offset(self, x: i32, y: i32) -> Self {
        Self::new(self.x.wrapping_add(x), self.y.wrapping_add(y))
    }

    /// Translate along the X axis only.
    #[inline]
    pub fn offset_x(self, x: i32) -> Self {
        Self::new(self.x.wrapping_add(x), self.y)
    }

    /// Translate along the Y axis only.
    #[inline]
    pub fn offset_y(self, y: i32) -> Self {
        Self::new(self.x, self.y.wrapping_add(y))
    }

    /// Magnitude strictly less than `other`.
    #[inline]
    pub fn is_less_than(self, other: impl Magnitude) -> bool {
        self.length_squared() < other.magnitude_squared()
    }

    /// Magnitude less than or equal to `other`.
    #[inline]
    pub fn is_less_than_or_equal(self, other: impl Magnitude) -> bool {
        self.length_squared() <= other.magnitude_squared()
    }

    /// Magnitude strictly greater than `other`.
    #[inline]
    pub fn is_greater_than(self, other: impl Magnitude) -> bool {
        self.length_squared() > other.magnitude_squared()
    }

    /// Magnitude greater than or equal to `other`.
    #[inline]
    pub fn is_greater_than_or_equal(self, other: impl Magnitude) -> bool {
        self.length_squared() >= other.magnitude_squared()
    }

    /// The eight surrounding positions, clockwise from north.
    pub fn neighbors(self) -> [Vec2; 8] {
        Direction::ALL.map(|dir| self + dir)
    }

    /// The four orthogonally adjacent positions (n, e, s, w).
    pub fn cardinal_neighbors(self) -> [Vec2; 4] {
        Direction::CARDINAL.map(|dir| self + dir)
    }

    /// The four diagonally adjacent positions (ne, se, sw, nw).
    pub fn intercardinal_neighbors(self) -> [Vec2; 4] {
        Direction::INTERCARDINAL.map(|dir| self + dir)
    }

    /// Whether `pos` lies in the half-open rect from (0, 0) to this vector.
    ///
    /// Bounds are sign-aware: `(-3, 2)` covers x in `[-3, 0)`.
    pub fn contains(self, pos: Vec2) -> bool {
        let left = self.x.min(0);
        let right = self.x.max(0);
        let top = self.y.min(0);
        let bottom = self.y.max(0);

        pos.x >= left && pos.x < right && pos.y >= top && pos.y < bottom
    }
}

/// Integer division rounding toward negative infinity.
#[inline]
pub(crate) fn floor_div(a: i32, b: i32) -> i32 {
    let q = a.wrapping_div(b);
    if a.wrapping_rem(b) != 0 && ((a < 0) != (b < 0)) {
        q - 1
    } else {
        q
    }
}

// Operator overloads: each op takes a vector, a direction, or a scalar that
// applies to both axes.
macro_rules! impl_vec2_op {
    ($op:ident, $method:ident, $f:expr) => {
        impl $op<Vec2> for Vec2 {
            type Output = Vec2;
            #[inline]
            fn $method(self, rhs: Vec2) -> Vec2 {
                let f: fn(i32, i32) -> i32 = $f;
                Vec2::new(f(self.x, rhs.x), f(self.y, rhs.y))
            }
        }

        impl $op<Direction> for Vec2 {
            type Output = Vec2;
            #[inline]
            fn $method(self, rhs: Direction) -> Vec2 {
                $op::$method(self, rhs.offset())
            }
        }

        impl $op<i32> for Vec2 {
            type Output = Vec2;
            #[inline]
            fn $method(self, rhs: i32) -> Vec2 {
                $op::$method(self, Vec2::new(rhs, rhs))
            }
        }
    };
}

impl_vec2_op!(Add, add, |a, b| a.wrapping_add(b));
impl_vec2_op!(Sub, sub, |a, b| a.wrapping_sub(b));
impl_vec2_op!(Mul, mul, |a, b| a.wrapping_mul(b));
impl_vec2_op!(Div, div, floor_div);

impl Neg for Vec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(self.x.wrapping_neg(), self.y.wrapping_neg())
    }
}

impl From<(i32, i32)> for Vec2 {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Debug for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec2({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

// =============================================================================
// TESTS
// =============================================================================

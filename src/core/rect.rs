//! Integer Rectangles
//!
//! A `Rect` is a half-open region of grid cells: it includes its left and
//! top edges and excludes its right and bottom ones. The rect
//! `(-1, 1)-(4, 3)` covers x in `[-1, 3)` and y in `[1, 4)`:
//!
//! ```text
//!      -2 -1  0  1  2  3  4
//!     0-
//!     1-   *--*--*--*--+
//!     2-   *  *  *  *  |
//!     3-   *  *  *  *  |
//!     4-   +-----------+
//! ```
//!
//! Width and height may be negative. The raw `(x, y, width, height)` are
//! kept as given; `left`/`right`/`top`/`bottom` normalize with min/max.

use std::fmt;
use serde::{Serialize, Deserialize};

use super::vec2::{floor_div, Vec2};
use crate::raster::rect_iter::RectIter;

/// Immutable integer rectangle with a signed size.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize)]
pub struct Rect {
    pos: Vec2,
    size: Vec2,
}

impl Rect {
    /// The empty rect at the origin.
    pub const EMPTY: Self = Self::new(0, 0, 0, 0);

    /// Create a rect from its raw position and size.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Create a rect from a position and a size vector.
    #[inline]
    pub const fn pos_and_size(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Create a rect from its edges.
    #[inline]
    pub fn left_top_right_bottom(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right.wrapping_sub(left), bottom.wrapping_sub(top))
    }

    /// A single row `len` cells wide with its left end at (x, y).
    #[inline]
    pub const fn row(x: i32, y: i32, len: i32) -> Self {
        Self::new(x, y, len, 1)
    }

    /// A single column `len` cells tall with its top end at (x, y).
    #[inline]
    pub const fn column(x: i32, y: i32, len: i32) -> Self {
        Self::new(x, y, 1, len)
    }

    /// Rect covering the overlap of `a` and `b`. Never has a negative size;
    /// disjoint rects give a zero width or height.
    ///
    /// ```text
    ///     .----------.
    ///     | a        |
    ///     | .--------+----.
    ///     | | result |  b |
    ///     '-+--------'    |
    ///       '-------------'
    /// ```
    pub fn intersect(a: Rect, b: Rect) -> Rect {
        let left = a.left().max(b.left());
        let right = a.right().min(b.right());
        let top = a.top().max(b.top());
        let bottom = a.bottom().min(b.bottom());

        let width = (right - left).max(0);
        let height = (bottom - top).max(0);

        Rect::new(left, top, width, height)
    }

    /// Rect with `inner`'s size, offset so it sits centred within a rect
    /// of `outer`'s size. The offset is relative to `outer`'s origin.
    pub fn center_in(inner: Rect, outer: Rect) -> Rect {
        let pos = (outer.size - inner.size) / 2;
        Rect::pos_and_size(pos, inner.size)
    }

    /// Raw position, as given.
    #[inline]
    pub const fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Raw size, as given. May be negative.
    #[inline]
    pub const fn size(&self) -> Vec2 {
        self.size
    }

    /// Raw x.
    #[inline]
    pub const fn x(&self) -> i32 {
        self.pos.x
    }

    /// Raw y.
    #[inline]
    pub const fn y(&self) -> i32 {
        self.pos.y
    }

    /// Raw width.
    #[inline]
    pub const fn width(&self) -> i32 {
        self.size.x
    }

    /// Raw height.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.size.y
    }

    // min/max so a negative size flips which raw edge is which.

    /// Smallest x inside.
    #[inline]
    pub fn left(&self) -> i32 {
        self.x().min(self.x().wrapping_add(self.width()))
    }

    /// One past the largest x inside.
    #[inline]
    pub fn right(&self) -> i32 {
        self.x().max(self.x().wrapping_add(self.width()))
    }

    /// Smallest y inside.
    #[inline]
    pub fn top(&self) -> i32 {
        self.y().min(self.y().wrapping_add(self.height()))
    }

    /// One past the largest y inside.
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y().max(self.y().wrapping_add(self.height()))
    }

    /// `(left, top)`
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.left(), self.top())
    }

    /// `(right, top)`
    pub fn top_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.top())
    }

    /// `(left, bottom)`
    pub fn bottom_left(&self) -> Vec2 {
        Vec2::new(self.left(), self.bottom())
    }

    /// `(right, bottom)`
    pub fn bottom_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }

    /// Midpoint of the normalized bounds, floored.
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            floor_div(self.left() + self.right(), 2),
            floor_div(self.top() + self.bottom(), 2),
        )
    }

    /// `width * height`. Negative when exactly one dimension is negative.
    #[inline]
    pub fn area(&self) -> i64 {
        self.size.area()
    }

    /// Grow by `distance` on every side (shrink if negative).
    pub fn inflate(&self, distance: i32) -> Rect {
        Rect::new(
            self.x() - distance,
            self.y() - distance,
            self.width() + distance * 2,
            self.height() + distance * 2,
        )
    }

    /// Translate by `x` and `y`, keeping the size.
    pub fn offset(&self, x: i32, y: i32) -> Rect {
        Rect::new(self.x() + x, self.y() + y, self.width(), self.height())
    }

    /// Whether `pos` lies inside, tested against the raw fields:
    /// `x <= pos.x < x + width` and `y <= pos.y < y + height`.
    ///
    /// A rect with a negative width or height therefore contains nothing.
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= self.x()
            && pos.x < self.x().wrapping_add(self.width())
            && pos.y >= self.y()
            && pos.y < self.y().wrapping_add(self.height())
    }

    /// Whether `other` lies entirely within the normalized bounds.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }

    /// Nearest position to `vec` within `[left, right] x [top, bottom]`.
    pub fn clamp(&self, vec: Vec2) -> Vec2 {
        Vec2::new(
            vec.x.clamp(self.left(), self.right()),
            vec.y.clamp(self.top(), self.bottom()),
        )
    }

    /// Length of the shortest corridor joining this rect to `other`.
    ///
    /// Zero when the rects share an edge, `-1` when they overlap.
    pub fn distance_to(&self, other: &Rect) -> i32 {
        let vertical = if self.top() >= other.bottom() {
            Some(self.top() - other.bottom())
        } else if self.bottom() <= other.top() {
            Some(other.top() - self.bottom())
        } else {
            None
        };

        let horizontal = if self.left() >= other.right() {
            Some(self.left() - other.right())
        } else if self.right() <= other.left() {
            Some(other.left() - self.right())
        } else {
            None
        };

        match (vertical, horizontal) {
            (None, None) => -1,
            (None, Some(h)) => h,
            (Some(v), None) => v,
            (Some(v), Some(h)) => v + h,
        }
    }

    /// The cells along the edge of the rect.
    ///
    /// For rects at least 2x2 the order is: for each column, the top cell
    /// then the bottom cell; then for each interior row, the left cell then
    /// the right cell. A single row or column traces all its cells. Rects
    /// without a positive size trace nothing.
    pub fn trace(&self) -> Vec<Vec2> {
        let (width, height) = (self.width(), self.height());

        if width > 1 && height > 1 {
            let mut cells = Vec::with_capacity((2 * width + 2 * (height - 2)) as usize);

            for x in self.left()..self.right() {
                cells.push(Vec2::new(x, self.top()));
                cells.push(Vec2::new(x, self.bottom() - 1));
            }

            for y in self.top() + 1..self.bottom() - 1 {
                cells.push(Vec2::new(self.left(), y));
                cells.push(Vec2::new(self.right() - 1, y));
            }

            cells
        } else if width > 1 && height == 1 {
            Rect::row(self.left(), self.top(), width).iter().collect()
        } else if width == 1 && height >= 1 {
            Rect::column(self.left(), self.top(), height).iter().collect()
        } else {
            Vec::new()
        }
    }

    /// Cursor over every cell in row-major order.
    #[inline]
    pub fn iter(&self) -> RectIter {
        RectIter::new(*self)
    }
}

impl IntoIterator for Rect {
    type Item = Vec2;
    type IntoIter = RectIter;

    fn into_iter(self) -> RectIter {
        RectIter::new(self)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})-({})", self.pos, self.size)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(Rect::EMPTY.pos(), Vec2::ZERO);
        assert_eq!(Rect::EMPTY.size(), Vec2::ZERO);
        assert!(Rect::EMPTY.iter().next().is_none());
    }

    #[test]
    fn test_factories() {
        let rect = Rect::pos_and_size(Vec2::new(1, 2), Vec2::new(3, 4));
        assert_eq!(rect, Rect::new(1, 2, 3, 4));

        let rect = Rect::left_top_right_bottom(1, 2, 3, 4);
        assert_eq!(rect, Rect::new(1, 2, 2, 2));

        assert_eq!(Rect::row(1, 2, 3), Rect::new(1, 2, 3, 1));
        assert_eq!(Rect::column(1, 2, 3), Rect::new(1, 2, 1, 3));
    }

    #[test]
    fn test_coordinates() {
        let rect = Rect::new(-1, 2, 3, 4);
        assert_eq!(rect.left(), -1);
        assert_eq!(rect.top(), 2);
        assert_eq!(rect.right(), 2);
        assert_eq!(rect.bottom(), 6);

        assert_eq!(rect.top_left(), Vec2::new(-1, 2));
        assert_eq!(rect.top_right(), Vec2::new(2, 2));
        assert_eq!(rect.bottom_right(), Vec2::new(2, 6));
        assert_eq!(rect.bottom_left(), Vec2::new(-1, 6));
        assert_eq!(rect.center(), Vec2::new(0, 4));
    }

    #[test]
    fn test_negative_size_coordinates() {
        let rect = Rect::new(1, 2, -3, -4);
        assert_eq!(rect.x(), 1);
        assert_eq!(rect.width(), -3);

        assert_eq!(rect.left(), -2);
        assert_eq!(rect.top(), -2);
        assert_eq!(rect.right(), 1);
        assert_eq!(rect.bottom(), 2);
        assert!(rect.left() <= rect.right() && rect.top() <= rect.bottom());

        assert_eq!(rect.top_left(), Vec2::new(-2, -2));
        assert_eq!(rect.bottom_right(), Vec2::new(1, 2));
    }

    #[test]
    fn test_area() {
        assert_eq!(Rect::new(-1, 2, 3, 4).area(), 12);
        assert_eq!(Rect::new(0, 0, 3, 0).area(), 0);
        assert_eq!(Rect::new(0, 0, -2, 3).area(), -6);
        assert_eq!(Rect::new(0, 0, 2, -3).area(), -6);
        assert_eq!(Rect::new(0, 0, -2, -3).area(), 6);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rect::new(1, 2, 3, 4).to_string(), "(1, 2)-(3, 4)");
    }

    #[test]
    fn test_offset_and_inflate() {
        let rect = Rect::new(1, 2, 3, 4);
        assert_eq!(rect.offset(5, 6), Rect::new(6, 8, 3, 4));
        assert_eq!(rect.offset(-5, -6), Rect::new(-4, -4, 3, 4));
        assert_eq!(rect.inflate(1), Rect::new(0, 1, 5, 6));
        assert_eq!(rect.inflate(-1), Rect::new(2, 3, 1, 2));
    }

    #[test]
    fn test_intersect() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(2, 2, 4, 4);
        assert_eq!(Rect::intersect(a, b), Rect::new(2, 2, 2, 2));
        assert_eq!(Rect::intersect(b, a), Rect::new(2, 2, 2, 2));

        let far = Rect::new(10, 10, 2, 2);
        let none = Rect::intersect(a, far);
        assert_eq!(none.width(), 0);
        assert_eq!(none.height(), 0);
    }

    #[test]
    fn test_center_in() {
        let inner = Rect::new(7, 7, 3, 2);
        let outer = Rect::new(0, 0, 10, 7);
        assert_eq!(Rect::center_in(inner, outer), Rect::new(3, 2, 3, 2));
    }

    #[test]
    fn test_contains_uses_raw_fields() {
        let rect = Rect::new(1, 2, 3, 4);
        assert!(rect.contains(Vec2::new(1, 2)));
        assert!(rect.contains(Vec2::new(3, 5)));
        assert!(!rect.contains(Vec2::new(4, 5)));
        assert!(!rect.contains(Vec2::new(3, 6)));
        assert!(!rect.contains(Vec2::new(0, 2)));

        // Reversed extents contain nothing, even inside the normalized bounds.
        let reversed = Rect::new(3, 3, -2, -2);
        assert!(!reversed.contains(Vec2::new(2, 2)));
        // The vector form treats the same size sign-aware.
        assert!(Vec2::new(-2, -2).contains(Vec2::new(-1, -1)));
    }

    #[test]
    fn test_contains_rect() {
        let outer = Rect::new(0, 0, 10, 10);
        assert!(outer.contains_rect(&Rect::new(2, 2, 3, 3)));
        assert!(outer.contains_rect(&outer));
        assert!(!outer.contains_rect(&Rect::new(8, 8, 3, 3)));
    }

    #[test]
    fn test_clamp() {
        let rect = Rect::new(1, 2, 3, 4);
        assert_eq!(rect.clamp(Vec2::new(2, 3)), Vec2::new(2, 3));
        assert_eq!(rect.clamp(Vec2::new(0, 3)), Vec2::new(1, 3));
        assert_eq!(rect.clamp(Vec2::new(10, 3)), Vec2::new(4, 3));
        assert_eq!(rect.clamp(Vec2::new(2, 0)), Vec2::new(2, 2));
        assert_eq!(rect.clamp(Vec2::new(2, 8)), Vec2::new(2, 6));
        assert_eq!(rect.clamp(Vec2::new(20, 30)), Vec2::new(4, 6));
    }

    #[test]
    fn test_distance_to() {
        let a = Rect::new(0, 0, 4, 4);

        // Sharing an edge.
        assert_eq!(a.distance_to(&Rect::new(4, 0, 4, 4)), 0);
        assert_eq!(a.distance_to(&Rect::new(0, 4, 4, 4)), 0);

        // Overlapping.
        assert_eq!(a.distance_to(&Rect::new(2, 2, 4, 4)), -1);

        // Two-cell gap along one axis.
        assert_eq!(a.distance_to(&Rect::new(6, 1, 2, 2)), 2);
        assert_eq!(Rect::new(6, 1, 2, 2).distance_to(&a), 2);

        // Gaps on both axes add up.
        assert_eq!(a.distance_to(&Rect::new(7, 9, 2, 2)), 8);
    }

    #[test]
    fn test_trace_box() {
        let cells = Rect::new(0, 0, 3, 3).trace();
        assert_eq!(
            cells,
            vec![
                Vec2::new(0, 0),
                Vec2::new(0, 2),
                Vec2::new(1, 0),
                Vec2::new(1, 2),
                Vec2::new(2, 0),
                Vec2::new(2, 2),
                Vec2::new(0, 1),
                Vec2::new(2, 1),
            ]
        );

        // Every traced cell is on the border and inside the rect.
        let rect = Rect::new(-2, 5, 6, 4);
        let traced = rect.trace();
        assert_eq!(traced.len(), 2 * 6 + 2 * (4 - 2));
        for cell in traced {
            assert!(rect.contains(cell));
            let on_edge = cell.x == rect.left()
                || cell.x == rect.right() - 1
                || cell.y == rect.top()
                || cell.y == rect.bottom() - 1;
            assert!(on_edge, "{cell} is interior");
        }
    }

    #[test]
    fn test_trace_degenerate() {
        assert_eq!(
            Rect::row(1, 1, 3).trace(),
            vec![Vec2::new(1, 1), Vec2::new(2, 1), Vec2::new(3, 1)]
        );
        assert_eq!(
            Rect::column(1, 1, 2).trace(),
            vec![Vec2::new(1, 1), Vec2::new(1, 2)]
        );
        assert_eq!(Rect::new(4, 4, 1, 1).trace(), vec![Vec2::new(4, 4)]);
        assert!(Rect::new(0, 0, 0, 5).trace().is_empty());
        assert!(Rect::new(0, 0, 3, -2).trace().is_empty());
    }
}

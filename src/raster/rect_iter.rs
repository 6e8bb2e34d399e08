//! Row-major rectangle scan.

use std::iter::FusedIterator;

use super::Cursor;
use crate::core::rect::Rect;
use crate::core::vec2::Vec2;

/// Cursor over the cells of a `Rect`, row by row, left to right.
#[derive(Clone, Debug)]
pub struct RectIter {
    x: i32,
    y: i32,
    left: i32,
    right: i32,
    bottom: i32,
}

impl RectIter {
    /// Start a scan positioned one cell before the rect's first cell.
    ///
    /// A rect without a positive width and height scans nothing.
    pub fn new(rect: Rect) -> Self {
        let empty = rect.width() <= 0 || rect.height() <= 0;
        Self {
            x: rect.left() - 1,
            y: if empty { rect.bottom() } else { rect.top() },
            left: rect.left(),
            right: rect.right(),
            bottom: rect.bottom(),
        }
    }
}

impl Cursor for RectIter {
    #[inline]
    fn current(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    fn move_next(&mut self) -> bool {
        if self.y >= self.bottom {
            return false;
        }

        self.x += 1;
        if self.x >= self.right {
            self.x = self.left;
            self.y += 1;
        }

        self.y < self.bottom
    }
}

impl Iterator for RectIter {
    type Item = Vec2;

    #[inline]
    fn next(&mut self) -> Option<Vec2> {
        self.move_next().then(|| self.current())
    }
}

impl FusedIterator for RectIter {}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_order() {
        let cells: Vec<Vec2> = Rect::new(0, 0, 3, 2).iter().collect();
        assert_eq!(
            cells,
            vec![
                Vec2::new(0, 0),
                Vec2::new(1, 0),
                Vec2::new(2, 0),
                Vec2::new(0, 1),
                Vec2::new(1, 1),
                Vec2::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_cursor_protocol() {
        let mut cursor = RectIter::new(Rect::new(5, -2, 2, 1));
        assert_eq!(cursor.current(), Vec2::new(4, -2));

        assert!(cursor.move_next());
        assert_eq!(cursor.current(), Vec2::new(5, -2));
        assert!(cursor.move_next());
        assert_eq!(cursor.current(), Vec2::new(6, -2));
        assert!(!cursor.move_next());
        // Stays exhausted.
        assert!(!cursor.move_next());
    }

    #[test]
    fn test_offset_rect() {
        let rect = Rect::new(-1, 3, 2, 2);
        let cells: Vec<Vec2> = rect.into_iter().collect();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0], Vec2::new(-1, 3));
        assert_eq!(cells[3], Vec2::new(0, 4));
        assert!(cells.iter().all(|c| rect.contains(*c)));
    }

    #[test]
    fn test_empty_rects_scan_nothing() {
        assert_eq!(Rect::new(0, 0, 0, 3).iter().count(), 0);
        assert_eq!(Rect::new(0, 0, 3, 0).iter().count(), 0);
        assert_eq!(Rect::new(4, 4, -2, 2).iter().count(), 0);
    }

    #[test]
    fn test_restart_by_new_cursor() {
        let rect = Rect::new(0, 0, 4, 3);
        let first: Vec<Vec2> = rect.iter().collect();
        let second: Vec<Vec2> = rect.iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len() as i64, rect.area());
    }
}

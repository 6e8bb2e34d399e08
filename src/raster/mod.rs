//! Position cursors.
//!
//! Lazy generators of grid positions: a row-major rectangle scan, a
//! rasterized circle (filled or edge-only), and a Bresenham line walk. Each
//! cursor holds only the integers it needs for the next step and is
//! forward-only; construct a new one to start over.
//!
//! Every cursor is also an `Iterator`. The line cursor never ends on its
//! own, so bound it with `take`/`take_while` or use `Line::walk`.

pub mod circle;
pub mod line;
pub mod rect_iter;

pub use circle::{radius_squared, Circle, CircleError, CircleIter};
pub use line::{Line, LineIter};
pub use rect_iter::RectIter;

use crate::core::vec2::Vec2;

/// A peek/advance cursor over grid positions.
pub trait Cursor {
    /// Position under the cursor. Only meaningful after `move_next` has
    /// returned `true`.
    fn current(&self) -> Vec2;

    /// Advance. Returns whether a position remains.
    fn move_next(&mut self) -> bool;
}

//! Rasterized Circles
//!
//! A circle is the set of offsets from its centre whose squared length is
//! within a per-radius threshold. Small radii use hand-tuned thresholds so
//! they look round on a grid instead of like diamonds or squares.

use std::iter::FusedIterator;
use serde::{Serialize, Deserialize};
use thiserror::Error;

use super::rect_iter::RectIter;
use super::Cursor;
use crate::core::rect::Rect;
use crate::core::vec2::Vec2;

/// Squared-distance thresholds for radii 0 through 6.
const SMALL_RADIUS_SQUARED: [i64; 7] = [0, 2, 5, 10, 18, 26, 38];

/// Largest squared distance from the centre still inside a circle of
/// `radius`.
#[inline]
pub fn radius_squared(radius: i32) -> i64 {
    match radius {
        0..=6 => SMALL_RADIUS_SQUARED[radius as usize],
        _ => {
            let r = radius as i64;
            r * r
        }
    }
}

/// Circle construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CircleError {
    /// Radius below zero.
    #[error("circle radius cannot be negative (got {0})")]
    NegativeRadius(i32),

    /// Radius too large for the bounding square to fit in `i32`.
    #[error("circle radius {0} is too large")]
    RadiusTooLarge(i32),
}

/// A circle on the grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawCircle")]
pub struct Circle {
    center: Vec2,
    radius: i32,
}

/// Unchecked wire form of `Circle`.
#[derive(Deserialize)]
struct RawCircle {
    center: Vec2,
    radius: i32,
}

impl TryFrom<RawCircle> for Circle {
    type Error = CircleError;

    fn try_from(raw: RawCircle) -> Result<Self, CircleError> {
        Circle::try_new(raw.center, raw.radius)
    }
}

impl Circle {
    /// Largest radius whose bounding square side, `radius * 2 + 1`, fits.
    pub const MAX_RADIUS: i32 = (i32::MAX - 1) / 2;

    /// Create a circle.
    ///
    /// # Panics
    ///
    /// If `radius` is negative or above `MAX_RADIUS`.
    pub fn new(center: Vec2, radius: i32) -> Self {
        match Self::try_new(center, radius) {
            Ok(circle) => circle,
            Err(e) => panic!("{e}"),
        }
    }

    /// Create a circle, rejecting radii outside `0..=MAX_RADIUS`.
    pub fn try_new(center: Vec2, radius: i32) -> Result<Self, CircleError> {
        if radius < 0 {
            return Err(CircleError::NegativeRadius(radius));
        }
        if radius > Self::MAX_RADIUS {
            return Err(CircleError::RadiusTooLarge(radius));
        }
        Ok(Self { center, radius })
    }

    /// Centre cell.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Radius in cells.
    #[inline]
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Smallest square enclosing the circle.
    pub fn bounds(&self) -> Rect {
        let size = self.radius * 2 + 1;
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            size,
            size,
        )
    }

    /// Whether `pos` is inside the filled circle.
    pub fn contains(&self, pos: Vec2) -> bool {
        (pos - self.center).length_squared() <= radius_squared(self.radius)
    }

    /// Whether `pos` is on the outermost ring, the cells `edge()` yields.
    pub fn is_edge(&self, pos: Vec2) -> bool {
        let length = (pos - self.center).length_squared();
        if length > radius_squared(self.radius) {
            return false;
        }
        self.radius == 0 || length >= radius_squared(self.radius - 1)
    }

    /// Cursor over every cell of the filled circle, row-major.
    pub fn iter(&self) -> CircleIter {
        CircleIter::new(self, false)
    }

    /// Cursor over the outermost ring only.
    pub fn edge(&self) -> CircleIter {
        CircleIter::new(self, true)
    }
}

impl IntoIterator for Circle {
    type Item = Vec2;
    type IntoIter = CircleIter;

    fn into_iter(self) -> CircleIter {
        self.iter()
    }
}

/// Cursor over a circle's cells.
///
/// Scans the bounding square around the origin and keeps offsets that pass
/// the distance test, translating them by the centre.
#[derive(Clone, Debug)]
pub struct CircleIter {
    bounds: RectIter,
    center: Vec2,
    outer: i64,
    inner: Option<i64>,
}

impl CircleIter {
    fn new(circle: &Circle, edge: bool) -> Self {
        let r = circle.radius;
        let size = r * 2 + 1;
        let inner = if edge && r > 0 {
            Some(radius_squared(r - 1))
        } else {
            None
        };

        Self {
            bounds: RectIter::new(Rect::new(-r, -r, size, size)),
            center: circle.center,
            outer: radius_squared(r),
            inner,
        }
    }
}

impl Cursor for CircleIter {
    #[inline]
    fn current(&self) -> Vec2 {
        self.bounds.current() + self.center
    }

    fn move_next(&mut self) -> bool {
        while self.bounds.move_next() {
            let length = self.bounds.current().length_squared();

            if length > self.outer {
                continue;
            }
            if matches!(self.inner, Some(inner) if length < inner) {
                continue;
            }

            return true;
        }

        false
    }
}

impl Iterator for CircleIter {
    type Item = Vec2;

    #[inline]
    fn next(&mut self) -> Option<Vec2> {
        self.move_next().then(|| self.current())
    }
}

impl FusedIterator for CircleIter {}

// =============================================================================
// TESTS
// =============================================================================

//! Bresenham Lines
//!
//! Integer-only line stepping. Each step moves one cell along the primary
//! axis (the one with the larger delta) and accumulates the secondary delta
//! as error; when twice the error reaches the primary delta the line also
//! steps along the secondary axis.

use std::iter::Take;
use serde::{Serialize, Deserialize};

use super::Cursor;
use crate::core::vec2::Vec2;

/// A line segment between two cells.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Line {
    start: Vec2,
    end: Vec2,
}

impl Line {
    /// Line from `start` to `end`.
    #[inline]
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// First cell, not yielded by the cursor.
    #[inline]
    pub fn start(&self) -> Vec2 {
        self.start
    }

    /// Last cell of `walk()`.
    #[inline]
    pub fn end(&self) -> Vec2 {
        self.end
    }

    /// Number of steps from `start` to `end`.
    #[inline]
    pub fn steps(&self) -> i32 {
        (self.end - self.start).king_length()
    }

    /// Unbounded cursor starting at `start`. The first position yielded is
    /// one step past `start`, and it keeps going past `end`.
    pub fn iter(&self) -> LineIter {
        LineIter::new(self.start, self.end)
    }

    /// The cells from the first step through `end`, inclusive.
    pub fn walk(&self) -> Take<LineIter> {
        self.iter().take(self.steps() as usize)
    }
}

/// Bresenham cursor. `move_next` always returns `true`; the caller decides
/// where the line stops.
#[derive(Clone, Debug)]
pub struct LineIter {
    current: Vec2,
    error: i32,
    primary: i32,
    secondary: i32,
    /// Unit step taken every move.
    primary_step: Vec2,
    /// Unit step taken when the error overflows.
    secondary_step: Vec2,
}

impl LineIter {
    /// Cursor parked at `start`, heading toward `end`.
    pub fn new(start: Vec2, end: Vec2) -> Self {
        let delta = end - start;

        let mut primary_step = Vec2::new(delta.x.signum(), 0);
        let mut secondary_step = Vec2::new(0, delta.y.signum());

        // Signs are in the steps now.
        let delta = delta.abs();

        let mut primary = delta.x;
        let mut secondary = delta.y;

        // Mostly vertical lines step along y.
        if delta.y > delta.x {
            std::mem::swap(&mut primary, &mut secondary);
            std::mem::swap(&mut primary_step, &mut secondary_step);
        }

        Self {
            current: start,
            error: 0,
            primary,
            secondary,
            primary_step,
            secondary_step,
        }
    }
}

impl Cursor for LineIter {
    #[inline]
    fn current(&self) -> Vec2 {
        self.current
    }

    fn move_next(&mut self) -> bool {
        self.current = self.current + self.primary_step;

        self.error += self.secondary;
        if self.error * 2 >= self.primary {
            self.current = self.current + self.secondary_step;
            self.error -= self.primary;
        }

        true
    }
}

impl Iterator for LineIter {
    type Item = Vec2;

    #[inline]
    fn next(&mut self) -> Option<Vec2> {
        self.move_next();
        Some(self.current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

// =============================================================================
// TESTS
// =============================================================================

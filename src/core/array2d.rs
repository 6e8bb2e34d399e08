//! Flat 2D Array
//!
//! A fixed-size grid of elements stored in a single row-major `Vec`.
//! Coordinates follow graphics convention: x (column) before y (row).

use std::fmt;
use std::ops::{Index, IndexMut};
use serde::{Serialize, Deserialize};
use thiserror::Error;

use super::rect::Rect;
use super::vec2::Vec2;
use crate::raster::rect_iter::RectIter;

/// Coordinate axis named in range errors.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Axis {
    /// Horizontal
    X,
    /// Vertical
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
        })
    }
}

/// Array access errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// A coordinate fell outside `0..limit`.
    #[error("{axis} is {value}, outside 0..{limit}")]
    OutOfRange {
        /// Offending axis
        axis: Axis,
        /// Offending coordinate
        value: i32,
        /// Exclusive upper bound on that axis
        limit: i32,
    },

    /// Stored dimensions are negative.
    #[error("array dimensions cannot be negative (got {width}x{height})")]
    NegativeSize {
        /// Stored width
        width: i32,
        /// Stored height
        height: i32,
    },

    /// Element count doesn't match `width * height`.
    #[error("{width}x{height} array needs {expected} elements, got {actual}")]
    LengthMismatch {
        /// Stored width
        width: i32,
        /// Stored height
        height: i32,
        /// `width * height`
        expected: usize,
        /// Elements actually stored
        actual: usize,
    },
}

/// Fixed-size 2D array of `T`, row-major.
///
/// Deserializing checks the shape, so `elements.len()` is always
/// `width * height`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(
    try_from = "RawArray2D<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct Array2D<T> {
    width: i32,
    height: i32,
    elements: Vec<T>,
}

/// Unchecked wire form of `Array2D`.
#[derive(Deserialize)]
struct RawArray2D<T> {
    width: i32,
    height: i32,
    elements: Vec<T>,
}

impl<T> TryFrom<RawArray2D<T>> for Array2D<T> {
    type Error = ArrayError;

    fn try_from(raw: RawArray2D<T>) -> Result<Self, ArrayError> {
        let RawArray2D { width, height, elements } = raw;
        if width < 0 || height < 0 {
            return Err(ArrayError::NegativeSize { width, height });
        }

        let expected = width as usize * height as usize;
        if elements.len() != expected {
            return Err(ArrayError::LengthMismatch {
                width,
                height,
                expected,
                actual: elements.len(),
            });
        }

        Ok(Self { width, height, elements })
    }
}

impl<T: Clone> Array2D<T> {
    /// Create a `width` x `height` array with every element set to `value`.
    ///
    /// # Panics
    ///
    /// If either dimension is negative.
    pub fn new(width: i32, height: i32, value: T) -> Self {
        let len = checked_len(width, height);
        Self {
            width,
            height,
            elements: vec![value; len],
        }
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: T) {
        self.elements.fill(value);
    }
}

impl<T> Array2D<T> {
    /// Create an array by calling `generator` once per position, in
    /// row-major order.
    ///
    /// # Panics
    ///
    /// If either dimension is negative.
    pub fn generated(width: i32, height: i32, generator: impl FnMut(Vec2) -> T) -> Self {
        let len = checked_len(width, height);
        let mut elements = Vec::with_capacity(len);
        elements.extend(RectIter::new(Rect::new(0, 0, width, height)).map(generator));
        Self {
            width,
            height,
            elements,
        }
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// `(width, height)` as a vector.
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Rect covering every valid position.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Element at (x, y).
    pub fn get(&self, x: i32, y: i32) -> Result<&T, ArrayError> {
        let index = self.index_of(x, y)?;
        Ok(&self.elements[index])
    }

    /// Mutable element at (x, y).
    pub fn get_mut(&mut self, x: i32, y: i32) -> Result<&mut T, ArrayError> {
        let index = self.index_of(x, y)?;
        Ok(&mut self.elements[index])
    }

    /// Element at `pos`.
    #[inline]
    pub fn at(&self, pos: Vec2) -> Result<&T, ArrayError> {
        self.get(pos.x, pos.y)
    }

    /// Replace the element at (x, y).
    pub fn set(&mut self, x: i32, y: i32, value: T) -> Result<(), ArrayError> {
        let index = self.index_of(x, y)?;
        self.elements[index] = value;
        Ok(())
    }

    /// Overwrite every element with `generator(pos)`, row-major.
    pub fn generate(&mut self, mut generator: impl FnMut(Vec2) -> T) {
        let bounds = self.bounds();
        for (element, pos) in self.elements.iter_mut().zip(bounds) {
            *element = generator(pos);
        }
    }

    /// Every valid position, row-major.
    #[inline]
    pub fn positions(&self) -> RectIter {
        self.bounds().iter()
    }

    /// Elements in row-major order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Mutable elements in row-major order.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.elements.iter_mut()
    }

    fn index_of(&self, x: i32, y: i32) -> Result<usize, ArrayError> {
        if x < 0 || x >= self.width {
            return Err(ArrayError::OutOfRange {
                axis: Axis::X,
                value: x,
                limit: self.width,
            });
        }
        if y < 0 || y >= self.height {
            return Err(ArrayError::OutOfRange {
                axis: Axis::Y,
                value: y,
                limit: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }
}

fn checked_len(width: i32, height: i32) -> usize {
    assert!(
        width >= 0 && height >= 0,
        "array dimensions cannot be negative (got {width}x{height})"
    );
    width as usize * height as usize
}

impl<T> Index<Vec2> for Array2D<T> {
    type Output = T;

    fn index(&self, pos: Vec2) -> &T {
        match self.index_of(pos.x, pos.y) {
            Ok(index) => &self.elements[index],
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<Vec2> for Array2D<T> {
    fn index_mut(&mut self, pos: Vec2) -> &mut T {
        match self.index_of(pos.x, pos.y) {
            Ok(index) => &mut self.elements[index],
            Err(e) => panic!("{e}"),
        }
    }
}

impl<'a, T> IntoIterator for &'a Array2D<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! Core grid primitives.
//!
//! Value types for positions, directions and regions, the flat 2D array,
//! the deterministic RNG, and grid hashing. Everything here is synchronous
//! and single-threaded.

pub mod array2d;
pub mod direction;
pub mod hash;
pub mod rect;
pub mod rng;
pub mod vec2;

// Re-export core types
pub use array2d::{Array2D, ArrayError, Axis};
pub use direction::Direction;
pub use hash::{hash_array, CellHash, GridHash, GridHasher};
pub use rect::Rect;
pub use rng::DeterministicRng;
pub use vec2::{Magnitude, Vec2};

//! # Grid Kernel
//!
//! Discrete 2D grid geometry for tile-based simulations: roguelike map
//! generation, field of view, pathing candidates.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        GRID KERNEL                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Value types and storage                   │
//! │  ├── vec2.rs     - Integer vector algebra                    │
//! │  ├── direction.rs- Nine compass directions                   │
//! │  ├── rect.rs     - Half-open rectangles                      │
//! │  ├── array2d.rs  - Flat row-major 2D array                   │
//! │  ├── rng.rs      - Seeded Xorshift128+ and distributions     │
//! │  └── hash.rs     - SHA-256 grid digests                      │
//! │                                                              │
//! │  raster/         - Position cursors                          │
//! │  ├── rect_iter.rs- Row-major rectangle scan                  │
//! │  ├── circle.rs   - Filled and edge-only circles              │
//! │  └── line.rs     - Bresenham line walk                       │
//! │                                                              │
//! │  demo.rs         - Room-and-cavern map generator             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Conventions
//!
//! - x grows east, y grows south; `Direction::N` is `(0, -1)`
//! - Rectangles include their left/top edge and exclude right/bottom
//! - Integer arithmetic throughout; floats only for `length` and sampling
//! - All randomness comes from a seeded `DeterministicRng`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod demo;
pub mod raster;

// Re-export commonly used types
pub use crate::core::array2d::{Array2D, ArrayError};
pub use crate::core::direction::Direction;
pub use crate::core::rect::Rect;
pub use crate::core::rng::DeterministicRng;
pub use crate::core::vec2::Vec2;
pub use raster::{Circle, Cursor, Line};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

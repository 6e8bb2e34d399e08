//! Grid Hashing for Verification
//!
//! SHA-256 digests of grid content, used to check that generation from a
//! seed is reproducible:
//! - Same seed and config must give the same digest
//! - Snapshots of generated maps can be compared without storing them

use sha2::{Sha256, Digest};

use super::array2d::Array2D;
use super::rect::Rect;
use super::vec2::Vec2;

/// Hash output type (256 bits / 32 bytes)
pub type GridHash = [u8; 32];

/// Deterministic hasher for grid values.
///
/// Wraps SHA-256 with little-endian helpers for kernel types.
/// Order of updates is critical for determinism.
pub struct GridHasher {
    hasher: Sha256,
}

impl GridHasher {
    /// Create a new hasher with domain separator.
    pub fn new(domain: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        Self { hasher }
    }

    /// Create hasher for 2D arrays.
    pub fn for_array() -> Self {
        Self::new(b"GRID_KERNEL_ARRAY_V1")
    }

    /// Update with raw bytes.
    #[inline]
    pub fn update_bytes(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    /// Update with a u8 value.
    #[inline]
    pub fn update_u8(&mut self, value: u8) {
        self.hasher.update([value]);
    }

    /// Update with a u32 value (little-endian).
    #[inline]
    pub fn update_u32(&mut self, value: u32) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with a u64 value (little-endian).
    #[inline]
    pub fn update_u64(&mut self, value: u64) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with an i32 value (little-endian).
    #[inline]
    pub fn update_i32(&mut self, value: i32) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with a boolean.
    #[inline]
    pub fn update_bool(&mut self, value: bool) {
        self.update_u8(value as u8);
    }

    /// Update with both components, x first.
    #[inline]
    pub fn update_vec2(&mut self, value: Vec2) {
        self.update_i32(value.x);
        self.update_i32(value.y);
    }

    /// Raw position then raw size.
    #[inline]
    pub fn update_rect(&mut self, value: Rect) {
        self.update_vec2(value.pos());
        self.update_vec2(value.size());
    }

    /// Finalize and return the hash.
    pub fn finalize(self) -> GridHash {
        self.hasher.finalize().into()
    }
}

/// Element types that can feed themselves into a `GridHasher`.
pub trait CellHash {
    /// Feed this value into `hasher`.
    fn hash_into(&self, hasher: &mut GridHasher);
}

impl CellHash for u8 {
    fn hash_into(&self, hasher: &mut GridHasher) {
        hasher.update_u8(*self);
    }
}

impl CellHash for bool {
    fn hash_into(&self, hasher: &mut GridHasher) {
        hasher.update_bool(*self);
    }
}

impl CellHash for i32 {
    fn hash_into(&self, hasher: &mut GridHasher) {
        hasher.update_i32(*self);
    }
}

impl CellHash for u32 {
    fn hash_into(&self, hasher: &mut GridHasher) {
        hasher.update_u32(*self);
    }
}

impl CellHash for Vec2 {
    fn hash_into(&self, hasher: &mut GridHasher) {
        hasher.update_vec2(*self);
    }
}

/// Digest of an array's dimensions and every element, row-major.
pub fn hash_array<T: CellHash>(array: &Array2D<T>) -> GridHash {
    let mut hasher = GridHasher::for_array();
    hasher.update_vec2(array.size());
    for cell in array {
        cell.hash_into(&mut hasher);
    }
    hasher.finalize()
}

/// Compute a simple hash of arbitrary data.
pub fn hash_bytes(data: &[u8]) -> GridHash {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

// =============================================================================
// TESTS
// =============================================================================

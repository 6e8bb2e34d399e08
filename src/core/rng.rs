//! Deterministic Random Number Generator
//!
//! Xorshift128+ as the uniform source, plus the non-uniform sampling that
//! procedural generation leans on: triangular and normal distributions,
//! probabilistic rounding, and random removal from lists.
//! Given the same seed, the sequence is identical on every platform.

use serde::{Serialize, Deserialize};
use sha2::{Sha256, Digest};

use super::rect::Rect;
use super::vec2::Vec2;

/// Deterministic PRNG using the Xorshift128+ algorithm.
///
/// # Example
///
/// ```
/// use grid_kernel::core::rng::DeterministicRng;
///
/// let mut a = DeterministicRng::new(12345);
/// let mut b = DeterministicRng::new(12345);
/// assert_eq!(a.range(100), b.range(100));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "RawRng")]
pub struct DeterministicRng {
    state: [u64; 2],
}

/// Unchecked wire form of `DeterministicRng`.
#[derive(Deserialize)]
struct RawRng {
    state: [u64; 2],
}

impl From<RawRng> for DeterministicRng {
    fn from(raw: RawRng) -> Self {
        Self {
            state: nonzero_state(raw.state),
        }
    }
}

/// Xorshift128+ is stuck at zero forever from an all-zero state.
#[inline]
fn nonzero_state(state: [u64; 2]) -> [u64; 2] {
    if state == [0, 0] {
        [1, 1]
    } else {
        state
    }
}

impl Default for DeterministicRng {
    fn default() -> Self {
        Self::new(0)
    }
}

impl DeterministicRng {
    /// Create a new RNG from a 64-bit seed.
    ///
    /// Uses SplitMix64 to initialize the internal state, ensuring
    /// good distribution even from weak seeds.
    pub fn new(seed: u64) -> Self {
        let mut s = seed;
        let state0 = splitmix64(&mut s);
        let state1 = splitmix64(&mut s);

        Self {
            state: nonzero_state([state0, state1]),
        }
    }

    /// Create an RNG for one named stage of generation.
    ///
    /// Stages seeded from the same world seed with different labels draw
    /// independent streams, so adding draws to one stage doesn't shift
    /// another.
    pub fn from_label(world_seed: u64, label: &str) -> Self {
        Self::new(derive_seed(world_seed, label))
    }

    /// Generate the next 64-bit random value.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(24) ^ s1 ^ (s1 << 16);
        self.state[1] = s1.rotate_left(37);

        result
    }

    /// Generate a random u32.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Uniform float in `[0, 1)` from the top 53 bits.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform integer in `[0, span)`. `span == 0` gives 0.
    #[inline]
    fn below(&mut self, span: u64) -> u64 {
        if span == 0 {
            return 0;
        }
        // Simple modulo - slight bias for very large spans, but acceptable
        self.next_u64() % span
    }

    /// Integer in `[0, max)`. `range(3)` returns 0, 1 or 2.
    #[inline]
    pub fn range(&mut self, max: i32) -> i32 {
        self.range_in(0, max)
    }

    /// Integer in `[min, max)`. Returns `min` if the range is empty.
    pub fn range_in(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (max as i64 - min as i64) as u64;
        (min as i64 + self.below(span) as i64) as i32
    }

    /// Integer in `[0, max]`.
    #[inline]
    pub fn inclusive(&mut self, max: i32) -> i32 {
        self.inclusive_in(0, max)
    }

    /// Integer in `[min, max]`. Returns `min` if `max < min`.
    pub fn inclusive_in(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (max as i64 - min as i64 + 1) as u64;
        (min as i64 + self.below(span) as i64) as i32
    }

    /// Float in `[0, 1)`.
    #[inline]
    pub fn float(&mut self) -> f64 {
        self.next_f64()
    }

    /// Float in `[0, max)`.
    #[inline]
    pub fn float_to(&mut self, max: f64) -> f64 {
        self.next_f64() * max
    }

    /// Float in `[min, max)`.
    #[inline]
    pub fn float_in(&mut self, min: f64, max: f64) -> f64 {
        self.next_f64() * (max - min) + min
    }

    /// Integer count from a fractional expected count.
    ///
    /// The fractional part is the chance of rounding up: `10.2` gives 10
    /// eighty percent of the time and 11 twenty percent. Useful below one,
    /// where plain flooring would always give zero.
    pub fn count_from_float(&mut self, range: f64) -> i32 {
        let count = range.floor();
        if self.float() < range - count {
            count as i32 + 1
        } else {
            count as i32
        }
    }

    /// Round to a neighbouring integer, rounding up with probability equal
    /// to the fractional part. `round(3.2)` gives 4 twenty percent of the
    /// time.
    pub fn round(&mut self, value: f64) -> i32 {
        let floor = value.floor();
        if self.float() < value - floor {
            floor as i32 + 1
        } else {
            floor as i32
        }
    }

    /// Standard normal sample (mean 0, deviation 1) via the Marsaglia polar
    /// method. Results may fall outside `[-1, 1]`.
    pub fn normal(&mut self) -> f64 {
        loop {
            let u = self.float_in(-1.0, 1.0);
            let v = self.float_in(-1.0, 1.0);
            let s = u * u + v * v;

            // s == 0 would divide by zero below.
            if s < 1.0 && s > 0.0 {
                return u * (-2.0 * s.ln() / s).sqrt();
            }
        }
    }

    /// Triangular integer in `[center - range, center + range]`, most
    /// likely at `center`. A poor man's bell curve.
    ///
    /// Picks a point in a `(range + 1)`-square and folds the lower-right
    /// triangle over onto the left side of the peak:
    ///
    /// ```text
    ///             *                 .-------.
    ///           * | *               |   R L L L
    ///         * | | | *      ->     | . R R L L
    ///       * | | | | | *           . . R R R L
    ///     --+-----+-----+--       . . . R R R R
    ///      -r     c     r
    /// ```
    ///
    /// # Panics
    ///
    /// If `range` is negative.
    pub fn triangle_int(&mut self, center: i32, range: i32) -> i32 {
        assert!(range >= 0, "triangle range must be zero or greater (got {range})");

        let x = self.inclusive(range);
        let y = self.inclusive(range);

        if x <= y {
            center + x
        } else {
            center - range - 1 + x
        }
    }

    /// `true` with probability `1 / chance`.
    #[inline]
    pub fn one_in(&mut self, chance: i32) -> bool {
        self.range(chance) == 0
    }

    /// `true` `chance` percent of the time.
    #[inline]
    pub fn percent(&mut self, chance: i32) -> bool {
        self.range(100) < chance
    }

    /// Increment `start` for as long as `one_in(chance)` keeps succeeding.
    pub fn taper(&mut self, mut start: i32, chance: i32) -> i32 {
        // one_in(1) always succeeds.
        if chance <= 1 {
            return start;
        }
        while self.one_in(chance) {
            start += 1;
        }
        start
    }

    /// Random position inside `rect` (half-open).
    pub fn vec_in_rect(&mut self, rect: Rect) -> Vec2 {
        Vec2::new(
            self.range_in(rect.left(), rect.right()),
            self.range_in(rect.top(), rect.bottom()),
        )
    }

    /// Select a random element from a slice.
    pub fn item<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            let idx = self.below(items.len() as u64) as usize;
            Some(&items[idx])
        }
    }

    /// Remove a random element in O(1). The last element takes its place,
    /// so order is not preserved.
    pub fn take<T>(&mut self, items: &mut Vec<T>) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.below(items.len() as u64) as usize;
        Some(items.swap_remove(idx))
    }

    /// Remove a random element, keeping the rest in order. O(n); use
    /// `take` when order doesn't matter.
    pub fn take_ordered<T>(&mut self, items: &mut Vec<T>) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.below(items.len() as u64) as usize;
        Some(items.remove(idx))
    }

    /// Shuffle a slice in place using Fisher-Yates algorithm.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        let len = slice.len();
        for i in (1..len).rev() {
            let j = self.below((i + 1) as u64) as usize;
            slice.swap(i, j);
        }
    }

    /// Get current state (for checkpointing/debugging).
    pub fn state(&self) -> [u64; 2] {
        self.state
    }

    /// Restore from saved state. An all-zero state is replaced the same
    /// way `new` replaces it.
    pub fn set_state(&mut self, state: [u64; 2]) {
        self.state = nonzero_state(state);
    }
}

/// SplitMix64 for seed initialization.
/// Produces well-distributed values from sequential seeds.
#[inline]
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Derive a stage seed from a world seed and a stage label.
pub fn derive_seed(world_seed: u64, label: &str) -> u64 {
    let mut hasher = Sha256::new();

    // Domain separator
    hasher.update(b"GRID_KERNEL_SEED_V1");
    hasher.update(world_seed.to_le_bytes());
    hasher.update(label.as_bytes());

    let hash = hasher.finalize();

    let mut seed = [0u8; 8];
    seed.copy_from_slice(&hash[..8]);
    u64::from_le_bytes(seed)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TRIALS: usize = 20_000;

    #[test]
    fn test_rng_determinism() {
        // Same seed must produce same sequence
        let mut rng1 = DeterministicRng::new(12345);
        let mut rng2 = DeterministicRng::new(12345);

        for _ in 0..1000 {
            assert_eq!(rng1.next_u64(), rng2.next_u64());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = DeterministicRng::new(12345);
        let mut rng2 = DeterministicRng::new(54321);

        // Very unlikely to match
        assert_ne!(rng1.next_u64(), rng2.next_u64());
    }

    #[test]
    fn test_range_bounds() {
        let mut rng = DeterministicRng::new(1234);

        for _ in 0..1000 {
            let val = rng.range(10);
            assert!((0..10).contains(&val));

            let val = rng.range_in(10, 100);
            assert!((10..100).contains(&val));

            let val = rng.range_in(-5, 5);
            assert!((-5..5).contains(&val));
        }

        // Empty ranges give the lower bound.
        assert_eq!(rng.range(0), 0);
        assert_eq!(rng.range_in(7, 7), 7);
        assert_eq!(rng.range_in(7, 3), 7);
        assert_eq!(rng.range(1), 0);
    }

    #[test]
    fn test_inclusive_hits_both_ends() {
        let mut rng = DeterministicRng::new(5678);
        let mut seen = [false; 3];

        for _ in 0..1000 {
            let val = rng.inclusive_in(2, 4);
            assert!((2..=4).contains(&val));
            seen[(val - 2) as usize] = true;
        }
        assert_eq!(seen, [true; 3]);

        for _ in 0..100 {
            assert!((0..=2).contains(&rng.inclusive(2)));
        }
        assert_eq!(rng.inclusive_in(5, 5), 5);
    }

    #[test]
    fn test_float_ranges() {
        let mut rng = DeterministicRng::new(9999);

        for _ in 0..1000 {
            let f = rng.float();
            assert!((0.0..1.0).contains(&f));

            let f = rng.float_to(3.0);
            assert!((0.0..3.0).contains(&f));

            let f = rng.float_in(-1.0, 1.0);
            assert!((-1.0..1.0).contains(&f));
        }
    }

    #[test]
    fn test_count_from_float_frequency() {
        let mut rng = DeterministicRng::new(42);
        let mut higher = 0;

        for _ in 0..TRIALS {
            let count = rng.count_from_float(10.2);
            assert!(count == 10 || count == 11);
            if count == 11 {
                higher += 1;
            }
        }

        let frequency = higher as f64 / TRIALS as f64;
        assert!((frequency - 0.2).abs() < 0.02, "frequency {frequency}");

        // Whole numbers never round up.
        for _ in 0..100 {
            assert_eq!(rng.count_from_float(3.0), 3);
        }
    }

    #[test]
    fn test_round_frequency() {
        let mut rng = DeterministicRng::new(7);
        let mut higher = 0;

        for _ in 0..TRIALS {
            let value = rng.round(3.75);
            assert!(value == 3 || value == 4);
            if value == 4 {
                higher += 1;
            }
        }

        let frequency = higher as f64 / TRIALS as f64;
        assert!((frequency - 0.75).abs() < 0.02, "frequency {frequency}");

        // Negative values round between their floor and floor + 1.
        for _ in 0..100 {
            let value = rng.round(-1.5);
            assert!(value == -2 || value == -1);
        }
    }

    #[test]
    fn test_normal_moments() {
        let mut rng = DeterministicRng::new(2024);
        let samples: Vec<f64> = (0..TRIALS).map(|_| rng.normal()).collect();

        let mean = samples.iter().sum::<f64>() / TRIALS as f64;
        let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / TRIALS as f64;

        assert!(mean.abs() < 0.05, "mean {mean}");
        assert!((variance - 1.0).abs() < 0.1, "variance {variance}");
        assert!(samples.iter().all(|s| s.is_finite()));
    }

    #[test]
    fn test_triangle_int_bounds_and_peak() {
        let mut rng = DeterministicRng::new(31337);
        let mut counts = [0usize; 9];

        for _ in 0..TRIALS {
            let value = rng.triangle_int(8, 4);
            assert!((4..=12).contains(&value), "{value}");
            counts[(value - 4) as usize] += 1;
        }

        // Peak at the centre, tapering to both ends.
        let peak = counts[4];
        assert!(counts.iter().all(|c| *c <= peak));
        assert!(counts[0] < counts[2] && counts[8] < counts[6]);

        assert_eq!(rng.triangle_int(5, 0), 5);
    }

    #[test]
    #[should_panic(expected = "zero or greater")]
    fn test_triangle_int_negative_range_panics() {
        DeterministicRng::new(1).triangle_int(0, -1);
    }

    #[test]
    fn test_one_in_and_percent() {
        let mut rng = DeterministicRng::new(11);
        assert!((0..100).all(|_| rng.one_in(1)));
        assert!((0..100).all(|_| rng.percent(100)));
        assert!((0..100).all(|_| !rng.percent(0)));

        let hits = (0..TRIALS).filter(|_| rng.one_in(4)).count();
        let frequency = hits as f64 / TRIALS as f64;
        assert!((frequency - 0.25).abs() < 0.02, "frequency {frequency}");
    }

    #[test]
    fn test_taper() {
        let mut rng = DeterministicRng::new(3);
        for _ in 0..100 {
            assert!(rng.taper(5, 3) >= 5);
        }
        assert_eq!(rng.taper(5, 1), 5);
    }

    #[test]
    fn test_vec_in_rect() {
        let mut rng = DeterministicRng::new(77);
        let rect = Rect::new(-3, 4, 5, 2);
        for _ in 0..500 {
            assert!(rect.contains(rng.vec_in_rect(rect)));
        }
    }

    #[test]
    fn test_take_removes_one() {
        let mut rng = DeterministicRng::new(19);
        let mut items: Vec<i32> = (0..10).collect();

        let taken = rng.take(&mut items).unwrap();
        assert_eq!(items.len(), 9);
        assert!(!items.contains(&taken));

        let mut empty: Vec<i32> = Vec::new();
        assert_eq!(rng.take(&mut empty), None);
    }

    #[test]
    fn test_take_ordered_preserves_order() {
        let mut rng = DeterministicRng::new(23);
        let mut items: Vec<i32> = (0..10).collect();

        while let Some(taken) = rng.take_ordered(&mut items) {
            assert!(!items.contains(&taken));
            assert!(items.windows(2).all(|w| w[0] < w[1]));
        }
        assert!(items.is_empty());
    }

    #[test]
    fn test_item() {
        let mut rng = DeterministicRng::new(5);
        let items = ['a', 'b', 'c'];
        for _ in 0..50 {
            assert!(items.contains(rng.item(&items).unwrap()));
        }
        let empty: [char; 0] = [];
        assert!(rng.item(&empty).is_none());
    }

    #[test]
    fn test_shuffle_determinism() {
        let mut rng1 = DeterministicRng::new(1111);
        let mut rng2 = DeterministicRng::new(1111);

        let mut arr1 = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let mut arr2 = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

        rng1.shuffle(&mut arr1);
        rng2.shuffle(&mut arr2);

        assert_eq!(arr1, arr2);

        let mut sorted = arr1;
        sorted.sort();
        assert_eq!(sorted, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_derive_seed() {
        let a = derive_seed(99, "rooms");
        assert_eq!(a, derive_seed(99, "rooms"));
        assert_ne!(a, derive_seed(99, "caverns"));
        assert_ne!(a, derive_seed(100, "rooms"));

        let mut r1 = DeterministicRng::from_label(99, "rooms");
        let mut r2 = DeterministicRng::new(a);
        assert_eq!(r1.next_u64(), r2.next_u64());
    }

    #[test]
    fn test_state_checkpoint() {
        let mut rng = DeterministicRng::new(5555);

        for _ in 0..50 {
            rng.next_u64();
        }

        let saved_state = rng.state();
        let next_values: Vec<u64> = (0..10).map(|_| rng.next_u64()).collect();

        rng.set_state(saved_state);

        for expected in next_values {
            assert_eq!(rng.next_u64(), expected);
        }
    }

    #[test]
    fn test_zero_state_is_replaced() {
        let mut rng = DeterministicRng::new(1);
        rng.set_state([0, 0]);
        assert_eq!(rng.state(), [1, 1]);
        assert_ne!(rng.next_u64(), 0);
        assert!(rng.normal().is_finite());

        let restored: DeterministicRng =
            serde_json::from_str(r#"{"state":[0,0]}"#).unwrap();
        assert_eq!(restored.state(), [1, 1]);
    }

    #[test]
    fn test_serde_roundtrip_keeps_stream() {
        let mut rng = DeterministicRng::new(77);
        rng.next_u64();
        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: DeterministicRng = serde_json::from_str(&json).unwrap();
        assert_eq!(rng.next_u64(), restored.next_u64());
    }
}

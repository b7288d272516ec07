use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, RngCore, SeedableRng, rand_core::impls};

const MULBERRY_INCREMENT: u32 = 0x6D2B_79F5;
const U32_RANGE: f64 = 4_294_967_296.0;

/// Small deterministic 32-bit generator (mulberry32). Every random decision
/// of the dungeon pipeline is drawn from this stream, so identical seeds
/// give identical maps on every platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Mulberry32 { state: seed }
    }

    /// Restarts the stream as if freshly constructed with `seed`.
    pub fn reseed(&mut self, seed: u32) {
        self.state = seed;
    }

    /// Current stream position. `Mulberry32::new(rng.state())` continues
    /// exactly where `rng` stands.
    pub fn state(&self) -> u32 {
        self.state
    }

    pub fn next_raw(&mut self) -> u32 {
        self.state = self.state.wrapping_add(MULBERRY_INCREMENT);

        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));

        t ^ (t >> 14)
    }

    /// A float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_raw()) / U32_RANGE
    }

    pub fn chance(&mut self, prob: f64) -> bool {
        self.next_f64() < prob
    }

    /// Uniform index in `0..len`. `len` must be positive.
    pub fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        // The float is strictly below 1.0, so the result stays below `len`.
        (self.next_f64() * len as f64).floor() as usize
    }

    /// Uniform integer in `lo..=hi`.
    pub fn range_inclusive(&mut self, lo: usize, hi: usize) -> usize {
        lo + self.index(hi - lo + 1)
    }

    /// Uniform pick. An empty slice yields `None` without advancing the stream.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }

        let idx = self.index(items.len());
        items.get(idx)
    }

    /// In-place Fisher-Yates shuffle walking from the back.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index(i + 1);
            items.swap(i, j);
        }
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.next_raw()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Mulberry32::new(u32::from_le_bytes(seed))
    }
}

/// Seed used when the caller does not provide one: wall clock time mixed
/// with thread-local entropy.
pub fn entropy_seed() -> u32 {
    let now_nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0_u128, |duration| duration.as_nanos());

    let noise: u32 = rand::rng().random();

    (now_nanos as u32) ^ ((now_nanos >> 32) as u32).rotate_left(11) ^ noise
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut rng_1 = Mulberry32::new(12345);
        let mut rng_2 = Mulberry32::new(12345);

        for _ in 0..100 {
            assert_eq!(rng_1.next_raw(), rng_2.next_raw());
        }
    }

    #[test]
    fn test_known_first_outputs() {
        let mut rng = Mulberry32::new(0);
        assert_eq!(rng.next_raw(), 1_144_304_738);
        assert_eq!(rng.next_raw(), 1_416_247);
        assert_eq!(rng.next_raw(), 958_946_056);

        let mut rng = Mulberry32::new(12345);
        assert_eq!(rng.next_raw(), 4_207_900_869);
        assert_eq!(rng.next_raw(), 1_317_490_944);
    }

    #[test]
    fn test_state_resumes_stream() {
        let mut rng = Mulberry32::new(99);
        rng.next_raw();
        rng.next_raw();

        let mut resumed = Mulberry32::new(rng.state());
        for _ in 0..20 {
            assert_eq!(rng.next_raw(), resumed.next_raw());
        }
    }

    #[test]
    fn test_reseed_restarts_stream() {
        let mut rng = Mulberry32::new(7);
        let first = (rng.next_raw(), rng.next_raw());

        rng.reseed(7);
        let second = (rng.next_raw(), rng.next_raw());

        assert_eq!(first, second);
    }

    #[test]
    fn test_next_f64_in_unit_range() {
        let mut rng = Mulberry32::new(99);

        for _ in 0..10_000 {
            let value = rng.next_f64();
            assert!((0.0..1.0).contains(&value), "{} out of range", value);
        }
    }

    #[test]
    fn test_index_is_roughly_uniform() {
        let mut rng = Mulberry32::new(2024);
        let mut buckets = [0_u32; 6];

        for _ in 0..60_000 {
            buckets[rng.index(6)] += 1;
        }

        for count in buckets {
            assert!(
                (9_000..11_000).contains(&count),
                "bucket count {} far from 10000",
                count
            );
        }
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = Mulberry32::new(5);
        let mut items = (0..12).collect::<Vec<_>>();

        rng.shuffle(&mut items);

        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn test_pick_empty_does_not_advance() {
        let mut rng = Mulberry32::new(31);
        let untouched = rng.clone();

        let empty: [usize; 0] = [];
        assert!(rng.pick(&empty).is_none());
        assert_eq!(rng, untouched);
    }

    #[test]
    fn test_seedable_rng_matches_new() {
        let mut from_seed = Mulberry32::from_seed(42_u32.to_le_bytes());
        let mut from_new = Mulberry32::new(42);

        assert_eq!(from_seed.next_u32(), from_new.next_raw());
    }

    #[test]
    fn test_range_inclusive_bounds() {
        let mut rng = Mulberry32::new(8);

        for _ in 0..1_000 {
            let value = rng.range_inclusive(1, 2);
            assert!(value == 1 || value == 2);
        }
    }
}

//! Deterministic shuffling keyed by a seed string.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed string produces an identical sequence
//! - **Portable**: The seed is the SHA-256 digest of the string's bytes and
//!   the stream is ChaCha8, so results do not depend on platform or hasher
//! - **Explicit Fisher–Yates**: The shuffle loop is written out; the only
//!   `rand` behaviour it depends on is `gen_range` over `u32`, which the
//!   pinned-value tests below guard against upstream changes
//!
//! ## Usage
//!
//! ```
//! use rust_patience::core::GameRng;
//!
//! let mut a = GameRng::from_seed_str("spider_0000000042");
//! let mut b = GameRng::from_seed_str("spider_0000000042");
//!
//! let mut left: Vec<u32> = (0..20).collect();
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//! assert_eq!(left, right);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

/// Largest shuffle number picked when the caller does not supply one.
pub const MAX_RANDOM_SHUFFLE_NUMBER: u64 = 999_999_999;

/// Seeded RNG used for deck shuffles.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create an RNG keyed on the exact bytes of `seed`.
    #[must_use]
    pub fn from_seed_str(seed: &str) -> Self {
        let digest = Sha256::digest(seed.as_bytes());
        let mut key = [0u8; 32];
        key.copy_from_slice(&digest);
        Self {
            inner: ChaCha8Rng::from_seed(key),
        }
    }

    /// Uniform index in `0..=max`.
    pub fn gen_index(&mut self, max: usize) -> usize {
        // u32 sampling keeps the stream identical on 32- and 64-bit targets
        let bound = u32::try_from(max).unwrap_or(u32::MAX);
        self.inner.gen_range(0..=bound) as usize
    }

    /// Fisher–Yates shuffle in place, walking from the last slot down.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.gen_index(i);
            slice.swap(i, j);
        }
    }
}

/// Pick a fresh shuffle number in `1..=MAX_RANDOM_SHUFFLE_NUMBER`.
#[must_use]
pub fn random_shuffle_number() -> u64 {
    rand::thread_rng().gen_range(1..=MAX_RANDOM_SHUFFLE_NUMBER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::from_seed_str("spider_0000000007");
        let mut rng2 = GameRng::from_seed_str("spider_0000000007");

        for _ in 0..100 {
            assert_eq!(rng1.gen_index(1000), rng2.gen_index(1000));
        }
    }

    /// Pins the stream for one seed. A failure here means saved shuffle
    /// numbers no longer replay the same deal.
    #[test]
    fn test_pinned_stream() {
        let mut rng = GameRng::from_seed_str("spider_0000000001");
        let seq: Vec<_> = (0..8).map(|_| rng.gen_index(1000)).collect();
        assert_eq!(seq, vec![92, 884, 693, 42, 345, 677, 134, 892]);
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::from_seed_str("spider_0000000001");
        let mut rng2 = GameRng::from_seed_str("spider_0000000002");

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_name_prefix_changes_stream() {
        let mut rng1 = GameRng::from_seed_str("spider_0000000001");
        let mut rng2 = GameRng::from_seed_str("scorpion_0000000001");

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_gen_index_bounds() {
        let mut rng = GameRng::from_seed_str("bounds");
        for max in 0..50 {
            for _ in 0..20 {
                assert!(rng.gen_index(max) <= max);
            }
        }
        assert_eq!(rng.gen_index(0), 0);
    }

    #[test]
    fn test_shuffle() {
        let mut rng = GameRng::from_seed_str("shuffle");
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Should be same elements, different order (very likely)
        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_shuffle_trivial_slices() {
        let mut rng = GameRng::from_seed_str("trivial");
        let mut empty: Vec<u8> = vec![];
        rng.shuffle(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![9];
        rng.shuffle(&mut one);
        assert_eq!(one, vec![9]);
    }

    #[test]
    fn test_random_shuffle_number_range() {
        for _ in 0..100 {
            let n = random_shuffle_number();
            assert!((1..=MAX_RANDOM_SHUFFLE_NUMBER).contains(&n));
        }
    }
}

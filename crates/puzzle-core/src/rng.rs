//! Seedable pseudorandom generator used by every puzzle generator.
//!
//! spec.md §5 requires that "the same RNG seed + same parameters produces
//! the same puzzle deterministically" — this rules out `rand::thread_rng()`
//! anywhere in generator code. `rand_chacha` gives a reproducible,
//! portable-across-platforms stream (the same crate `kenken-gen` in the
//! retrieval pack uses for exactly this reason).

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Thin wrapper exposing exactly the two operations spec.md §2 asks for:
/// `random_upto(n)` and in-place `shuffle`.
#[derive(Clone)]
pub struct PuzzleRng {
    inner: ChaCha8Rng,
}

impl PuzzleRng {
    pub fn from_seed_str(seed: &str) -> PuzzleRng {
        // Fold the seed string into a 32-byte seed deterministically.
        let mut bytes = [0u8; 32];
        for (i, b) in seed.bytes().enumerate() {
            bytes[i % 32] ^= b;
        }
        PuzzleRng { inner: ChaCha8Rng::from_seed(bytes) }
    }

    pub fn from_u64(seed: u64) -> PuzzleRng {
        PuzzleRng { inner: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Uniform integer in `[0, n)`. Panics if `n == 0`.
    pub fn random_upto(&mut self, n: u32) -> u32 {
        assert!(n > 0, "random_upto called with n == 0");
        // Rejection sampling against modulo bias, same approach `rand`'s
        // `gen_range` uses internally.
        let zone = u32::MAX - (u32::MAX % n);
        loop {
            let v = self.inner.next_u32();
            if v < zone {
                return v % n;
            }
        }
    }

    pub fn random_bool(&mut self) -> bool {
        self.random_upto(2) == 1
    }

    /// Fisher-Yates in-place shuffle.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        let len = slice.len();
        if len < 2 {
            return;
        }
        for i in (1..len).rev() {
            let j = self.random_upto((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = PuzzleRng::from_seed_str("123456");
        let mut b = PuzzleRng::from_seed_str("123456");
        let xs: Vec<u32> = (0..20).map(|_| a.random_upto(1000)).collect();
        let ys: Vec<u32> = (0..20).map(|_| b.random_upto(1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = PuzzleRng::from_seed_str("123456");
        let mut b = PuzzleRng::from_seed_str("654321");
        let xs: Vec<u32> = (0..20).map(|_| a.random_upto(1000)).collect();
        let ys: Vec<u32> = (0..20).map(|_| b.random_upto(1000)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = PuzzleRng::from_u64(42);
        let mut v: Vec<i32> = (0..50).collect();
        let orig = v.clone();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort();
        assert_eq!(sorted, orig);
    }

    #[test]
    fn random_upto_in_range() {
        let mut rng = PuzzleRng::from_u64(7);
        for _ in 0..1000 {
            assert!(rng.random_upto(17) < 17);
        }
    }
}

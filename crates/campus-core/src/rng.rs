//! Deterministic per-student RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each student gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (student_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive ids uniformly across the seed space.  Adding
//! students at the end of the roster therefore never changes the timetables
//! or names drawn for existing students.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::StudentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-student deterministic RNG.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and a student ID.
    pub fn new(global_seed: u64, student: StudentId) -> Self {
        let seed = global_seed ^ (student.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }

    /// Draw `k` elements from `slice` independently, with replacement.
    ///
    /// Returns an empty `Vec` if `slice` is empty.
    pub fn choose_multiple_with_replacement<T: Copy>(&mut self, slice: &[T], k: usize) -> Vec<T> {
        if slice.is_empty() {
            return Vec::new();
        }
        (0..k)
            .map(|_| slice[self.gen_range(0..slice.len())])
            .collect()
    }
}

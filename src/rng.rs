use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of integers in an inclusive range.
///
/// Calorie estimates are drawn through this so runs can be seeded and tests can
/// substitute a fixed sequence.
pub trait RangeRng {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32;
}

/// Unseeded, backed by the thread-local generator
#[derive(Debug, Default)]
pub struct ThreadRangeRng;

impl RangeRng for ThreadRangeRng {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Reproducible across runs for a given seed
#[derive(Debug)]
pub struct SeededRangeRng(StdRng);

impl SeededRangeRng {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RangeRng for SeededRangeRng {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.0.gen_range(low..=high)
    }
}

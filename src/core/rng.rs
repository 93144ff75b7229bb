//! RNG module - bounded random color selection
//!
//! The engine draws one random color index per spawned piece through the
//! `RandomSource` trait, so tests can substitute a fixed or sequenced fake.
//!
//! `SimpleRng` is a small LCG used as the default source.

/// A source of bounded random integers.
///
/// `next_in(min, max)` returns a value in `[min, max)`, `max` exclusive.
pub trait RandomSource {
    fn next_in(&mut self, min: u8, max_exclusive: u8) -> u8;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

impl RandomSource for SimpleRng {
    fn next_in(&mut self, min: u8, max_exclusive: u8) -> u8 {
        debug_assert!(min < max_exclusive);
        min + self.next_range(u32::from(max_exclusive - min)) as u8
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        // Different seeds should eventually diverge
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_next_in_stays_in_range() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            let value = rng.next_in(1, 8);
            assert!((1..8).contains(&value), "out of range: {}", value);
        }
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut a = SimpleRng::new(0);
        let mut b = SimpleRng::new(1);
        assert_eq!(a.next_u32(), b.next_u32());
    }
}

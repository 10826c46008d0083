//! RNG module - deterministic randomness for shape draws and bonuses
//!
//! A small LCG keeps the whole engine reproducible from a single seed:
//! the same seed produces the same shape stream and the same bonus
//! scatter, which the tests rely on.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq)]
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
    ///
    /// `max` must be non-zero.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// One-in-`n` coin flip; always false for `n == 0`
    pub fn chance(&mut self, n: u32) -> bool {
        n != 0 && self.next_range(n) == 0
    }

    /// Current internal state (for resuming a sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

//! RNG module - deterministic random source for spawning
//!
//! A simple LCG keeps tile placement reproducible: every consumer takes the
//! generator as a parameter, so a fixed seed replays an entire game. There is
//! no process-global random state.

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
        // Scale the high bits instead of taking a modulus: the low k bits
        // of an LCG have period 2^k (the lowest bit alternates every draw),
        // which would skew small ranges and power-of-two ranges.
        (((self.next_u32() >> 16) as u64 * max as u64) >> 16) as u32
    }

    /// One-in-`n` Bernoulli draw
    pub fn one_in(&mut self, n: u32) -> bool {
        self.next_range(n) == 0
    }
}

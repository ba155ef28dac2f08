//! RNG module - random sources for the generator
//!
//! The generator only ever needs "pick one of `len` candidates", so the seam is a
//! single-method trait. Two sources ship with the crate:
//!
//! - [`SimpleRng`]: a seeded LCG, deterministic across platforms (replays, tests, benches)
//! - [`RandAdapter`]: wraps any `rand` generator for non-reproducible runs

/// A source of random choices.
pub trait RandomSource {
    /// Index in `0..len`, roughly uniform. `len` is at least 1.
    ///
    /// The generator rejects out-of-range answers with `MazeError::Inconsistent`.
    fn next_index(&mut self, len: usize) -> usize;
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
    ///
    /// Approximately uniform: the modulo shifts each outcome's odds by at most 1/65536.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max <= 1 {
            return 0;
        }
        // The low bits of an LCG cycle with a short period; use the high half.
        (self.next_u32() >> 16) % max
    }

    /// Current RNG state (re-seeding with it continues the same stream)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SimpleRng {
    fn next_index(&mut self, len: usize) -> usize {
        let max = u32::try_from(len).unwrap_or(u32::MAX);
        self.next_range(max) as usize
    }
}

/// Adapts a `rand` generator to [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RandAdapter<R>(pub R);

impl RandAdapter<rand::rngs::ThreadRng> {
    /// Adapter over the thread-local generator.
    pub fn thread() -> Self {
        Self(rand::rng())
    }
}

impl<R: rand::RngCore> RandomSource for RandAdapter<R> {
    fn next_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        rand::Rng::random_range(&mut self.0, 0..len)
    }
}

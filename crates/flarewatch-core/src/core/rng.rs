//! Seedable pseudo-random number generator (xorshift64).
//! Deterministic, fast, no-std compatible. Shared by fleet generation
//! and visual effects so a single seed reproduces a whole session.

/// Seedable pseudo-random number generator (xorshift64).
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a random number in [0, upper_bound).
    pub fn next_int(&mut self, upper_bound: u32) -> u32 {
        (self.next_u64() % upper_bound as u64) as u32
    }

    /// Generate a random fraction in [0, 1) with 1/10000 resolution.
    pub fn next_fraction(&mut self) -> f64 {
        self.next_int(10000) as f64 / 10000.0
    }
}
